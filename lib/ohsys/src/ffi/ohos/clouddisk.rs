//! # Cloud Disk Manager
//!
//! Cloud disk applications register sync folders with the system, report the
//! sync state of files in them, and consume a journal of local changes.
//! Every change is tagged with an update sequence number (USN), which allows
//! incremental retrieval via [`OH_CloudDisk_GetSyncFolderChanges`].
//!
//! Interfaces are declared in `oh_cloud_disk_manager.h` and
//! `cloud_disk_error_code.h`, and provided by `libohclouddiskmanager.so`.

use core::ffi::c_char;
use core::ptr::NonNull;

pub type ErrorCode = u32;

pub const OK: ErrorCode = 0;
pub const PERMISSION_DENIED: ErrorCode = 201;
pub const NOT_SUPPORTED: ErrorCode = 801;
pub const INVALID_ARG: ErrorCode = 34400001;
pub const SYNC_FOLDER_PATH_UNAUTHORIZED: ErrorCode = 34400002;
pub const IPC_FAILED: ErrorCode = 34400003;
pub const SYNC_FOLDER_LIMIT_EXCEEDED: ErrorCode = 34400004;
pub const CONFLICT_THIS_APP: ErrorCode = 34400005;
pub const CONFLICT_OTHER_APP: ErrorCode = 34400006;
pub const REGISTER_SYNC_FOLDER_FAILED: ErrorCode = 34400007;
pub const SYNC_FOLDER_NOT_REGISTERED: ErrorCode = 34400008;
pub const UNREGISTER_SYNC_FOLDER_FAILED: ErrorCode = 34400009;
pub const SYNC_FOLDER_PATH_NOT_EXIST: ErrorCode = 34400010;
pub const LISTENER_NOT_REGISTERED: ErrorCode = 34400011;
pub const LISTENER_ALREADY_REGISTERED: ErrorCode = 34400012;
pub const INVALID_CHANGE_SEQUENCE: ErrorCode = 34400013;
pub const TRY_AGAIN: ErrorCode = 34400014;
pub const NOT_ALLOWED: ErrorCode = 34400015;

pub type SyncState = u32;

pub const IDLE: SyncState = 0;
pub const SYNCING: SyncState = 1;
pub const SYNC_SUCCEEDED: SyncState = 2;
pub const SYNC_FAILED: SyncState = 3;
pub const SYNC_CANCELED: SyncState = 4;
pub const SYNC_CONFLICTED: SyncState = 5;

pub type OperationType = u32;

pub const CREATE: OperationType = 0;
pub const DELETE: OperationType = 1;
pub const MOVE_FROM: OperationType = 2;
pub const MOVE_TO: OperationType = 3;
pub const CLOSE_WRITE: OperationType = 4;
pub const SYNC_FOLDER_INVALID: OperationType = 5;

pub type ErrorReason = u32;

pub const INVALID_ARGUMENT: ErrorReason = 0;
pub const NO_SUCH_FILE: ErrorReason = 1;
pub const NO_SPACE_LEFT: ErrorReason = 2;
pub const OUT_OF_RANGE: ErrorReason = 3;
pub const NO_SYNC_STATE: ErrorReason = 4;

pub type SyncFolderState = u32;

pub const INACTIVE: SyncFolderState = 0;
pub const ACTIVE: SyncFolderState = 1;

/// Path string with explicit length. The string is not NUL-terminated.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PathInfo {
    pub value: Option<NonNull<c_char>>,
    pub length: usize,
}

pub type FileIdInfo = PathInfo;
pub type SyncFolderPath = PathInfo;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FileSyncState {
    pub file_path_info: PathInfo,
    pub sync_state: SyncState,
}

/// Journal entry of a change in a sync folder.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ChangeData {
    pub update_sequence_number: u64,
    pub file_id: FileIdInfo,
    pub parent_file_id: FileIdInfo,
    pub relative_path_info: PathInfo,
    pub operation_type: OperationType,
    pub size: u64,
    pub mtime: u64,
    pub time_stamp: u64,
}

/// Batch of journal entries. `buffer_length` entries trail the header.
#[repr(C)]
#[derive(Debug)]
pub struct ChangesResult {
    pub next_usn: u64,
    pub is_eof: bool,
    pub buffer_length: usize,
    pub change_datas: [ChangeData; 0],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FailedList {
    pub path_info: PathInfo,
    pub error_reason: ErrorReason,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ResultList {
    pub path_info: PathInfo,
    pub is_success: bool,
    pub sync_state: SyncState,
    pub error_reason: ErrorReason,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DisplayNameInfo {
    pub display_name_res_id: u32,
    pub custom_alias: Option<NonNull<c_char>>,
    pub custom_alias_length: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SyncFolder {
    pub path: SyncFolderPath,
    pub state: SyncFolderState,
    pub display_name_info: DisplayNameInfo,
}

pub type SyncFolderChangesCallback = Option<
    unsafe extern "C" fn(
        sync_folder_path: SyncFolderPath,
        change_datas: *const ChangeData,
        buffer_length: usize,
    ),
>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohclouddiskmanager"))]
extern "C" {
    pub fn OH_CloudDisk_RegisterSyncFolderChanges(
        sync_folder_path: SyncFolderPath,
        callback: SyncFolderChangesCallback,
    ) -> ErrorCode;
    pub fn OH_CloudDisk_UnregisterSyncFolderChanges(sync_folder_path: SyncFolderPath) -> ErrorCode;
    pub fn OH_CloudDisk_GetSyncFolderChanges(
        sync_folder_path: SyncFolderPath,
        start_usn: u64,
        count: usize,
        changes_result: *mut *mut ChangesResult,
    ) -> ErrorCode;
    pub fn OH_CloudDisk_SetFileSyncStates(
        sync_folder_path: SyncFolderPath,
        file_sync_states: *const FileSyncState,
        buffer_length: usize,
        failed_lists: *mut *mut FailedList,
        failed_count: *mut usize,
    ) -> ErrorCode;
    pub fn OH_CloudDisk_GetFileSyncStates(
        sync_folder_path: SyncFolderPath,
        paths: *const PathInfo,
        buffer_length: usize,
        result_lists: *mut *mut ResultList,
        result_count: *mut usize,
    ) -> ErrorCode;
    pub fn OH_CloudDisk_RegisterSyncFolder(sync_folder: *const SyncFolder) -> ErrorCode;
    pub fn OH_CloudDisk_UnregisterSyncFolder(sync_folder_path: SyncFolderPath) -> ErrorCode;
    pub fn OH_CloudDisk_ActiveSyncFolder(sync_folder_path: SyncFolderPath) -> ErrorCode;
    pub fn OH_CloudDisk_DeactiveSyncFolder(sync_folder_path: SyncFolderPath) -> ErrorCode;
    pub fn OH_CloudDisk_GetSyncFolders(sync_folders: *mut *mut SyncFolder, count: *mut usize)
        -> ErrorCode;
    pub fn OH_CloudDisk_UpdateCustomAlias(
        sync_folder_path: SyncFolderPath,
        custom_alias: *const c_char,
        custom_alias_length: usize,
    ) -> ErrorCode;
}
