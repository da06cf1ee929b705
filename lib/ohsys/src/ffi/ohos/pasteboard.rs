//! # Pasteboard
//!
//! System clipboard access. Data is exchanged as UDMF data objects (see
//! [`udmf::Data`](super::udmf::Data)), changes are reported to observers.
//!
//! Interfaces are declared in `oh_pasteboard.h` and
//! `oh_pasteboard_err_code.h`, and provided by `libpasteboard.so`. Functions
//! return `c_int` status values, see [`ErrCode`].

use core::ffi::{c_char, c_int, c_uint, c_void};

use super::udmf::Data as UdmfData;

pub type ErrCode = u32;

pub const ERR_OK: ErrCode = 0;
pub const ERR_PERMISSION_ERROR: ErrCode = 201;
pub const ERR_INVALID_PARAMETER: ErrCode = 401;
pub const ERR_DEVICE_NOT_SUPPORTED: ErrCode = 801;
pub const ERR_INNER_ERROR: ErrCode = 12900000;
pub const ERR_BUSY: ErrCode = 12900003;

pub type NotifyType = u32;

pub const NOTIFY_LOCAL_DATA_CHANGE: NotifyType = 1;
pub const NOTIFY_REMOTE_DATA_CHANGE: NotifyType = 2;

pub type FileConflictOption = u32;

pub const OVERWRITE: FileConflictOption = 0;
pub const SKIP: FileConflictOption = 1;

pub type ProgressIndicator = u32;

pub const NONE: ProgressIndicator = 0;
pub const DEFAULT: ProgressIndicator = 1;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ProgressInfo {
    pub progress: c_int,
}

pub type ProgressNotify = Option<unsafe extern "C" fn(progress_info: ProgressInfo)>;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressListener {
    pub callback: ProgressNotify,
}

pub type ProgressCancel = Option<unsafe extern "C" fn()>;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct ProgressSignal {
    pub cancel: ProgressCancel,
}

/// Parameters of [`OH_Pasteboard_GetDataWithProgress`]. `dest_uri` names
/// the directory file data is copied to.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct GetDataParams {
    pub dest_uri: Option<core::ptr::NonNull<c_char>>,
    pub dest_uri_len: c_uint,
    pub file_conflict_option: FileConflictOption,
    pub progress_indicator: ProgressIndicator,
    pub progress_listener: ProgressListener,
    pub progress_signal: ProgressSignal,
}

pub type Notify = Option<unsafe extern "C" fn(context: *mut c_void, r#type: NotifyType)>;
pub type Finalize = Option<unsafe extern "C" fn(context: *mut c_void)>;

opaque! {
    pub struct Observer;
    pub struct Pasteboard;
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "pasteboard"))]
extern "C" {
    pub fn OH_PasteboardObserver_Create() -> *mut Observer;
    pub fn OH_PasteboardObserver_Destroy(observer: *mut Observer) -> c_int;
    pub fn OH_PasteboardObserver_SetData(
        observer: *mut Observer,
        context: *mut c_void,
        callback: Notify,
        finalize: Finalize,
    ) -> c_int;

    pub fn OH_Pasteboard_Create() -> *mut Pasteboard;
    pub fn OH_Pasteboard_Destroy(pasteboard: *mut Pasteboard);
    pub fn OH_Pasteboard_Subscribe(
        pasteboard: *mut Pasteboard,
        r#type: c_int,
        observer: *const Observer,
    ) -> c_int;
    pub fn OH_Pasteboard_Unsubscribe(
        pasteboard: *mut Pasteboard,
        r#type: c_int,
        observer: *const Observer,
    ) -> c_int;
    pub fn OH_Pasteboard_IsRemoteData(pasteboard: *mut Pasteboard) -> bool;
    pub fn OH_Pasteboard_GetDataSource(
        pasteboard: *mut Pasteboard,
        source: *mut c_char,
        len: c_uint,
    ) -> c_int;
    pub fn OH_Pasteboard_HasType(pasteboard: *mut Pasteboard, r#type: *const c_char) -> bool;
    pub fn OH_Pasteboard_HasData(pasteboard: *mut Pasteboard) -> bool;
    pub fn OH_Pasteboard_GetData(pasteboard: *mut Pasteboard, status: *mut c_int) -> *mut UdmfData;
    pub fn OH_Pasteboard_SetData(pasteboard: *mut Pasteboard, data: *mut UdmfData) -> c_int;
    pub fn OH_Pasteboard_ClearData(pasteboard: *mut Pasteboard) -> c_int;
    pub fn OH_Pasteboard_GetMimeTypes(pasteboard: *mut Pasteboard, count: *mut c_uint)
        -> *mut *mut c_char;
    pub fn OH_Pasteboard_GetChangeCount(pasteboard: *mut Pasteboard) -> u32;
    pub fn OH_Pasteboard_GetDataWithProgress(
        pasteboard: *mut Pasteboard,
        params: *mut GetDataParams,
        status: *mut c_int,
    ) -> *mut UdmfData;
}
