//! # Unified Data Management Framework
//!
//! UDMF defines uniform data types and channels to exchange data across
//! applications and devices. A data object ([`Data`]) holds records
//! ([`Record`]), each of which carries one or more entries of uniform data
//! structs (UDS), like [`PlainText`] or [`FileUri`].
//!
//! Interfaces are declared in `udmf.h`, `uds.h`, and `udmf_err_code.h`, and
//! provided by `libudmf.so`. Functions return `c_int` status values, see
//! [`ErrCode`].

use core::ffi::{c_char, c_int, c_uchar, c_uint, c_void};

use super::image::PixelmapNative;

/// Minimum size of key buffers passed to [`OH_Udmf_SetUnifiedData`].
pub const KEY_BUFFER_LEN: usize = 512;

pub type ErrCode = u32;

pub const E_OK: ErrCode = 0;
pub const ERR: ErrCode = 20400000;
pub const E_INVALID_PARAM: ErrCode = ERR + 1;

pub type ListenerStatus = u32;

pub const FINISHED: ListenerStatus = 0;
pub const PROCESSING: ListenerStatus = 1;
pub const CANCELED: ListenerStatus = 2;
pub const INNER_ERROR: ListenerStatus = 200;
pub const INVALID_PARAMETERS: ListenerStatus = 201;
pub const DATA_NOT_FOUND: ListenerStatus = 202;
pub const SYNC_FAILED: ListenerStatus = 203;
pub const COPY_FILE_FAILED: ListenerStatus = 204;

pub type Intention = u32;

pub const INTENTION_DRAG: Intention = 0;
pub const INTENTION_PASTEBOARD: Intention = 1;
pub const INTENTION_DATA_HUB: Intention = 2;
pub const INTENTION_SYSTEM_SHARE: Intention = 3;
pub const INTENTION_PICKER: Intention = 4;
pub const INTENTION_MENU: Intention = 5;

pub type ShareOption = u32;

pub const SHARE_OPTIONS_INVALID: ShareOption = 0;
pub const SHARE_OPTIONS_IN_APP: ShareOption = 1;
pub const SHARE_OPTIONS_CROSS_APP: ShareOption = 2;

pub type FileConflictOptions = u32;

pub const OVERWRITE: FileConflictOptions = 0;
pub const SKIP: FileConflictOptions = 1;

pub type ProgressIndicator = u32;

pub const NONE: ProgressIndicator = 0;
pub const DEFAULT: ProgressIndicator = 1;

opaque! {
    pub struct Data;
    pub struct Record;
    pub struct RecordProvider;
    pub struct Property;
    pub struct ProgressInfo;
    pub struct GetDataParams;
    pub struct Options;

    pub struct PlainText;
    pub struct Hyperlink;
    pub struct Html;
    pub struct AppItem;
    pub struct FileUri;
    pub struct PixelMap;
    pub struct ArrayBuffer;
    pub struct ContentForm;
}

pub type DataProgressListener =
    Option<unsafe extern "C" fn(progress_info: *mut ProgressInfo, data: *mut Data)>;
pub type DataFinalize = Option<unsafe extern "C" fn(context: *mut c_void)>;
pub type RecordProviderGetData =
    Option<unsafe extern "C" fn(context: *mut c_void, r#type: *const c_char) -> *mut c_void>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "udmf"))]
extern "C" {
    // Data
    pub fn OH_UdmfData_Create() -> *mut Data;
    pub fn OH_UdmfData_Destroy(this: *mut Data);
    pub fn OH_UdmfData_AddRecord(this: *mut Data, record: *mut Record) -> c_int;
    pub fn OH_UdmfData_HasType(this: *mut Data, r#type: *const c_char) -> bool;
    pub fn OH_UdmfData_GetTypes(this: *mut Data, count: *mut c_uint) -> *mut *mut c_char;
    pub fn OH_UdmfData_GetRecords(this: *mut Data, count: *mut c_uint) -> *mut *mut Record;
    pub fn OH_UdmfData_GetPrimaryPlainText(data: *mut Data, plain_text: *mut PlainText) -> c_int;
    pub fn OH_UdmfData_GetPrimaryHtml(data: *mut Data, html: *mut Html) -> c_int;
    pub fn OH_UdmfData_GetRecordCount(data: *mut Data) -> c_int;
    pub fn OH_UdmfData_GetRecord(data: *mut Data, index: c_uint) -> *mut Record;
    pub fn OH_UdmfData_IsLocal(data: *mut Data) -> bool;

    // Record providers
    pub fn OH_UdmfRecordProvider_Create() -> *mut RecordProvider;
    pub fn OH_UdmfRecordProvider_Destroy(provider: *mut RecordProvider) -> c_int;
    pub fn OH_UdmfRecordProvider_SetData(
        provider: *mut RecordProvider,
        context: *mut c_void,
        callback: RecordProviderGetData,
        finalize: DataFinalize,
    ) -> c_int;

    // Records
    pub fn OH_UdmfRecord_Create() -> *mut Record;
    pub fn OH_UdmfRecord_Destroy(this: *mut Record);
    pub fn OH_UdmfRecord_AddGeneralEntry(
        this: *mut Record,
        type_id: *const c_char,
        entry: *mut c_uchar,
        count: c_uint,
    ) -> c_int;
    pub fn OH_UdmfRecord_AddPlainText(this: *mut Record, plain_text: *mut PlainText) -> c_int;
    pub fn OH_UdmfRecord_AddHyperlink(this: *mut Record, hyperlink: *mut Hyperlink) -> c_int;
    pub fn OH_UdmfRecord_AddHtml(this: *mut Record, html: *mut Html) -> c_int;
    pub fn OH_UdmfRecord_AddAppItem(this: *mut Record, app_item: *mut AppItem) -> c_int;
    pub fn OH_UdmfRecord_AddFileUri(this: *mut Record, file_uri: *mut FileUri) -> c_int;
    pub fn OH_UdmfRecord_AddPixelMap(this: *mut Record, pixel_map: *mut PixelMap) -> c_int;
    pub fn OH_UdmfRecord_AddArrayBuffer(
        record: *mut Record,
        r#type: *const c_char,
        buffer: *mut ArrayBuffer,
    ) -> c_int;
    pub fn OH_UdmfRecord_AddContentForm(this: *mut Record, content_form: *mut ContentForm) -> c_int;
    pub fn OH_UdmfRecord_GetTypes(this: *mut Record, count: *mut c_uint) -> *mut *mut c_char;
    pub fn OH_UdmfRecord_GetGeneralEntry(
        this: *mut Record,
        type_id: *const c_char,
        entry: *mut *mut c_uchar,
        count: *mut c_uint,
    ) -> c_int;
    pub fn OH_UdmfRecord_GetPlainText(this: *mut Record, plain_text: *mut PlainText) -> c_int;
    pub fn OH_UdmfRecord_GetHyperlink(this: *mut Record, hyperlink: *mut Hyperlink) -> c_int;
    pub fn OH_UdmfRecord_GetHtml(this: *mut Record, html: *mut Html) -> c_int;
    pub fn OH_UdmfRecord_GetAppItem(this: *mut Record, app_item: *mut AppItem) -> c_int;
    pub fn OH_UdmfRecord_GetFileUri(this: *mut Record, file_uri: *mut FileUri) -> c_int;
    pub fn OH_UdmfRecord_GetPixelMap(this: *mut Record, pixel_map: *mut PixelMap) -> c_int;
    pub fn OH_UdmfRecord_SetProvider(
        this: *mut Record,
        types: *const *const c_char,
        count: c_uint,
        provider: *mut RecordProvider,
    ) -> c_int;
    pub fn OH_UdmfRecord_GetArrayBuffer(
        record: *mut Record,
        r#type: *const c_char,
        buffer: *mut ArrayBuffer,
    ) -> c_int;
    pub fn OH_UdmfRecord_GetContentForm(this: *mut Record, content_form: *mut ContentForm) -> c_int;

    // Properties
    pub fn OH_UdmfProperty_Create(unified_data: *mut Data) -> *mut Property;
    pub fn OH_UdmfProperty_Destroy(this: *mut Property);
    pub fn OH_UdmfProperty_GetTag(this: *mut Property) -> *const c_char;
    pub fn OH_UdmfProperty_GetTimestamp(this: *mut Property) -> i64;
    pub fn OH_UdmfProperty_GetShareOption(this: *mut Property) -> ShareOption;
    pub fn OH_UdmfProperty_GetExtrasIntParam(
        this: *mut Property,
        key: *const c_char,
        default_value: c_int,
    ) -> c_int;
    pub fn OH_UdmfProperty_GetExtrasStringParam(this: *mut Property, key: *const c_char)
        -> *const c_char;
    pub fn OH_UdmfProperty_SetTag(this: *mut Property, tag: *const c_char) -> c_int;
    pub fn OH_UdmfProperty_SetShareOption(this: *mut Property, option: ShareOption) -> c_int;
    pub fn OH_UdmfProperty_SetExtrasIntParam(this: *mut Property, key: *const c_char, param: c_int)
        -> c_int;
    pub fn OH_UdmfProperty_SetExtrasStringParam(
        this: *mut Property,
        key: *const c_char,
        param: *const c_char,
    ) -> c_int;

    // Options
    pub fn OH_UdmfOptions_Create() -> *mut Options;
    pub fn OH_UdmfOptions_Destroy(this: *mut Options);
    pub fn OH_UdmfOptions_GetKey(this: *mut Options) -> *const c_char;
    pub fn OH_UdmfOptions_SetKey(this: *mut Options, key: *const c_char) -> c_int;
    pub fn OH_UdmfOptions_GetIntention(this: *mut Options) -> Intention;
    pub fn OH_UdmfOptions_SetIntention(this: *mut Options, intention: Intention) -> c_int;
    pub fn OH_UdmfOptions_Reset(this: *mut Options) -> c_int;

    // Data channels
    pub fn OH_Udmf_GetUnifiedData(key: *const c_char, intention: Intention, unified_data: *mut Data)
        -> c_int;
    pub fn OH_Udmf_GetUnifiedDataByOptions(
        options: *mut Options,
        data_array: *mut *mut Data,
        data_size: *mut c_uint,
    ) -> c_int;
    pub fn OH_Udmf_SetUnifiedData(
        intention: Intention,
        unified_data: *mut Data,
        key: *mut c_char,
        key_len: c_uint,
    ) -> c_int;
    pub fn OH_Udmf_SetUnifiedDataByOptions(
        options: *mut Options,
        unified_data: *mut Data,
        key: *mut c_char,
        key_len: c_uint,
    ) -> c_int;
    pub fn OH_Udmf_UpdateUnifiedData(options: *mut Options, unified_data: *mut Data) -> c_int;
    pub fn OH_Udmf_DeleteUnifiedData(
        options: *mut Options,
        data_array: *mut *mut Data,
        data_size: *mut c_uint,
    ) -> c_int;
    pub fn OH_Udmf_DestroyDataArray(data_array: *mut *mut Data, data_size: c_uint);

    // Progress
    pub fn OH_UdmfProgressInfo_GetProgress(progress_info: *mut ProgressInfo) -> c_int;
    pub fn OH_UdmfProgressInfo_GetStatus(progress_info: *mut ProgressInfo) -> c_int;
    pub fn OH_UdmfGetDataParams_Create() -> *mut GetDataParams;
    pub fn OH_UdmfGetDataParams_Destroy(this: *mut GetDataParams);
    pub fn OH_UdmfGetDataParams_SetDestUri(params: *mut GetDataParams, dest_uri: *const c_char);
    pub fn OH_UdmfGetDataParams_SetFileConflictOptions(
        params: *mut GetDataParams,
        options: FileConflictOptions,
    );
    pub fn OH_UdmfGetDataParams_SetProgressIndicator(
        params: *mut GetDataParams,
        progress_indicator: ProgressIndicator,
    );
    pub fn OH_UdmfGetDataParams_SetDataProgressListener(
        params: *mut GetDataParams,
        data_progress_listener: DataProgressListener,
    );
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "udmf"))]
extern "C" {
    // Plain text
    pub fn OH_UdsPlainText_Create() -> *mut PlainText;
    pub fn OH_UdsPlainText_Destroy(this: *mut PlainText);
    pub fn OH_UdsPlainText_GetType(this: *mut PlainText) -> *const c_char;
    pub fn OH_UdsPlainText_GetContent(this: *mut PlainText) -> *const c_char;
    pub fn OH_UdsPlainText_GetAbstract(this: *mut PlainText) -> *const c_char;
    pub fn OH_UdsPlainText_SetContent(this: *mut PlainText, content: *const c_char) -> c_int;
    pub fn OH_UdsPlainText_SetAbstract(this: *mut PlainText, r#abstract: *const c_char) -> c_int;

    // Hyperlink
    pub fn OH_UdsHyperlink_Create() -> *mut Hyperlink;
    pub fn OH_UdsHyperlink_Destroy(this: *mut Hyperlink);
    pub fn OH_UdsHyperlink_GetType(this: *mut Hyperlink) -> *const c_char;
    pub fn OH_UdsHyperlink_GetUrl(this: *mut Hyperlink) -> *const c_char;
    pub fn OH_UdsHyperlink_GetDescription(this: *mut Hyperlink) -> *const c_char;
    pub fn OH_UdsHyperlink_SetUrl(this: *mut Hyperlink, url: *const c_char) -> c_int;
    pub fn OH_UdsHyperlink_SetDescription(this: *mut Hyperlink, description: *const c_char)
        -> c_int;

    // HTML
    pub fn OH_UdsHtml_Create() -> *mut Html;
    pub fn OH_UdsHtml_Destroy(this: *mut Html);
    pub fn OH_UdsHtml_GetType(this: *mut Html) -> *const c_char;
    pub fn OH_UdsHtml_GetContent(this: *mut Html) -> *const c_char;
    pub fn OH_UdsHtml_GetPlainContent(this: *mut Html) -> *const c_char;
    pub fn OH_UdsHtml_SetContent(this: *mut Html, content: *const c_char) -> c_int;
    pub fn OH_UdsHtml_SetPlainContent(this: *mut Html, plain_content: *const c_char) -> c_int;

    // Application items
    pub fn OH_UdsAppItem_Create() -> *mut AppItem;
    pub fn OH_UdsAppItem_Destroy(this: *mut AppItem);
    pub fn OH_UdsAppItem_GetType(this: *mut AppItem) -> *const c_char;
    pub fn OH_UdsAppItem_GetId(this: *mut AppItem) -> *const c_char;
    pub fn OH_UdsAppItem_GetName(this: *mut AppItem) -> *const c_char;
    pub fn OH_UdsAppItem_GetIconId(this: *mut AppItem) -> *const c_char;
    pub fn OH_UdsAppItem_GetLabelId(this: *mut AppItem) -> *const c_char;
    pub fn OH_UdsAppItem_GetBundleName(this: *mut AppItem) -> *const c_char;
    pub fn OH_UdsAppItem_GetAbilityName(this: *mut AppItem) -> *const c_char;
    pub fn OH_UdsAppItem_SetId(this: *mut AppItem, app_id: *const c_char) -> c_int;
    pub fn OH_UdsAppItem_SetName(this: *mut AppItem, app_name: *const c_char) -> c_int;
    pub fn OH_UdsAppItem_SetIconId(this: *mut AppItem, app_icon_id: *const c_char) -> c_int;
    pub fn OH_UdsAppItem_SetLabelId(this: *mut AppItem, app_label_id: *const c_char) -> c_int;
    pub fn OH_UdsAppItem_SetBundleName(this: *mut AppItem, bundle_name: *const c_char) -> c_int;
    pub fn OH_UdsAppItem_SetAbilityName(this: *mut AppItem, ability_name: *const c_char) -> c_int;

    // File URIs
    pub fn OH_UdsFileUri_Create() -> *mut FileUri;
    pub fn OH_UdsFileUri_Destroy(this: *mut FileUri);
    pub fn OH_UdsFileUri_GetType(this: *mut FileUri) -> *const c_char;
    pub fn OH_UdsFileUri_GetFileUri(this: *mut FileUri) -> *const c_char;
    pub fn OH_UdsFileUri_GetFileType(this: *mut FileUri) -> *const c_char;
    pub fn OH_UdsFileUri_SetFileUri(this: *mut FileUri, file_uri: *const c_char) -> c_int;
    pub fn OH_UdsFileUri_SetFileType(this: *mut FileUri, file_type: *const c_char) -> c_int;

    // Pixel maps
    pub fn OH_UdsPixelMap_Create() -> *mut PixelMap;
    pub fn OH_UdsPixelMap_Destroy(this: *mut PixelMap);
    pub fn OH_UdsPixelMap_GetType(this: *mut PixelMap) -> *const c_char;
    pub fn OH_UdsPixelMap_GetPixelMap(this: *mut PixelMap, pixelmap_native: *mut PixelmapNative);
    pub fn OH_UdsPixelMap_SetPixelMap(this: *mut PixelMap, pixelmap_native: *mut PixelmapNative)
        -> c_int;

    // Array buffers
    pub fn OH_UdsArrayBuffer_Create() -> *mut ArrayBuffer;
    pub fn OH_UdsArrayBuffer_Destroy(buffer: *mut ArrayBuffer) -> c_int;
    pub fn OH_UdsArrayBuffer_SetData(buffer: *mut ArrayBuffer, data: *mut c_uchar, len: c_uint)
        -> c_int;
    pub fn OH_UdsArrayBuffer_GetData(
        buffer: *mut ArrayBuffer,
        data: *mut *mut c_uchar,
        len: *mut c_uint,
    ) -> c_int;

    // Content forms
    pub fn OH_UdsContentForm_Create() -> *mut ContentForm;
    pub fn OH_UdsContentForm_Destroy(this: *mut ContentForm);
    pub fn OH_UdsContentForm_GetType(this: *mut ContentForm) -> *const c_char;
    pub fn OH_UdsContentForm_GetThumbData(
        this: *mut ContentForm,
        thumb_data: *mut *mut c_uchar,
        len: *mut c_uint,
    ) -> c_int;
    pub fn OH_UdsContentForm_GetDescription(this: *mut ContentForm) -> *const c_char;
    pub fn OH_UdsContentForm_GetTitle(this: *mut ContentForm) -> *const c_char;
    pub fn OH_UdsContentForm_GetAppIcon(
        this: *mut ContentForm,
        app_icon: *mut *mut c_uchar,
        len: *mut c_uint,
    ) -> c_int;
    pub fn OH_UdsContentForm_GetAppName(this: *mut ContentForm) -> *const c_char;
    pub fn OH_UdsContentForm_GetLinkUri(this: *mut ContentForm) -> *const c_char;
    pub fn OH_UdsContentForm_SetThumbData(
        this: *mut ContentForm,
        thumb_data: *const c_uchar,
        len: c_uint,
    ) -> c_int;
    pub fn OH_UdsContentForm_SetDescription(this: *mut ContentForm, description: *const c_char)
        -> c_int;
    pub fn OH_UdsContentForm_SetTitle(this: *mut ContentForm, title: *const c_char) -> c_int;
    pub fn OH_UdsContentForm_SetAppIcon(
        this: *mut ContentForm,
        app_icon: *const c_uchar,
        len: c_uint,
    ) -> c_int;
    pub fn OH_UdsContentForm_SetAppName(this: *mut ContentForm, app_name: *const c_char) -> c_int;
    pub fn OH_UdsContentForm_SetLinkUri(this: *mut ContentForm, link_uri: *const c_char) -> c_int;
}
