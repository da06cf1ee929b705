//! # Application Events
//!
//! Writes application events with typed parameters, and observes events of
//! the own process through watchers. Processors forward events to data
//! processing services according to a report policy.
//!
//! Parameters are collected in a [`ParamList`]. Every `OH_HiAppEvent_Add*`
//! function returns the list it was passed, so calls can be chained.
//!
//! Interfaces are declared in `hiappevent.h`, `hiappevent_cfg.h`,
//! `hiappevent_event.h` and `hiappevent_param.h`, and provided by
//! `libhiappevent_ndk.z.so`.

use core::ffi::{c_char, c_int, CStr};
use core::ptr::NonNull;

pub type ErrorCode = i32;

pub const SUCCESS: ErrorCode = 0;
pub const INVALID_PARAM_VALUE_LENGTH: ErrorCode = 4;
pub const PROCESSOR_IS_NULL: ErrorCode = -7;
pub const PROCESSOR_NOT_FOUND: ErrorCode = -8;
pub const INVALID_PARAM_VALUE: ErrorCode = -9;
pub const EVENT_CONFIG_IS_NULL: ErrorCode = -10;
pub const OPERATE_FAILED: ErrorCode = -100;
pub const INVALID_UID: ErrorCode = -200;

pub type EventType = u32;

pub const FAULT: EventType = 1;
pub const STATISTIC: EventType = 2;
pub const SECURITY: EventType = 3;
pub const BEHAVIOR: EventType = 4;

/// Configuration item switching event logging off.
pub const DISABLE: &CStr = c"disable";
/// Configuration item limiting the event storage directory size.
pub const MAX_STORAGE: &CStr = c"max_storage";

pub const EVENT_USER_LOGIN: &CStr = c"hiappevent.user_login";
pub const EVENT_USER_LOGOUT: &CStr = c"hiappevent.user_logout";
pub const EVENT_DISTRIBUTED_SERVICE_START: &CStr = c"hiappevent.distributed_service_start";
pub const EVENT_APP_CRASH: &CStr = c"APP_CRASH";
pub const EVENT_APP_FREEZE: &CStr = c"APP_FREEZE";
pub const EVENT_APP_LAUNCH: &CStr = c"APP_LAUNCH";
pub const EVENT_SCROLL_JANK: &CStr = c"SCROLL_JANK";
pub const EVENT_CPU_USAGE_HIGH: &CStr = c"CPU_USAGE_HIGH";
pub const EVENT_BATTERY_USAGE: &CStr = c"BATTERY_USAGE";
pub const EVENT_RESOURCE_OVERLIMIT: &CStr = c"RESOURCE_OVERLIMIT";
pub const EVENT_ADDRESS_SANITIZER: &CStr = c"ADDRESS_SANITIZER";
pub const EVENT_MAIN_THREAD_JANK: &CStr = c"MAIN_THREAD_JANK";
pub const EVENT_APP_HICOLLIE: &CStr = c"APP_HICOLLIE";
pub const EVENT_APP_KILLED: &CStr = c"APP_KILLED";

/// Domain of system events delivered to watchers.
pub const DOMAIN_OS: &CStr = c"OS";

pub const PARAM_USER_ID: &CStr = c"user_id";
pub const PARAM_DISTRIBUTED_SERVICE_NAME: &CStr = c"ds_name";
pub const PARAM_DISTRIBUTED_SERVICE_INSTANCE_ID: &CStr = c"ds_instance_id";

/// Event as delivered to [`OnReceive`]. `params` is a JSON object.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AppEventInfo {
    pub domain: Option<NonNull<c_char>>,
    pub name: Option<NonNull<c_char>>,
    pub r#type: EventType,
    pub params: Option<NonNull<c_char>>,
}

/// Events sharing a name. `app_event_infos` holds `info_len` entries.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AppEventGroup {
    pub name: Option<NonNull<c_char>>,
    pub app_event_infos: Option<NonNull<AppEventInfo>>,
    pub info_len: u32,
}

opaque! {
    pub struct ParamListNode;
    pub struct Watcher;
    pub struct Processor;
    pub struct Config;
}

pub type ParamList = *mut ParamListNode;

pub type OnReceive = Option<
    unsafe extern "C" fn(
        domain: *const c_char,
        app_event_groups: *const AppEventGroup,
        group_len: u32,
    ),
>;
pub type OnTrigger = Option<unsafe extern "C" fn(row: c_int, size: c_int)>;
/// Receives `event_len` JSON strings.
pub type OnTake = Option<unsafe extern "C" fn(events: *const *const c_char, event_len: u32)>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "hiappevent_ndk.z"))]
extern "C" {
    pub fn OH_HiAppEvent_CreateParamList() -> ParamList;
    pub fn OH_HiAppEvent_DestroyParamList(list: ParamList);
    pub fn OH_HiAppEvent_AddBoolParam(list: ParamList, name: *const c_char, boolean: bool)
        -> ParamList;
    pub fn OH_HiAppEvent_AddBoolArrayParam(
        list: ParamList,
        name: *const c_char,
        booleans: *const bool,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_AddInt8Param(list: ParamList, name: *const c_char, num: i8) -> ParamList;
    pub fn OH_HiAppEvent_AddInt8ArrayParam(
        list: ParamList,
        name: *const c_char,
        nums: *const i8,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_AddInt16Param(list: ParamList, name: *const c_char, num: i16) -> ParamList;
    pub fn OH_HiAppEvent_AddInt16ArrayParam(
        list: ParamList,
        name: *const c_char,
        nums: *const i16,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_AddInt32Param(list: ParamList, name: *const c_char, num: i32) -> ParamList;
    pub fn OH_HiAppEvent_AddInt32ArrayParam(
        list: ParamList,
        name: *const c_char,
        nums: *const i32,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_AddInt64Param(list: ParamList, name: *const c_char, num: i64) -> ParamList;
    pub fn OH_HiAppEvent_AddInt64ArrayParam(
        list: ParamList,
        name: *const c_char,
        nums: *const i64,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_AddFloatParam(list: ParamList, name: *const c_char, num: f32) -> ParamList;
    pub fn OH_HiAppEvent_AddFloatArrayParam(
        list: ParamList,
        name: *const c_char,
        nums: *const f32,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_AddDoubleParam(list: ParamList, name: *const c_char, num: f64)
        -> ParamList;
    pub fn OH_HiAppEvent_AddDoubleArrayParam(
        list: ParamList,
        name: *const c_char,
        nums: *const f64,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_AddStringParam(list: ParamList, name: *const c_char, str: *const c_char)
        -> ParamList;
    pub fn OH_HiAppEvent_AddStringArrayParam(
        list: ParamList,
        name: *const c_char,
        strs: *const *const c_char,
        arr_size: c_int,
    ) -> ParamList;
    pub fn OH_HiAppEvent_Write(
        domain: *const c_char,
        name: *const c_char,
        r#type: EventType,
        list: ParamList,
    ) -> c_int;
    pub fn OH_HiAppEvent_Configure(name: *const c_char, value: *const c_char) -> bool;

    pub fn OH_HiAppEvent_CreateWatcher(name: *const c_char) -> *mut Watcher;
    pub fn OH_HiAppEvent_DestroyWatcher(watcher: *mut Watcher);
    pub fn OH_HiAppEvent_SetTriggerCondition(
        watcher: *mut Watcher,
        row: c_int,
        size: c_int,
        time_out: c_int,
    ) -> c_int;
    /// `event_types` is a bit mask over `1 << EventType`.
    pub fn OH_HiAppEvent_SetAppEventFilter(
        watcher: *mut Watcher,
        domain: *const c_char,
        event_types: u8,
        names: *const *const c_char,
        names_len: c_int,
    ) -> c_int;
    pub fn OH_HiAppEvent_SetWatcherOnTrigger(watcher: *mut Watcher, on_trigger: OnTrigger) -> c_int;
    pub fn OH_HiAppEvent_SetWatcherOnReceive(watcher: *mut Watcher, on_receive: OnReceive) -> c_int;
    pub fn OH_HiAppEvent_TakeWatcherData(watcher: *mut Watcher, event_num: u32, on_take: OnTake)
        -> c_int;
    pub fn OH_HiAppEvent_AddWatcher(watcher: *mut Watcher) -> c_int;
    pub fn OH_HiAppEvent_RemoveWatcher(watcher: *mut Watcher) -> c_int;
    pub fn OH_HiAppEvent_ClearData();

    pub fn OH_HiAppEvent_CreateProcessor(name: *const c_char) -> *mut Processor;
    pub fn OH_HiAppEvent_SetReportRoute(
        processor: *mut Processor,
        app_id: *const c_char,
        route_info: *const c_char,
    ) -> c_int;
    pub fn OH_HiAppEvent_SetReportPolicy(
        processor: *mut Processor,
        period_report: c_int,
        batch_report: c_int,
        on_start_report: bool,
        on_background_report: bool,
    ) -> c_int;
    pub fn OH_HiAppEvent_SetReportEvent(
        processor: *mut Processor,
        domain: *const c_char,
        name: *const c_char,
        is_real_time: bool,
    ) -> c_int;
    pub fn OH_HiAppEvent_SetCustomConfig(
        processor: *mut Processor,
        key: *const c_char,
        value: *const c_char,
    ) -> c_int;
    pub fn OH_HiAppEvent_SetConfigId(processor: *mut Processor, config_id: c_int) -> c_int;
    pub fn OH_HiAppEvent_SetReportUserId(
        processor: *mut Processor,
        user_id_names: *const *const c_char,
        size: c_int,
    ) -> c_int;
    pub fn OH_HiAppEvent_SetReportUserProperty(
        processor: *mut Processor,
        user_property_names: *const *const c_char,
        size: c_int,
    ) -> c_int;
    /// Returns the processor ID, or a negative [`ErrorCode`].
    pub fn OH_HiAppEvent_AddProcessor(processor: *mut Processor) -> i64;
    pub fn OH_HiAppEvent_DestroyProcessor(processor: *mut Processor);
    pub fn OH_HiAppEvent_RemoveProcessor(processor_id: i64) -> c_int;

    pub fn OH_HiAppEvent_CreateConfig() -> *mut Config;
    pub fn OH_HiAppEvent_DestroyConfig(config: *mut Config);
    pub fn OH_HiAppEvent_SetConfigItem(
        config: *mut Config,
        item_name: *const c_char,
        item_value: *const c_char,
    ) -> c_int;
    pub fn OH_HiAppEvent_SetEventConfig(name: *const c_char, config: *mut Config) -> c_int;
}
