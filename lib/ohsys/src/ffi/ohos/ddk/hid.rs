//! # HID Driver Kit
//!
//! Two sets of interfaces are provided. Virtual input devices can be created
//! and fed with input events (`OH_Hid_CreateDevice()`, `OH_Hid_EmitEvent()`),
//! and raw HID devices can be opened and accessed via reports (`OH_Hid_Open()`
//! and friends, bracketed by `OH_Hid_Init()` and `OH_Hid_Release()`).
//!
//! Event types and codes follow the Linux input event codes.
//!
//! Interfaces are declared in `hid_ddk_api.h` and `hid_ddk_types.h`, and
//! provided by `libhid.z.so`. Functions return `i32` status values, see
//! [`DdkErrCode`].

use core::ffi::{c_char, c_int};
use core::ptr::NonNull;

/// Maximum size of a report buffer.
pub const MAX_REPORT_BUFFER_SIZE: u32 = 16 * 1024 - 1;

/// Maximum number of absolute axes.
pub const ABS_CNT: usize = 64;

pub type DdkErrCode = u32;

pub const DDK_SUCCESS: DdkErrCode = 0;
pub const DDK_NO_PERM: DdkErrCode = 201;
pub const DDK_INVALID_PARAMETER: DdkErrCode = 401;
pub const DDK_FAILURE: DdkErrCode = 27300001;
pub const DDK_NULL_PTR: DdkErrCode = 27300002;
pub const DDK_INVALID_OPERATION: DdkErrCode = 27300003;
pub const DDK_TIMEOUT: DdkErrCode = 27300004;
pub const DDK_INIT_ERROR: DdkErrCode = 27300005;
pub const DDK_SERVICE_ERROR: DdkErrCode = 27300006;
pub const DDK_MEMORY_ERROR: DdkErrCode = 27300007;
pub const DDK_IO_ERROR: DdkErrCode = 27300008;
pub const DDK_DEVICE_NOT_FOUND: DdkErrCode = 27300009;

/// Input event of a virtual device.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct EmitItem {
    pub r#type: u16,
    pub code: u16,
    pub value: u32,
}

pub type DeviceProp = u32;

pub const PROP_POINTER: DeviceProp = 0x00;
pub const PROP_DIRECT: DeviceProp = 0x01;
pub const PROP_BUTTON_PAD: DeviceProp = 0x02;
pub const PROP_SEMI_MT: DeviceProp = 0x03;
pub const PROP_TOP_BUTTON_PAD: DeviceProp = 0x04;
pub const PROP_POINTING_STICK: DeviceProp = 0x05;
pub const PROP_ACCELEROMETER: DeviceProp = 0x06;

/// Basic information of a virtual device.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Device {
    pub device_name: Option<NonNull<c_char>>,
    pub vendor_id: u16,
    pub product_id: u16,
    pub version: u16,
    pub bustype: u16,
    pub properties: Option<NonNull<DeviceProp>>,
    pub prop_length: u16,
}

pub type EventType = u32;

pub const EV_SYN: EventType = 0x00;
pub const EV_KEY: EventType = 0x01;
pub const EV_REL: EventType = 0x02;
pub const EV_ABS: EventType = 0x03;
pub const EV_MSC: EventType = 0x04;

pub type SynEvent = u32;

pub const SYN_REPORT: SynEvent = 0;
pub const SYN_CONFIG: SynEvent = 1;
pub const SYN_MT_REPORT: SynEvent = 2;
pub const SYN_DROPPED: SynEvent = 3;

pub type KeyCode = u32;

// Keyboard keys
pub const KEY_A: KeyCode = 30;
pub const KEY_B: KeyCode = 48;
pub const KEY_C: KeyCode = 46;
pub const KEY_D: KeyCode = 32;
pub const KEY_E: KeyCode = 18;
pub const KEY_F: KeyCode = 33;
pub const KEY_G: KeyCode = 34;
pub const KEY_H: KeyCode = 35;
pub const KEY_I: KeyCode = 23;
pub const KEY_J: KeyCode = 36;
pub const KEY_K: KeyCode = 37;
pub const KEY_L: KeyCode = 38;
pub const KEY_M: KeyCode = 50;
pub const KEY_N: KeyCode = 49;
pub const KEY_O: KeyCode = 24;
pub const KEY_P: KeyCode = 25;
pub const KEY_Q: KeyCode = 16;
pub const KEY_R: KeyCode = 19;
pub const KEY_S: KeyCode = 31;
pub const KEY_T: KeyCode = 20;
pub const KEY_U: KeyCode = 22;
pub const KEY_V: KeyCode = 47;
pub const KEY_W: KeyCode = 17;
pub const KEY_X: KeyCode = 45;
pub const KEY_Y: KeyCode = 21;
pub const KEY_Z: KeyCode = 44;
pub const KEY_ESC: KeyCode = 1;
pub const KEY_0: KeyCode = 11;
pub const KEY_1: KeyCode = 2;
pub const KEY_2: KeyCode = 3;
pub const KEY_3: KeyCode = 4;
pub const KEY_4: KeyCode = 5;
pub const KEY_5: KeyCode = 6;
pub const KEY_6: KeyCode = 7;
pub const KEY_7: KeyCode = 8;
pub const KEY_8: KeyCode = 9;
pub const KEY_9: KeyCode = 10;
pub const KEY_GRAVE: KeyCode = 41;
pub const KEY_MINUS: KeyCode = 12;
pub const KEY_EQUALS: KeyCode = 13;
pub const KEY_BACKSPACE: KeyCode = 14;
pub const KEY_LEFT_BRACKET: KeyCode = 26;
pub const KEY_RIGHT_BRACKET: KeyCode = 27;
pub const KEY_ENTER: KeyCode = 28;
pub const KEY_LEFT_SHIFT: KeyCode = 42;
pub const KEY_BACKSLASH: KeyCode = 43;
pub const KEY_SEMICOLON: KeyCode = 39;
pub const KEY_APOSTROPHE: KeyCode = 40;
pub const KEY_SPACE: KeyCode = 57;
pub const KEY_SLASH: KeyCode = 53;
pub const KEY_COMMA: KeyCode = 51;
pub const KEY_PERIOD: KeyCode = 52;
pub const KEY_RIGHT_SHIFT: KeyCode = 54;
pub const KEY_NUMPAD_0: KeyCode = 82;
pub const KEY_NUMPAD_1: KeyCode = 79;
pub const KEY_NUMPAD_2: KeyCode = 80;
pub const KEY_NUMPAD_3: KeyCode = 81;
pub const KEY_NUMPAD_4: KeyCode = 75;
pub const KEY_NUMPAD_5: KeyCode = 76;
pub const KEY_NUMPAD_6: KeyCode = 77;
pub const KEY_NUMPAD_7: KeyCode = 71;
pub const KEY_NUMPAD_8: KeyCode = 72;
pub const KEY_NUMPAD_9: KeyCode = 73;
pub const KEY_NUMPAD_DIVIDE: KeyCode = 98;
pub const KEY_NUMPAD_MULTIPLY: KeyCode = 55;
pub const KEY_NUMPAD_SUBTRACT: KeyCode = 74;
pub const KEY_NUMPAD_ADD: KeyCode = 78;
pub const KEY_NUMPAD_DOT: KeyCode = 83;
pub const KEY_SYSRQ: KeyCode = 99;
pub const KEY_DELETE: KeyCode = 111;
pub const KEY_MUTE: KeyCode = 113;
pub const KEY_VOLUME_DOWN: KeyCode = 114;
pub const KEY_VOLUME_UP: KeyCode = 115;
pub const KEY_BRIGHTNESS_DOWN: KeyCode = 224;
pub const KEY_BRIGHTNESS_UP: KeyCode = 225;
pub const KEY_POWER: KeyCode = 116;
pub const KEY_PAGE_UP: KeyCode = 104;
pub const KEY_PAGE_DOWN: KeyCode = 109;
pub const KEY_F1: KeyCode = 59;
pub const KEY_F2: KeyCode = 60;
pub const KEY_F3: KeyCode = 61;
pub const KEY_F4: KeyCode = 62;
pub const KEY_F5: KeyCode = 63;
pub const KEY_F6: KeyCode = 64;
pub const KEY_F7: KeyCode = 65;
pub const KEY_F8: KeyCode = 66;
pub const KEY_F9: KeyCode = 67;
pub const KEY_F10: KeyCode = 68;
pub const KEY_F11: KeyCode = 87;
pub const KEY_F12: KeyCode = 88;
pub const KEY_NUM_LOCK: KeyCode = 69;
pub const KEY_CAPS_LOCK: KeyCode = 58;
pub const KEY_SCROLL_LOCK: KeyCode = 70;
pub const KEY_LEFT_CTRL: KeyCode = 29;
pub const KEY_LEFT_ALT: KeyCode = 56;
pub const KEY_RIGHT_CTRL: KeyCode = 97;
pub const KEY_RIGHT_ALT: KeyCode = 100;
pub const KEY_LEFT_META: KeyCode = 125;
pub const KEY_RIGHT_META: KeyCode = 126;
pub const KEY_TAB: KeyCode = 15;
pub const KEY_HOME: KeyCode = 102;
pub const KEY_END: KeyCode = 107;
pub const KEY_INSERT: KeyCode = 110;
pub const KEY_UP: KeyCode = 103;
pub const KEY_DOWN: KeyCode = 108;
pub const KEY_LEFT: KeyCode = 105;
pub const KEY_RIGHT: KeyCode = 106;
pub const KEY_MENU: KeyCode = 139;
pub const KEY_BACK: KeyCode = 158;
pub const KEY_PLAY_PAUSE: KeyCode = 164;
pub const KEY_STOP_CD: KeyCode = 166;
pub const KEY_NEXT_SONG: KeyCode = 163;
pub const KEY_PREVIOUS_SONG: KeyCode = 165;

// Buttons
pub const BTN_LEFT: KeyCode = 0x110;
pub const BTN_RIGHT: KeyCode = 0x111;
pub const BTN_MIDDLE: KeyCode = 0x112;
pub const BTN_SIDE: KeyCode = 0x113;
pub const BTN_EXTRA: KeyCode = 0x114;
pub const BTN_FORWARD: KeyCode = 0x115;
pub const BTN_BACK: KeyCode = 0x116;
pub const BTN_TASK: KeyCode = 0x117;
pub const BTN_GAMEPAD_A: KeyCode = 0x130;
pub const BTN_GAMEPAD_B: KeyCode = 0x131;
pub const BTN_GAMEPAD_C: KeyCode = 0x132;
pub const BTN_GAMEPAD_X: KeyCode = 0x133;
pub const BTN_GAMEPAD_Y: KeyCode = 0x134;
pub const BTN_GAMEPAD_Z: KeyCode = 0x135;
pub const BTN_GAMEPAD_TL: KeyCode = 0x136;
pub const BTN_GAMEPAD_TR: KeyCode = 0x137;
pub const BTN_GAMEPAD_TL2: KeyCode = 0x138;
pub const BTN_GAMEPAD_TR2: KeyCode = 0x139;
pub const BTN_GAMEPAD_SELECT: KeyCode = 0x13a;
pub const BTN_GAMEPAD_START: KeyCode = 0x13b;
pub const BTN_GAMEPAD_MODE: KeyCode = 0x13c;
pub const BTN_GAMEPAD_THUMBL: KeyCode = 0x13d;
pub const BTN_GAMEPAD_THUMBR: KeyCode = 0x13e;
pub const BTN_TOOL_PEN: KeyCode = 0x140;
pub const BTN_TOOL_RUBBER: KeyCode = 0x141;
pub const BTN_TOOL_BRUSH: KeyCode = 0x142;
pub const BTN_TOOL_PENCIL: KeyCode = 0x143;
pub const BTN_TOOL_AIRBRUSH: KeyCode = 0x144;
pub const BTN_TOOL_FINGER: KeyCode = 0x145;
pub const BTN_TOOL_MOUSE: KeyCode = 0x146;
pub const BTN_TOOL_LENS: KeyCode = 0x147;
pub const BTN_TOOL_QUINT_TAP: KeyCode = 0x148;
pub const BTN_STYLUS3: KeyCode = 0x149;
pub const BTN_TOUCH: KeyCode = 0x14a;
pub const BTN_STYLUS: KeyCode = 0x14b;
pub const BTN_STYLUS2: KeyCode = 0x14c;
pub const BTN_TOOL_DOUBLE_TAP: KeyCode = 0x14d;
pub const BTN_TOOL_TRIPLE_TAP: KeyCode = 0x14e;
pub const BTN_TOOL_QUAD_TAP: KeyCode = 0x14f;
pub const BTN_WHEEL: KeyCode = 0x150;

pub type AbsAxes = u32;

pub const ABS_X: AbsAxes = 0x00;
pub const ABS_Y: AbsAxes = 0x01;
pub const ABS_Z: AbsAxes = 0x02;
pub const ABS_RX: AbsAxes = 0x03;
pub const ABS_RY: AbsAxes = 0x04;
pub const ABS_RZ: AbsAxes = 0x05;
pub const ABS_THROTTLE: AbsAxes = 0x06;
pub const ABS_RUDDER: AbsAxes = 0x07;
pub const ABS_WHEEL: AbsAxes = 0x08;
pub const ABS_GAS: AbsAxes = 0x09;
pub const ABS_BRAKE: AbsAxes = 0x0a;
pub const ABS_HAT0X: AbsAxes = 0x10;
pub const ABS_HAT0Y: AbsAxes = 0x11;
pub const ABS_HAT1X: AbsAxes = 0x12;
pub const ABS_HAT1Y: AbsAxes = 0x13;
pub const ABS_HAT2X: AbsAxes = 0x14;
pub const ABS_HAT2Y: AbsAxes = 0x15;
pub const ABS_HAT3X: AbsAxes = 0x16;
pub const ABS_HAT3Y: AbsAxes = 0x17;
pub const ABS_PRESSURE: AbsAxes = 0x18;
pub const ABS_DISTANCE: AbsAxes = 0x19;
pub const ABS_TILT_X: AbsAxes = 0x1a;
pub const ABS_TILT_Y: AbsAxes = 0x1b;
pub const ABS_TOOL_WIDTH: AbsAxes = 0x1c;
pub const ABS_VOLUME: AbsAxes = 0x20;
pub const ABS_MISC: AbsAxes = 0x28;

pub type RelAxes = u32;

pub const REL_X: RelAxes = 0x00;
pub const REL_Y: RelAxes = 0x01;
pub const REL_Z: RelAxes = 0x02;
pub const REL_RX: RelAxes = 0x03;
pub const REL_RY: RelAxes = 0x04;
pub const REL_RZ: RelAxes = 0x05;
pub const REL_HWHEEL: RelAxes = 0x06;
pub const REL_DIAL: RelAxes = 0x07;
pub const REL_WHEEL: RelAxes = 0x08;
pub const REL_MISC: RelAxes = 0x09;
pub const REL_RESERVED: RelAxes = 0x0a;
pub const REL_WHEEL_HI_RES: RelAxes = 0x0b;
pub const REL_HWHEEL_HI_RES: RelAxes = 0x0c;

pub type MscEvent = u32;

pub const MSC_SERIAL: MscEvent = 0x00;
pub const MSC_PULSE_LED: MscEvent = 0x01;
pub const MSC_GESTURE: MscEvent = 0x02;
pub const MSC_RAW: MscEvent = 0x03;
pub const MSC_SCAN: MscEvent = 0x04;
pub const MSC_TIMESTAMP: MscEvent = 0x05;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct EventTypeArray {
    pub hid_event_type: Option<NonNull<EventType>>,
    pub length: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct KeyCodeArray {
    pub hid_key_code: Option<NonNull<KeyCode>>,
    pub length: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AbsAxesArray {
    pub hid_abs_axes: Option<NonNull<AbsAxes>>,
    pub length: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RelAxesArray {
    pub hid_rel_axes: Option<NonNull<RelAxes>>,
    pub length: u16,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MscEventArray {
    pub hid_msc_event: Option<NonNull<MscEvent>>,
    pub length: u16,
}

/// Event capabilities of a virtual device, with the value ranges of its
/// absolute axes indexed by [`AbsAxes`].
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct EventProperties {
    pub hid_event_types: EventTypeArray,
    pub hid_keys: KeyCodeArray,
    pub hid_abs: AbsAxesArray,
    pub hid_rel_bits: RelAxesArray,
    pub hid_miscellaneous: MscEventArray,
    pub hid_abs_max: [i32; ABS_CNT],
    pub hid_abs_min: [i32; ABS_CNT],
    pub hid_abs_fuzz: [i32; ABS_CNT],
    pub hid_abs_flat: [i32; ABS_CNT],
}

opaque! {
    pub struct DeviceHandle;
}

pub type ReportType = u32;

pub const INPUT_REPORT: ReportType = 0;
pub const OUTPUT_REPORT: ReportType = 1;
pub const FEATURE_REPORT: ReportType = 2;

/// Raw device information.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct RawDevInfo {
    pub bus_type: u32,
    pub vendor: u16,
    pub product: u16,
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "hid.z"))]
extern "C" {
    // Virtual devices
    pub fn OH_Hid_CreateDevice(hid_device: *mut Device, hid_event_properties: *mut EventProperties)
        -> i32;
    pub fn OH_Hid_EmitEvent(device_id: i32, items: *const EmitItem, length: u16) -> i32;
    pub fn OH_Hid_DestroyDevice(device_id: i32) -> i32;

    // Raw devices
    pub fn OH_Hid_Init() -> i32;
    pub fn OH_Hid_Release() -> i32;
    pub fn OH_Hid_Open(device_id: u64, interface_index: u8, dev: *mut *mut DeviceHandle) -> i32;
    pub fn OH_Hid_Close(dev: *mut *mut DeviceHandle) -> i32;
    pub fn OH_Hid_Write(dev: *mut DeviceHandle, data: *mut u8, length: u32, bytes_written: *mut u32)
        -> i32;
    pub fn OH_Hid_ReadTimeout(
        dev: *mut DeviceHandle,
        data: *mut u8,
        buf_size: u32,
        timeout: c_int,
        bytes_read: *mut u32,
    ) -> i32;
    pub fn OH_Hid_Read(dev: *mut DeviceHandle, data: *mut u8, buf_size: u32, bytes_read: *mut u32)
        -> i32;
    pub fn OH_Hid_SetNonBlocking(dev: *mut DeviceHandle, non_block: c_int) -> i32;
    pub fn OH_Hid_GetRawInfo(dev: *mut DeviceHandle, raw_dev_info: *mut RawDevInfo) -> i32;
    pub fn OH_Hid_GetRawName(dev: *mut DeviceHandle, data: *mut c_char, buf_size: u32) -> i32;
    pub fn OH_Hid_GetPhysicalAddress(dev: *mut DeviceHandle, data: *mut c_char, buf_size: u32)
        -> i32;
    pub fn OH_Hid_GetRawUniqueId(dev: *mut DeviceHandle, data: *mut u8, buf_size: u32) -> i32;
    pub fn OH_Hid_SendReport(
        dev: *mut DeviceHandle,
        report_type: ReportType,
        data: *const u8,
        length: u32,
    ) -> i32;
    pub fn OH_Hid_GetReport(
        dev: *mut DeviceHandle,
        report_type: ReportType,
        data: *mut u8,
        buf_size: u32,
    ) -> i32;
    pub fn OH_Hid_GetReportDescriptor(
        dev: *mut DeviceHandle,
        buf: *mut u8,
        buf_size: u32,
        bytes_read: *mut u32,
    ) -> i32;
}
