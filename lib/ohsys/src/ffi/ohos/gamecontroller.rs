//! # Game Controller Kit
//!
//! The game controller kit reports game devices (e.g., game pads) as they are
//! connected or disconnected, and dispatches button and axis input of these
//! devices to registered monitors.
//!
//! Interfaces are declared in `game_controller_type.h`, `game_device.h`,
//! `game_device_event.h`, `game_pad.h`, and `game_pad_event.h`, and provided
//! by `libohgame_controller.z.so`.

pub type ErrorCode = u32;

pub const SUCCESS: ErrorCode = 0;
pub const PARAM_ERROR: ErrorCode = 401;
pub const MULTIMODAL_INPUT_ERROR: ErrorCode = 32200001;
pub const NO_MEMORY: ErrorCode = 32200002;

/// # Game Devices
///
/// Device enumeration and device status monitoring (prefix `GameDevice_`).
pub mod device {
    use core::ffi::c_char;

    use super::ErrorCode;

    pub type StatusChangedType = u32;

    pub const OFFLINE: StatusChangedType = 0;
    pub const ONLINE: StatusChangedType = 1;

    pub type DeviceType = u32;

    pub const UNKNOWN: DeviceType = 0;
    pub const GAME_PAD: DeviceType = 1;

    opaque! {
        pub struct AllDeviceInfos;
        pub struct DeviceInfo;
        pub struct DeviceEvent;
    }

    pub type DeviceMonitorCallback = Option<unsafe extern "C" fn(device_event: *const DeviceEvent)>;

    #[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohgame_controller.z"))]
    extern "C" {
        pub fn OH_GameDevice_GetAllDeviceInfos(all_device_infos: *mut *mut AllDeviceInfos)
            -> ErrorCode;
        pub fn OH_GameDevice_RegisterDeviceMonitor(device_monitor_callback: DeviceMonitorCallback)
            -> ErrorCode;
        pub fn OH_GameDevice_UnregisterDeviceMonitor() -> ErrorCode;
        pub fn OH_GameDevice_DestroyAllDeviceInfos(all_device_infos: *mut *mut AllDeviceInfos)
            -> ErrorCode;
        pub fn OH_GameDevice_AllDeviceInfos_GetCount(
            all_device_infos: *const AllDeviceInfos,
            count: *mut i32,
        ) -> ErrorCode;
        pub fn OH_GameDevice_AllDeviceInfos_GetDeviceInfo(
            all_device_infos: *const AllDeviceInfos,
            index: i32,
            device_info: *mut *mut DeviceInfo,
        ) -> ErrorCode;

        pub fn OH_GameDevice_DeviceEvent_GetChangedType(
            device_event: *const DeviceEvent,
            status_changed_type: *mut StatusChangedType,
        ) -> ErrorCode;
        pub fn OH_GameDevice_DeviceEvent_GetDeviceInfo(
            device_event: *const DeviceEvent,
            device_info: *mut *mut DeviceInfo,
        ) -> ErrorCode;

        pub fn OH_GameDevice_DestroyDeviceInfo(device_info: *mut *mut DeviceInfo) -> ErrorCode;
        pub fn OH_GameDevice_DeviceInfo_GetDeviceId(
            device_info: *const DeviceInfo,
            device_id: *mut *mut c_char,
        ) -> ErrorCode;
        pub fn OH_GameDevice_DeviceInfo_GetName(
            device_info: *const DeviceInfo,
            name: *mut *mut c_char,
        ) -> ErrorCode;
        pub fn OH_GameDevice_DeviceInfo_GetProduct(
            device_info: *const DeviceInfo,
            product: *mut i32,
        ) -> ErrorCode;
        pub fn OH_GameDevice_DeviceInfo_GetVersion(
            device_info: *const DeviceInfo,
            version: *mut i32,
        ) -> ErrorCode;
        pub fn OH_GameDevice_DeviceInfo_GetPhysicalAddress(
            device_info: *const DeviceInfo,
            physical_address: *mut *mut c_char,
        ) -> ErrorCode;
        pub fn OH_GameDevice_DeviceInfo_GetDeviceType(
            device_info: *const DeviceInfo,
            device_type: *mut DeviceType,
        ) -> ErrorCode;
    }
}

/// # Game Pads
///
/// Button and axis input of game pads (prefix `GamePad_`).
pub mod pad {
    use core::ffi::c_char;

    use super::ErrorCode;

    pub type AxisSourceType = u32;

    pub const DPAD: AxisSourceType = 0;
    pub const LEFT_THUMBSTICK: AxisSourceType = 1;
    pub const RIGHT_THUMBSTICK: AxisSourceType = 2;
    pub const LEFT_TRIGGER: AxisSourceType = 3;
    pub const RIGHT_TRIGGER: AxisSourceType = 4;

    pub type ButtonActionType = u32;

    pub const DOWN: ButtonActionType = 0;
    pub const UP: ButtonActionType = 1;

    opaque! {
        pub struct ButtonEvent;
        pub struct AxisEvent;
        pub struct PressedButton;
    }

    pub type ButtonInputMonitorCallback =
        Option<unsafe extern "C" fn(button_event: *const ButtonEvent)>;
    pub type AxisInputMonitorCallback = Option<unsafe extern "C" fn(axis_event: *const AxisEvent)>;

    #[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohgame_controller.z"))]
    extern "C" {
        // Monitors
        pub fn OH_GamePad_LeftShoulder_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_LeftShoulder_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_RightShoulder_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_RightShoulder_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_LeftTrigger_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_LeftTrigger_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_LeftTrigger_RegisterAxisInputMonitor(cb: AxisInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_LeftTrigger_UnregisterAxisInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_RightTrigger_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_RightTrigger_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_RightTrigger_RegisterAxisInputMonitor(cb: AxisInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_RightTrigger_UnregisterAxisInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_ButtonMenu_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_ButtonMenu_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_ButtonHome_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_ButtonHome_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_ButtonA_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_ButtonA_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_ButtonB_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_ButtonB_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_ButtonX_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_ButtonX_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_ButtonY_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_ButtonY_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_ButtonC_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_ButtonC_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_Dpad_LeftButton_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_Dpad_LeftButton_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_Dpad_RightButton_RegisterButtonInputMonitor(
            cb: ButtonInputMonitorCallback,
        ) -> ErrorCode;
        pub fn OH_GamePad_Dpad_RightButton_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_Dpad_UpButton_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_Dpad_UpButton_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_Dpad_DownButton_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_Dpad_DownButton_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_Dpad_RegisterAxisInputMonitor(cb: AxisInputMonitorCallback) -> ErrorCode;
        pub fn OH_GamePad_Dpad_UnregisterAxisInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_LeftThumbstick_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_LeftThumbstick_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_LeftThumbstick_RegisterAxisInputMonitor(cb: AxisInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_LeftThumbstick_UnregisterAxisInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_RightThumbstick_RegisterButtonInputMonitor(cb: ButtonInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_RightThumbstick_UnregisterButtonInputMonitor() -> ErrorCode;
        pub fn OH_GamePad_RightThumbstick_RegisterAxisInputMonitor(cb: AxisInputMonitorCallback)
            -> ErrorCode;
        pub fn OH_GamePad_RightThumbstick_UnregisterAxisInputMonitor() -> ErrorCode;

        // Button events
        pub fn OH_GamePad_ButtonEvent_GetDeviceId(
            button_event: *const ButtonEvent,
            device_id: *mut *mut c_char,
        ) -> ErrorCode;
        pub fn OH_GamePad_ButtonEvent_GetButtonAction(
            button_event: *const ButtonEvent,
            action_type: *mut ButtonActionType,
        ) -> ErrorCode;
        pub fn OH_GamePad_ButtonEvent_GetButtonCode(
            button_event: *const ButtonEvent,
            code: *mut i32,
        ) -> ErrorCode;
        pub fn OH_GamePad_ButtonEvent_GetButtonCodeName(
            button_event: *const ButtonEvent,
            code_name: *mut *mut c_char,
        ) -> ErrorCode;
        pub fn OH_GamePad_PressedButtons_GetCount(button_event: *const ButtonEvent, count: *mut i32)
            -> ErrorCode;
        pub fn OH_GamePad_PressedButtons_GetButtonInfo(
            button_event: *const ButtonEvent,
            index: i32,
            pressed_button: *mut *mut PressedButton,
        ) -> ErrorCode;
        pub fn OH_GamePad_DestroyPressedButton(pressed_button: *mut *mut PressedButton)
            -> ErrorCode;
        pub fn OH_GamePad_PressedButton_GetButtonCode(
            pressed_button: *const PressedButton,
            code: *mut i32,
        ) -> ErrorCode;
        pub fn OH_GamePad_PressedButton_GetButtonCodeName(
            pressed_button: *const PressedButton,
            code_name: *mut *mut c_char,
        ) -> ErrorCode;
        pub fn OH_GamePad_ButtonEvent_GetActionTime(
            button_event: *const ButtonEvent,
            action_time: *mut i64,
        ) -> ErrorCode;

        // Axis events
        pub fn OH_GamePad_AxisEvent_GetDeviceId(
            axis_event: *const AxisEvent,
            device_id: *mut *mut c_char,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetAxisSourceType(
            axis_event: *const AxisEvent,
            axis_source_type: *mut AxisSourceType,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetXAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetYAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetZAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetRZAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetHatXAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetHatYAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetBrakeAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetGasAxisValue(
            axis_event: *const AxisEvent,
            axis_value: *mut f64,
        ) -> ErrorCode;
        pub fn OH_GamePad_AxisEvent_GetActionTime(
            axis_event: *const AxisEvent,
            action_time: *mut i64,
        ) -> ErrorCode;
    }
}
