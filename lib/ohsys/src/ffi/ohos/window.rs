//! # Window Manager
//!
//! Native access to application windows: system bar control, avoid areas,
//! window properties, snapshots, layout information, and input event
//! filters.
//!
//! Interfaces are declared in `oh_window_comm.h`, `oh_window.h`, and
//! `oh_window_event_filter.h`, and provided by `libnative_window_manager.so`.
//! Windows are identified by their numeric window ID. Most functions return
//! `i32` status values, see [`ErrorCode`].

use core::ffi::c_char;

use super::image::PixelmapNative;
use super::input::{KeyEvent, MouseEvent, TouchEvent};

pub type ErrorCode = u32;

pub const OK: ErrorCode = 0;
pub const NO_PERMISSION: ErrorCode = 201;
pub const INVALID_PARAM: ErrorCode = 401;
pub const DEVICE_NOT_SUPPORTED: ErrorCode = 801;
pub const INVAILD_WINDOW_ID: ErrorCode = 1000;
pub const SERVICE_ERROR: ErrorCode = 2000;
pub const STATE_ABNORMALLY: ErrorCode = 1300002;
pub const SYSTEM_ABNORMALLY: ErrorCode = 1300003;

pub type AvoidAreaType = u32;

pub const AVOID_AREA_TYPE_SYSTEM: AvoidAreaType = 0;
pub const AVOID_AREA_TYPE_CUTOUT: AvoidAreaType = 1;
pub const AVOID_AREA_TYPE_SYSTEM_GESTURE: AvoidAreaType = 2;
pub const AVOID_AREA_TYPE_KEYBOARD: AvoidAreaType = 3;
pub const AVOID_AREA_TYPE_NAVIGATION_INDICATOR: AvoidAreaType = 4;

pub type WindowType = u32;

pub const WINDOW_TYPE_APP: WindowType = 0;
pub const WINDOW_TYPE_MAIN: WindowType = 1;
pub const WINDOW_TYPE_FLOAT: WindowType = 8;
pub const WINDOW_TYPE_DIALOG: WindowType = 16;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Rect {
    pub pos_x: i32,
    pub pos_y: i32,
    pub width: u32,
    pub height: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct AvoidArea {
    pub top_rect: Rect,
    pub left_rect: Rect,
    pub right_rect: Rect,
    pub bottom_rect: Rect,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowProperties {
    pub window_rect: Rect,
    pub drawable_rect: Rect,
    pub r#type: WindowType,
    pub is_full_screen: bool,
    pub is_layout_full_screen: bool,
    pub focusable: bool,
    pub touchable: bool,
    pub brightness: f32,
    pub is_keep_screen_on: bool,
    pub is_privacy_mode: bool,
    pub is_transparent: bool,
    pub id: u32,
    pub display_id: u32,
}

/// Key event filter. Returns `true` to intercept the event.
pub type KeyEventFilter = Option<unsafe extern "C" fn(key_event: *mut KeyEvent) -> bool>;
/// Mouse event filter. Returns `true` to intercept the event.
pub type MouseEventFilter = Option<unsafe extern "C" fn(mouse_event: *mut MouseEvent) -> bool>;
/// Touch event filter. Returns `true` to intercept the event.
pub type TouchEventFilter = Option<unsafe extern "C" fn(touch_event: *mut TouchEvent) -> bool>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "native_window_manager"))]
extern "C" {
    pub fn OH_WindowManager_SetWindowStatusBarEnabled(
        window_id: i32,
        enabled: bool,
        enable_animation: bool,
    ) -> i32;
    pub fn OH_WindowManager_SetWindowStatusBarColor(window_id: i32, color: i32) -> i32;
    pub fn OH_WindowManager_SetWindowNavigationBarEnabled(
        window_id: i32,
        enabled: bool,
        enable_animation: bool,
    ) -> i32;
    pub fn OH_WindowManager_GetWindowAvoidArea(
        window_id: i32,
        r#type: AvoidAreaType,
        avoid_area: *mut AvoidArea,
    ) -> i32;
    pub fn OH_WindowManager_IsWindowShown(window_id: i32, is_show: *mut bool) -> i32;
    pub fn OH_WindowManager_ShowWindow(window_id: i32) -> i32;
    pub fn OH_WindowManager_SetWindowTouchable(window_id: i32, is_touchable: bool) -> i32;
    pub fn OH_WindowManager_SetWindowFocusable(window_id: i32, is_focusable: bool) -> i32;
    pub fn OH_WindowManager_SetWindowBackgroundColor(window_id: i32, color: *const c_char) -> i32;
    pub fn OH_WindowManager_SetWindowBrightness(window_id: i32, brightness: f32) -> i32;
    pub fn OH_WindowManager_SetWindowKeepScreenOn(window_id: i32, is_keep_screen_on: bool) -> i32;
    pub fn OH_WindowManager_SetWindowPrivacyMode(window_id: i32, is_privacy: bool) -> i32;
    pub fn OH_WindowManager_GetWindowProperties(
        window_id: i32,
        window_properties: *mut WindowProperties,
    ) -> i32;
    pub fn OH_WindowManager_Snapshot(window_id: i32, pixel_map: *mut PixelmapNative) -> i32;
    pub fn OH_WindowManager_GetAllWindowLayoutInfoList(
        display_id: i64,
        window_layout_info_list: *mut *mut Rect,
        window_layout_info_size: *mut usize,
    ) -> i32;
    pub fn OH_WindowManager_ReleaseAllWindowLayoutInfoList(window_layout_info_list: *mut Rect);

    // Event filters
    pub fn OH_NativeWindowManager_RegisterKeyEventFilter(
        window_id: i32,
        key_event_filter: KeyEventFilter,
    ) -> ErrorCode;
    pub fn OH_NativeWindowManager_UnregisterKeyEventFilter(window_id: i32) -> ErrorCode;
    pub fn OH_NativeWindowManager_RegisterMouseEventFilter(
        window_id: i32,
        mouse_event_filter: MouseEventFilter,
    ) -> ErrorCode;
    pub fn OH_NativeWindowManager_UnregisterMouseEventFilter(window_id: i32) -> ErrorCode;
    pub fn OH_NativeWindowManager_RegisterTouchEventFilter(
        window_id: i32,
        touch_event_filter: TouchEventFilter,
    ) -> ErrorCode;
    pub fn OH_NativeWindowManager_UnregisterTouchEventFilter(window_id: i32) -> ErrorCode;
}
