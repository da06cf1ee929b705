//! # Native VSync
//!
//! Frame callbacks aligned to the display's vertical sync. A [`NativeVSync`]
//! instance is named by the caller; the name is passed with explicit length.
//!
//! Declared in `native_vsync.h` and provided by `libnative_vsync.so`.

use core::ffi::{c_char, c_int, c_longlong, c_uint, c_void};

opaque! {
    pub struct NativeVSync;
}

/// Receives the vsync timestamp in nanoseconds and the user data pointer.
pub type FrameCallback = Option<unsafe extern "C" fn(timestamp: c_longlong, data: *mut c_void)>;

/// Frame rate range in Hz.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ExpectedRateRange {
    pub min: i32,
    pub max: i32,
    pub expected: i32,
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "native_vsync"))]
extern "C" {
    pub fn OH_NativeVSync_Create(name: *const c_char, length: c_uint) -> *mut NativeVSync;
    pub fn OH_NativeVSync_Destroy(native_vsync: *mut NativeVSync);
    pub fn OH_NativeVSync_Create_ForAssociatedWindow(
        window_id: u64,
        name: *const c_char,
        length: c_uint,
    ) -> *mut NativeVSync;
    pub fn OH_NativeVSync_RequestFrame(
        native_vsync: *mut NativeVSync,
        callback: FrameCallback,
        data: *mut c_void,
    ) -> c_int;
    pub fn OH_NativeVSync_RequestFrameWithMultiCallback(
        native_vsync: *mut NativeVSync,
        callback: FrameCallback,
        data: *mut c_void,
    ) -> c_int;
    pub fn OH_NativeVSync_GetPeriod(native_vsync: *mut NativeVSync, period: *mut c_longlong)
        -> c_int;
    pub fn OH_NativeVSync_DVSyncSwitch(native_vsync: *mut NativeVSync, enable: bool) -> c_int;
    pub fn OH_NativeVSync_SetExpectedFrameRateRange(
        native_vsync: *mut NativeVSync,
        range: *mut ExpectedRateRange,
    ) -> c_int;
}
