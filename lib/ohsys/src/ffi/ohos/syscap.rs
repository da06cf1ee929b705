//! # System Capabilities
//!
//! Runtime queries for system capabilities, the API version of the device,
//! and the target SDK version of the application. Declared in
//! `syscap_ndk.h`, `info/device_api_version.h` and
//! `info/application_target_sdk_version.h`, and provided by the C library,
//! so no library is linked.

use core::ffi::{c_char, c_int};

/// Target SDK version of applications built against an unreleased SDK.
pub const SDK_VERSION_FUTURE: c_int = 9999;
pub const SDK_VERSION_7: c_int = 7;
pub const SDK_VERSION_8: c_int = 8;
pub const SDK_VERSION_9: c_int = 9;

extern "C" {
    /// Takes a capability name such as `SystemCapability.ArkUI.ArkUI.Full`.
    pub fn canIUse(cap: *const c_char) -> bool;
    pub fn OH_IsApiVersionGreaterOrEqual(
        major_version: c_int,
        minor_version: c_int,
        patch_version: c_int,
    ) -> bool;

    /// Not implemented by the C library, deprecated since API 15.
    pub fn get_device_api_version() -> c_int;
    pub fn get_application_target_sdk_version() -> c_int;
    pub fn set_application_target_sdk_version(target: c_int);
}
