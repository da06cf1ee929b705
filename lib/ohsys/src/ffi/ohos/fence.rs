//! # Native Fence
//!
//! Waits on sync fence file descriptors handed out by the graphics stack.
//! Declared in `native_fence.h` and provided by `libnative_fence.so`.

use core::ffi::c_int;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "native_fence"))]
extern "C" {
    pub fn OH_NativeFence_IsValid(fence_fd: c_int) -> bool;
    /// Waits up to `timeout` milliseconds. A zero timeout polls.
    pub fn OH_NativeFence_Wait(fence_fd: c_int, timeout: u32) -> bool;
    pub fn OH_NativeFence_WaitForever(fence_fd: c_int) -> bool;
    pub fn OH_NativeFence_Close(fence_fd: c_int);
}
