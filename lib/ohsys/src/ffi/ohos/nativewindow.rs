//! # Native Window
//!
//! Handle of a producer surface as declared in `external_window.h`. Codecs,
//! image effects, and Vulkan render into native windows.

opaque! {
    /// Native window handle (`OHNativeWindow`, `struct NativeWindow`).
    pub struct NativeWindow;
}
