//! # Definitions of OpenHarmony Native Interfaces
//!
//! For all native interfaces of the OpenHarmony NDK that are provided by this
//! crate, the respective raw definitions of constants, structures, types, and
//! functions are provided in this module. This allows use of these
//! definitions independent of higher abstractions.
//!
//! This module exposes one sub-module per kit of the NDK. Kits that span
//! several headers with distinct prefixes are further split into
//! sub-modules, so the prefixes can be stripped without collisions.
//!
//! ## Linking
//!
//! Every `extern "C"` block names the system library that provides its
//! symbols. The library is only linked if the `link` feature is enabled (the
//! default) and the compilation target is an OpenHarmony environment. For all
//! other targets, the definitions are still available, which allows
//! introspection and documentation on foreign hosts.
//!
//! ## Completeness
//!
//! This module does not claim complete coverage of all NDK interfaces.
//! Definitions from headers that a kit depends on, but that are not part of
//! the kit itself (e.g., image or window handles), are provided as opaque
//! types in the module that owns them. Feel free to add more interfaces if
//! needed.

// Declare opaque C structures. The resulting types are zero-sized, cannot be
// constructed outside of this crate, and neither implement `Send`, `Sync`,
// nor `Unpin`. They must only ever be used behind pointers.
macro_rules! opaque {
    ($($(#[$meta:meta])* $vis:vis struct $name:ident;)*) => {$(
        $(#[$meta])*
        #[repr(C)]
        $vis struct $name {
            _data: [u8; 0],
            _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
        }
    )*};
}

#[cfg(test)]
mod test;

pub mod audio;
pub mod avcodec;
pub mod avsession;
pub mod clouddisk;
pub mod ddk;
pub mod effect;
pub mod fence;
pub mod gamecontroller;
pub mod hiappevent;
pub mod hidebug;
pub mod huks;
pub mod i18n;
pub mod image;
pub mod imageeffect;
pub mod input;
pub mod media;
pub mod nativebuffer;
pub mod nativewindow;
pub mod pasteboard;
pub mod preferences;
pub mod syscap;
pub mod udmf;
pub mod vsync;
pub mod vulkan;
pub mod window;
