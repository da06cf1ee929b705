//! # Image Framework Handles
//!
//! Handles of the image framework (`libpixelmap.so`, `libpicture.so`) that
//! other kits accept or return. The image framework itself is not covered by
//! this crate.

opaque! {
    /// Pixel map (`OH_PixelmapNative`).
    pub struct PixelmapNative;
    /// Picture with auxiliary pictures (`OH_PictureNative`).
    pub struct PictureNative;
}
