//! # Native Buffer
//!
//! Types shared by the graphics stack to describe native buffers: color
//! spaces, HDR metadata, pixel formats, and transforms. Declared in
//! `buffer_common.h` and provided by `libnative_buffer.so`.

opaque! {
    /// Native buffer handle (`OH_NativeBuffer`).
    pub struct NativeBuffer;
}

pub type ColorSpace = u32;

pub const COLORSPACE_NONE: ColorSpace = 0;
pub const COLORSPACE_BT601_EBU_FULL: ColorSpace = 1;
pub const COLORSPACE_BT601_SMPTE_C_FULL: ColorSpace = 2;
pub const COLORSPACE_BT709_FULL: ColorSpace = 3;
pub const COLORSPACE_BT2020_HLG_FULL: ColorSpace = 4;
pub const COLORSPACE_BT2020_PQ_FULL: ColorSpace = 5;
pub const COLORSPACE_BT601_EBU_LIMIT: ColorSpace = 6;
pub const COLORSPACE_BT601_SMPTE_C_LIMIT: ColorSpace = 7;
pub const COLORSPACE_BT709_LIMIT: ColorSpace = 8;
pub const COLORSPACE_BT2020_HLG_LIMIT: ColorSpace = 9;
pub const COLORSPACE_BT2020_PQ_LIMIT: ColorSpace = 10;
pub const COLORSPACE_SRGB_FULL: ColorSpace = 11;
pub const COLORSPACE_P3_FULL: ColorSpace = 12;
pub const COLORSPACE_P3_HLG_FULL: ColorSpace = 13;
pub const COLORSPACE_P3_PQ_FULL: ColorSpace = 14;
pub const COLORSPACE_ADOBERGB_FULL: ColorSpace = 15;
pub const COLORSPACE_SRGB_LIMIT: ColorSpace = 16;
pub const COLORSPACE_P3_LIMIT: ColorSpace = 17;
pub const COLORSPACE_P3_HLG_LIMIT: ColorSpace = 18;
pub const COLORSPACE_P3_PQ_LIMIT: ColorSpace = 19;
pub const COLORSPACE_ADOBERGB_LIMIT: ColorSpace = 20;
pub const COLORSPACE_LINEAR_SRGB: ColorSpace = 21;
pub const COLORSPACE_LINEAR_BT709: ColorSpace = 22;
pub const COLORSPACE_LINEAR_P3: ColorSpace = 23;
pub const COLORSPACE_LINEAR_BT2020: ColorSpace = 24;
pub const COLORSPACE_DISPLAY_SRGB: ColorSpace = 25;
pub const COLORSPACE_DISPLAY_P3_SRGB: ColorSpace = 26;
pub const COLORSPACE_DISPLAY_P3_HLG: ColorSpace = 27;
pub const COLORSPACE_DISPLAY_P3_PQ: ColorSpace = 28;
pub const COLORSPACE_DISPLAY_BT2020_SRGB: ColorSpace = 29;
pub const COLORSPACE_DISPLAY_BT2020_HLG: ColorSpace = 30;
pub const COLORSPACE_DISPLAY_BT2020_PQ: ColorSpace = 31;

pub type MetadataType = i32;

pub const VIDEO_HDR_HLG: MetadataType = 0;
pub const VIDEO_HDR_HDR10: MetadataType = 1;
pub const VIDEO_HDR_VIVID: MetadataType = 2;
pub const IMAGE_HDR_VIVID_DUAL: MetadataType = 3;
pub const IMAGE_HDR_VIVID_SINGLE: MetadataType = 4;
pub const VIDEO_NONE: MetadataType = -1;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorXY {
    pub x: f32,
    pub y: f32,
}

/// SMPTE ST 2086 mastering display color volume.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Smpte2086 {
    pub display_primary_red: ColorXY,
    pub display_primary_green: ColorXY,
    pub display_primary_blue: ColorXY,
    pub white_point: ColorXY,
    pub max_luminance: f32,
    pub min_luminance: f32,
}

/// CTA-861.3 content light level.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cta861 {
    pub max_content_light_level: f32,
    pub max_frame_average_light_level: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StaticMetadata {
    pub smpte2086: Smpte2086,
    pub cta861: Cta861,
}

pub type MetadataKey = u32;

pub const HDR_METADATA_TYPE: MetadataKey = 0;
pub const HDR_STATIC_METADATA: MetadataKey = 1;
pub const HDR_DYNAMIC_METADATA: MetadataKey = 2;
pub const REGION_OF_INTEREST_METADATA: MetadataKey = 3;

pub type Format = u32;

pub const PIXEL_FMT_CLUT8: Format = 0;
pub const PIXEL_FMT_CLUT1: Format = 1;
pub const PIXEL_FMT_CLUT4: Format = 2;
pub const PIXEL_FMT_RGB_565: Format = 3;
pub const PIXEL_FMT_RGBA_5658: Format = 4;
pub const PIXEL_FMT_RGBX_4444: Format = 5;
pub const PIXEL_FMT_RGBA_4444: Format = 6;
pub const PIXEL_FMT_RGB_444: Format = 7;
pub const PIXEL_FMT_RGBX_5551: Format = 8;
pub const PIXEL_FMT_RGBA_5551: Format = 9;
pub const PIXEL_FMT_RGB_555: Format = 10;
pub const PIXEL_FMT_RGBX_8888: Format = 11;
pub const PIXEL_FMT_RGBA_8888: Format = 12;
pub const PIXEL_FMT_RGB_888: Format = 13;
pub const PIXEL_FMT_BGR_565: Format = 14;
pub const PIXEL_FMT_BGRX_4444: Format = 15;
pub const PIXEL_FMT_BGRA_4444: Format = 16;
pub const PIXEL_FMT_BGRX_5551: Format = 17;
pub const PIXEL_FMT_BGRA_5551: Format = 18;
pub const PIXEL_FMT_BGRX_8888: Format = 19;
pub const PIXEL_FMT_BGRA_8888: Format = 20;
pub const PIXEL_FMT_YUV_422_I: Format = 21;
pub const PIXEL_FMT_YCBCR_422_SP: Format = 22;
pub const PIXEL_FMT_YCRCB_422_SP: Format = 23;
pub const PIXEL_FMT_YCBCR_420_SP: Format = 24;
pub const PIXEL_FMT_YCRCB_420_SP: Format = 25;
pub const PIXEL_FMT_YCBCR_422_P: Format = 26;
pub const PIXEL_FMT_YCRCB_422_P: Format = 27;
pub const PIXEL_FMT_YCBCR_420_P: Format = 28;
pub const PIXEL_FMT_YCRCB_420_P: Format = 29;
pub const PIXEL_FMT_YUYV_422_PKG: Format = 30;
pub const PIXEL_FMT_UYVY_422_PKG: Format = 31;
pub const PIXEL_FMT_YVYU_422_PKG: Format = 32;
pub const PIXEL_FMT_VYUY_422_PKG: Format = 33;
pub const PIXEL_FMT_RGBA_1010102: Format = 34;
pub const PIXEL_FMT_YCBCR_P010: Format = 35;
pub const PIXEL_FMT_YCRCB_P010: Format = 36;
pub const PIXEL_FMT_RAW10: Format = 37;
pub const PIXEL_FMT_BLOB: Format = 38;
pub const PIXEL_FMT_RGBA16_FLOAT: Format = 39;
pub const PIXEL_FMT_Y8: Format = 40;
pub const PIXEL_FMT_Y16: Format = 41;
pub const PIXEL_FMT_VENDER_MASK: Format = 0x7FFF0000;
pub const PIXEL_FMT_BUTT: Format = 0x7FFFFFFF;

pub type TransformType = u32;

pub const ROTATE_NONE: TransformType = 0;
pub const ROTATE_90: TransformType = 1;
pub const ROTATE_180: TransformType = 2;
pub const ROTATE_270: TransformType = 3;
pub const FLIP_H: TransformType = 4;
pub const FLIP_V: TransformType = 5;
pub const FLIP_H_ROT90: TransformType = 6;
pub const FLIP_V_ROT90: TransformType = 7;
pub const FLIP_H_ROT180: TransformType = 8;
pub const FLIP_V_ROT180: TransformType = 9;
pub const FLIP_H_ROT270: TransformType = 10;
pub const FLIP_V_ROT270: TransformType = 11;
