//! # Native Effect
//!
//! Types of the 2D effect filters, declared in `effect_types.h`. The filter
//! interfaces are provided by `libnative_effect.so`.

opaque! {
    pub struct Filter;
}

/// 4x5 color matrix in row-major order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorMatrix {
    pub val: [f32; 20],
}

pub type ErrorCode = u32;

pub const SUCCESS: ErrorCode = 0;
pub const BAD_PARAMETER: ErrorCode = 401;
pub const UNSUPPORTED_OPERATION: ErrorCode = 7600201;
pub const UNKNOWN_ERROR: ErrorCode = 7600901;

pub type TileMode = u32;

pub const CLAMP: TileMode = 0;
pub const REPEAT: TileMode = 1;
pub const MIRROR: TileMode = 2;
pub const DECAL: TileMode = 3;
