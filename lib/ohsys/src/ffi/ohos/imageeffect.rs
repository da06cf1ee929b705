//! # Image Effect
//!
//! Filter pipelines applied to images. An image effect holds an ordered
//! list of effect filters and renders from one input to one output. Inputs
//! and outputs may be pixel maps, pictures, native buffers, URIs, GL
//! textures or native window surfaces.
//!
//! Interfaces are declared in `image_effect.h`, `image_effect_errors.h` and
//! `image_effect_filter.h`, and provided by `libimage_effect.so`.

use core::ffi::{c_char, c_long, c_void};

use crate::ffi::ohos::image::{PictureNative, PixelmapNative};
use crate::ffi::ohos::nativebuffer::NativeBuffer;
use crate::ffi::ohos::nativewindow::NativeWindow;

pub type ErrorCode = u32;

pub const SUCCESS: ErrorCode = 0;
pub const ERROR_PERMISSION_DENIED: ErrorCode = 201;
pub const ERROR_PARAM_INVALID: ErrorCode = 401;
pub const BUFFER_SIZE_NOT_MATCH: ErrorCode = 29000001;
pub const COLOR_SPACE_NOT_MATCH: ErrorCode = 29000002;
pub const INPUT_OUTPUT_NOT_MATCH: ErrorCode = 29000101;
pub const EFFECT_NUMBER_LIMITED: ErrorCode = 29000102;
pub const INPUT_OUTPUT_NOT_SUPPORTED: ErrorCode = 29000103;
pub const ALLOCATE_MEMORY_FAILED: ErrorCode = 29000104;
pub const PARAM_ERROR: ErrorCode = 29000121;
pub const KEY_ERROR: ErrorCode = 29000122;
pub const UNKNOWN: ErrorCode = 29000199;

pub type DataType = u32;

pub const DATA_TYPE_UNKNOWN: DataType = 0;
pub const DATA_TYPE_INT32: DataType = 1;
pub const DATA_TYPE_FLOAT: DataType = 2;
pub const DATA_TYPE_DOUBLE: DataType = 3;
pub const DATA_TYPE_CHAR: DataType = 4;
pub const DATA_TYPE_LONG: DataType = 5;
pub const DATA_TYPE_BOOL: DataType = 6;
pub const DATA_TYPE_PTR: DataType = 7;

#[repr(C)]
#[derive(Clone, Copy)]
pub union DataValue {
    pub int32_value: i32,
    pub float_value: f32,
    pub double_value: f64,
    pub char_value: c_char,
    pub long_value: c_long,
    pub bool_value: bool,
    pub ptr_value: *mut c_void,
}

/// Tagged configuration value. `data_type` selects the field of
/// `data_value`.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct Any {
    pub data_type: DataType,
    pub data_value: DataValue,
}

opaque! {
    pub struct ImageEffect;
    pub struct EffectFilter;
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "image_effect"))]
extern "C" {
    pub fn OH_ImageEffect_Create(name: *const c_char) -> *mut ImageEffect;
    pub fn OH_ImageEffect_AddFilter(image_effect: *mut ImageEffect, filter_name: *const c_char)
        -> *mut EffectFilter;
    pub fn OH_ImageEffect_AddFilterByFilter(
        image_effect: *mut ImageEffect,
        filter: *mut EffectFilter,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_InsertFilter(
        image_effect: *mut ImageEffect,
        index: u32,
        filter_name: *const c_char,
    ) -> *mut EffectFilter;
    pub fn OH_ImageEffect_InsertFilterByFilter(
        image_effect: *mut ImageEffect,
        index: u32,
        filter: *mut EffectFilter,
    ) -> ErrorCode;
    /// Returns the number of filters removed.
    pub fn OH_ImageEffect_RemoveFilter(image_effect: *mut ImageEffect, filter_name: *const c_char)
        -> i32;
    pub fn OH_ImageEffect_RemoveFilterByIndex(image_effect: *mut ImageEffect, index: u32)
        -> ErrorCode;
    pub fn OH_ImageEffect_ReplaceFilter(
        image_effect: *mut ImageEffect,
        index: u32,
        filter_name: *const c_char,
    ) -> *mut EffectFilter;
    pub fn OH_ImageEffect_ReplaceFilterByFilter(
        image_effect: *mut ImageEffect,
        index: u32,
        filter: *mut EffectFilter,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_GetFilterCount(image_effect: *mut ImageEffect) -> i32;
    pub fn OH_ImageEffect_GetFilter(image_effect: *mut ImageEffect, index: u32)
        -> *mut EffectFilter;
    pub fn OH_ImageEffect_Configure(
        image_effect: *mut ImageEffect,
        key: *const c_char,
        value: *const Any,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetOutputSurface(
        image_effect: *mut ImageEffect,
        native_window: *mut NativeWindow,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_GetInputSurface(
        image_effect: *mut ImageEffect,
        native_window: *mut *mut NativeWindow,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetInputPixelmap(
        image_effect: *mut ImageEffect,
        pixelmap: *mut PixelmapNative,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetOutputPixelmap(
        image_effect: *mut ImageEffect,
        pixelmap: *mut PixelmapNative,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetInputNativeBuffer(
        image_effect: *mut ImageEffect,
        native_buffer: *mut NativeBuffer,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetOutputNativeBuffer(
        image_effect: *mut ImageEffect,
        native_buffer: *mut NativeBuffer,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetInputUri(image_effect: *mut ImageEffect, uri: *const c_char)
        -> ErrorCode;
    pub fn OH_ImageEffect_SetOutputUri(image_effect: *mut ImageEffect, uri: *const c_char)
        -> ErrorCode;
    pub fn OH_ImageEffect_SetInputPicture(
        image_effect: *mut ImageEffect,
        picture: *mut PictureNative,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetOutputPicture(
        image_effect: *mut ImageEffect,
        picture: *mut PictureNative,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetInputTextureId(
        image_effect: *mut ImageEffect,
        texture_id: i32,
        color_space: i32,
    ) -> ErrorCode;
    pub fn OH_ImageEffect_SetOutputTextureId(image_effect: *mut ImageEffect, texture_id: i32)
        -> ErrorCode;
    pub fn OH_ImageEffect_Start(image_effect: *mut ImageEffect) -> ErrorCode;
    pub fn OH_ImageEffect_Stop(image_effect: *mut ImageEffect) -> ErrorCode;
    pub fn OH_ImageEffect_Release(image_effect: *mut ImageEffect) -> ErrorCode;
    /// Serializes the pipeline into a JSON string owned by the effect.
    pub fn OH_ImageEffect_Save(image_effect: *mut ImageEffect, info: *mut *mut c_char) -> ErrorCode;
    pub fn OH_ImageEffect_Restore(info: *const c_char) -> *mut ImageEffect;
}
