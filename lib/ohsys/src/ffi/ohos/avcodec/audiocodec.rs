//! # Audio Codec
//!
//! Audio encoders and decoders driven by buffer callbacks. Declared in
//! `native_avcodec_audiocodec.h` and provided by `libnative_media_acodec.so`.

use core::ffi::{c_char, c_void};

use super::{AVCodec, Callback, ErrCode};
use crate::ffi::ohos::media::AVFormat;

opaque! {
    /// DRM key session of the media key system.
    pub struct MediaKeySession;
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "native_media_acodec"))]
extern "C" {
    pub fn OH_AudioCodec_CreateByMime(mime: *const c_char, is_encoder: bool) -> *mut AVCodec;
    pub fn OH_AudioCodec_CreateByName(name: *const c_char) -> *mut AVCodec;
    pub fn OH_AudioCodec_Destroy(codec: *mut AVCodec) -> ErrCode;
    pub fn OH_AudioCodec_RegisterCallback(
        codec: *mut AVCodec,
        callback: Callback,
        user_data: *mut c_void,
    ) -> ErrCode;
    pub fn OH_AudioCodec_Configure(codec: *mut AVCodec, format: *const AVFormat) -> ErrCode;
    pub fn OH_AudioCodec_Prepare(codec: *mut AVCodec) -> ErrCode;
    pub fn OH_AudioCodec_Start(codec: *mut AVCodec) -> ErrCode;
    pub fn OH_AudioCodec_Stop(codec: *mut AVCodec) -> ErrCode;
    pub fn OH_AudioCodec_Flush(codec: *mut AVCodec) -> ErrCode;
    pub fn OH_AudioCodec_Reset(codec: *mut AVCodec) -> ErrCode;
    pub fn OH_AudioCodec_GetOutputDescription(codec: *mut AVCodec) -> *mut AVFormat;
    pub fn OH_AudioCodec_SetParameter(codec: *mut AVCodec, format: *const AVFormat) -> ErrCode;
    pub fn OH_AudioCodec_PushInputBuffer(codec: *mut AVCodec, index: u32) -> ErrCode;
    pub fn OH_AudioCodec_FreeOutputBuffer(codec: *mut AVCodec, index: u32) -> ErrCode;
    pub fn OH_AudioCodec_IsValid(codec: *mut AVCodec, is_valid: *mut bool) -> ErrCode;
    pub fn OH_AudioCodec_SetDecryptionConfig(
        codec: *mut AVCodec,
        media_key_session: *mut MediaKeySession,
        secure_audio: bool,
    ) -> ErrCode;
}
