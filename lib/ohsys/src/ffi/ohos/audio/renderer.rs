//! # Audio Renderer
//!
//! Playback streams. A renderer is generated by a stream builder and pulls
//! audio data through the write-data callback registered on the builder.

use core::ffi::c_void;

use super::{
    AudioEffectMode, ChannelLayout, DataCallbackResult, DeviceChangeReason, DeviceType,
    EncodingType, Event, FastStatus, InterruptForceType, InterruptHint, LatencyMode, PrivacyType,
    SampleFormat, State, StreamResult, Usage,
};

opaque! {
    pub struct Renderer;
}

/// Legacy callback table. Every entry returns 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Callbacks {
    pub on_write_data: Option<
        unsafe extern "C" fn(
            renderer: *mut Renderer,
            user_data: *mut c_void,
            buffer: *mut c_void,
            length: i32,
        ) -> i32,
    >,
    pub on_stream_event: Option<
        unsafe extern "C" fn(renderer: *mut Renderer, user_data: *mut c_void, event: Event) -> i32,
    >,
    pub on_interrupt_event: Option<
        unsafe extern "C" fn(
            renderer: *mut Renderer,
            user_data: *mut c_void,
            r#type: InterruptForceType,
            hint: InterruptHint,
        ) -> i32,
    >,
    pub on_error: Option<
        unsafe extern "C" fn(
            renderer: *mut Renderer,
            user_data: *mut c_void,
            error: StreamResult,
        ) -> i32,
    >,
}

pub type OutputDeviceChangeCallback = Option<
    unsafe extern "C" fn(
        renderer: *mut Renderer,
        user_data: *mut c_void,
        reason: DeviceChangeReason,
    ),
>;
pub type OnMarkReachedCallback =
    Option<unsafe extern "C" fn(renderer: *mut Renderer, sample_pos: u32, user_data: *mut c_void)>;
/// Fills audio data and its metadata. Returns 0 on success.
pub type WriteDataWithMetadataCallback = Option<
    unsafe extern "C" fn(
        renderer: *mut Renderer,
        user_data: *mut c_void,
        audio_data: *mut c_void,
        audio_data_size: i32,
        metadata: *mut c_void,
        metadata_size: i32,
    ) -> i32,
>;
pub type OnWriteDataCallback = Option<
    unsafe extern "C" fn(
        renderer: *mut Renderer,
        user_data: *mut c_void,
        audio_data: *mut c_void,
        audio_data_size: i32,
    ) -> DataCallbackResult,
>;
pub type OnFastStatusChange = Option<
    unsafe extern "C" fn(renderer: *mut Renderer, user_data: *mut c_void, status: FastStatus),
>;
pub type OnInterruptCallback = Option<
    unsafe extern "C" fn(
        renderer: *mut Renderer,
        user_data: *mut c_void,
        r#type: InterruptForceType,
        hint: InterruptHint,
    ),
>;
pub type OnErrorCallback = Option<
    unsafe extern "C" fn(renderer: *mut Renderer, user_data: *mut c_void, error: StreamResult),
>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohaudio"))]
extern "C" {
    pub fn OH_AudioRenderer_Release(renderer: *mut Renderer) -> StreamResult;
    pub fn OH_AudioRenderer_Start(renderer: *mut Renderer) -> StreamResult;
    pub fn OH_AudioRenderer_Pause(renderer: *mut Renderer) -> StreamResult;
    pub fn OH_AudioRenderer_Stop(renderer: *mut Renderer) -> StreamResult;
    pub fn OH_AudioRenderer_Flush(renderer: *mut Renderer) -> StreamResult;
    pub fn OH_AudioRenderer_GetCurrentState(renderer: *mut Renderer, state: *mut State)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetSamplingRate(renderer: *mut Renderer, rate: *mut i32)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetStreamId(renderer: *mut Renderer, stream_id: *mut u32)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetChannelCount(renderer: *mut Renderer, channel_count: *mut i32)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetSampleFormat(
        renderer: *mut Renderer,
        sample_format: *mut SampleFormat,
    ) -> StreamResult;
    pub fn OH_AudioRenderer_GetLatencyMode(renderer: *mut Renderer, latency_mode: *mut LatencyMode)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetRendererInfo(renderer: *mut Renderer, usage: *mut Usage)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetEncodingType(
        renderer: *mut Renderer,
        encoding_type: *mut EncodingType,
    ) -> StreamResult;
    pub fn OH_AudioRenderer_GetFramesWritten(renderer: *mut Renderer, frames: *mut i64)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetTimestamp(
        renderer: *mut Renderer,
        clock_id: libc::clockid_t,
        frame_position: *mut i64,
        timestamp: *mut i64,
    ) -> StreamResult;
    pub fn OH_AudioRenderer_GetFrameSizeInCallback(renderer: *mut Renderer, frame_size: *mut i32)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetSpeed(renderer: *mut Renderer, speed: *mut f32) -> StreamResult;
    pub fn OH_AudioRenderer_SetSpeed(renderer: *mut Renderer, speed: f32) -> StreamResult;
    pub fn OH_AudioRenderer_SetVolume(renderer: *mut Renderer, volume: f32) -> StreamResult;
    pub fn OH_AudioRenderer_SetVolumeWithRamp(
        renderer: *mut Renderer,
        volume: f32,
        duration_ms: i32,
    ) -> StreamResult;
    pub fn OH_AudioRenderer_GetVolume(renderer: *mut Renderer, volume: *mut f32) -> StreamResult;
    pub fn OH_AudioRenderer_SetMarkPosition(
        renderer: *mut Renderer,
        sample_pos: u32,
        callback: OnMarkReachedCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioRenderer_CancelMark(renderer: *mut Renderer) -> StreamResult;
    pub fn OH_AudioRenderer_GetUnderflowCount(renderer: *mut Renderer, count: *mut u32)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetChannelLayout(
        renderer: *mut Renderer,
        channel_layout: *mut ChannelLayout,
    ) -> StreamResult;
    pub fn OH_AudioRenderer_GetEffectMode(
        renderer: *mut Renderer,
        effect_mode: *mut AudioEffectMode,
    ) -> StreamResult;
    pub fn OH_AudioRenderer_SetEffectMode(renderer: *mut Renderer, effect_mode: AudioEffectMode)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetRendererPrivacy(renderer: *mut Renderer, privacy: *mut PrivacyType)
        -> StreamResult;
    pub fn OH_AudioRenderer_SetSilentModeAndMixWithOthers(renderer: *mut Renderer, on: bool)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetSilentModeAndMixWithOthers(renderer: *mut Renderer, on: *mut bool)
        -> StreamResult;
    pub fn OH_AudioRenderer_SetDefaultOutputDevice(renderer: *mut Renderer, device_type: DeviceType)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetAudioTimestampInfo(
        renderer: *mut Renderer,
        frame_position: *mut i64,
        timestamp: *mut i64,
    ) -> StreamResult;
}
