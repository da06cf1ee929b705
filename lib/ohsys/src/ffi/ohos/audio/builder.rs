//! # Audio Stream Builder
//!
//! Collects stream parameters and callbacks, then generates a renderer or a
//! capturer. A builder can be destroyed once its stream is generated.

use core::ffi::c_void;

use super::{capturer, renderer};
use super::{
    ChannelLayout, EncodingType, InterruptMode, LatencyMode, PrivacyType, SampleFormat, SourceType,
    StreamResult, StreamType, Usage, VolumeMode,
};

opaque! {
    pub struct StreamBuilder;
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohaudio"))]
extern "C" {
    pub fn OH_AudioStreamBuilder_Create(builder: *mut *mut StreamBuilder, r#type: StreamType)
        -> StreamResult;
    pub fn OH_AudioStreamBuilder_Destroy(builder: *mut StreamBuilder) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetSamplingRate(builder: *mut StreamBuilder, rate: i32)
        -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetChannelCount(builder: *mut StreamBuilder, channel_count: i32)
        -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetSampleFormat(builder: *mut StreamBuilder, format: SampleFormat)
        -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetEncodingType(
        builder: *mut StreamBuilder,
        encoding_type: EncodingType,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetLatencyMode(
        builder: *mut StreamBuilder,
        latency_mode: LatencyMode,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetChannelLayout(
        builder: *mut StreamBuilder,
        channel_layout: ChannelLayout,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererInfo(builder: *mut StreamBuilder, usage: Usage)
        -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerInfo(
        builder: *mut StreamBuilder,
        source_type: SourceType,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererCallback(
        builder: *mut StreamBuilder,
        callbacks: renderer::Callbacks,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererOutputDeviceChangeCallback(
        builder: *mut StreamBuilder,
        callback: renderer::OutputDeviceChangeCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererPrivacy(
        builder: *mut StreamBuilder,
        privacy: PrivacyType,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerCallback(
        builder: *mut StreamBuilder,
        callbacks: capturer::Callbacks,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_GenerateRenderer(
        builder: *mut StreamBuilder,
        audio_renderer: *mut *mut renderer::Renderer,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_GenerateCapturer(
        builder: *mut StreamBuilder,
        audio_capturer: *mut *mut capturer::Capturer,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetFrameSizeInCallback(
        builder: *mut StreamBuilder,
        frame_size: i32,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetWriteDataWithMetadataCallback(
        builder: *mut StreamBuilder,
        callback: renderer::WriteDataWithMetadataCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererInterruptMode(
        builder: *mut StreamBuilder,
        mode: InterruptMode,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererWriteDataCallback(
        builder: *mut StreamBuilder,
        callback: renderer::OnWriteDataCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetVolumeMode(builder: *mut StreamBuilder, volume_mode: VolumeMode)
        -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererInterruptCallback(
        builder: *mut StreamBuilder,
        callback: renderer::OnInterruptCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererErrorCallback(
        builder: *mut StreamBuilder,
        callback: renderer::OnErrorCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerReadDataCallback(
        builder: *mut StreamBuilder,
        callback: capturer::OnReadDataCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerDeviceChangeCallback(
        builder: *mut StreamBuilder,
        callback: capturer::OnDeviceChangeCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerInterruptCallback(
        builder: *mut StreamBuilder,
        callback: capturer::OnInterruptCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerErrorCallback(
        builder: *mut StreamBuilder,
        callback: capturer::OnErrorCallback,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerWillMuteWhenInterrupted(
        builder: *mut StreamBuilder,
        mute_when_interrupted: bool,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetRendererFastStatusChangeCallback(
        builder: *mut StreamBuilder,
        callback: renderer::OnFastStatusChange,
        user_data: *mut c_void,
    ) -> StreamResult;
    pub fn OH_AudioStreamBuilder_SetCapturerFastStatusChangeCallback(
        builder: *mut StreamBuilder,
        callback: capturer::OnFastStatusChange,
        user_data: *mut c_void,
    ) -> StreamResult;
}
