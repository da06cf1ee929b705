//! # OHAudio
//!
//! Low latency audio streams. A stream builder is configured with the
//! stream parameters and callbacks, then generates a renderer or capturer.
//! The audio manager reports the current audio scene.
//!
//! This module carries the definitions shared by all audio interfaces,
//! declared in `native_audiostream_base.h`, `native_audio_common.h` and
//! `native_audio_device_base.h`. All audio interfaces are provided by
//! `libohaudio.so`.

use core::ptr::NonNull;

pub mod builder;
pub mod capturer;
pub mod manager;
pub mod renderer;

pub type CommonResult = u32;

pub const RESULT_SUCCESS: CommonResult = 0;
pub const RESULT_ERROR_INVALID_PARAM: CommonResult = 6800101;
pub const RESULT_ERROR_NO_MEMORY: CommonResult = 6800102;
pub const RESULT_ERROR_ILLEGAL_STATE: CommonResult = 6800103;
pub const RESULT_ERROR_UNSUPPORTED: CommonResult = 6800104;
pub const RESULT_ERROR_TIMEOUT: CommonResult = 6800105;
pub const RESULT_ERROR_STREAM_LIMIT: CommonResult = 6800201;
pub const RESULT_ERROR_SYSTEM: CommonResult = 6800301;

pub type Scene = u32;

pub const SCENE_DEFAULT: Scene = 0;
pub const SCENE_RINGING: Scene = 1;
pub const SCENE_PHONE_CALL: Scene = 2;
pub const SCENE_VOICE_CHAT: Scene = 3;

/// Result of stream operations.
pub type StreamResult = u32;

pub const SUCCESS: StreamResult = 0;
pub const ERROR_INVALID_PARAM: StreamResult = 1;
pub const ERROR_ILLEGAL_STATE: StreamResult = 2;
pub const ERROR_SYSTEM: StreamResult = 3;
pub const ERROR_UNSUPPORTED_FORMAT: StreamResult = 4;

pub type StreamType = u32;

pub const TYPE_RENDERER: StreamType = 1;
pub const TYPE_CAPTURER: StreamType = 2;

pub type SampleFormat = u32;

pub const SAMPLE_U8: SampleFormat = 0;
pub const SAMPLE_S16LE: SampleFormat = 1;
pub const SAMPLE_S24LE: SampleFormat = 2;
pub const SAMPLE_S32LE: SampleFormat = 3;
pub const SAMPLE_F32LE: SampleFormat = 4;

pub type EncodingType = u32;

pub const ENCODING_TYPE_RAW: EncodingType = 0;
pub const ENCODING_TYPE_AUDIOVIVID: EncodingType = 1;

pub type Usage = u32;

pub const USAGE_UNKNOWN: Usage = 0;
pub const USAGE_MUSIC: Usage = 1;
pub const USAGE_VOICE_COMMUNICATION: Usage = 2;
pub const USAGE_VOICE_ASSISTANT: Usage = 3;
pub const USAGE_ALARM: Usage = 4;
pub const USAGE_VOICE_MESSAGE: Usage = 5;
pub const USAGE_RINGTONE: Usage = 6;
pub const USAGE_NOTIFICATION: Usage = 7;
pub const USAGE_ACCESSIBILITY: Usage = 8;
pub const USAGE_MOVIE: Usage = 10;
pub const USAGE_GAME: Usage = 11;
pub const USAGE_AUDIOBOOK: Usage = 12;
pub const USAGE_NAVIGATION: Usage = 13;
pub const USAGE_VIDEO_COMMUNICATION: Usage = 17;

pub type LatencyMode = u32;

pub const LATENCY_MODE_NORMAL: LatencyMode = 0;
pub const LATENCY_MODE_FAST: LatencyMode = 1;

pub type VolumeMode = u32;

pub const VOLUMEMODE_SYSTEM_GLOBAL: VolumeMode = 0;
pub const VOLUMEMODE_APP_INDIVIDUAL: VolumeMode = 1;

pub type State = i32;

pub const STATE_INVALID: State = -1;
pub const STATE_NEW: State = 0;
pub const STATE_PREPARED: State = 1;
pub const STATE_RUNNING: State = 2;
pub const STATE_STOPPED: State = 3;
pub const STATE_RELEASED: State = 4;
pub const STATE_PAUSED: State = 5;

pub type SourceType = i32;

pub const SOURCE_TYPE_INVALID: SourceType = -1;
pub const SOURCE_TYPE_MIC: SourceType = 0;
pub const SOURCE_TYPE_VOICE_RECOGNITION: SourceType = 1;
pub const SOURCE_TYPE_PLAYBACK_CAPTURE: SourceType = 2;
pub const SOURCE_TYPE_VOICE_COMMUNICATION: SourceType = 7;
pub const SOURCE_TYPE_VOICE_MESSAGE: SourceType = 10;
pub const SOURCE_TYPE_CAMCORDER: SourceType = 13;
pub const SOURCE_TYPE_UNPROCESSED: SourceType = 14;

pub type Event = u32;

pub const EVENT_ROUTING_CHANGED: Event = 0;

pub type InterruptForceType = u32;

pub const INTERRUPT_FORCE: InterruptForceType = 0;
pub const INTERRUPT_SHARE: InterruptForceType = 1;

pub type InterruptHint = u32;

pub const INTERRUPT_HINT_NONE: InterruptHint = 0;
pub const INTERRUPT_HINT_RESUME: InterruptHint = 1;
pub const INTERRUPT_HINT_PAUSE: InterruptHint = 2;
pub const INTERRUPT_HINT_STOP: InterruptHint = 3;
pub const INTERRUPT_HINT_DUCK: InterruptHint = 4;
pub const INTERRUPT_HINT_UNDUCK: InterruptHint = 5;

pub type InterruptMode = u32;

pub const INTERRUPT_MODE_SHARE: InterruptMode = 0;
pub const INTERRUPT_MODE_INDEPENDENT: InterruptMode = 1;

pub type AudioEffectMode = u32;

pub const EFFECT_NONE: AudioEffectMode = 0;
pub const EFFECT_DEFAULT: AudioEffectMode = 1;

pub type DeviceChangeReason = u32;

pub const REASON_UNKNOWN: DeviceChangeReason = 0;
pub const REASON_NEW_DEVICE_AVAILABLE: DeviceChangeReason = 1;
pub const REASON_OLD_DEVICE_UNAVAILABLE: DeviceChangeReason = 2;
pub const REASON_OVERRODE: DeviceChangeReason = 3;

pub type PrivacyType = u32;

pub const PRIVACY_TYPE_PUBLIC: PrivacyType = 0;
pub const PRIVACY_TYPE_PRIVATE: PrivacyType = 1;

/// Return value of data callbacks. `DATA_CALLBACK_RESULT_INVALID` tells the
/// service that the buffer was not filled and must not be played.
pub type DataCallbackResult = i32;

pub const DATA_CALLBACK_RESULT_INVALID: DataCallbackResult = -1;
pub const DATA_CALLBACK_RESULT_VALID: DataCallbackResult = 0;

pub type FastStatus = u32;

pub const FASTSTATUS_NORMAL: FastStatus = 0;
pub const FASTSTATUS_FAST: FastStatus = 1;

pub type DeviceType = u32;

pub const DEVICE_TYPE_INVALID: DeviceType = 0;
pub const DEVICE_TYPE_EARPIECE: DeviceType = 1;
pub const DEVICE_TYPE_SPEAKER: DeviceType = 2;
pub const DEVICE_TYPE_WIRED_HEADSET: DeviceType = 3;
pub const DEVICE_TYPE_WIRED_HEADPHONES: DeviceType = 4;
pub const DEVICE_TYPE_BLUETOOTH_SCO: DeviceType = 7;
pub const DEVICE_TYPE_BLUETOOTH_A2DP: DeviceType = 8;
pub const DEVICE_TYPE_MIC: DeviceType = 15;
pub const DEVICE_TYPE_USB_HEADSET: DeviceType = 22;
pub const DEVICE_TYPE_DISPLAY_PORT: DeviceType = 23;
pub const DEVICE_TYPE_REMOTE_CAST: DeviceType = 24;
pub const DEVICE_TYPE_DEFAULT: DeviceType = 1000;

opaque! {
    pub struct DeviceDescriptor;
}

/// Device descriptors. `descriptors` holds `size` entries.
#[repr(C)]
#[derive(Debug)]
pub struct DeviceDescriptorArray {
    pub size: u32,
    pub descriptors: Option<NonNull<*mut DeviceDescriptor>>,
}

/// Channel layout of a stream. Values coincide with the codec channel
/// layouts.
pub type ChannelLayout = crate::ffi::ohos::avcodec::channel::ChannelLayout;
