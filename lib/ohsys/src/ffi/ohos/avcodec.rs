//! # AVCodec Kit
//!
//! Base definitions of the codec kit: codec handles and callbacks, user data
//! sources, media error codes, the format keys and MIME types exported by
//! `libnative_media_codecbase.so`, and the profile, level and color
//! enumerations the format keys take.
//!
//! Format keys and MIME types are exported as `const char *` variables
//! rather than macros. Their values are only known at runtime and must be
//! read through the statics below.

use core::ffi::{c_char, c_void};

use crate::ffi::ohos::media::{AVBuffer, AVFormat, AVMemory, BufferAttr};

pub mod audiocodec;
pub mod avsource;
pub mod channel;

pub type ErrCode = u32;

pub const OK: ErrCode = 0;
pub const NO_MEMORY: ErrCode = 1;
pub const OPERATE_NOT_PERMIT: ErrCode = 2;
pub const INVALID_VAL: ErrCode = 3;
pub const IO: ErrCode = 4;
pub const TIMEOUT: ErrCode = 5;
pub const UNKNOWN: ErrCode = 6;
pub const SERVICE_DIED: ErrCode = 7;
pub const INVALID_STATE: ErrCode = 8;
pub const UNSUPPORT: ErrCode = 9;
pub const INPUT_DATA_ERROR: ErrCode = 10;
pub const UNSUPPORTED_FORMAT: ErrCode = 11;
pub const EXTEND_START: ErrCode = 100;
pub const DRM_BASE: ErrCode = 200;
pub const DRM_DECRYPT_FAILED: ErrCode = 201;
pub const VIDEO_BASE: ErrCode = 300;
pub const VIDEO_UNSUPPORTED_COLOR_SPACE_CONVERSION: ErrCode = 301;
pub const IO_CANNOT_FIND_HOST: ErrCode = 5411001;
pub const IO_CONNECTION_TIMEOUT: ErrCode = 5411002;
pub const IO_NETWORK_ABNORMAL: ErrCode = 5411003;
pub const IO_NETWORK_UNAVAILABLE: ErrCode = 5411004;
pub const IO_NO_PERMISSION: ErrCode = 5411005;
pub const IO_NETWORK_ACCESS_DENIED: ErrCode = 5411006;
pub const IO_RESOURCE_NOT_FOUND: ErrCode = 5411007;
pub const IO_SSL_CLIENT_CERT_NEEDED: ErrCode = 5411008;
pub const IO_SSL_CONNECT_FAIL: ErrCode = 5411009;
pub const IO_SSL_SERVER_CERT_UNTRUSTED: ErrCode = 5411010;
pub const IO_UNSUPPORTED_REQUEST: ErrCode = 5411011;

opaque! {
    pub struct AVCodec;
}

pub type OnError =
    Option<unsafe extern "C" fn(codec: *mut AVCodec, error_code: i32, user_data: *mut c_void)>;
pub type OnStreamChanged = Option<
    unsafe extern "C" fn(codec: *mut AVCodec, format: *mut AVFormat, user_data: *mut c_void),
>;
pub type OnNeedInputData = Option<
    unsafe extern "C" fn(
        codec: *mut AVCodec,
        index: u32,
        data: *mut AVMemory,
        user_data: *mut c_void,
    ),
>;
pub type OnNewOutputData = Option<
    unsafe extern "C" fn(
        codec: *mut AVCodec,
        index: u32,
        data: *mut AVMemory,
        attr: *mut BufferAttr,
        user_data: *mut c_void,
    ),
>;
pub type OnNeedInputBuffer = Option<
    unsafe extern "C" fn(
        codec: *mut AVCodec,
        index: u32,
        buffer: *mut AVBuffer,
        user_data: *mut c_void,
    ),
>;
pub type OnNewOutputBuffer = Option<
    unsafe extern "C" fn(
        codec: *mut AVCodec,
        index: u32,
        buffer: *mut AVBuffer,
        user_data: *mut c_void,
    ),
>;

/// Callbacks of the memory based codec interfaces.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AsyncCallback {
    pub on_error: OnError,
    pub on_stream_changed: OnStreamChanged,
    pub on_need_input_data: OnNeedInputData,
    pub on_need_output_data: OnNewOutputData,
}

/// Callbacks of the buffer based codec interfaces.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Callback {
    pub on_error: OnError,
    pub on_stream_changed: OnStreamChanged,
    pub on_need_input_buffer: OnNeedInputBuffer,
    pub on_new_output_buffer: OnNewOutputBuffer,
}

/// Reads `length` bytes at `pos` into `data`. Returns the number of bytes
/// read.
pub type DataSourceReadAt =
    Option<unsafe extern "C" fn(data: *mut AVBuffer, length: i32, pos: i64) -> i32>;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct DataSource {
    pub size: i64,
    pub read_at: DataSourceReadAt,
}

pub type DataSourceReadAtExt = Option<
    unsafe extern "C" fn(data: *mut AVBuffer, length: i32, pos: i64, user_data: *mut c_void) -> i32,
>;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct DataSourceExt {
    pub size: i64,
    pub read_at: DataSourceReadAtExt,
}

pub type MediaType = u32;

pub const MEDIA_TYPE_AUD: MediaType = 0;
pub const MEDIA_TYPE_VID: MediaType = 1;
pub const MEDIA_TYPE_SUBTITLE: MediaType = 2;
pub const MEDIA_TYPE_TIMED_METADATA: MediaType = 5;
pub const MEDIA_TYPE_AUXILIARY: MediaType = 6;

pub type AacProfile = u32;

pub const AAC_PROFILE_LC: AacProfile = 0;
pub const AAC_PROFILE_HE: AacProfile = 3;
pub const AAC_PROFILE_HE_V2: AacProfile = 4;

pub type AvcProfile = u32;

pub const AVC_PROFILE_BASELINE: AvcProfile = 0;
pub const AVC_PROFILE_HIGH: AvcProfile = 4;
pub const AVC_PROFILE_MAIN: AvcProfile = 8;

pub type HevcProfile = u32;

pub const HEVC_PROFILE_MAIN: HevcProfile = 0;
pub const HEVC_PROFILE_MAIN_10: HevcProfile = 1;
pub const HEVC_PROFILE_MAIN_STILL: HevcProfile = 2;
pub const HEVC_PROFILE_MAIN_10_HDR10: HevcProfile = 3;
pub const HEVC_PROFILE_MAIN_10_HDR10_PLUS: HevcProfile = 4;

pub type VvcProfile = u32;

pub const VVC_PROFILE_MAIN_10: VvcProfile = 1;
pub const VVC_PROFILE_MAIN_12: VvcProfile = 2;
pub const VVC_PROFILE_MAIN_12_INTRA: VvcProfile = 10;
pub const VVC_PROFILE_MULTI_MAIN_10: VvcProfile = 17;
pub const VVC_PROFILE_MAIN_10_444: VvcProfile = 33;
pub const VVC_PROFILE_MAIN_12_444: VvcProfile = 34;
pub const VVC_PROFILE_MAIN_16_444: VvcProfile = 36;
pub const VVC_PROFILE_MAIN_12_444_INTRA: VvcProfile = 42;
pub const VVC_PROFILE_MAIN_16_444_INTRA: VvcProfile = 44;
pub const VVC_PROFILE_MULTI_MAIN_10_444: VvcProfile = 49;
pub const VVC_PROFILE_MAIN_10_STILL: VvcProfile = 65;
pub const VVC_PROFILE_MAIN_12_STILL: VvcProfile = 66;
pub const VVC_PROFILE_MAIN_10_444_STILL: VvcProfile = 97;
pub const VVC_PROFILE_MAIN_12_444_STILL: VvcProfile = 98;
pub const VVC_PROFILE_MAIN_16_444_STILL: VvcProfile = 100;

pub type Mpeg2Profile = u32;

pub const MPEG2_PROFILE_SIMPLE: Mpeg2Profile = 0;
pub const MPEG2_PROFILE_MAIN: Mpeg2Profile = 1;
pub const MPEG2_PROFILE_SNR_SCALABLE: Mpeg2Profile = 2;
pub const MPEG2_PROFILE_SPATIALLY_SCALABLE: Mpeg2Profile = 3;
pub const MPEG2_PROFILE_HIGH: Mpeg2Profile = 4;
pub const MPEG2_PROFILE_422: Mpeg2Profile = 5;

pub type Mpeg4Profile = u32;

pub const MPEG4_PROFILE_SIMPLE: Mpeg4Profile = 0;
pub const MPEG4_PROFILE_SIMPLE_SCALABLE: Mpeg4Profile = 1;
pub const MPEG4_PROFILE_CORE: Mpeg4Profile = 2;
pub const MPEG4_PROFILE_MAIN: Mpeg4Profile = 3;
pub const MPEG4_PROFILE_N_BIT: Mpeg4Profile = 4;
pub const MPEG4_PROFILE_HYBRID: Mpeg4Profile = 5;
pub const MPEG4_PROFILE_BASIC_ANIMATED_TEXTURE: Mpeg4Profile = 6;
pub const MPEG4_PROFILE_SCALABLE_TEXTURE: Mpeg4Profile = 7;
pub const MPEG4_PROFILE_SIMPLE_FA: Mpeg4Profile = 8;
pub const MPEG4_PROFILE_ADVANCED_REAL_TIME_SIMPLE: Mpeg4Profile = 9;
pub const MPEG4_PROFILE_CORE_SCALABLE: Mpeg4Profile = 10;
pub const MPEG4_PROFILE_ADVANCED_CODING_EFFICIENCY: Mpeg4Profile = 11;
pub const MPEG4_PROFILE_ADVANCED_CORE: Mpeg4Profile = 12;
pub const MPEG4_PROFILE_ADVANCED_SCALABLE_TEXTURE: Mpeg4Profile = 13;
pub const MPEG4_PROFILE_ADVANCED_SIMPLE: Mpeg4Profile = 17;

pub type H263Profile = u32;

pub const H263_PROFILE_BASELINE: H263Profile = 0;
pub const H263_PROFILE_VERSION_1_BACKWARD_COMPATIBILITY: H263Profile = 2;

pub type OutputFormat = u32;

pub const AV_OUTPUT_FORMAT_DEFAULT: OutputFormat = 0;
pub const AV_OUTPUT_FORMAT_MPEG_4: OutputFormat = 2;
pub const AV_OUTPUT_FORMAT_M4A: OutputFormat = 6;
pub const AV_OUTPUT_FORMAT_AMR: OutputFormat = 8;
pub const AV_OUTPUT_FORMAT_MP3: OutputFormat = 9;
pub const AV_OUTPUT_FORMAT_WAV: OutputFormat = 10;
pub const AV_OUTPUT_FORMAT_AAC: OutputFormat = 11;

pub type SeekMode = u32;

pub const SEEK_MODE_NEXT_SYNC: SeekMode = 0;
pub const SEEK_MODE_PREVIOUS_SYNC: SeekMode = 1;
pub const SEEK_MODE_CLOSEST_SYNC: SeekMode = 2;

pub type ScalingMode = u32;

pub const SCALING_MODE_SCALE_TO_WINDOW: ScalingMode = 1;
pub const SCALING_MODE_SCALE_CROP: ScalingMode = 2;

pub type BitsPerSample = i32;

pub const SAMPLE_U8: BitsPerSample = 0;
pub const SAMPLE_S16LE: BitsPerSample = 1;
pub const SAMPLE_S24LE: BitsPerSample = 2;
pub const SAMPLE_S32LE: BitsPerSample = 3;
pub const SAMPLE_F32LE: BitsPerSample = 4;
pub const SAMPLE_U8P: BitsPerSample = 5;
pub const SAMPLE_S16P: BitsPerSample = 6;
pub const SAMPLE_S24P: BitsPerSample = 7;
pub const SAMPLE_S32P: BitsPerSample = 8;
pub const SAMPLE_F32P: BitsPerSample = 9;
pub const INVALID_WIDTH: BitsPerSample = -1;

pub type ColorPrimary = u32;

pub const COLOR_PRIMARY_BT709: ColorPrimary = 1;
pub const COLOR_PRIMARY_UNSPECIFIED: ColorPrimary = 2;
pub const COLOR_PRIMARY_BT470_M: ColorPrimary = 4;
pub const COLOR_PRIMARY_BT601_625: ColorPrimary = 5;
pub const COLOR_PRIMARY_BT601_525: ColorPrimary = 6;
pub const COLOR_PRIMARY_SMPTE_ST240: ColorPrimary = 7;
pub const COLOR_PRIMARY_GENERIC_FILM: ColorPrimary = 8;
pub const COLOR_PRIMARY_BT2020: ColorPrimary = 9;
pub const COLOR_PRIMARY_SMPTE_ST428: ColorPrimary = 10;
pub const COLOR_PRIMARY_P3DCI: ColorPrimary = 11;
pub const COLOR_PRIMARY_P3D65: ColorPrimary = 12;

pub type TransferCharacteristic = u32;

pub const TRANSFER_CHARACTERISTIC_BT709: TransferCharacteristic = 1;
pub const TRANSFER_CHARACTERISTIC_UNSPECIFIED: TransferCharacteristic = 2;
pub const TRANSFER_CHARACTERISTIC_GAMMA_2_2: TransferCharacteristic = 4;
pub const TRANSFER_CHARACTERISTIC_GAMMA_2_8: TransferCharacteristic = 5;
pub const TRANSFER_CHARACTERISTIC_BT601: TransferCharacteristic = 6;
pub const TRANSFER_CHARACTERISTIC_SMPTE_ST240: TransferCharacteristic = 7;
pub const TRANSFER_CHARACTERISTIC_LINEAR: TransferCharacteristic = 8;
pub const TRANSFER_CHARACTERISTIC_LOG: TransferCharacteristic = 9;
pub const TRANSFER_CHARACTERISTIC_LOG_SQRT: TransferCharacteristic = 10;
pub const TRANSFER_CHARACTERISTIC_IEC_61966_2_4: TransferCharacteristic = 11;
pub const TRANSFER_CHARACTERISTIC_BT1361: TransferCharacteristic = 12;
pub const TRANSFER_CHARACTERISTIC_IEC_61966_2_1: TransferCharacteristic = 13;
pub const TRANSFER_CHARACTERISTIC_BT2020_10BIT: TransferCharacteristic = 14;
pub const TRANSFER_CHARACTERISTIC_BT2020_12BIT: TransferCharacteristic = 15;
pub const TRANSFER_CHARACTERISTIC_PQ: TransferCharacteristic = 16;
pub const TRANSFER_CHARACTERISTIC_SMPTE_ST428: TransferCharacteristic = 17;
pub const TRANSFER_CHARACTERISTIC_HLG: TransferCharacteristic = 18;

pub type MatrixCoefficient = u32;

pub const MATRIX_COEFFICIENT_IDENTITY: MatrixCoefficient = 0;
pub const MATRIX_COEFFICIENT_BT709: MatrixCoefficient = 1;
pub const MATRIX_COEFFICIENT_UNSPECIFIED: MatrixCoefficient = 2;
pub const MATRIX_COEFFICIENT_FCC: MatrixCoefficient = 4;
pub const MATRIX_COEFFICIENT_BT601_625: MatrixCoefficient = 5;
pub const MATRIX_COEFFICIENT_BT601_525: MatrixCoefficient = 6;
pub const MATRIX_COEFFICIENT_SMPTE_ST240: MatrixCoefficient = 7;
pub const MATRIX_COEFFICIENT_YCGCO: MatrixCoefficient = 8;
pub const MATRIX_COEFFICIENT_BT2020_NCL: MatrixCoefficient = 9;
pub const MATRIX_COEFFICIENT_BT2020_CL: MatrixCoefficient = 10;
pub const MATRIX_COEFFICIENT_SMPTE_ST2085: MatrixCoefficient = 11;
pub const MATRIX_COEFFICIENT_CHROMATICITY_NCL: MatrixCoefficient = 12;
pub const MATRIX_COEFFICIENT_CHROMATICITY_CL: MatrixCoefficient = 13;
pub const MATRIX_COEFFICIENT_ICTCP: MatrixCoefficient = 14;

pub type AvcLevel = u32;

pub const AVC_LEVEL_1: AvcLevel = 0;
pub const AVC_LEVEL_1B: AvcLevel = 1;
pub const AVC_LEVEL_11: AvcLevel = 2;
pub const AVC_LEVEL_12: AvcLevel = 3;
pub const AVC_LEVEL_13: AvcLevel = 4;
pub const AVC_LEVEL_2: AvcLevel = 5;
pub const AVC_LEVEL_21: AvcLevel = 6;
pub const AVC_LEVEL_22: AvcLevel = 7;
pub const AVC_LEVEL_3: AvcLevel = 8;
pub const AVC_LEVEL_31: AvcLevel = 9;
pub const AVC_LEVEL_32: AvcLevel = 10;
pub const AVC_LEVEL_4: AvcLevel = 11;
pub const AVC_LEVEL_41: AvcLevel = 12;
pub const AVC_LEVEL_42: AvcLevel = 13;
pub const AVC_LEVEL_5: AvcLevel = 14;
pub const AVC_LEVEL_51: AvcLevel = 15;
pub const AVC_LEVEL_52: AvcLevel = 16;
pub const AVC_LEVEL_6: AvcLevel = 17;
pub const AVC_LEVEL_61: AvcLevel = 18;
pub const AVC_LEVEL_62: AvcLevel = 19;

pub type HevcLevel = u32;

pub const HEVC_LEVEL_1: HevcLevel = 0;
pub const HEVC_LEVEL_2: HevcLevel = 1;
pub const HEVC_LEVEL_21: HevcLevel = 2;
pub const HEVC_LEVEL_3: HevcLevel = 3;
pub const HEVC_LEVEL_31: HevcLevel = 4;
pub const HEVC_LEVEL_4: HevcLevel = 5;
pub const HEVC_LEVEL_41: HevcLevel = 6;
pub const HEVC_LEVEL_5: HevcLevel = 7;
pub const HEVC_LEVEL_51: HevcLevel = 8;
pub const HEVC_LEVEL_52: HevcLevel = 9;
pub const HEVC_LEVEL_6: HevcLevel = 10;
pub const HEVC_LEVEL_61: HevcLevel = 11;
pub const HEVC_LEVEL_62: HevcLevel = 12;

pub type VvcLevel = u32;

pub const VVC_LEVEL_1: VvcLevel = 16;
pub const VVC_LEVEL_2: VvcLevel = 32;
pub const VVC_LEVEL_21: VvcLevel = 35;
pub const VVC_LEVEL_3: VvcLevel = 48;
pub const VVC_LEVEL_31: VvcLevel = 51;
pub const VVC_LEVEL_4: VvcLevel = 64;
pub const VVC_LEVEL_41: VvcLevel = 67;
pub const VVC_LEVEL_5: VvcLevel = 80;
pub const VVC_LEVEL_51: VvcLevel = 83;
pub const VVC_LEVEL_52: VvcLevel = 86;
pub const VVC_LEVEL_6: VvcLevel = 96;
pub const VVC_LEVEL_61: VvcLevel = 99;
pub const VVC_LEVEL_62: VvcLevel = 102;
pub const VVC_LEVEL_63: VvcLevel = 105;
pub const VVC_LEVEL_155: VvcLevel = 255;

pub type Mpeg2Level = u32;

pub const MPEG2_LEVEL_LOW: Mpeg2Level = 0;
pub const MPEG2_LEVEL_MAIN: Mpeg2Level = 1;
pub const MPEG2_LEVEL_HIGH_1440: Mpeg2Level = 2;
pub const MPEG2_LEVEL_HIGH: Mpeg2Level = 3;

pub type Mpeg4Level = u32;

pub const MPEG4_LEVEL_0: Mpeg4Level = 0;
pub const MPEG4_LEVEL_0B: Mpeg4Level = 1;
pub const MPEG4_LEVEL_1: Mpeg4Level = 2;
pub const MPEG4_LEVEL_2: Mpeg4Level = 3;
pub const MPEG4_LEVEL_3: Mpeg4Level = 4;
pub const MPEG4_LEVEL_3B: Mpeg4Level = 5;
pub const MPEG4_LEVEL_4: Mpeg4Level = 6;
pub const MPEG4_LEVEL_4A: Mpeg4Level = 7;
pub const MPEG4_LEVEL_5: Mpeg4Level = 8;
pub const MPEG4_LEVEL_6: Mpeg4Level = 9;

pub type H263Level = u32;

pub const H263_LEVEL_10: H263Level = 0;
pub const H263_LEVEL_20: H263Level = 1;
pub const H263_LEVEL_30: H263Level = 2;
pub const H263_LEVEL_40: H263Level = 3;
pub const H263_LEVEL_45: H263Level = 4;
pub const H263_LEVEL_50: H263Level = 5;
pub const H263_LEVEL_60: H263Level = 6;
pub const H263_LEVEL_70: H263Level = 7;

pub type TemporalGopReferenceMode = u32;

pub const ADJACENT_REFERENCE: TemporalGopReferenceMode = 0;
pub const JUMP_REFERENCE: TemporalGopReferenceMode = 1;
pub const UNIFORMLY_SCALED_REFERENCE: TemporalGopReferenceMode = 2;

pub type BitrateMode = u32;

pub const BITRATE_MODE_CBR: BitrateMode = 0;
pub const BITRATE_MODE_VBR: BitrateMode = 1;
pub const BITRATE_MODE_CQ: BitrateMode = 2;
pub const BITRATE_MODE_SQR: BitrateMode = 3;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "native_media_codecbase"))]
extern "C" {
    pub static OH_AVCODEC_MIMETYPE_VIDEO_AVC: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_AAC: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_FLAC: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_VORBIS: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_MPEG: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_VIDEO_HEVC: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_VIDEO_MPEG4: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_IMAGE_JPG: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_IMAGE_PNG: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_IMAGE_BMP: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_VIVID: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_AMR_NB: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_AMR_WB: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_OPUS: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_G711MU: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_APE: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_VIDEO_VVC: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_SUBTITLE_SRT: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_SUBTITLE_WEBVTT: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_RAW: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_AUDIO_G711A: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_VIDEO_MPEG2: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_VIDEO_MPEG4_PART2: *const c_char;
    pub static OH_AVCODEC_MIMETYPE_VIDEO_H263: *const c_char;
    pub static OH_ED_KEY_TIME_STAMP: *const c_char;
    pub static OH_ED_KEY_EOS: *const c_char;
    pub static OH_MD_KEY_TRACK_TYPE: *const c_char;
    pub static OH_MD_KEY_CODEC_MIME: *const c_char;
    pub static OH_MD_KEY_DURATION: *const c_char;
    pub static OH_MD_KEY_BITRATE: *const c_char;
    pub static OH_MD_KEY_MAX_INPUT_SIZE: *const c_char;
    pub static OH_MD_KEY_WIDTH: *const c_char;
    pub static OH_MD_KEY_HEIGHT: *const c_char;
    pub static OH_MD_KEY_PIXEL_FORMAT: *const c_char;
    pub static OH_MD_KEY_AUDIO_SAMPLE_FORMAT: *const c_char;
    pub static OH_MD_KEY_FRAME_RATE: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODE_BITRATE_MODE: *const c_char;
    pub static OH_MD_KEY_PROFILE: *const c_char;
    pub static OH_MD_KEY_AUD_CHANNEL_COUNT: *const c_char;
    pub static OH_MD_KEY_AUD_SAMPLE_RATE: *const c_char;
    pub static OH_MD_KEY_I_FRAME_INTERVAL: *const c_char;
    pub static OH_MD_KEY_ROTATION: *const c_char;
    pub static OH_MD_KEY_RANGE_FLAG: *const c_char;
    pub static OH_MD_KEY_COLOR_PRIMARIES: *const c_char;
    pub static OH_MD_KEY_TRANSFER_CHARACTERISTICS: *const c_char;
    pub static OH_MD_KEY_MATRIX_COEFFICIENTS: *const c_char;
    pub static OH_MD_KEY_REQUEST_I_FRAME: *const c_char;
    pub static OH_MD_KEY_QUALITY: *const c_char;
    pub static OH_MD_KEY_CODEC_CONFIG: *const c_char;
    pub static OH_MD_KEY_TITLE: *const c_char;
    pub static OH_MD_KEY_ARTIST: *const c_char;
    pub static OH_MD_KEY_ALBUM: *const c_char;
    pub static OH_MD_KEY_ALBUM_ARTIST: *const c_char;
    pub static OH_MD_KEY_DATE: *const c_char;
    pub static OH_MD_KEY_COMMENT: *const c_char;
    pub static OH_MD_KEY_GENRE: *const c_char;
    pub static OH_MD_KEY_COPYRIGHT: *const c_char;
    pub static OH_MD_KEY_LANGUAGE: *const c_char;
    pub static OH_MD_KEY_DESCRIPTION: *const c_char;
    pub static OH_MD_KEY_LYRICS: *const c_char;
    pub static OH_MD_KEY_TRACK_COUNT: *const c_char;
    pub static OH_MD_KEY_CHANNEL_LAYOUT: *const c_char;
    pub static OH_MD_KEY_BITS_PER_CODED_SAMPLE: *const c_char;
    pub static OH_MD_KEY_AAC_IS_ADTS: *const c_char;
    pub static OH_MD_KEY_SBR: *const c_char;
    pub static OH_MD_KEY_COMPLIANCE_LEVEL: *const c_char;
    pub static OH_MD_KEY_IDENTIFICATION_HEADER: *const c_char;
    pub static OH_MD_KEY_SETUP_HEADER: *const c_char;
    pub static OH_MD_KEY_SCALING_MODE: *const c_char;
    pub static OH_MD_MAX_INPUT_BUFFER_COUNT: *const c_char;
    pub static OH_MD_MAX_OUTPUT_BUFFER_COUNT: *const c_char;
    pub static OH_MD_KEY_AUDIO_COMPRESSION_LEVEL: *const c_char;
    pub static OH_MD_KEY_VIDEO_IS_HDR_VIVID: *const c_char;
    pub static OH_MD_KEY_AUDIO_OBJECT_NUMBER: *const c_char;
    pub static OH_MD_KEY_AUDIO_VIVID_METADATA: *const c_char;
    pub static OH_FEATURE_PROPERTY_KEY_VIDEO_ENCODER_MAX_LTR_FRAME_COUNT: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_ENABLE_TEMPORAL_SCALABILITY: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_TEMPORAL_GOP_SIZE: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_TEMPORAL_GOP_REFERENCE_MODE: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_LTR_FRAME_COUNT: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_PER_FRAME_MARK_LTR: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_PER_FRAME_USE_LTR: *const c_char;
    pub static OH_MD_KEY_VIDEO_PER_FRAME_IS_LTR: *const c_char;
    pub static OH_MD_KEY_VIDEO_PER_FRAME_POC: *const c_char;
    pub static OH_MD_KEY_VIDEO_CROP_TOP: *const c_char;
    pub static OH_MD_KEY_VIDEO_CROP_BOTTOM: *const c_char;
    pub static OH_MD_KEY_VIDEO_CROP_LEFT: *const c_char;
    pub static OH_MD_KEY_VIDEO_CROP_RIGHT: *const c_char;
    pub static OH_MD_KEY_VIDEO_STRIDE: *const c_char;
    pub static OH_MD_KEY_VIDEO_SLICE_HEIGHT: *const c_char;
    pub static OH_MD_KEY_VIDEO_PIC_WIDTH: *const c_char;
    pub static OH_MD_KEY_VIDEO_PIC_HEIGHT: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENABLE_LOW_LATENCY: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_QP_MAX: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_QP_MIN: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_QP_AVERAGE: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_MSE: *const c_char;
    pub static OH_MD_KEY_DECODING_TIMESTAMP: *const c_char;
    pub static OH_MD_KEY_BUFFER_DURATION: *const c_char;
    pub static OH_MD_KEY_VIDEO_SAR: *const c_char;
    pub static OH_MD_KEY_START_TIME: *const c_char;
    pub static OH_MD_KEY_TRACK_START_TIME: *const c_char;
    pub static OH_MD_KEY_VIDEO_DECODER_OUTPUT_COLOR_SPACE: *const c_char;
    pub static OH_MD_KEY_VIDEO_DECODER_OUTPUT_ENABLE_VRR: *const c_char;
    pub static OH_MD_KEY_CREATION_TIME: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_REPEAT_PREVIOUS_FRAME_AFTER: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_REPEAT_PREVIOUS_MAX_COUNT: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_ROI_PARAMS: *const c_char;
    pub static OH_MD_KEY_SQR_FACTOR: *const c_char;
    pub static OH_MD_KEY_MAX_BITRATE: *const c_char;
    pub static OH_MD_KEY_REFERENCE_TRACK_IDS: *const c_char;
    pub static OH_MD_KEY_TRACK_REFERENCE_TYPE: *const c_char;
    pub static OH_MD_KEY_TRACK_DESCRIPTION: *const c_char;
    pub static OH_MD_KEY_VIDEO_ENCODER_ENABLE_PTS_BASED_RATECONTROL: *const c_char;
    pub static OH_MD_KEY_ENABLE_SYNC_MODE: *const c_char;
}
