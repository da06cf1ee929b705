//! # AVSession
//!
//! Result and error codes of the media session kit, declared in
//! `native_avsession_errors.h`. The session interfaces themselves are
//! provided by `libohavsession.so`.

pub type ErrCode = u32;

pub const SUCCESS: ErrCode = 0;
pub const INVALID_PARAMETER: ErrCode = 401;
pub const SERVICE_EXCEPTION: ErrCode = 6600101;
pub const SESSION_NOT_EXIST: ErrCode = 6600102;
pub const COMMAND_INVALID: ErrCode = 6600105;
pub const SESSION_INACTIVE: ErrCode = 6600106;
pub const MESSAGE_OVERLOAD: ErrCode = 6600107;
pub const REMOTE_CONNECTION_NOT_EXIST: ErrCode = 6600109;
pub const CAST_CONTROL_UNSPECIFIED: ErrCode = 6611000;
pub const CAST_CONTROL_REMOTE_ERROR: ErrCode = 6611001;
pub const CAST_CONTROL_BEHIND_LIVE_WINDOW: ErrCode = 6611002;
pub const CAST_CONTROL_TIMEOUT: ErrCode = 6611003;
pub const CAST_CONTROL_RUNTIME_CHECK_FAILED: ErrCode = 6611004;
pub const CAST_CONTROL_PLAYER_NOT_WORKING: ErrCode = 6611100;
pub const CAST_CONTROL_SEEK_MODE_UNSUPPORTED: ErrCode = 6611101;
pub const CAST_CONTROL_ILLEGAL_SEEK_TARGET: ErrCode = 6611102;
pub const CAST_CONTROL_PLAY_MODE_UNSUPPORTED: ErrCode = 6611103;
pub const CAST_CONTROL_PLAY_SPEED_UNSUPPORTED: ErrCode = 6611104;
pub const CAST_CONTROL_DEVICE_MISSING: ErrCode = 6611105;
pub const CAST_CONTROL_INVALID_PARAM: ErrCode = 6611106;
pub const CAST_CONTROL_NO_MEMORY: ErrCode = 6611107;
pub const CAST_CONTROL_OPERATION_NOT_ALLOWED: ErrCode = 6611108;
pub const CAST_CONTROL_IO_UNSPECIFIED: ErrCode = 6612000;
pub const CAST_CONTROL_IO_NETWORK_CONNECTION_FAILED: ErrCode = 6612001;
pub const CAST_CONTROL_IO_NETWORK_CONNECTION_TIMEOUT: ErrCode = 6612002;
pub const CAST_CONTROL_IO_INVALID_HTTP_CONTENT_TYPE: ErrCode = 6612003;
pub const CAST_CONTROL_IO_BAD_HTTP_STATUS: ErrCode = 6612004;
pub const CAST_CONTROL_IO_FILE_NOT_FOUND: ErrCode = 6612005;
pub const CAST_CONTROL_IO_NO_PERMISSION: ErrCode = 6612006;
pub const CAST_CONTROL_IO_CLEARTEXT_NOT_PERMITTED: ErrCode = 6612007;
pub const CAST_CONTROL_IO_READ_POSITION_OUT_OF_RANGE: ErrCode = 6612008;
pub const CAST_CONTROL_IO_NO_CONTENTS: ErrCode = 6612100;
pub const CAST_CONTROL_IO_READ_ERROR: ErrCode = 6612101;
pub const CAST_CONTROL_IO_CONTENT_BUSY: ErrCode = 6612102;
pub const CAST_CONTROL_IO_CONTENT_EXPIRED: ErrCode = 6612103;
pub const CAST_CONTROL_IO_USE_FORBIDDEN: ErrCode = 6612104;
pub const CAST_CONTROL_IO_NOT_VERIFIED: ErrCode = 6612105;
pub const CAST_CONTROL_IO_EXHAUSTED_ALLOWED_USES: ErrCode = 6612106;
pub const CAST_CONTROL_IO_NETWORK_PACKET_SENDING_FAILED: ErrCode = 6612107;
pub const CAST_CONTROL_PARSING_UNSPECIFIED: ErrCode = 6613000;
pub const CAST_CONTROL_PARSING_CONTAINER_MALFORMED: ErrCode = 6613001;
pub const CAST_CONTROL_PARSING_MANIFEST_MALFORMED: ErrCode = 6613002;
pub const CAST_CONTROL_PARSING_CONTAINER_UNSUPPORTED: ErrCode = 6613003;
pub const CAST_CONTROL_PARSING_MANIFEST_UNSUPPORTED: ErrCode = 6613004;
pub const CAST_CONTROL_DECODING_UNSPECIFIED: ErrCode = 6614000;
pub const CAST_CONTROL_DECODING_INIT_FAILED: ErrCode = 6614001;
pub const CAST_CONTROL_DECODING_QUERY_FAILED: ErrCode = 6614002;
pub const CAST_CONTROL_DECODING_FAILED: ErrCode = 6614003;
pub const CAST_CONTROL_DECODING_FORMAT_EXCEEDS_CAPABILITIES: ErrCode = 6614004;
pub const CAST_CONTROL_DECODING_FORMAT_UNSUPPORTED: ErrCode = 6614005;
pub const CAST_CONTROL_AUDIO_RENDERER_UNSPECIFIED: ErrCode = 6615000;
pub const CAST_CONTROL_AUDIO_RENDERER_INIT_FAILED: ErrCode = 6615001;
pub const CAST_CONTROL_AUDIO_RENDERER_WRITE_FAILED: ErrCode = 6615002;

pub type CallbackResult = i32;

pub const CALLBACK_RESULT_SUCCESS: CallbackResult = 0;
pub const CALLBACK_RESULT_FAILURE: CallbackResult = -1;

pub type MetadataResult = u32;

pub const METADATA_SUCCESS: MetadataResult = 0;
pub const METADATA_ERROR_INVALID_PARAM: MetadataResult = 1;
pub const METADATA_ERROR_NO_MEMORY: MetadataResult = 2;

pub type QueueItemResult = u32;

pub const QUEUEITEM_SUCCESS: QueueItemResult = 0;
pub const QUEUEITEM_ERROR_INVALID_PARAM: QueueItemResult = 1;
pub const QUEUEITEM_ERROR_NO_MEMORY: QueueItemResult = 2;
