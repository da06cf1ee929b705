//! Status Codes
//!
//! Most NDK interfaces report failure through an integer status. Each kit
//! defines its own code space, and some of these spaces use a non-zero
//! success value. [`Domain`] names a code space, [`Domain::check()`] turns a
//! raw status into a `Result`, and [`Error`] carries the failed code along
//! with its domain.

macro_rules! domains {
    ($(
        $variant:ident => $label:literal, $($module:ident)::+, $success:ident, [
            $($name:ident),* $(,)?
        ];
    )*) => {
        /// Code space of a status returned by an NDK interface.
        #[derive(Clone, Copy, Debug, Hash)]
        #[derive(Eq, Ord, PartialEq, PartialOrd)]
        pub enum Domain {
            $($variant,)*
        }

        impl Domain {
            /// All known domains, in declaration order.
            pub const ALL: &'static [Domain] = &[$(Domain::$variant,)*];

            /// Return a human readable name of the domain.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Domain::$variant => $label,)*
                }
            }

            /// Return the code that signals success in this domain.
            pub fn success(self) -> i64 {
                match self {
                    $(Domain::$variant => {
                        use crate::ffi::ohos::$($module)::+ as m;
                        i64::from(m::$success)
                    })*
                }
            }

            fn lookup(self, code: i64) -> Option<&'static str> {
                match self {
                    $(Domain::$variant => {
                        use crate::ffi::ohos::$($module)::+ as m;
                        $(
                            if code == i64::from(m::$name) {
                                return Some(stringify!($name));
                            }
                        )*
                        None
                    })*
                }
            }
        }
    };
}

domains! {
    GameController => "game controller", gamecontroller, SUCCESS, [
        SUCCESS, PARAM_ERROR, MULTIMODAL_INPUT_ERROR, NO_MEMORY,
    ];
    Window => "window manager", window, OK, [
        OK, NO_PERMISSION, INVALID_PARAM, DEVICE_NOT_SUPPORTED, INVAILD_WINDOW_ID, SERVICE_ERROR,
        STATE_ABNORMALLY, SYSTEM_ABNORMALLY,
    ];
    Pasteboard => "pasteboard", pasteboard, ERR_OK, [
        ERR_OK, ERR_PERMISSION_ERROR, ERR_INVALID_PARAMETER, ERR_DEVICE_NOT_SUPPORTED,
        ERR_INNER_ERROR, ERR_BUSY,
    ];
    Preferences => "preferences", preferences, OK, [
        OK, E_INVALID_PARAM, NOT_SUPPORTED, E_INNER_ERROR, DELETE_FILE_FAIL,
        GET_DATAOBSMGRCLIENT_FAIL,
    ];
    Udmf => "unified data management", udmf, E_OK, [
        E_OK, ERR, E_INVALID_PARAM,
    ];
    Ddk => "driver development kit", ddk, SUCCESS, [
        SUCCESS, FAILURE, INVALID_PARAMETER, INVALID_OPERATION, NULL_PTR,
    ];
    Hid => "HID driver", ddk::hid, DDK_SUCCESS, [
        DDK_SUCCESS, DDK_NO_PERM, DDK_INVALID_PARAMETER, DDK_FAILURE, DDK_NULL_PTR,
        DDK_INVALID_OPERATION, DDK_TIMEOUT, DDK_INIT_ERROR, DDK_SERVICE_ERROR, DDK_MEMORY_ERROR,
        DDK_IO_ERROR, DDK_DEVICE_NOT_FOUND,
    ];
    Scsi => "SCSI peripheral driver", ddk::scsi, DDK_SUCCESS, [
        DDK_NO_PERM, DDK_INVALID_PARAMETER, DDK_SUCCESS, DDK_MEMORY_ERROR, DDK_INVALID_OPERATION,
        DDK_IO_ERROR, DDK_TIMEOUT, DDK_INIT_ERROR, DDK_SERVICE_ERROR, DDK_DEVICE_NOT_FOUND,
    ];
    UsbSerial => "USB serial driver", ddk::usb_serial, DDK_SUCCESS, [
        DDK_NO_PERM, DDK_INVALID_PARAMETER, DDK_SUCCESS, DDK_INVALID_OPERATION, DDK_INIT_ERROR,
        DDK_SERVICE_ERROR, DDK_MEMORY_ERROR, DDK_IO_ERROR, DDK_DEVICE_NOT_FOUND,
    ];
    CloudDisk => "cloud disk manager", clouddisk, OK, [
        OK, PERMISSION_DENIED, NOT_SUPPORTED, INVALID_ARG, SYNC_FOLDER_PATH_UNAUTHORIZED,
        IPC_FAILED, SYNC_FOLDER_LIMIT_EXCEEDED, CONFLICT_THIS_APP, CONFLICT_OTHER_APP,
        REGISTER_SYNC_FOLDER_FAILED, SYNC_FOLDER_NOT_REGISTERED, UNREGISTER_SYNC_FOLDER_FAILED,
        SYNC_FOLDER_PATH_NOT_EXIST, LISTENER_NOT_REGISTERED, LISTENER_ALREADY_REGISTERED,
        INVALID_CHANGE_SEQUENCE, TRY_AGAIN, NOT_ALLOWED,
    ];
    I18n => "i18n", i18n, SUCCESS, [
        SUCCESS, ERROR_INVALID_PARAMETER, UNEXPECTED_ERROR,
    ];
    HiAppEvent => "application events", hiappevent, SUCCESS, [
        SUCCESS, INVALID_PARAM_VALUE_LENGTH, PROCESSOR_IS_NULL, PROCESSOR_NOT_FOUND,
        INVALID_PARAM_VALUE, EVENT_CONFIG_IS_NULL, OPERATE_FAILED, INVALID_UID,
    ];
    HiDebug => "hidebug", hidebug, SUCCESS, [
        SUCCESS, INVALID_ARGUMENT, TRACE_CAPTURED_ALREADY, NO_PERMISSION, TRACE_ABNORMAL,
        NO_TRACE_RUNNING, INVALID_SYMBOLIC_PC_ADDRESS, NOT_SUPPORTED, UNDER_SAMPLING,
        RESOURCE_UNAVAILABLE,
    ];
    AudioCommon => "audio", audio, RESULT_SUCCESS, [
        RESULT_SUCCESS, RESULT_ERROR_INVALID_PARAM, RESULT_ERROR_NO_MEMORY,
        RESULT_ERROR_ILLEGAL_STATE, RESULT_ERROR_UNSUPPORTED, RESULT_ERROR_TIMEOUT,
        RESULT_ERROR_STREAM_LIMIT, RESULT_ERROR_SYSTEM,
    ];
    AudioStream => "audio stream", audio, SUCCESS, [
        SUCCESS, ERROR_INVALID_PARAM, ERROR_ILLEGAL_STATE, ERROR_SYSTEM, ERROR_UNSUPPORTED_FORMAT,
    ];
    AVCodec => "media codec", avcodec, OK, [
        OK, NO_MEMORY, OPERATE_NOT_PERMIT, INVALID_VAL, IO, TIMEOUT, UNKNOWN, SERVICE_DIED,
        INVALID_STATE, UNSUPPORT, INPUT_DATA_ERROR, UNSUPPORTED_FORMAT, EXTEND_START, DRM_BASE,
        DRM_DECRYPT_FAILED, VIDEO_BASE, VIDEO_UNSUPPORTED_COLOR_SPACE_CONVERSION,
        IO_CANNOT_FIND_HOST, IO_CONNECTION_TIMEOUT, IO_NETWORK_ABNORMAL, IO_NETWORK_UNAVAILABLE,
        IO_NO_PERMISSION, IO_NETWORK_ACCESS_DENIED, IO_RESOURCE_NOT_FOUND,
        IO_SSL_CLIENT_CERT_NEEDED, IO_SSL_CONNECT_FAIL, IO_SSL_SERVER_CERT_UNTRUSTED,
        IO_UNSUPPORTED_REQUEST,
    ];
    AVSession => "media session", avsession, SUCCESS, [
        SUCCESS, INVALID_PARAMETER, SERVICE_EXCEPTION, SESSION_NOT_EXIST, COMMAND_INVALID,
        SESSION_INACTIVE, MESSAGE_OVERLOAD, REMOTE_CONNECTION_NOT_EXIST, CAST_CONTROL_UNSPECIFIED,
        CAST_CONTROL_REMOTE_ERROR, CAST_CONTROL_BEHIND_LIVE_WINDOW, CAST_CONTROL_TIMEOUT,
        CAST_CONTROL_RUNTIME_CHECK_FAILED, CAST_CONTROL_PLAYER_NOT_WORKING,
        CAST_CONTROL_SEEK_MODE_UNSUPPORTED, CAST_CONTROL_ILLEGAL_SEEK_TARGET,
        CAST_CONTROL_PLAY_MODE_UNSUPPORTED, CAST_CONTROL_PLAY_SPEED_UNSUPPORTED,
        CAST_CONTROL_DEVICE_MISSING, CAST_CONTROL_INVALID_PARAM, CAST_CONTROL_NO_MEMORY,
        CAST_CONTROL_OPERATION_NOT_ALLOWED, CAST_CONTROL_IO_UNSPECIFIED,
        CAST_CONTROL_IO_NETWORK_CONNECTION_FAILED, CAST_CONTROL_IO_NETWORK_CONNECTION_TIMEOUT,
        CAST_CONTROL_IO_INVALID_HTTP_CONTENT_TYPE, CAST_CONTROL_IO_BAD_HTTP_STATUS,
        CAST_CONTROL_IO_FILE_NOT_FOUND, CAST_CONTROL_IO_NO_PERMISSION,
        CAST_CONTROL_IO_CLEARTEXT_NOT_PERMITTED, CAST_CONTROL_IO_READ_POSITION_OUT_OF_RANGE,
        CAST_CONTROL_IO_NO_CONTENTS, CAST_CONTROL_IO_READ_ERROR, CAST_CONTROL_IO_CONTENT_BUSY,
        CAST_CONTROL_IO_CONTENT_EXPIRED, CAST_CONTROL_IO_USE_FORBIDDEN,
        CAST_CONTROL_IO_NOT_VERIFIED, CAST_CONTROL_IO_EXHAUSTED_ALLOWED_USES,
        CAST_CONTROL_IO_NETWORK_PACKET_SENDING_FAILED, CAST_CONTROL_PARSING_UNSPECIFIED,
        CAST_CONTROL_PARSING_CONTAINER_MALFORMED, CAST_CONTROL_PARSING_MANIFEST_MALFORMED,
        CAST_CONTROL_PARSING_CONTAINER_UNSUPPORTED, CAST_CONTROL_PARSING_MANIFEST_UNSUPPORTED,
        CAST_CONTROL_DECODING_UNSPECIFIED, CAST_CONTROL_DECODING_INIT_FAILED,
        CAST_CONTROL_DECODING_QUERY_FAILED, CAST_CONTROL_DECODING_FAILED,
        CAST_CONTROL_DECODING_FORMAT_EXCEEDS_CAPABILITIES, CAST_CONTROL_DECODING_FORMAT_UNSUPPORTED,
        CAST_CONTROL_AUDIO_RENDERER_UNSPECIFIED, CAST_CONTROL_AUDIO_RENDERER_INIT_FAILED,
        CAST_CONTROL_AUDIO_RENDERER_WRITE_FAILED,
    ];
    ImageEffect => "image effect", imageeffect, SUCCESS, [
        SUCCESS, ERROR_PERMISSION_DENIED, ERROR_PARAM_INVALID, BUFFER_SIZE_NOT_MATCH,
        COLOR_SPACE_NOT_MATCH, INPUT_OUTPUT_NOT_MATCH, EFFECT_NUMBER_LIMITED,
        INPUT_OUTPUT_NOT_SUPPORTED, ALLOCATE_MEMORY_FAILED, PARAM_ERROR, KEY_ERROR, UNKNOWN,
    ];
    Effect => "native effect", effect, SUCCESS, [
        SUCCESS, BAD_PARAMETER, UNSUPPORTED_OPERATION, UNKNOWN_ERROR,
    ];
    Huks => "keystore", huks, SUCCESS, [
        SUCCESS, ERR_CODE_PERMISSION_FAIL, ERR_CODE_NOT_SYSTEM_APP, ERR_CODE_ILLEGAL_ARGUMENT,
        ERR_CODE_NOT_SUPPORTED_API, ERR_CODE_FEATURE_NOT_SUPPORTED,
        ERR_CODE_MISSING_CRYPTO_ALG_ARGUMENT, ERR_CODE_INVALID_CRYPTO_ALG_ARGUMENT,
        ERR_CODE_FILE_OPERATION_FAIL, ERR_CODE_COMMUNICATION_FAIL, ERR_CODE_CRYPTO_FAIL,
        ERR_CODE_KEY_AUTH_PERMANENTLY_INVALIDATED, ERR_CODE_KEY_AUTH_VERIFY_FAILED,
        ERR_CODE_KEY_AUTH_TIME_OUT, ERR_CODE_SESSION_LIMIT, ERR_CODE_ITEM_NOT_EXIST,
        ERR_CODE_INTERNAL_ERROR, ERR_CODE_CREDENTIAL_NOT_EXIST, ERR_CODE_INSUFFICIENT_MEMORY,
        ERR_CODE_CALL_SERVICE_FAILED, ERR_CODE_DEVICE_PASSWORD_UNSET,
    ];
}

impl Domain {
    /// Check a status code.
    ///
    /// Return `Ok(())` if `code` is the success value of this domain, and an
    /// [`Error`] carrying the code otherwise.
    pub fn check<Code: Into<i64>>(self, code: Code) -> Result<(), Error> {
        let code = code.into();
        if code == self.success() {
            Ok(())
        } else {
            Err(Error::new(self, code))
        }
    }
}

impl core::fmt::Display for Domain {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        fmt.write_str(self.label())
    }
}

/// Failed status of an NDK interface.
#[derive(Clone, Copy, Debug, Hash)]
#[derive(Eq, Ord, PartialEq, PartialOrd)]
pub struct Error {
    domain: Domain,
    code: i64,
}

impl Error {
    /// Create an error from a raw code. No check is performed whether `code`
    /// is actually a failure in `domain`.
    pub const fn new(domain: Domain, code: i64) -> Self {
        Self { domain, code }
    }

    pub const fn domain(&self) -> Domain {
        self.domain
    }

    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Return the name of the constant defining this code, if known.
    ///
    /// Names are the ones used in the `ffi` module of the respective kit.
    /// Where several constants share a value, the first one declared wins.
    pub fn name(&self) -> Option<&'static str> {
        self.domain.lookup(self.code)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> Result<(), core::fmt::Error> {
        match self.name() {
            Some(name) => write!(fmt, "{}: {} ({})", self.domain, name, self.code),
            None => write!(fmt, "{}: unknown status {}", self.domain, self.code),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ffi::ohos as ffi;
    use std::format;

    // Verify that each domain accepts its own success code and knows its
    // name.
    #[test]
    fn success() {
        for &domain in Domain::ALL {
            assert_eq!(domain.check(domain.success()), Ok(()));
            assert!(Error::new(domain, domain.success()).name().is_some());
        }

        assert_eq!(Domain::Scsi.success(), 31700000);
        assert_eq!(Domain::UsbSerial.success(), 31600000);
        assert_eq!(Domain::Window.success(), 0);
    }

    // Verify failures keep their domain and code, and resolve to the
    // constant names of the kit.
    #[test]
    fn failure() {
        let e = Domain::GameController.check(ffi::gamecontroller::PARAM_ERROR).unwrap_err();
        assert_eq!(e.domain(), Domain::GameController);
        assert_eq!(e.code(), 401);
        assert_eq!(e.name(), Some("PARAM_ERROR"));

        let e = Domain::Scsi.check(ffi::ddk::scsi::DDK_TIMEOUT).unwrap_err();
        assert_eq!(e.name(), Some("DDK_TIMEOUT"));

        // A zero status is a failure in domains with a non-zero success.
        let e = Domain::UsbSerial.check(0i32).unwrap_err();
        assert_eq!(e.name(), None);

        let e = Domain::HiAppEvent.check(ffi::hiappevent::OPERATE_FAILED).unwrap_err();
        assert_eq!(e.code(), -100);
        assert_eq!(e.name(), Some("OPERATE_FAILED"));

        let e = Domain::Huks.check(ffi::huks::ERR_CODE_ILLEGAL_ARGUMENT).unwrap_err();
        assert_eq!(e.name(), Some("ERR_CODE_ILLEGAL_ARGUMENT"));

        // Aliased values resolve to the first declaration.
        let e = Domain::Preferences.check(ffi::preferences::BASE).unwrap_err();
        assert_eq!(e.name(), Some("E_INNER_ERROR"));
    }

    // Verify both the known and unknown formatting.
    #[test]
    fn display() {
        let e = Error::new(Domain::I18n, i64::from(ffi::i18n::UNEXPECTED_ERROR));
        assert_eq!(format!("{}", e), "i18n: UNEXPECTED_ERROR (8900050)");

        let e = Error::new(Domain::Effect, 17);
        assert_eq!(format!("{}", e), "native effect: unknown status 17");
    }
}
