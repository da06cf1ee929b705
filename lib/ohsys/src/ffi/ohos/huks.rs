//! # Universal Keystore
//!
//! Parameter sets of the keystore kit and the external crypto provider
//! interface. A parameter set is a size-prefixed block of tagged parameters:
//! it is initialized, filled with [`OH_Huks_AddParams`], then sealed with
//! [`OH_Huks_BuildParamSet`], which moves blob contents into the block.
//!
//! Every function returns a [`Result`] by value. Its `error_code` takes an
//! [`ErrCode`].
//!
//! Parameter interfaces are declared in `native_huks_param.h` and
//! `native_huks_type.h`, and provided by `libhuks_ndk.z.so`. The external
//! crypto interfaces are declared in `native_huks_external_crypto_api.h` and
//! `native_huks_external_crypto_type.h`, and provided by
//! `libhuks_external_crypto.z.so`.

use core::ffi::c_char;
use core::ptr::NonNull;

pub type ErrCode = i32;

pub const SUCCESS: ErrCode = 0;
pub const ERR_CODE_PERMISSION_FAIL: ErrCode = 201;
pub const ERR_CODE_NOT_SYSTEM_APP: ErrCode = 202;
pub const ERR_CODE_ILLEGAL_ARGUMENT: ErrCode = 401;
pub const ERR_CODE_NOT_SUPPORTED_API: ErrCode = 801;
pub const ERR_CODE_FEATURE_NOT_SUPPORTED: ErrCode = 12000001;
pub const ERR_CODE_MISSING_CRYPTO_ALG_ARGUMENT: ErrCode = 12000002;
pub const ERR_CODE_INVALID_CRYPTO_ALG_ARGUMENT: ErrCode = 12000003;
pub const ERR_CODE_FILE_OPERATION_FAIL: ErrCode = 12000004;
pub const ERR_CODE_COMMUNICATION_FAIL: ErrCode = 12000005;
pub const ERR_CODE_CRYPTO_FAIL: ErrCode = 12000006;
pub const ERR_CODE_KEY_AUTH_PERMANENTLY_INVALIDATED: ErrCode = 12000007;
pub const ERR_CODE_KEY_AUTH_VERIFY_FAILED: ErrCode = 12000008;
pub const ERR_CODE_KEY_AUTH_TIME_OUT: ErrCode = 12000009;
pub const ERR_CODE_SESSION_LIMIT: ErrCode = 12000010;
pub const ERR_CODE_ITEM_NOT_EXIST: ErrCode = 12000011;
pub const ERR_CODE_INTERNAL_ERROR: ErrCode = 12000012;
pub const ERR_CODE_CREDENTIAL_NOT_EXIST: ErrCode = 12000013;
pub const ERR_CODE_INSUFFICIENT_MEMORY: ErrCode = 12000014;
pub const ERR_CODE_CALL_SERVICE_FAILED: ErrCode = 12000015;
pub const ERR_CODE_DEVICE_PASSWORD_UNSET: ErrCode = 12000016;

/// Value type of a tag, stored in its top four bits.
pub type TagType = u32;

pub const TAG_TYPE_INVALID: TagType = 0 << 28;
pub const TAG_TYPE_INT: TagType = 1 << 28;
pub const TAG_TYPE_UINT: TagType = 2 << 28;
pub const TAG_TYPE_ULONG: TagType = 3 << 28;
pub const TAG_TYPE_BOOL: TagType = 4 << 28;
pub const TAG_TYPE_BYTES: TagType = 5 << 28;

/// Mask selecting the [`TagType`] of a tag.
pub const TAG_TYPE_MASK: u32 = 0xf << 28;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Result {
    pub error_code: i32,
    pub error_msg: Option<NonNull<c_char>>,
    pub data: Option<NonNull<u8>>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Blob {
    pub size: u32,
    pub data: Option<NonNull<u8>>,
}

/// Parameter value, selected by the [`TagType`] of [`Param::tag`].
#[repr(C)]
#[derive(Clone, Copy)]
pub union ParamValue {
    pub bool_param: bool,
    pub int32_param: i32,
    pub uint32_param: u32,
    pub uint64_param: u64,
    pub blob: Blob,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct Param {
    pub tag: u32,
    pub value: ParamValue,
}

/// Header of a parameter set. `params_cnt` parameters trail the header,
/// followed by blob contents once the set is built. `param_set_size` covers
/// the whole block.
#[repr(C)]
pub struct ParamSet {
    pub param_set_size: u32,
    pub params_cnt: u32,
    pub params: [Param; 0],
}

pub type ExternalCryptoParam = Param;
pub type ExternalCryptoParamSet = ParamSet;

pub type ExternalPinAuthState = u32;

pub const EXT_CRYPTO_PIN_NO_AUTH: ExternalPinAuthState = 0;
pub const EXT_CRYPTO_PIN_AUTH_SUCCEEDED: ExternalPinAuthState = 1;
pub const EXT_CRYPTO_PIN_LOCKED: ExternalPinAuthState = 2;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "huks_ndk.z"))]
extern "C" {
    pub fn OH_Huks_InitParamSet(param_set: *mut *mut ParamSet) -> Result;
    pub fn OH_Huks_AddParams(param_set: *mut ParamSet, params: *const Param, param_cnt: u32)
        -> Result;
    pub fn OH_Huks_BuildParamSet(param_set: *mut *mut ParamSet) -> Result;
    pub fn OH_Huks_FreeParamSet(param_set: *mut *mut ParamSet);
    pub fn OH_Huks_CopyParamSet(
        from_param_set: *const ParamSet,
        from_param_set_size: u32,
        param_set: *mut *mut ParamSet,
    ) -> Result;
    pub fn OH_Huks_GetParam(param_set: *const ParamSet, tag: u32, param: *mut *mut Param) -> Result;
    /// Rewrites blob pointers after the set was moved. With `is_copy`, blob
    /// contents are also validated against the set size.
    pub fn OH_Huks_FreshParamSet(param_set: *mut ParamSet, is_copy: bool) -> Result;
    pub fn OH_Huks_IsParamSetTagValid(param_set: *const ParamSet) -> Result;
    pub fn OH_Huks_IsParamSetValid(param_set: *const ParamSet, size: u32) -> Result;
    pub fn OH_Huks_CheckParamMatch(base_param: *const Param, param: *const Param) -> Result;
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "huks_external_crypto.z"))]
extern "C" {
    pub fn OH_Huks_RegisterProvider(
        provider_name: *const Blob,
        param_set: *const ExternalCryptoParamSet,
    ) -> Result;
    pub fn OH_Huks_UnregisterProvider(
        provider_name: *const Blob,
        param_set: *const ExternalCryptoParamSet,
    ) -> Result;
    pub fn OH_Huks_OpenResource(resource_id: *const Blob, param_set: *const ExternalCryptoParamSet)
        -> Result;
    pub fn OH_Huks_CloseResource(resource_id: *const Blob, param_set: *const ExternalCryptoParamSet)
        -> Result;
    pub fn OH_Huks_GetUkeyPinAuthState(
        resource_id: *const Blob,
        param_set: *const ExternalCryptoParamSet,
        auth_state: *mut ExternalPinAuthState,
    ) -> Result;
    pub fn OH_Huks_GetProperty(
        resource_id: *const Blob,
        property_id: *const Blob,
        param_set_in: *const ExternalCryptoParamSet,
        param_set_out: *mut *mut ExternalCryptoParamSet,
    ) -> Result;
    pub fn OH_Huks_InitExternalCryptoParamSet(param_set: *mut *mut ExternalCryptoParamSet)
        -> Result;
    pub fn OH_Huks_AddExternalCryptoParams(
        param_set: *mut ExternalCryptoParamSet,
        params: *const ExternalCryptoParam,
        param_cnt: u32,
    ) -> Result;
    pub fn OH_Huks_BuildExternalCryptoParamSet(param_set: *mut *mut ExternalCryptoParamSet)
        -> Result;
    pub fn OH_Huks_FreeExternalCryptoParamSet(param_set: *mut *mut ExternalCryptoParamSet);
    pub fn OH_Huks_GetExternalCryptoParam(
        param_set: *mut ExternalCryptoParamSet,
        tag: u32,
        param: *mut *mut ExternalCryptoParam,
    ) -> Result;
}
