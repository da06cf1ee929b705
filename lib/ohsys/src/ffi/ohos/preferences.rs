//! # Preferences
//!
//! Typed key-value pairs of the lightweight preferences store. Values are
//! tagged with a [`ValueType`] and accessed through type-specific getters
//! and setters.
//!
//! Interfaces are declared in `oh_preferences_value.h` and
//! `oh_preferences_err_code.h`, and provided by `libohpreferences.so`.
//! Functions return `c_int` status values, see [`ErrCode`].

use core::ffi::{c_char, c_int};

pub type ErrCode = u32;

pub const OK: ErrCode = 0;
pub const E_INVALID_PARAM: ErrCode = 401;
pub const NOT_SUPPORTED: ErrCode = 801;
pub const BASE: ErrCode = 15500000;
pub const E_INNER_ERROR: ErrCode = BASE;
pub const DELETE_FILE_FAIL: ErrCode = BASE + 10;
pub const GET_DATAOBSMGRCLIENT_FAIL: ErrCode = BASE + 19;

pub type ValueType = u32;

pub const TYPE_NULL: ValueType = 0;
pub const TYPE_INT: ValueType = 1;
pub const TYPE_BOOL: ValueType = 2;
pub const TYPE_STRING: ValueType = 3;
pub const TYPE_INT64: ValueType = 4;
pub const TYPE_DOUBLE: ValueType = 5;
pub const TYPE_INT_ARRAY: ValueType = 6;
pub const TYPE_BOOL_ARRAY: ValueType = 7;
pub const TYPE_STRING_ARRAY: ValueType = 8;
pub const TYPE_INT64_ARRAY: ValueType = 9;
pub const TYPE_DOUBLE_ARRAY: ValueType = 10;
pub const TYPE_BLOB: ValueType = 11;
pub const TYPE_BUTT: ValueType = 12;

opaque! {
    pub struct Pair;
    pub struct Value;
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohpreferences"))]
extern "C" {
    pub fn OH_PreferencesPair_GetKey(pairs: *const Pair, index: u32) -> *const c_char;
    pub fn OH_PreferencesPair_GetPreferencesValue(pairs: *const Pair, index: u32) -> *const Value;
    pub fn OH_PreferencesPair_Destroy(pairs: *mut Pair, count: u32);

    pub fn OH_PreferencesValue_GetValueType(object: *const Value) -> ValueType;
    pub fn OH_PreferencesValue_Create() -> *mut Value;
    pub fn OH_PreferencesValue_Destroy(value: *mut Value);

    pub fn OH_PreferencesValue_GetInt(object: *const Value, value: *mut c_int) -> c_int;
    pub fn OH_PreferencesValue_SetInt(object: *const Value, value: c_int) -> c_int;
    pub fn OH_PreferencesValue_GetBool(object: *const Value, value: *mut bool) -> c_int;
    pub fn OH_PreferencesValue_SetBool(object: *const Value, value: bool) -> c_int;
    pub fn OH_PreferencesValue_GetString(
        object: *const Value,
        value: *mut *mut c_char,
        value_len: *mut u32,
    ) -> c_int;
    pub fn OH_PreferencesValue_SetString(object: *const Value, value: *const c_char) -> c_int;
    pub fn OH_PreferencesValue_GetInt64(object: *const Value, value: *mut i64) -> c_int;
    pub fn OH_PreferencesValue_SetInt64(object: *const Value, value: i64) -> c_int;
    pub fn OH_PreferencesValue_GetDouble(object: *const Value, value: *mut f64) -> c_int;
    pub fn OH_PreferencesValue_SetDouble(object: *const Value, value: f64) -> c_int;

    pub fn OH_PreferencesValue_GetIntArray(
        object: *const Value,
        value: *mut *mut c_int,
        count: *mut u32,
    ) -> c_int;
    pub fn OH_PreferencesValue_SetIntArray(object: *const Value, value: *const c_int, count: u32)
        -> c_int;
    pub fn OH_PreferencesValue_GetBoolArray(
        object: *const Value,
        value: *mut *mut bool,
        count: *mut u32,
    ) -> c_int;
    pub fn OH_PreferencesValue_SetBoolArray(object: *const Value, value: *const bool, count: u32)
        -> c_int;
    pub fn OH_PreferencesValue_GetStringArray(
        object: *const Value,
        value: *mut *mut *mut c_char,
        count: *mut u32,
    ) -> c_int;
    pub fn OH_PreferencesValue_SetStringArray(
        object: *const Value,
        value: *mut *const c_char,
        count: u32,
    ) -> c_int;
    pub fn OH_PreferencesValue_GetInt64Array(
        object: *const Value,
        value: *mut *mut i64,
        count: *mut u32,
    ) -> c_int;
    pub fn OH_PreferencesValue_SetInt64Array(object: *const Value, value: *const i64, count: u32)
        -> c_int;
    pub fn OH_PreferencesValue_GetDoubleArray(
        object: *const Value,
        value: *mut *mut f64,
        count: *mut u32,
    ) -> c_int;
    pub fn OH_PreferencesValue_SetDoubleArray(object: *const Value, value: *const f64, count: u32)
        -> c_int;
    pub fn OH_PreferencesValue_GetBlob(object: *const Value, value: *mut *mut u8, count: *mut u32)
        -> c_int;
    pub fn OH_PreferencesValue_SetBlob(object: *const Value, value: *const u8, count: u32) -> c_int;
}
