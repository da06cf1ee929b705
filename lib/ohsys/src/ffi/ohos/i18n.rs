//! # Internationalization
//!
//! Time zone transition rules. [`OH_i18n_GetTimeZoneRules`] fills a
//! [`TimeZoneRules`] for a time zone ID. The rule arrays it references are
//! then queried for transition start times, all expressed in milliseconds
//! since the epoch.
//!
//! Interfaces are declared in `timezone.h` and `errorcode.h`, and provided by
//! `libohi18n.so`.

use core::ffi::c_char;
use core::ptr::NonNull;

pub type ErrorCode = u32;

pub const SUCCESS: ErrorCode = 0;
pub const ERROR_INVALID_PARAMETER: ErrorCode = 8900001;
pub const UNEXPECTED_ERROR: ErrorCode = 8900050;

pub type DateRuleType = u32;

/// Exact day of month.
pub const DOM: DateRuleType = 0;
/// Day of week in a given week of the month.
pub const DOW: DateRuleType = 1;
/// Day of week on or after the given day of month.
pub const DOW_GEQ_DOM: DateRuleType = 2;
/// Day of week on or before the given day of month.
pub const DOW_LEQ_DOM: DateRuleType = 3;

pub type TimeRuleType = u32;

pub const WALL_TIME: TimeRuleType = 0;
pub const STANDARD_TIME: TimeRuleType = 1;
pub const UTC_TIME: TimeRuleType = 2;

/// Upper bound of [`AnnualTimeZoneRule::end_year`] for rules without end.
pub const MAX_YEAR_IN_ANNUAL_TIMEZONE_RULE: i32 = 0x7fffffff;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct DateTimeRule {
    pub month: i32,
    pub day_of_month: i32,
    pub day_of_week: i32,
    pub week_in_month: i32,
    pub millis_in_day: i32,
    pub date_rule_type: DateRuleType,
    pub time_rule_type: TimeRuleType,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct InitialTimeZoneRule {
    pub raw_offset: i32,
    pub dst_savings: i32,
}

/// Rule with explicit transition times. `start_times` holds
/// `num_start_times` entries.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TimeArrayTimeZoneRule {
    pub name: Option<NonNull<c_char>>,
    pub raw_offset: i32,
    pub dst_savings: i32,
    pub start_times: Option<NonNull<f64>>,
    pub num_start_times: i32,
    pub time_rule_type: TimeRuleType,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AnnualTimeZoneRule {
    pub name: Option<NonNull<c_char>>,
    pub start_year: i32,
    pub end_year: i32,
    pub raw_offset: i32,
    pub dst_savings: i32,
    pub date_time_rule: DateTimeRule,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct TimeZoneRules {
    pub initial: InitialTimeZoneRule,
    pub time_array_rules: Option<NonNull<TimeArrayTimeZoneRule>>,
    pub annual_rules: Option<NonNull<AnnualTimeZoneRule>>,
    pub num_time_array_rules: usize,
    pub num_annual_rules: usize,
}

/// In/out argument of the start-time queries. The caller fills `base`, the
/// previous offsets and `inclusive`; the callee stores into `result`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeZoneRuleQuery {
    pub base: f64,
    pub prev_raw_offset: i32,
    pub prev_dst_savings: i32,
    pub inclusive: bool,
    pub result: f64,
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohi18n"))]
extern "C" {
    pub fn OH_i18n_GetTimeZoneRules(time_zone_id: *const c_char, rules: *mut TimeZoneRules)
        -> ErrorCode;
    pub fn OH_i18n_GetFirstStartFromTimeArrayTimeZoneRule(
        rule: *mut TimeArrayTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetFirstStartFromAnnualTimeZoneRule(
        rule: *mut AnnualTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetFinalStartFromTimeArrayTimeZoneRule(
        rule: *mut TimeArrayTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetFinalStartFromAnnualTimeZoneRule(
        rule: *mut AnnualTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetNextStartFromTimeArrayTimeZoneRule(
        rule: *mut TimeArrayTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetNextStartFromAnnualTimeZoneRule(
        rule: *mut AnnualTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetPrevStartFromTimeArrayTimeZoneRule(
        rule: *mut TimeArrayTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetPrevStartFromAnnualTimeZoneRule(
        rule: *mut AnnualTimeZoneRule,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
    pub fn OH_i18n_GetStartTimeAt(rule: *mut TimeArrayTimeZoneRule, index: i32, result: *mut f64)
        -> ErrorCode;
    pub fn OH_i18n_GetStartInYear(
        rule: *mut AnnualTimeZoneRule,
        year: i32,
        query: *mut TimeZoneRuleQuery,
    ) -> ErrorCode;
}
