//! OpenHarmony Native Interfaces
//!
//! This module provides access to the native interfaces of OpenHarmony as
//! exposed by the system libraries of the NDK. Status codes returned by these
//! interfaces can be checked via [`Domain`].

pub use crate::ffi::ohos as ffi;

mod status;

pub use status::{Domain, Error};
