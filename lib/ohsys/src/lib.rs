//! # OpenHarmony Native Development Kit Interfaces
//!
//! This library provides the _**N**ative **D**evelopment **K**it_ interfaces
//! of OpenHarmony as raw Rust definitions. It does not require any particular
//! runtime, but can optionally be combined with the Rust Standard Library.

#![no_std]

extern crate core;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod ffi;
pub mod ohos;
