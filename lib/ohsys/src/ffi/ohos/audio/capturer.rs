//! Capturer handle and the callbacks a stream builder registers for it.

use core::ffi::c_void;

use super::{
    DeviceDescriptorArray, Event, FastStatus, InterruptForceType, InterruptHint, StreamResult,
};

opaque! {
    pub struct Capturer;
}

/// Legacy callback table. Every entry returns 0.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Callbacks {
    pub on_read_data: Option<
        unsafe extern "C" fn(
            capturer: *mut Capturer,
            user_data: *mut c_void,
            buffer: *mut c_void,
            length: i32,
        ) -> i32,
    >,
    pub on_stream_event: Option<
        unsafe extern "C" fn(capturer: *mut Capturer, user_data: *mut c_void, event: Event) -> i32,
    >,
    pub on_interrupt_event: Option<
        unsafe extern "C" fn(
            capturer: *mut Capturer,
            user_data: *mut c_void,
            r#type: InterruptForceType,
            hint: InterruptHint,
        ) -> i32,
    >,
    pub on_error: Option<
        unsafe extern "C" fn(
            capturer: *mut Capturer,
            user_data: *mut c_void,
            error: StreamResult,
        ) -> i32,
    >,
}

pub type OnReadDataCallback = Option<
    unsafe extern "C" fn(
        capturer: *mut Capturer,
        user_data: *mut c_void,
        audio_data: *mut c_void,
        audio_data_size: i32,
    ),
>;
pub type OnDeviceChangeCallback = Option<
    unsafe extern "C" fn(
        capturer: *mut Capturer,
        user_data: *mut c_void,
        device_array: *mut DeviceDescriptorArray,
    ),
>;
pub type OnInterruptCallback = Option<
    unsafe extern "C" fn(
        capturer: *mut Capturer,
        user_data: *mut c_void,
        r#type: InterruptForceType,
        hint: InterruptHint,
    ),
>;
pub type OnErrorCallback = Option<
    unsafe extern "C" fn(capturer: *mut Capturer, user_data: *mut c_void, error: StreamResult),
>;
pub type OnFastStatusChange = Option<
    unsafe extern "C" fn(capturer: *mut Capturer, user_data: *mut c_void, status: FastStatus),
>;
