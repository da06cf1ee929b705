//! # USB Serial Driver Kit
//!
//! Access to USB-to-serial adapters. Declared in `usb_serial_api.h` and
//! `usb_serial_types.h`, and provided by `libusb_serial_ndk.z.so`. Functions
//! return `i32` status values, see [`DdkRetCode`].

use core::ffi::c_int;

pub type DdkRetCode = u32;

pub const DDK_NO_PERM: DdkRetCode = 201;
pub const DDK_INVALID_PARAMETER: DdkRetCode = 401;
pub const DDK_SUCCESS: DdkRetCode = 31600000;
pub const DDK_INVALID_OPERATION: DdkRetCode = 31600001;
pub const DDK_INIT_ERROR: DdkRetCode = 31600002;
pub const DDK_SERVICE_ERROR: DdkRetCode = 31600003;
pub const DDK_MEMORY_ERROR: DdkRetCode = 31600004;
pub const DDK_IO_ERROR: DdkRetCode = 31600005;
pub const DDK_DEVICE_NOT_FOUND: DdkRetCode = 31600006;

opaque! {
    pub struct Device;
}

/// Line parameters. `parity` takes a [`Parity`] value.
#[repr(C, align(8))]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Params {
    pub baud_rate: u32,
    pub n_data_bits: u8,
    pub n_stop_bits: u8,
    pub parity: u8,
}

pub type FlowControl = u32;

pub const NO_FLOW_CONTROL: FlowControl = 0;
pub const SOFTWARE_FLOW_CONTROL: FlowControl = 1;
pub const HARDWARE_FLOW_CONTROL: FlowControl = 2;

pub type Parity = u32;

pub const PARITY_NONE: Parity = 0;
pub const PARITY_ODD: Parity = 1;
pub const PARITY_EVEN: Parity = 2;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "usb_serial_ndk.z"))]
extern "C" {
    pub fn OH_UsbSerial_Init() -> i32;
    pub fn OH_UsbSerial_Release() -> i32;
    pub fn OH_UsbSerial_Open(device_id: u64, interface_index: u8, dev: *mut *mut Device) -> i32;
    pub fn OH_UsbSerial_Close(dev: *mut *mut Device) -> i32;
    pub fn OH_UsbSerial_Read(
        dev: *mut Device,
        buff: *mut u8,
        buffer_size: u32,
        bytes_read: *mut u32,
    ) -> i32;
    pub fn OH_UsbSerial_Write(
        dev: *mut Device,
        buff: *mut u8,
        buffer_size: u32,
        bytes_written: *mut u32,
    ) -> i32;
    pub fn OH_UsbSerial_SetBaudRate(dev: *mut Device, baud_rate: u32) -> i32;
    pub fn OH_UsbSerial_SetParams(dev: *mut Device, params: *mut Params) -> i32;
    pub fn OH_UsbSerial_SetTimeout(dev: *mut Device, timeout: c_int) -> i32;
    pub fn OH_UsbSerial_SetFlowControl(dev: *mut Device, flow_control: FlowControl) -> i32;
    pub fn OH_UsbSerial_Flush(dev: *mut Device) -> i32;
    pub fn OH_UsbSerial_FlushInput(dev: *mut Device) -> i32;
    pub fn OH_UsbSerial_FlushOutput(dev: *mut Device) -> i32;
}
