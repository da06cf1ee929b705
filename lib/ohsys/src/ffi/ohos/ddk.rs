//! # Driver Development Kit
//!
//! The DDK grants user-space drivers access to peripherals that the
//! external device manager bound to an application. Each device class has
//! its own sub-module with an independent library and error code space. The
//! shared base of all classes (shared memory buffers and the base error
//! codes) lives directly in this module and is provided by
//! `libddk_base.z.so`.

pub mod hid;
pub mod scsi;
pub mod usb_serial;

pub type RetCode = u32;

pub const SUCCESS: RetCode = 0;
pub const FAILURE: RetCode = 28600001;
pub const INVALID_PARAMETER: RetCode = 28600002;
pub const INVALID_OPERATION: RetCode = 28600003;
pub const NULL_PTR: RetCode = 28600004;

/// Shared memory buffer for data transfers between a driver and the DDK
/// service. Only `offset`, `buffer_length`, and `transferred_length` may be
/// modified by the driver.
#[repr(C)]
#[derive(Debug)]
pub struct Ashmem {
    pub ashmem_fd: i32,
    pub address: Option<core::ptr::NonNull<u8>>,
    pub size: u32,
    pub offset: u32,
    pub buffer_length: u32,
    pub transferred_length: u32,
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ddk_base.z"))]
extern "C" {
    pub fn OH_DDK_CreateAshmem(name: *const u8, size: u32, ashmem: *mut *mut Ashmem) -> RetCode;
    pub fn OH_DDK_MapAshmem(ashmem: *mut Ashmem, ashmem_map_type: u8) -> RetCode;
    pub fn OH_DDK_DestroyAshmem(ashmem: *mut Ashmem) -> RetCode;
}
