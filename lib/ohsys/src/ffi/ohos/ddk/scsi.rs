//! # SCSI Peripheral Driver Kit
//!
//! SCSI command access to mass-storage peripherals. Data phases transfer
//! through device memory maps created with
//! [`OH_ScsiPeripheral_CreateDeviceMemMap`].
//!
//! Interfaces are declared in `scsi_peripheral_api.h` and
//! `scsi_peripheral_types.h`, and provided by `libscsi.z.so`. Functions
//! return `i32` status values, see [`DdkErrCode`].

use core::ffi::c_char;
use core::ptr::NonNull;

/// Minimum length of sense data in descriptor format.
pub const MIN_DESCRIPTOR_FORMAT_SENSE: u8 = 8;
/// Minimum length of sense data in fixed format.
pub const MIN_FIXED_FORMAT_SENSE: u8 = 18;
pub const MAX_CMD_DESC_BLOCK_LEN: usize = 16;
pub const MAX_SENSE_DATA_LEN: usize = 252;
pub const VENDOR_ID_LEN: usize = 8;
pub const PRODUCT_ID_LEN: usize = 16;
pub const PRODUCT_REV_LEN: usize = 4;

pub type DdkErrCode = u32;

pub const DDK_NO_PERM: DdkErrCode = 201;
pub const DDK_INVALID_PARAMETER: DdkErrCode = 401;
pub const DDK_SUCCESS: DdkErrCode = 31700000;
pub const DDK_MEMORY_ERROR: DdkErrCode = 31700001;
pub const DDK_INVALID_OPERATION: DdkErrCode = 31700002;
pub const DDK_IO_ERROR: DdkErrCode = 31700003;
pub const DDK_TIMEOUT: DdkErrCode = 31700004;
pub const DDK_INIT_ERROR: DdkErrCode = 31700005;
pub const DDK_SERVICE_ERROR: DdkErrCode = 31700006;
pub const DDK_DEVICE_NOT_FOUND: DdkErrCode = 31700007;

pub type Status = u32;

pub const STATUS_GOOD: Status = 0x00;
pub const STATUS_CHECK_CONDITION_NEEDED: Status = 0x02;
pub const STATUS_CONDITION_MET: Status = 0x04;
pub const STATUS_BUSY: Status = 0x08;
pub const STATUS_RESERVATION_CONFLICT: Status = 0x18;
pub const STATUS_TASK_SET_FULL: Status = 0x28;
pub const STATUS_ACA_ACTIVE: Status = 0x30;
pub const STATUS_TASK_ABORTED: Status = 0x40;

opaque! {
    pub struct Device;
}

/// Device memory map. `address` and `size` are owned by the DDK, the
/// remaining fields describe the window used by the next transfer.
#[repr(C)]
#[derive(Debug)]
pub struct DeviceMemMap {
    pub address: Option<NonNull<u8>>,
    pub size: usize,
    pub offset: u32,
    pub buffer_length: u32,
    pub transferred_length: u32,
}

/// Parameters of READ(10) and WRITE(10).
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct IoRequest {
    pub lb_address: u32,
    pub transfer_length: u16,
    pub control: u8,
    pub byte1: u8,
    pub byte6: u8,
    pub data: Option<NonNull<DeviceMemMap>>,
    pub timeout: u32,
}

/// Raw command descriptor block request.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Request {
    pub command_descriptor_block: [u8; MAX_CMD_DESC_BLOCK_LEN],
    pub cdb_length: u8,
    pub data_transfer_direction: i8,
    pub data: Option<NonNull<DeviceMemMap>>,
    pub timeout: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Response {
    pub sense_data: [u8; MAX_SENSE_DATA_LEN],
    pub status: Status,
    pub masked_status: u8,
    pub msg_status: u8,
    pub sb_len_wr: u8,
    pub host_status: u16,
    pub driver_status: u16,
    pub res_id: i32,
    pub duration: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct TestUnitReadyRequest {
    pub control: u8,
    pub timeout: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct InquiryRequest {
    pub page_code: u8,
    pub allocation_length: u16,
    pub control: u8,
    pub byte1: u8,
    pub timeout: u32,
}

/// Result of INQUIRY. Identification strings are NUL-terminated.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct InquiryInfo {
    pub device_type: u8,
    pub id_vendor: [c_char; VENDOR_ID_LEN + 1],
    pub id_product: [c_char; PRODUCT_ID_LEN + 1],
    pub rev_product: [c_char; PRODUCT_REV_LEN + 1],
    pub data: Option<NonNull<DeviceMemMap>>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ReadCapacityRequest {
    pub lb_address: u32,
    pub control: u8,
    pub byte8: u8,
    pub timeout: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct CapacityInfo {
    pub lb_address: u32,
    pub lb_length: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct RequestSenseRequest {
    pub allocation_length: u8,
    pub control: u8,
    pub byte1: u8,
    pub timeout: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct BasicSenseInfo {
    pub response_code: u8,
    pub valid: bool,
    pub information: u64,
    pub command_specific: u64,
    pub sksv: bool,
    pub sense_key_specific: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct VerifyRequest {
    pub lb_address: u32,
    pub verification_length: u16,
    pub control: u8,
    pub byte1: u8,
    pub byte6: u8,
    pub timeout: u32,
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "scsi.z"))]
extern "C" {
    pub fn OH_ScsiPeripheral_Init() -> i32;
    pub fn OH_ScsiPeripheral_Release() -> i32;
    pub fn OH_ScsiPeripheral_Open(device_id: u64, interface_index: u8, dev: *mut *mut Device)
        -> i32;
    pub fn OH_ScsiPeripheral_Close(dev: *mut *mut Device) -> i32;
    pub fn OH_ScsiPeripheral_TestUnitReady(
        dev: *mut Device,
        request: *mut TestUnitReadyRequest,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_Inquiry(
        dev: *mut Device,
        request: *mut InquiryRequest,
        inquiry_info: *mut InquiryInfo,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_ReadCapacity10(
        dev: *mut Device,
        request: *mut ReadCapacityRequest,
        capacity_info: *mut CapacityInfo,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_RequestSense(
        dev: *mut Device,
        request: *mut RequestSenseRequest,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_Read10(
        dev: *mut Device,
        request: *mut IoRequest,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_Write10(
        dev: *mut Device,
        request: *mut IoRequest,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_Verify10(
        dev: *mut Device,
        request: *mut VerifyRequest,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_SendRequestByCdb(
        dev: *mut Device,
        request: *mut Request,
        response: *mut Response,
    ) -> i32;
    pub fn OH_ScsiPeripheral_CreateDeviceMemMap(
        dev: *mut Device,
        size: usize,
        dev_mmap: *mut *mut DeviceMemMap,
    ) -> i32;
    pub fn OH_ScsiPeripheral_DestroyDeviceMemMap(dev_mmap: *mut DeviceMemMap) -> i32;
    pub fn OH_ScsiPeripheral_ParseBasicSenseInfo(
        sense_data: *mut u8,
        sense_data_len: u8,
        sense_info: *mut BasicSenseInfo,
    ) -> i32;
}
