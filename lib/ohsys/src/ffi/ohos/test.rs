//! # Tests for the OpenHarmony FFI Definitions
//!
//! This module contains tests for the exported FFI definitions of the
//! `ffi::ohos` module. Layouts are verified against the C ABI of the LP64
//! targets supported by OpenHarmony (`aarch64` and `x86_64`).

use super::*;

// View the memory of a value as bytes. Padding bytes have no defined value,
// so this must only be used with padding-free types like plain integers.
fn as_bytes<T>(v: &T) -> &[u8] {
    // SAFETY: We retain the size of `T` and the lifetime of the borrow, and
    //         `v` stays immutably borrowed for as long as the slice lives.
    unsafe { core::slice::from_raw_parts(v as *const T as *const u8, core::mem::size_of::<T>()) }
}

// Compare two `const` definitions for equality. This will compare their type
// layout and memory content for equality.
fn eq_def_const<A, B>(a: &A, b: &B) -> bool {
    core::mem::size_of::<A>() == core::mem::size_of::<B>()
    && core::mem::align_of::<A>() == core::mem::align_of::<B>()
    && as_bytes(a) == as_bytes(b)
}

// Verify size and alignment of a type.
macro_rules! layout {
    ($ty:ty, $size:expr, $align:expr) => {
        assert_eq!(core::mem::size_of::<$ty>(), $size, "size of {}", stringify!($ty));
        assert_eq!(core::mem::align_of::<$ty>(), $align, "align of {}", stringify!($ty));
    };
}

// Verify the offset of a structure member.
macro_rules! offset {
    ($ty:ty, $field:ident, $offset:expr) => {
        assert_eq!(
            core::mem::offset_of!($ty, $field),
            $offset,
            "offset of {}::{}",
            stringify!($ty),
            stringify!($field),
        );
    };
}

// Verify that opaque types are zero-sized and byte-aligned, so they can only
// be used behind pointers.
#[test]
fn opaque() {
    layout!(audio::DeviceDescriptor, 0, 1);
    layout!(audio::renderer::Renderer, 0, 1);
    layout!(avcodec::AVCodec, 0, 1);
    layout!(ddk::hid::DeviceHandle, 0, 1);
    layout!(gamecontroller::device::DeviceInfo, 0, 1);
    layout!(hidebug::Backtrace, 0, 1);
    layout!(media::AVFormat, 0, 1);
    layout!(nativewindow::NativeWindow, 0, 1);
    layout!(udmf::Data, 0, 1);
    layout!(vsync::NativeVSync, 0, 1);
}

// Verify plain structures of fixed-size integers and floats, which have the
// same layout on all targets.
#[test]
fn layout_fixed() {
    layout!(ddk::hid::EmitItem, 8, 4);
    layout!(ddk::hid::RawDevInfo, 8, 4);
    layout!(ddk::scsi::CapacityInfo, 8, 4);
    layout!(ddk::scsi::InquiryRequest, 12, 4);
    layout!(ddk::scsi::ReadCapacityRequest, 12, 4);
    layout!(ddk::scsi::RequestSenseRequest, 8, 4);
    layout!(ddk::scsi::Response, 272, 4);
    layout!(ddk::scsi::TestUnitReadyRequest, 8, 4);
    layout!(ddk::scsi::VerifyRequest, 16, 4);
    layout!(ddk::usb_serial::Params, 8, 8);
    layout!(effect::ColorMatrix, 80, 4);
    layout!(hidebug::GraphicsMemorySummary, 8, 4);
    layout!(hidebug::MemoryLimit, 16, 8);
    layout!(hidebug::NativeMemInfo, 28, 4);
    layout!(hidebug::SystemMemInfo, 12, 4);
    layout!(i18n::DateTimeRule, 28, 4);
    layout!(i18n::InitialTimeZoneRule, 8, 4);
    layout!(media::BufferAttr, 24, 8);
    layout!(nativebuffer::ColorXY, 8, 4);
    layout!(nativebuffer::Cta861, 8, 4);
    layout!(nativebuffer::Smpte2086, 40, 4);
    layout!(nativebuffer::StaticMetadata, 48, 4);
    layout!(pasteboard::ProgressInfo, 4, 4);
    layout!(vsync::ExpectedRateRange, 12, 4);
    layout!(vulkan::ComponentMapping, 16, 4);
    layout!(window::AvoidArea, 64, 4);
    layout!(window::Rect, 16, 4);
    layout!(window::WindowProperties, 56, 4);

    offset!(ddk::scsi::InquiryRequest, allocation_length, 2);
    offset!(ddk::scsi::InquiryRequest, timeout, 8);
    offset!(ddk::scsi::ReadCapacityRequest, timeout, 8);
    offset!(ddk::scsi::RequestSenseRequest, timeout, 4);
    offset!(ddk::scsi::Response, status, 252);
    offset!(ddk::scsi::Response, host_status, 260);
    offset!(ddk::scsi::Response, res_id, 264);
    offset!(ddk::scsi::TestUnitReadyRequest, timeout, 4);
    offset!(ddk::scsi::VerifyRequest, timeout, 12);
    offset!(media::BufferAttr, flags, 16);
    offset!(nativebuffer::Smpte2086, max_luminance, 32);
    offset!(nativebuffer::StaticMetadata, cta861, 40);
    offset!(window::WindowProperties, brightness, 40);
    offset!(window::WindowProperties, id, 48);
}

// Verify structures with pointers, callbacks and unions on 64-bit targets.
#[cfg(target_pointer_width = "64")]
#[test]
fn layout_lp64() {
    layout!(audio::DeviceDescriptorArray, 16, 8);
    layout!(audio::capturer::Callbacks, 32, 8);
    layout!(audio::renderer::Callbacks, 32, 8);
    layout!(avcodec::AsyncCallback, 32, 8);
    layout!(avcodec::Callback, 32, 8);
    layout!(avcodec::DataSource, 16, 8);
    layout!(avcodec::DataSourceExt, 16, 8);
    layout!(clouddisk::ChangeData, 88, 8);
    layout!(clouddisk::ChangesResult, 24, 8);
    layout!(clouddisk::DisplayNameInfo, 24, 8);
    layout!(clouddisk::FailedList, 24, 8);
    layout!(clouddisk::FileSyncState, 24, 8);
    layout!(clouddisk::PathInfo, 16, 8);
    layout!(clouddisk::ResultList, 32, 8);
    layout!(clouddisk::SyncFolder, 48, 8);
    layout!(ddk::Ashmem, 32, 8);
    layout!(ddk::hid::AbsAxesArray, 16, 8);
    layout!(ddk::hid::Device, 32, 8);
    layout!(ddk::hid::EventProperties, 80 + 4 * 4 * ddk::hid::ABS_CNT, 8);
    layout!(ddk::hid::EventTypeArray, 16, 8);
    layout!(ddk::hid::KeyCodeArray, 16, 8);
    layout!(ddk::hid::MscEventArray, 16, 8);
    layout!(ddk::hid::RelAxesArray, 16, 8);
    layout!(ddk::scsi::BasicSenseInfo, 32, 8);
    layout!(ddk::scsi::DeviceMemMap, 32, 8);
    layout!(ddk::scsi::InquiryInfo, 40, 8);
    layout!(ddk::scsi::IoRequest, 32, 8);
    layout!(ddk::scsi::Request, 40, 8);
    layout!(hiappevent::AppEventGroup, 24, 8);
    layout!(hiappevent::AppEventInfo, 32, 8);
    layout!(hidebug::JsStackFrame, 48, 8);
    layout!(hidebug::MallocDispatch, 48, 8);
    layout!(hidebug::NativeStackFrame, 48, 8);
    layout!(hidebug::ProcessSamplerConfig, 24, 8);
    layout!(hidebug::StackFrame, 56, 8);
    layout!(hidebug::StackFrameData, 48, 8);
    layout!(hidebug::ThreadCpuUsage, 24, 8);
    layout!(huks::Blob, 16, 8);
    layout!(huks::Param, 24, 8);
    layout!(huks::ParamSet, 8, 8);
    layout!(huks::ParamValue, 16, 8);
    layout!(huks::Result, 24, 8);
    layout!(i18n::AnnualTimeZoneRule, 56, 8);
    layout!(i18n::TimeArrayTimeZoneRule, 32, 8);
    layout!(i18n::TimeZoneRuleQuery, 32, 8);
    layout!(i18n::TimeZoneRules, 40, 8);
    layout!(imageeffect::Any, 16, 8);
    layout!(imageeffect::DataValue, 8, 8);
    layout!(pasteboard::GetDataParams, 40, 8);
    layout!(pasteboard::ProgressListener, 8, 8);
    layout!(pasteboard::ProgressSignal, 8, 8);
    layout!(vulkan::ExternalFormatOHOS, 24, 8);
    layout!(vulkan::ImportNativeBufferInfoOHOS, 24, 8);
    layout!(vulkan::MemoryGetNativeBufferInfoOHOS, 24, 8);
    layout!(vulkan::NativeBufferFormatPropertiesOHOS, 72, 8);
    layout!(vulkan::NativeBufferOHOS, 24, 8);
    layout!(vulkan::NativeBufferPropertiesOHOS, 32, 8);
    layout!(vulkan::NativeBufferUsageOHOS, 24, 8);
    layout!(vulkan::PhysicalDevicePresentationPropertiesOHOS, 24, 8);
    layout!(vulkan::SurfaceCreateInfoOHOS, 32, 8);
    layout!(vulkan::SwapchainImageCreateInfoOHOS, 24, 8);

    offset!(clouddisk::ChangeData, operation_type, 56);
    offset!(clouddisk::ChangeData, size, 64);
    offset!(clouddisk::ChangesResult, buffer_length, 16);
    offset!(clouddisk::ChangesResult, change_datas, 24);
    offset!(clouddisk::FailedList, error_reason, 16);
    offset!(clouddisk::ResultList, sync_state, 20);
    offset!(clouddisk::DisplayNameInfo, custom_alias, 8);
    offset!(ddk::Ashmem, address, 8);
    offset!(ddk::hid::Device, properties, 16);
    offset!(ddk::hid::EventProperties, hid_abs_max, 80);
    offset!(ddk::scsi::BasicSenseInfo, information, 8);
    offset!(ddk::scsi::BasicSenseInfo, sense_key_specific, 28);
    offset!(ddk::scsi::InquiryInfo, data, 32);
    offset!(ddk::scsi::IoRequest, data, 16);
    offset!(ddk::scsi::Request, data, 24);
    offset!(hiappevent::AppEventInfo, params, 24);
    offset!(hidebug::ThreadCpuUsage, cpu_usage, 8);
    offset!(hidebug::StackFrame, frame, 8);
    offset!(huks::Blob, data, 8);
    offset!(huks::Param, value, 8);
    offset!(huks::ParamSet, params, 8);
    offset!(i18n::AnnualTimeZoneRule, date_time_rule, 24);
    offset!(i18n::TimeZoneRuleQuery, result, 24);
    offset!(imageeffect::Any, data_value, 8);
    offset!(pasteboard::GetDataParams, progress_listener, 24);
    offset!(vulkan::NativeBufferFormatPropertiesOHOS, external_format, 24);
    offset!(vulkan::NativeBufferFormatPropertiesOHOS, sampler_ycbcr_conversion_components, 36);
    offset!(vulkan::NativeBufferPropertiesOHOS, memory_type_bits, 24);
    offset!(vulkan::SurfaceCreateInfoOHOS, window, 24);
}

// Verify that `Option<NonNull<T>>` fields and callbacks stay pointer-sized,
// so they can stand in for nullable C pointers.
#[test]
fn nullable_pointers() {
    let size = core::mem::size_of::<*mut u8>();
    let align = core::mem::align_of::<*mut u8>();

    layout!(Option<core::ptr::NonNull<u8>>, size, align);
    layout!(avcodec::OnError, size, align);
    layout!(hiappevent::ParamList, size, align);
}

// Spot-check constants that are derived from other definitions.
#[test]
fn constants() {
    assert_eq!(avcodec::channel::STEREO, 0x3);
    assert_eq!(avcodec::channel::CH_5POINT0, 0x607);
    assert_eq!(avcodec::channel::CH_5POINT1, 0x60f);
    assert_eq!(hidebug::TRACE_TAG_FFRT, 0x2000);
    assert_eq!(huks::TAG_TYPE_BYTES, 0x5000_0000);
    assert_eq!(huks::TAG_TYPE_BYTES & huks::TAG_TYPE_MASK, huks::TAG_TYPE_BYTES);
    assert_eq!(i18n::MAX_YEAR_IN_ANNUAL_TIMEZONE_RULE, i32::MAX);
    assert_eq!(input::KEYCODE_A, 2017);
    assert_eq!(input::KEYCODE_ENTER, 2054);
    assert_eq!(preferences::E_INNER_ERROR, preferences::BASE);
    assert_eq!(preferences::DELETE_FILE_FAIL, 15500010);

    // Success codes differ between driver kits.
    assert_eq!(ddk::hid::DDK_SUCCESS, 0);
    assert_eq!(ddk::scsi::DDK_SUCCESS, 31700000);
    assert_eq!(ddk::usb_serial::DDK_SUCCESS, 31600000);

    // Codes shared across kits must agree.
    assert!(eq_def_const(&ddk::scsi::DDK_NO_PERM, &ddk::usb_serial::DDK_NO_PERM));
    assert!(eq_def_const(
        &ddk::scsi::DDK_INVALID_PARAMETER,
        &ddk::usb_serial::DDK_INVALID_PARAMETER,
    ));
    assert!(eq_def_const(&gamecontroller::PARAM_ERROR, &ddk::scsi::DDK_INVALID_PARAMETER));
}

// Verify the SDK version constants of the C library.
#[test]
fn sdk_versions() {
    assert_eq!(syscap::SDK_VERSION_7, 7);
    assert_eq!(syscap::SDK_VERSION_8, 8);
    assert_eq!(syscap::SDK_VERSION_9, 9);
    assert_eq!(syscap::SDK_VERSION_FUTURE, 9999);
    assert!(eq_def_const(&syscap::SDK_VERSION_FUTURE, &9999i32));
}

// Verify string constants are NUL-terminated C strings with the expected
// content.
#[test]
fn strings() {
    assert_eq!(hiappevent::DOMAIN_OS.to_bytes(), b"OS");
    assert_eq!(hiappevent::EVENT_APP_CRASH.to_bytes(), b"APP_CRASH");
    assert_eq!(vulkan::OHOS_SURFACE_EXTENSION_NAME.to_bytes(), b"VK_OHOS_surface");
    assert_eq!(
        vulkan::OHOS_EXTERNAL_MEMORY_EXTENSION_NAME.to_bytes_with_nul(),
        b"VK_OHOS_external_memory\0",
    );
}
