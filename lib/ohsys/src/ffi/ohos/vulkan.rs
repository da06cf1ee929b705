//! # Vulkan OpenHarmony Extensions
//!
//! The OpenHarmony extensions of Vulkan, declared in `vulkan_ohos.h`:
//!
//!  * `VK_OHOS_surface` creates surfaces from native windows.
//!  * `VK_OHOS_native_buffer` is the swapchain interface between the loader
//!    and the driver.
//!  * `VK_OHOS_external_memory` imports and exports native buffers as
//!    device memory.
//!
//! Only the core Vulkan definitions these extensions refer to are provided
//! here. Complete core bindings are out of scope of this crate. Handles of
//! dispatchable objects are pointers to opaque types, handles of
//! non-dispatchable objects are 64-bit integers. The extension functions are
//! exported by the loader, `libvulkan.so`.

use core::ffi::{c_void, CStr};
use core::ptr::NonNull;

use crate::ffi::ohos::nativebuffer::NativeBuffer;
use crate::ffi::ohos::nativewindow::NativeWindow;

pub type Flags = u32;
pub type Bool32 = u32;
pub type DeviceSize = u64;

pub type Result = i32;

pub const SUCCESS: Result = 0;
pub const ERROR_OUT_OF_HOST_MEMORY: Result = -1;
pub const ERROR_OUT_OF_DEVICE_MEMORY: Result = -2;
pub const ERROR_INITIALIZATION_FAILED: Result = -3;
pub const ERROR_SURFACE_LOST_KHR: Result = -1000000000;
pub const ERROR_NATIVE_WINDOW_IN_USE_KHR: Result = -1000000001;

pub type StructureType = i32;
pub type Format = i32;
pub type FormatFeatureFlags = Flags;
pub type ImageUsageFlags = Flags;
pub type ComponentSwizzle = i32;
pub type SamplerYcbcrModelConversion = i32;
pub type SamplerYcbcrRange = i32;
pub type ChromaLocation = i32;

opaque! {
    pub struct InstanceT;
    pub struct DeviceT;
    pub struct QueueT;
    pub struct AllocationCallbacks;
    /// Gralloc buffer handle passed between loader and driver.
    pub struct BufferHandle;
}

pub type Instance = *mut InstanceT;
pub type Device = *mut DeviceT;
pub type Queue = *mut QueueT;

pub type SurfaceKHR = u64;
pub type Semaphore = u64;
pub type Fence = u64;
pub type Image = u64;
pub type DeviceMemory = u64;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ComponentMapping {
    pub r: ComponentSwizzle,
    pub g: ComponentSwizzle,
    pub b: ComponentSwizzle,
    pub a: ComponentSwizzle,
}

pub const OHOS_SURFACE_SPEC_VERSION: u32 = 1;
pub const OHOS_SURFACE_EXTENSION_NAME: &CStr = c"VK_OHOS_surface";

pub type SurfaceCreateFlagsOHOS = Flags;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceCreateInfoOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub flags: SurfaceCreateFlagsOHOS,
    pub window: Option<NonNull<NativeWindow>>,
}

pub type PfnCreateSurfaceOHOS = Option<
    unsafe extern "C" fn(
        instance: Instance,
        p_create_info: *const SurfaceCreateInfoOHOS,
        p_allocator: *const AllocationCallbacks,
        p_surface: *mut SurfaceKHR,
    ) -> Result,
>;

pub const OHOS_NATIVE_BUFFER_SPEC_VERSION: u32 = 1;
pub const OHOS_NATIVE_BUFFER_EXTENSION_NAME: &CStr = c"VK_OHOS_native_buffer";

pub type SwapchainImageUsageFlagBitsOHOS = u32;

pub const SWAPCHAIN_IMAGE_USAGE_SHARED_BIT_OHOS: SwapchainImageUsageFlagBitsOHOS = 0x00000001;
pub const SWAPCHAIN_IMAGE_USAGE_FLAG_BITS_MAX_ENUM_OHOS: SwapchainImageUsageFlagBitsOHOS =
    0x7fffffff;

pub type SwapchainImageUsageFlagsOHOS = Flags;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct NativeBufferOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub handle: Option<NonNull<BufferHandle>>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SwapchainImageCreateInfoOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub usage: SwapchainImageUsageFlagsOHOS,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDevicePresentationPropertiesOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub shared_image: Bool32,
}

pub type PfnSetNativeFenceFdOpenHarmony = Option<
    unsafe extern "C" fn(
        device: Device,
        native_fence_fd: i32,
        semaphore: Semaphore,
        fence: Fence,
    ) -> Result,
>;
pub type PfnGetNativeFenceFdOpenHarmony = Option<
    unsafe extern "C" fn(
        queue: Queue,
        wait_semaphore_count: u32,
        p_wait_semaphores: *const Semaphore,
        image: Image,
        p_native_fence_fd: *mut i32,
    ) -> Result,
>;
pub type PfnGetSwapchainGrallocUsageOHOS = Option<
    unsafe extern "C" fn(
        device: Device,
        format: Format,
        image_usage: ImageUsageFlags,
        gralloc_usage: *mut u64,
    ) -> Result,
>;
pub type PfnAcquireImageOHOS = Option<
    unsafe extern "C" fn(
        device: Device,
        image: Image,
        native_fence_fd: i32,
        semaphore: Semaphore,
        fence: Fence,
    ) -> Result,
>;
pub type PfnQueueSignalReleaseImageOHOS = Option<
    unsafe extern "C" fn(
        queue: Queue,
        wait_semaphore_count: u32,
        p_wait_semaphores: *const Semaphore,
        image: Image,
        p_native_fence_fd: *mut i32,
    ) -> Result,
>;

pub const OHOS_EXTERNAL_MEMORY_SPEC_VERSION: u32 = 1;
pub const OHOS_EXTERNAL_MEMORY_EXTENSION_NAME: &CStr = c"VK_OHOS_external_memory";

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct NativeBufferUsageOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub ohos_native_buffer_usage: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct NativeBufferPropertiesOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub allocation_size: DeviceSize,
    pub memory_type_bits: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct NativeBufferFormatPropertiesOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub format: Format,
    pub external_format: u64,
    pub format_features: FormatFeatureFlags,
    pub sampler_ycbcr_conversion_components: ComponentMapping,
    pub suggested_ycbcr_model: SamplerYcbcrModelConversion,
    pub suggested_ycbcr_range: SamplerYcbcrRange,
    pub suggested_x_chroma_offset: ChromaLocation,
    pub suggested_y_chroma_offset: ChromaLocation,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImportNativeBufferInfoOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub buffer: Option<NonNull<NativeBuffer>>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryGetNativeBufferInfoOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub memory: DeviceMemory,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ExternalFormatOHOS {
    pub s_type: StructureType,
    pub p_next: Option<NonNull<c_void>>,
    pub external_format: u64,
}

pub type PfnGetNativeBufferPropertiesOHOS = Option<
    unsafe extern "C" fn(
        device: Device,
        buffer: *const NativeBuffer,
        p_properties: *mut NativeBufferPropertiesOHOS,
    ) -> Result,
>;
pub type PfnGetMemoryNativeBufferOHOS = Option<
    unsafe extern "C" fn(
        device: Device,
        p_info: *const MemoryGetNativeBufferInfoOHOS,
        p_buffer: *mut *mut NativeBuffer,
    ) -> Result,
>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "vulkan"))]
extern "C" {
    pub fn vkCreateSurfaceOHOS(
        instance: Instance,
        p_create_info: *const SurfaceCreateInfoOHOS,
        p_allocator: *const AllocationCallbacks,
        p_surface: *mut SurfaceKHR,
    ) -> Result;
    pub fn vkSetNativeFenceFdOpenHarmony(
        device: Device,
        native_fence_fd: i32,
        semaphore: Semaphore,
        fence: Fence,
    ) -> Result;
    pub fn vkGetNativeFenceFdOpenHarmony(
        queue: Queue,
        wait_semaphore_count: u32,
        p_wait_semaphores: *const Semaphore,
        image: Image,
        p_native_fence_fd: *mut i32,
    ) -> Result;
    pub fn vkGetSwapchainGrallocUsageOHOS(
        device: Device,
        format: Format,
        image_usage: ImageUsageFlags,
        gralloc_usage: *mut u64,
    ) -> Result;
    pub fn vkAcquireImageOHOS(
        device: Device,
        image: Image,
        native_fence_fd: i32,
        semaphore: Semaphore,
        fence: Fence,
    ) -> Result;
    pub fn vkQueueSignalReleaseImageOHOS(
        queue: Queue,
        wait_semaphore_count: u32,
        p_wait_semaphores: *const Semaphore,
        image: Image,
        p_native_fence_fd: *mut i32,
    ) -> Result;
    pub fn vkGetNativeBufferPropertiesOHOS(
        device: Device,
        buffer: *const NativeBuffer,
        p_properties: *mut NativeBufferPropertiesOHOS,
    ) -> Result;
    pub fn vkGetMemoryNativeBufferOHOS(
        device: Device,
        p_info: *const MemoryGetNativeBufferInfoOHOS,
        p_buffer: *mut *mut NativeBuffer,
    ) -> Result;
}
