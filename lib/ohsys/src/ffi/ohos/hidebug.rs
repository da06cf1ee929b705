//! # HiDebug
//!
//! Process introspection: CPU usage, memory statistics and limits, app trace
//! capture, malloc hooking through a dispatch table, and frame-pointer
//! backtraces with symbolization.
//!
//! Interfaces are declared in `hidebug.h` and `hidebug_type.h`, and provided
//! by `libohhidebug.so`.

use core::ffi::{c_char, c_int, c_void};
use core::ptr::NonNull;

pub type ErrorCode = u32;

pub const SUCCESS: ErrorCode = 0;
pub const INVALID_ARGUMENT: ErrorCode = 401;
pub const TRACE_CAPTURED_ALREADY: ErrorCode = 11400102;
pub const NO_PERMISSION: ErrorCode = 11400103;
pub const TRACE_ABNORMAL: ErrorCode = 11400104;
pub const NO_TRACE_RUNNING: ErrorCode = 11400105;
pub const INVALID_SYMBOLIC_PC_ADDRESS: ErrorCode = 11400200;
pub const NOT_SUPPORTED: ErrorCode = 11400300;
pub const UNDER_SAMPLING: ErrorCode = 11400301;
pub const RESOURCE_UNAVAILABLE: ErrorCode = 11400302;

/// Node of the per-thread CPU usage list. The list is released with
/// [`OH_HiDebug_FreeThreadCpuUsage`].
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ThreadCpuUsage {
    pub thread_id: u32,
    pub cpu_usage: f64,
    pub next: Option<NonNull<ThreadCpuUsage>>,
}

pub type ThreadCpuUsagePtr = *mut ThreadCpuUsage;

/// System memory in KiB.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct SystemMemInfo {
    pub total_mem: u32,
    pub free_mem: u32,
    pub available_mem: u32,
}

/// Process memory in KiB.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct NativeMemInfo {
    pub pss: u32,
    pub vss: u32,
    pub rss: u32,
    pub shared_dirty: u32,
    pub private_dirty: u32,
    pub shared_clean: u32,
    pub private_clean: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct MemoryLimit {
    pub rss_limit: u64,
    pub vss_limit: u64,
}

pub type TraceFlag = u32;

pub const TRACE_FLAG_MAIN_THREAD: TraceFlag = 1;
pub const TRACE_FLAG_ALL_THREADS: TraceFlag = 2;

pub const TRACE_TAG_FFRT: u64 = 1 << 13;
pub const TRACE_TAG_COMMON_LIBRARY: u64 = 1 << 16;
pub const TRACE_TAG_HDF: u64 = 1 << 18;
pub const TRACE_TAG_NET: u64 = 1 << 23;
pub const TRACE_TAG_NWEB: u64 = 1 << 24;
pub const TRACE_TAG_DISTRIBUTED_AUDIO: u64 = 1 << 27;
pub const TRACE_TAG_FILE_MANAGEMENT: u64 = 1 << 29;
pub const TRACE_TAG_OHOS: u64 = 1 << 30;
pub const TRACE_TAG_ABILITY_MANAGER: u64 = 1 << 31;
pub const TRACE_TAG_CAMERA: u64 = 1 << 32;
pub const TRACE_TAG_MEDIA: u64 = 1 << 33;
pub const TRACE_TAG_IMAGE: u64 = 1 << 34;
pub const TRACE_TAG_AUDIO: u64 = 1 << 35;
pub const TRACE_TAG_DISTRIBUTED_DATA: u64 = 1 << 36;
pub const TRACE_TAG_GRAPHICS: u64 = 1 << 38;
pub const TRACE_TAG_ARKUI: u64 = 1 << 39;
pub const TRACE_TAG_NOTIFICATION: u64 = 1 << 40;
pub const TRACE_TAG_MISC: u64 = 1 << 41;
pub const TRACE_TAG_MULTIMODAL_INPUT: u64 = 1 << 42;
pub const TRACE_TAG_RPC: u64 = 1 << 46;
pub const TRACE_TAG_ARK: u64 = 1 << 47;
pub const TRACE_TAG_WINDOW_MANAGER: u64 = 1 << 48;
pub const TRACE_TAG_DISTRIBUTED_SCREEN: u64 = 1 << 50;
pub const TRACE_TAG_DISTRIBUTED_CAMERA: u64 = 1 << 51;
pub const TRACE_TAG_DISTRIBUTED_HARDWARE_FRAMEWORK: u64 = 1 << 52;
pub const TRACE_TAG_GLOBAL_RESOURCE_MANAGER: u64 = 1 << 53;
pub const TRACE_TAG_DISTRIBUTED_HARDWARE_DEVICE_MANAGER: u64 = 1 << 54;
pub const TRACE_TAG_SAMGR: u64 = 1 << 55;
pub const TRACE_TAG_POWER_MANAGER: u64 = 1 << 56;
pub const TRACE_TAG_DISTRIBUTED_SCHEDULER: u64 = 1 << 57;
pub const TRACE_TAG_DISTRIBUTED_INPUT: u64 = 1 << 59;
pub const TRACE_TAG_BLUETOOTH: u64 = 1 << 60;

/// Allocator hooks installed with [`OH_HiDebug_SetMallocDispatchTable`].
/// Unset entries fall through to the default table.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct MallocDispatch {
    pub malloc: Option<unsafe extern "C" fn(size: usize) -> *mut c_void>,
    pub calloc: Option<unsafe extern "C" fn(nmemb: usize, size: usize) -> *mut c_void>,
    pub realloc: Option<unsafe extern "C" fn(ptr: *mut c_void, size: usize) -> *mut c_void>,
    pub free: Option<unsafe extern "C" fn(ptr: *mut c_void)>,
    pub mmap: Option<
        unsafe extern "C" fn(
            addr: *mut c_void,
            length: usize,
            prot: c_int,
            flags: c_int,
            fd: c_int,
            offset: libc::off_t,
        ) -> *mut c_void,
    >,
    pub munmap: Option<unsafe extern "C" fn(addr: *mut c_void, length: usize) -> c_int>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct JsStackFrame {
    pub relative_pc: u64,
    pub line: i32,
    pub column: i32,
    pub map_name: Option<NonNull<c_char>>,
    pub function_name: Option<NonNull<c_char>>,
    pub url: Option<NonNull<c_char>>,
    pub package_name: Option<NonNull<c_char>>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct NativeStackFrame {
    pub relative_pc: u64,
    pub func_offset: u64,
    pub map_name: Option<NonNull<c_char>>,
    pub function_name: Option<NonNull<c_char>>,
    pub build_id: Option<NonNull<c_char>>,
    pub reserved: Option<NonNull<c_char>>,
}

pub type StackFrameType = u32;

pub const STACK_FRAME_TYPE_JS: StackFrameType = 1;
pub const STACK_FRAME_TYPE_NATIVE: StackFrameType = 2;

/// Frame payload, selected by [`StackFrame::r#type`].
#[repr(C)]
#[derive(Clone, Copy)]
pub union StackFrameData {
    pub js: JsStackFrame,
    pub native: NativeStackFrame,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct StackFrame {
    pub r#type: StackFrameType,
    pub frame: StackFrameData,
}

opaque! {
    pub struct Backtrace;
}

pub type BacktraceObject = *mut Backtrace;

/// Graphics memory in KiB.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct GraphicsMemorySummary {
    pub gl: u32,
    pub graph: u32,
}

/// Sampling request. `tids` holds `size` thread IDs.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ProcessSamplerConfig {
    pub tids: Option<NonNull<u32>>,
    pub size: u32,
    pub frequency: u32,
    pub duration: u32,
    pub reserved: u32,
}

pub type CrashObjType = u32;

pub const CRASHOBJ_STRING: CrashObjType = 0;
pub const CRASHOBJ_MEMORY_64B: CrashObjType = 1;
pub const CRASHOBJ_MEMORY_256B: CrashObjType = 2;
pub const CRASHOBJ_MEMORY_1024B: CrashObjType = 3;
pub const CRASHOBJ_MEMORY_2048B: CrashObjType = 4;
pub const CRASHOBJ_MEMORY_4096B: CrashObjType = 5;

pub type SymbolicAddressCallback =
    Option<unsafe extern "C" fn(pc: *mut c_void, arg: *mut c_void, frame: *const StackFrame)>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohhidebug"))]
extern "C" {
    pub fn OH_HiDebug_GetSystemCpuUsage() -> f64;
    pub fn OH_HiDebug_GetAppCpuUsage() -> f64;
    pub fn OH_HiDebug_GetAppThreadCpuUsage() -> ThreadCpuUsagePtr;
    pub fn OH_HiDebug_FreeThreadCpuUsage(thread_cpu_usage: *mut ThreadCpuUsagePtr);
    pub fn OH_HiDebug_GetSystemMemInfo(system_mem_info: *mut SystemMemInfo);
    pub fn OH_HiDebug_GetAppNativeMemInfo(native_mem_info: *mut NativeMemInfo);
    pub fn OH_HiDebug_GetAppNativeMemInfoWithCache(
        native_mem_info: *mut NativeMemInfo,
        force_refresh: bool,
    );
    pub fn OH_HiDebug_GetAppMemoryLimit(memory_limit: *mut MemoryLimit);
    /// Starts tracing into a file whose path is written to `file_name`,
    /// a buffer of `length` bytes.
    pub fn OH_HiDebug_StartAppTraceCapture(
        flag: TraceFlag,
        tags: u64,
        limit_size: u32,
        file_name: *mut c_char,
        length: u32,
    ) -> ErrorCode;
    pub fn OH_HiDebug_StopAppTraceCapture() -> ErrorCode;
    pub fn OH_HiDebug_GetGraphicsMemory(value: *mut u32) -> ErrorCode;
    pub fn OH_HiDebug_SetMallocDispatchTable(dispatch_table: *mut MallocDispatch) -> ErrorCode;
    pub fn OH_HiDebug_GetDefaultMallocDispatchTable() -> *mut MallocDispatch;
    pub fn OH_HiDebug_RestoreMallocDispatchTable();
    /// Returns the number of program counters stored in `pc_array`.
    pub fn OH_HiDebug_BacktraceFromFp(
        object: BacktraceObject,
        start_fp: *mut c_void,
        pc_array: *mut *mut c_void,
        size: c_int,
    ) -> c_int;
    pub fn OH_HiDebug_SymbolicAddress(
        object: BacktraceObject,
        pc: *mut c_void,
        arg: *mut c_void,
        callback: SymbolicAddressCallback,
    ) -> ErrorCode;
    pub fn OH_HiDebug_CreateBacktraceObject() -> BacktraceObject;
    pub fn OH_HiDebug_DestroyBacktraceObject(object: BacktraceObject);
    pub fn OH_HiDebug_GetGraphicsMemorySummary(interval: u32, summary: *mut GraphicsMemorySummary)
        -> ErrorCode;
}
