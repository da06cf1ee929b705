//! # Media Foundation
//!
//! Shared media core types: the format, buffer and memory handles used by
//! codecs and sources, the buffer attributes passed alongside them, and the
//! HDR type of `media_types.h`. Provided by `libnative_media_core.so`.

opaque! {
    /// Key-value description of a track, stream or codec configuration.
    pub struct AVFormat;
    pub struct AVBuffer;
    pub struct AVMemory;
}

pub type HdrType = u32;

pub const HDR_TYPE_NONE: HdrType = 0;
pub const HDR_TYPE_VIVID: HdrType = 1;

pub type BufferFlags = u32;

pub const BUFFER_FLAGS_NONE: BufferFlags = 0;
pub const BUFFER_FLAGS_EOS: BufferFlags = 1 << 0;
pub const BUFFER_FLAGS_SYNC_FRAME: BufferFlags = 1 << 1;
pub const BUFFER_FLAGS_INCOMPLETE_FRAME: BufferFlags = 1 << 2;
pub const BUFFER_FLAGS_CODEC_DATA: BufferFlags = 1 << 3;
pub const BUFFER_FLAGS_DISCARD: BufferFlags = 1 << 4;
pub const BUFFER_FLAGS_DISPOSABLE: BufferFlags = 1 << 5;

/// Attributes of a buffer. `pts` is in microseconds, `flags` is a mask of
/// [`BufferFlags`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct BufferAttr {
    pub pts: i64,
    pub size: i32,
    pub offset: i32,
    pub flags: u32,
}
