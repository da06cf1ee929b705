//! # Media Source
//!
//! Demuxer input: a media file, URI or user data source, queried for its
//! source and per-track formats. Declared in `native_avsource.h` and provided
//! by `libnative_media_avsource.so`.

use core::ffi::{c_char, c_void};

use super::{DataSource, DataSourceExt, ErrCode};
use crate::ffi::ohos::media::AVFormat;

opaque! {
    pub struct AVSource;
}

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "native_media_avsource"))]
extern "C" {
    pub fn OH_AVSource_CreateWithDataSource(data_source: *mut DataSource) -> *mut AVSource;
    pub fn OH_AVSource_CreateWithDataSourceExt(
        data_source: *mut DataSourceExt,
        user_data: *mut c_void,
    ) -> *mut AVSource;
    pub fn OH_AVSource_CreateWithURI(uri: *mut c_char) -> *mut AVSource;
    pub fn OH_AVSource_CreateWithFD(fd: i32, offset: i64, size: i64) -> *mut AVSource;
    pub fn OH_AVSource_Destroy(source: *mut AVSource) -> ErrCode;
    pub fn OH_AVSource_GetSourceFormat(source: *mut AVSource) -> *mut AVFormat;
    pub fn OH_AVSource_GetTrackFormat(source: *mut AVSource, track_index: u32) -> *mut AVFormat;
    pub fn OH_AVSource_GetCustomMetadataFormat(source: *mut AVSource) -> *mut AVFormat;
}
