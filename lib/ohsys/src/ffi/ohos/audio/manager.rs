//! # Audio Manager
//!
//! Process-wide audio manager, the audio scene, and loudness gain of
//! renderers.

use core::ffi::c_void;

use super::renderer::Renderer;
use super::{CommonResult, Scene, StreamResult};

opaque! {
    pub struct Manager;
}

pub type OnAudioSceneChangeCallback =
    Option<unsafe extern "C" fn(user_data: *mut c_void, scene: Scene)>;

#[cfg_attr(all(feature = "link", target_env = "ohos"), link(name = "ohaudio"))]
extern "C" {
    pub fn OH_GetAudioManager(audio_manager: *mut *mut Manager) -> CommonResult;
    pub fn OH_GetAudioScene(manager: *mut Manager, scene: *mut Scene) -> CommonResult;
    pub fn OH_AudioManager_RegisterAudioSceneChangeCallback(
        manager: *mut Manager,
        callback: OnAudioSceneChangeCallback,
        user_data: *mut c_void,
    ) -> CommonResult;
    pub fn OH_AudioManager_UnregisterAudioSceneChangeCallback(
        manager: *mut Manager,
        callback: OnAudioSceneChangeCallback,
    ) -> CommonResult;
    pub fn OH_AudioRenderer_SetLoudnessGain(renderer: *mut Renderer, loudness_gain: f32)
        -> StreamResult;
    pub fn OH_AudioRenderer_GetLoudnessGain(renderer: *mut Renderer, loudness_gain: *mut f32)
        -> StreamResult;
}
