//! Core data structures for mouse profiles and mapping presets.

pub mod preset;
pub mod profile;

pub use preset::{ActionRef, Preset, CURRENT_PRESET_VERSION};
pub use profile::{MouseButton, MouseFeatures, MouseProfile};
