//! Retro effect processing: soft clipping, lo-fi degradation, echo taps.

mod clip;
mod echo;
mod retro;

pub use clip::{soft_clip, soft_clip_buffer};
pub use echo::{mix_echoes, preset_taps, EchoTap};
pub use retro::RetroChain;
