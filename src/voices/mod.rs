//! Pre-built drum voices.
//!
//! Each voice is a ready-to-use [`VoiceConfig`](crate::patch::VoiceConfig).
//! Use these as starting points for your own sounds, or study them to learn
//! how layered oscillators and pitch sweeps build different drums.
//!
//! # Example
//!
//! ```
//! use drumvoice::{voices, DrumSynth, EngineConfig};
//!
//! let kick = DrumSynth::new(EngineConfig::default(), voices::kick()).unwrap();
//! # let _ = kick;
//! ```

mod clave;
mod cowbell;
mod hihat;
mod kick;
mod snare;
mod tom;

pub use clave::clave;
pub use cowbell::cowbell;
pub use hihat::hihat;
pub use kick::kick;
pub use snare::snare;
pub use tom::tom;

use crate::patch::VoiceConfig;

/// Look a preset up by its name.
pub fn by_name(name: &str) -> Option<VoiceConfig> {
    match name {
        "kick" => Some(kick()),
        "snare" => Some(snare()),
        "tom" => Some(tom()),
        "hihat" => Some(hihat()),
        "cowbell" => Some(cowbell()),
        "clave" => Some(clave()),
        _ => None,
    }
}

pub const NAMES: &[&str] = &["kick", "snare", "tom", "hihat", "cowbell", "clave"];
