//! Simon Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Pure Functions und die Spiel-Zustandsmaschine.

#![no_std]

#[macro_use]
mod fmt;

pub mod cues;
pub mod game;
pub mod logic;
pub mod melody;
pub mod tone;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use cues::CueEffects;
pub use game::{GameController, GameError, channel_note};
pub use logic::{generate_challenge, validate_input};
pub use melody::{INTRO_ARPEGGIO, TWINKLE_STAR};
pub use tone::{ToneCommand, ToneSynthesizer};
pub use traits::{GameHardware, HardwareError, InputEvents};
pub use types::{
    Beats, Challenge, ChannelId, ConfigError, GameConfig, GamePhase, MelodyStep, Note, Outcome,
    Resolution, Session,
};
