//! Licht- und Ton-Animationen
//!
//! Alle Effekte laufen streng sequentiell: jeder Schritt (inkl. Ton)
//! ist fertig bevor der nächste beginnt.

use crate::melody::INTRO_ARPEGGIO;
use crate::tone::ToneSynthesizer;
use crate::traits::{GameHardware, HardwareError};
use crate::types::{Beats, ChannelId, MelodyStep, Note};

/// Dauer des Bereit-Pulses in ms
pub const READY_PULSE_MS: u32 = 1000;

/// Pause nach jeder Intro-Note in ms
pub const INTRO_PAUSE_MS: u32 = 200;

/// Länge einer Intro-Note in Schlägen
pub const INTRO_NOTE_BEATS: Beats = Beats::HALF;

/// Halbe Blink-Periode beim Fehler-Effekt in ms
pub const FAILURE_BLINK_MS: u32 = 500;

/// Standard-Anzahl Blinks beim Fehler-Effekt
pub const DEFAULT_FAILURE_BLINKS: u32 = 3;

/// Wiederverwendbare Animationen über alle Kanal-LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueEffects {
    channel_count: usize,
    synth: ToneSynthesizer,
}

impl CueEffects {
    pub const fn new(channel_count: usize, synth: ToneSynthesizer) -> Self {
        Self {
            channel_count,
            synth,
        }
    }

    pub const fn synth(&self) -> &ToneSynthesizer {
        &self.synth
    }

    /// Schaltet alle Kanal-LEDs gemeinsam
    pub fn set_all<H: GameHardware>(&self, hardware: &mut H, on: bool) -> Result<(), HardwareError> {
        (0..self.channel_count).try_for_each(|channel| hardware.set_indicator(channel, on))
    }

    /// Spielt einen einzelnen Cue: LED an, Note, LED aus
    pub async fn cue<H: GameHardware>(
        &self,
        hardware: &mut H,
        channel: ChannelId,
        note: Note,
        beats: Beats,
    ) -> Result<(), HardwareError> {
        hardware.set_indicator(channel, true)?;
        self.synth.play(hardware, note, beats).await?;
        hardware.set_indicator(channel, false)
    }

    /// Alle LEDs für `READY_PULSE_MS` an, dann aus
    pub async fn ready_pulse<H: GameHardware>(&self, hardware: &mut H) -> Result<(), HardwareError> {
        info!("Cue: ready pulse");
        self.set_all(hardware, true)?;
        hardware.wait_ms(READY_PULSE_MS).await;
        self.set_all(hardware, false)
    }

    /// Arpeggio über die ersten vier Kanäle
    pub async fn intro_arpeggio<H: GameHardware>(&self, hardware: &mut H) -> Result<(), HardwareError> {
        info!("Cue: intro arpeggio");
        for (channel, note) in INTRO_ARPEGGIO.iter().copied().enumerate() {
            self.cue(hardware, channel, note, INTRO_NOTE_BEATS).await?;
            hardware.wait_ms(INTRO_PAUSE_MS).await;
        }
        Ok(())
    }

    /// Spielt `melody`, alle LEDs leuchten während jeder Note
    pub async fn success_melody<H: GameHardware>(
        &self,
        hardware: &mut H,
        melody: &[MelodyStep],
    ) -> Result<(), HardwareError> {
        info!("Cue: success melody ({} steps)", melody.len());
        for &(note, beats) in melody {
            self.set_all(hardware, true)?;
            self.synth.play(hardware, note, beats).await?;
            self.set_all(hardware, false)?;
        }
        Ok(())
    }

    /// Alle LEDs blinken `times` mal (je 500 ms an / 500 ms aus)
    pub async fn failure_blink<H: GameHardware>(
        &self,
        hardware: &mut H,
        times: u32,
    ) -> Result<(), HardwareError> {
        info!("Cue: failure blink x{}", times);
        for _ in 0..times {
            self.set_all(hardware, true)?;
            hardware.wait_ms(FAILURE_BLINK_MS).await;
            self.set_all(hardware, false)?;
            hardware.wait_ms(FAILURE_BLINK_MS).await;
        }
        Ok(())
    }
}
