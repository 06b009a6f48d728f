//! Ton-Synthese: Note + Schläge → Frequenz + Dauer → Hardware
//!
//! Hinweis: Pausen (`Note::Rest`) werden zwar an die Hardware gesendet,
//! kosten aber keine Wartezeit.

use crate::traits::{GameHardware, HardwareError};
use crate::types::{Beats, Note};

/// Länge eines Schlags in ms (ganzzahlig abgeschnitten)
///
/// ```
/// # use simon_core::tone::beat_duration_ms;
/// assert_eq!(beat_duration_ms(120), 500);
/// assert_eq!(beat_duration_ms(90), 666);
/// ```
pub const fn beat_duration_ms(bpm: u32) -> u32 {
    60_000 / bpm
}

/// Ein einzelnes Ton-Kommando an den Tongenerator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneCommand {
    pub frequency_hz: u16,
    pub duration_ms: u32,
}

impl ToneCommand {
    /// Stoppt einen laufenden Ton
    pub const STOP: ToneCommand = ToneCommand {
        frequency_hz: 0,
        duration_ms: 0,
    };

    pub const fn is_silent(&self) -> bool {
        self.frequency_hz == 0 || self.duration_ms == 0
    }

    /// Halbe Periodendauer in µs für eine Rechteckwelle
    ///
    /// `None` bei Stille.
    pub const fn half_period_us(&self) -> Option<u64> {
        if self.frequency_hz == 0 {
            None
        } else {
            Some(500_000 / self.frequency_hz as u64)
        }
    }
}

/// Spielt Noten im Tempo `bpm` über die Hardware ab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneSynthesizer {
    bpm: u32,
}

impl ToneSynthesizer {
    pub const fn new(bpm: u32) -> Self {
        Self { bpm }
    }

    pub const fn bpm(&self) -> u32 {
        self.bpm
    }

    /// Berechnet das Ton-Kommando für `note` mit Länge `beats`
    pub const fn command(&self, note: Note, beats: Beats) -> ToneCommand {
        ToneCommand {
            frequency_hz: note.frequency_hz(),
            duration_ms: beats.of_beat_ms(beat_duration_ms(self.bpm)),
        }
    }

    /// Spielt eine Note und wartet bis sie verklungen ist
    ///
    /// Genau ein `play_tone` pro Aufruf. Gewartet wird nur bei hörbaren
    /// Noten, eine Pause kehrt sofort zurück.
    pub async fn play<H: GameHardware>(
        &self,
        hardware: &mut H,
        note: Note,
        beats: Beats,
    ) -> Result<(), HardwareError> {
        let cmd = self.command(note, beats);
        debug!(
            "Tone: {} {} Hz for {} ms",
            note.name(),
            cmd.frequency_hz,
            cmd.duration_ms
        );
        hardware.play_tone(cmd.frequency_hz, cmd.duration_ms)?;

        if cmd.frequency_hz > 0 {
            hardware.wait_ms(cmd.duration_ms).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_c4_one_beat() {
        let synth = ToneSynthesizer::new(120);
        assert_eq!(
            synth.command(Note::C4, Beats::ONE),
            ToneCommand {
                frequency_hz: 261,
                duration_ms: 500
            }
        );
    }

    #[test]
    fn test_command_rest_keeps_duration() {
        let synth = ToneSynthesizer::new(120);
        let cmd = synth.command(Note::Rest, Beats::ONE);
        assert_eq!(cmd.frequency_hz, 0);
        assert_eq!(cmd.duration_ms, 500);
        assert!(cmd.is_silent());
    }

    #[test]
    fn test_command_fractional_beats() {
        let synth = ToneSynthesizer::new(120);
        assert_eq!(synth.command(Note::A4, Beats::ratio(3, 10)).duration_ms, 150);
        assert_eq!(synth.command(Note::A4, Beats::ratio(1, 10)).duration_ms, 50);
        assert_eq!(synth.command(Note::A4, Beats::TWO).duration_ms, 1000);
    }

    #[test]
    fn test_beat_is_truncated_before_scaling() {
        // 60000 / 90 = 666 (nicht 666.67), 2 Schläge = 1332
        let synth = ToneSynthesizer::new(90);
        assert_eq!(synth.command(Note::C4, Beats::TWO).duration_ms, 1332);
    }

    #[test]
    fn test_half_period() {
        let a4 = ToneCommand {
            frequency_hz: 440,
            duration_ms: 100,
        };
        assert_eq!(a4.half_period_us(), Some(1136));
        assert_eq!(ToneCommand::STOP.half_period_us(), None);
    }
}
