//! Core Types für das Simon-Says Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use heapless::Vec;
use rgb::RGB8;

/// Maximale Länge einer Challenge-Sequenz
pub const MAX_CHALLENGE_LENGTH: usize = 32;

/// Minimale Anzahl Kanäle (das Intro-Arpeggio braucht vier LEDs)
pub const MIN_CHANNELS: usize = 4;

/// Maximale Anzahl Kanäle (eine Note pro Kanal aus der Notentabelle)
pub const MAX_CHANNELS: usize = 8;

/// Helligkeit der Status-LED (0-255), gedimmt für Augenschonung
pub const STATUS_BRIGHTNESS: u8 = 10;

/// Index eines Kanals (eine LED + ein Taster)
pub type ChannelId = usize;

/// Die Challenge-Sequenz einer Session
pub type Challenge = Vec<ChannelId, MAX_CHALLENGE_LENGTH>;

// ============================================================================
// Noten
// ============================================================================

/// Symbolische Tonhöhe inkl. Pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
    Rest,
}

impl Note {
    /// Notentabelle in fester Reihenfolge
    ///
    /// Die Reihenfolge ist Teil des Spiels: Kanal `i` klingt als `TABLE[i]`.
    pub const TABLE: [Note; 9] = [
        Note::C4,
        Note::D4,
        Note::E4,
        Note::F4,
        Note::G4,
        Note::A4,
        Note::B4,
        Note::C5,
        Note::Rest,
    ];

    /// Frequenz in Hz, `0` steht für Stille
    pub const fn frequency_hz(self) -> u16 {
        match self {
            Note::C4 => 261,
            Note::D4 => 294,
            Note::E4 => 330,
            Note::F4 => 349,
            Note::G4 => 392,
            Note::A4 => 440,
            Note::B4 => 494,
            Note::C5 => 523,
            Note::Rest => 0,
        }
    }

    /// Note an Position `index` der Notentabelle
    ///
    /// ```
    /// # use simon_core::Note;
    /// assert_eq!(Note::by_position(2), Some(Note::E4));
    /// assert_eq!(Note::by_position(9), None);
    /// ```
    pub fn by_position(index: usize) -> Option<Note> {
        Self::TABLE.get(index).copied()
    }

    pub const fn is_rest(self) -> bool {
        matches!(self, Note::Rest)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Note::C4 => "C4",
            Note::D4 => "D4",
            Note::E4 => "E4",
            Note::F4 => "F4",
            Note::G4 => "G4",
            Note::A4 => "A4",
            Note::B4 => "B4",
            Note::C5 => "C5",
            Note::Rest => "REST",
        }
    }
}

impl core::convert::TryFrom<&str> for Note {
    type Error = ();

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::TABLE
            .iter()
            .copied()
            .find(|note| note.name() == name)
            .ok_or(())
    }
}

/// Notenlänge als Vielfaches eines Schlags (Zähler / Nenner)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Beats {
    numerator: u32,
    denominator: u32,
}

impl Beats {
    pub const ONE: Beats = Beats::ratio(1, 1);
    pub const TWO: Beats = Beats::ratio(2, 1);
    pub const HALF: Beats = Beats::ratio(1, 2);

    /// Erstellt eine Notenlänge `numerator / denominator`
    ///
    /// Panics bei Nenner 0 (nur für Konstanten gedacht, wird zur Compile-Zeit geprüft).
    pub const fn ratio(numerator: u32, denominator: u32) -> Self {
        assert!(denominator > 0, "Beats: Nenner darf nicht 0 sein");
        Self {
            numerator,
            denominator,
        }
    }

    /// Dauer in Millisekunden bei einer Schlaglänge von `beat_ms`
    pub const fn of_beat_ms(self, beat_ms: u32) -> u32 {
        beat_ms * self.numerator / self.denominator
    }
}

/// Ein Schritt einer Melodie
pub type MelodyStep = (Note, Beats);

// ============================================================================
// Session
// ============================================================================

/// Ergebnis einer einzelnen Eingabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Richtig, es fehlen noch Eingaben
    CorrectContinue,
    /// Richtig, Sequenz vollständig
    CorrectComplete,
    /// Falsch, Spiel verloren
    Incorrect,
    /// Session bereits beendet, Eingabe verworfen
    Ignored,
}

/// Zustand einer laufenden Session
///
/// Gehört exklusiv dem `GameController`. `progress` wird nur durch
/// validierte Eingaben verändert, `ended` genau einmal gesetzt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    challenge: Challenge,
    progress: usize,
    ended: bool,
}

impl Session {
    pub fn new(challenge: Challenge) -> Self {
        Self {
            challenge,
            progress: 0,
            ended: false,
        }
    }

    pub fn challenge(&self) -> &[ChannelId] {
        &self.challenge
    }

    /// Anzahl bereits richtig eingegebener Positionen
    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Erwarteter Kanal für die nächste Eingabe
    pub fn expected(&self) -> Option<ChannelId> {
        self.challenge.get(self.progress).copied()
    }

    /// Markiert die Session als beendet (terminal)
    pub fn end(&mut self) {
        self.ended = true;
    }

    pub(crate) fn advance(&mut self) -> usize {
        self.progress += 1;
        self.progress
    }
}

// ============================================================================
// Spielphasen
// ============================================================================

/// Ausgang einer Session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    Success,
    Failure,
}

/// Phasen der Zustandsmaschine im `GameController`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    Setup,
    ReadyAnimation,
    Intro,
    ChallengePlayback,
    AwaitingInput,
    Resolved(Resolution),
}

impl GamePhase {
    /// Farbe der Status-LED für diese Phase
    pub fn status_color(self) -> RGB8 {
        let b = STATUS_BRIGHTNESS;
        match self {
            GamePhase::Setup => RGB8 { r: 0, g: 0, b: 0 },
            GamePhase::ReadyAnimation | GamePhase::Intro => RGB8 { r: b, g: b, b: b },
            GamePhase::ChallengePlayback => RGB8 { r: 0, g: 0, b },
            GamePhase::AwaitingInput => RGB8 { r: b, g: b, b: 0 },
            GamePhase::Resolved(Resolution::Success) => RGB8 { r: 0, g: b, b: 0 },
            GamePhase::Resolved(Resolution::Failure) => RGB8 { r: b, g: 0, b: 0 },
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Resolved(_))
    }
}

// ============================================================================
// Konfiguration
// ============================================================================

/// Konfigurationsfehler - fatal beim Setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Challenge-Länge 0 oder größer als `MAX_CHALLENGE_LENGTH`
    InvalidChallengeLength(usize),
    /// Kanalanzahl außerhalb `MIN_CHANNELS..=MAX_CHANNELS`
    InvalidChannelCount(usize),
    /// BPM darf nicht 0 sein
    InvalidBpm,
    /// Minimum der Pause liegt über dem Maximum
    InvalidRevealPause,
}

/// Spielparameter einer Session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameConfig {
    pub challenge_length: usize,
    pub channel_count: usize,
    pub bpm: u32,
    pub reveal_pause_min_ms: u32,
    pub reveal_pause_max_ms: u32,
    pub fail_blink_count: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            challenge_length: 3,
            channel_count: 4,
            bpm: 120,
            reveal_pause_min_ms: 1500,
            reveal_pause_max_ms: 2500,
            fail_blink_count: 3,
        }
    }
}

impl GameConfig {
    /// Prüft die Parameter, bevor eine Session startet
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.challenge_length == 0 || self.challenge_length > MAX_CHALLENGE_LENGTH {
            return Err(ConfigError::InvalidChallengeLength(self.challenge_length));
        }
        if !(MIN_CHANNELS..=MAX_CHANNELS).contains(&self.channel_count) {
            return Err(ConfigError::InvalidChannelCount(self.channel_count));
        }
        if self.bpm == 0 {
            return Err(ConfigError::InvalidBpm);
        }
        if self.reveal_pause_min_ms > self.reveal_pause_max_ms {
            return Err(ConfigError::InvalidRevealPause);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_table_order_and_frequencies() {
        let freqs: [u16; 9] = Note::TABLE.map(Note::frequency_hz);
        assert_eq!(freqs, [261, 294, 330, 349, 392, 440, 494, 523, 0]);
    }

    #[test]
    fn test_note_try_from_name() {
        assert_eq!(Note::try_from("G4"), Ok(Note::G4));
        assert_eq!(Note::try_from("REST"), Ok(Note::Rest));
        assert!(Note::try_from("H4").is_err());
    }

    #[test]
    fn test_beats_fractions() {
        assert_eq!(Beats::ONE.of_beat_ms(500), 500);
        assert_eq!(Beats::HALF.of_beat_ms(500), 250);
        assert_eq!(Beats::ratio(3, 10).of_beat_ms(500), 150);
        assert_eq!(Beats::ratio(1, 10).of_beat_ms(500), 50);
    }

    #[test]
    fn test_session_starts_fresh() {
        let challenge = Challenge::from_slice(&[3, 1]).unwrap();
        let session = Session::new(challenge);
        assert_eq!(session.progress(), 0);
        assert!(!session.is_ended());
        assert_eq!(session.expected(), Some(3));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let base = GameConfig::default();

        let cfg = GameConfig {
            challenge_length: 0,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidChallengeLength(0)));

        let cfg = GameConfig {
            channel_count: 3,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidChannelCount(3)));

        let cfg = GameConfig { bpm: 0, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidBpm));

        let cfg = GameConfig {
            reveal_pause_min_ms: 3000,
            ..base
        };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidRevealPause));
    }

    #[test]
    fn test_phase_colors() {
        assert_eq!(GamePhase::Setup.status_color(), RGB8 { r: 0, g: 0, b: 0 });
        assert_eq!(
            GamePhase::Resolved(Resolution::Success).status_color(),
            RGB8 {
                r: 0,
                g: STATUS_BRIGHTNESS,
                b: 0
            }
        );
        assert!(GamePhase::Resolved(Resolution::Failure).is_terminal());
        assert!(!GamePhase::AwaitingInput.is_terminal());
    }
}
