//! Statische Melodien

use crate::types::{Beats, MelodyStep, Note};

const Q: Beats = Beats::ONE;
const H: Beats = Beats::TWO;

/// "Twinkle Twinkle Little Star" - Erfolgs-Melodie (42 Schritte)
#[rustfmt::skip]
pub static TWINKLE_STAR: [MelodyStep; 42] = [
    (Note::C4, Q), (Note::C4, Q), (Note::G4, Q), (Note::G4, Q), (Note::A4, Q), (Note::A4, Q), (Note::G4, H),
    (Note::F4, Q), (Note::F4, Q), (Note::E4, Q), (Note::E4, Q), (Note::D4, Q), (Note::D4, Q), (Note::C4, H),
    (Note::G4, Q), (Note::G4, Q), (Note::F4, Q), (Note::F4, Q), (Note::E4, Q), (Note::E4, Q), (Note::D4, H),
    (Note::G4, Q), (Note::G4, Q), (Note::F4, Q), (Note::F4, Q), (Note::E4, Q), (Note::E4, Q), (Note::D4, H),
    (Note::C4, Q), (Note::C4, Q), (Note::G4, Q), (Note::G4, Q), (Note::A4, Q), (Note::A4, Q), (Note::G4, H),
    (Note::F4, Q), (Note::F4, Q), (Note::E4, Q), (Note::E4, Q), (Note::D4, Q), (Note::D4, Q), (Note::C4, H),
];

/// Intro-Arpeggio (C-E-G-H), je eine Note pro Kanal 0..4
pub const INTRO_ARPEGGIO: [Note; 4] = [Note::C4, Note::E4, Note::G4, Note::B4];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twinkle_star_shape() {
        assert_eq!(TWINKLE_STAR.len(), 42);
        // Jede Phrase endet mit einer halben Note
        for phrase in TWINKLE_STAR.chunks(7) {
            assert_eq!(phrase[6].1, Beats::TWO);
            assert!(phrase[..6].iter().all(|(_, beats)| *beats == Beats::ONE));
        }
        assert!(TWINKLE_STAR.iter().all(|(note, _)| !note.is_rest()));
    }
}
