//! Pure Business Logic Functions
//!
//! Sequenz-Erzeugung und Eingabe-Validierung, ohne Hardware-Dependencies (testbar!)

use rand::{Rng, RngCore};

use crate::types::{Challenge, ChannelId, ConfigError, MAX_CHALLENGE_LENGTH, Outcome, Session};

/// Erzeugt eine zufällige Challenge-Sequenz
///
/// Jede Position wird unabhängig und gleichverteilt aus `0..channel_count`
/// gezogen. Wiederholungen sind ausdrücklich erlaubt.
///
/// # Beispiele
///
/// ```
/// # use rand::SeedableRng;
/// # use simon_core::generate_challenge;
/// let mut rng = rand_pcg::Pcg32::seed_from_u64(7);
/// let challenge = generate_challenge(&mut rng, 3, 4).unwrap();
/// assert_eq!(challenge.len(), 3);
/// assert!(challenge.iter().all(|&c| c < 4));
/// ```
pub fn generate_challenge<R: RngCore>(
    rng: &mut R,
    length: usize,
    channel_count: usize,
) -> Result<Challenge, ConfigError> {
    if length == 0 || length > MAX_CHALLENGE_LENGTH {
        return Err(ConfigError::InvalidChallengeLength(length));
    }
    if channel_count == 0 {
        return Err(ConfigError::InvalidChannelCount(channel_count));
    }

    let mut challenge = Challenge::new();
    for _ in 0..length {
        let pick = rng.random_range(0..channel_count);
        // Kapazität oben geprüft
        let _ = challenge.push(pick);
    }
    Ok(challenge)
}

/// Prüft eine Eingabe gegen die erwartete Position der Session
///
/// Bei Treffer wird `progress` erhöht. `ended` setzt der Aufrufer
/// (bei `CorrectComplete` oder `Incorrect`). Beendete Sessions
/// bleiben unverändert und liefern `Outcome::Ignored`.
///
/// ```
/// # use simon_core::{Challenge, Outcome, Session, validate_input};
/// let mut session = Session::new(Challenge::from_slice(&[1, 2]).unwrap());
/// assert_eq!(validate_input(&mut session, 1), Outcome::CorrectContinue);
/// assert_eq!(validate_input(&mut session, 2), Outcome::CorrectComplete);
/// ```
pub fn validate_input(session: &mut Session, input: ChannelId) -> Outcome {
    if session.is_ended() {
        return Outcome::Ignored;
    }

    match session.expected() {
        Some(expected) if expected == input => {
            if session.advance() == session.challenge().len() {
                Outcome::CorrectComplete
            } else {
                Outcome::CorrectContinue
            }
        }
        _ => Outcome::Incorrect,
    }
}
