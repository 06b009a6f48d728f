//! Spiel-Zustandsmaschine
//!
//! `Setup → ReadyAnimation → Intro → ChallengePlayback → AwaitingInput → Resolved`
//!
//! Der `GameController` ist die einzige Komponente mit veränderlichem
//! Session-Zustand. Eingaben kommen FIFO über `InputEvents`, jede wird
//! mit einem kurzen Bestätigungston quittiert und dann validiert.

use rand::{Rng, RngCore};

use crate::cues::CueEffects;
use crate::logic::{generate_challenge, validate_input};
use crate::melody::TWINKLE_STAR;
use crate::tone::ToneSynthesizer;
use crate::traits::{GameHardware, HardwareError, InputEvents};
use crate::types::{
    Beats, Challenge, ChannelId, ConfigError, GameConfig, GamePhase, Note, Outcome, Resolution,
    Session,
};

/// Länge eines Challenge-Cues in Schlägen
pub const CUE_BEATS: Beats = Beats::ratio(3, 10);

/// Länge des Bestätigungstons bei einem Tastendruck
pub const CONFIRM_BEATS: Beats = Beats::ratio(1, 10);

/// Note für einen Kanal: Position in der Notentabelle
///
/// Die Zuordnung läuft über den Index, nicht über eine musikalische Rolle.
pub fn channel_note(channel: ChannelId) -> Note {
    Note::by_position(channel).unwrap_or(Note::Rest)
}

/// Fehler beim Ablauf einer Session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    Config(ConfigError),
    Hardware(HardwareError),
    /// Session ist bereits entschieden
    AlreadyResolved,
}

impl From<ConfigError> for GameError {
    fn from(e: ConfigError) -> Self {
        GameError::Config(e)
    }
}

impl From<HardwareError> for GameError {
    fn from(e: HardwareError) -> Self {
        GameError::Hardware(e)
    }
}

/// Steuert eine komplette Session
///
/// # Parameter
/// - `H`: Hardware (LEDs, Buzzer, Zeitbasis)
/// - `I`: Quelle der Tastendrücke
/// - `R`: Zufallsgenerator (seedbar für reproduzierbare Tests)
pub struct GameController<H, I, R> {
    hardware: H,
    input: I,
    rng: R,
    config: GameConfig,
    cues: CueEffects,
    phase: GamePhase,
}

impl<H: GameHardware, I: InputEvents, R: RngCore> GameController<H, I, R> {
    /// Setup-Phase: prüft die Konfiguration
    ///
    /// Konfigurationsfehler sind fatal, es gibt keinen Retry.
    pub fn new(hardware: H, input: I, rng: R, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let synth = ToneSynthesizer::new(config.bpm);

        Ok(Self {
            hardware,
            input,
            rng,
            config,
            cues: CueEffects::new(config.channel_count, synth),
            phase: GamePhase::Setup,
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn hardware(&self) -> &H {
        &self.hardware
    }

    /// Gibt Hardware, Eingabe und RNG wieder heraus
    pub fn into_parts(self) -> (H, I, R) {
        (self.hardware, self.input, self.rng)
    }

    /// Komplette Session: Animationen, Challenge, Eingabe, Ergebnis
    pub async fn run(&mut self) -> Result<Resolution, GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::AlreadyResolved);
        }

        self.enter(GamePhase::ReadyAnimation)?;
        self.cues.ready_pulse(&mut self.hardware).await?;

        self.enter(GamePhase::Intro)?;
        self.cues.intro_arpeggio(&mut self.hardware).await?;

        let challenge = generate_challenge(
            &mut self.rng,
            self.config.challenge_length,
            self.config.channel_count,
        )?;

        self.run_challenge(challenge).await
    }

    /// Spielt eine vorgegebene Challenge ab und wartet auf die Eingaben
    pub async fn run_challenge(&mut self, challenge: Challenge) -> Result<Resolution, GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::AlreadyResolved);
        }

        self.play_challenge(&challenge).await?;
        let mut session = Session::new(challenge);
        let resolution = self.await_input(&mut session).await?;

        self.hardware.shutdown()?;
        info!("Game: session finished");
        Ok(resolution)
    }

    async fn play_challenge(&mut self, challenge: &[ChannelId]) -> Result<(), HardwareError> {
        self.enter(GamePhase::ChallengePlayback)?;
        info!("Game: challenge {}", challenge);

        for &channel in challenge {
            self.cues
                .cue(&mut self.hardware, channel, channel_note(channel), CUE_BEATS)
                .await?;

            let pause = self
                .rng
                .random_range(self.config.reveal_pause_min_ms..=self.config.reveal_pause_max_ms);
            self.hardware.wait_ms(pause).await;
        }
        Ok(())
    }

    async fn await_input(&mut self, session: &mut Session) -> Result<Resolution, HardwareError> {
        // Drücke während der Wiedergabe zählen nicht
        self.input.discard_pending();
        self.enter(GamePhase::AwaitingInput)?;

        loop {
            let channel = self.input.next_press().await;
            if let Some(resolution) = self.handle_press(session, channel).await? {
                return Ok(resolution);
            }
        }
    }

    /// Verarbeitet einen einzelnen Tastendruck
    ///
    /// Liefert `Some(resolution)` sobald die Session beendet wurde.
    /// Drücke nach Session-Ende werden ohne Ton verworfen.
    pub async fn handle_press(
        &mut self,
        session: &mut Session,
        channel: ChannelId,
    ) -> Result<Option<Resolution>, HardwareError> {
        if session.is_ended() {
            warn!("Game: press on channel {} after end ignored", channel);
            return Ok(None);
        }

        self.cues
            .synth()
            .play(&mut self.hardware, channel_note(channel), CONFIRM_BEATS)
            .await?;

        match validate_input(session, channel) {
            Outcome::CorrectContinue => {
                info!(
                    "Game: correct ({}/{})",
                    session.progress(),
                    session.challenge().len()
                );
                Ok(None)
            }
            Outcome::CorrectComplete => {
                session.end();
                self.resolve(Resolution::Success).await?;
                Ok(Some(Resolution::Success))
            }
            Outcome::Incorrect => {
                session.end();
                info!(
                    "Game: wrong button {} (expected {})",
                    channel,
                    session.expected()
                );
                self.resolve(Resolution::Failure).await?;
                Ok(Some(Resolution::Failure))
            }
            Outcome::Ignored => Ok(None),
        }
    }

    async fn resolve(&mut self, resolution: Resolution) -> Result<(), HardwareError> {
        self.enter(GamePhase::Resolved(resolution))?;
        match resolution {
            Resolution::Success => {
                self.cues
                    .success_melody(&mut self.hardware, &TWINKLE_STAR)
                    .await
            }
            Resolution::Failure => {
                self.cues
                    .failure_blink(&mut self.hardware, self.config.fail_blink_count)
                    .await
            }
        }
    }

    fn enter(&mut self, phase: GamePhase) -> Result<(), HardwareError> {
        info!("Game: {} -> {}", self.phase, phase);
        self.phase = phase;
        self.hardware.show_phase(phase)
    }
}
