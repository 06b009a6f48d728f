//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::{ChannelId, GamePhase};

/// Fehler-Typ für Hardware-Operationen
///
/// Wird ohne Retry bis zum Game-Task durchgereicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HardwareError {
    /// LED-Ausgang konnte nicht geschaltet werden
    OutputFailed(ChannelId),
    /// Ton-Kommando wurde nicht angenommen
    ToneFailed,
    /// Status-Anzeige nicht erreichbar
    StatusFailed,
}

/// Trait für die Spiel-Hardware (LEDs, Buzzer, Zeitbasis)
///
/// # Implementierungen
/// - **Production:** BoardHardware (ESP32 GPIO + Tone-Task)
/// - **Testing:** MockHardware (zeichnet alle Aufrufe mit virtueller Zeit auf)
#[allow(async_fn_in_trait)]
pub trait GameHardware {
    /// Schaltet die LED eines Kanals ein oder aus
    fn set_indicator(&mut self, channel: ChannelId, on: bool) -> Result<(), HardwareError>;

    /// Startet einen Ton (kehrt sofort zurück)
    ///
    /// `frequency_hz == 0` stoppt einen laufenden Ton. Das Warten auf das
    /// Tonende übernimmt der Aufrufer.
    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u32) -> Result<(), HardwareError>;

    /// Wartet `duration_ms` Millisekunden
    async fn wait_ms(&mut self, duration_ms: u32);

    /// Meldet einen Phasenwechsel (z.B. für eine Status-LED)
    fn show_phase(&mut self, _phase: GamePhase) -> Result<(), HardwareError> {
        Ok(())
    }

    /// Gibt die Hardware am Ende der Session frei
    fn shutdown(&mut self) -> Result<(), HardwareError>;
}

/// Trait für Taster-Ereignisse
///
/// Liefert genau ein Ereignis pro (entprelltem) Tastendruck, in FIFO-Reihenfolge.
#[allow(async_fn_in_trait)]
pub trait InputEvents {
    /// Wartet (ohne Timeout) auf den nächsten Tastendruck
    async fn next_press(&mut self) -> ChannelId;

    /// Verwirft alle bereits gepufferten Tastendrücke
    fn discard_pending(&mut self);
}
