// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von simon-core
pub use simon_core::{ChannelId, GamePhase, ToneCommand};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::config::BUTTON_QUEUE_SIZE;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, ChannelId, 8>
// Nutze:  ButtonSender

/// Queue für Tastendrücke (Button Tasks → Game Task)
/// - BUTTON_QUEUE_SIZE: Kapazität, FIFO in Druck-Reihenfolge
pub type ButtonChannel = Channel<NoopRawMutex, ChannelId, BUTTON_QUEUE_SIZE>;

/// Sender für Tastendrücke (jeder Button Task hat einen)
pub type ButtonSender = Sender<'static, NoopRawMutex, ChannelId, BUTTON_QUEUE_SIZE>;

/// Receiver für Tastendrücke (Game Task)
pub type ButtonReceiver = Receiver<'static, NoopRawMutex, ChannelId, BUTTON_QUEUE_SIZE>;

/// Ton-Kommandos (Game Task → Tone Task)
/// Signal statt Queue: ein neues Kommando ersetzt das laufende
pub type ToneSignal = Signal<NoopRawMutex, ToneCommand>;

/// Phasenwechsel (Game Task → Status LED Task)
pub type PhaseSignal = Signal<NoopRawMutex, GamePhase>;
