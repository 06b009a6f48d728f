//! Gemeinsame Mocks für die Host-Tests
//!
//! MockHardware zeichnet jeden Hardware-Aufruf auf und führt eine
//! virtuelle Uhr, `wait_ms` kehrt sofort zurück.

#![allow(dead_code)]

use std::collections::VecDeque;

use simon_core::{ChannelId, GameHardware, GamePhase, HardwareError, InputEvents};

// ============================================================================
// Mock Hardware
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwEvent {
    Indicator { channel: ChannelId, on: bool },
    Tone { frequency_hz: u16, duration_ms: u32 },
    Wait(u32),
    Phase(GamePhase),
    Shutdown,
}

#[derive(Default)]
pub struct MockHardware {
    pub events: Vec<HwEvent>,
    /// Virtuelle Zeit in ms (nur durch `wait_ms` bewegt)
    pub now_ms: u64,
    /// Simuliere Fehler beim nächsten play_tone()
    pub fail_next_tone: bool,
    pub shutdown_count: usize,
}

impl MockHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tones(&self) -> Vec<(u16, u32)> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                HwEvent::Tone {
                    frequency_hz,
                    duration_ms,
                } => Some((frequency_hz, duration_ms)),
                _ => None,
            })
            .collect()
    }

    pub fn phases(&self) -> Vec<GamePhase> {
        self.events
            .iter()
            .filter_map(|e| match *e {
                HwEvent::Phase(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Alle Events ab dem (ersten) Wechsel in `phase`
    pub fn events_since(&self, phase: GamePhase) -> &[HwEvent] {
        let start = self
            .events
            .iter()
            .position(|e| *e == HwEvent::Phase(phase))
            .unwrap_or(self.events.len());
        &self.events[start..]
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.now_ms = 0;
    }
}

impl GameHardware for MockHardware {
    fn set_indicator(&mut self, channel: ChannelId, on: bool) -> Result<(), HardwareError> {
        self.events.push(HwEvent::Indicator { channel, on });
        Ok(())
    }

    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u32) -> Result<(), HardwareError> {
        if self.fail_next_tone {
            self.fail_next_tone = false;
            return Err(HardwareError::ToneFailed);
        }
        self.events.push(HwEvent::Tone {
            frequency_hz,
            duration_ms,
        });
        Ok(())
    }

    async fn wait_ms(&mut self, duration_ms: u32) {
        self.now_ms += u64::from(duration_ms);
        self.events.push(HwEvent::Wait(duration_ms));
    }

    fn show_phase(&mut self, phase: GamePhase) -> Result<(), HardwareError> {
        self.events.push(HwEvent::Phase(phase));
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), HardwareError> {
        self.shutdown_count += 1;
        self.events.push(HwEvent::Shutdown);
        Ok(())
    }
}

// ============================================================================
// Scripted Input
// ============================================================================

/// Liefert vorgegebene Tastendrücke in FIFO-Reihenfolge
#[derive(Default)]
pub struct ScriptedInput {
    /// Drücke während der Challenge-Wiedergabe (werden verworfen)
    pub early: VecDeque<ChannelId>,
    pub presses: VecDeque<ChannelId>,
    pub consumed: usize,
    pub discarded: usize,
}

impl ScriptedInput {
    pub fn new(presses: &[ChannelId]) -> Self {
        Self {
            presses: presses.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn with_early(mut self, early: &[ChannelId]) -> Self {
        self.early = early.iter().copied().collect();
        self
    }
}

impl InputEvents for ScriptedInput {
    async fn next_press(&mut self) -> ChannelId {
        if let Some(channel) = self.early.pop_front() {
            self.consumed += 1;
            return channel;
        }
        let channel = self
            .presses
            .pop_front()
            .expect("input script exhausted - controller waited for more presses");
        self.consumed += 1;
        channel
    }

    fn discard_pending(&mut self) {
        self.discarded += self.early.len();
        self.early.clear();
    }
}
