// Board-Hardware: Kanal-LEDs, Buzzer (über Tone-Task) und Taster-Queue
//
// Implementiert die Hardware-Traits aus simon-core für den ESP32-C6.

use embassy_time::{Duration, Timer};
use esp_hal::gpio::Output;

use crate::config::CHANNEL_COUNT;
use crate::{ButtonReceiver, PhaseSignal, ToneSignal};
use simon_core::{ChannelId, GameHardware, GamePhase, HardwareError, InputEvents, ToneCommand};

/// Hardware-Kollaborator für den GameController
///
/// - LEDs werden direkt über GPIO geschaltet
/// - Töne gehen als `ToneCommand` an den Tone-Task (kehrt sofort zurück)
/// - Phasenwechsel gehen an den Status-LED-Task
pub struct BoardHardware {
    leds: [Output<'static>; CHANNEL_COUNT],
    tone: &'static ToneSignal,
    phase: &'static PhaseSignal,
}

impl BoardHardware {
    pub fn new(
        leds: [Output<'static>; CHANNEL_COUNT],
        tone: &'static ToneSignal,
        phase: &'static PhaseSignal,
    ) -> Self {
        Self { leds, tone, phase }
    }
}

impl GameHardware for BoardHardware {
    fn set_indicator(&mut self, channel: ChannelId, on: bool) -> Result<(), HardwareError> {
        let led = self
            .leds
            .get_mut(channel)
            .ok_or(HardwareError::OutputFailed(channel))?;

        if on {
            led.set_high();
        } else {
            led.set_low();
        }
        Ok(())
    }

    fn play_tone(&mut self, frequency_hz: u16, duration_ms: u32) -> Result<(), HardwareError> {
        self.tone.signal(ToneCommand {
            frequency_hz,
            duration_ms,
        });
        Ok(())
    }

    async fn wait_ms(&mut self, duration_ms: u32) {
        Timer::after(Duration::from_millis(u64::from(duration_ms))).await;
    }

    fn show_phase(&mut self, phase: GamePhase) -> Result<(), HardwareError> {
        self.phase.signal(phase);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), HardwareError> {
        for led in &mut self.leds {
            led.set_low();
        }
        self.tone.signal(ToneCommand::STOP);
        Ok(())
    }
}

/// Tastendrücke aus der Queue der Button-Tasks
pub struct ButtonEvents {
    receiver: ButtonReceiver,
}

impl ButtonEvents {
    pub fn new(receiver: ButtonReceiver) -> Self {
        Self { receiver }
    }
}

impl InputEvents for ButtonEvents {
    async fn next_press(&mut self) -> ChannelId {
        self.receiver.receive().await
    }

    fn discard_pending(&mut self) {
        while self.receiver.try_receive().is_ok() {}
    }
}
