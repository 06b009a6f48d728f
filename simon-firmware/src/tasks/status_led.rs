// Status LED Task - Zeigt die aktuelle Spielphase auf der WS2812 LED
use defmt::{error, info};
use esp_hal_smartled::smart_led_buffer;

use crate::PhaseSignal;
use crate::config::RMT_CLOCK_MHZ;
use crate::hal::{RmtLedWriter, StatusLedWriter};

/// Status LED Logic - Testbare Logik ohne Hardware-Abhängigkeit
///
/// Wartet auf Phasenwechsel des GameControllers und setzt die passende
/// Farbe (`GamePhase::status_color`). Zwischenstände, die schneller
/// kommen als die LED geschrieben wird, fallen weg (Signal = neuester Wert).
///
/// # Parameter
/// - `led`: LED Writer (Hardware oder Mock)
/// - `phases`: Signal mit der jeweils aktuellen Phase
pub async fn status_led_logic<L: StatusLedWriter>(mut led: L, phases: &'static PhaseSignal) -> ! {
    loop {
        let phase = phases.wait().await;

        if let Err(e) = led.write(phase.status_color()) {
            error!("Status LED: write failed: {}", e);
            continue;
        }
        info!("Status LED: {}", phase);
    }
}

/// Status LED Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// `status_led_logic()` auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `phases`: Signal mit Phasenwechseln des GameControllers
#[embassy_executor::task]
pub async fn status_led_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    phases: &'static PhaseSignal,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    match RmtLedWriter::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer) {
        Ok(led) => status_led_logic(led, phases).await,
        // Spiel läuft auch ohne Status-LED weiter
        Err(e) => error!("Status LED: init failed: {}", e),
    }
}
