// Tone Task - Rechteckwelle auf dem Buzzer-Pin
use defmt::{debug, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use esp_hal::gpio::Output;

use crate::ToneSignal;
use simon_core::ToneCommand;

/// Tone Task - erzeugt Töne asynchron zum Spielablauf
///
/// Verhält sich wie Arduino `tone()`: ein Kommando startet den Ton und
/// kehrt sofort zurück, der Ton endet nach `duration_ms` von selbst.
/// Ein neues Kommando ersetzt den laufenden Ton, Frequenz 0 stoppt ihn.
///
/// # Parameter
/// - `buzzer`: Output-Pin des passiven Buzzers
/// - `commands`: Signal mit dem jeweils neuesten `ToneCommand`
#[embassy_executor::task]
pub async fn tone_task(mut buzzer: Output<'static>, commands: &'static ToneSignal) {
    info!("Tone: task started");

    let mut next = commands.wait().await;
    loop {
        next = match play(&mut buzzer, next, commands).await {
            Some(superseded_by) => superseded_by,
            None => commands.wait().await,
        };
    }
}

/// Spielt ein Kommando bis zum Ende
///
/// Liefert das nächste Kommando, falls es den Ton vorzeitig abgelöst hat.
async fn play(
    buzzer: &mut Output<'static>,
    cmd: ToneCommand,
    commands: &'static ToneSignal,
) -> Option<ToneCommand> {
    let half_period = match cmd.half_period_us() {
        Some(us) if !cmd.is_silent() => Duration::from_micros(us),
        _ => {
            buzzer.set_low();
            return None;
        }
    };

    debug!("Tone: {} Hz for {} ms", cmd.frequency_hz, cmd.duration_ms);
    let deadline = Instant::now() + Duration::from_millis(u64::from(cmd.duration_ms));

    while Instant::now() < deadline {
        buzzer.toggle();
        if let Either::Second(next) = select(Timer::after(half_period), commands.wait()).await {
            buzzer.set_low();
            return Some(next);
        }
    }

    buzzer.set_low();
    None
}
