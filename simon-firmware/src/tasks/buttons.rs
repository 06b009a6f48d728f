// Button Task - Entprellt einen Taster und meldet Drücke an die Queue
use defmt::{debug, info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use crate::ButtonSender;
use crate::config::DEBOUNCE_MS;
use simon_core::ChannelId;

/// Button Task - einer pro Kanal
///
/// Erzeugt genau ein Ereignis pro Tastendruck:
/// - wartet auf die fallende Flanke (Pull-Up, aktiv low)
/// - prüft nach `DEBOUNCE_MS` ob der Taster noch gedrückt ist
/// - wartet auf das Loslassen, bevor der nächste Druck zählt
///
/// Ist die Queue voll, wird der Druck verworfen (kein Blockieren).
///
/// # Parameter
/// - `channel`: Kanal-Index dieses Tasters
/// - `button`: konfigurierter Input-Pin
/// - `presses`: Sender in die Tastendruck-Queue
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(channel: ChannelId, mut button: Input<'static>, presses: ButtonSender) {
    info!("Button {}: ready", channel);
    let debounce = Duration::from_millis(DEBOUNCE_MS);

    loop {
        button.wait_for_falling_edge().await;
        Timer::after(debounce).await;

        if button.is_high() {
            // Störimpuls
            continue;
        }

        match presses.try_send(channel) {
            Ok(()) => debug!("Button {}: pressed", channel),
            Err(_) => warn!("Button {}: queue full, press dropped", channel),
        }

        button.wait_for_high().await;
        Timer::after(debounce).await;
    }
}
