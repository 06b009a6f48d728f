// Game Task - Führt eine komplette Session mit dem GameController aus
use defmt::{error, info};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::game_config;
use crate::hal::{BoardHardware, ButtonEvents};
use simon_core::{GameController, GameError};

/// Game Task - einziger Besitzer des Session-Zustands
///
/// Ablauf: Setup → Bereit-Puls → Intro → Challenge → Eingabe → Ergebnis.
/// Nach dem Ergebnis ist die Session beendet, der Task endet.
///
/// # Parameter
/// - `hardware`: LEDs, Buzzer und Status-Anzeige
/// - `input`: Tastendrücke aus der Button-Queue
/// - `seed`: Seed für den Challenge-RNG (vom Hardware-RNG)
#[embassy_executor::task]
pub async fn game_task(hardware: BoardHardware, input: ButtonEvents, seed: u64) {
    let config = game_config();
    info!("Game: starting with {}", config);

    let rng = Pcg32::seed_from_u64(seed);
    let mut controller = match GameController::new(hardware, input, rng, config) {
        Ok(controller) => controller,
        Err(e) => defmt::panic!("Game: invalid configuration: {}", e),
    };

    match controller.run().await {
        Ok(resolution) => info!("Game: resolved as {}", resolution),
        Err(GameError::Hardware(e)) => error!("Game: hardware fault, session aborted: {}", e),
        Err(e) => error!("Game: session aborted: {}", e),
    }
}
