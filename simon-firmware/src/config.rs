// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use simon_core::GameConfig;

// ============================================================================
// Pin-Belegung (ESP32-C6 DevKitC-1)
// ============================================================================
//
// Kanal i = LED_GPIO_PINS[i] + BUTTON_GPIO_PINS[i]
// Die Zuordnung zu den Peripherals steht in bin/main.rs

/// Anzahl der Spiel-Kanäle (LED + Taster)
pub const CHANNEL_COUNT: usize = 4;

/// GPIO-Pins der Kanal-LEDs (aktiv high)
pub const LED_GPIO_PINS: [u8; CHANNEL_COUNT] = [2, 3, 4, 5];

/// GPIO-Pins der Taster (Pull-Up, aktiv low)
pub const BUTTON_GPIO_PINS: [u8; CHANNEL_COUNT] = [6, 7, 18, 19];

/// GPIO-Pin des passiven Buzzers
pub const BUZZER_GPIO_PIN: u8 = 23;

/// GPIO-Pin der Status-LED (WS2812 on-board)
pub const STATUS_LED_GPIO_PIN: u8 = 8;

// ============================================================================
// Status-LED Konfiguration
// ============================================================================

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Taster Konfiguration
// ============================================================================

/// Entprell-Zeit in ms nach einer fallenden Flanke
pub const DEBOUNCE_MS: u64 = 20;

/// Kapazität der Tastendruck-Queue
pub const BUTTON_QUEUE_SIZE: usize = 8;

// ============================================================================
// Spiel-Parameter
// ============================================================================

/// Länge der Challenge-Sequenz
/// Wird zur Build-Zeit aus SIMON_CHALLENGE_LENGTH geladen (build.rs, Default 3)
pub const CHALLENGE_LENGTH: usize = parse_u32(env!("SIMON_CHALLENGE_LENGTH")) as usize;

/// Tempo in BPM
/// Wird zur Build-Zeit aus SIMON_BPM geladen (build.rs, Default 120)
pub const BPM: u32 = parse_u32(env!("SIMON_BPM"));

/// Spiel-Konfiguration für die Session
pub fn game_config() -> GameConfig {
    GameConfig {
        challenge_length: CHALLENGE_LENGTH,
        channel_count: CHANNEL_COUNT,
        bpm: BPM,
        ..GameConfig::default()
    }
}

// build.rs liefert nur validierte Dezimalzahlen
const fn parse_u32(value: &str) -> u32 {
    let bytes = value.as_bytes();
    let mut result = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "Spiel-Parameter ist keine Zahl");
        result = result * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    result
}
