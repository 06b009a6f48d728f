// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels und Signals
// (Buttons → Game, Game → Tone, Game → Status LED).

pub mod buttons;
pub mod game;
pub mod status_led;
pub mod tone;

// Re-export Tasks für einfachen Import
pub use buttons::button_task;
pub use game::game_task;
pub use status_led::status_led_task;
pub use tone::tone_task;
