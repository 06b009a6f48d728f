// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod board;
pub mod led_writer;

pub use board::{BoardHardware, ButtonEvents};
pub use led_writer::{LedError, RmtLedWriter, StatusLedWriter};
