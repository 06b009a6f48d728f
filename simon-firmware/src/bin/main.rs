// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use defmt::info;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use simon_says::config::{
    BPM, BUTTON_GPIO_PINS, BUZZER_GPIO_PIN, CHALLENGE_LENGTH, LED_GPIO_PINS, STATUS_LED_GPIO_PIN,
};
use simon_says::hal::{BoardHardware, ButtonEvents};
use simon_says::tasks::{button_task, game_task, status_led_task, tone_task};
use simon_says::{ButtonChannel, PhaseSignal, ToneSignal};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Setup-Phase: initialisiert Hardware, konfiguriert Pins, startet Embassy
/// Runtime und spawnt Tasks. Danach schläft main() - das Spiel läuft im Game Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    info!(
        "Setup: LEDs {} / buttons {} / buzzer {} / status {}",
        LED_GPIO_PINS, BUTTON_GPIO_PINS, BUZZER_GPIO_PIN, STATUS_LED_GPIO_PIN
    );
    info!("Setup: challenge length {}, {} BPM", CHALLENGE_LENGTH, BPM);

    // Kanal-LEDs: Ausgänge, initial aus
    // Reihenfolge muss zu config::LED_GPIO_PINS passen
    let leds = [
        Output::new(peripherals.GPIO2, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO3, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO4, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO5, Level::Low, OutputConfig::default()),
    ];

    // Taster: Eingänge mit Pull-Up (gedrückt = low)
    // Reihenfolge muss zu config::BUTTON_GPIO_PINS passen
    let buttons = [
        Input::new(peripherals.GPIO6, InputConfig::default().with_pull(Pull::Up)),
        Input::new(peripherals.GPIO7, InputConfig::default().with_pull(Pull::Up)),
        Input::new(peripherals.GPIO18, InputConfig::default().with_pull(Pull::Up)),
        Input::new(peripherals.GPIO19, InputConfig::default().with_pull(Pull::Up)),
    ];

    // Passiver Buzzer
    let buzzer = Output::new(peripherals.GPIO23, Level::Low, OutputConfig::default());

    // Tastendruck-Queue (Button Tasks → Game Task)
    static BUTTON_CHANNEL: static_cell::StaticCell<ButtonChannel> = static_cell::StaticCell::new();
    let button_channel = &*BUTTON_CHANNEL.init(ButtonChannel::new());

    // Ton-Signal (Game Task → Tone Task)
    static TONE_SIGNAL: static_cell::StaticCell<ToneSignal> = static_cell::StaticCell::new();
    let tone_signal = &*TONE_SIGNAL.init(ToneSignal::new());

    // Phasen-Signal (Game Task → Status LED Task)
    static PHASE_SIGNAL: static_cell::StaticCell<PhaseSignal> = static_cell::StaticCell::new();
    let phase_signal = &*PHASE_SIGNAL.init(PhaseSignal::new());

    // Spawn Tone + Status LED Tasks
    spawner.spawn(tone_task(buzzer, tone_signal)).unwrap();
    spawner
        .spawn(status_led_task(
            peripherals.GPIO8,
            peripherals.RMT,
            phase_signal,
        ))
        .unwrap();

    // Spawn Button Tasks (einer pro Kanal)
    for (channel, button) in buttons.into_iter().enumerate() {
        spawner
            .spawn(button_task(channel, button, button_channel.sender()))
            .unwrap();
    }

    // Seed für die Challenge (von Hardware RNG)
    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;

    // Spawn Game Task
    let hardware = BoardHardware::new(leds, tone_signal, phase_signal);
    let input = ButtonEvents::new(button_channel.receiver());
    spawner.spawn(game_task(hardware, input, seed)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
