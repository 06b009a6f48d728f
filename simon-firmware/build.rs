// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

/// Spiel-Parameter: (Name, Default, erlaubter Bereich)
const GAME_PARAMS: [(&str, u32, core::ops::RangeInclusive<u32>); 2] = [
    ("SIMON_CHALLENGE_LENGTH", 3, 1..=32),
    ("SIMON_BPM", 120, 1..=600),
];

fn main() {
    // Lade .env file für Spiel-Parameter
    // Fehlt die Datei, gelten Environment-Variablen oder die Defaults
    if let Err(e) = dotenvy::dotenv() {
        println!("cargo:warning=.env file nicht gefunden ({e}), nutze Defaults");
    }

    // Gebe Spiel-Parameter an Rust-Compiler weiter
    // Ungültige Werte sind Konfigurationsfehler → Build bricht ab
    for (name, default, range) in GAME_PARAMS {
        println!("cargo:rerun-if-env-changed={name}");
        let value = match std::env::var(name) {
            Ok(raw) => match raw.trim().parse::<u32>() {
                Ok(v) if range.contains(&v) => v,
                _ => panic!(
                    "{name}={raw:?} ist ungültig (erlaubt: {}..={})",
                    range.start(),
                    range.end()
                ),
            },
            Err(_) => default,
        };
        println!("cargo:rustc-env={name}={value}");
    }
    println!("cargo:rerun-if-changed=.env");

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and you have included `use esp_println as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` is not started. Make sure `esp_rtos::start()` runs before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
