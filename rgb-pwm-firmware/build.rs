// Build Script: läuft vor der Kompilierung
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

fn main() {
    // Hilfreichen Error-Handler für Linker-Fehler registrieren
    linker_be_nice();

    // Linker-Scripts hinzufügen:

    // 1. defmt.x - defmt Logging Support
    //    Definiert Symbole für das binäre Log-Format von defmt
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory Layout
    //    Muss als LETZTES kommen
    //    Definiert Flash/RAM Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: zeigt Hinweise bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Aufruf durch den Linker (mit Fehler-Art und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Art (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        if kind == "undefined-symbol" {
            if what.starts_with("_defmt_") {
                eprintln!();
                eprintln!(
                    "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature"
                );
                eprintln!();
            } else if what == "_stack_start" {
                eprintln!();
                eprintln!("💡 Is the linker script `linkall.x` missing?");
                eprintln!();
            } else if what.starts_with("esp_rtos_") {
                eprintln!();
                eprintln!("💡 `esp-rtos` was not started - call `esp_rtos::start` before spawning tasks");
                eprintln!();
            }
            std::process::exit(0);
        }

        // für andere Fehler-Arten haben wir noch nichts Hilfreiches
        std::process::exit(1);
    }

    println!(
        "cargo:rustc-link-arg=--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
