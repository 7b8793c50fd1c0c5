// LED Fade Task - Steuert die RGB LED über das LEDC Peripheral
use defmt::info;
use embassy_time::{Duration, Timer};
use embedded_graphics::geometry::Point;

use crate::config::{FADE_INTERVAL_MS, LED_GROUP};
use crate::hal::{LedcPwm, PwmDriver};
use crate::{ColorFade, RgbPwm};

/// LED Fade Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Führt jeden Kanal von Spalte 0 durch seine eigene Dreieckswelle, ein Schritt
/// pro `FADE_INTERVAL_MS`.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `D: PwmDriver` ermöglicht:
/// - Real Hardware (LedcPwm) im Production-Code
/// - Mock Implementation auf dem Host
///
/// # Parameter
/// - `target`: Draw Target über die LED-Gruppen
pub async fn led_fade_logic<D: PwmDriver, const N: usize>(mut target: RgbPwm<'_, D, N>) {
    let mut fade = ColorFade::demo();

    // Erstes Schreiben initialisiert die LEDC Kanäle
    info!("Fading {} LED group(s)", N);

    loop {
        let color = fade.step();
        target.set_point(Point::zero(), color);

        // Async Delay: gibt die CPU an andere Tasks ab
        Timer::after(Duration::from_millis(FADE_INTERVAL_MS)).await;
    }
}

/// LED Fade Task - Embassy Task für parallele Ausführung
///
/// Erstellt den Hardware-Driver und ruft dann die testbare
/// `led_fade_logic()` Funktion auf.
///
/// # Parameter
/// - `ledc_peripheral`: LEDC Peripheral für die PWM-Erzeugung
#[embassy_executor::task]
pub async fn led_fade_task(ledc_peripheral: esp_hal::peripherals::LEDC<'static>) {
    let pwm = LedcPwm::new(ledc_peripheral);
    let target = RgbPwm::new(pwm, [&LED_GROUP]);

    led_fade_logic(target).await;
}
