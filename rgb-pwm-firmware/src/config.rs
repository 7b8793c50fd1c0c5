// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die LED-Verdrahtung steht zur Compile-Zeit fest. Ungültige Kombinationen (doppelte
// Pins, doppelte Kanäle, nicht unterstützte Bit-Tiefe) scheitern in rgb-pwm-core am Build.

use rgb_pwm_core::{PwmChannel, RgbPwmGroup};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO Pins der RGB LED
pub const LED_RED_GPIO: u8 = 5;
pub const LED_GREEN_GPIO: u8 = 6;
pub const LED_BLUE_GPIO: u8 = 7;

/// LEDC Kanäle, die die RGB LED treiben
pub const LED_RED_CHANNEL: u8 = 0;
pub const LED_GREEN_CHANNEL: u8 = 1;
pub const LED_BLUE_CHANNEL: u8 = 2;

/// PWM Frequenz in Hz
/// 5 kHz liegen weit über sichtbarem Flackern
pub const PWM_FREQUENCY_HZ: u32 = 5000;

/// Duty-Auflösung in Bits
/// Bei 5 kHz aus dem 80 MHz APB Clock sind bis zu 14 Bits möglich
pub const PWM_BIT_DEPTH: u8 = 8;

/// Helligkeits-Begrenzung in Prozent (1-100)
pub const LED_MAX_PERCENT: u8 = 100;

/// Pause zwischen zwei Fade-Schritten in Millisekunden
/// 10 ms pro Schritt ergeben eine volle Fade-Periode von etwa 5 Sekunden
pub const FADE_INTERVAL_MS: u64 = 10;

// ============================================================================
// LED Typen
// ============================================================================

pub type LedRed =
    PwmChannel<LED_RED_GPIO, LED_RED_CHANNEL, PWM_FREQUENCY_HZ, PWM_BIT_DEPTH, LED_MAX_PERCENT>;
pub type LedGreen =
    PwmChannel<LED_GREEN_GPIO, LED_GREEN_CHANNEL, PWM_FREQUENCY_HZ, PWM_BIT_DEPTH, LED_MAX_PERCENT>;
pub type LedBlue =
    PwmChannel<LED_BLUE_GPIO, LED_BLUE_CHANNEL, PWM_FREQUENCY_HZ, PWM_BIT_DEPTH, LED_MAX_PERCENT>;

/// Die RGB LED als eine Kanal-Gruppe
pub type LedGroup = RgbPwmGroup<LedRed, LedGreen, LedBlue>;

pub static LED_GROUP: LedGroup = RgbPwmGroup::new();
