//! Hardware Abstraction Traits
//!
//! Diese Traits beschreiben das PWM-Peripheral, auf dem das Draw Target
//! aufbaut, ohne den Core an eine konkrete HAL zu binden.

use core::fmt;

/// Fehler-Typ für Draw-Target-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Das Draw Target wurde vor der Initialisierung gelesen.
    InvalidState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState => f.write_str("draw target is not initialized"),
        }
    }
}

impl core::error::Error for Error {}

/// Trait für PWM-Zugriff über Kanal-Nummern
///
/// Abstrahiert den LED PWM Controller: nummerierte Kanäle, jeder mit eigener
/// Frequenz und Duty-Auflösung, auf einen Ausgangs-Pin geroutet.
///
/// # Implementierungen
/// - **Production:** `LedcPwm` (ESP32 LEDC Peripheral, in der Firmware-Crate)
/// - **Testing:** `MockPwm` (in-memory Mock)
///
/// Fehler bei der Hardware-Konfiguration werden nicht über diesen Trait
/// gemeldet. Implementierungen loggen sie und machen weiter.
pub trait PwmDriver {
    /// Konfiguriert `channel` mit `frequency_hz` und einer Duty-Auflösung von
    /// `bit_depth` Bits.
    fn setup(&mut self, channel: u8, frequency_hz: u32, bit_depth: u8);

    /// Routet den Ausgang von `channel` auf `pin`.
    fn attach(&mut self, pin: u8, channel: u8);

    /// Gibt den rohen Duty-Wert von `channel` zurück.
    fn read(&self, channel: u8) -> u16;

    /// Setzt den rohen Duty-Wert von `channel`.
    fn write(&mut self, channel: u8, duty: u16);
}

impl<T: PwmDriver + ?Sized> PwmDriver for &mut T {
    fn setup(&mut self, channel: u8, frequency_hz: u32, bit_depth: u8) {
        (**self).setup(channel, frequency_hz, bit_depth);
    }

    fn attach(&mut self, pin: u8, channel: u8) {
        (**self).attach(pin, channel);
    }

    fn read(&self, channel: u8) -> u16 {
        (**self).read(channel)
    }

    fn write(&mut self, channel: u8, duty: u16) {
        (**self).write(channel, duty);
    }
}
