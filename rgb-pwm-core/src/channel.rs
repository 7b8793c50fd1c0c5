//! Channel-Deskriptoren
//!
//! Ein Channel-Deskriptor beschreibt einen physischen PWM-Ausgang zur Compile-Zeit.
//! Ungültige Konfigurationen scheitern schon beim Bauen, nicht erst zur Laufzeit:
//!
//! ```
//! use rgb_pwm_core::{ChannelDescriptor, PwmChannel};
//!
//! type Red = PwmChannel<32, 0, 5000, 12, 50>;
//! const INFO: rgb_pwm_core::ChannelInfo = <Red as ChannelDescriptor>::INFO;
//! assert_eq!(INFO.bit_depth, 12);
//! assert_eq!(<Red as ChannelDescriptor>::MAX_DUTY, 4095);
//! ```
//!
//! Bit-Tiefen außerhalb von `1..=16` lassen sich nicht bauen:
//!
//! ```compile_fail
//! use rgb_pwm_core::{ChannelDescriptor, PwmChannel};
//!
//! const DEPTH: u8 = <PwmChannel<32, 0, 5000, 17> as ChannelDescriptor>::BIT_DEPTH;
//! assert_eq!(DEPTH, 17);
//! ```
//!
//! ```compile_fail
//! use rgb_pwm_core::{ChannelDescriptor, PwmChannel};
//!
//! const DEPTH: u8 = <PwmChannel<32, 0, 5000, 0> as ChannelDescriptor>::BIT_DEPTH;
//! assert_eq!(DEPTH, 0);
//! ```
//!
//! Genauso eine Frequenz von null:
//!
//! ```compile_fail
//! use rgb_pwm_core::{ChannelDescriptor, PwmChannel};
//!
//! const FREQUENCY: u32 = <PwmChannel<32, 0, 0> as ChannelDescriptor>::FREQUENCY_HZ;
//! assert_eq!(FREQUENCY, 0);
//! ```
//!
//! Und eine Helligkeits-Begrenzung über 100%:
//!
//! ```compile_fail
//! use rgb_pwm_core::{ChannelDescriptor, PwmChannel};
//!
//! const PERCENT: u8 = <PwmChannel<32, 0, 5000, 8, 101> as ChannelDescriptor>::MAX_PERCENT;
//! assert_eq!(PERCENT, 101);
//! ```
//!
//! Oder eine Begrenzung von null, die den Ausgang dunkel halten würde:
//!
//! ```compile_fail
//! use rgb_pwm_core::{ChannelDescriptor, PwmChannel};
//!
//! const PERCENT: u8 = <PwmChannel<32, 0, 5000, 8, 0> as ChannelDescriptor>::MAX_PERCENT;
//! assert_eq!(PERCENT, 0);
//! ```

use crate::color::channel_max;
use crate::traits::PwmDriver;
use crate::types::ChannelInfo;

/// Anzahl der Hardware-Kanal-Indizes, die ein Deskriptor adressieren kann
pub const CHANNEL_COUNT: u8 = 16;

const CHANNEL_MASK: u8 = CHANNEL_COUNT - 1;

/// Compile-Zeit-Beschreibung eines PWM-Ausgangs
pub trait ChannelDescriptor {
    /// Ausgangs-Pin, an dem der Kanal hängt
    const PIN: u8;
    /// Hardware-Kanal-Index, `0..CHANNEL_COUNT`
    const CHANNEL: u8;
    const FREQUENCY_HZ: u32;
    /// Duty-Auflösung in Bits, `1..=16`
    const BIT_DEPTH: u8;
    /// Helligkeits-Begrenzung in Prozent, `1..=100`
    const MAX_PERCENT: u8;

    /// Größter Duty-Wert bei `BIT_DEPTH`
    const MAX_DUTY: u16 = channel_max(Self::BIT_DEPTH);

    const INFO: ChannelInfo = ChannelInfo {
        pin: Self::PIN,
        channel: Self::CHANNEL,
        frequency_hz: Self::FREQUENCY_HZ,
        bit_depth: Self::BIT_DEPTH,
        max_percent: Self::MAX_PERCENT,
    };

    /// Konfiguriert den Kanal und hängt ihn an seinen Pin.
    ///
    /// Wiederholbar: das Peripheral landet im selben Zustand.
    fn initialize<D: PwmDriver + ?Sized>(driver: &mut D) {
        driver.setup(Self::CHANNEL, Self::FREQUENCY_HZ, Self::BIT_DEPTH);
        driver.attach(Self::PIN, Self::CHANNEL);
    }

    /// Wendet die Helligkeits-Begrenzung auf einen rohen Duty-Wert an.
    ///
    /// Schneidet ab und überschreitet nie `MAX_DUTY`.
    fn scale_duty(raw: u16) -> u16 {
        let scaled = (raw as u32 * Self::MAX_PERCENT as u32 / 100) as u16;
        scaled.min(Self::MAX_DUTY)
    }
}

/// Ein PWM-Ausgang auf `PIN`, getrieben von Hardware-Kanal `CHANNEL`
///
/// `CHANNEL` wird auf den gültigen Index-Bereich maskiert. Defaults: 5 kHz,
/// 8 Bit, keine Helligkeits-Begrenzung.
#[derive(Debug, Clone, Copy, Default)]
pub struct PwmChannel<
    const PIN: u8,
    const CHANNEL: u8,
    const FREQUENCY_HZ: u32 = 5000,
    const BIT_DEPTH: u8 = 8,
    const MAX_PERCENT: u8 = 100,
>;

impl<
    const PIN: u8,
    const CHANNEL: u8,
    const FREQUENCY_HZ: u32,
    const BIT_DEPTH: u8,
    const MAX_PERCENT: u8,
> PwmChannel<PIN, CHANNEL, FREQUENCY_HZ, BIT_DEPTH, MAX_PERCENT>
{
    const VALID: () = {
        assert!(BIT_DEPTH >= 1, "BIT_DEPTH must be at least 1");
        assert!(BIT_DEPTH <= 16, "BIT_DEPTH must be at most 16");
        assert!(FREQUENCY_HZ > 0, "FREQUENCY_HZ must not be zero");
        assert!(MAX_PERCENT > 0, "MAX_PERCENT must not be zero");
        assert!(MAX_PERCENT <= 100, "MAX_PERCENT must not be more than 100");
    };
}

impl<
    const PIN: u8,
    const CHANNEL: u8,
    const FREQUENCY_HZ: u32,
    const BIT_DEPTH: u8,
    const MAX_PERCENT: u8,
> ChannelDescriptor for PwmChannel<PIN, CHANNEL, FREQUENCY_HZ, BIT_DEPTH, MAX_PERCENT>
{
    const PIN: u8 = {
        let () = Self::VALID;
        PIN
    };
    const CHANNEL: u8 = {
        let () = Self::VALID;
        CHANNEL & CHANNEL_MASK
    };
    const FREQUENCY_HZ: u32 = {
        let () = Self::VALID;
        FREQUENCY_HZ
    };
    const BIT_DEPTH: u8 = {
        let () = Self::VALID;
        BIT_DEPTH
    };
    const MAX_PERCENT: u8 = {
        let () = Self::VALID;
        MAX_PERCENT
    };
}
