//! RGB-Kanal-Gruppen
//!
//! Drei Channel-Deskriptoren (Rot, Grün, Blau) zu einem adressierbaren RGB-Ausgang
//! zusammengefasst. Kanal- und Pin-Belegung werden beim Bauen geprüft:
//!
//! ```
//! use rgb_pwm_core::{PwmChannel, RgbPwmGroup};
//!
//! static GROUP: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 1>, PwmChannel<26, 2>> =
//!     RgbPwmGroup::new();
//! # let _ = &GROUP;
//! ```
//!
//! Zwei Farben auf demselben Hardware-Kanal lassen sich nicht bauen:
//!
//! ```compile_fail
//! use rgb_pwm_core::{PwmChannel, RgbPwmGroup};
//!
//! static GROUP: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 0>, PwmChannel<26, 2>> =
//!     RgbPwmGroup::new();
//! # let _ = &GROUP;
//! ```
//!
//! Zwei Farben auf demselben Pin ebenfalls nicht:
//!
//! ```compile_fail
//! use rgb_pwm_core::{PwmChannel, RgbPwmGroup};
//!
//! static GROUP: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 1>, PwmChannel<32, 2>> =
//!     RgbPwmGroup::new();
//! # let _ = &GROUP;
//! ```

use core::fmt;
use core::marker::PhantomData;

use rgb::RGB8;

use crate::channel::ChannelDescriptor;
use crate::color::{NativePixel, PixelFormat};
use crate::traits::PwmDriver;
use crate::types::ChannelInfo;

/// Einheitliches Interface einer Kanal-Gruppe, im externen Pixel-Format
///
/// Jede konkrete Gruppe rechnet zwischen [`RGB8`] und ihrem nativen Format um,
/// damit Gruppen mit unterschiedlicher Bit-Tiefe nebeneinander in einem Draw
/// Target sitzen können.
pub trait RgbGroup<D: PwmDriver + ?Sized> {
    /// Konfiguriert alle drei Kanäle. Wiederholen schadet nicht.
    fn initialize(&self, driver: &mut D);

    /// Schreibt `color`, umgerechnet auf die nativen Bit-Tiefen der Gruppe.
    fn write_pixel(&self, driver: &mut D, color: RGB8);

    /// Liest die aktuelle Farbe, umgerechnet auf 8 Bit pro Kanal.
    fn read_pixel(&self, driver: &D) -> RGB8;

    /// Die Ausgänge Rot, Grün und Blau, in dieser Reihenfolge.
    fn channels(&self) -> [ChannelInfo; 3];

    /// Native Bit-Tiefen der Gruppe
    fn format(&self) -> PixelFormat;
}

/// Rote, grüne und blaue PWM-Ausgänge, die zusammen eine RGB LED bilden
pub struct RgbPwmGroup<R, G, B>(PhantomData<fn() -> (R, G, B)>);

impl<R, G, B> RgbPwmGroup<R, G, B>
where
    R: ChannelDescriptor,
    G: ChannelDescriptor,
    B: ChannelDescriptor,
{
    /// Natives Pixel-Format: jeder Kanal mit der Bit-Tiefe seines Deskriptors
    pub const FORMAT: PixelFormat = PixelFormat::new(R::BIT_DEPTH, G::BIT_DEPTH, B::BIT_DEPTH);

    const UNIQUE: () = {
        assert!(R::CHANNEL != G::CHANNEL, "The channels must be unique - R and G");
        assert!(R::CHANNEL != B::CHANNEL, "The channels must be unique - R and B");
        assert!(G::CHANNEL != B::CHANNEL, "The channels must be unique - G and B");
        assert!(R::PIN != G::PIN, "The pins must be unique - R and G");
        assert!(R::PIN != B::PIN, "The pins must be unique - R and B");
        assert!(G::PIN != B::PIN, "The pins must be unique - G and B");
    };

    pub const fn new() -> Self {
        let () = Self::UNIQUE;
        Self(PhantomData)
    }

    /// Initialisiert Rot, dann Grün, dann Blau.
    pub fn initialize_channels<D: PwmDriver + ?Sized>(&self, driver: &mut D) {
        let () = Self::UNIQUE;
        R::initialize(driver);
        G::initialize(driver);
        B::initialize(driver);
    }

    pub fn read_r<D: PwmDriver + ?Sized>(&self, driver: &D) -> u16 {
        read_channel::<R, D>(driver)
    }

    pub fn read_g<D: PwmDriver + ?Sized>(&self, driver: &D) -> u16 {
        read_channel::<G, D>(driver)
    }

    pub fn read_b<D: PwmDriver + ?Sized>(&self, driver: &D) -> u16 {
        read_channel::<B, D>(driver)
    }

    pub fn write_r<D: PwmDriver + ?Sized>(&self, driver: &mut D, value: u16) {
        write_channel::<R, D>(driver, value);
    }

    pub fn write_g<D: PwmDriver + ?Sized>(&self, driver: &mut D, value: u16) {
        write_channel::<G, D>(driver, value);
    }

    pub fn write_b<D: PwmDriver + ?Sized>(&self, driver: &mut D, value: u16) {
        write_channel::<B, D>(driver, value);
    }

    /// Schreibt ein Pixel im nativen Format.
    ///
    /// Komponenten über dem Kanal-Maximum werden begrenzt, nicht abgelehnt.
    pub fn write_native<D: PwmDriver + ?Sized>(&self, driver: &mut D, pixel: NativePixel) {
        self.write_r(driver, pixel.r);
        self.write_g(driver, pixel.g);
        self.write_b(driver, pixel.b);
    }

    /// Liest ein Pixel im nativen Format, mit angewendeter Helligkeits-Begrenzung.
    pub fn read_native<D: PwmDriver + ?Sized>(&self, driver: &D) -> NativePixel {
        NativePixel {
            r: self.read_r(driver),
            g: self.read_g(driver),
            b: self.read_b(driver),
        }
    }
}

fn read_channel<C: ChannelDescriptor, D: PwmDriver + ?Sized>(driver: &D) -> u16 {
    C::scale_duty(driver.read(C::CHANNEL))
}

fn write_channel<C: ChannelDescriptor, D: PwmDriver + ?Sized>(driver: &mut D, value: u16) {
    driver.write(C::CHANNEL, value.min(C::MAX_DUTY));
}

impl<R, G, B, D> RgbGroup<D> for RgbPwmGroup<R, G, B>
where
    R: ChannelDescriptor,
    G: ChannelDescriptor,
    B: ChannelDescriptor,
    D: PwmDriver + ?Sized,
{
    fn initialize(&self, driver: &mut D) {
        self.initialize_channels(driver);
    }

    fn write_pixel(&self, driver: &mut D, color: RGB8) {
        self.write_native(driver, Self::FORMAT.from_rgb8(color));
    }

    fn read_pixel(&self, driver: &D) -> RGB8 {
        Self::FORMAT.to_rgb8(self.read_native(driver))
    }

    fn channels(&self) -> [ChannelInfo; 3] {
        [R::INFO, G::INFO, B::INFO]
    }

    fn format(&self) -> PixelFormat {
        Self::FORMAT
    }
}

impl<R, G, B> Default for RgbPwmGroup<R, G, B>
where
    R: ChannelDescriptor,
    G: ChannelDescriptor,
    B: ChannelDescriptor,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<R, G, B> fmt::Debug for RgbPwmGroup<R, G, B>
where
    R: ChannelDescriptor,
    G: ChannelDescriptor,
    B: ChannelDescriptor,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RgbPwmGroup")
            .field("r", &R::INFO)
            .field("g", &G::INFO)
            .field("b", &B::INFO)
            .finish()
    }
}
