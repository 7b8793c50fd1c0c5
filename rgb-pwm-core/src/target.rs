//! Multi-Gruppen Draw Target
//!
//! Stellt eine feste Anzahl RGB-Gruppen als einzeiliges Bild dar, `N` Pixel breit.
//! Spalte `x` ist Gruppe `x`. Die Hardware wird beim ersten Schreiben konfiguriert;
//! Lesen davor ergibt [`Error::InvalidState`].
//!
//! Die Gruppen-Anzahl wird beim Bauen geprüft. Bis zu [`MAX_GROUPS`] Gruppen
//! sind erlaubt:
//!
//! ```
//! # use rgb_pwm_core::{PwmChannel, PwmDriver, RgbPwm, RgbPwmGroup};
//! # struct Pwm;
//! # impl PwmDriver for Pwm {
//! #     fn setup(&mut self, _channel: u8, _frequency_hz: u32, _bit_depth: u8) {}
//! #     fn attach(&mut self, _pin: u8, _channel: u8) {}
//! #     fn read(&self, _channel: u8) -> u16 { 0 }
//! #     fn write(&mut self, _channel: u8, _duty: u16) {}
//! # }
//! # static LED: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 1>, PwmChannel<26, 2>> =
//! #     RgbPwmGroup::new();
//! let target = RgbPwm::new(Pwm, [&LED, &LED, &LED, &LED, &LED]);
//! assert_eq!(target.dimensions().width, 5);
//! ```
//!
//! Ein leeres Target lässt sich nicht bauen:
//!
//! ```compile_fail
//! # use rgb_pwm_core::{PwmChannel, PwmDriver, RgbPwm, RgbPwmGroup};
//! # struct Pwm;
//! # impl PwmDriver for Pwm {
//! #     fn setup(&mut self, _channel: u8, _frequency_hz: u32, _bit_depth: u8) {}
//! #     fn attach(&mut self, _pin: u8, _channel: u8) {}
//! #     fn read(&self, _channel: u8) -> u16 { 0 }
//! #     fn write(&mut self, _channel: u8, _duty: u16) {}
//! # }
//! # static LED: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 1>, PwmChannel<26, 2>> =
//! #     RgbPwmGroup::new();
//! let target = RgbPwm::<Pwm, 0>::new(Pwm, []);
//! assert!(!target.is_initialized());
//! ```
//!
//! Eine Gruppe mehr, als das Peripheral Kanäle hat, ebenfalls nicht:
//!
//! ```compile_fail
//! # use rgb_pwm_core::{PwmChannel, PwmDriver, RgbPwm, RgbPwmGroup};
//! # struct Pwm;
//! # impl PwmDriver for Pwm {
//! #     fn setup(&mut self, _channel: u8, _frequency_hz: u32, _bit_depth: u8) {}
//! #     fn attach(&mut self, _pin: u8, _channel: u8) {}
//! #     fn read(&self, _channel: u8) -> u16 { 0 }
//! #     fn write(&mut self, _channel: u8, _duty: u16) {}
//! # }
//! # static LED: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 1>, PwmChannel<26, 2>> =
//! #     RgbPwmGroup::new();
//! let target = RgbPwm::new(Pwm, [&LED, &LED, &LED, &LED, &LED, &LED]);
//! assert!(!target.is_initialized());
//! ```

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Point, Size};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::Rectangle;
use rgb::RGB8;

use crate::channel::CHANNEL_COUNT;
use crate::color::rgb888_to_rgb8;
use crate::group::RgbGroup;
use crate::log::{debug, info, warn};
use crate::traits::{Error, PwmDriver};

/// Maximale Anzahl Gruppen pro PWM-Peripheral, je drei Kanäle
pub const MAX_GROUPS: usize = (CHANNEL_COUNT / 3) as usize;

/// Draw Target über `N` RGB PWM Gruppen
///
/// ```
/// use rgb_pwm_core::{PwmChannel, PwmDriver, RgbPwm, RgbPwmGroup};
/// use embedded_graphics::prelude::*;
/// use rgb::RGB8;
///
/// struct Pwm([u16; 16]);
///
/// impl PwmDriver for Pwm {
///     fn setup(&mut self, _channel: u8, _frequency_hz: u32, _bit_depth: u8) {}
///     fn attach(&mut self, _pin: u8, _channel: u8) {}
///     fn read(&self, channel: u8) -> u16 {
///         self.0[channel as usize]
///     }
///     fn write(&mut self, channel: u8, duty: u16) {
///         self.0[channel as usize] = duty;
///     }
/// }
///
/// static LED: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 1>, PwmChannel<26, 2>> =
///     RgbPwmGroup::new();
///
/// let mut target = RgbPwm::new(Pwm([0; 16]), [&LED]);
/// assert_eq!(target.size(), Size::new(1, 1));
///
/// target.set_point(Point::new(0, 0), RGB8::new(255, 0, 64));
/// assert_eq!(target.point(Point::new(0, 0)), Ok(Some(RGB8::new(255, 0, 64))));
/// ```
pub struct RgbPwm<'a, D: PwmDriver, const N: usize> {
    driver: D,
    groups: [&'a dyn RgbGroup<D>; N],
    initialized: bool,
}

impl<'a, D: PwmDriver, const N: usize> RgbPwm<'a, D, N> {
    const VALID: () = {
        assert!(N >= 1, "At least one group is required");
        assert!(N <= MAX_GROUPS, "More groups than the PWM peripheral has channels for");
    };

    /// Erstellt ein uninitialisiertes Draw Target. Fasst die Hardware nicht an.
    pub fn new(driver: D, groups: [&'a dyn RgbGroup<D>; N]) -> Self {
        let () = Self::VALID;
        Self {
            driver,
            groups,
            initialized: false,
        }
    }

    /// Initialisiert jede Gruppe, genau einmal.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        info!("Initializing {} RGB PWM groups", N);
        for (index, group) in self.groups.iter().enumerate() {
            debug!("Group {}: {}", index, group.channels());
            group.initialize(&mut self.driver);
        }
        self.warn_on_shared_outputs();

        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Breite ist die Gruppen-Anzahl, Höhe immer 1.
    pub fn dimensions(&self) -> Size {
        Size::new(N as u32, 1)
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.dimensions())
    }

    /// Schreibt `color` auf die Gruppe an `location.x`.
    ///
    /// Initialisiert das Target bei Bedarf. Positionen außerhalb werden ignoriert.
    pub fn set_point(&mut self, location: Point, color: RGB8) {
        self.initialize();
        if let Some(group) = self.group_at(location) {
            group.write_pixel(&mut self.driver, color);
        }
    }

    /// Schreibt `color` auf jede Spalte von `area`, die auf dem Target liegt.
    pub fn fill(&mut self, area: &Rectangle, color: RGB8) {
        self.initialize();
        let area = area.intersection(&self.bounds());
        if area.is_zero_sized() {
            return;
        }
        for x in area.columns() {
            if let Some(group) = self.group_at(Point::new(x, 0)) {
                group.write_pixel(&mut self.driver, color);
            }
        }
    }

    /// Schaltet jede Spalte von `area` aus, die auf dem Target liegt.
    pub fn clear_area(&mut self, area: &Rectangle) {
        self.fill(area, RGB8::default());
    }

    /// Liest die Farbe an `location`.
    ///
    /// Gibt `Ok(None)` für Positionen außerhalb zurück und
    /// [`Error::InvalidState`], solange das Target nicht initialisiert ist.
    pub fn point(&self, location: Point) -> Result<Option<RGB8>, Error> {
        if !self.initialized {
            return Err(Error::InvalidState);
        }
        Ok(self
            .group_at(location)
            .map(|group| group.read_pixel(&self.driver)))
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Gibt den Driver zurück. Die Hardware behält ihren letzten Zustand.
    pub fn release(self) -> D {
        self.driver
    }

    fn group_at(&self, location: Point) -> Option<&'a dyn RgbGroup<D>> {
        if location.y != 0 {
            return None;
        }
        let x = usize::try_from(location.x).ok()?;
        self.groups.get(x).copied()
    }

    fn warn_on_shared_outputs(&self) {
        for (index, group) in self.groups.iter().enumerate() {
            for other in &self.groups[index + 1..] {
                for a in group.channels() {
                    for b in other.channels() {
                        if a.conflicts_with(&b) {
                            warn!("RGB PWM groups share an output: {} and {}", a, b);
                        }
                    }
                }
            }
        }
    }
}

impl<D: PwmDriver, const N: usize> OriginDimensions for RgbPwm<'_, D, N> {
    fn size(&self) -> Size {
        self.dimensions()
    }
}

impl<D: PwmDriver, const N: usize> DrawTarget for RgbPwm<'_, D, N> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.initialize();
        for Pixel(location, color) in pixels {
            self.set_point(location, rgb888_to_rgb8(color));
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(area, rgb888_to_rgb8(color));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::PwmChannel;
    use crate::group::RgbPwmGroup;

    struct DutyPwm {
        duty: [u16; 16],
        setups: usize,
    }

    impl DutyPwm {
        fn new() -> Self {
            Self {
                duty: [0; 16],
                setups: 0,
            }
        }
    }

    impl PwmDriver for DutyPwm {
        fn setup(&mut self, _channel: u8, _frequency_hz: u32, _bit_depth: u8) {
            self.setups += 1;
        }

        fn attach(&mut self, _pin: u8, _channel: u8) {}

        fn read(&self, channel: u8) -> u16 {
            self.duty[channel as usize]
        }

        fn write(&mut self, channel: u8, duty: u16) {
            self.duty[channel as usize] = duty;
        }
    }

    static FIRST: RgbPwmGroup<PwmChannel<32, 0>, PwmChannel<25, 1>, PwmChannel<26, 2>> =
        RgbPwmGroup::new();
    static SECOND: RgbPwmGroup<PwmChannel<27, 3>, PwmChannel<14, 4>, PwmChannel<12, 5>> =
        RgbPwmGroup::new();

    #[test]
    fn test_new_does_not_touch_hardware() {
        let target = RgbPwm::new(DutyPwm::new(), [&FIRST, &SECOND]);
        assert!(!target.is_initialized());
        assert_eq!(target.driver().setups, 0);
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut target = RgbPwm::new(DutyPwm::new(), [&FIRST, &SECOND]);
        target.initialize();
        target.initialize();
        target.set_point(Point::new(0, 0), RGB8::new(1, 2, 3));
        assert_eq!(target.driver().setups, 6);
    }

    #[test]
    fn test_read_before_write_is_invalid_state() {
        let target = RgbPwm::new(DutyPwm::new(), [&FIRST]);
        assert_eq!(target.point(Point::new(0, 0)), Err(Error::InvalidState));
        assert!(!target.is_initialized());
    }

    #[test]
    fn test_negative_and_wide_columns_are_ignored() {
        let mut target = RgbPwm::new(DutyPwm::new(), [&FIRST, &SECOND]);
        target.set_point(Point::new(-1, 0), RGB8::new(255, 255, 255));
        target.set_point(Point::new(2, 0), RGB8::new(255, 255, 255));
        assert_eq!(target.driver().duty, [0; 16]);
        assert_eq!(target.point(Point::new(-1, 0)), Ok(None));
        assert_eq!(target.point(Point::new(7, 0)), Ok(None));
    }

    #[test]
    fn test_zero_height_fill_writes_nothing() {
        let mut target = RgbPwm::new(DutyPwm::new(), [&FIRST, &SECOND]);
        target.fill(
            &Rectangle::new(Point::zero(), Size::new(2, 0)),
            RGB8::new(9, 9, 9),
        );
        assert!(target.is_initialized());
        assert_eq!(target.driver().duty, [0; 16]);
    }

    static SHARES_FIRST: RgbPwmGroup<PwmChannel<33, 0>, PwmChannel<34, 6>, PwmChannel<35, 7>> =
        RgbPwmGroup::new();

    #[test]
    fn test_shared_output_across_groups_still_initializes() {
        let mut target = RgbPwm::new(DutyPwm::new(), [&FIRST, &SHARES_FIRST]);
        target.initialize();
        assert!(target.is_initialized());
        assert_eq!(target.driver().setups, 6);

        target.set_point(Point::new(1, 0), RGB8::new(40, 50, 60));
        assert_eq!(target.point(Point::new(1, 0)), Ok(Some(RGB8::new(40, 50, 60))));
    }

    #[test]
    fn test_max_groups_fits_the_channel_count() {
        assert_eq!(MAX_GROUPS, 5);
        let target = RgbPwm::new(DutyPwm::new(), [&FIRST, &SECOND, &FIRST, &SECOND, &FIRST]);
        assert_eq!(target.dimensions(), Size::new(5, 1));
    }

    #[test]
    fn test_release_returns_driver() {
        let mut target = RgbPwm::new(DutyPwm::new(), [&FIRST]);
        target.set_point(Point::new(0, 0), RGB8::new(10, 20, 30));
        let pwm = target.release();
        assert_eq!(&pwm.duty[..3], &[10, 20, 30]);
    }
}
