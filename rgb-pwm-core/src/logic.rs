//! Reine Animations-Logik
//!
//! Funktionen ohne Hardware-Abhängigkeit (testbar!)

use rgb::RGB8;

/// Ein Kanal eines Fades: eine Dreieckswelle zwischen 0 und 255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelFade {
    pub value: u8,
    pub rising: bool,
}

impl ChannelFade {
    pub const fn new(value: u8, rising: bool) -> Self {
        Self { value, rising }
    }

    /// Gibt den aktuellen Wert zurück und geht dann einen Schritt weiter.
    ///
    /// Die Richtung kehrt um, wenn der Wert steigend bei 255 oder fallend bei 0
    /// steht; jeder Endwert wird pro Umkehr also genau einmal ausgegeben.
    pub fn step(&mut self) -> u8 {
        let current = self.value;
        if self.rising && self.value == u8::MAX {
            self.rising = false;
        } else if !self.rising && self.value == 0 {
            self.rising = true;
        }
        self.value = if self.rising {
            self.value + 1
        } else {
            self.value - 1
        };
        current
    }
}

/// Drei unabhängige Kanal-Fades
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use rgb_pwm_core::ColorFade;
/// let mut fade = ColorFade::demo();
/// assert_eq!(fade.step(), RGB8 { r: 0, g: 127, b: 255 });
/// assert_eq!(fade.step(), RGB8 { r: 1, g: 128, b: 254 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorFade {
    pub r: ChannelFade,
    pub g: ChannelFade,
    pub b: ChannelFade,
}

impl ColorFade {
    pub const fn new(r: ChannelFade, g: ChannelFade, b: ChannelFade) -> Self {
        Self { r, g, b }
    }

    /// Rot steigend ab 0, Grün steigend ab 127, Blau fallend ab 255
    pub const fn demo() -> Self {
        Self::new(
            ChannelFade::new(0, true),
            ChannelFade::new(127, true),
            ChannelFade::new(255, false),
        )
    }

    /// Gibt die aktuelle Farbe zurück und bewegt jeden Kanal einen Schritt weiter.
    pub fn step(&mut self) -> RGB8 {
        RGB8 {
            r: self.r.step(),
            g: self.g.step(),
            b: self.b.step(),
        }
    }
}

impl Iterator for ColorFade {
    type Item = RGB8;

    fn next(&mut self) -> Option<RGB8> {
        Some(self.step())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_turns_at_top() {
        let mut fade = ChannelFade::new(254, true);
        assert_eq!(fade.step(), 254);
        assert_eq!(fade.step(), 255);
        assert_eq!(fade.step(), 254);
        assert!(!fade.rising);
    }

    #[test]
    fn test_fade_turns_at_bottom() {
        let mut fade = ChannelFade::new(1, false);
        assert_eq!(fade.step(), 1);
        assert_eq!(fade.step(), 0);
        assert_eq!(fade.step(), 1);
        assert!(fade.rising);
    }

    #[test]
    fn test_falling_from_top_does_not_bounce() {
        let mut fade = ChannelFade::new(255, false);
        assert_eq!(fade.step(), 255);
        assert_eq!(fade.step(), 254);
    }

    #[test]
    fn test_full_period() {
        let mut fade = ChannelFade::new(0, true);
        // 0..=255 hoch, 254..=1 runter, dann wieder bei 0
        for _ in 0..510 {
            fade.step();
        }
        assert_eq!(fade, ChannelFade::new(0, false));
    }

    #[test]
    fn test_color_fade_iterator() {
        let colors: [RGB8; 2] = {
            let mut fade = ColorFade::demo();
            [fade.next().unwrap_or_default(), fade.next().unwrap_or_default()]
        };
        assert_eq!(colors[0], RGB8::new(0, 127, 255));
        assert_eq!(colors[1], RGB8::new(1, 128, 254));
    }
}
