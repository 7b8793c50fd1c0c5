//! Pixel-Formate und kanalweise Bit-Tiefen-Umrechnung
//!
//! Das Draw Target spricht nach außen [`RGB8`]. Jede Gruppe speichert ihr
//! natives Pixel in einem [`RGB16`], dessen Komponenten nur bis zur Bit-Tiefe
//! aus dem [`PixelFormat`] der Gruppe gültig sind.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use rgb::{RGB8, RGB16};

/// Natives Pixel einer Kanal-Gruppe
pub type NativePixel = RGB16;

/// Größter Wert, der sich mit `bits` Bits darstellen lässt.
///
/// Sättigt: `0` Bits ergeben `0`, alles ab 16 Bits ergibt `u16::MAX`.
pub const fn channel_max(bits: u8) -> u16 {
    if bits >= 16 {
        return u16::MAX;
    }
    ((1u32 << (bits as u32)) - 1) as u16
}

/// Rechnet `value` von einem `from_bits` Kanal auf einen `to_bits` Kanal um.
///
/// Der Eingang wird zuerst auf den Quell-Bereich begrenzt. Rundet auf den
/// nächsten Wert, ein 8 → d → 8 Round-Trip weicht also um weniger als `2^(8-d)`
/// ab. Eine Quelle mit null Bits liefert immer 0.
///
/// ```
/// # use rgb_pwm_core::color::rescale;
/// assert_eq!(rescale(255, 8, 4), 15);
/// assert_eq!(rescale(15, 4, 8), 255);
/// assert_eq!(rescale(128, 8, 8), 128);
/// ```
pub const fn rescale(value: u16, from_bits: u8, to_bits: u8) -> u16 {
    let from_max = channel_max(from_bits) as u32;
    let to_max = channel_max(to_bits) as u32;
    let value = if (value as u32) > from_max {
        from_max
    } else {
        value as u32
    };
    if from_bits == to_bits {
        return value as u16;
    }
    if from_max == 0 {
        return 0;
    }
    ((value * to_max + from_max / 2) / from_max) as u16
}

/// Bit-Tiefen pro Kanal eines RGB-Pixels, jeweils in `1..=16`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PixelFormat {
    r_bits: u8,
    g_bits: u8,
    b_bits: u8,
}

impl PixelFormat {
    /// Das externe Format mit 8 Bit pro Kanal
    pub const RGB888: PixelFormat = PixelFormat::new(8, 8, 8);

    /// # Panics
    ///
    /// Löst eine Panic aus, wenn eine Tiefe außerhalb von `1..=16` liegt. Im
    /// `const` Kontext ist das ein Build-Fehler.
    pub const fn new(r_bits: u8, g_bits: u8, b_bits: u8) -> Self {
        assert!(valid_depth(r_bits), "red bit depth must be in 1..=16");
        assert!(valid_depth(g_bits), "green bit depth must be in 1..=16");
        assert!(valid_depth(b_bits), "blue bit depth must be in 1..=16");
        Self {
            r_bits,
            g_bits,
            b_bits,
        }
    }

    /// Geprüfte Variante von [`new`](Self::new).
    pub const fn try_new(r_bits: u8, g_bits: u8, b_bits: u8) -> Option<Self> {
        if valid_depth(r_bits) && valid_depth(g_bits) && valid_depth(b_bits) {
            Some(Self {
                r_bits,
                g_bits,
                b_bits,
            })
        } else {
            None
        }
    }

    pub const fn r_bits(self) -> u8 {
        self.r_bits
    }

    pub const fn g_bits(self) -> u8 {
        self.g_bits
    }

    pub const fn b_bits(self) -> u8 {
        self.b_bits
    }

    /// Maximale Komponenten-Werte dieses Formats
    pub const fn max(self) -> NativePixel {
        NativePixel {
            r: channel_max(self.r_bits),
            g: channel_max(self.g_bits),
            b: channel_max(self.b_bits),
        }
    }

    /// Rechnet `pixel` von `self` nach `target` um.
    pub const fn convert(self, pixel: NativePixel, target: PixelFormat) -> NativePixel {
        NativePixel {
            r: rescale(pixel.r, self.r_bits, target.r_bits),
            g: rescale(pixel.g, self.g_bits, target.g_bits),
            b: rescale(pixel.b, self.b_bits, target.b_bits),
        }
    }

    /// Rechnet ein externes Pixel in dieses Format um.
    pub const fn from_rgb8(self, color: RGB8) -> NativePixel {
        let wide = NativePixel {
            r: color.r as u16,
            g: color.g as u16,
            b: color.b as u16,
        };
        PixelFormat::RGB888.convert(wide, self)
    }

    /// Rechnet ein Pixel dieses Formats in das externe Format um.
    pub const fn to_rgb8(self, pixel: NativePixel) -> RGB8 {
        let narrow = self.convert(pixel, PixelFormat::RGB888);
        RGB8 {
            r: narrow.r as u8,
            g: narrow.g as u8,
            b: narrow.b as u8,
        }
    }
}

const fn valid_depth(bits: u8) -> bool {
    bits >= 1 && bits <= 16
}

/// Wandelt eine `embedded-graphics` Farbe ins externe Pixel-Format um.
pub fn rgb888_to_rgb8(color: Rgb888) -> RGB8 {
    RGB8::new(color.r(), color.g(), color.b())
}

/// Wandelt das externe Pixel-Format in eine `embedded-graphics` Farbe um.
pub fn rgb8_to_rgb888(color: RGB8) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_max() {
        assert_eq!(channel_max(1), 1);
        assert_eq!(channel_max(8), 255);
        assert_eq!(channel_max(10), 1023);
        assert_eq!(channel_max(16), u16::MAX);
    }

    #[test]
    fn test_rescale_same_depth_is_identity() {
        for value in [0, 1, 127, 128, 254, 255] {
            assert_eq!(rescale(value, 8, 8), value);
        }
    }

    #[test]
    fn test_rescale_clamps_source_range() {
        assert_eq!(rescale(300, 8, 8), 255);
        assert_eq!(rescale(300, 8, 16), u16::MAX);
    }

    #[test]
    fn test_rescale_widening_hits_both_ends() {
        assert_eq!(rescale(0, 8, 12), 0);
        assert_eq!(rescale(255, 8, 12), 4095);
        assert_eq!(rescale(255, 8, 16), u16::MAX);
        assert_eq!(rescale(1, 1, 8), 255);
    }

    #[test]
    fn test_round_trip_loss_is_bounded() {
        for depth in 1..=8u8 {
            let bound = 1u16 << (8 - depth);
            for value in 0..=255u16 {
                let back = rescale(rescale(value, 8, depth), depth, 8);
                assert!(
                    back.abs_diff(value) < bound,
                    "depth {depth}: {value} -> {back}"
                );
            }
        }
    }

    #[test]
    fn test_pixel_format_round_trip_at_higher_depth() {
        let format = PixelFormat::new(10, 12, 16);
        let color = RGB8::new(1, 128, 255);
        assert_eq!(format.to_rgb8(format.from_rgb8(color)), color);
    }

    #[test]
    fn test_pixel_format_max() {
        let format = PixelFormat::new(4, 8, 10);
        assert_eq!(
            format.max(),
            NativePixel {
                r: 15,
                g: 255,
                b: 1023
            }
        );
    }

    #[test]
    fn test_out_of_range_depths_do_not_panic() {
        assert_eq!(channel_max(0), 0);
        assert_eq!(channel_max(17), u16::MAX);
        assert_eq!(channel_max(255), u16::MAX);
        assert_eq!(rescale(5, 0, 8), 0);
        assert_eq!(rescale(255, 8, 0), 0);
    }

    #[test]
    fn test_try_new_rejects_invalid_depths() {
        assert_eq!(PixelFormat::try_new(0, 8, 8), None);
        assert_eq!(PixelFormat::try_new(8, 17, 8), None);
        assert_eq!(PixelFormat::try_new(8, 8, 0), None);
        assert_eq!(PixelFormat::try_new(1, 8, 16), Some(PixelFormat::new(1, 8, 16)));
    }

    #[test]
    #[should_panic(expected = "red bit depth must be in 1..=16")]
    fn test_new_panics_on_zero_depth() {
        let _ = PixelFormat::new(0, 8, 8);
    }

    #[test]
    fn test_embedded_graphics_bridge() {
        let color = Rgb888::new(10, 20, 30);
        assert_eq!(rgb888_to_rgb8(color), RGB8::new(10, 20, 30));
        assert_eq!(rgb8_to_rgb888(RGB8::new(10, 20, 30)), color);
    }
}
