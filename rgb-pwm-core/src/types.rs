//! Core Types für die PWM-Kanal-Konfiguration
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Beschreibung eines physischen PWM-Ausgangs
///
/// Spiegelt die Const-Parameter eines [`ChannelDescriptor`](crate::ChannelDescriptor)
/// als einfache Daten, damit eine Konfiguration zur Laufzeit geloggt oder verglichen werden kann.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelInfo {
    pub pin: u8,
    pub channel: u8,
    pub frequency_hz: u32,
    pub bit_depth: u8,
    pub max_percent: u8,
}

impl ChannelInfo {
    /// Gibt true zurück, wenn beide Ausgänge denselben Hardware-Kanal oder denselben Pin nutzen.
    pub const fn conflicts_with(&self, other: &ChannelInfo) -> bool {
        self.channel == other.channel || self.pin == other.pin
    }
}

// ============================================================================
// defmt::Format Implementierungen (optionales Feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelInfo {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "ChannelInfo {{ pin: {}, channel: {}, {} Hz, {} bit, max {}% }}",
            self.pin,
            self.channel,
            self.frequency_hz,
            self.bit_depth,
            self.max_percent
        )
    }
}
