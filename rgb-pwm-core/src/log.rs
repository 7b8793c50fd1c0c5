//! Logging-Makros
//!
//! Expandieren mit aktiviertem `defmt` Feature zu `defmt`-Aufrufen, sonst zu
//! nichts. Die Argumente werden trotzdem ausgeliehen, damit abgeschaltetes
//! Logging keine Unused-Variable-Warnungen erzeugt.
//!
//! Die Makros tragen ein `__` Präfix und werden unter ihren kurzen Namen
//! re-exportiert: ein `macro_rules! warn` lässt sich nicht neben dem
//! eingebauten `#[warn]` Attribut importieren.

macro_rules! __debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            defmt::debug!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($(&$x,)*);
        }
    };
}

macro_rules! __info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            defmt::info!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($(&$x,)*);
        }
    };
}

macro_rules! __warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "defmt")]
            defmt::warn!($s $(, $x)*);
            #[cfg(not(feature = "defmt"))]
            let _ = ($(&$x,)*);
        }
    };
}

pub(crate) use {__debug as debug, __info as info, __warn as warn};
