// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von rgb-pwm-core
pub use rgb_pwm_core::{ColorFade, Error, PwmDriver, RgbPwm, RgbPwmGroup};
