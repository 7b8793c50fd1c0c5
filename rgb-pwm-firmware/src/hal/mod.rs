// Hardware Abstraction Layer (HAL) Modul
//
// Dieses Modul kapselt den Hardware-Zugriff hinter dem PwmDriver Trait
// aus rgb-pwm-core, damit das Draw Target auf dem Host testbar bleibt.

pub mod ledc_pwm;

pub use ledc_pwm::LedcPwm;
pub use rgb_pwm_core::PwmDriver;
