//! Gemeinsamer Mock PWM Driver für die Integration Tests
#![allow(dead_code)]

use rgb_pwm_core::PwmDriver;

// ============================================================================
// Mock PWM Driver
// ============================================================================

/// In-memory PWM Peripheral mit 16 Kanälen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockPwm {
    /// (frequency_hz, bit_depth) pro konfiguriertem Kanal
    pub setup: [Option<(u32, u8)>; 16],
    /// An jeden Kanal angehängter Pin
    pub attached: [Option<u8>; 16],
    /// Roher Duty pro Kanal
    pub duty: [u16; 16],
    pub setup_count: usize,
    pub write_count: usize,
}

impl MockPwm {
    pub fn new() -> Self {
        Self {
            setup: [None; 16],
            attached: [None; 16],
            duty: [0; 16],
            setup_count: 0,
            write_count: 0,
        }
    }
}

impl PwmDriver for MockPwm {
    fn setup(&mut self, channel: u8, frequency_hz: u32, bit_depth: u8) {
        self.setup[channel as usize] = Some((frequency_hz, bit_depth));
        self.setup_count += 1;
    }

    fn attach(&mut self, pin: u8, channel: u8) {
        self.attached[channel as usize] = Some(pin);
    }

    fn read(&self, channel: u8) -> u16 {
        self.duty[channel as usize]
    }

    fn write(&mut self, channel: u8, duty: u16) {
        self.duty[channel as usize] = duty;
        self.write_count += 1;
    }
}
