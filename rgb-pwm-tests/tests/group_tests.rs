//! Integration Tests für Channel-Deskriptoren und RGB-Gruppen
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockPwm

mod common;

use common::MockPwm;
use rgb::RGB8;
use rgb_pwm_core::{
    ChannelDescriptor, ChannelInfo, NativePixel, PixelFormat, PwmChannel, RgbGroup, RgbPwmGroup,
};

type Red = PwmChannel<32, 0, 2000, 10>;
type Green = PwmChannel<25, 1, 2000, 8>;
type Blue = PwmChannel<26, 2, 2000, 12, 75>;
type Led = RgbPwmGroup<Red, Green, Blue>;

static LED: Led = RgbPwmGroup::new();

#[test]
fn test_initialize_configures_all_three_channels() {
    let mut pwm = MockPwm::new();
    LED.initialize_channels(&mut pwm);

    assert_eq!(pwm.setup[0], Some((2000, 10)));
    assert_eq!(pwm.setup[1], Some((2000, 8)));
    assert_eq!(pwm.setup[2], Some((2000, 12)));
    assert_eq!(&pwm.attached[0..3], &[Some(32), Some(25), Some(26)]);
}

#[test]
fn test_repeated_initialize_is_harmless() {
    let mut once = MockPwm::new();
    LED.initialize_channels(&mut once);

    let mut twice = MockPwm::new();
    LED.initialize_channels(&mut twice);
    LED.initialize_channels(&mut twice);

    assert_eq!(once.setup, twice.setup);
    assert_eq!(once.attached, twice.attached);
    assert_eq!(twice.setup_count, 6);
}

#[test]
fn test_native_format() {
    assert_eq!(Led::FORMAT, PixelFormat::new(10, 8, 12));
    assert_eq!(RgbGroup::<MockPwm>::format(&LED), Led::FORMAT);
}

#[test]
fn test_over_range_component_is_clamped() {
    let mut clamped = MockPwm::new();
    LED.write_native(&mut clamped, NativePixel { r: 2000, g: 300, b: 9000 });

    let mut at_max = MockPwm::new();
    LED.write_native(&mut at_max, NativePixel { r: 1023, g: 255, b: 4095 });

    assert_eq!(clamped.duty, at_max.duty);
    assert_eq!(&clamped.duty[0..3], &[1023, 255, 4095]);
}

#[test]
fn test_per_channel_writes() {
    let mut pwm = MockPwm::new();
    LED.write_r(&mut pwm, 512);
    LED.write_g(&mut pwm, 17);
    LED.write_b(&mut pwm, 4000);

    assert_eq!(&pwm.duty[0..3], &[512, 17, 4000]);
    assert_eq!(LED.read_r(&pwm), 512);
    assert_eq!(LED.read_g(&pwm), 17);
    // Blau ist auf 75% begrenzt: 4000 * 75 / 100
    assert_eq!(LED.read_b(&pwm), 3000);
}

#[test]
fn test_read_native_truncates_scaled_value() {
    let mut pwm = MockPwm::new();
    LED.write_b(&mut pwm, 7);
    // 7 * 0.75 = 5.25
    assert_eq!(LED.read_native(&pwm).b, 5);
}

#[test]
fn test_external_pixel_rescaled_per_channel() {
    let mut pwm = MockPwm::new();
    LED.write_pixel(&mut pwm, RGB8::new(255, 255, 255));

    assert_eq!(&pwm.duty[0..3], &[1023, 255, 4095]);
}

#[test]
fn test_channel_info() {
    let channels = RgbGroup::<MockPwm>::channels(&LED);
    assert_eq!(channels[0], Red::INFO);
    assert_eq!(
        channels[2],
        ChannelInfo {
            pin: 26,
            channel: 2,
            frequency_hz: 2000,
            bit_depth: 12,
            max_percent: 75,
        }
    );
}

#[test]
fn test_debug_lists_channels() {
    let text = format!("{LED:?}");
    assert!(text.starts_with("RgbPwmGroup"));
    assert!(text.contains("pin: 26"));
}
