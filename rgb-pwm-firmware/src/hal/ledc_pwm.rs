// LEDC PWM Driver
//
// Implementiert den PwmDriver Trait aus rgb-pwm-core über das ESP32-C6 LEDC
// Peripheral (Low-Speed Modus). Kanäle mit gleicher Frequenz und Duty-Auflösung
// teilen sich einen Hardware-Timer.

use defmt::{debug, error, warn};
use esp_hal::gpio::{AnyPin, DriveMode};
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use rgb_pwm_core::PwmDriver;
use static_cell::StaticCell;

/// Anzahl der LEDC Kanäle auf dem ESP32-C6
pub const LEDC_CHANNEL_COUNT: usize = 6;

/// Anzahl der LEDC Low-Speed Timer auf dem ESP32-C6
pub const LEDC_TIMER_COUNT: usize = 4;

// Timer werden von jedem darauf konfigurierten Kanal referenziert und müssen
// deshalb bis zum Programmende leben
static TIMERS: [StaticCell<timer::Timer<'static, LowSpeed>>; LEDC_TIMER_COUNT] = [
    StaticCell::new(),
    StaticCell::new(),
    StaticCell::new(),
    StaticCell::new(),
];

/// Hardware-Timer Slot
enum TimerSlot {
    Free,
    Configured {
        timer: &'static timer::Timer<'static, LowSpeed>,
        frequency_hz: u32,
        bit_depth: u8,
    },
}

/// Hardware-Kanal Slot
///
/// Das LEDC Peripheral kann den Duty eines Kanals nicht zurücklesen, deshalb
/// wird der zuletzt geschriebene Wert hier gecacht.
struct ChannelSlot {
    timer: Option<&'static timer::Timer<'static, LowSpeed>>,
    output: Option<channel::Channel<'static, LowSpeed>>,
    duty: u16,
}

impl ChannelSlot {
    const fn new() -> Self {
        Self {
            timer: None,
            output: None,
            duty: 0,
        }
    }
}

/// Echter Hardware PWM Driver
///
/// Nutzt das ESP32 LEDC Peripheral. Konfigurationsfehler (zu viele Timer,
/// nicht unterstützte Auflösung, ungültiger Kanal) werden geloggt und der
/// betroffene Kanal bleibt dunkel.
pub struct LedcPwm {
    ledc: Ledc<'static>,
    timers: [TimerSlot; LEDC_TIMER_COUNT],
    channels: [ChannelSlot; LEDC_CHANNEL_COUNT],
}

impl LedcPwm {
    /// Erstellt einen neuen LedcPwm
    ///
    /// Es darf nur eine Instanz existieren: Hardware-Timer werden einmal vergeben.
    ///
    /// # Parameter
    /// - `ledc_peripheral`: LEDC Peripheral
    pub fn new(ledc_peripheral: esp_hal::peripherals::LEDC<'static>) -> Self {
        let mut ledc = Ledc::new(ledc_peripheral);
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        Self {
            ledc,
            timers: [const { TimerSlot::Free }; LEDC_TIMER_COUNT],
            channels: [const { ChannelSlot::new() }; LEDC_CHANNEL_COUNT],
        }
    }

    /// Sucht einen Timer mit `frequency_hz` / `bit_depth` oder konfiguriert einen
    /// freien.
    fn timer_for(
        &mut self,
        frequency_hz: u32,
        bit_depth: u8,
    ) -> Option<&'static timer::Timer<'static, LowSpeed>> {
        for slot in &self.timers {
            if let TimerSlot::Configured {
                timer,
                frequency_hz: f,
                bit_depth: b,
            } = slot
            {
                if *f == frequency_hz && *b == bit_depth {
                    return Some(*timer);
                }
            }
        }

        let Some(index) = self
            .timers
            .iter()
            .position(|slot| matches!(slot, TimerSlot::Free))
        else {
            error!(
                "LEDC: no free timer for {} Hz / {} bit",
                frequency_hz, bit_depth
            );
            return None;
        };

        let Some(duty) = duty_resolution(bit_depth) else {
            error!("LEDC: {} bit duty resolution not supported", bit_depth);
            return None;
        };

        let mut hw_timer = self.ledc.timer::<LowSpeed>(timer_number(index));
        let config = timer::config::Config {
            duty,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(frequency_hz),
        };
        if let Err(e) = hw_timer.configure(config) {
            error!(
                "LEDC: timer {} configuration failed: {}",
                index,
                defmt::Debug2Format(&e)
            );
            return None;
        }

        let Some(hw_timer) = TIMERS[index].try_init(hw_timer) else {
            error!("LEDC: timer {} already taken", index);
            return None;
        };
        let hw_timer: &'static timer::Timer<'static, LowSpeed> = hw_timer;

        debug!(
            "LEDC: timer {} at {} Hz / {} bit",
            index, frequency_hz, bit_depth
        );
        self.timers[index] = TimerSlot::Configured {
            timer: hw_timer,
            frequency_hz,
            bit_depth,
        };
        Some(hw_timer)
    }
}

impl PwmDriver for LedcPwm {
    fn setup(&mut self, channel: u8, frequency_hz: u32, bit_depth: u8) {
        if channel_number(channel).is_none() {
            error!("LEDC: channel {} does not exist", channel);
            return;
        }
        let timer = self.timer_for(frequency_hz, bit_depth);
        self.channels[channel as usize].timer = timer;
    }

    fn attach(&mut self, pin: u8, channel: u8) {
        let Some(number) = channel_number(channel) else {
            error!("LEDC: channel {} does not exist", channel);
            return;
        };
        let slot = &mut self.channels[channel as usize];
        let Some(timer) = slot.timer else {
            warn!("LEDC: channel {} attached before setup", channel);
            return;
        };

        // SAFETY: der Pin ist laut Board-Konfiguration für diesen Kanal reserviert
        // und wird nirgendwo sonst vergeben.
        let output_pin = unsafe { AnyPin::steal(pin) };
        let mut output = self.ledc.channel::<LowSpeed>(number, output_pin);
        let config = channel::config::Config {
            timer,
            duty_pct: 0,
            drive_mode: DriveMode::PushPull,
        };
        if let Err(e) = output.configure(config) {
            error!(
                "LEDC: channel {} configuration failed: {}",
                channel,
                defmt::Debug2Format(&e)
            );
            return;
        }

        debug!("LEDC: channel {} on GPIO{}", channel, pin);
        output.set_duty_hw(u32::from(slot.duty));
        slot.output = Some(output);
    }

    fn read(&self, channel: u8) -> u16 {
        self.channels
            .get(channel as usize)
            .map(|slot| slot.duty)
            .unwrap_or(0)
    }

    fn write(&mut self, channel: u8, duty: u16) {
        let Some(slot) = self.channels.get_mut(channel as usize) else {
            return;
        };
        slot.duty = duty;
        if let Some(output) = &slot.output {
            output.set_duty_hw(u32::from(duty));
        }
    }
}

fn channel_number(channel: u8) -> Option<channel::Number> {
    match channel {
        0 => Some(channel::Number::Channel0),
        1 => Some(channel::Number::Channel1),
        2 => Some(channel::Number::Channel2),
        3 => Some(channel::Number::Channel3),
        4 => Some(channel::Number::Channel4),
        5 => Some(channel::Number::Channel5),
        _ => None,
    }
}

fn timer_number(index: usize) -> timer::Number {
    match index {
        0 => timer::Number::Timer0,
        1 => timer::Number::Timer1,
        2 => timer::Number::Timer2,
        _ => timer::Number::Timer3,
    }
}

fn duty_resolution(bit_depth: u8) -> Option<timer::config::Duty> {
    use timer::config::Duty;

    let duty = match bit_depth {
        1 => Duty::Duty1Bit,
        2 => Duty::Duty2Bit,
        3 => Duty::Duty3Bit,
        4 => Duty::Duty4Bit,
        5 => Duty::Duty5Bit,
        6 => Duty::Duty6Bit,
        7 => Duty::Duty7Bit,
        8 => Duty::Duty8Bit,
        9 => Duty::Duty9Bit,
        10 => Duty::Duty10Bit,
        11 => Duty::Duty11Bit,
        12 => Duty::Duty12Bit,
        13 => Duty::Duty13Bit,
        14 => Duty::Duty14Bit,
        _ => return None,
    };
    Some(duty)
}
