//! RGB PWM Core - Plattform-unabhängiges Draw Target über PWM-Kanäle
//!
//! Diese Crate enthält KEINE Hardware-Dependencies. Channel-Deskriptoren und
//! RGB-Gruppen sind Zero-Sized Types, die zur Compile-Zeit geprüft werden; das
//! Draw Target spricht die Hardware nur über den [`PwmDriver`] Trait an.

#![no_std]

mod log;

pub mod channel;
pub mod color;
pub mod group;
pub mod logic;
pub mod target;
pub mod traits;
pub mod types;

// Re-Exports für einfachen Zugriff
pub use channel::{CHANNEL_COUNT, ChannelDescriptor, PwmChannel};
pub use color::{NativePixel, PixelFormat};
pub use group::{RgbGroup, RgbPwmGroup};
pub use logic::{ChannelFade, ColorFade};
pub use target::{MAX_GROUPS, RgbPwm};
pub use traits::{Error, PwmDriver};
pub use types::ChannelInfo;
