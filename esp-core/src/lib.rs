//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, die festen Ton-/Blink-Tabellen und den
//! `NotificationIndicator`, der sie abspielt.

#![no_std]

pub mod buffer;
pub mod indicator;
pub mod logic;
pub mod sequences;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use buffer::PixelBuffer;
pub use indicator::NotificationIndicator;
pub use logic::{parse_decimal, play_melody, play_pattern, scale_brightness};
pub use traits::{IndicatorError, PixelStrip, ToneOutput};
pub use types::{
    IndicatorConfig, Melody, Note, Notification, Pattern, PixelAction, PixelWrite, ToneStep,
    VisualStep,
};
