// Library-Root: Hardware-Treiber, Konfiguration und Status-Schleife
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod status;

// Re-exports von esp-core
pub use esp_core::{IndicatorConfig, IndicatorError, Notification, NotificationIndicator};

use esp_hal::delay::Delay;

use crate::hal::{LedcSpeaker, RmtPixelStrip};

/// Indikator mit echter Hardware: RMT Strip, LEDC Lautsprecher, blockierendes Delay
pub type StatusIndicator<'a> = NotificationIndicator<RmtPixelStrip<'a>, LedcSpeaker<'a>, Delay>;
