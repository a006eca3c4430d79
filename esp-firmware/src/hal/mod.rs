// Hardware Abstraction Layer (HAL) Module
//
// Implementiert die esp-core Traits (PixelStrip, ToneOutput)
// für die ESP32-C6 Peripherals.

pub mod pixel_strip;
pub mod speaker;

pub use pixel_strip::RmtPixelStrip;
pub use speaker::LedcSpeaker;
