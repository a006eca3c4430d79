// Pixel-Strip über das RMT Peripheral
//
// Hält einen PixelBuffer und schreibt ihn bei show() über den
// SmartLED Adapter auf die WS2812 Datenleitung.

use esp_core::{IndicatorError, PixelBuffer, PixelStrip};
use esp_hal::Blocking;
use esp_hal::rmt::{self, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::MAX_LED_COUNT;

// Buffer-Größe für MAX_LED_COUNT LEDs (3 Farben * 8 Bits pro LED + 1 Reset)
pub const RMT_BUFFER_SIZE: usize = MAX_LED_COUNT * 24 + 1;

/// Real Hardware Pixel-Strip
///
/// Hinweis: Der RMT-Buffer muss länger leben als der Strip, daher wird
/// er in main() erstellt und als Parameter übergeben.
pub struct RmtPixelStrip<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
    pixels: PixelBuffer<MAX_LED_COUNT>,
}

impl<'a> RmtPixelStrip<'a> {
    /// Erstellt einen neuen RmtPixelStrip
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    /// - `pixel_count`: aktive LEDs, höchstens MAX_LED_COUNT
    ///
    /// # Fehlerbehandlung
    /// - `PixelCountExceeded` wenn `pixel_count > MAX_LED_COUNT`
    /// - `InitFailed` wenn das RMT Peripheral nicht startet
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [rmt::PulseCode; RMT_BUFFER_SIZE],
        pixel_count: usize,
    ) -> Result<Self, IndicatorError> {
        // Pixel-Anzahl vor dem Peripheral prüfen
        let pixels = PixelBuffer::new(pixel_count)?;

        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| IndicatorError::InitFailed)?;

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        Ok(Self { led, pixels })
    }
}

impl PixelStrip for RmtPixelStrip<'_> {
    fn set_brightness(&mut self, brightness: u8) {
        self.pixels.set_brightness(brightness);
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), IndicatorError> {
        self.pixels.set(index, color)
    }

    fn clear(&mut self) {
        self.pixels.clear();
    }

    fn show(&mut self) -> Result<(), IndicatorError> {
        self.led
            .write(self.pixels.frame())
            .map_err(|_| IndicatorError::WriteFailed)
    }
}
