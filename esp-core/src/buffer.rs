//! Pixel-Buffer für Strip-Treiber
//!
//! Hält die Farben aller Pixel und die globale Helligkeit. Treiber
//! (z.B. RmtPixelStrip) schreiben bei `show` den skalierten Frame
//! auf die Hardware.

use rgb::RGB8;

use crate::logic::scale_brightness;
use crate::traits::IndicatorError;
use crate::types::OFF;

/// Buffer mit Kapazität `N`, davon `count` Pixel aktiv
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [RGB8; N],
    count: usize,
    brightness: u8,
}

impl<const N: usize> PixelBuffer<N> {
    /// Erstellt einen leeren Buffer mit `count` aktiven Pixeln
    ///
    /// # Fehlerbehandlung
    /// `PixelCountExceeded` wenn `count > N`
    pub fn new(count: usize) -> Result<Self, IndicatorError> {
        if count > N {
            return Err(IndicatorError::PixelCountExceeded { count, capacity: N });
        }
        Ok(Self {
            pixels: [OFF; N],
            count,
            brightness: u8::MAX,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Setzt ein Pixel
    ///
    /// # Fehlerbehandlung
    /// `PixelOutOfRange` wenn `index >= len()`, der Buffer bleibt unverändert
    pub fn set(&mut self, index: usize, color: RGB8) -> Result<(), IndicatorError> {
        match self.pixels[..self.count].get_mut(index) {
            Some(pixel) => {
                *pixel = color;
                Ok(())
            }
            None => Err(IndicatorError::PixelOutOfRange {
                index,
                count: self.count,
            }),
        }
    }

    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.pixels[..self.count].get(index).copied()
    }

    pub fn clear(&mut self) {
        self.pixels = [OFF; N];
    }

    /// Aktive Pixel, mit Helligkeit skaliert (für `show`)
    pub fn frame(&self) -> impl Iterator<Item = RGB8> + '_ {
        let brightness = self.brightness;
        self.pixels[..self.count]
            .iter()
            .map(move |&color| scale_brightness(color, brightness))
    }
}
