//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung. Die blockierende Wartezeit kommt
//! direkt aus `embedded_hal::delay::DelayNs`.

use rgb::RGB8;

/// Fehler-Typ für Indikator-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// Pixel-Daten konnten nicht an die Hardware gesendet werden
    WriteFailed,
    /// Tongenerator hat die Konfiguration abgelehnt
    ToneFailed,
    /// Pixel-Index liegt hinter dem Ende des Strips
    PixelOutOfRange { index: usize, count: usize },
    /// Mehr Pixel konfiguriert als der Buffer fasst
    PixelCountExceeded { count: usize, capacity: usize },
    /// Peripheral konnte nicht initialisiert werden
    InitFailed,
}

/// Trait für adressierbare Pixel-Strips (WS2812/Neopixel)
///
/// Der Pixel-Buffer gehört dem Treiber. `set_pixel` und `clear`
/// ändern nur den Buffer, erst `show` schreibt auf die Hardware.
///
/// # Implementierungen
/// - **Production:** RmtPixelStrip (ESP32 RMT Peripheral)
/// - **Testing:** MockStrip (in-memory Mock)
pub trait PixelStrip {
    /// Initialisiert den Treiber. Standard: nichts zu tun.
    fn begin(&mut self) -> Result<(), IndicatorError> {
        Ok(())
    }

    /// Setzt die globale Helligkeit (0-255), wirkt beim nächsten `show`
    fn set_brightness(&mut self, brightness: u8);

    /// Schreibt eine Farbe in den Buffer
    ///
    /// # Fehlerbehandlung
    /// Buffer-basierte Treiber geben `IndicatorError::PixelOutOfRange`
    /// zurück wenn `index` außerhalb des Strips liegt
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), IndicatorError>;

    /// Setzt alle Pixel im Buffer auf aus
    fn clear(&mut self);

    /// Schreibt den Buffer auf die Hardware
    ///
    /// # Fehlerbehandlung
    /// Gibt `IndicatorError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn show(&mut self) -> Result<(), IndicatorError>;
}

/// Trait für einen einkanaligen Tongenerator (Piezo-Lautsprecher)
///
/// Der Ausgangs-Pin gehört der Implementierung. `tone` startet einen
/// Dauerton und kehrt sofort zurück, `no_tone` beendet ihn.
pub trait ToneOutput {
    fn tone(&mut self, frequency_hz: u32) -> Result<(), IndicatorError>;

    fn no_tone(&mut self) -> Result<(), IndicatorError>;
}

impl<T: PixelStrip + ?Sized> PixelStrip for &mut T {
    fn begin(&mut self) -> Result<(), IndicatorError> {
        T::begin(self)
    }

    fn set_brightness(&mut self, brightness: u8) {
        T::set_brightness(self, brightness)
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), IndicatorError> {
        T::set_pixel(self, index, color)
    }

    fn clear(&mut self) {
        T::clear(self)
    }

    fn show(&mut self) -> Result<(), IndicatorError> {
        T::show(self)
    }
}

impl<T: ToneOutput + ?Sized> ToneOutput for &mut T {
    fn tone(&mut self, frequency_hz: u32) -> Result<(), IndicatorError> {
        T::tone(self, frequency_hz)
    }

    fn no_tone(&mut self) -> Result<(), IndicatorError> {
        T::no_tone(self)
    }
}
