//! NotificationIndicator - Status-Anzeige über LED-Strip und Lautsprecher
//!
//! Jede Operation ist eine feste, blockierende Folge aus Pixel-Writes,
//! Tönen und Wartezeiten. Welcher Zustand angezeigt wird entscheidet
//! der Aufrufer (typisch: Methode in einer Schleife aufrufen).

use embedded_hal::delay::DelayNs;
use rgb::RGB8;

use crate::logic::{play_melody, play_pattern};
use crate::sequences::{INTRO_MELODY, MAINTENANCE_MELODY};
use crate::traits::{IndicatorError, PixelStrip, ToneOutput};
use crate::types::{IndicatorConfig, Melody, Notification, Pattern};

/// Audio-visuelle Status-Anzeige
///
/// # Trait-basierte Abstraktion
/// - `S: PixelStrip` - LED-Strip (RmtPixelStrip oder Mock)
/// - `T: ToneOutput` - Piezo-Lautsprecher (LedcSpeaker oder Mock)
/// - `D: DelayNs` - blockierende Wartezeit
pub struct NotificationIndicator<S, T, D> {
    config: IndicatorConfig,
    strip: S,
    speaker: T,
    delay: D,
}

impl<S, T, D> NotificationIndicator<S, T, D>
where
    S: PixelStrip,
    T: ToneOutput,
    D: DelayNs,
{
    /// Erstellt den Indikator. Vor allen anderen Methoden muss
    /// `initialize()` aufgerufen werden.
    pub fn new(config: IndicatorConfig, strip: S, speaker: T, delay: D) -> Self {
        Self {
            config,
            strip,
            speaker,
            delay,
        }
    }

    /// Konfiguration aus der Konstruktion
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Gibt die Treiber zurück
    pub fn release(self) -> (S, T, D) {
        (self.strip, self.speaker, self.delay)
    }

    /// Initialisiert den Strip und setzt die Helligkeit
    pub fn initialize(&mut self) -> Result<(), IndicatorError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("Initialize indicator: {}", self.config);

        self.strip.begin()?;
        self.strip.set_brightness(self.config.brightness);
        Ok(())
    }

    /// Schaltet alle Pixel aus (clear + ein show)
    pub fn clear_all(&mut self) -> Result<(), IndicatorError> {
        self.strip.clear();
        self.strip.show()
    }

    /// Setzt ein Pixel und schreibt sofort auf die Hardware
    ///
    /// Der Index wird hier nicht geprüft, das übernimmt der Treiber.
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), IndicatorError> {
        self.strip.set_pixel(index, RGB8::new(r, g, b))?;
        self.strip.show()
    }

    // ------------------------------------------------------------------------
    // Töne
    // ------------------------------------------------------------------------

    /// Drei aufsteigende Töne (E6, F6, G6), 560 ms
    pub fn intro_tone(&mut self) -> Result<(), IndicatorError> {
        self.play_melody(&INTRO_MELODY)
    }

    /// Wartungs-Melodie in zwei Phrasen, 1440 ms
    pub fn maintenance_tone(&mut self) -> Result<(), IndicatorError> {
        self.play_melody(&MAINTENANCE_MELODY)
    }

    /// Spielt eine beliebige Melodie ab
    pub fn play_melody(&mut self, melody: &Melody) -> Result<(), IndicatorError> {
        play_melody(&mut self.speaker, &mut self.delay, melody)
    }

    // ------------------------------------------------------------------------
    // Blink-Muster (je ein Durchlauf)
    // ------------------------------------------------------------------------

    /// Rot, abwechselnd auf Pixel 0 und 1
    pub fn not_ready_blink(&mut self) -> Result<(), IndicatorError> {
        self.notify(Notification::NotReady)
    }

    /// Blau, abwechselnd auf Pixel 0 und 1
    pub fn waiting_fix_blink(&mut self) -> Result<(), IndicatorError> {
        self.notify(Notification::WaitingFix)
    }

    /// Magenta, abwechselnd auf Pixel 0 und 1
    pub fn loading_blink(&mut self) -> Result<(), IndicatorError> {
        self.notify(Notification::Loading)
    }

    /// Beide Pixel magenta, dann aus
    pub fn maintenance_blink(&mut self) -> Result<(), IndicatorError> {
        self.notify(Notification::Maintenance)
    }

    /// Vier grüne Blitze, dann 1200 ms Pause
    pub fn ready_burst(&mut self) -> Result<(), IndicatorError> {
        self.notify(Notification::ReadyToSend)
    }

    /// Ein Durchlauf des Musters für `notification`
    pub fn notify(&mut self, notification: Notification) -> Result<(), IndicatorError> {
        self.play_pattern(notification.pattern())
    }

    /// Spielt einen Durchlauf eines beliebigen Musters ab
    pub fn play_pattern(&mut self, pattern: &Pattern) -> Result<(), IndicatorError> {
        play_pattern(&mut self.strip, &mut self.delay, pattern)
    }
}
