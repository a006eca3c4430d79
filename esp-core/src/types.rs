//! Core Types für die Status-Anzeige
//!
//! Datenstrukturen ohne Hardware-Dependencies: Konfiguration,
//! Töne, Pixel-Schritte und die Geräte-Zustände.

use rgb::RGB8;

// ============================================================================
// Farben
// ============================================================================

pub const OFF: RGB8 = RGB8::new(0, 0, 0);
pub const RED: RGB8 = RGB8::new(255, 0, 0);
pub const GREEN: RGB8 = RGB8::new(0, 255, 0);
pub const BLUE: RGB8 = RGB8::new(0, 0, 255);
pub const MAGENTA: RGB8 = RGB8::new(255, 0, 255);

// ============================================================================
// Konfiguration
// ============================================================================

/// Konfiguration des Indikators, fest ab Konstruktion
///
/// Die Pin-Nummern dienen nur der Identifikation (Logging). Die
/// eigentlichen Pins gehören den Treibern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    pub pixel_pin: u8,
    pub pixel_count: usize,
    pub brightness: u8,
    pub speaker_pin: u8,
}

impl IndicatorConfig {
    pub const fn new(pixel_pin: u8, pixel_count: usize, brightness: u8, speaker_pin: u8) -> Self {
        Self {
            pixel_pin,
            pixel_count,
            brightness,
            speaker_pin,
        }
    }
}

// ============================================================================
// Töne
// ============================================================================

/// Tonhöhe in Hz (gleichstufige Stimmung, gerundet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note(pub u32);

impl Note {
    pub const E6: Note = Note(1319);
    pub const F6: Note = Note(1397);
    pub const G6: Note = Note(1568);

    pub const fn hz(self) -> u32 {
        self.0
    }
}

/// Ein Schritt einer Melodie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneStep {
    /// Ton spielen, warten, Ton aus
    Play { frequency_hz: u32, duration_ms: u32 },
    /// Stille
    Rest { duration_ms: u32 },
}

impl ToneStep {
    pub const fn play(note: Note, duration_ms: u32) -> Self {
        Self::Play {
            frequency_hz: note.hz(),
            duration_ms,
        }
    }

    pub const fn rest(duration_ms: u32) -> Self {
        Self::Rest { duration_ms }
    }

    pub const fn duration_ms(&self) -> u32 {
        match *self {
            Self::Play { duration_ms, .. } | Self::Rest { duration_ms } => duration_ms,
        }
    }
}

/// Feste Tonfolge
#[derive(Debug)]
pub struct Melody {
    pub name: &'static str,
    pub steps: &'static [ToneStep],
}

impl Melody {
    /// Gesamtdauer in ms
    pub fn duration_ms(&self) -> u32 {
        self.steps.iter().map(ToneStep::duration_ms).sum()
    }
}

// ============================================================================
// Pixel-Muster
// ============================================================================

/// Schreibt `color` auf Pixel `index`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelWrite {
    pub index: usize,
    pub color: RGB8,
}

impl PixelWrite {
    pub const fn new(index: usize, color: RGB8) -> Self {
        Self { index, color }
    }
}

/// Was ein Schritt mit dem Strip macht, bevor gewartet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelAction {
    /// Pixel setzen, dann `show`
    Paint(&'static [PixelWrite]),
    /// Buffer löschen, dann `show`
    Clear,
    /// Kein Hardware-Zugriff, nur warten
    Hold,
}

/// Ein Schritt eines Musters: Aktion, danach `hold_ms` warten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualStep {
    pub action: PixelAction,
    pub hold_ms: u32,
}

/// Festes Blink-Muster (ein Durchlauf)
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub steps: &'static [VisualStep],
}

impl Pattern {
    /// Gesamtdauer eines Durchlaufs in ms
    pub fn duration_ms(&self) -> u32 {
        self.steps.iter().map(|step| step.hold_ms).sum()
    }
}

// ============================================================================
// Geräte-Zustände
// ============================================================================

/// Visuelle Zustände des Geräts
///
/// Welcher Zustand gerade gilt entscheidet der Aufrufer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    NotReady,
    WaitingFix,
    Loading,
    ReadyToSend,
    Maintenance,
}

impl Notification {
    pub const ALL: [Notification; 5] = [
        Notification::NotReady,
        Notification::WaitingFix,
        Notification::Loading,
        Notification::ReadyToSend,
        Notification::Maintenance,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Notification::NotReady => "not-ready",
            Notification::WaitingFix => "waiting-fix",
            Notification::Loading => "loading",
            Notification::ReadyToSend => "ready-to-send",
            Notification::Maintenance => "maintenance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_step_duration() {
        assert_eq!(ToneStep::play(Note::E6, 120).duration_ms(), 120);
        assert_eq!(ToneStep::rest(80).duration_ms(), 80);
    }

    #[test]
    fn test_tone_step_play_uses_note_frequency() {
        assert_eq!(
            ToneStep::play(Note::G6, 320),
            ToneStep::Play {
                frequency_hz: 1568,
                duration_ms: 320
            }
        );
    }

    #[test]
    fn test_notification_names_unique() {
        for (i, a) in Notification::ALL.iter().enumerate() {
            for b in &Notification::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
