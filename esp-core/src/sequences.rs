//! Feste Ton- und Blink-Tabellen
//!
//! Alle Zeiten in Millisekunden. Die Tabellen werden von
//! `play_melody` / `play_pattern` abgespielt.

use crate::types::{
    BLUE, GREEN, MAGENTA, Melody, Note, Notification, OFF, Pattern, PixelAction, PixelWrite, RED,
    ToneStep, VisualStep,
};

/// Halbe Periode der Atem-Muster
pub const BREATH_INTERVAL_MS: u32 = 240;

/// An- bzw. Aus-Zeit eines Blitzes im Ready-Burst
pub const BURST_FLASH_MS: u32 = 40;

/// Anzahl Blitze pro Ready-Burst
pub const BURST_FLASH_COUNT: usize = 4;

/// Pause nach einem Ready-Burst
pub const BURST_PAUSE_MS: u32 = 1200;

// ============================================================================
// Melodien
// ============================================================================

const INTRO_STEPS: [ToneStep; 3] = [
    ToneStep::play(Note::E6, 120),
    ToneStep::play(Note::F6, 120),
    ToneStep::play(Note::G6, 320),
];

const MAINTENANCE_STEPS: [ToneStep; 10] = [
    // Erste Phrase
    ToneStep::play(Note::E6, 120),
    ToneStep::rest(80),
    ToneStep::play(Note::E6, 120),
    ToneStep::rest(80),
    ToneStep::play(Note::F6, 120),
    ToneStep::rest(80),
    ToneStep::play(Note::G6, 280),
    // Zweite Phrase
    ToneStep::play(Note::E6, 120),
    ToneStep::play(Note::F6, 120),
    ToneStep::play(Note::G6, 320),
];

pub static INTRO_MELODY: Melody = Melody {
    name: "intro",
    steps: &INTRO_STEPS,
};

pub static MAINTENANCE_MELODY: Melody = Melody {
    name: "maintenance",
    steps: &MAINTENANCE_STEPS,
};

// ============================================================================
// Blink-Muster
// ============================================================================

/// Pixel 0 und 1 wechseln sich mit `$color` ab
macro_rules! breath {
    ($name:literal, $color:expr) => {{
        const FIRST: [PixelWrite; 2] = [PixelWrite::new(0, $color), PixelWrite::new(1, OFF)];
        const SECOND: [PixelWrite; 2] = [PixelWrite::new(0, OFF), PixelWrite::new(1, $color)];

        Pattern {
            name: $name,
            steps: &[
                VisualStep {
                    action: PixelAction::Paint(&FIRST),
                    hold_ms: BREATH_INTERVAL_MS,
                },
                VisualStep {
                    action: PixelAction::Paint(&SECOND),
                    hold_ms: BREATH_INTERVAL_MS,
                },
            ],
        }
    }};
}

pub static NOT_READY_PATTERN: Pattern = breath!("not-ready", RED);
pub static WAITING_FIX_PATTERN: Pattern = breath!("waiting-fix", BLUE);
pub static LOADING_PATTERN: Pattern = breath!("loading", MAGENTA);

const MAINTENANCE_ON: [PixelWrite; 2] = [PixelWrite::new(0, MAGENTA), PixelWrite::new(1, MAGENTA)];

pub static MAINTENANCE_PATTERN: Pattern = Pattern {
    name: "maintenance",
    steps: &[
        VisualStep {
            action: PixelAction::Paint(&MAINTENANCE_ON),
            hold_ms: BREATH_INTERVAL_MS,
        },
        VisualStep {
            action: PixelAction::Clear,
            hold_ms: BREATH_INTERVAL_MS,
        },
    ],
};

const GREEN_FLASH: [PixelWrite; 2] = [PixelWrite::new(0, GREEN), PixelWrite::new(1, GREEN)];

const FLASH_ON: VisualStep = VisualStep {
    action: PixelAction::Paint(&GREEN_FLASH),
    hold_ms: BURST_FLASH_MS,
};

const FLASH_OFF: VisualStep = VisualStep {
    action: PixelAction::Clear,
    hold_ms: BURST_FLASH_MS,
};

// Muss zu BURST_FLASH_COUNT passen
pub static READY_BURST_PATTERN: Pattern = Pattern {
    name: "ready-to-send",
    steps: &[
        FLASH_ON,
        FLASH_OFF,
        FLASH_ON,
        FLASH_OFF,
        FLASH_ON,
        FLASH_OFF,
        FLASH_ON,
        FLASH_OFF,
        VisualStep {
            action: PixelAction::Hold,
            hold_ms: BURST_PAUSE_MS,
        },
    ],
};

impl Notification {
    /// Muster für einen Durchlauf dieses Zustands
    pub fn pattern(self) -> &'static Pattern {
        match self {
            Notification::NotReady => &NOT_READY_PATTERN,
            Notification::WaitingFix => &WAITING_FIX_PATTERN,
            Notification::Loading => &LOADING_PATTERN,
            Notification::ReadyToSend => &READY_BURST_PATTERN,
            Notification::Maintenance => &MAINTENANCE_PATTERN,
        }
    }
}
