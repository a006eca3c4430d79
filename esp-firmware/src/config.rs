// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use esp_core::{IndicatorConfig, Notification, parse_decimal};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für den LED-Strip (WS2812/Neopixel)
pub const LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die LEDs (0-255)
/// Default ca. 1/5, überschreibbar per LED_BRIGHTNESS in .env
pub const LED_BRIGHTNESS: u8 = {
    let value = parse_env_number(option_env!("LED_BRIGHTNESS"), 50);
    assert!(value <= 255, "LED_BRIGHTNESS muss zwischen 0 und 255 liegen");
    value as u8
};

/// Anzahl der LEDs im Strip, überschreibbar per LED_COUNT in .env
/// Die Muster nutzen Pixel 0 und 1
pub const LED_COUNT: usize = {
    let value = parse_env_number(option_env!("LED_COUNT"), 2) as usize;
    assert!(value >= 2, "LED_COUNT muss mindestens 2 sein");
    assert!(value <= MAX_LED_COUNT, "LED_COUNT größer als MAX_LED_COUNT");
    value
};

/// Kapazität des Pixel- und RMT-Buffers
pub const MAX_LED_COUNT: usize = 8;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Lautsprecher Konfiguration
// ============================================================================

/// GPIO-Pin für den Piezo-Lautsprecher
pub const SPEAKER_GPIO_PIN: u8 = 5;

/// Tastverhältnis des Rechtecksignals in Prozent
pub const SPEAKER_DUTY_PCT: u8 = 50;

// ============================================================================
// Indikator
// ============================================================================

pub const INDICATOR_CONFIG: IndicatorConfig =
    IndicatorConfig::new(LED_GPIO_PIN, LED_COUNT, LED_BRIGHTNESS, SPEAKER_GPIO_PIN);

/// Demo-Ablauf: Zustand und Anzahl Durchläufe
/// Ein Durchlauf dauert 480 ms (Ready-Burst: 1520 ms)
pub const DEMO_SCHEDULE: [(Notification, u32); 5] = [
    (Notification::NotReady, 10),
    (Notification::WaitingFix, 10),
    (Notification::Loading, 10),
    (Notification::ReadyToSend, 4),
    (Notification::Maintenance, 10),
];

// ============================================================================
// Helper
// ============================================================================

/// Wert aus .env zur Compile-Zeit, `default` wenn die Variable fehlt
///
/// Ein gesetzter, aber ungültiger Wert bricht den Build ab.
const fn parse_env_number(value: Option<&str>, default: u32) -> u32 {
    let Some(value) = value else {
        return default;
    };
    match parse_decimal(value) {
        Some(number) => number,
        None => panic!("LED_BRIGHTNESS/LED_COUNT in .env ist keine gültige Dezimalzahl (u32)"),
    }
}
