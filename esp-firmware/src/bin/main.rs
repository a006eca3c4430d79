// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_hal bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

use defmt::info;

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use esp_hal_smartled::smart_led_buffer;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_statusanzeige::config::{INDICATOR_CONFIG, MAX_LED_COUNT, RMT_CLOCK_MHZ};
use esp_statusanzeige::hal::{LedcSpeaker, RmtPixelStrip};
use esp_statusanzeige::status::{startup, status_loop_logic};
use esp_statusanzeige::{NotificationIndicator, StatusIndicator};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, baut den Indikator und spielt danach
/// blockierend den Demo-Ablauf ab.
#[esp_hal::main]
fn main() -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("Statusanzeige startet: {}", INDICATOR_CONFIG);

    // Buffer für SmartLED Daten erstellen
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(MAX_LED_COUNT);

    // Hardware initialisieren: Fehler hier sind fatal (Panic → Backtrace)
    let strip = RmtPixelStrip::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        &mut rmt_buffer,
        INDICATOR_CONFIG.pixel_count,
    )
    .expect("Failed to initialize LED strip");
    let speaker = LedcSpeaker::new(peripherals.LEDC, peripherals.GPIO5.into());

    let mut indicator: StatusIndicator<'_> =
        NotificationIndicator::new(INDICATOR_CONFIG, strip, speaker, Delay::new());

    startup(&mut indicator);
    status_loop_logic(&mut indicator)
}
