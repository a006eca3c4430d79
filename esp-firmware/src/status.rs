// Status-Schleife - spielt den Demo-Ablauf endlos ab
use defmt::{error, info};
use embedded_hal::delay::DelayNs;
use esp_core::{IndicatorError, Notification, NotificationIndicator, PixelStrip, ToneOutput};

use crate::config::DEMO_SCHEDULE;

/// Startsequenz: Strip initialisieren, löschen, Intro-Ton
///
/// Fehler werden geloggt, aber nicht weitergegeben.
pub fn startup<S, T, D>(indicator: &mut NotificationIndicator<S, T, D>)
where
    S: PixelStrip,
    T: ToneOutput,
    D: DelayNs,
{
    report("initialize", indicator.initialize());
    report("clear", indicator.clear_all());
    report("intro tone", indicator.intro_tone());
}

/// Status Logic - spielt DEMO_SCHEDULE in einer Endlosschleife
///
/// Jeder Eintrag wiederholt das Muster seines Zustands. Vor der
/// Wartung läuft zusätzlich die Wartungs-Melodie.
pub fn status_loop_logic<S, T, D>(indicator: &mut NotificationIndicator<S, T, D>) -> !
where
    S: PixelStrip,
    T: ToneOutput,
    D: DelayNs,
{
    loop {
        for (notification, cycles) in DEMO_SCHEDULE {
            info!("Zustand: {} ({} Durchläufe)", notification, cycles);

            if notification == Notification::Maintenance {
                report("maintenance tone", indicator.maintenance_tone());
            }

            for _ in 0..cycles {
                report(notification.name(), indicator.notify(notification));
            }
        }
    }
}

fn report(operation: &str, result: Result<(), IndicatorError>) {
    if let Err(e) = result {
        error!("{} fehlgeschlagen: {}", operation, e);
    }
}
