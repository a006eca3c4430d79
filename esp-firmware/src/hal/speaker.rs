// Piezo-Lautsprecher über das LEDC (PWM) Peripheral
//
// tone() konfiguriert Timer0 auf die Tonfrequenz und Channel0 mit
// SPEAKER_DUTY_PCT. Die PWM läuft in Hardware weiter, bis no_tone()
// das Tastverhältnis auf 0 setzt.

use esp_core::{IndicatorError, ToneOutput};
use esp_hal::gpio::{AnyPin, DriveMode};
use esp_hal::ledc::channel::{self, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::peripherals::LEDC;
use esp_hal::time::Rate;

use crate::config::SPEAKER_DUTY_PCT;

/// Real Hardware Lautsprecher
///
/// Hält Peripheral und Pin und erzeugt LEDC Timer/Channel pro Aufruf
/// neu, damit die Frequenz frei wählbar bleibt.
pub struct LedcSpeaker<'a> {
    ledc: LEDC<'a>,
    pin: AnyPin<'a>,
    frequency_hz: u32,
}

impl<'a> LedcSpeaker<'a> {
    /// Erstellt einen neuen LedcSpeaker
    ///
    /// # Parameter
    /// - `ledc`: LEDC Peripheral
    /// - `pin`: Ausgangs-Pin zum Piezo
    pub fn new(ledc: LEDC<'a>, pin: AnyPin<'a>) -> Self {
        Self {
            ledc,
            pin,
            frequency_hz: 0,
        }
    }

    /// Konfiguriert Timer0 auf `frequency_hz` und Channel0 mit `duty_pct`
    fn configure(&mut self, frequency_hz: u32, duty_pct: u8) -> Result<(), IndicatorError> {
        let mut ledc = Ledc::new(self.ledc.reborrow());
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        let mut timer = ledc.timer::<LowSpeed>(timer::Number::Timer0);
        timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(frequency_hz),
            })
            .map_err(|_| IndicatorError::ToneFailed)?;

        let mut channel = ledc.channel(channel::Number::Channel0, self.pin.reborrow());
        channel
            .configure(channel::config::Config {
                timer: &timer,
                duty_pct,
                drive_mode: DriveMode::PushPull,
            })
            .map_err(|_| IndicatorError::ToneFailed)
    }
}

impl ToneOutput for LedcSpeaker<'_> {
    fn tone(&mut self, frequency_hz: u32) -> Result<(), IndicatorError> {
        if frequency_hz == 0 {
            return self.no_tone();
        }
        self.configure(frequency_hz, SPEAKER_DUTY_PCT)?;
        self.frequency_hz = frequency_hz;
        Ok(())
    }

    fn no_tone(&mut self) -> Result<(), IndicatorError> {
        if self.frequency_hz == 0 {
            return Ok(());
        }
        // Frequenz beibehalten, nur Ausgang stumm schalten
        self.configure(self.frequency_hz, 0)?;
        self.frequency_hz = 0;
        Ok(())
    }
}
