//! Pure Business Logic Functions
//!
//! Helligkeits-Skalierung und die generischen Abspieler für
//! Melodien und Blink-Muster. Hardware nur über Traits (testbar!)

use embedded_hal::delay::DelayNs;
use rgb::RGB8;

use crate::traits::{IndicatorError, PixelStrip, ToneOutput};
use crate::types::{Melody, Pattern, PixelAction, ToneStep};

/// Skaliert eine Farbe mit der globalen Helligkeit (0-255)
///
/// 255 lässt die Farbe unverändert, 0 schaltet sie aus.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::scale_brightness;
/// let color = RGB8::new(255, 128, 0);
/// assert_eq!(scale_brightness(color, 127), RGB8::new(127, 64, 0));
/// assert_eq!(scale_brightness(color, 255), color);
/// ```
pub fn scale_brightness(color: RGB8, brightness: u8) -> RGB8 {
    let scale = brightness as u16 + 1;
    let channel = |c: u8| ((c as u16 * scale) >> 8) as u8;
    RGB8 {
        r: channel(color.r),
        g: channel(color.g),
        b: channel(color.b),
    }
}

/// Parst eine Dezimalzahl ohne Vorzeichen, auch zur Compile-Zeit
///
/// `None` bei leerem Text, Nicht-Ziffern oder Überlauf von `u32`.
///
/// # Beispiele
///
/// ```
/// # use esp_core::parse_decimal;
/// assert_eq!(parse_decimal("50"), Some(50));
/// assert_eq!(parse_decimal("5O"), None);
/// ```
pub const fn parse_decimal(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.is_empty() {
        return None;
    }

    let mut result: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            return None;
        }
        let digit = (bytes[i] - b'0') as u32;
        result = match result.checked_mul(10) {
            Some(shifted) => match shifted.checked_add(digit) {
                Some(sum) => sum,
                None => return None,
            },
            None => return None,
        };
        i += 1;
    }
    Some(result)
}

/// Spielt eine Melodie blockierend ab
///
/// Jeder Ton: `tone`, warten, `no_tone`. Pausen warten nur.
/// Bricht beim ersten Treiber-Fehler ab.
pub fn play_melody<T, D>(
    speaker: &mut T,
    delay: &mut D,
    melody: &Melody,
) -> Result<(), IndicatorError>
where
    T: ToneOutput,
    D: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::debug!("Melody: {}", melody.name);

    for step in melody.steps {
        match *step {
            ToneStep::Play {
                frequency_hz,
                duration_ms,
            } => {
                speaker.tone(frequency_hz)?;
                delay.delay_ms(duration_ms);
                speaker.no_tone()?;
            }
            ToneStep::Rest { duration_ms } => delay.delay_ms(duration_ms),
        }
    }
    Ok(())
}

/// Spielt einen Durchlauf eines Blink-Musters blockierend ab
///
/// Jeder Schritt schreibt (falls nötig) den Buffer, ruft genau einmal
/// `show` auf und wartet dann `hold_ms`.
pub fn play_pattern<S, D>(
    strip: &mut S,
    delay: &mut D,
    pattern: &Pattern,
) -> Result<(), IndicatorError>
where
    S: PixelStrip,
    D: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::trace!("Pattern: {}", pattern.name);

    for step in pattern.steps {
        match step.action {
            PixelAction::Paint(writes) => {
                for write in writes {
                    strip.set_pixel(write.index, write.color)?;
                }
                strip.show()?;
            }
            PixelAction::Clear => {
                strip.clear();
                strip.show()?;
            }
            PixelAction::Hold => {}
        }
        delay.delay_ms(step.hold_ms);
    }
    Ok(())
}
