//! Integration Tests für den NotificationIndicator
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen simulierte
//! Hardware, die jeden Aufruf mit Zeitstempel protokolliert.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use esp_core::{
    IndicatorConfig, IndicatorError, Melody, Note, Notification, NotificationIndicator, Pattern,
    PixelAction, PixelStrip, PixelWrite, ToneOutput, ToneStep, VisualStep,
};
use rgb::RGB8;

const RED: RGB8 = RGB8::new(255, 0, 0);
const GREEN: RGB8 = RGB8::new(0, 255, 0);
const BLUE: RGB8 = RGB8::new(0, 0, 255);
const MAGENTA: RGB8 = RGB8::new(255, 0, 255);
const OFF: RGB8 = RGB8::new(0, 0, 0);

const E6: u32 = 1319;
const F6: u32 = 1397;
const G6: u32 = 1568;

// ============================================================================
// Simulierte Hardware
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Begin,
    Brightness(u8),
    SetPixel(usize, RGB8),
    Clear,
    Show,
    Tone(u32),
    NoTone,
    Delay(u32),
}

#[derive(Default)]
struct Log {
    now_ms: u32,
    events: Vec<(u32, Event)>,
}

/// Gemeinsames Protokoll für Strip, Lautsprecher und Delay
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Log>>);

impl Recorder {
    fn record(&self, event: Event) {
        let mut log = self.0.borrow_mut();
        let now = log.now_ms;
        log.events.push((now, event));
    }

    fn advance(&self, ms: u32) {
        self.0.borrow_mut().now_ms += ms;
    }

    fn now_ms(&self) -> u32 {
        self.0.borrow().now_ms
    }

    fn events(&self) -> Vec<Event> {
        self.0.borrow().events.iter().map(|&(_, e)| e).collect()
    }

    fn timed_events(&self) -> Vec<(u32, Event)> {
        self.0.borrow().events.clone()
    }

    fn reset(&self) {
        let mut log = self.0.borrow_mut();
        log.now_ms = 0;
        log.events.clear();
    }
}

struct MockStrip {
    recorder: Recorder,
    pixels: Vec<RGB8>,
    brightness: Option<u8>,
    fail_next_show: bool,
}

impl PixelStrip for MockStrip {
    fn begin(&mut self) -> Result<(), IndicatorError> {
        self.recorder.record(Event::Begin);
        Ok(())
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.recorder.record(Event::Brightness(brightness));
        self.brightness = Some(brightness);
    }

    // Kein Bounds-Check: wächst bei Bedarf
    fn set_pixel(&mut self, index: usize, color: RGB8) -> Result<(), IndicatorError> {
        self.recorder.record(Event::SetPixel(index, color));
        if index >= self.pixels.len() {
            self.pixels.resize(index + 1, OFF);
        }
        self.pixels[index] = color;
        Ok(())
    }

    fn clear(&mut self) {
        self.recorder.record(Event::Clear);
        self.pixels.iter_mut().for_each(|p| *p = OFF);
    }

    fn show(&mut self) -> Result<(), IndicatorError> {
        if self.fail_next_show {
            self.fail_next_show = false;
            return Err(IndicatorError::WriteFailed);
        }
        self.recorder.record(Event::Show);
        Ok(())
    }
}

struct MockSpeaker {
    recorder: Recorder,
    fail_next_tone: bool,
}

impl ToneOutput for MockSpeaker {
    fn tone(&mut self, frequency_hz: u32) -> Result<(), IndicatorError> {
        if self.fail_next_tone {
            self.fail_next_tone = false;
            return Err(IndicatorError::ToneFailed);
        }
        self.recorder.record(Event::Tone(frequency_hz));
        Ok(())
    }

    fn no_tone(&mut self) -> Result<(), IndicatorError> {
        self.recorder.record(Event::NoTone);
        Ok(())
    }
}

struct MockDelay {
    recorder: Recorder,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.recorder.advance(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.recorder.record(Event::Delay(ms));
        self.recorder.advance(ms);
    }
}

type TestIndicator = NotificationIndicator<MockStrip, MockSpeaker, MockDelay>;

fn setup(pixel_count: usize) -> (TestIndicator, Recorder) {
    let recorder = Recorder::default();
    let config = IndicatorConfig::new(8, pixel_count, 50, 10);
    let strip = MockStrip {
        recorder: recorder.clone(),
        pixels: vec![OFF; pixel_count],
        brightness: None,
        fail_next_show: false,
    };
    let speaker = MockSpeaker {
        recorder: recorder.clone(),
        fail_next_tone: false,
    };
    let delay = MockDelay {
        recorder: recorder.clone(),
    };
    (
        NotificationIndicator::new(config, strip, speaker, delay),
        recorder,
    )
}

fn tone_events(frequency_hz: u32, duration_ms: u32) -> [Event; 3] {
    [
        Event::Tone(frequency_hz),
        Event::Delay(duration_ms),
        Event::NoTone,
    ]
}

fn breath_events(color: RGB8) -> Vec<Event> {
    vec![
        Event::SetPixel(0, color),
        Event::SetPixel(1, OFF),
        Event::Show,
        Event::Delay(240),
        Event::SetPixel(0, OFF),
        Event::SetPixel(1, color),
        Event::Show,
        Event::Delay(240),
    ]
}

// ============================================================================
// Tests: Initialisierung, clear, set_pixel
// ============================================================================

#[test]
fn test_initialize_begins_and_applies_brightness() {
    let (mut indicator, recorder) = setup(2);
    indicator.initialize().unwrap();

    assert_eq!(recorder.events(), vec![Event::Begin, Event::Brightness(50)]);
    let (strip, _, _) = indicator.release();
    assert_eq!(strip.brightness, Some(50));
}

#[test]
fn test_config_is_kept() {
    let (indicator, _) = setup(3);
    assert_eq!(*indicator.config(), IndicatorConfig::new(8, 3, 50, 10));
}

#[test]
fn test_clear_all_single_flush_no_color_writes() {
    let (mut indicator, recorder) = setup(2);
    indicator.clear_all().unwrap();

    assert_eq!(recorder.events(), vec![Event::Clear, Event::Show]);
}

#[test]
fn test_set_pixel_writes_once_and_flushes() {
    // Pixel-Anzahl ist absichtlich kleiner als der Index
    let (mut indicator, recorder) = setup(2);
    indicator.set_pixel(2, 10, 20, 30).unwrap();

    assert_eq!(
        recorder.events(),
        vec![Event::SetPixel(2, RGB8::new(10, 20, 30)), Event::Show]
    );
    assert_eq!(recorder.now_ms(), 0);
}

// ============================================================================
// Tests: Töne
// ============================================================================

#[test]
fn test_intro_tone_sequence_and_timing() {
    let (mut indicator, recorder) = setup(2);
    indicator.intro_tone().unwrap();

    assert_eq!(
        recorder.timed_events(),
        vec![
            (0, Event::Tone(E6)),
            (0, Event::Delay(120)),
            (120, Event::NoTone),
            (120, Event::Tone(F6)),
            (120, Event::Delay(120)),
            (240, Event::NoTone),
            (240, Event::Tone(G6)),
            (240, Event::Delay(320)),
            (560, Event::NoTone),
        ]
    );
}

#[test]
fn test_maintenance_tone_sequence() {
    let (mut indicator, recorder) = setup(2);
    indicator.maintenance_tone().unwrap();

    let mut expected = Vec::new();
    expected.extend(tone_events(E6, 120));
    expected.push(Event::Delay(80));
    expected.extend(tone_events(E6, 120));
    expected.push(Event::Delay(80));
    expected.extend(tone_events(F6, 120));
    expected.push(Event::Delay(80));
    expected.extend(tone_events(G6, 280));
    expected.extend(tone_events(E6, 120));
    expected.extend(tone_events(F6, 120));
    expected.extend(tone_events(G6, 320));

    assert_eq!(recorder.events(), expected);
    assert_eq!(recorder.now_ms(), 1440);
}

#[test]
fn test_tones_do_not_touch_strip() {
    let (mut indicator, recorder) = setup(2);
    indicator.intro_tone().unwrap();
    indicator.maintenance_tone().unwrap();

    assert!(recorder.events().iter().all(|e| matches!(
        e,
        Event::Tone(_) | Event::NoTone | Event::Delay(_)
    )));
}

#[test]
fn test_tone_failure_aborts_melody() {
    let (indicator, recorder) = setup(2);
    let (strip, mut speaker, delay) = indicator.release();
    speaker.fail_next_tone = true;
    let config = IndicatorConfig::new(8, 2, 50, 10);
    let mut indicator = NotificationIndicator::new(config, strip, speaker, delay);

    assert_eq!(indicator.intro_tone(), Err(IndicatorError::ToneFailed));
    assert!(recorder.events().is_empty());
    assert_eq!(recorder.now_ms(), 0);
}

// ============================================================================
// Tests: Blink-Muster
// ============================================================================

#[test]
fn test_not_ready_blink_one_cycle() {
    let (mut indicator, recorder) = setup(2);
    indicator.not_ready_blink().unwrap();

    assert_eq!(recorder.events(), breath_events(RED));
    assert_eq!(recorder.now_ms(), 480);

    let (strip, _, _) = indicator.release();
    assert_eq!(strip.pixels[0], OFF);
    assert_eq!(strip.pixels[1], RED);
}

#[test]
fn test_waiting_fix_blink_is_blue() {
    let (mut indicator, recorder) = setup(2);
    indicator.waiting_fix_blink().unwrap();

    assert_eq!(recorder.events(), breath_events(BLUE));
    assert_eq!(recorder.now_ms(), 480);
}

#[test]
fn test_loading_blink_is_magenta() {
    let (mut indicator, recorder) = setup(2);
    indicator.loading_blink().unwrap();

    assert_eq!(recorder.events(), breath_events(MAGENTA));
    assert_eq!(recorder.now_ms(), 480);
}

#[test]
fn test_blink_timing_second_flush_at_240ms() {
    let (mut indicator, recorder) = setup(2);
    indicator.not_ready_blink().unwrap();

    let shows: Vec<u32> = recorder
        .timed_events()
        .into_iter()
        .filter(|&(_, e)| e == Event::Show)
        .map(|(t, _)| t)
        .collect();
    assert_eq!(shows, vec![0, 240]);
}

#[test]
fn test_repeated_blink_calls_accumulate() {
    let (mut indicator, recorder) = setup(2);
    for _ in 0..3 {
        indicator.loading_blink().unwrap();
    }
    assert_eq!(recorder.now_ms(), 3 * 480);
}

#[test]
fn test_maintenance_blink_one_cycle() {
    let (mut indicator, recorder) = setup(2);
    indicator.maintenance_blink().unwrap();

    assert_eq!(
        recorder.events(),
        vec![
            Event::SetPixel(0, MAGENTA),
            Event::SetPixel(1, MAGENTA),
            Event::Show,
            Event::Delay(240),
            Event::Clear,
            Event::Show,
            Event::Delay(240),
        ]
    );
    assert_eq!(recorder.now_ms(), 480);
}

#[test]
fn test_ready_burst_four_toggles_then_pause() {
    let (mut indicator, recorder) = setup(2);
    indicator.ready_burst().unwrap();

    let mut expected = Vec::new();
    for _ in 0..4 {
        expected.extend([
            Event::SetPixel(0, GREEN),
            Event::SetPixel(1, GREEN),
            Event::Show,
            Event::Delay(40),
            Event::Clear,
            Event::Show,
            Event::Delay(40),
        ]);
    }
    expected.push(Event::Delay(1200));

    assert_eq!(recorder.events(), expected);
    assert_eq!(recorder.now_ms(), 1520);

    let (strip, _, _) = indicator.release();
    assert!(strip.pixels.iter().all(|&p| p == OFF));
}

#[test]
fn test_blinks_do_not_touch_speaker() {
    let (mut indicator, recorder) = setup(2);
    for notification in Notification::ALL {
        indicator.notify(notification).unwrap();
    }
    assert!(
        !recorder
            .events()
            .iter()
            .any(|e| matches!(e, Event::Tone(_) | Event::NoTone))
    );
}

#[test]
fn test_notify_matches_named_methods() {
    type Op = fn(&mut TestIndicator) -> Result<(), IndicatorError>;
    let cases: [(Notification, Op); 5] = [
        (Notification::NotReady, TestIndicator::not_ready_blink),
        (Notification::WaitingFix, TestIndicator::waiting_fix_blink),
        (Notification::Loading, TestIndicator::loading_blink),
        (Notification::ReadyToSend, TestIndicator::ready_burst),
        (Notification::Maintenance, TestIndicator::maintenance_blink),
    ];

    for (notification, method) in cases {
        let (mut indicator, recorder) = setup(2);
        indicator.notify(notification).unwrap();
        let via_notify = recorder.timed_events();

        recorder.reset();
        method(&mut indicator).unwrap();
        assert_eq!(recorder.timed_events(), via_notify, "{}", notification.name());
    }
}

#[test]
fn test_play_melody_custom_table() {
    static STEPS: [ToneStep; 2] = [ToneStep::rest(30), ToneStep::play(Note::F6, 70)];
    static CHIRP: Melody = Melody {
        name: "chirp",
        steps: &STEPS,
    };

    let (mut indicator, recorder) = setup(2);
    indicator.play_melody(&CHIRP).unwrap();

    assert_eq!(
        recorder.timed_events(),
        vec![
            (0, Event::Delay(30)),
            (30, Event::Tone(F6)),
            (30, Event::Delay(70)),
            (100, Event::NoTone),
        ]
    );
}

#[test]
fn test_play_pattern_custom_table() {
    static WRITES: [PixelWrite; 1] = [PixelWrite::new(1, GREEN)];
    static STEPS: [VisualStep; 3] = [
        VisualStep {
            action: PixelAction::Paint(&WRITES),
            hold_ms: 10,
        },
        VisualStep {
            action: PixelAction::Hold,
            hold_ms: 20,
        },
        VisualStep {
            action: PixelAction::Clear,
            hold_ms: 5,
        },
    ];
    static FLICKER: Pattern = Pattern {
        name: "flicker",
        steps: &STEPS,
    };

    let (mut indicator, recorder) = setup(2);
    indicator.play_pattern(&FLICKER).unwrap();

    assert_eq!(
        recorder.events(),
        vec![
            Event::SetPixel(1, GREEN),
            Event::Show,
            Event::Delay(10),
            Event::Delay(20),
            Event::Clear,
            Event::Show,
            Event::Delay(5),
        ]
    );
    assert_eq!(recorder.now_ms(), FLICKER.duration_ms());
}

#[test]
fn test_show_failure_aborts_pattern() {
    let (indicator, recorder) = setup(2);
    let (mut strip, speaker, delay) = indicator.release();
    strip.fail_next_show = true;
    let config = IndicatorConfig::new(8, 2, 50, 10);
    let mut indicator = NotificationIndicator::new(config, strip, speaker, delay);

    assert_eq!(indicator.not_ready_blink(), Err(IndicatorError::WriteFailed));
    // Pixel geschrieben, aber weder Flush noch Wartezeit
    assert_eq!(
        recorder.events(),
        vec![Event::SetPixel(0, RED), Event::SetPixel(1, OFF)]
    );
    assert_eq!(recorder.now_ms(), 0);

    // Nächster Aufruf läuft wieder normal
    recorder.reset();
    indicator.not_ready_blink().unwrap();
    assert_eq!(recorder.events(), breath_events(RED));
}
