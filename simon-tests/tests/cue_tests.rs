//! Integration Tests für die Licht/Ton-Animationen
//!
//! Geprüft werden Reihenfolge und (virtuelle) Dauer der Hardware-Aufrufe.

mod common;

use common::{HwEvent, MockHardware};
use embassy_futures::block_on;
use simon_core::{CueEffects, ToneSynthesizer, TWINKLE_STAR};

fn cues() -> CueEffects {
    CueEffects::new(4, ToneSynthesizer::new(120))
}

fn all(on: bool) -> Vec<HwEvent> {
    (0..4)
        .map(|channel| HwEvent::Indicator { channel, on })
        .collect()
}

#[test]
fn test_ready_pulse() {
    let mut hw = MockHardware::new();
    block_on(cues().ready_pulse(&mut hw)).unwrap();

    let mut expected = all(true);
    expected.push(HwEvent::Wait(1000));
    expected.extend(all(false));

    assert_eq!(hw.events, expected);
    assert_eq!(hw.now_ms, 1000);
}

#[test]
fn test_intro_arpeggio_order() {
    let mut hw = MockHardware::new();
    block_on(cues().intro_arpeggio(&mut hw)).unwrap();

    let notes = [261, 330, 392, 494];
    let mut expected = Vec::new();
    for (channel, frequency_hz) in notes.into_iter().enumerate() {
        expected.push(HwEvent::Indicator { channel, on: true });
        expected.push(HwEvent::Tone {
            frequency_hz,
            duration_ms: 250,
        });
        expected.push(HwEvent::Wait(250));
        expected.push(HwEvent::Indicator { channel, on: false });
        expected.push(HwEvent::Wait(200));
    }

    assert_eq!(hw.events, expected);
    assert_eq!(hw.now_ms, 4 * (250 + 200));
}

#[test]
fn test_intro_arpeggio_uses_first_four_channels_only() {
    let mut hw = MockHardware::new();
    block_on(CueEffects::new(8, ToneSynthesizer::new(120)).intro_arpeggio(&mut hw)).unwrap();

    let on_channels: Vec<_> = hw
        .events
        .iter()
        .filter_map(|e| match *e {
            HwEvent::Indicator { channel, on: true } => Some(channel),
            _ => None,
        })
        .collect();
    assert_eq!(on_channels, vec![0, 1, 2, 3]);
}

#[test]
fn test_success_melody() {
    let mut hw = MockHardware::new();
    block_on(cues().success_melody(&mut hw, &TWINKLE_STAR)).unwrap();

    assert_eq!(hw.tones().len(), 42);
    let expected_tones: Vec<_> = TWINKLE_STAR
        .iter()
        .map(|(note, beats)| (note.frequency_hz(), beats.of_beat_ms(500)))
        .collect();
    assert_eq!(hw.tones(), expected_tones);

    // Erster Schritt: alle an, Ton, warten, alle aus
    let mut first = all(true);
    first.push(HwEvent::Tone {
        frequency_hz: 261,
        duration_ms: 500,
    });
    first.push(HwEvent::Wait(500));
    first.extend(all(false));
    assert_eq!(&hw.events[..first.len()], &first[..]);

    // 36 Viertel + 6 Halbe, keine Extra-Pausen
    assert_eq!(hw.now_ms, 36 * 500 + 6 * 1000);
}

#[test]
fn test_failure_blink() {
    let mut hw = MockHardware::new();
    block_on(cues().failure_blink(&mut hw, 3)).unwrap();

    let mut cycle = all(true);
    cycle.push(HwEvent::Wait(500));
    cycle.extend(all(false));
    cycle.push(HwEvent::Wait(500));
    let expected: Vec<_> = cycle.iter().copied().cycle().take(cycle.len() * 3).collect();

    assert_eq!(hw.events, expected);
    assert_eq!(hw.now_ms, 3000);
    assert!(hw.tones().is_empty());
}

#[test]
fn test_failure_blink_zero_times() {
    let mut hw = MockHardware::new();
    block_on(cues().failure_blink(&mut hw, 0)).unwrap();
    assert!(hw.events.is_empty());
}
