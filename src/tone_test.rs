use std::collections::BTreeSet;

use super::*;

#[test]
fn light_table_covers_every_sampled_tone() {
    let expected = [
        (10, 950),
        (20, 900),
        (30, 800),
        (40, 700),
        (50, 600),
        (60, 500),
        (70, 400),
        (80, 300),
        (90, 200),
        (95, 100),
        (98, 50),
    ];
    for (tone, step) in expected {
        assert_eq!(Theme::Light.step(tone), step, "light tone {tone}");
    }
    assert_eq!(Theme::Light.step(0), 950);
    assert_eq!(Theme::Light.step(100), 50);
}

#[test]
fn dark_table_covers_every_sampled_tone() {
    let expected = [
        (98, 950),
        (95, 900),
        (90, 800),
        (80, 700),
        (70, 600),
        (60, 500),
        (50, 400),
        (40, 300),
        (30, 200),
        (20, 100),
        (10, 50),
    ];
    for (tone, step) in expected {
        assert_eq!(Theme::Dark.step(tone), step, "dark tone {tone}");
    }
    assert_eq!(Theme::Dark.step(100), 950);
    assert_eq!(Theme::Dark.step(0), 50);
}

#[test]
fn both_themes_emit_the_same_step_label_set() {
    let light: BTreeSet<u16> = MATERIAL_TONES.iter().map(|&t| Theme::Light.step(t)).collect();
    let dark: BTreeSet<u16> = MATERIAL_TONES.iter().map(|&t| Theme::Dark.step(t)).collect();
    assert_eq!(light, dark);
    assert_eq!(light.len(), MATERIAL_TONES.len());
}

#[test]
fn unmapped_tones_fall_through_as_their_own_label() {
    for tone in [5, 33, 97, 99] {
        assert_eq!(Theme::Light.step(tone), u16::from(tone));
        assert_eq!(Theme::Dark.step(tone), u16::from(tone));
    }
}

#[test]
fn sample_order_is_ascending_for_light_and_reversed_for_dark() {
    assert_eq!(Theme::Light.sample_tones(), MATERIAL_TONES.to_vec());
    let mut reversed = MATERIAL_TONES.to_vec();
    reversed.reverse();
    assert_eq!(Theme::Dark.sample_tones(), reversed);
}

#[test]
fn sample_order_is_stable_across_repeated_calls() {
    // Guards the shared-buffer reversal hazard: asking twice must not
    // flip the order back.
    assert_eq!(Theme::Dark.sample_tones(), Theme::Dark.sample_tones());
    assert_eq!(Theme::Light.sample_tones(), Theme::Light.sample_tones());
}

#[test]
fn sample_order_copies_are_independent() {
    let mut first = Theme::Dark.sample_tones();
    first.reverse();
    first.push(7);
    assert_ne!(first, Theme::Dark.sample_tones());
    let mut reversed = MATERIAL_TONES.to_vec();
    reversed.reverse();
    assert_eq!(Theme::Dark.sample_tones(), reversed);
}
