//! Unit tests for tour

use std::collections::HashMap;

use proptest::prelude::*;
use test_case::test_case;

use crate::conditions::{self, ConditionsInput, Magnitude, Parity, divisible_by};
use crate::maps::{self, KeyLookup, MapEntry, MapsInput, lookup, render};
use crate::runes::{self, RunesInput, examine, format_code_point, hex_bytes, parse_hex};
use crate::utf8::{ManualDecoder, builtin_decoder};
use crate::{Inputs, Lesson, LessonError, Report, Transcript};

// ============================================================================
// Conditions
// ============================================================================

#[test]
fn seven_is_odd() {
    assert_eq!(Parity::of(7), Parity::Odd);
}

#[test]
fn eight_is_divisible_by_four() {
    assert_eq!(divisible_by(8, 4), Ok(true));
}

#[test]
fn nine_has_one_digit() {
    assert_eq!(Magnitude::classify(9), Magnitude::SingleDigit);
}

#[test_case(-1, Magnitude::Negative; "minus one")]
#[test_case(0, Magnitude::SingleDigit; "zero")]
#[test_case(9, Magnitude::SingleDigit; "nine")]
#[test_case(10, Magnitude::MultipleDigits; "ten")]
#[test_case(i64::MIN, Magnitude::Negative; "min")]
fn magnitude_boundaries(n: i64, expected: Magnitude) {
    assert_eq!(Magnitude::classify(n), expected);
}

#[test]
fn divisibility_by_zero_is_an_error() {
    assert_eq!(
        divisible_by(8, 0),
        Err(LessonError::DivisionByZero { dividend: 8 })
    );
}

#[test]
fn divisibility_handles_overflowing_remainder() {
    assert_eq!(divisible_by(i64::MIN, -1), Ok(true));
}

#[test]
fn default_conditions_transcript() {
    let report = conditions::run(&ConditionsInput::default()).unwrap();
    assert_eq!(
        report.transcript().lines(),
        ["7 is odd", "8 is divisible by 4", "9 has 1 digit"]
    );
}

#[test]
fn failed_single_branch_prints_nothing() {
    let input = ConditionsInput {
        dividend: 9,
        ..ConditionsInput::default()
    };
    let report = conditions::run(&input).unwrap();

    assert!(!report.divisible);
    assert_eq!(report.transcript().lines(), ["7 is odd", "9 has 1 digit"]);
}

proptest! {
    /// Property: parity always agrees with n % 2 == 0
    #[test]
    fn prop_parity_matches_remainder(n in any::<i64>()) {
        let expected = if n % 2 == 0 { Parity::Even } else { Parity::Odd };
        prop_assert_eq!(Parity::of(n), expected);
    }

    /// Property: exactly one magnitude branch applies
    #[test]
    fn prop_magnitude_is_exclusive(n in any::<i64>()) {
        let magnitude = Magnitude::classify(n);
        prop_assert_eq!(magnitude == Magnitude::Negative, n < 0);
        prop_assert_eq!(magnitude == Magnitude::SingleDigit, (0..10).contains(&n));
        prop_assert_eq!(magnitude == Magnitude::MultipleDigits, n >= 10);
    }

    /// Property: divisibility agrees with multiplication for nonzero divisors
    #[test]
    fn prop_divisible_multiples(k in -1000i64..1000, d in 1i64..1000) {
        prop_assert_eq!(divisible_by(k * d, d), Ok(true));
    }
}

// ============================================================================
// Maps
// ============================================================================

#[test]
fn default_maps_scenario() {
    let report = maps::run(&MapsInput::default());

    assert_eq!(report.len_before_remove, 2);
    assert_eq!(report.looked_up, 7);
    assert_eq!(report.missing_value, 0);
    assert_eq!(report.len_after_remove, 1);
    assert!(!report.removed_present);
    assert_eq!(report.removed_value, 0);
    assert_eq!(report.literal_len, 2);
}

#[test]
fn missing_key_reports_placeholder_and_absence() {
    let report = maps::run(&MapsInput::default());

    assert_eq!(
        report.missing,
        KeyLookup {
            key: "k3".to_string(),
            value: 0,
            present: false,
        }
    );
    assert_eq!((report.removed_value, report.removed_present), (0, false));
}

#[test]
fn default_maps_transcript() {
    let report = maps::run(&MapsInput::default());
    assert_eq!(
        report.transcript().lines(),
        [
            "map: map[k1:7 k2:13]",
            "v1: 7",
            "v3: 0",
            "len: 2",
            "map: map[k1:7]",
            "prs: false",
            "map: map[bar:2 foo:1]",
        ]
    );
}

#[test]
fn lookup_distinguishes_zero_value_from_absent() {
    let m = HashMap::from([("zero".to_string(), 0)]);

    assert_eq!(lookup(&m, "zero"), (0, true));
    assert_eq!(lookup(&m, "nope"), (0, false));
}

#[test]
fn literal_map_entries_are_retrievable() {
    let report = maps::run(&MapsInput::default());
    let found: Vec<(&str, i64, bool)> = report
        .literal_lookups
        .iter()
        .map(|l| (l.key.as_str(), l.value, l.present))
        .collect();

    assert_eq!(report.literal_len, 2);
    assert_eq!(found, [("foo", 1, true), ("bar", 2, true)]);
}

#[test]
fn render_empty_map() {
    assert_eq!(render(&HashMap::new()), "map[]");
}

#[test]
fn duplicate_insert_overwrites() {
    let input = MapsInput {
        entries: vec![MapEntry::new("k1", 1), MapEntry::new("k1", 2)],
        lookup: "k1".to_string(),
        remove: "absent".to_string(),
        ..MapsInput::default()
    };
    let report = maps::run(&input);

    assert_eq!(report.len_before_remove, 1);
    assert_eq!(report.looked_up, 2, "Last insert should win");
    assert_eq!(report.len_after_remove, 1);
}

proptest! {
    /// Property: rendering is independent of insertion order
    #[test]
    fn prop_render_is_order_independent(
        entries in prop::collection::hash_map("[a-z]{1,4}", any::<i64>(), 0..16),
    ) {
        let mut pairs: Vec<(String, i64)> = entries.into_iter().collect();
        pairs.sort();

        let forward: HashMap<String, i64> = pairs.iter().cloned().collect();
        let reversed: HashMap<String, i64> = pairs.iter().rev().cloned().collect();

        prop_assert_eq!(render(&forward), render(&reversed));
        prop_assert_eq!(forward.len(), pairs.len());
    }
}

// ============================================================================
// Runes
// ============================================================================

#[test]
fn ola_has_four_bytes_and_three_code_points() {
    let report = runes::run(&RunesInput::default());

    assert_eq!(report.byte_len, 4);
    assert_eq!(report.hex, "6f 6c c3 a1");
    assert_eq!(report.code_point_count, 3);
    assert!(report.decoders_agree());
}

#[test]
fn ola_offsets() {
    let report = runes::run(&RunesInput::default());
    let offsets: Vec<(usize, char)> = report
        .manual
        .iter()
        .map(|r| (r.offset, r.code_point))
        .collect();

    assert_eq!(offsets, vec![(0, 'o'), (1, 'l'), (2, 'á')]);
}

#[test]
fn ola_transcript() {
    let report = runes::run(&RunesInput::default());
    assert_eq!(
        report.transcript().lines(),
        [
            "Len: 4",
            "6f 6c c3 a1",
            "Rune count: 3",
            "U+006F 'o' starts at 0",
            "U+006C 'l' starts at 1",
            "U+00E1 'á' starts at 2",
            "",
            "Using manual decoding",
            "U+006F 'o' starts at 0",
            "found o",
            "U+006C 'l' starts at 1",
            "found so l",
            "U+00E1 'á' starts at 2",
        ]
    );
}

#[test]
fn classifier_fires_once_per_occurrence() {
    let report = runes::run(&RunesInput {
        text: "lolo".to_string(),
    });
    let messages: Vec<&str> = report.findings.iter().map(|f| f.message).collect();

    assert_eq!(messages, ["found so l", "found o", "found so l", "found o"]);
}

#[test_case('o', Some("found o"); "o")]
#[test_case('l', Some("found so l"); "l")]
#[test_case('á', None; "accented a")]
#[test_case('O', None; "uppercase o")]
fn examine_matches_letters(c: char, expected: Option<&str>) {
    assert_eq!(examine(c), expected);
}

#[test_case('o', "U+006F 'o'"; "ascii")]
#[test_case('\u{e01}', "U+0E01 'ก'"; "thai")]
#[test_case('\n', "U+000A"; "newline")]
#[test_case('😀', "U+1F600 '😀'"; "emoji")]
#[test_case('\u{200b}', "U+200B"; "zero width space")]
#[test_case('\u{feff}', "U+FEFF"; "byte order mark")]
#[test_case('\u{ad}', "U+00AD"; "soft hyphen")]
#[test_case('\u{e000}', "U+E000"; "private use")]
#[test_case('\u{a0}', "U+00A0"; "no-break space")]
#[test_case(' ', "U+0020 ' '"; "ascii space")]
fn code_point_formatting(c: char, expected: &str) {
    assert_eq!(format_code_point(c), expected);
}

#[test]
fn hex_rendering_and_parsing() {
    assert_eq!(hex_bytes(&[]), "");
    assert_eq!(parse_hex("6f 6c c3 a1").unwrap(), "olá".as_bytes());
    assert_eq!(parse_hex("  ").unwrap(), Vec::<u8>::new());
}

#[test]
fn parse_hex_rejects_bad_tokens() {
    assert_eq!(
        parse_hex("6f zz"),
        Err(LessonError::InvalidHex {
            token: "zz".to_string(),
            position: 1,
        })
    );
    assert_eq!(
        parse_hex("6f6c"),
        Err(LessonError::OddHexLength {
            token: "6f6c".to_string(),
        })
    );
}

#[test]
fn invalid_bytes_decode_to_replacement() {
    let report = runes::run_bytes(&[b'o', 0xC3, b'l']);

    assert_eq!(report.byte_len, 3);
    assert_eq!(report.code_point_count, 3);
    assert!(report.decoders_agree());
    assert_eq!(report.manual[1].code_point, char::REPLACEMENT_CHARACTER);
}

proptest! {
    /// Property: both decoders agree on any valid string
    #[test]
    fn prop_decoders_agree_on_text(s in "\\PC*") {
        let builtin: Vec<_> = builtin_decoder(s.as_bytes()).collect();
        let manual: Vec<_> = ManualDecoder::new(s.as_bytes()).collect();
        let std: Vec<_> = s.char_indices().collect();

        prop_assert_eq!(&builtin, &std);
        prop_assert_eq!(&manual, &std);
    }

    /// Property: both decoders agree on arbitrary bytes
    #[test]
    fn prop_decoders_agree_on_bytes(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let builtin: Vec<_> = builtin_decoder(&bytes).collect();
        let manual: Vec<_> = ManualDecoder::new(&bytes).collect();
        prop_assert_eq!(builtin, manual);
    }

    /// Property: code point count never exceeds byte length
    #[test]
    fn prop_count_bounded_by_bytes(s in "\\PC*") {
        let report = runes::run(&RunesInput { text: s.clone() });
        prop_assert_eq!(report.byte_len, s.len());
        prop_assert_eq!(report.code_point_count, s.chars().count());
        prop_assert!(report.code_point_count <= report.byte_len);
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[test_case("conditions", Lesson::Conditions; "conditions")]
#[test_case("MAPS", Lesson::Maps; "case insensitive")]
#[test_case("runes", Lesson::Runes; "runes")]
fn lesson_from_str(name: &str, expected: Lesson) {
    assert_eq!(name.parse::<Lesson>().unwrap(), expected);
}

#[test]
fn unknown_lesson_is_rejected() {
    assert_eq!(
        "loops".parse::<Lesson>(),
        Err(LessonError::UnknownLesson("loops".to_string()))
    );
}

#[test]
fn every_lesson_runs_with_default_inputs() {
    let inputs = Inputs::default();
    for lesson in Lesson::ALL {
        let report = lesson.run(&inputs).unwrap();
        assert_eq!(report.lesson(), lesson);
        assert!(!report.transcript().is_empty());
    }
}

#[test]
fn report_serializes_with_lesson_tag() {
    let report = Lesson::Conditions.run(&Inputs::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["lesson"], "conditions");
    assert_eq!(json["parity"], "odd");
    assert_eq!(json["magnitude"], "single-digit");
    assert!(matches!(report, Report::Conditions(_)));
}

#[test]
fn transcript_display_joins_lines() {
    let mut transcript = Transcript::new();
    transcript.line("a");
    transcript.blank();
    transcript.line("b");

    assert_eq!(transcript.to_string(), "a\n\nb");
    assert_eq!(transcript.len(), 3);
}
