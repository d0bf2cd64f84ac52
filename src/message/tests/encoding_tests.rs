//! Tests for encoding classification and part counting.

use rstest::rstest;
use serde_json::json;

use crate::message::domain::{
    EmptyMessagePolicy, Encoding, EncodingResult, classify, classify_with_policy,
    weighted_length,
};

fn gsm_text(length: usize) -> String {
    "a".repeat(length)
}

fn ucs2_text(length: usize) -> String {
    let mut text = String::from("😀");
    text.push_str(&"a".repeat(length.saturating_sub(1)));
    text
}

#[rstest]
fn empty_message_is_one_gsm_part() {
    assert_eq!(
        classify(""),
        EncodingResult {
            count: 0,
            encoding: Encoding::Gsm7Bit,
            parts: 1,
        }
    );
}

#[rstest]
fn empty_message_is_zero_parts_under_billing_policy() {
    let result = classify_with_policy("", EmptyMessagePolicy::ZeroParts);

    assert_eq!(result.count, 0);
    assert_eq!(result.encoding, Encoding::Gsm7Bit);
    assert_eq!(result.parts, 0);
}

#[rstest]
fn zero_parts_policy_only_affects_empty_messages() {
    let result = classify_with_policy("Hi", EmptyMessagePolicy::ZeroParts);

    assert_eq!(result.parts, 1);
}

#[rstest]
fn plain_ascii_over_one_part_needs_two() {
    let result = classify(&gsm_text(165));

    assert_eq!(result.encoding, Encoding::Gsm7Bit);
    assert_eq!(result.count, 165);
    assert_eq!(result.parts, 2);
}

#[rstest]
#[case(1, 1)]
#[case(160, 1)]
#[case(161, 2)]
#[case(306, 2)]
#[case(307, 3)]
#[case(459, 3)]
#[case(460, 4)]
#[case(612, 4)]
#[case(613, 5)]
fn gsm_part_breakpoints(#[case] length: usize, #[case] expected_parts: usize) {
    let result = classify(&gsm_text(length));

    assert_eq!(result.encoding, Encoding::Gsm7Bit);
    assert_eq!(result.parts, expected_parts);
}

#[rstest]
#[case(1, 1)]
#[case(70, 1)]
#[case(71, 2)]
#[case(134, 2)]
#[case(135, 3)]
#[case(201, 3)]
#[case(202, 4)]
fn ucs2_part_breakpoints(#[case] length: usize, #[case] expected_parts: usize) {
    let result = classify(&ucs2_text(length));

    assert_eq!(result.encoding, Encoding::Ucs2);
    assert_eq!(result.count, length);
    assert_eq!(result.parts, expected_parts);
}

#[rstest]
fn gsm_parts_beyond_one_match_per_part_payload() {
    for length in 161..2_000_usize {
        assert_eq!(
            Encoding::Gsm7Bit.parts_for(length),
            length.div_ceil(153),
            "length {length}"
        );
    }
}

#[rstest]
fn ucs2_parts_beyond_one_match_per_part_payload() {
    for length in 71..2_000_usize {
        assert_eq!(
            Encoding::Ucs2.parts_for(length),
            length.div_ceil(67),
            "length {length}"
        );
    }
}

#[rstest]
fn part_count_never_decreases_as_text_grows() {
    for encoding in [Encoding::Gsm7Bit, Encoding::Ucs2] {
        for length in 0..1_000_usize {
            assert!(encoding.parts_for(length) <= encoding.parts_for(length + 1));
        }
    }
}

#[rstest]
fn extended_characters_weigh_two() {
    let result = classify("{}");

    assert_eq!(result.encoding, Encoding::Gsm7Bit);
    assert_eq!(result.count, 4);
}

#[rstest]
fn form_feed_stays_gsm_and_counts_once() {
    let result = classify("Page\u{c}break");

    assert_eq!(result.encoding, Encoding::Gsm7Bit);
    assert_eq!(result.count, 10);
}

#[rstest]
fn extended_characters_can_push_into_a_second_part() {
    assert_eq!(classify(&"€".repeat(80)).parts, 1);

    let result = classify(&"€".repeat(81));
    assert_eq!(result.count, 162);
    assert_eq!(result.parts, 2);
}

#[rstest]
fn one_non_gsm_character_switches_the_whole_message() {
    let result = classify("{} 😀");

    assert_eq!(result.encoding, Encoding::Ucs2);
    assert_eq!(result.count, 4, "no escape weighting under UCS2");
}

#[rstest]
#[case("")]
#[case("Hello")]
#[case("~~~ |\\| ~~~")]
#[case("Grüße aus Köln 😀")]
#[case("你好 {{name}}")]
fn weighted_count_is_never_below_code_point_count(#[case] message: &str) {
    let result = classify(message);

    assert!(result.count >= message.chars().count());
    assert!(result.parts >= 1);
}

#[rstest]
fn weighted_length_ignores_escapes_under_ucs2() {
    assert_eq!(weighted_length("{|}", Encoding::Gsm7Bit), 6);
    assert_eq!(weighted_length("{|}", Encoding::Ucs2), 3);
}

#[rstest]
fn remaining_tracks_the_current_part() {
    let single = classify(&gsm_text(150));
    assert_eq!(single.capacity(), 160);
    assert_eq!(single.remaining(), 10);
    assert!(!single.is_multipart());

    let double = classify(&gsm_text(161));
    assert_eq!(double.capacity(), 306);
    assert_eq!(double.remaining(), 145);
    assert!(double.is_multipart());

    let unicode = classify(&ucs2_text(70));
    assert_eq!(unicode.remaining(), 0);
}

#[rstest]
fn result_serialises_in_preview_shape() {
    let value = serde_json::to_value(classify("Hi ☕")).expect("result should serialise");

    assert_eq!(
        value,
        json!({ "count": 4, "encoding": "UCS2", "parts": 1 })
    );
}

#[rstest]
fn encoding_display_matches_wire_names() {
    assert_eq!(Encoding::Gsm7Bit.to_string(), "GSM_7BIT");
    assert_eq!(Encoding::Ucs2.to_string(), "UCS2");
}
