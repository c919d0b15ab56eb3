use crate::foundation::cstr::c_str;
use crate::foundation::error::ExtractError;
use crate::query::id::*;
use crate::tests::*;

fn id(query: &str) -> Result<String, ExtractError> {
    extract_id(Some(query), QUERY_BOUND).map(IdValue::into_string)
}

// ═══════════════════════════════════════════════════════════════════════
// Accepted shapes
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_plain_id() {
    assert_eq!(id("id=123"), Ok("123".to_string()));
}

#[test]
fn test_id_after_other_pair() {
    assert_eq!(id("foo=bar&id=42"), Ok("42".to_string()));
}

#[test]
fn test_empty_value_is_success() {
    let value = extract_id(Some("id="), QUERY_BOUND).unwrap();
    assert!(value.is_empty());
    assert_eq!(value.to_u32(), None);
}

#[test]
fn test_spaces_are_stripped_before_matching() {
    assert_eq!(id("id = 99"), Ok("99".to_string()));
    assert_eq!(id("i d= 1 2 3"), Ok("123".to_string()));
}

#[test]
fn test_separator_before_marker_does_not_block() {
    assert_eq!(id("a?id=5"), Ok("5".to_string()));
}

#[test]
fn test_value_ends_at_each_separator() {
    for sep in ['?', ';', '#', '&'] {
        let query = format!("id=77{}x=abc", sep);
        assert_eq!(id(&query), Ok("77".to_string()), "separator {:?}", sep);
    }
}

#[test]
fn test_first_marker_wins() {
    assert_eq!(id("id=1&id=2"), Ok("1".to_string()));
}

#[test]
fn test_separator_between_markers_cuts_first_value() {
    // the tail starts at the first `id=`, so `;` ends its value immediately
    assert_eq!(id("id=;id=2"), Ok("".to_string()));
}

#[test]
fn test_marker_matched_inside_longer_key() {
    assert_eq!(id("uid=8"), Ok("8".to_string()));
    assert_eq!(id("iid=8"), Ok("8".to_string()));
}

#[test]
fn test_input_exactly_at_bound() {
    let query = "id=12345";
    assert_eq!(
        extract_id(Some(query), query.len()).map(IdValue::into_string),
        Ok("12345".to_string())
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Rejections
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_absent_query() {
    assert_eq!(extract_id(None, QUERY_BOUND), Err(ExtractError::NoInput));
}

#[test]
fn test_too_long_rejected_before_inspection() {
    let query = "id=1234567";
    assert_eq!(
        extract_id(Some(query), query.len() - 1),
        Err(ExtractError::InputTooLong { len: 10, max: 9 })
    );
}

#[test]
fn test_length_bound_counts_spaces() {
    // spaces count toward the bound even though they are stripped later
    assert_eq!(
        extract_id(Some("id =  1"), 5),
        Err(ExtractError::InputTooLong { len: 7, max: 5 })
    );
}

#[test]
fn test_key_missing() {
    assert_eq!(id("foo=bar&x=1"), Err(ExtractError::KeyNotFound));
    assert_eq!(id(""), Err(ExtractError::KeyNotFound));
    assert_eq!(id("id"), Err(ExtractError::KeyNotFound));
}

#[test]
fn test_non_digit_rejects_whole_value() {
    assert_eq!(id("id=12a3"), Err(ExtractError::InvalidValue { byte: b'a' }));
}

#[test]
fn test_sign_is_not_a_digit() {
    assert_eq!(id("id=-5"), Err(ExtractError::InvalidValue { byte: b'-' }));
}

#[test]
fn test_non_ascii_value_rejected() {
    assert!(matches!(id("id=4²"), Err(ExtractError::InvalidValue { .. })));
}

#[test]
fn test_extract_is_repeatable() {
    let query = Some("x=1;id = 0042 #frag");
    let first = extract_id(query, QUERY_BOUND);
    assert_eq!(first, extract_id(query, QUERY_BOUND));
    assert_eq!(first.unwrap().as_str(), "0042");
}

// ═══════════════════════════════════════════════════════════════════════
// IdValue
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_id_value_numeric() {
    let value = extract_id(Some("id=0042"), QUERY_BOUND).unwrap();
    assert_eq!(value.to_u32(), Some(42));
    assert_eq!(value.len(), 4);
    assert_eq!(value.to_string(), "0042");
    assert_eq!(value.as_bytes(), b"0042");
}

#[test]
fn test_id_value_overflow() {
    let value = extract_id(Some("id=4294967296"), QUERY_BOUND).unwrap();
    assert_eq!(value.to_u32(), None);
    let value = extract_id(Some("id=4294967295"), QUERY_BOUND).unwrap();
    assert_eq!(value.to_u32(), Some(u32::MAX));
}

// ═══════════════════════════════════════════════════════════════════════
// Fixed buffer variant
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_into_writes_terminated_digits() {
    let mut out = poisoned::<8>();
    assert_eq!(extract_id_into(Some("a=b;id=31"), QUERY_BOUND, &mut out), Ok(2));
    assert_eq!(&out[..3], b"31\0");
    assert_eq!(out[3], 0xA5);
}

#[test]
fn test_into_empty_value() {
    let mut out = poisoned::<4>();
    assert_eq!(extract_id_into(Some("id=&x"), QUERY_BOUND, &mut out), Ok(0));
    assert_eq!(out[0], 0);
}

#[test]
fn test_into_invalid_marks_buffer_empty() {
    let mut out = poisoned::<8>();
    assert_eq!(
        extract_id_into(Some("id=12a3"), QUERY_BOUND, &mut out),
        Err(ExtractError::InvalidValue { byte: b'a' })
    );
    assert_eq!(out[0], 0);
    // no partial digits written
    assert_eq!(&out[1..], &[0xA5; 7]);
}

#[test]
fn test_into_buffer_too_small() {
    let mut out = poisoned::<3>();
    assert_eq!(
        extract_id_into(Some("id=123"), QUERY_BOUND, &mut out),
        Err(ExtractError::BufferTooSmall { needed: 4, capacity: 3 })
    );
    assert_eq!(c_str(&out), b"");
}

#[test]
fn test_into_zero_length_buffer() {
    let mut out: [u8; 0] = [];
    assert_eq!(
        extract_id_into(Some("id="), QUERY_BOUND, &mut out),
        Err(ExtractError::BufferTooSmall { needed: 1, capacity: 0 })
    );
}
