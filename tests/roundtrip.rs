use bmc_convert::{bmc_to_json, json_to_bmc, layout, BmcError, Color};
use serde_json::{json, Value};

fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Color { red, green, blue, alpha: 0xFF }
}

fn sample_file() -> Vec<u8> {
    layout::serialize(&[rgb(0xFF, 0, 0), rgb(0, 0xFF, 0), rgb(0, 0, 0xFF)])
}

fn as_value(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn default_grouping_emits_flat_array() {
    let text = bmc_to_json(&sample_file(), 1).unwrap();
    assert_eq!(
        as_value(&text),
        json!(["FF0000FF", "00FF00FF", "0000FFFF"])
    );
}

#[test]
fn group_size_two_emits_short_final_group() {
    let text = bmc_to_json(&sample_file(), 2).unwrap();
    assert_eq!(
        as_value(&text),
        json!([["FF0000FF", "00FF00FF"], ["0000FFFF"]])
    );
}

#[test]
fn full_round_trip_is_byte_identical() {
    let original = sample_file();
    for group_size in 1..=4 {
        let text = bmc_to_json(&original, group_size).unwrap();
        assert_eq!(json_to_bmc(&text).unwrap(), original);
    }
}

#[test]
fn entry_added_in_json_bumps_the_count_field() {
    let text = bmc_to_json(&sample_file(), 1).unwrap();
    let mut entries: Vec<String> = serde_json::from_str(&text).unwrap();
    entries.push("112233FF".to_string());
    let edited = serde_json::to_string(&entries).unwrap();

    let bytes = json_to_bmc(&edited).unwrap();
    assert_eq!(u16::from_le_bytes(bytes[40..42].try_into().unwrap()), 4);
    assert_eq!(&bytes[56..60], &[0x11, 0x22, 0x33, 0xFF]);

    let reparsed = layout::parse(&bytes).unwrap();
    assert_eq!(reparsed.color_table.len(), 4);
    assert_eq!(reparsed.color_table[3], rgb(0x11, 0x22, 0x33));
}

#[test]
fn entry_removed_in_json_shrinks_the_count_field() {
    let bytes = json_to_bmc(r#"["FF0000FF"]"#).unwrap();
    assert_eq!(u16::from_le_bytes(bytes[40..42].try_into().unwrap()), 1);
    assert_eq!(layout::parse(&bytes).unwrap().color_table, vec![rgb(0xFF, 0, 0)]);
}

#[test]
fn empty_json_produces_a_valid_empty_file() {
    let bytes = json_to_bmc("[]").unwrap();
    assert_eq!(u16::from_le_bytes(bytes[40..42].try_into().unwrap()), 0);
    assert!(layout::parse(&bytes).unwrap().color_table.is_empty());
}

#[test]
fn irregular_groups_after_edits_still_convert() {
    // A hand-edited document where one group gained an entry and another
    // lost one; flatten only concatenates, so this must succeed.
    let edited = r#"[["FF0000FF", "00FF00FF", "0000FFFF"], ["112233FF"]]"#;
    let bytes = json_to_bmc(edited).unwrap();
    assert_eq!(layout::parse(&bytes).unwrap().color_table.len(), 4);
}

#[test]
fn invalid_hex_fails_without_output() {
    assert!(matches!(
        json_to_bmc(r#"["ZZZZZZZZ"]"#),
        Err(BmcError::InvalidHexString { .. })
    ));
}

#[test]
fn non_string_elements_fail_without_output() {
    assert!(matches!(
        json_to_bmc("[0, 1, 2]"),
        Err(BmcError::InvalidJsonShape { .. })
    ));
}

#[test]
fn zero_group_size_is_rejected() {
    assert!(matches!(
        bmc_to_json(&sample_file(), 0),
        Err(BmcError::InvalidGroupSize)
    ));
}

#[test]
fn truncated_binary_is_rejected() {
    let original = sample_file();
    assert!(matches!(
        bmc_to_json(&original[..original.len() - 20], 1),
        Err(BmcError::TruncatedInput { .. })
    ));
}

#[test]
fn foreign_binary_is_rejected() {
    assert!(matches!(
        bmc_to_json(b"MSBT....not a bmc file at all...............", 1),
        Err(BmcError::UnsupportedLayout { .. })
    ));
}
