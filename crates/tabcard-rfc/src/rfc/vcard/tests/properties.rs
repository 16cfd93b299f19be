//! Whole-block properties of the encoder.

use super::fixtures::*;
use crate::rfc::vcard::build::{
    contact_lines, encode_batch, encode_contact, escape_text, fold_line, fold_line_to,
};
use crate::rfc::vcard::core::ContactRecord;
use tabcard_core::types::PhoneType;

/// Undoes [`escape_text`].
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some(other) => result.push(other),
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Undoes [`fold_line_to`].
fn unfold(s: &str) -> String {
    s.replace("\r\n ", "")
}

#[test]
fn escape_round_trips() {
    let values = [
        "plain",
        "a;b,c\\d\n",
        "\\;;,,\n\n",
        "trailing backslash\\",
        "already \\, escaped",
        "日本;東京,新宿\n",
        "",
    ];
    for value in values {
        assert_eq!(unescape(&escape_text(value)), value, "value: {value:?}");
    }
}

#[test]
fn escape_reference_value() {
    assert_eq!(escape_text("a;b,c\\d\n"), "a\\;b\\,c\\\\d\\n");
}

#[test]
fn fold_round_trips_and_respects_limit() {
    let lines = [
        "X".repeat(1),
        "X".repeat(75),
        "X".repeat(76),
        "X".repeat(500),
        format!("NOTE:{}", "ü".repeat(100)),
        format!("NOTE:{}", "日本語".repeat(40)),
        format!("NOTE:{}", "😀a".repeat(60)),
    ];
    for max in [1, 2, 3, 4, 5, 10, 74, 75, 76, 200] {
        for line in &lines {
            let folded = fold_line_to(line, max);
            assert_eq!(unfold(&folded), *line, "max {max}");

            for physical in folded.split("\r\n") {
                let content = physical.strip_prefix(' ').unwrap_or(physical);
                assert!(
                    physical.len() <= max || content.chars().count() == 1,
                    "max {max}: {physical:?}"
                );
            }
        }
    }
}

#[test]
fn full_contact_matches_fixture() {
    assert_eq!(encode_contact(&full_contact()), FULL_CONTACT_VCARD);
}

#[test]
fn only_non_empty_phones_emit_lines() {
    let record = ContactRecord::new("Ada")
        .with_phone("", PhoneType::Cell)
        .with_phone("555-1234", PhoneType::Work);

    let tel: Vec<String> = contact_lines(&record)
        .into_iter()
        .filter(|l| l.starts_with("TEL"))
        .collect();
    assert_eq!(tel, ["TEL;TYPE=WORK,VOICE:555-1234"]);
}

#[test]
fn formatted_name_derived_without_mapping() {
    let record = ContactRecord::new("Ada").with_last_name("Lovelace");
    assert!(encode_contact(&record).contains("\r\nFN:Ada Lovelace\r\n"));
}

#[test]
fn address_has_seven_components() {
    let record = ContactRecord::new("Sherlock").with_address("221B Baker St");
    let adr = contact_lines(&record)
        .into_iter()
        .find(|l| l.starts_with("ADR"))
        .expect("address line should be emitted");

    let value = adr.split_once(':').map(|(_, v)| v).unwrap_or_default();
    let components: Vec<&str> = value.split(';').collect();
    assert_eq!(components.len(), 7);
    assert_eq!(components[2], "221B Baker St");
    for (i, c) in components.iter().enumerate() {
        if i != 2 {
            assert!(c.is_empty(), "component {i} should be empty");
        }
    }
}

#[test]
fn every_physical_line_fits_and_ends_in_crlf() {
    let output = encode_batch(&[full_contact(), long_title_contact()]);

    assert!(!output.replace("\r\n", "").contains('\n'));
    assert!(output.ends_with("END:VCARD\r\n\r\n"));
    for line in output.split("\r\n") {
        assert!(line.len() <= 75, "line too long: {line:?}");
    }
    assert!(output.contains("\r\n "));

    let title = contact_lines(&long_title_contact())
        .into_iter()
        .find(|l| l.starts_with("TITLE:"))
        .expect("title line should be emitted");
    assert!(unfold(&output).contains(&title));
    assert_eq!(unfold(&fold_line(&title)), title);
}

#[test_log::test]
fn batch_preserves_order_and_separates_blocks() {
    let records: Vec<ContactRecord> = ["Ada", "Grace", "Barbara", "Frances"]
        .into_iter()
        .map(ContactRecord::new)
        .collect();

    let output = encode_batch(&records);

    assert_eq!(output.matches("BEGIN:VCARD\r\n").count(), records.len());
    assert_eq!(output.matches("END:VCARD\r\n").count(), records.len());

    let blocks: Vec<&str> = output
        .split_terminator("END:VCARD\r\n\r\n")
        .collect();
    assert_eq!(blocks.len(), records.len());
    for (block, record) in blocks.iter().zip(&records) {
        assert!(block.starts_with("BEGIN:VCARD\r\n"));
        assert!(block.contains(&format!("\r\nFN:{}\r\n", record.first_name)));
    }

    // Exactly one blank line between consecutive blocks.
    assert_eq!(
        output.matches("END:VCARD\r\n\r\nBEGIN:VCARD").count(),
        records.len() - 1
    );
}
