//! Contact record serialization.

use rayon::prelude::*;
use tabcard_core::constants::{BEGIN_LINE, CRLF, END_LINE, VERSION_LINE};
use tabcard_core::types::PhoneType;

use super::escape::escape_text;
use super::fold::fold_line;
use crate::rfc::vcard::core::{Address, ContactRecord, Phone, StructuredName, present};

/// Encodes a batch of contacts, one block per record in input order.
#[must_use]
#[tracing::instrument(level = "debug", skip_all, fields(contacts = records.len()))]
pub fn encode_batch(records: &[ContactRecord]) -> String {
    let output: String = records.iter().map(encode_contact).collect();
    tracing::debug!(octets = output.len(), "Encoded contact batch");
    output
}

/// Encodes a batch of contacts on the rayon thread pool.
///
/// Output is byte-identical to [`encode_batch`].
#[must_use]
#[tracing::instrument(level = "debug", skip_all, fields(contacts = records.len()))]
pub fn encode_batch_parallel(records: &[ContactRecord]) -> String {
    let blocks: Vec<String> = records.par_iter().map(encode_contact).collect();
    let output = blocks.concat();
    tracing::debug!(octets = output.len(), "Encoded contact batch");
    output
}

/// Encodes one contact as a vCard 3.0 block.
///
/// ## Summary
/// Every logical line is folded, lines are joined with CRLF, and the block
/// ends with two CRLFs so consecutive blocks are separated by a blank line.
#[must_use]
pub fn encode_contact(record: &ContactRecord) -> String {
    let folded: Vec<String> = contact_lines(record)
        .iter()
        .map(|line| fold_line(line))
        .collect();

    let mut output = folded.join(CRLF);
    output.push_str(CRLF);
    output.push_str(CRLF);
    output
}

/// Builds the unfolded logical lines of a contact's block.
#[must_use]
pub fn contact_lines(record: &ContactRecord) -> Vec<String> {
    let mut lines = vec![BEGIN_LINE.to_string(), VERSION_LINE.to_string()];

    lines.push(format!(
        "N:{}",
        serialize_structured_name(&record.structured_name())
    ));
    lines.push(format!(
        "FN:{}",
        escape_text(&record.resolved_formatted_name())
    ));

    lines.extend(record.dialable_phones().map(serialize_phone));

    if let Some(address) = present(record.address.as_ref()) {
        lines.push(format!(
            "ADR;TYPE=HOME:{}",
            serialize_address(&Address::street_only(address))
        ));
    }

    let singles = [
        ("EMAIL;TYPE=INTERNET", &record.email),
        ("ORG", &record.org),
        ("TITLE", &record.title),
        ("URL", &record.url),
    ];
    for (name, value) in singles {
        if let Some(value) = present(value.as_ref()) {
            lines.push(format!("{name}:{}", escape_text(value)));
        }
    }

    lines.push(END_LINE.to_string());
    lines
}

fn serialize_phone(phone: &Phone) -> String {
    let number = escape_text(&phone.number);
    match phone.kind {
        PhoneType::Voice => format!("TEL;TYPE=VOICE:{number}"),
        kind => format!("TEL;TYPE={kind},VOICE:{number}"),
    }
}

fn serialize_structured_name(name: &StructuredName<'_>) -> String {
    // family;given;additional;prefix;suffix
    serialize_components(&name.components())
}

fn serialize_address(addr: &Address<'_>) -> String {
    // POBox;Extended;Street;Locality;Region;PostalCode;Country
    serialize_components(&addr.components())
}

fn serialize_components(components: &[&str]) -> String {
    components
        .iter()
        .map(|c| escape_text(c))
        .collect::<Vec<_>>()
        .join(";")
}
