//! Table-to-vCard conversion.

use tabcard_rfc::rfc::vcard::{ContactRecord, encode_batch, encode_batch_parallel};

use crate::mapping::ResolvedMapping;
use crate::table::Table;

/// Encoded output of a whole table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// vCard text, one block per row in row order.
    pub vcf: String,
    /// Number of contacts encoded.
    pub contacts: usize,
}

/// Maps every row of `table` to a contact record, in row order.
#[must_use]
pub fn map_rows(table: &Table, mapping: &ResolvedMapping) -> Vec<ContactRecord> {
    table.rows.iter().map(|row| mapping.map_row(row)).collect()
}

/// ## Summary
/// Converts every row of `table` into one vCard block.
///
/// With `parallel`, blocks are encoded on the rayon pool; the output is the
/// same either way.
#[must_use]
#[tracing::instrument(skip(table, mapping), fields(rows = table.rows.len()))]
pub fn convert(table: &Table, mapping: &ResolvedMapping, parallel: bool) -> Conversion {
    let records = map_rows(table, mapping);
    let vcf = if parallel {
        encode_batch_parallel(&records)
    } else {
        encode_batch(&records)
    };

    tracing::info!(contacts = records.len(), "Generated contacts");
    Conversion {
        vcf,
        contacts: records.len(),
    }
}
