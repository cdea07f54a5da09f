//! CSV export of the current entry set.

use crate::dates::format_date;
use crate::entry::Entry;

pub const CSV_FILENAME: &str = "calendar.csv";
pub const CSV_HEADER: &str = "owner_id,title,type,start_date,end_date,num_days";

/// Render entries as CSV: header row plus one row per entry, in the given order.
pub fn entries_to_csv(entries: &[Entry]) -> String {
    let mut csv = String::from(CSV_HEADER);
    csv.push('\n');

    for entry in entries {
        let fields = &entry.fields;
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            escape(&entry.owner_id),
            escape(&fields.title),
            escape(&fields.content_type),
            format_date(fields.start_date),
            format_date(fields.end_date),
            fields.num_days,
        ));
    }

    csv
}

/// Quote a field if it contains a delimiter, quote or line break.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
