use crate::errors::AppError;
use crate::store::StoreData;
use chrono::NaiveDate;

const CSV_HEADER: &str = "ID,Date,Location,Observations";

#[derive(Debug)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

/// Renders the check-in list as CSV, optionally filtered to an inclusive
/// date range. Location ids resolve to their current name, or `Unknown`
/// when the location is gone. An inverted range is rejected before any
/// output is produced.
pub fn export_check_ins(
    store: &StoreData,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<CsvExport, AppError> {
    if let (Some(from), Some(to)) = (from, to) {
        if from > to {
            return Err(AppError::bad_request("From date cannot be after To date"));
        }
    }

    let rows: Vec<String> = store
        .check_ins
        .iter()
        .filter(|check_in| in_range(&check_in.date, from, to))
        .map(|check_in| {
            [
                csv_field(&check_in.id),
                csv_field(&check_in.date),
                csv_field(&store.location_name(&check_in.location_id)),
                csv_field(&check_in.observations),
            ]
            .join(",")
        })
        .collect();

    let mut content = String::from(CSV_HEADER);
    content.push('\n');
    content.push_str(&rows.join("\n"));

    Ok(CsvExport {
        filename: export_filename(from, to, today),
        content,
    })
}

fn in_range(date: &str, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return false;
    };
    if from.is_some_and(|from| parsed < from) {
        return false;
    }
    if to.is_some_and(|to| parsed > to) {
        return false;
    }
    true
}

/// Every field is double-quoted; inner quotes are doubled and newlines
/// collapse to single spaces so rows stay one-per-line.
fn csv_field(value: &str) -> String {
    let flattened = value.replace("\r\n", " ").replace(['\n', '\r'], " ");
    format!("\"{}\"", flattened.replace('"', "\"\""))
}

fn export_filename(from: Option<NaiveDate>, to: Option<NaiveDate>, today: NaiveDate) -> String {
    let suffix = match (from, to) {
        (Some(from), Some(to)) => format!("_{from}_to_{to}"),
        (Some(from), None) => format!("_from_{from}"),
        (None, Some(to)) => format!("_to_{to}"),
        (None, None) => format!("_{today}"),
    };
    format!("checkins{suffix}.csv")
}
