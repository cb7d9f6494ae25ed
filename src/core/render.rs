use crate::domain::model::{SearchResult, TailorRecord};
use crate::domain::ports::OutputFormat;
use crate::utils::error::{FinderError, Result};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    rating: f64,
    review_count: u32,
    specialty: String,
    location: &'a str,
    distance: &'a str,
    price: &'static str,
    price_label: &'static str,
    availability: &'a str,
}

impl<'a> From<&'a TailorRecord> for CsvRow<'a> {
    fn from(record: &'a TailorRecord) -> Self {
        Self {
            id: &record.id,
            name: &record.name,
            rating: record.rating,
            review_count: record.review_count,
            specialty: record.specialty.join("; "),
            location: &record.location,
            distance: &record.distance,
            price: record.price.as_str(),
            price_label: record.price.label(),
            availability: &record.availability,
        }
    }
}

pub fn render(result: &SearchResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Csv => render_csv(&result.tailors),
    }
}

pub fn render_json(result: &SearchResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

pub fn render_csv(tailors: &[TailorRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if tailors.is_empty() {
        // 沒有資料時 serialize 不會寫出標頭，手動補上
        writer.write_record([
            "id",
            "name",
            "rating",
            "review_count",
            "specialty",
            "location",
            "distance",
            "price",
            "price_label",
            "availability",
        ])?;
    }
    for record in tailors {
        writer.serialize(CsvRow::from(record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FinderError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| FinderError::ValidationError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn render_record(record: &TailorRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{}] {}  ★ {} ({} reviews)  {}",
        record.id,
        record.name,
        record.rating,
        record.review_count,
        record.price.label()
    );
    let _ = writeln!(out, "    {} · {} away", record.location, record.distance);
    if !record.specialty.is_empty() {
        let _ = writeln!(out, "    {}", record.specialty.join(", "));
    }
    let _ = writeln!(out, "    Available: {}", record.availability);
    out
}

pub fn render_table(result: &SearchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", result.summary);
    let _ = writeln!(out, "Sorted by: {}", result.sorted_by);

    if result.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No tailors found");
        let _ = writeln!(
            out,
            "Try adjusting your search or filters to find what you're looking for."
        );
        return out;
    }

    for record in &result.tailors {
        let _ = writeln!(out);
        out.push_str(&render_record(record));
    }
    out
}
