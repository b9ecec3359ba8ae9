//! CSV export of an analysis result
//!
//! One `summary` row, then a `meta_tag` row per tag and a `recommendation`
//! row per recommendation. All rows share one header; unused cells are empty.

use super::report::ScoreRating;
use super::target::display_domain;
use super::types::AnalysisResult;
use crate::time::date_of;

pub const CSV_HEADER: [&str; 12] = [
    "type",
    "name",
    "severity",
    "title",
    "content",
    "description",
    "url",
    "score",
    "rating",
    "generated_at",
    "total_meta_tags",
    "total_recommendations",
];

/// Quote a field per RFC 4180 when it needs it
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row(out: &mut String, cells: [&str; 12]) {
    let line: Vec<String> = cells.iter().map(|cell| escape_field(cell)).collect();
    out.push_str(&line.join(","));
    out.push_str("\r\n");
}

/// Render a result as CSV text
pub fn to_csv(result: &AnalysisResult) -> String {
    let mut out = String::new();
    push_row(&mut out, CSV_HEADER);

    let score = result.score.to_string();
    let total_tags = result.meta_tags.len().to_string();
    let total_recs = result.recommendations.len().to_string();
    let url = result.url.as_str();

    push_row(
        &mut out,
        [
            "summary",
            "",
            "",
            "",
            "",
            "",
            url,
            &score,
            ScoreRating::from_score(result.score).label(),
            &result.timestamp,
            &total_tags,
            &total_recs,
        ],
    );

    for (name, content) in result.meta_tags.iter() {
        push_row(
            &mut out,
            ["meta_tag", name, "", "", content, "", url, "", "", "", "", ""],
        );
    }

    for rec in &result.recommendations {
        push_row(
            &mut out,
            [
                "recommendation",
                "",
                rec.kind.as_str(),
                &rec.title,
                "",
                &rec.description,
                url,
                "",
                "",
                "",
                "",
                "",
            ],
        );
    }

    out
}

/// Download file name: `seo-report-<domain>-<YYYY-MM-DD>.csv`
///
/// The date comes from the result timestamp; an unparseable timestamp
/// yields `undated`.
pub fn csv_file_name(result: &AnalysisResult) -> String {
    let date = date_of(&result.timestamp)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "undated".to_string());
    let domain: String = display_domain(&result.url)
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    format!("seo-report-{}-{}.csv", domain, date)
}
