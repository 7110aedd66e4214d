use ukgeo_entities::{
    health::HealthStatus,
    lookup::{LookupResult, PlainValue},
};

const KEY_WIDTH: usize = 20;
const BOX_VALUE_WIDTH: usize = 35;

/// Rounded percentage, e.g. `"83%"`.
pub fn confidence(score: f64) -> String {
    format!("{:.0}%", score * 100.0)
}

/// One right-aligned `key: value` line per field.
pub fn plain_lines(res: &LookupResult) -> Vec<String> {
    res.to_plain_mapping()
        .into_iter()
        .map(|(key, val)| format!("{key:>KEY_WIDTH$}: {val}"))
        .collect()
}

pub fn health_lines(status: &HealthStatus) -> Vec<String> {
    vec![
        format!("{:>KEY_WIDTH$}: {}", "healthy", status.healthy),
        format!("{:>KEY_WIDTH$}: {}", "epc_db", status.epc_status),
        format!("{:>KEY_WIDTH$}: {}", "os_db", status.os_status),
    ]
}

pub fn boxed(res: &LookupResult) -> String {
    let confidence = confidence(res.match_score);
    let rows = [
        ("Matched Address", res.matched_address.clone()),
        ("UPRN", res.property_id.to_string()),
        ("Easting", PlainValue::Float(res.easting).to_string()),
        ("Northing", PlainValue::Float(res.northing).to_string()),
        ("Latitude", PlainValue::Float(res.latitude).to_string()),
        ("Longitude", PlainValue::Float(res.longitude).to_string()),
        ("Match Confidence", confidence),
    ];
    let border = "─".repeat(BOX_VALUE_WIDTH + 20);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!("  ┌{border}┐"));
    for (label, value) in rows {
        lines.push(format!("  │  {label:<18}{value:<BOX_VALUE_WIDTH$}│"));
    }
    lines.push(format!("  └{border}┘"));
    lines.join("\n")
}
