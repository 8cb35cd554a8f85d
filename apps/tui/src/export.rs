//! Dataset export as pretty JSON or CSV.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use color_eyre::Result;
use serde_json::Value;

use crate::api::models::PortalDataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Json => Self::Csv,
            Self::Csv => Self::Json,
        }
    }
}

pub fn to_pretty_json(dataset: &PortalDataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Renders records as CSV: the header row comes from the first record's
/// keys, every field is double-quoted, and missing or falsy values become
/// empty strings.
pub fn to_csv(records: &[Value]) -> String {
    let Some(first) = records.first().and_then(Value::as_object) else {
        return String::new();
    };
    let headers: Vec<&String> = first.keys().collect();

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| format!("\"{h}\""))
            .collect::<Vec<_>>()
            .join(","),
    );

    for record in records {
        let row = headers
            .iter()
            .map(|header| {
                let field = record.get(header.as_str()).map_or(String::new(), csv_field);
                format!("\"{field}\"")
            })
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    lines.join("\n")
}

fn csv_field(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                String::new()
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Serializes the dataset and writes it under `dir` with a dated filename.
pub fn write_export(dir: &Path, format: ExportFormat, dataset: &PortalDataset) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let content = match format {
        ExportFormat::Json => to_pretty_json(dataset)?,
        ExportFormat::Csv => {
            let records: Vec<Value> = dataset
                .countries
                .iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()?;
            to_csv(&records)
        }
    };

    let date = chrono::Utc::now().format("%Y-%m-%d");
    let file_name = format!("{date}-strategy-portal.{}", format.extension());
    let path = dir.join(file_name);

    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn csv_quotes_fields_and_blanks_missing_values() {
        let records = vec![json!({"a": 1, "b": 2}), json!({"a": 3, "b": ""})];
        assert_eq!(to_csv(&records), "\"a\",\"b\"\n\"1\",\"2\"\n\"3\",\"\"");
    }

    #[test]
    fn csv_treats_falsy_values_as_empty() {
        let records = vec![json!({"a": 0, "b": false, "c": null, "d": "x"})];
        assert_eq!(
            to_csv(&records),
            "\"a\",\"b\",\"c\",\"d\"\n\"\",\"\",\"\",\"x\""
        );
    }

    #[test]
    fn csv_of_no_records_is_empty() {
        assert_eq!(to_csv(&[]), "");
    }

    #[test]
    fn csv_headers_follow_first_record_key_order() {
        let records = vec![json!({"code": "KE", "name": "Kenya", "status": "published"})];
        assert_eq!(
            to_csv(&records),
            "\"code\",\"name\",\"status\"\n\"KE\",\"Kenya\",\"published\""
        );
    }

    #[test]
    fn json_export_is_pretty_printed() {
        let dataset = PortalDataset::default();
        let json = to_pretty_json(&dataset).expect("serializable");
        assert!(json.contains('\n'));
        let value: Value = serde_json::from_str(&json).expect("valid json");
        assert!(value.get("countries").is_some());
    }

    #[test]
    fn format_toggles_between_json_and_csv() {
        assert_eq!(ExportFormat::Json.toggled(), ExportFormat::Csv);
        assert_eq!(ExportFormat::Csv.toggled(), ExportFormat::Json);
    }
}
