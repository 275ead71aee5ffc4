// src/data/loader.rs
use anyhow::{Result, Context};
use serde::{Deserialize, Deserializer};
use std::path::Path;
use tracing::{info, warn};

use crate::data::{Dataset, Row};

/// Numeric coercion mirrors the source data's loose typing: a field
/// that fails to parse becomes NaN and flows through sort/extent as a
/// degenerate but non-fatal value.
pub fn lenient_f64<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().parse().unwrap_or(f64::NAN))
}

pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open dataset: {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: Row = record
            .with_context(|| format!("Malformed record in {}", path.display()))?;
        rows.push(row);
    }

    let nan_fields = rows
        .iter()
        .filter(|r| {
            r.in_state_total.is_nan()
                || r.out_of_state_total.is_nan()
                || r.early_career_pay.is_nan()
                || r.enrollment.is_nan()
        })
        .count();
    if nan_fields > 0 {
        warn!(rows = nan_fields, "dataset rows with unparseable numeric fields");
    }
    info!(rows = rows.len(), path = %path.display(), "dataset loaded");

    Ok(Dataset::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str =
        "name,state,type,enrollment_bin,in_state_total,out_of_state_total,early_career_pay,enrollment";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        write!(file, "{}", body).unwrap();
        file
    }

    #[test]
    fn loads_well_formed_rows() {
        let file = write_csv(
            "Alpha University,CA,Public,Large,10000,25000,60000,30000\n\
             Beta College,NY,Private,Small,40000,40000,55000,2000\n",
        );
        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.rows.len(), 2);
        assert_eq!(dataset.rows[0].name, "Alpha University");
        assert_eq!(dataset.rows[1].out_of_state_total, 40000.0);
        assert_eq!(dataset.states, vec!["CA".to_string(), "NY".to_string()]);
    }

    #[test]
    fn malformed_numeric_field_becomes_nan() {
        let file = write_csv("Alpha University,CA,Public,Large,oops,25000,60000,30000\n");
        let dataset = load_dataset(file.path()).unwrap();
        assert!(dataset.rows[0].in_state_total.is_nan());
        assert_eq!(dataset.rows[0].out_of_state_total, 25000.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_dataset(Path::new("/nonexistent/data.csv")).is_err());
    }

    #[test]
    fn unknown_school_type_is_an_error() {
        let file = write_csv("Alpha University,CA,Charter,Large,10000,25000,60000,30000\n");
        assert!(load_dataset(file.path()).is_err());
    }
}
