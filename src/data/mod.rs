// src/data/mod.rs
use serde::{Serialize, Deserialize};
use std::fmt;

pub mod loader;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SchoolType {
    Public,
    Private,
}

impl SchoolType {
    pub const ALL: [SchoolType; 2] = [SchoolType::Public, SchoolType::Private];
}

impl fmt::Display for SchoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchoolType::Public => write!(f, "Public"),
            SchoolType::Private => write!(f, "Private"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SizeBin {
    Small,
    Medium,
    Large,
}

impl SizeBin {
    pub const ALL: [SizeBin; 3] = [SizeBin::Small, SizeBin::Medium, SizeBin::Large];
}

impl fmt::Display for SizeBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeBin::Small => write!(f, "Small"),
            SizeBin::Medium => write!(f, "Medium"),
            SizeBin::Large => write!(f, "Large"),
        }
    }
}

/// One school record. Immutable after load; `name` is the identity key
/// for selection membership and re-render keying.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Row {
    pub name: String,
    pub state: String,
    #[serde(rename = "type")]
    pub school_type: SchoolType,
    pub enrollment_bin: SizeBin,
    #[serde(deserialize_with = "loader::lenient_f64")]
    pub in_state_total: f64,
    #[serde(deserialize_with = "loader::lenient_f64")]
    pub out_of_state_total: f64,
    #[serde(deserialize_with = "loader::lenient_f64")]
    pub early_career_pay: f64,
    #[serde(deserialize_with = "loader::lenient_f64")]
    pub enrollment: f64,
}

/// Which tuition column the dashboard is currently charting. Resolved
/// into concrete values once per recompute so a render pass never mixes
/// the two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuitionField {
    InState,
    OutOfState,
}

impl TuitionField {
    pub fn tuition(self, row: &Row) -> f64 {
        match self {
            TuitionField::InState => row.in_state_total,
            TuitionField::OutOfState => row.out_of_state_total,
        }
    }

    /// Early-career pay minus the active tuition column. Drives the bar
    /// chart ranking and the side-panel figure.
    pub fn pay_gap(self, row: &Row) -> f64 {
        row.early_career_pay - self.tuition(row)
    }

    pub fn label(self) -> &'static str {
        match self {
            TuitionField::InState => "In-State Tuition",
            TuitionField::OutOfState => "Out-of-State Tuition",
        }
    }
}

impl Default for TuitionField {
    fn default() -> Self {
        TuitionField::OutOfState
    }
}

/// The full in-memory table, loaded once per dataset. Also carries the
/// sorted unique state list used to populate the state dropdown.
#[derive(Debug, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
    pub states: Vec<String>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        let mut states: Vec<String> = rows.iter().map(|r| r.state.clone()).collect();
        states.sort();
        states.dedup();
        Self { rows, states }
    }
}

#[cfg(test)]
pub(crate) fn test_row(name: &str, state: &str, pay: f64, out_of_state: f64) -> Row {
    Row {
        name: name.to_string(),
        state: state.to_string(),
        school_type: SchoolType::Public,
        enrollment_bin: SizeBin::Medium,
        in_state_total: out_of_state / 2.0,
        out_of_state_total: out_of_state,
        early_career_pay: pay,
        enrollment: 10_000.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pay_gap_tracks_selected_tuition_column() {
        let row = test_row("A", "CA", 50_000.0, 20_000.0);
        assert_eq!(TuitionField::OutOfState.pay_gap(&row), 30_000.0);
        assert_eq!(TuitionField::InState.pay_gap(&row), 40_000.0);
    }

    #[test]
    fn dataset_collects_sorted_unique_states() {
        let rows = vec![
            test_row("A", "NY", 1.0, 1.0),
            test_row("B", "CA", 1.0, 1.0),
            test_row("C", "NY", 1.0, 1.0),
        ];
        let dataset = Dataset::new(rows);
        assert_eq!(dataset.states, vec!["CA".to_string(), "NY".to_string()]);
    }
}
