//! Clinical-history filter parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Optional predicates for filtering medical records.
///
/// Every field is optional; an absent field places no constraint on the
/// result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Restrict to a single patient.
    pub patient_id: Option<i64>,
    /// Restrict to records opened by a single professional.
    pub professional_id: Option<i64>,
    /// Records opened at or after this instant.
    pub opened_from: Option<DateTime<Utc>>,
    /// Records opened at or before this instant.
    pub opened_to: Option<DateTime<Utc>>,
}

impl RecordFilter {
    /// Whether the filter places no constraints at all.
    pub fn is_empty(&self) -> bool {
        self.patient_id.is_none()
            && self.professional_id.is_none()
            && self.opened_from.is_none()
            && self.opened_to.is_none()
    }
}
