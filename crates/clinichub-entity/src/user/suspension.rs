//! Suspension duration units.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time unit accepted by the suspend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SuspensionUnit {
    /// Hours.
    Hours,
    /// Days.
    Days,
    /// Weeks.
    Weeks,
    /// Months, fixed at 30 days.
    Months,
}

impl SuspensionUnit {
    /// The span covered by `amount` of this unit.
    ///
    /// Any non-negative amount is accepted; zero yields an empty span, so
    /// the resulting suspension end is already in the past.
    pub fn span(&self, amount: i64) -> Duration {
        match self {
            Self::Hours => Duration::hours(amount),
            Self::Days => Duration::days(amount),
            Self::Weeks => Duration::weeks(amount),
            Self::Months => Duration::days(amount * 30),
        }
    }
}

impl fmt::Display for SuspensionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours => write!(f, "HOURS"),
            Self::Days => write!(f, "DAYS"),
            Self::Weeks => write!(f, "WEEKS"),
            Self::Months => write!(f, "MONTHS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_arithmetic() {
        assert_eq!(SuspensionUnit::Hours.span(2), Duration::hours(2));
        assert_eq!(SuspensionUnit::Days.span(1), Duration::hours(24));
        assert_eq!(SuspensionUnit::Weeks.span(2), Duration::days(14));
        assert_eq!(SuspensionUnit::Months.span(1), Duration::days(30));
    }

    #[test]
    fn test_zero_amount_is_empty_span() {
        assert_eq!(SuspensionUnit::Days.span(0), Duration::zero());
    }

    #[test]
    fn test_json_names_are_uppercase() {
        let unit: SuspensionUnit = serde_json::from_str("\"WEEKS\"").unwrap();
        assert_eq!(unit, SuspensionUnit::Weeks);
        assert_eq!(serde_json::to_string(&SuspensionUnit::Hours).unwrap(), "\"HOURS\"");
    }
}
