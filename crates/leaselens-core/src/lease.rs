//! Analysis result returned by the remote service
//!
//! The payload is an external, partially-trusted contract. The five known lease
//! keys are always present after deserialization: a missing key, `null`, or a
//! non-string value becomes an empty string.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder shown for a field the service could not extract
pub const NOT_SPECIFIED: &str = "Not specified";

/// Successful response body of `POST /upload`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub success: bool,
    pub filename: String,
    pub data: LeaseFields,
}

/// The five extracted lease terms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseFields {
    #[serde(default, deserialize_with = "lenient_string")]
    pub monthly_rent: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lease_term: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub security_deposit: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub termination_clause: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub rent_escalation: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

impl LeaseFields {
    /// Raw value of one field
    pub fn get(&self, field: LeaseField) -> &str {
        match field {
            LeaseField::MonthlyRent => &self.monthly_rent,
            LeaseField::LeaseTerm => &self.lease_term,
            LeaseField::SecurityDeposit => &self.security_deposit,
            LeaseField::TerminationClause => &self.termination_clause,
            LeaseField::RentEscalation => &self.rent_escalation,
        }
    }

    /// Fields in display order
    pub fn iter(&self) -> impl Iterator<Item = (LeaseField, &str)> + '_ {
        LeaseField::ALL.iter().map(move |field| (*field, self.get(*field)))
    }
}

/// Known lease keys, in the order they are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaseField {
    MonthlyRent,
    LeaseTerm,
    SecurityDeposit,
    TerminationClause,
    RentEscalation,
}

impl LeaseField {
    pub const ALL: [LeaseField; 5] = [
        LeaseField::MonthlyRent,
        LeaseField::LeaseTerm,
        LeaseField::SecurityDeposit,
        LeaseField::TerminationClause,
        LeaseField::RentEscalation,
    ];

    /// JSON key used by the analysis service
    pub fn key(self) -> &'static str {
        match self {
            LeaseField::MonthlyRent => "monthly_rent",
            LeaseField::LeaseTerm => "lease_term",
            LeaseField::SecurityDeposit => "security_deposit",
            LeaseField::TerminationClause => "termination_clause",
            LeaseField::RentEscalation => "rent_escalation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaseField::MonthlyRent => "Monthly Rent",
            LeaseField::LeaseTerm => "Lease Term",
            LeaseField::SecurityDeposit => "Security Deposit",
            LeaseField::TerminationClause => "Termination Clause",
            LeaseField::RentEscalation => "Rent Escalation",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

/// Human label for a JSON key; unknown keys are returned unchanged
pub fn label_for_key(key: &str) -> &str {
    LeaseField::from_key(key).map_or(key, |field| field.label())
}

/// Value as displayed in the results table
pub fn display_value(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_SPECIFIED
    } else {
        value
    }
}
