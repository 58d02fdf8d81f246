use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{DaybookEntryKind, TransactionKind};
use crate::error::CoreError;
use crate::serde_ext;

/// A client of the software-licensing business.
///
/// Records are owned by the storage collaborator and arrive as in-memory
/// snapshots; the computation crates never mutate them. Field names follow
/// the camelCase wire format the storage layer uses.
///
/// The two failure-prone fields decode leniently: a non-numeric `dueAmount`
/// becomes zero and an unparsable `renewalDate` becomes `None`, so a single
/// malformed record can never fail a whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Externally generated identifier, stable for the record's lifetime.
    pub id: String,
    pub company_name: String,
    #[serde(default, deserialize_with = "serde_ext::lenient_decimal")]
    pub due_amount: Decimal,
    #[serde(default, deserialize_with = "serde_ext::lenient_date")]
    pub renewal_date: Option<NaiveDate>,
    /// Open vocabulary; only "Active" and "Pending" carry meaning for the
    /// summary computations. See `ClientStatus::from_label`.
    #[serde(default)]
    pub client_status: String,
    #[serde(default)]
    pub products_used: Vec<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub agent_name: String,
}

impl ClientRecord {
    /// Checks the fields a record must carry to be usable at all.
    /// Form-level validation happens upstream; this is the last line.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.is_empty() {
            return Err(CoreError::InvalidField(
                "id".to_string(),
                "must not be empty".to_string(),
            ));
        }
        if self.company_name.is_empty() {
            return Err(CoreError::InvalidField(
                "companyName".to_string(),
                "must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A transaction from the ledger page (`Payment` / `Renewal` /
/// `New Registration` vocabulary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTransaction {
    pub id: String,
    #[serde(default)]
    pub record_no: String,
    /// Weak reference to a `ClientRecord::id`. A dangling reference degrades
    /// to an "N/A" display name on lookup; it is never an error.
    pub client_id: String,
    pub transaction_type: TransactionKind,
    #[serde(default, deserialize_with = "serde_ext::lenient_decimal")]
    pub amount: Decimal,
    #[serde(default, deserialize_with = "serde_ext::lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub agent_name: String,
    #[serde(default)]
    pub details: String,
}

/// A daybook entry (`income` / `expense` vocabulary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaybookEntry {
    pub id: String,
    #[serde(default, deserialize_with = "serde_ext::lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub software_name: String,
    #[serde(default)]
    pub payment_mode: String,
    #[serde(default, deserialize_with = "serde_ext::lenient_decimal")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub entry_type: DaybookEntryKind,
}
