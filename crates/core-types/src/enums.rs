use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The recognized client lifecycle states.
///
/// Client records carry their status as a free-form string; this enum only
/// covers the labels the dashboard actually distinguishes. Anything that does
/// not parse through [`ClientStatus::from_label`] is treated as inactive by
/// the summary computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Pending,
    Inactive,
}

impl ClientStatus {
    /// Parses an exact status label. Unrecognized labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Active" => Some(ClientStatus::Active),
            "Pending" => Some(ClientStatus::Pending),
            "Inactive" => Some(ClientStatus::Inactive),
            _ => None,
        }
    }
}

/// The transaction-ledger vocabulary.
///
/// This is deliberately a separate enumeration from [`DaybookEntryKind`]: the
/// ledger and the daybook grew independent type vocabularies and unifying
/// them would invent semantics neither view has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Payment,
    Renewal,
    #[serde(rename = "New Registration")]
    NewRegistration,
}

impl TransactionKind {
    /// Applies this transaction to a client's outstanding balance.
    ///
    /// A `Payment` reduces the due amount, a `Renewal` restarts the balance
    /// at the renewal price, and a `NewRegistration` leaves it untouched.
    pub fn apply_to_due(&self, current_due: Decimal, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Payment => current_due - amount,
            TransactionKind::Renewal => amount,
            TransactionKind::NewRegistration => current_due,
        }
    }
}

/// The daybook vocabulary: every entry is either money in or money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DaybookEntryKind {
    Income,
    Expense,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn status_labels_parse_exactly() {
        assert_eq!(ClientStatus::from_label("Active"), Some(ClientStatus::Active));
        assert_eq!(ClientStatus::from_label("Pending"), Some(ClientStatus::Pending));
        assert_eq!(ClientStatus::from_label("Inactive"), Some(ClientStatus::Inactive));
        assert_eq!(ClientStatus::from_label("active"), None);
        assert_eq!(ClientStatus::from_label("Suspended"), None);
        assert_eq!(ClientStatus::from_label(""), None);
    }

    #[test]
    fn payment_reduces_due_balance() {
        let due = TransactionKind::Payment.apply_to_due(dec!(1250), dec!(1000));
        assert_eq!(due, dec!(250));
    }

    #[test]
    fn renewal_restarts_due_balance() {
        let due = TransactionKind::Renewal.apply_to_due(dec!(120), dec!(800));
        assert_eq!(due, dec!(800));
    }

    #[test]
    fn registration_leaves_due_balance_unchanged() {
        let due = TransactionKind::NewRegistration.apply_to_due(dec!(75), dec!(500));
        assert_eq!(due, dec!(75));
    }

    #[test]
    fn transaction_kind_uses_spaced_label() {
        let json = serde_json::to_string(&TransactionKind::NewRegistration).unwrap();
        assert_eq!(json, r#""New Registration""#);
        let kind: TransactionKind = serde_json::from_str(r#""New Registration""#).unwrap();
        assert_eq!(kind, TransactionKind::NewRegistration);
    }

    #[test]
    fn daybook_kind_uses_lowercase_labels() {
        assert_eq!(serde_json::to_string(&DaybookEntryKind::Income).unwrap(), r#""income""#);
        let kind: DaybookEntryKind = serde_json::from_str(r#""expense""#).unwrap();
        assert_eq!(kind, DaybookEntryKind::Expense);
    }
}
