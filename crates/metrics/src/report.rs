use chrono::NaiveDate;
use core_types::ClientRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The headline numbers of the clients dashboard.
///
/// This struct is the output of `MetricsEngine::client_summary` and serves as
/// the data transfer object for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub total: usize,
    /// Count of records whose status label is exactly "Active".
    pub active_count: usize,
    /// Count of records whose status label is exactly "Pending".
    pub pending_count: usize,
    /// Everything else, including unrecognized status labels. Always equals
    /// `total - active_count - pending_count`.
    pub inactive_count: usize,
    /// Sum of `due_amount` over all records, with no status filter applied.
    pub total_due_amount: Decimal,
    /// Count of records with a strictly positive due amount.
    pub clients_with_due: usize,
}

impl ClientSummary {
    /// Creates a new, zeroed-out summary.
    pub fn new() -> Self {
        Self {
            total: 0,
            active_count: 0,
            pending_count: 0,
            inactive_count: 0,
            total_due_amount: Decimal::ZERO,
            clients_with_due: 0,
        }
    }
}

impl Default for ClientSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Classification of a renewal by the whole days remaining until it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Urgent,
    Upcoming,
    OnTrack,
}

impl Urgency {
    /// Buckets a days-remaining count.
    ///
    /// The urgent test is `<= 7`, which deliberately includes negative
    /// values: a renewal that is already overdue is the most urgent kind
    /// there is, not a separate category.
    pub fn classify(days_left: i64) -> Self {
        if days_left <= 7 {
            Urgency::Urgent
        } else if days_left <= 30 {
            Urgency::Upcoming
        } else {
            Urgency::OnTrack
        }
    }
}

/// Clients grouped by renewal urgency, borrowing from the input snapshot.
///
/// Records without a parseable renewal date appear in no bucket; they have
/// nothing coming due.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenewalBuckets<'a> {
    /// Due within 7 days, or already past due.
    pub urgent: Vec<&'a ClientRecord>,
    /// Due within 8 to 30 days.
    pub upcoming: Vec<&'a ClientRecord>,
    /// Due beyond 30 days.
    pub on_track: Vec<&'a ClientRecord>,
}

impl<'a> RenewalBuckets<'a> {
    pub fn new() -> Self {
        Self {
            urgent: Vec::new(),
            upcoming: Vec::new(),
            on_track: Vec::new(),
        }
    }
}

impl<'a> Default for RenewalBuckets<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Income and expense totals for one daybook window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaybookTotals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

impl DaybookTotals {
    pub fn new() -> Self {
        Self {
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }
}

impl Default for DaybookTotals {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-kind counts and amount totals for the transaction ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_count: usize,
    pub payment_count: usize,
    pub renewal_count: usize,
    pub registration_count: usize,
    pub payment_total: Decimal,
    pub renewal_total: Decimal,
    pub registration_total: Decimal,
    /// Sum of `amount` over the whole ledger, independent of kind.
    pub grand_total: Decimal,
}

impl LedgerSummary {
    pub fn new() -> Self {
        Self {
            total_count: 0,
            payment_count: 0,
            renewal_count: 0,
            registration_count: 0,
            payment_total: Decimal::ZERO,
            renewal_total: Decimal::ZERO,
            registration_total: Decimal::ZERO,
            grand_total: Decimal::ZERO,
        }
    }
}

impl Default for LedgerSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// One row of the dashboard's "Overdue Payments" breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverdueEntry {
    pub client_id: String,
    pub company_name: String,
    pub due_amount: Decimal,
    pub due_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_thresholds() {
        assert_eq!(Urgency::classify(0), Urgency::Urgent);
        assert_eq!(Urgency::classify(7), Urgency::Urgent);
        assert_eq!(Urgency::classify(8), Urgency::Upcoming);
        assert_eq!(Urgency::classify(30), Urgency::Upcoming);
        assert_eq!(Urgency::classify(31), Urgency::OnTrack);
    }

    #[test]
    fn past_due_renewals_are_urgent() {
        // Five days overdue is urgent, not a fourth bucket.
        assert_eq!(Urgency::classify(-5), Urgency::Urgent);
    }

    #[test]
    fn summary_round_trips_through_json() {
        let mut summary = ClientSummary::new();
        summary.total = 3;
        summary.active_count = 1;
        summary.pending_count = 1;
        summary.inactive_count = 1;

        let json = serde_json::to_string(&summary).unwrap();
        let back: ClientSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn zeroed_reports_start_empty() {
        let summary = ClientSummary::new();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.total_due_amount, Decimal::ZERO);

        let totals = DaybookTotals::new();
        assert_eq!(totals.net, Decimal::ZERO);

        let buckets = RenewalBuckets::new();
        assert!(buckets.urgent.is_empty());
        assert!(buckets.upcoming.is_empty());
        assert!(buckets.on_track.is_empty());
    }
}
