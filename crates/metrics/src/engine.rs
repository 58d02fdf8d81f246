use crate::error::MetricsError;
use crate::report::{
    ClientSummary, DaybookTotals, LedgerSummary, OverdueEntry, RenewalBuckets, Urgency,
};
use crate::window::DaybookWindow;
use chrono::{Duration, NaiveDate};
use core_types::{ClientRecord, ClientStatus, DaybookEntry, DaybookEntryKind, LedgerTransaction,
    TransactionKind};
use rust_decimal::Decimal;
use tracing::debug;

/// The horizon used by the dashboard's "Pending Renewals" card.
pub const DEFAULT_RENEWAL_HORIZON_DAYS: i64 = 30;

/// A stateless calculator for deriving dashboard metrics from record snapshots.
///
/// Every method is a pure function of its inputs plus an explicit reference
/// date. The engine never mutates a record and never reads the system clock,
/// so concurrent callers are inherently safe and every threshold is
/// deterministic under test.
#[derive(Debug, Default)]
pub struct MetricsEngine {}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the headline client numbers for the dashboard cards.
    ///
    /// Status counting matches the dashboard's labels exactly: "Active" and
    /// "Pending" are recognized, and everything else, including unrecognized
    /// labels, lands in the inactive bucket. The due total sums every record
    /// regardless of status.
    pub fn client_summary(&self, clients: &[ClientRecord]) -> ClientSummary {
        debug!(clients = clients.len(), "computing client summary");
        let mut summary = ClientSummary::new();
        summary.total = clients.len();

        for client in clients {
            match ClientStatus::from_label(&client.client_status) {
                Some(ClientStatus::Active) => summary.active_count += 1,
                Some(ClientStatus::Pending) => summary.pending_count += 1,
                _ => {}
            }

            summary.total_due_amount += client.due_amount;
            if client.due_amount > Decimal::ZERO {
                summary.clients_with_due += 1;
            }
        }

        summary.inactive_count = summary.total - summary.active_count - summary.pending_count;
        summary
    }

    /// Returns the clients whose renewal falls in `[today, today + 30 days)`.
    ///
    /// The lower bound is inclusive and the upper bound exclusive: a renewal
    /// dated exactly `today` is pending, one dated exactly thirty days out is
    /// not yet. Records without a parseable renewal date are skipped, and the
    /// input order is preserved.
    pub fn renewal_window<'a>(
        &self,
        clients: &'a [ClientRecord],
        today: NaiveDate,
    ) -> Vec<&'a ClientRecord> {
        self.filter_renewals(clients, today, DEFAULT_RENEWAL_HORIZON_DAYS)
    }

    /// Like [`MetricsEngine::renewal_window`] with a caller-chosen horizon.
    ///
    /// A negative horizon is a contract violation, not a window.
    pub fn renewal_window_within<'a>(
        &self,
        clients: &'a [ClientRecord],
        today: NaiveDate,
        horizon_days: i64,
    ) -> Result<Vec<&'a ClientRecord>, MetricsError> {
        if horizon_days < 0 {
            return Err(MetricsError::InvalidHorizon(horizon_days));
        }
        Ok(self.filter_renewals(clients, today, horizon_days))
    }

    fn filter_renewals<'a>(
        &self,
        clients: &'a [ClientRecord],
        today: NaiveDate,
        horizon_days: i64,
    ) -> Vec<&'a ClientRecord> {
        let end = today + Duration::days(horizon_days);
        clients
            .iter()
            .filter(|client| {
                matches!(client.renewal_date, Some(date) if date >= today && date < end)
            })
            .collect()
    }

    /// Groups clients into urgent / upcoming / on-track renewal buckets.
    ///
    /// Days left is the whole-day calendar difference `renewal_date - today`;
    /// a past-due renewal has a negative count and classifies as urgent.
    /// Clients without a parseable renewal date appear in no bucket.
    pub fn renewal_buckets<'a>(
        &self,
        clients: &'a [ClientRecord],
        today: NaiveDate,
    ) -> RenewalBuckets<'a> {
        let mut buckets = RenewalBuckets::new();

        for client in clients {
            let Some(date) = client.renewal_date else {
                continue;
            };
            let days_left = (date - today).num_days();
            match Urgency::classify(days_left) {
                Urgency::Urgent => buckets.urgent.push(client),
                Urgency::Upcoming => buckets.upcoming.push(client),
                Urgency::OnTrack => buckets.on_track.push(client),
            }
        }

        buckets
    }

    /// Sums daybook income and expenses over one day/week/month window.
    ///
    /// Entries without a parseable date fall outside every window. An empty
    /// filtered set yields zeroes, never an error.
    pub fn daybook_totals(
        &self,
        entries: &[DaybookEntry],
        window: &DaybookWindow,
    ) -> DaybookTotals {
        debug!(entries = entries.len(), ?window, "computing daybook totals");
        let mut totals = DaybookTotals::new();

        for entry in entries {
            let Some(date) = entry.date else {
                continue;
            };
            if !window.contains(date) {
                continue;
            }
            match entry.entry_type {
                DaybookEntryKind::Income => totals.income += entry.amount,
                DaybookEntryKind::Expense => totals.expense += entry.amount,
            }
        }

        totals.net = totals.income - totals.expense;
        totals
    }

    /// Breaks the transaction ledger down by kind.
    pub fn ledger_summary(&self, transactions: &[LedgerTransaction]) -> LedgerSummary {
        let mut summary = LedgerSummary::new();
        summary.total_count = transactions.len();

        for txn in transactions {
            match txn.transaction_type {
                TransactionKind::Payment => {
                    summary.payment_count += 1;
                    summary.payment_total += txn.amount;
                }
                TransactionKind::Renewal => {
                    summary.renewal_count += 1;
                    summary.renewal_total += txn.amount;
                }
                TransactionKind::NewRegistration => {
                    summary.registration_count += 1;
                    summary.registration_total += txn.amount;
                }
            }
            summary.grand_total += txn.amount;
        }

        summary
    }

    /// Projects the "Overdue Payments" rows: every client carrying a
    /// positive due amount, in input order.
    pub fn overdue_entries(&self, clients: &[ClientRecord]) -> Vec<OverdueEntry> {
        clients
            .iter()
            .filter(|client| client.due_amount > Decimal::ZERO)
            .map(|client| OverdueEntry {
                client_id: client.id.clone(),
                company_name: client.company_name.clone(),
                due_amount: client.due_amount,
                due_date: client.renewal_date,
            })
            .collect()
    }

    /// Resolves a transaction's weak client reference to a display name.
    /// A dangling reference degrades to "N/A".
    pub fn client_display_name<'a>(
        &self,
        clients: &'a [ClientRecord],
        client_id: &str,
    ) -> &'a str {
        clients
            .iter()
            .find(|client| client.id == client_id)
            .map(|client| client.company_name.as_str())
            .unwrap_or("N/A")
    }

    /// Orders ledger transactions newest first. Undated transactions sort
    /// last, and the ordering is stable.
    pub fn sorted_by_date_desc<'a>(
        &self,
        transactions: &'a [LedgerTransaction],
    ) -> Vec<&'a LedgerTransaction> {
        let mut sorted: Vec<&LedgerTransaction> = transactions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// Filters the ledger by a case-insensitive search over the client id and
    /// the resolved company name. An empty term matches everything.
    pub fn search_ledger<'a>(
        &self,
        transactions: &'a [LedgerTransaction],
        clients: &[ClientRecord],
        term: &str,
    ) -> Vec<&'a LedgerTransaction> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return transactions.iter().collect();
        }

        transactions
            .iter()
            .filter(|txn| {
                let name = self.client_display_name(clients, &txn.client_id);
                txn.client_id.to_lowercase().contains(&term)
                    || name.to_lowercase().contains(&term)
            })
            .collect()
    }
}
