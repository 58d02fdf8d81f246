use crate::connection::ConnectionCard;
use serde::{Deserialize, Serialize};

/// The connections-page filter controls.
///
/// Every field is optional in the sense that an empty string passes
/// everything, matching the page's "All Locations" / "All Statuses" defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionFilter {
    /// Case-insensitive term matched against company name or contact person.
    pub search: String,
    /// Substring match against the card's location.
    pub location: String,
    /// Exact match against the card's status label.
    pub status: String,
}

impl ConnectionFilter {
    /// Tests one card against every active control.
    pub fn matches(&self, card: &ConnectionCard) -> bool {
        let term = self.search.to_lowercase();
        let search_hit = term.is_empty()
            || card.company_name.to_lowercase().contains(&term)
            || card.contact_person.to_lowercase().contains(&term);

        let location_hit = self.location.is_empty() || card.location.contains(&self.location);
        let status_hit = self.status.is_empty() || card.status == self.status;

        search_hit && location_hit && status_hit
    }
}

/// Applies a filter to a card list, preserving order.
pub fn filter_connections<'a>(
    cards: &'a [ConnectionCard],
    filter: &ConnectionFilter,
) -> Vec<&'a ConnectionCard> {
    cards.iter().filter(|card| filter.matches(card)).collect()
}
