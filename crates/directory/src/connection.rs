use core_types::ClientRecord;
use serde::{Deserialize, Serialize};

/// A contact card for the connections page.
///
/// Connections are a projection of client records, not an entity of their
/// own, so a card reuses the client's id and carries only display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionCard {
    pub id: String,
    pub company_name: String,
    pub contact_person: String,
    pub phone_number: String,
    pub location: String,
    /// The client's raw status label, passed through untouched.
    pub status: String,
    /// The client's products joined for display, e.g.
    /// "Financial Suite, Tax Manager".
    pub software_usage: String,
}

impl ConnectionCard {
    /// Projects one client record into a card.
    pub fn from_client(client: &ClientRecord) -> Self {
        Self {
            id: client.id.clone(),
            company_name: client.company_name.clone(),
            contact_person: client.full_name.clone(),
            phone_number: client.phone_no.clone(),
            location: client.address.clone(),
            status: client.client_status.clone(),
            software_usage: client.products_used.join(", "),
        }
    }
}

/// Projects a whole client snapshot, preserving input order.
pub fn connections_from(clients: &[ClientRecord]) -> Vec<ConnectionCard> {
    clients.iter().map(ConnectionCard::from_client).collect()
}
