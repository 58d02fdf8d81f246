use core_types::ClientRecord;

/// The default roster shown on the renewals page.
const DEFAULT_AGENTS: [&str; 5] = [
    "Sarah Johnson",
    "David Clark",
    "Linda Martinez",
    "Mark Wilson",
    "Jessica Adams",
];

/// A fixed list of agent names assigned round-robin for display.
///
/// Agent assignment is synthetic: it decorates lists for rendering and
/// carries no domain meaning, so it lives here rather than in the metrics
/// engine.
#[derive(Debug, Clone)]
pub struct AgentRoster {
    names: Vec<String>,
}

impl AgentRoster {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Round-robin assignment by position. An empty roster yields `None`.
    pub fn assign(&self, index: usize) -> Option<&str> {
        if self.names.is_empty() {
            return None;
        }
        Some(self.names[index % self.names.len()].as_str())
    }

    /// Pairs each client with an agent name for display. A client that
    /// already carries an agent name keeps it; the rest are filled in
    /// round-robin by position.
    pub fn decorate<'a>(&'a self, clients: &'a [ClientRecord]) -> Vec<(&'a ClientRecord, &'a str)> {
        clients
            .iter()
            .enumerate()
            .map(|(index, client)| {
                let agent = if client.agent_name.is_empty() {
                    self.assign(index).unwrap_or("")
                } else {
                    client.agent_name.as_str()
                };
                (client, agent)
            })
            .collect()
    }
}

impl Default for AgentRoster {
    fn default() -> Self {
        Self::new(DEFAULT_AGENTS.iter().map(|name| name.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn client(id: &str, agent: &str) -> ClientRecord {
        ClientRecord {
            id: id.to_string(),
            company_name: format!("{id} Co."),
            due_amount: Decimal::ZERO,
            renewal_date: None,
            client_status: String::new(),
            products_used: vec![],
            full_name: String::new(),
            district: String::new(),
            phone_no: String::new(),
            address: String::new(),
            agent_name: agent.to_string(),
        }
    }

    #[test]
    fn assignment_wraps_around_the_roster() {
        let roster = AgentRoster::default();
        assert_eq!(roster.assign(0), Some("Sarah Johnson"));
        assert_eq!(roster.assign(4), Some("Jessica Adams"));
        assert_eq!(roster.assign(5), Some("Sarah Johnson"));
        assert_eq!(roster.assign(11), Some("David Clark"));
    }

    #[test]
    fn empty_roster_assigns_nothing() {
        let roster = AgentRoster::new(vec![]);
        assert_eq!(roster.assign(0), None);
    }

    #[test]
    fn decorate_keeps_existing_agent_names() {
        let roster = AgentRoster::default();
        let clients = vec![client("CL001", ""), client("CL002", "Linda Martinez")];
        let decorated = roster.decorate(&clients);
        assert_eq!(decorated[0].1, "Sarah Johnson");
        assert_eq!(decorated[1].1, "Linda Martinez");
    }
}
