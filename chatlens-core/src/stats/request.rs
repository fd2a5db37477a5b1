use crate::parse::{Message, MessageTable};

/// What a single statistics call looks at: the table and, optionally, one
/// participant whose messages the view is restricted to.
#[derive(Debug, Clone, Copy)]
pub struct StatsRequest<'a> {
    table: &'a MessageTable,
    participant: Option<&'a str>,
}

impl<'a> StatsRequest<'a> {
    pub fn new(table: &'a MessageTable, participant: Option<&'a str>) -> Self {
        Self { table, participant }
    }

    pub fn overall(table: &'a MessageTable) -> Self {
        Self::new(table, None)
    }

    pub fn for_participant(table: &'a MessageTable, participant: &'a str) -> Self {
        Self::new(table, Some(participant))
    }

    pub fn table(&self) -> &'a MessageTable {
        self.table
    }

    pub fn participant(&self) -> Option<&'a str> {
        self.participant
    }

    /// Messages selected by this request, in table order.
    pub fn messages(&self) -> impl Iterator<Item = &'a Message> + 'a {
        let participant = self.participant;
        self.table
            .iter()
            .filter(move |m| participant.is_none_or(|p| m.sender == p))
    }
}
