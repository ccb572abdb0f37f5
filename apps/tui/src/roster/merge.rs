use std::collections::HashMap;

use crate::domain::PlayerRecord;

/// Result of reconciling an imported batch with the current roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub roster: Vec<PlayerRecord>,
    pub added: usize,
    pub updated: usize,
}

impl MergeOutcome {
    pub const fn is_empty(&self) -> bool {
        self.added == 0 && self.updated == 0
    }

    /// Notice shown to the user after an import.
    pub fn summary(&self) -> String {
        let mut messages = Vec::new();
        if self.added > 0 {
            messages.push(format!("{} new player(s) added", self.added));
        }
        if self.updated > 0 {
            messages.push(format!("{} player(s) updated", self.updated));
        }

        if messages.is_empty() {
            "No players were imported".to_string()
        } else {
            messages.join(", ")
        }
    }
}

/// Upsert `incoming` into `current`, keyed by lowercase name.
///
/// Matches are looked up against the working list, so a later entry in
/// `incoming` overwrites an earlier one with the same name. Existing
/// entries keep their slot; new entries are appended in input order.
pub fn merge_roster(current: &[PlayerRecord], incoming: Vec<PlayerRecord>) -> MergeOutcome {
    let mut roster = current.to_vec();
    let mut index: HashMap<String, usize> = HashMap::with_capacity(roster.len() + incoming.len());
    for (position, record) in roster.iter().enumerate() {
        index.entry(record.key()).or_insert(position);
    }

    let mut added = 0;
    let mut updated = 0;

    for record in incoming {
        let key = record.key();
        if let Some(&slot) = index.get(&key) {
            roster[slot] = record;
            updated += 1;
        } else {
            index.insert(key, roster.len());
            roster.push(record);
            added += 1;
        }
    }

    MergeOutcome {
        roster,
        added,
        updated,
    }
}
