use std::fmt;

use thiserror::Error;

use crate::domain::{normalize_name, Attribute, PlayerRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Player name is required")]
    Required,
    #[error("A player with this name already exists")]
    Duplicate,
}

/// Field-level problems that block a save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<NameError>,
    pub unrated: Vec<Attribute>,
}

impl FormErrors {
    pub const UNRATED_MESSAGE: &'static str = "You must rate all skills before saving";

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.unrated.is_empty()
    }

    pub fn general_message(&self) -> Option<&'static str> {
        (!self.unrated.is_empty()).then_some(Self::UNRATED_MESSAGE)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .name
            .map(|error| error.to_string())
            .into_iter()
            .chain(self.general_message().map(str::to_string))
            .collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

/// Validate `candidate` against `roster` and return the roster with it saved.
///
/// `editing` carries the original name of the record being edited; `None`
/// means the candidate is a new player. The stored name is trimmed.
pub fn save_player(
    roster: &[PlayerRecord],
    mut candidate: PlayerRecord,
    editing: Option<&str>,
) -> Result<Vec<PlayerRecord>, FormErrors> {
    candidate.name = candidate.name.trim().to_string();
    let editing_key = editing.map(normalize_name);

    let mut errors = FormErrors::default();

    if candidate.name.is_empty() {
        errors.name = Some(NameError::Required);
    } else {
        let key = candidate.key();
        let duplicate = roster.iter().any(|existing| {
            let existing_key = existing.key();
            existing_key == key && editing_key.as_deref() != Some(existing_key.as_str())
        });
        if duplicate {
            errors.name = Some(NameError::Duplicate);
        }
    }

    errors.unrated = candidate.unrated();

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut updated = roster.to_vec();
    let slot = editing_key
        .as_deref()
        .and_then(|key| updated.iter().position(|existing| existing.key() == key));

    match slot {
        Some(slot) => updated[slot] = candidate,
        None => updated.push(candidate),
    }

    Ok(updated)
}

/// Roster without the player called `name` (compared case-insensitively).
pub fn delete_player(roster: &[PlayerRecord], name: &str) -> Vec<PlayerRecord> {
    let key = normalize_name(name);
    roster
        .iter()
        .filter(|record| record.key() != key)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Position, UNRATED};

    fn player(name: &str, rating: u8) -> PlayerRecord {
        PlayerRecord::uniform(name, Position::Cdm, rating)
    }

    #[test]
    fn new_player_is_appended_with_trimmed_name() {
        let roster = vec![player("Sam", 3)];
        let saved = save_player(&roster, player("  Robin ", 4), None).unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].name, "Robin");
    }

    #[test]
    fn blank_name_is_required() {
        let errors = save_player(&[], player("   ", 4), None).unwrap_err();

        assert_eq!(errors.name, Some(NameError::Required));
        assert!(errors.unrated.is_empty());
        assert_eq!(errors.to_string(), "Player name is required");
    }

    #[test]
    fn duplicate_name_is_rejected_case_insensitively() {
        let roster = vec![player("Sam", 3)];
        let errors = save_player(&roster, player("SAM", 4), None).unwrap_err();

        assert_eq!(errors.name, Some(NameError::Duplicate));
    }

    #[test]
    fn every_attribute_must_be_rated() {
        let mut candidate = player("Kim", 4);
        Attribute::Mechanics.set(&mut candidate, UNRATED);
        Attribute::Maturity.set(&mut candidate, UNRATED);

        let errors = save_player(&[], candidate, None).unwrap_err();

        assert_eq!(errors.name, None);
        assert_eq!(errors.unrated, vec![Attribute::Maturity, Attribute::Mechanics]);
        assert_eq!(errors.general_message(), Some(FormErrors::UNRATED_MESSAGE));
    }

    #[test]
    fn errors_are_reported_together() {
        let errors = save_player(&[], player("", UNRATED), None).unwrap_err();

        assert_eq!(errors.name, Some(NameError::Required));
        assert_eq!(errors.unrated.len(), 10);
        assert_eq!(
            errors.to_string(),
            "Player name is required; You must rate all skills before saving"
        );
    }

    #[test]
    fn editing_replaces_in_place_and_may_keep_the_name() {
        let roster = vec![player("Sam", 3), player("Robin", 4)];
        let saved = save_player(&roster, player("sam", 5), Some("Sam")).unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0], player("sam", 5));
        assert_eq!(saved[1], player("Robin", 4));
    }

    #[test]
    fn editing_cannot_take_another_players_name() {
        let roster = vec![player("Sam", 3), player("Robin", 4)];
        let errors = save_player(&roster, player("robin", 5), Some("Sam")).unwrap_err();

        assert_eq!(errors.name, Some(NameError::Duplicate));
    }

    #[test]
    fn editing_a_vanished_player_appends() {
        let roster = vec![player("Sam", 3)];
        let saved = save_player(&roster, player("Ghost", 2), Some("Ghost")).unwrap();

        assert_eq!(saved.len(), 2);
        assert_eq!(saved[1].name, "Ghost");
    }

    #[test]
    fn delete_matches_case_insensitively() {
        let roster = vec![player("Sam", 3), player("Robin", 4)];

        assert_eq!(delete_player(&roster, "SAM"), vec![player("Robin", 4)]);
        assert_eq!(delete_player(&roster, "Nobody"), roster);
    }
}
