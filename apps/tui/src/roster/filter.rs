use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::domain::{PlayerRecord, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionFilter {
    #[default]
    All,
    Only(Position),
}

impl PositionFilter {
    /// Next filter in the cycle All → CB → CDM → CAM → GK → ST → All.
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Only(Position::Cb),
            Self::Only(position) => match Position::from_index(position.index() + 1) {
                Some(next) => Self::Only(next),
                None => Self::All,
            },
        }
    }

    pub fn matches(self, record: &PlayerRecord) -> bool {
        match self {
            Self::All => true,
            Self::Only(position) => record.position == position,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(position) => position.as_str(),
        }
    }
}

/// Indices of the roster entries passing `filter` and fuzzy-matching
/// `query`, in roster order. A blank query matches every name.
pub fn visible_indices(roster: &[PlayerRecord], filter: PositionFilter, query: &str) -> Vec<usize> {
    let query = query.trim();
    let matcher = SkimMatcherV2::default().ignore_case();

    roster
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .filter(|(_, record)| query.is_empty() || matcher.fuzzy_match(&record.name, query).is_some())
        .map(|(index, _)| index)
        .collect()
}
