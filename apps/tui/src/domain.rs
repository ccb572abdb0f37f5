use serde::{Deserialize, Serialize};

use crate::chart::color::Rgba;

/// Highest rating a player can receive for a single attribute.
pub const MAX_RATING: u8 = 5;

/// Rating value meaning "not rated yet".
pub const UNRATED: u8 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    #[default]
    Cb,
    Cdm,
    Cam,
    Gk,
    St,
}

/// Display metadata attached to each position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionInfo {
    pub label: &'static str,
    pub color: Rgba,
}

const POSITION_INFO: [PositionInfo; 5] = [
    PositionInfo {
        label: "Center Back",
        color: Rgba::opaque(0x25, 0x63, 0xeb),
    },
    PositionInfo {
        label: "Defensive Midfielder",
        color: Rgba::opaque(0x05, 0x96, 0x69),
    },
    PositionInfo {
        label: "Attacking Midfielder",
        color: Rgba::opaque(0xd9, 0x77, 0x06),
    },
    PositionInfo {
        label: "Goalkeeper",
        color: Rgba::opaque(0x7c, 0x3a, 0xed),
    },
    PositionInfo {
        label: "Striker",
        color: Rgba::opaque(0xdc, 0x26, 0x26),
    },
];

impl Position {
    pub const ALL: [Self; 5] = [Self::Cb, Self::Cdm, Self::Cam, Self::Gk, Self::St];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cb => "CB",
            Self::Cdm => "CDM",
            Self::Cam => "CAM",
            Self::Gk => "GK",
            Self::St => "ST",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Cb => 0,
            Self::Cdm => 1,
            Self::Cam => 2,
            Self::Gk => 3,
            Self::St => 4,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Cb),
            1 => Some(Self::Cdm),
            2 => Some(Self::Cam),
            3 => Some(Self::Gk),
            4 => Some(Self::St),
            _ => None,
        }
    }

    pub const fn info(self) -> PositionInfo {
        POSITION_INFO[self.index()]
    }

    pub const fn label(self) -> &'static str {
        self.info().label
    }

    pub const fn color(self) -> Rgba {
        self.info().color
    }
}

/// One of the two five-attribute partitions charted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeGroup {
    Mental,
    Technical,
}

impl AttributeGroup {
    pub const ALL: [Self; 2] = [Self::Mental, Self::Technical];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mental => "mental",
            Self::Technical => "technical",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Mental => "Mental Skills",
            Self::Technical => "Technical Skills",
        }
    }

    /// Attributes of the group in chart axis order.
    pub const fn attributes(self) -> [Attribute; 5] {
        match self {
            Self::Mental => [
                Attribute::Mental,
                Attribute::Coachability,
                Attribute::Availability,
                Attribute::Communication,
                Attribute::Maturity,
            ],
            Self::Technical => [
                Attribute::Passing,
                Attribute::Positioning,
                Attribute::DecisionMaking,
                Attribute::Mechanics,
                Attribute::Awareness,
            ],
        }
    }

    /// Translucent polygon fill for the group.
    pub const fn fill(self) -> Rgba {
        match self {
            Self::Mental => Rgba::new(79, 70, 229, 0.3),
            Self::Technical => Rgba::new(124, 58, 237, 0.3),
        }
    }

    /// Opaque stroke for the polygon outline and point markers.
    pub const fn stroke(self) -> Rgba {
        match self {
            Self::Mental => Rgba::opaque(0x4f, 0x46, 0xe5),
            Self::Technical => Rgba::opaque(0x7c, 0x3a, 0xed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Mental,
    Coachability,
    Availability,
    Communication,
    Maturity,
    Passing,
    Positioning,
    DecisionMaking,
    Mechanics,
    Awareness,
}

impl Attribute {
    pub const ALL: [Self; 10] = [
        Self::Mental,
        Self::Coachability,
        Self::Availability,
        Self::Communication,
        Self::Maturity,
        Self::Passing,
        Self::Positioning,
        Self::DecisionMaking,
        Self::Mechanics,
        Self::Awareness,
    ];

    /// Key used in the JSON roster format.
    /// Slot of the attribute in [`Attribute::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Mental => 0,
            Self::Coachability => 1,
            Self::Availability => 2,
            Self::Communication => 3,
            Self::Maturity => 4,
            Self::Passing => 5,
            Self::Positioning => 6,
            Self::DecisionMaking => 7,
            Self::Mechanics => 8,
            Self::Awareness => 9,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Mental => "mental",
            Self::Coachability => "coachability",
            Self::Availability => "availability",
            Self::Communication => "communication",
            Self::Maturity => "maturity",
            Self::Passing => "passing",
            Self::Positioning => "positioning",
            Self::DecisionMaking => "decisionMaking",
            Self::Mechanics => "mechanics",
            Self::Awareness => "awareness",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mental => "Mental",
            Self::Coachability => "Coachability",
            Self::Availability => "Availability",
            Self::Communication => "Communication",
            Self::Maturity => "Maturity",
            Self::Passing => "Passing",
            Self::Positioning => "Positioning",
            Self::DecisionMaking => "Decision Making",
            Self::Mechanics => "Mechanics",
            Self::Awareness => "Awareness",
        }
    }

    pub const fn group(self) -> AttributeGroup {
        match self {
            Self::Mental
            | Self::Coachability
            | Self::Availability
            | Self::Communication
            | Self::Maturity => AttributeGroup::Mental,
            Self::Passing
            | Self::Positioning
            | Self::DecisionMaking
            | Self::Mechanics
            | Self::Awareness => AttributeGroup::Technical,
        }
    }

    pub const fn get(self, record: &PlayerRecord) -> u8 {
        match self {
            Self::Mental => record.mental,
            Self::Coachability => record.coachability,
            Self::Availability => record.availability,
            Self::Communication => record.communication,
            Self::Maturity => record.maturity,
            Self::Passing => record.passing,
            Self::Positioning => record.positioning,
            Self::DecisionMaking => record.decision_making,
            Self::Mechanics => record.mechanics,
            Self::Awareness => record.awareness,
        }
    }

    pub fn set(self, record: &mut PlayerRecord, value: u8) {
        let slot = match self {
            Self::Mental => &mut record.mental,
            Self::Coachability => &mut record.coachability,
            Self::Availability => &mut record.availability,
            Self::Communication => &mut record.communication,
            Self::Maturity => &mut record.maturity,
            Self::Passing => &mut record.passing,
            Self::Positioning => &mut record.positioning,
            Self::DecisionMaking => &mut record.decision_making,
            Self::Mechanics => &mut record.mechanics,
            Self::Awareness => &mut record.awareness,
        };
        *slot = value;
    }
}

/// A rated player as stored in the roster and exchanged in JSON files.
///
/// Ratings missing from an imported document default to [`UNRATED`], and a
/// missing position defaults to centre back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub mental: u8,
    #[serde(default)]
    pub coachability: u8,
    #[serde(default)]
    pub availability: u8,
    #[serde(default)]
    pub communication: u8,
    #[serde(default)]
    pub maturity: u8,
    #[serde(default)]
    pub passing: u8,
    #[serde(default)]
    pub positioning: u8,
    #[serde(default)]
    pub decision_making: u8,
    #[serde(default)]
    pub mechanics: u8,
    #[serde(default)]
    pub awareness: u8,
}

impl PlayerRecord {
    /// Record with every attribute set to `rating`.
    pub fn uniform(name: impl Into<String>, position: Position, rating: u8) -> Self {
        let mut record = Self {
            name: name.into(),
            position,
            ..Self::default()
        };
        for attribute in Attribute::ALL {
            attribute.set(&mut record, rating);
        }
        record
    }

    pub fn ratings(&self) -> [u8; 10] {
        Attribute::ALL.map(|attribute| attribute.get(self))
    }

    pub fn group_ratings(&self, group: AttributeGroup) -> [u8; 5] {
        group.attributes().map(|attribute| attribute.get(self))
    }

    /// Attributes still carrying the unrated sentinel.
    pub fn unrated(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|attribute| attribute.get(self) == UNRATED)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.ratings().iter().all(|rating| *rating != UNRATED)
    }

    /// Lowercased name used as the roster key.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_table_is_keyed_by_variant() {
        for (index, position) in Position::ALL.iter().enumerate() {
            assert_eq!(Position::from_index(index), Some(*position));
        }
        assert_eq!(Position::Gk.label(), "Goalkeeper");
        assert_eq!(Position::from_index(Position::ALL.len()), None);
    }

    #[test]
    fn attribute_index_matches_table_order() {
        for (index, attribute) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attribute.index(), index);
        }
    }

    #[test]
    fn group_attributes_follow_axis_order() {
        let labels = AttributeGroup::Technical
            .attributes()
            .map(Attribute::label);
        assert_eq!(
            labels,
            ["Passing", "Positioning", "Decision Making", "Mechanics", "Awareness"]
        );
        for group in AttributeGroup::ALL {
            assert!(group.attributes().iter().all(|a| a.group() == group));
        }
    }

    #[test]
    fn record_uses_camel_case_json_keys() {
        let record = PlayerRecord::uniform("Sam", Position::St, 3);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["position"], "ST");
        assert_eq!(value["decisionMaking"], 3);
        for attribute in Attribute::ALL {
            assert_eq!(value[attribute.key()], 3, "{}", attribute.key());
        }
    }

    #[test]
    fn legacy_record_without_position_or_ratings_parses() {
        let record: PlayerRecord =
            serde_json::from_str(r#"{"name":"Legacy","mental":4}"#).unwrap();

        assert_eq!(record.position, Position::Cb);
        assert_eq!(record.mental, 4);
        assert!(!record.is_complete());
        assert_eq!(record.unrated().len(), 9);
    }

    #[test]
    fn completeness_requires_every_rating() {
        let mut record = PlayerRecord::uniform("Robin", Position::Gk, 2);
        assert!(record.is_complete());

        Attribute::Awareness.set(&mut record, UNRATED);
        assert!(!record.is_complete());
        assert_eq!(record.unrated(), vec![Attribute::Awareness]);
    }
}
