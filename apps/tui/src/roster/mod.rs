// Roster module for roster_radar
// Pure operations over the player list; callers own persistence

pub mod filter;
pub mod form;
pub mod merge;
pub mod score;
pub mod transfer;

pub use filter::{visible_indices, PositionFilter};
pub use form::{delete_player, save_player, FormErrors, NameError};
pub use merge::{merge_roster, MergeOutcome};
pub use score::{format_score, score};
pub use transfer::{export_file_name, export_json, parse_import, ImportError};
