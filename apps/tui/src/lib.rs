// Export our modules for use in binaries and tests
pub mod chart;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod logging;
pub mod roster;

pub use domain::{Attribute, AttributeGroup, PlayerRecord, Position};
