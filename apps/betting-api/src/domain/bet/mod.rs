// Bet domain module
// Bet entity, its value objects and the settlement rule

#![allow(clippy::module_inception)]

pub mod bet;
pub mod settlement;
pub mod value_objects;

pub use bet::Bet;
pub use settlement::settle;
pub use value_objects::{BetStatus, MatchStatus, Outcome};
