// Match domain module
// Match entity, lifecycle status and the read view shared with the betting service

pub mod entity;
pub mod value_objects;
pub mod view;

pub use entity::Match;
pub use value_objects::MatchStatus;
pub use view::MatchView;
