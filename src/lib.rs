pub mod actions;
pub mod cards;
pub mod cli;
pub mod compose;
pub mod display;
pub mod error;
pub mod fallback;
pub mod index;
pub mod record;
pub mod report;
pub mod table;
pub mod tree;
