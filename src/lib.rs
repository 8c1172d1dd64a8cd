pub mod error;
pub mod evaluation;
pub mod nearest_neighbor;
pub mod parse;
pub mod report;
