mod engine;

pub use engine::{Capture, Match, QueryEngine, FUNCTIONS_QUERY, GO};
