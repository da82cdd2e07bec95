mod advisory;
mod ranking;
mod scoring;
#[cfg(test)]
mod tests;

pub use advisory::fetch_advisory;
pub use ranking::rank;
pub use scoring::{objective_score, score_fields};
