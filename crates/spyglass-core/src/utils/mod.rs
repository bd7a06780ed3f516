//! Small helpers shared across the Spyglass crates.

pub mod rank;

pub use rank::{format_count, popularity_score, synthetic_age, synthetic_downloads, synthetic_stars};
