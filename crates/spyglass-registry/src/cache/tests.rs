//! Unit tests for the details cache and its freshness rules

use super::*;

fn sample_details(name: &str, version: &str) -> PackageDetails {
    let mut details = PackageDetails::new(name, version);
    details.description = format!("{name} for testing");
    details
}

#[test]
fn test_new_entry_is_fresh() {
    let entry = CacheEntry::new(sample_details("left-pad", "1.3.0"), DEFAULT_TTL);

    assert_eq!(entry.details.name, "left-pad");
    assert_eq!(entry.ttl, Duration::from_secs(300));
    assert!(entry.is_fresh());
}

#[test]
fn test_entry_age_starts_near_zero() {
    let entry = CacheEntry::new(sample_details("left-pad", "1.3.0"), DEFAULT_TTL);

    let age = entry.age().unwrap();
    assert!(age < Duration::from_millis(100));
}

#[test]
fn test_entry_stored_in_the_future_reads_stale() {
    // A clock behind stored_at cannot vouch for freshness.
    let entry = CacheEntry {
        details: sample_details("left-pad", "1.3.0"),
        stored_at: SystemTime::now() + Duration::from_secs(3600),
        ttl: DEFAULT_TTL,
    };

    assert!(!entry.is_fresh());
    assert!(entry.age().is_none());
}

#[test]
fn test_insert_then_get_round_trips() {
    let cache = DetailsCache::new();
    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.3.0"));

    let details = cache.get("left-pad").unwrap();
    assert_eq!(details.name, "left-pad");
    assert_eq!(details.version, "1.3.0");
}

#[test]
fn test_unknown_name_misses() {
    let cache = DetailsCache::new();

    assert!(cache.get("is-even").is_none());
}

#[test]
fn test_lookups_are_case_sensitive() {
    let cache = DetailsCache::new();
    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.3.0"));

    assert!(cache.get("Left-Pad").is_none());
}

#[test]
fn test_contains_fresh_tracks_inserts() {
    let cache = DetailsCache::new();
    assert!(!cache.contains_fresh("left-pad"));

    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.3.0"));
    assert!(cache.contains_fresh("left-pad"));
}

#[test]
fn test_stale_entry_reads_as_miss_but_stays() {
    let cache = DetailsCache::with_ttl(Duration::from_nanos(1));
    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.3.0"));
    std::thread::sleep(Duration::from_millis(1));

    assert!(cache.get("left-pad").is_none());
    assert!(!cache.contains_fresh("left-pad"));

    // The stale entry remains until the next insert overwrites it.
    let stats = cache.stats();
    assert_eq!(stats.total_entries, 1);
    assert_eq!(stats.stale_entries, 1);
}

#[test]
fn test_insert_replaces_previous_entry() {
    let cache = DetailsCache::new();
    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.0.0"));
    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.3.0"));

    let details = cache.get("left-pad").unwrap();
    assert_eq!(details.version, "1.3.0");
    assert_eq!(cache.stats().total_entries, 1);
}

#[test]
fn test_stats_count_entries_by_freshness() {
    let cache = DetailsCache::new();

    let empty = cache.stats();
    assert_eq!(empty.total_entries, 0);
    assert_eq!(empty.fresh_entries, 0);
    assert_eq!(empty.stale_entries, 0);

    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.3.0"));
    cache.insert("is-even".to_string(), sample_details("is-even", "1.0.0"));

    let stats = cache.stats();
    assert_eq!(stats.total_entries, 2);
    assert_eq!(stats.fresh_entries, 2);
    assert_eq!(stats.stale_entries, 0);
}

#[test]
fn test_clear_empties_the_cache() {
    let cache = DetailsCache::new();
    cache.insert("left-pad".to_string(), sample_details("left-pad", "1.3.0"));
    assert!(cache.contains_fresh("left-pad"));

    cache.clear();

    assert!(!cache.contains_fresh("left-pad"));
    assert_eq!(cache.stats().total_entries, 0);
}

#[test]
fn test_default_cache_starts_empty() {
    let cache = DetailsCache::default();

    assert_eq!(cache.stats().total_entries, 0);
}
