use super::*;
use std::thread;

fn tiny_window(max_requests: usize) -> RequestThrottle {
    RequestThrottle::new(ThrottleConfig {
        max_requests,
        window: Duration::from_millis(50),
    })
}

#[test]
fn test_default_config() {
    let config = ThrottleConfig::default();
    assert_eq!(config.max_requests, 30);
    assert_eq!(config.window, Duration::from_secs(60));
}

#[test]
fn test_admits_up_to_limit() {
    let throttle = tiny_window(3);

    assert!(throttle.acquire().is_ok());
    assert!(throttle.acquire().is_ok());
    assert!(throttle.acquire().is_ok());
    assert!(throttle.acquire().is_err());
    assert_eq!(throttle.in_flight(), 3);
}

#[test]
fn test_denial_reports_bounded_wait() {
    let throttle = tiny_window(1);

    assert!(throttle.acquire().is_ok());
    let wait = throttle.acquire().unwrap_err();
    assert!(wait <= Duration::from_millis(50));
}

#[test]
fn test_window_frees_up_over_time() {
    let throttle = tiny_window(1);

    assert!(throttle.acquire().is_ok());
    assert!(throttle.acquire().is_err());

    thread::sleep(Duration::from_millis(60));
    assert!(throttle.acquire().is_ok());
}

#[test]
fn test_denied_requests_are_not_recorded() {
    let throttle = tiny_window(2);

    assert!(throttle.acquire().is_ok());
    assert!(throttle.acquire().is_ok());
    // Hammering a full window must not push the reopening further out.
    for _ in 0..10 {
        assert!(throttle.acquire().is_err());
    }
    assert_eq!(throttle.in_flight(), 2);

    thread::sleep(Duration::from_millis(60));
    assert!(throttle.acquire().is_ok());
}

#[test]
fn test_expired_entries_are_pruned() {
    let throttle = tiny_window(2);

    assert!(throttle.acquire().is_ok());
    thread::sleep(Duration::from_millis(60));

    assert!(throttle.acquire().is_ok());
    assert_eq!(throttle.in_flight(), 1);
}
