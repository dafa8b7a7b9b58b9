use crate::config::{Config, SourceKind};
use std::env;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: &[&str] = &[
    "SERVER_HOST",
    "SERVER_PORT",
    "WEB_ORIGIN",
    "GOOGLE_NEWS_RSS_URL",
    "YAHOO_FINANCE_RSS_URL",
    "NEWS_SOURCES",
    "NEWS_USER_AGENT",
    "NEWS_TIMEOUT_SECS",
    "NEWS_MAX_RETRIES",
    "CACHE_TTL_SECS",
    "CACHE_MAX_ENTRIES",
    "CACHE_SWEEP_INTERVAL_SECS",
];

fn clear_env() {
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.server.bind_addr(), "0.0.0.0:8000");
    assert_eq!(config.server.web_origin, "http://localhost:3002");
    assert_eq!(
        config.news.sources,
        vec![SourceKind::GoogleNews, SourceKind::YahooFinance]
    );
    assert_eq!(config.news.timeout_secs, 8);
    assert_eq!(config.cache.ttl_secs, 60);
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();
    unsafe {
        env::set_var("SERVER_PORT", "9100");
        env::set_var("WEB_ORIGIN", "https://pulse.example.com");
        env::set_var("NEWS_SOURCES", "yahoo,mock");
        env::set_var("CACHE_TTL_SECS", "5");
        env::set_var("CACHE_MAX_ENTRIES", "0");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(
        config.server.allowed_origins(),
        vec!["https://pulse.example.com", "http://localhost:3000"]
    );
    assert_eq!(
        config.news.sources,
        vec![SourceKind::YahooFinance, SourceKind::Mock]
    );
    assert_eq!(config.cache.ttl_secs, 5);
    assert_eq!(config.cache.max_entries(), None);

    clear_env();
}

#[test]
fn test_config_rejects_bad_values() {
    let _guard = get_env_lock().lock().unwrap();
    clear_env();

    unsafe { env::set_var("SERVER_PORT", "not-a-port") };
    assert!(Config::from_env().is_err());
    clear_env();

    unsafe { env::set_var("NEWS_SOURCES", "bing") };
    assert!(Config::from_env().is_err());
    clear_env();

    unsafe { env::set_var("CACHE_TTL_SECS", "-1") };
    assert!(Config::from_env().is_err());
    clear_env();
}
