use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_backend_env() {
    unsafe {
        std::env::remove_var("ZYMATRIC_BACKEND_URL");
        std::env::remove_var("ZYMATRIC_BACKEND_ANON_KEY");
        std::env::remove_var("ZYMATRIC_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("ZYMATRIC_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn new_trims_trailing_slash() {
    let config = BackendConfig::new("https://example.test/", "anon");
    assert_eq!(config.base_url, "https://example.test");
    assert_eq!(config.anon_key, "anon");
    assert_eq!(config.timeouts, BackendTimeouts::default());
}

#[test]
fn from_env_requires_url_and_key() {
    unsafe { clear_backend_env() };

    let err = BackendConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("ZYMATRIC_BACKEND_URL"));

    unsafe { std::env::set_var("ZYMATRIC_BACKEND_URL", "https://example.test") };
    let err = BackendConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("ZYMATRIC_BACKEND_ANON_KEY"));

    unsafe { clear_backend_env() };
}

#[test]
fn from_env_reads_overrides() {
    unsafe {
        clear_backend_env();
        std::env::set_var("ZYMATRIC_BACKEND_URL", "https://example.test/");
        std::env::set_var("ZYMATRIC_BACKEND_ANON_KEY", "anon-key");
        std::env::set_var("ZYMATRIC_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("ZYMATRIC_CONNECT_TIMEOUT_SECS", "7");
    }

    let config = BackendConfig::from_env().unwrap();
    assert_eq!(config.base_url, "https://example.test");
    assert_eq!(config.anon_key, "anon-key");
    assert_eq!(config.timeouts, BackendTimeouts { request_secs: 42, connect_secs: 7 });

    unsafe { clear_backend_env() };
}

#[test]
fn from_env_ignores_malformed_timeouts() {
    unsafe {
        clear_backend_env();
        std::env::set_var("ZYMATRIC_BACKEND_URL", "https://example.test");
        std::env::set_var("ZYMATRIC_BACKEND_ANON_KEY", "anon-key");
        std::env::set_var("ZYMATRIC_REQUEST_TIMEOUT_SECS", "not-a-number");
    }

    let config = BackendConfig::from_env().unwrap();
    assert_eq!(config.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

    unsafe { clear_backend_env() };
}

#[test]
fn cursor_style_round_trips_through_css_names() {
    for style in [
        CursorStyle::Default,
        CursorStyle::Pointer,
        CursorStyle::Crosshair,
        CursorStyle::Text,
        CursorStyle::Move,
    ] {
        assert_eq!(CursorStyle::parse(style.as_css()), Some(style));
    }
    assert_eq!(CursorStyle::parse(" Pointer "), Some(CursorStyle::Pointer));
    assert_eq!(CursorStyle::parse("wait"), None);
}

#[test]
fn preferences_default_matches_site_defaults() {
    let prefs = Preferences::default();
    assert_eq!(prefs.cursor, CursorStyle::Default);
    assert!(prefs.display_name.is_empty());
    assert!(!prefs.dark_mode);
}

#[test]
fn preferences_serde_round_trip_and_missing_fields() {
    let prefs = Preferences {
        cursor: CursorStyle::Crosshair,
        display_name: "Ada".to_owned(),
        dark_mode: true,
    };
    let json = serde_json::to_string(&prefs).unwrap();
    let restored: Preferences = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, prefs);

    // Older persisted blobs may omit fields entirely.
    let sparse: Preferences = serde_json::from_str("{}").unwrap();
    assert_eq!(sparse, Preferences::default());
}
