use super::*;

#[test]
fn defaults_applied_when_sources_are_empty() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert!(settings.cache.enabled);
    assert_eq!(settings.cache.directory, PathBuf::from("cache/data"));
    assert_eq!(settings.cache.default_ttl, Duration::from_secs(3600));
    assert_eq!(
        settings.cache.ttl_table.get("post_detail"),
        Some(&Duration::from_secs(1800))
    );
    assert_eq!(
        settings.cache.ttl_table.get("user_posting_limit"),
        Some(&Duration::from_secs(300))
    );

    let limits = &settings.login_rate_limit;
    assert_eq!(limits.window, Duration::from_secs(60));
    assert_eq!(limits.ip_threshold, 30);
    assert_eq!(limits.user_threshold, 10);
    assert_eq!(limits.block, Duration::from_secs(300));
    assert_eq!(limits.block_delay_min, Duration::from_millis(150));
    assert_eq!(limits.block_delay_max, Duration::from_millis(300));
    assert_eq!(limits.fail_delay_min, Duration::from_millis(200));
    assert_eq!(limits.fail_delay_max, Duration::from_millis(500));

    assert_eq!(settings.logging.level, LevelFilter::INFO);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
}

#[test]
fn ttl_entries_extend_and_override_the_default_table() {
    let mut raw = RawSettings::default();
    let mut table = HashMap::new();
    table.insert("gallery".to_string(), 120);
    table.insert("user".to_string(), 60);
    raw.cache.ttl_seconds = Some(table);

    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(
        settings.cache.ttl_table.get("gallery"),
        Some(&Duration::from_secs(120))
    );
    assert_eq!(
        settings.cache.ttl_table.get("user"),
        Some(&Duration::from_secs(60))
    );
    // Untouched defaults survive.
    assert_eq!(
        settings.cache.ttl_table.get("posts_meta"),
        Some(&Duration::from_secs(600))
    );
}

#[test]
fn zero_default_ttl_is_rejected() {
    let mut raw = RawSettings::default();
    raw.cache.default_ttl_seconds = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero TTL must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "cache.default_ttl_seconds",
            ..
        }
    ));
}

#[test]
fn zero_domain_ttl_is_rejected() {
    let mut raw = RawSettings::default();
    let mut table = HashMap::new();
    table.insert("user".to_string(), 0);
    raw.cache.ttl_seconds = Some(table);

    let err = Settings::from_raw(raw).expect_err("zero domain TTL must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "cache.ttl_seconds",
            ..
        }
    ));
}

#[test]
fn zero_login_window_is_rejected() {
    let mut raw = RawSettings::default();
    raw.login_rate_limit.window_seconds = Some(0);

    let err = Settings::from_raw(raw).expect_err("zero window must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "login_rate_limit.window_seconds",
            ..
        }
    ));
}

#[test]
fn inverted_delay_range_is_rejected() {
    let mut raw = RawSettings::default();
    raw.login_rate_limit.block_delay_ms_min = Some(400);
    raw.login_rate_limit.block_delay_ms_max = Some(100);

    let err = Settings::from_raw(raw).expect_err("inverted range must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "login_rate_limit.block_delay_ms_min",
            ..
        }
    ));
}

#[test]
fn reference_deployment_overrides_resolve() {
    let mut raw = RawSettings::default();
    raw.login_rate_limit.window_seconds = Some(60);
    raw.login_rate_limit.ip_threshold = Some(15);
    raw.login_rate_limit.user_threshold = Some(5);
    raw.login_rate_limit.block_seconds = Some(600);

    let limits = Settings::from_raw(raw)
        .expect("valid settings")
        .login_rate_limit;
    assert_eq!(limits.ip_threshold, 15);
    assert_eq!(limits.user_threshold, 5);
    assert_eq!(limits.block, Duration::from_secs(600));
}

#[test]
fn json_logging_selects_json_format() {
    let mut raw = RawSettings::default();
    raw.logging.json = Some(true);
    raw.logging.level = Some("debug".to_string());

    let settings = Settings::from_raw(raw).expect("valid settings");
    assert!(matches!(settings.logging.format, LogFormat::Json));
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
}

#[test]
fn unparseable_log_level_is_rejected() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("bad level must fail");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "logging.level",
            ..
        }
    ));
}
