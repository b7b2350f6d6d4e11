use wheel_core::*;

#[test]
fn defaults_reproduce_the_promotional_page() {
    let config = WidgetConfig::default();
    assert_eq!(config.wheel.spin_duration_ms, 6000.0);
    assert_eq!(config.wheel.base_rotation_deg, 1102.5);
    assert_eq!(config.wheel.tick_policy, TickPolicy::CatchUp);
    assert_eq!(config.wheel.alignment, Alignment::Absolute);
    assert!(!config.wheel.rearm_after_spin);
    assert_eq!(config.page.min_loading_ms, 1800.0);
    assert_eq!(config.page.loader_fade_ms, 400.0);
    assert!(config.page.enable_click_overlay);
    assert!(config.page.enable_audio);
    assert_eq!(config.page.claim_url, "https://freespinking.com");
    assert!(config.wheel.validate().is_ok());
}

#[test]
fn applies_overrides() {
    let mut config = WidgetConfig::default();
    config.apply("duration-ms", "3000").unwrap();
    config.apply("base-rotation", "1350").unwrap();
    config.apply("tick-policy", "single").unwrap();
    config.apply("rearm", "true").unwrap();
    config.apply("segments", "a:1, b:3").unwrap();
    config.apply("min-loading-ms", "2500").unwrap();
    config.apply("audio", "off").unwrap();
    config.apply("click-overlay", "0").unwrap();
    config.apply("claim-url", " https://example.com/claim ").unwrap();

    assert_eq!(config.wheel.spin_duration_ms, 3000.0);
    assert_eq!(config.wheel.base_rotation_deg, 1350.0);
    assert_eq!(config.wheel.tick_policy, TickPolicy::SinglePerFrame);
    assert!(config.wheel.rearm_after_spin);
    assert_eq!(config.wheel.segments.len(), 2);
    assert_eq!(config.page.min_loading_ms, 2500.0);
    assert!(!config.page.enable_audio);
    assert!(!config.page.enable_click_overlay);
    assert_eq!(config.page.claim_url, "https://example.com/claim");
}

#[test]
fn every_advertised_key_is_accepted() {
    let samples = [
        ("segments", "x:1"),
        ("duration-ms", "5000"),
        ("base-rotation", "1102.5"),
        ("alignment", "relative"),
        ("tick-policy", "catch-up"),
        ("rearm", "no"),
        ("min-loading-ms", "0"),
        ("min-icon-ms", "900"),
        ("fade-ms", "250"),
        ("click-overlay", "yes"),
        ("audio", "on"),
        ("claim-url", "https://example.com"),
        ("pre-spin-text", "Spin to win"),
    ];
    assert_eq!(samples.len(), SETTING_KEYS.len());
    let mut config = WidgetConfig::default();
    for (key, value) in samples {
        assert!(SETTING_KEYS.contains(&key));
        config.apply(key, value).unwrap();
    }
}

#[test]
fn rejected_values_leave_config_unchanged() {
    let mut config = WidgetConfig::default();
    let before = config.clone();

    assert_eq!(
        config.apply("duration-ms", "-5"),
        Err(WheelError::InvalidDuration(-5.0))
    );
    assert!(matches!(
        config.apply("duration-ms", "soon"),
        Err(WheelError::InvalidSetting { .. })
    ));
    assert!(matches!(
        config.apply("base-rotation", "100"),
        Err(WheelError::InvalidBaseRotation { .. })
    ));
    assert_eq!(
        config.apply("segments", "a:0"),
        Err(WheelError::ZeroTotalWeight)
    );
    assert!(matches!(
        config.apply("audio", "maybe"),
        Err(WheelError::InvalidSetting { .. })
    ));
    assert!(matches!(
        config.apply("min-loading-ms", "-1"),
        Err(WheelError::InvalidSetting { .. })
    ));
    assert_eq!(
        config.apply("colour", "red"),
        Err(WheelError::UnknownSetting("colour".into()))
    );
    assert_eq!(config, before);
}

#[test]
fn base_rotation_floor_depends_on_alignment() {
    let mut config = WidgetConfig::default();
    // 400° still moves every slice forward, but not by a full turn
    assert!(config.apply("base-rotation", "400").is_err());
    config.apply("alignment", "relative").unwrap();
    config.apply("base-rotation", "400").unwrap();
    assert!(matches!(
        config.apply("alignment", "absolute"),
        Err(WheelError::InvalidBaseRotation { .. })
    ));
    assert_eq!(config.wheel.alignment, Alignment::Relative);
}

#[test]
fn base_rotation_is_capped() {
    let huge = WheelConfig {
        base_rotation_deg: 1e12,
        ..WheelConfig::default()
    };
    assert!(matches!(
        huge.validate(),
        Err(WheelError::InvalidBaseRotation { .. })
    ));

    let mut config = WidgetConfig::default();
    let before = config.clone();
    assert!(matches!(
        config.apply("base-rotation", "1e12"),
        Err(WheelError::InvalidBaseRotation { .. })
    ));
    assert_eq!(config, before);

    for base in [ALT_BASE_ROTATION_DEG, MAX_BASE_ROTATION_DEG] {
        config.apply("base-rotation", &base.to_string()).unwrap();
        assert_eq!(config.wheel.base_rotation_deg, base);
    }
}

#[test]
fn loader_waits_out_the_minimum_display_time() {
    let page = PageConfig::default();

    let early = LoaderSchedule::after(&page, 500.0);
    assert_eq!(early.hide_icon_in_ms, 1300.0);
    assert_eq!(early.hide_screen_in_ms, 1300.0);
    assert_eq!(early.remove_screen_in_ms, 400.0);
    assert_eq!(early.ready_in_ms(), 1700.0);

    let late = LoaderSchedule::after(&page, 5000.0);
    assert_eq!(late.hide_icon_in_ms, 0.0);
    assert_eq!(late.hide_screen_in_ms, 0.0);
    assert_eq!(late.ready_in_ms(), 400.0);

    let clock_skew = LoaderSchedule::after(&page, -20.0);
    assert_eq!(clock_skew.hide_screen_in_ms, 1800.0);
}

#[test]
fn icon_and_screen_timers_are_independent() {
    let page = PageConfig {
        min_icon_ms: 600.0,
        ..PageConfig::default()
    };
    let s = LoaderSchedule::after(&page, 200.0);
    assert_eq!(s.hide_icon_in_ms, 400.0);
    assert_eq!(s.hide_screen_in_ms, 1600.0);
}
