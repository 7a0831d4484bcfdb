use serde_json::json;

use super::*;

fn secs_eq(duration: Duration, secs: f64) -> bool {
    (duration.as_secs_f64() - secs).abs() < 1e-6
}

fn raw(value: serde_json::Value) -> RawConfig {
    serde_json::from_value(value).unwrap()
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn missing_item_class_is_rejected() {
    let err = raw(json!({})).validate().unwrap_err();
    assert_eq!(err, CarouselError::MissingItemClass);
}

#[test]
fn empty_item_class_is_rejected() {
    let err = raw(json!({ "itemClass": "" })).validate().unwrap_err();
    assert_eq!(err, CarouselError::MissingItemClass);
}

#[test]
fn whitespace_item_class_is_rejected() {
    let err = raw(json!({ "itemClass": "   " })).validate().unwrap_err();
    assert_eq!(err, CarouselError::MissingItemClass);
}

#[test]
fn missing_item_class_message_is_descriptive() {
    let err = RawConfig::default().validate().unwrap_err();
    assert_eq!(err.to_string(), "option itemClass is not specified");
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_applied_when_only_item_class_given() {
    let cfg = raw(json!({ "itemClass": "slide" })).validate().unwrap();
    assert_eq!(cfg, CarouselConfig::new("slide"));
    assert_eq!(cfg.pane_class, "purePane");
    assert!(secs_eq(cfg.slide_speed, 0.3));
    assert_eq!(cfg.auto_interval, None);
    assert_eq!(cfg.points_class, None);
    assert!(!cfg.has_points());
}

#[test]
fn zero_slide_speed_falls_back_to_default() {
    let cfg = raw(json!({ "itemClass": "slide", "slideSpeed": 0 })).validate().unwrap();
    assert!(secs_eq(cfg.slide_speed, DEFAULT_SLIDE_SPEED_SECS));
}

#[test]
fn zero_auto_interval_disables_timer() {
    let cfg = raw(json!({ "itemClass": "slide", "autoInterval": 0 })).validate().unwrap();
    assert_eq!(cfg.auto_interval, None);
}

#[test]
fn empty_pane_and_points_class_use_defaults() {
    let cfg = raw(json!({ "itemClass": "slide", "paneClass": "", "pointsClass": "" }))
        .validate()
        .unwrap();
    assert_eq!(cfg.pane_class, DEFAULT_PANE_CLASS);
    assert!(!cfg.has_points());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn all_options_parsed_from_camel_case() {
    let cfg = raw(json!({
        "itemClass": "slide",
        "paneClass": "strip",
        "slideSpeed": 0.5,
        "autoInterval": 4,
        "pointsClass": "dots",
    }))
    .validate()
    .unwrap();
    assert_eq!(cfg.item_class, "slide");
    assert_eq!(cfg.pane_class, "strip");
    assert_eq!(cfg.slide_speed, Duration::from_millis(500));
    assert_eq!(cfg.auto_interval, Some(Duration::from_secs(4)));
    assert_eq!(cfg.points_class.as_deref(), Some("dots"));
    assert!(cfg.has_points());
}

#[test]
fn unknown_fields_are_ignored() {
    let cfg = raw(json!({ "itemClass": "slide", "loop": true })).validate().unwrap();
    assert_eq!(cfg.item_class, "slide");
}

// =============================================================
// Duration validation
// =============================================================

#[test]
fn negative_slide_speed_is_rejected() {
    let err = raw(json!({ "itemClass": "slide", "slideSpeed": -1 })).validate().unwrap_err();
    assert_eq!(err, CarouselError::InvalidDuration { field: "slideSpeed", value: -1.0 });
}

#[test]
fn negative_auto_interval_is_rejected() {
    let err = raw(json!({ "itemClass": "slide", "autoInterval": -0.5 })).validate().unwrap_err();
    assert_eq!(err, CarouselError::InvalidDuration { field: "autoInterval", value: -0.5 });
}

#[test]
fn non_finite_duration_is_rejected() {
    let config = RawConfig {
        item_class: Some("slide".into()),
        slide_speed: Some(f64::NAN),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(CarouselError::InvalidDuration { field: "slideSpeed", .. })
    ));

    let config = RawConfig {
        item_class: Some("slide".into()),
        auto_interval: Some(f64::INFINITY),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(CarouselError::InvalidDuration { field: "autoInterval", .. })
    ));
}

#[test]
fn huge_finite_slide_speed_is_rejected_without_panicking() {
    let config = RawConfig {
        item_class: Some("slide".into()),
        slide_speed: Some(1e20),
        ..Default::default()
    };
    assert_eq!(
        config.validate(),
        Err(CarouselError::InvalidDuration { field: "slideSpeed", value: 1e20 })
    );
}

#[test]
fn auto_interval_beyond_browser_timer_range_is_rejected() {
    // 30 days overflows the 32-bit millisecond delay of setInterval.
    let thirty_days = 30.0 * 24.0 * 3600.0;
    let err = raw(json!({ "itemClass": "slide", "autoInterval": thirty_days }))
        .validate()
        .unwrap_err();
    assert_eq!(err, CarouselError::InvalidDuration { field: "autoInterval", value: thirty_days });
}

#[test]
fn auto_interval_of_a_day_is_accepted() {
    let cfg = raw(json!({ "itemClass": "slide", "autoInterval": 86_400 })).validate().unwrap();
    assert_eq!(cfg.auto_interval, Some(Duration::from_secs(86_400)));
}

#[test]
fn longest_accepted_duration_leaves_room_for_settle_grace() {
    let limit = max_duration();
    let with_grace = limit + Duration::from_millis(u64::from(SETTLE_GRACE_MS));
    assert_eq!(with_grace.as_millis(), u128::from(MAX_TIMER_MS));
}
