use super::*;

#[test]
fn empty_object_yields_defaults() {
    let cfg = EngineConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, EngineConfig::default());
    assert_eq!((cfg.width, cfg.height), (128, 64));
    assert_eq!(cfg.cycle_interval_ms, 10_800_000);
    assert!(cfg.auto_cycle);
    assert_eq!(cfg.start, AnimationId::Plasma);
    cfg.validate().unwrap();
}

#[test]
fn fields_override_defaults() {
    let json = r#"{ "transition_ms": 500, "cycle_interval_ms": 1000, "start": "orbital",
                    "auto_cycle": false, "seed": 9, "fade_curve": "out_quad" }"#;
    let cfg = EngineConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.transition_ms, 500);
    assert_eq!(cfg.start, AnimationId::Orbital);
    assert!(!cfg.auto_cycle);
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.fade_curve, FadeCurve::OutQuad);
    cfg.validate().unwrap();
}

#[test]
fn malformed_json_is_a_config_error() {
    for bad in ["{", r#"{"start": "dvd"}"#, r#"{"widht": 10}"#] {
        let err = EngineConfig::from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, PanelError::Config(_)), "{bad}: {err}");
    }
}

#[test]
fn validate_rejects_bad_ranges() {
    let base = EngineConfig::default();
    let cases = [
        EngineConfig { width: 0, ..base.clone() },
        EngineConfig { height: 513, ..base.clone() },
        EngineConfig { transition_ms: 0, ..base.clone() },
    ];
    for cfg in cases {
        assert!(matches!(cfg.validate(), Err(PanelError::Config(_))), "{cfg:?}");
    }
}

#[test]
fn cycle_interval_is_independent_of_transition_length() {
    let cfg = EngineConfig {
        cycle_interval_ms: 100,
        ..EngineConfig::default()
    };
    assert!(cfg.transition_ms > cfg.cycle_interval_ms);
    assert!(cfg.validate().is_ok());
}

#[test]
fn missing_file_is_a_config_error() {
    let err = EngineConfig::from_path("/definitely/not/here/panelfx.json").unwrap_err();
    assert!(err.to_string().starts_with("config error: open config"));
}

#[test]
fn serializes_back_to_lowercase_ids() {
    let json = serde_json::to_string(&EngineConfig::default()).unwrap();
    assert!(json.contains("\"start\":\"plasma\""));
    assert!(json.contains("\"fade_curve\":\"linear\""));
}
