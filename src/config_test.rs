use super::*;

#[test]
fn default_matches_admin_templates() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.dismiss_after(), Duration::from_millis(4000));
    assert_eq!(cfg.alert_selector, ".alert");
    assert_eq!(cfg.container_selector, ".container-fluid");
    assert_eq!(cfg.currency_symbol, "\u{20b9}");
    assert_eq!(cfg.csv_filename, "export.csv");
    assert_eq!(cfg.csv_mode, CsvMode::Quoted);
    assert_eq!(cfg.id_prefix, "ID-");
    assert_eq!(cfg.log_level(), log::Level::Info);
}

#[test]
fn from_json_empty_object_is_default() {
    let cfg = UiConfig::from_json("{}").unwrap();
    assert_eq!(cfg, UiConfig::default());
}

#[test]
fn from_json_overrides_selected_fields() {
    let cfg = UiConfig::from_json(
        r#"{"dismiss_after_ms": 6000, "csv_filename": "bookings.csv", "csv_mode": "plain", "log_level": "debug"}"#,
    )
    .unwrap();
    assert_eq!(cfg.dismiss_after_ms, 6000);
    assert_eq!(cfg.csv_filename, "bookings.csv");
    assert_eq!(cfg.csv_mode, CsvMode::Plain);
    assert_eq!(cfg.log_level(), log::Level::Debug);
    assert_eq!(cfg.currency_symbol, DEFAULT_CURRENCY_SYMBOL);
}

#[test]
fn from_json_rejects_unknown_fields() {
    let err = UiConfig::from_json(r#"{"dismiss_after": 1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn from_json_rejects_malformed_json() {
    assert!(matches!(UiConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
}

#[test]
fn from_json_rejects_out_of_range_offset() {
    let err = UiConfig::from_json(r#"{"display_offset_minutes": 1500}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "display_offset_minutes", .. }));
}

#[test]
fn from_json_rejects_unknown_log_level() {
    let err = UiConfig::from_json(r#"{"log_level": "loud"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "log_level", .. }));
}

#[test]
fn from_json_rejects_blank_selectors() {
    let err = UiConfig::from_json(r#"{"container_selector": "  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "container_selector", .. }));
}
