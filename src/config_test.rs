use super::*;

#[test]
fn defaults_match_stylesheet_contract() {
    let cfg = EnhancerConfig::default();
    assert_eq!(cfg.nav.toggle_selector, ".navbar-toggle");
    assert_eq!(cfg.nav.menu_selector, ".navbar-menu");
    assert_eq!(cfg.nav.active_class, "active");
    assert_eq!(cfg.anchors.link_selector, "a[href^=\"#\"]");
    assert_eq!(cfg.progress.class_name, "reading-progress");
    assert_eq!(cfg.copy_code.block_selector, "pre code");
    assert_eq!(cfg.copy_code.class_name, "copy-code");
    assert_eq!(cfg.copy_code.idle_label, "Copiar");
    assert_eq!(cfg.copy_code.copied_label, "Copiado!");
    assert_eq!(cfg.copy_code.revert_after_ms, 2000);
    assert_eq!(cfg.dark_mode.class_name, "dark-mode");
    assert_eq!(cfg.dark_mode.storage_key, "darkMode");
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.features, Features { nav: true, anchors: true, progress: true, copy_code: true });
}

#[test]
fn blank_input_yields_defaults() {
    assert_eq!(EnhancerConfig::from_json("  \n ").unwrap(), EnhancerConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = EnhancerConfig::from_json(
        r#"{
            "log_level": "debug",
            "copy_code": { "idle_label": "Copy", "copied_label": "Copied!" },
            "features": { "progress": false }
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.log_level, LogLevel::Debug);
    assert_eq!(cfg.copy_code.idle_label, "Copy");
    assert_eq!(cfg.copy_code.copied_label, "Copied!");
    assert_eq!(cfg.copy_code.revert_after_ms, DEFAULT_COPY_REVERT_MS);
    assert_eq!(cfg.copy_code.block_selector, DEFAULT_CODE_BLOCK_SELECTOR);
    assert!(!cfg.features.progress);
    assert!(cfg.features.nav);
    assert!(cfg.features.anchors);
    assert!(cfg.features.copy_code);
    assert_eq!(cfg.dark_mode, DarkModeConfig::default());
}

#[test]
fn unknown_fields_are_ignored() {
    let cfg = EnhancerConfig::from_json(r#"{ "theme": "solarized", "nav": { "extra": 1 } }"#).unwrap();
    assert_eq!(cfg, EnhancerConfig::default());
}

#[test]
fn invalid_json_is_config_error() {
    let err = EnhancerConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, EnhanceError::Config(_)));
    assert!(err.to_string().starts_with("config parse failed:"));
}

#[test]
fn wrong_field_type_is_config_error() {
    let err = EnhancerConfig::from_json(r#"{ "copy_code": { "revert_after_ms": "soon" } }"#).unwrap_err();
    assert!(matches!(err, EnhanceError::Config(_)));
}

#[test]
fn log_level_maps_to_log_crate() {
    assert_eq!(LogLevel::Warn.as_level(), log::Level::Warn);
    assert_eq!(LogLevel::Trace.as_level(), log::Level::Trace);
    assert_eq!(LogLevel::default().as_level(), log::Level::Info);
}
