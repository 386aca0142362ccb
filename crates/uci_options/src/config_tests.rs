use super::*;
use crate::option::OptionId;
use crate::settings::{DelayedSettings, SettingUpdate};
use engine_core::PlatformCaps;

const SAMPLE: &str = r#"
log = "debug"

[options]
Hash = 4096
threads = "3"
"Analysis Contempt" = "Black"
Ponder = true
MultiPV = 0
Bogus = 1
"#;

fn registry() -> OptionsRegistry {
    let caps = PlatformCaps {
        large_pages: true,
        random_access_advice: false,
    };
    let mut registry = OptionsRegistry::new(&caps);
    registry.init(&mut Vec::<SettingUpdate>::new());
    registry
}

#[test]
fn test_parse_config() {
    let config = EngineConfig::from_toml_str(SAMPLE).unwrap();
    assert_eq!(config.log.as_deref(), Some("debug"));
    assert_eq!(config.options.get("Hash"), Some(&OptionValue::Integer(4096)));
    assert_eq!(config.options.get("Ponder"), Some(&OptionValue::Flag(true)));
    assert_eq!(
        config.options.get("threads"),
        Some(&OptionValue::Text("3".to_string()))
    );
}

#[test]
fn test_empty_config() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert!(config.log.is_none());
    assert!(config.options.is_empty());
}

#[test]
fn test_unknown_top_level_key_rejected() {
    let err = EngineConfig::from_toml_str("hash = 12").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_apply_overrides() {
    let config = EngineConfig::from_toml_str(SAMPLE).unwrap();
    let mut registry = registry();
    let mut delayed = DelayedSettings::new();

    // MultiPV = 0 is out of range and Bogus is unknown
    assert_eq!(config.apply(&mut registry, &mut delayed), 4);

    assert_eq!(registry.value(OptionId::Hash), 4096);
    assert_eq!(registry.value(OptionId::Threads), 3);
    assert_eq!(registry.value(OptionId::MultiPv), 1);
    assert!(registry.flag(OptionId::Ponder));
    assert_eq!(registry.string_value(OptionId::AnalysisContempt), "black");
    assert_eq!(delayed.staged.tt_size_kb, 4096);
    assert_eq!(delayed.staged.num_threads, 3);
}

#[test]
fn test_load_missing_file() {
    let err = EngineConfig::load(Path::new("/no/such/engine.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
