use super::*;
use crate::settings::DelayedSettings;

const FULL_CAPS: PlatformCaps = PlatformCaps {
    large_pages: true,
    random_access_advice: true,
};

fn initialized() -> (OptionsRegistry, Vec<SettingUpdate>) {
    let mut registry = OptionsRegistry::new(&FULL_CAPS);
    let mut updates: Vec<SettingUpdate> = Vec::new();
    registry.init(&mut updates);
    updates.clear();
    (registry, updates)
}

#[test]
fn test_defaults_after_init() {
    let (registry, _) = initialized();
    assert!(registry.is_initialized());
    assert_eq!(registry.value(OptionId::Hash), 1024);
    assert_eq!(registry.value(OptionId::Contempt), 24);
    assert_eq!(registry.value(OptionId::Threads), 1);
    assert!(registry.flag(OptionId::LargePages));
    assert!(!registry.flag(OptionId::Ponder));
    assert_eq!(registry.string_value(OptionId::AnalysisContempt), "off");
    assert_eq!(registry.string_value(OptionId::UseNnue), "hybrid");
    assert_eq!(registry.string_value(OptionId::EvalFile), "nn-default.nnue");
    assert_eq!(registry.string_value(OptionId::SyzygyPath), "");
    assert_eq!(
        registry.default_string(OptionId::AnalysisContempt),
        "Off var Off var White var Black"
    );
}

#[test]
fn test_init_reports_change_actions_in_table_order() {
    let mut registry = OptionsRegistry::new(&FULL_CAPS);
    let mut updates: Vec<SettingUpdate> = Vec::new();
    registry.init(&mut updates);
    assert_eq!(
        updates,
        vec![
            SettingUpdate::Threads(1),
            SettingUpdate::HashSize(1024),
            SettingUpdate::ClearHash,
            SettingUpdate::LargePages(true),
        ]
    );
}

#[test]
fn test_init_feeds_delayed_settings() {
    let mut registry = OptionsRegistry::new(&FULL_CAPS);
    let mut delayed = DelayedSettings::new();
    registry.init(&mut delayed);
    assert_eq!(delayed.staged.tt_size_kb, 1024);
    assert_eq!(delayed.staged.num_threads, 1);
    assert!(delayed.staged.large_pages);
}

#[test]
fn test_hash_out_of_range_is_rejected_but_found() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.set_by_name("Hash", "999999999", &mut updates));
    assert_eq!(registry.value(OptionId::Hash), 1024);
    assert!(updates.is_empty());

    assert!(registry.set_by_name("Hash", "63", &mut updates));
    assert_eq!(registry.value(OptionId::Hash), 1024);
    assert!(updates.is_empty());
}

#[test]
fn test_spin_in_range_applies_and_notifies() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.set_by_name("hash", "2048", &mut updates));
    assert_eq!(registry.value(OptionId::Hash), 2048);
    assert_eq!(updates, vec![SettingUpdate::HashSize(2048)]);

    assert!(registry.set_by_name("THREADS", " 4 ", &mut updates));
    assert_eq!(registry.value(OptionId::Threads), 4);
    assert_eq!(updates.last(), Some(&SettingUpdate::Threads(4)));

    // Bounds are inclusive
    assert!(registry.set_by_name("Contempt", "-100", &mut updates));
    assert_eq!(registry.value(OptionId::Contempt), -100);
}

#[test]
fn test_unknown_name_has_no_effect() {
    let (mut registry, mut updates) = initialized();
    let before = registry.to_string();
    assert!(!registry.set_by_name("NotAnOption", "1", &mut updates));
    assert!(updates.is_empty());
    assert_eq!(registry.to_string(), before);
}

#[test]
fn test_check_accepts_only_literal_tokens() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.set_by_name("Ponder", "TRUE", &mut updates));
    assert!(!registry.flag(OptionId::Ponder));

    assert!(registry.set_by_name("Ponder", "true", &mut updates));
    assert!(registry.flag(OptionId::Ponder));

    assert!(registry.set_by_name("LargePages", "false", &mut updates));
    assert!(!registry.flag(OptionId::LargePages));
    assert_eq!(updates, vec![SettingUpdate::LargePages(false)]);

    assert!(registry.set_by_name("LargePages", "1", &mut updates));
    assert!(!registry.flag(OptionId::LargePages));
    assert_eq!(updates.len(), 1);
}

#[test]
fn test_button_notifies_regardless_of_value() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.set_by_name("clear hash", "", &mut updates));
    assert!(registry.set_by_name("Clear Hash", "whatever", &mut updates));
    assert_eq!(updates, vec![SettingUpdate::ClearHash, SettingUpdate::ClearHash]);
}

#[test]
fn test_string_value_is_replaced() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.set_by_name("SyzygyPath", "/tb/wdl", &mut updates));
    assert!(registry.set_by_name("SyzygyPath", "/tb", &mut updates));
    assert_eq!(registry.string_value(OptionId::SyzygyPath), "/tb");
    // Strings keep their case
    assert!(registry.set_by_name("EvalFile", "Net-ABC.nnue", &mut updates));
    assert_eq!(registry.string_value(OptionId::EvalFile), "Net-ABC.nnue");
}

#[test]
fn test_combo_is_lowercased_without_membership_check() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.set_by_name("Analysis Contempt", "White", &mut updates));
    assert_eq!(registry.string_value(OptionId::AnalysisContempt), "white");

    assert!(registry.set_by_name("Analysis Contempt", "Sideways", &mut updates));
    assert_eq!(registry.string_value(OptionId::AnalysisContempt), "sideways");

    let combo = registry.get(OptionId::AnalysisContempt).unwrap();
    assert_eq!(combo.choices().collect::<Vec<_>>(), ["Off", "White", "Black"]);
}

#[test]
fn test_try_set_reports_reason() {
    let (mut registry, mut updates) = initialized();
    assert_eq!(
        registry.try_set_by_name("MultiPV", "0", &mut updates),
        Err(OptionError::OutOfRange {
            name: "MultiPV",
            value: 0,
            min: 1,
            max: 500,
        })
    );
    // No digits reads as 0, which MultiPV does not allow
    assert_eq!(
        registry.try_set_by_name("MultiPV", "lots", &mut updates),
        Err(OptionError::OutOfRange {
            name: "MultiPV",
            value: 0,
            min: 1,
            max: 500,
        })
    );
    assert!(matches!(
        registry.try_set_by_name("Ponder", "yes", &mut updates),
        Err(OptionError::InvalidBool { .. })
    ));
    let err = registry.try_set_by_name("Nope", "1", &mut updates).unwrap_err();
    assert!(!err.name_found());
    assert_eq!(registry.value(OptionId::MultiPv), 1);
}

#[test]
fn test_spin_reads_leading_integer() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.set_by_name("Contempt", "12abc", &mut updates));
    assert_eq!(registry.value(OptionId::Contempt), 12);

    assert!(registry.set_by_name("Contempt", "abc", &mut updates));
    assert_eq!(registry.value(OptionId::Contempt), 0);

    assert!(registry.set_by_name("Contempt", "  -7 centipawns", &mut updates));
    assert_eq!(registry.value(OptionId::Contempt), -7);

    assert!(registry.set_by_name("Contempt", "+15", &mut updates));
    assert_eq!(registry.value(OptionId::Contempt), 15);

    // Huge prefixes saturate and then fail the bounds check
    assert!(registry.set_by_name("Contempt", "99999999999999999999999", &mut updates));
    assert_eq!(registry.value(OptionId::Contempt), 15);
}

#[test]
fn test_leading_int() {
    assert_eq!(leading_int("42"), 42);
    assert_eq!(leading_int(" 4 2"), 4);
    assert_eq!(leading_int("-"), 0);
    assert_eq!(leading_int("--3"), 0);
    assert_eq!(leading_int(""), 0);
    assert_eq!(leading_int("-9223372036854775808000"), -i64::MAX);
}

#[test]
fn test_set_value_skips_bounds() {
    let (mut registry, mut updates) = initialized();
    registry.set_value(OptionId::Threads, 0, &mut updates);
    assert_eq!(registry.value(OptionId::Threads), 0);
    assert_eq!(updates, vec![SettingUpdate::Threads(0)]);

    registry.set_value(OptionId::MultiPv, 9999, &mut updates);
    assert_eq!(registry.value(OptionId::MultiPv), 9999);
    assert_eq!(updates.len(), 1);
}

#[test]
fn test_disabled_option_is_invisible() {
    let mut registry = OptionsRegistry::new(&FULL_CAPS);
    assert!(registry.disable(OptionId::Hash));

    let mut updates: Vec<SettingUpdate> = Vec::new();
    registry.init(&mut updates);
    assert!(!updates.contains(&SettingUpdate::HashSize(1024)));
    assert!(registry.find("Hash").is_none());
    assert!(registry.get(OptionId::Hash).is_none());
    assert!(!registry.set_by_name("Hash", "128", &mut updates));
    assert!(!registry.to_string().contains("name Hash "));
}

#[test]
fn test_large_pages_disabled_without_support() {
    let mut registry = OptionsRegistry::new(&PlatformCaps::minimal());
    let mut updates: Vec<SettingUpdate> = Vec::new();
    registry.init(&mut updates);
    assert!(!registry.is_enabled(OptionId::LargePages));
    assert!(!updates.iter().any(|u| matches!(u, SettingUpdate::LargePages(_))));
    assert!(!registry.set_by_name("LargePages", "true", &mut updates));
}

#[test]
fn test_skill_level_always_disabled() {
    let (mut registry, mut updates) = initialized();
    assert!(registry.find("Skill Level").is_none());
    assert!(!registry.set_by_name("Skill Level", "3", &mut updates));
}

#[test]
fn test_disable_after_init_refused() {
    let (mut registry, _) = initialized();
    assert!(!registry.disable(OptionId::Ponder));
    assert!(registry.find("ponder").is_some());
}

#[test]
fn test_teardown_releases_strings() {
    let (mut registry, _) = initialized();
    registry.teardown();
    assert!(!registry.is_initialized());
    assert_eq!(registry.string_value(OptionId::EvalFile), "");
    assert_eq!(registry.string_value(OptionId::UseNnue), "");
    // Numbers are untouched
    assert_eq!(registry.value(OptionId::Hash), 1024);

    let mut updates: Vec<SettingUpdate> = Vec::new();
    registry.init(&mut updates);
    assert_eq!(registry.string_value(OptionId::UseNnue), "hybrid");
}

#[test]
fn test_option_listing() {
    let (registry, _) = initialized();
    let listing = registry.to_string();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), OptionId::COUNT - 1);
    assert_eq!(lines[0], "option name Contempt type spin default 24 min -100 max 100");
    assert_eq!(
        lines[1],
        "option name Analysis Contempt type combo default Off var Off var White var Black"
    );
    assert!(lines.contains(&"option name Clear Hash type button"));
    assert!(lines.contains(&"option name Ponder type check default false"));
    assert!(lines.contains(&"option name SyzygyPath type string default <empty>"));
    assert!(lines.contains(&"option name LargePages type check default true"));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_64bit_limits() {
    let (registry, _) = initialized();
    assert_eq!(registry.get(OptionId::Hash).unwrap().max(), 33_554_432);
    assert_eq!(registry.value(OptionId::SyzygyProbeLimit), 7);
}
