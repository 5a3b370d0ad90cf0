use super::{apply_env, apply_file, load_settings, Settings};

use std::{
    collections::HashMap,
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_are_quiet_and_human_readable() {
    let settings = Settings::default();
    assert_eq!(settings.log_filter, "info");
    assert_eq!(settings.signal_queue_capacity, 64);
    assert!(!settings.emit_json);
}

#[test]
fn file_overrides_only_present_keys() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "emit_json = true\n").expect("parse");
    assert!(settings.emit_json);
    assert_eq!(settings.log_filter, "info");
    assert_eq!(settings.signal_queue_capacity, 64);
}

#[test]
fn file_rejects_unknown_keys() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "bind_addr = \"127.0.0.1\"\n").is_err());
}

#[test]
fn env_overrides_file_values() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "log_filter = \"warn\"\nsignal_queue_capacity = 4\n")
        .expect("parse");
    apply_env(
        &mut settings,
        env_from(&[
            ("APP__LOG_FILTER", "client_core=debug"),
            ("APP__SIGNAL_QUEUE_CAPACITY", "16"),
            ("APP__EMIT_JSON", "true"),
        ]),
    );
    assert_eq!(
        settings,
        Settings {
            log_filter: "client_core=debug".into(),
            signal_queue_capacity: 16,
            emit_json: true,
        }
    );
}

#[test]
fn unparseable_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env_from(&[
            ("APP__SIGNAL_QUEUE_CAPACITY", "lots"),
            ("APP__EMIT_JSON", "yes"),
        ]),
    );
    assert_eq!(settings.signal_queue_capacity, 64);
    assert!(!settings.emit_json);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("demo_cli_missing_{suffix}.toml"));

    let err = load_settings(Some(&path)).expect_err("missing file");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn explicit_file_is_loaded() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let temp_root = env::temp_dir().join(format!("demo_cli_config_test_{suffix}"));
    fs::create_dir_all(&temp_root).expect("temp root");
    let path = temp_root.join("demo.toml");
    fs::write(&path, "signal_queue_capacity = 3\n").expect("write config");

    let settings = load_settings(Some(&path)).expect("load");
    // env may still override capacity on a developer machine
    if env::var("APP__SIGNAL_QUEUE_CAPACITY").is_err() {
        assert_eq!(settings.signal_queue_capacity, 3);
    }

    fs::remove_dir_all(temp_root).expect("cleanup");
}
