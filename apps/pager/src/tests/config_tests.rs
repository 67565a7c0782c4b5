use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("users_pager_config_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_point_at_local_users_endpoint() {
    let settings = Settings::default();
    assert_eq!(settings.server_url, "http://127.0.0.1:3000");
    assert_eq!(settings.users_path, "/api/users");
    assert_eq!(settings.request_timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn zero_timeout_disables_it() {
    let settings = Settings {
        request_timeout_secs: Some(0),
        ..Settings::default()
    };
    assert_eq!(settings.request_timeout(), None);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config(
        r#"
server_url = "https://users.example.com"
request_timeout_secs = 5
"#,
    );

    let mut settings = Settings::default();
    let raw = fs::read_to_string(&path).expect("read");
    apply_file(&mut settings, &raw, &path).expect("apply");

    assert_eq!(settings.server_url, "https://users.example.com");
    assert_eq!(settings.users_path, "/api/users");
    assert_eq!(settings.request_timeout_secs, Some(5));

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn unknown_keys_are_rejected() {
    let path = temp_config("page_size = 25\n");
    let err = load_settings(Some(&path)).expect_err("must fail");
    assert!(matches!(err, SettingsError::Parse { .. }));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let path = env::temp_dir().join("users_pager_definitely_missing.toml");
    let err = load_settings(Some(&path)).expect_err("must fail");
    assert!(matches!(err, SettingsError::Read { .. }));
}

#[test]
fn env_overrides_win_and_app_prefix_beats_legacy_name() {
    let vars = HashMap::from([
        ("PAGER_SERVER_URL", "http://legacy:1"),
        ("APP__SERVER_URL", "http://app:2"),
        ("APP__USERS_PATH", "/v2/users"),
        ("APP__REQUEST_TIMEOUT_SECS", "not-a-number"),
    ]);
    let mut settings = Settings::default();

    apply_env_overrides(&mut settings, |key| vars.get(key).map(|v| v.to_string()));

    assert_eq!(settings.server_url, "http://app:2");
    assert_eq!(settings.users_path, "/v2/users");
    assert_eq!(settings.request_timeout_secs, Some(30));
}
