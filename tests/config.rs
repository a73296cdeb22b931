// tests/config.rs
use newsroom_publisher::config::publishing::ENV_CONFIG_PATH;
use newsroom_publisher::config::PublishingConfig;
use newsroom_publisher::Criterion;
use std::{env, fs};

#[test]
fn parse_toml_and_json_paths() {
    let dir = tempfile::tempdir().unwrap();

    let p_toml = dir.path().join("publishing.toml");
    fs::write(
        &p_toml,
        r#"
[payment]
min_words = 500

[selection]
criterion = "journalist_likes"
"#,
    )
    .unwrap();
    let t = PublishingConfig::load_from(&p_toml).unwrap();
    assert_eq!(t.payment.min_words, 500);
    assert_eq!(t.payment.bonus, 75_000.0);
    assert_eq!(t.selection.criterion, Some(Criterion::JournalistLikes));

    let p_json = dir.path().join("publishing.json");
    fs::write(
        &p_json,
        r#"{"mail": {"editor_address": "jefe@diario.local"}, "scoop": {"threshold": 10.0}}"#,
    )
    .unwrap();
    let j = PublishingConfig::load_from(&p_json).unwrap();
    assert_eq!(j.mail.editor_address, "jefe@diario.local");
    assert_eq!(j.mail.subject, "Special news");
    assert!(matches!(
        j.scoop.kind(11.0),
        newsroom_publisher::NewsKind::Scoop { threshold, .. } if threshold == 10.0
    ));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("publishing.toml");
    fs::write(&p, "payment = [").unwrap();
    assert!(PublishingConfig::load_from(&p).is_err());
}

#[serial_test::serial]
#[test]
fn default_uses_env_then_fallbacks() {
    // Isolate CWD so the repo's own config/ is not picked up
    let old = env::current_dir().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    env::set_current_dir(tmp.path()).unwrap();

    env::remove_var(ENV_CONFIG_PATH);

    // 1) Nothing present -> defaults
    let d = PublishingConfig::load_default().unwrap();
    assert_eq!(d, PublishingConfig::default());

    // 2) Fallback TOML in ./config/
    let cfg_dir = tmp.path().join("config");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("publishing.toml"), "[payment]\nbase = 1.0\n").unwrap();
    let t = PublishingConfig::load_default().unwrap();
    assert_eq!(t.payment.base, 1.0);

    // 3) Env wins
    let p_env = tmp.path().join("custom.json");
    fs::write(&p_env, r#"{"payment": {"base": 2.0}}"#).unwrap();
    env::set_var(ENV_CONFIG_PATH, p_env.display().to_string());
    let e = PublishingConfig::load_default().unwrap();
    assert_eq!(e.payment.base, 2.0);

    // 4) Env pointing nowhere is an error
    env::set_var(ENV_CONFIG_PATH, tmp.path().join("missing.toml").display().to_string());
    assert!(PublishingConfig::load_default().is_err());
    env::remove_var(ENV_CONFIG_PATH);

    env::set_current_dir(&old).unwrap();
}

#[test]
fn shipped_config_parses() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/publishing.toml");
    let cfg = PublishingConfig::load_from(&path).unwrap();
    assert!(matches!(cfg.selection.criterion, Some(Criterion::AllOf(_))));
}
