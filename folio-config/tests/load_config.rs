use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use folio_config::{
    ConfigSource, ENV_CONFIG_JSON, ENV_CONFIG_PATH, ENV_CONTENT_ROOT,
    ShowcaseConfig,
};
use folio_core::carousel::{Breakpoint, CarouselHeight};
use folio_model::Collection;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

fn load(
    pairs: &[(&str, &str)],
    base: &Path,
) -> anyhow::Result<(ShowcaseConfig, ConfigSource)> {
    ShowcaseConfig::load_with(env(pairs), base)
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = tempfile::tempdir().unwrap();
    let (config, source) = load(&[], dir.path()).unwrap();

    assert_eq!(source, ConfigSource::Default);
    assert_eq!(config, ShowcaseConfig::default());
    assert_eq!(config.content_root, PathBuf::from("content"));
    assert_eq!(config.motion.friction, 0.95);

    let extra = config.shelves.shelf(Collection::ExtraCurricular);
    assert_eq!(extra.layout.desktop.auto_scroll_speed, -2.0);
    assert_eq!(
        extra.layout.for_breakpoint(Breakpoint::Mobile).card_width,
        180.0
    );
}

#[test]
fn default_file_candidates_are_discovered() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    fs::write(
        dir.path().join("config/folio.toml"),
        r#"
        content_root = "site/content"

        [motion]
        friction = 0.9

        [shelves.projects]
        title = "Work"

        [shelves.projects.layout.desktop]
        card_width = 500.0
        card_spacing = 40.0
        height = "auto"
        "#,
    )
    .unwrap();

    let (config, source) = load(&[], dir.path()).unwrap();
    assert_eq!(
        source,
        ConfigSource::File(dir.path().join("config/folio.toml"))
    );
    assert_eq!(config.content_root, PathBuf::from("site/content"));
    assert_eq!(config.motion.friction, 0.9);
    // unspecified tuning keeps its defaults
    assert_eq!(config.motion.transition_threshold, 2.0);

    let projects = &config.shelves.projects;
    assert_eq!(projects.title, "Work");
    assert!(projects.enabled);
    assert_eq!(projects.layout.desktop.card_width, 500.0);
    assert_eq!(projects.layout.desktop.height, CarouselHeight::Auto);
}

#[test]
fn env_path_wins_over_inline_json_and_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("folio.toml"), "content_root = \"a\"").unwrap();
    let explicit = dir.path().join("custom.json");
    fs::write(&explicit, r#"{"content_root":"b"}"#).unwrap();

    let path = explicit.to_string_lossy().into_owned();
    let (config, source) = load(
        &[
            (ENV_CONFIG_PATH, path.as_str()),
            (ENV_CONFIG_JSON, r#"{"content_root":"c"}"#),
        ],
        dir.path(),
    )
    .unwrap();
    assert_eq!(source, ConfigSource::EnvPath(explicit));
    assert_eq!(config.content_root, PathBuf::from("b"));
}

#[test]
fn inline_json_and_content_root_override() {
    let dir = tempfile::tempdir().unwrap();
    let (config, source) = load(
        &[
            (
                ENV_CONFIG_JSON,
                r#"{"shelves":{"co_curricular":{"enabled":false}}}"#,
            ),
            (ENV_CONTENT_ROOT, "/srv/folio"),
        ],
        dir.path(),
    )
    .unwrap();

    assert_eq!(source, ConfigSource::EnvInline);
    assert_eq!(config.content_root, PathBuf::from("/srv/folio"));
    assert!(!config.shelves.co_curricular.enabled);
    // a partial shelf keeps the generic defaults for what it omits
    assert_eq!(config.shelves.co_curricular.title, "");
    assert!(config.shelves.projects.enabled);
}

#[test]
fn blank_env_values_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let (_, source) =
        load(&[(ENV_CONFIG_PATH, "  "), (ENV_CONFIG_JSON, "")], dir.path())
            .unwrap();
    assert_eq!(source, ConfigSource::Default);
}

#[test]
fn invalid_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let err = load(&[(ENV_CONFIG_JSON, r#"{"motion":{"friction":1.5}}"#)], dir.path())
        .unwrap_err();
    assert!(format!("{err:#}").contains("friction"), "{err:#}");

    let err = load(
        &[(
            ENV_CONFIG_JSON,
            r#"{"shelves":{"projects":{"layout":{"mobile":{"card_width":0}}}}}"#,
        )],
        dir.path(),
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("card_width"), "{err:#}");

    let err = load(&[(ENV_CONFIG_JSON, "{not json")], dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains(ENV_CONFIG_JSON));
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let path = missing.to_string_lossy().into_owned();
    let err = load(&[(ENV_CONFIG_PATH, path.as_str())], dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}

#[test]
fn extensionless_files_accept_toml_or_json() {
    let toml = ShowcaseConfig::parse_from_str("content_root = \"t\"", "inline")
        .unwrap();
    assert_eq!(toml.content_root, PathBuf::from("t"));

    let json =
        ShowcaseConfig::parse_from_str(r#"{"content_root":"j"}"#, "inline")
            .unwrap();
    assert_eq!(json.content_root, PathBuf::from("j"));

    let err = ShowcaseConfig::parse_from_str("][", "inline").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("toml error") && message.contains("json error"));
}
