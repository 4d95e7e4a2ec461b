use ecosense::config::AppConfig;
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

// Helper to clear environment variables that might interfere with tests
fn clear_env_vars() {
    unsafe {
        env::remove_var("CONFIG_FILE");
        env::remove_var("RUST_LOG");
        env::remove_var("ECOSENSE_NO_EMBEDDINGS");
        env::remove_var("ECOSENSE_PREDICTION__KEYWORD_BONUS");
        env::remove_var("ECOSENSE_PREDICTION__SHARPENING_EXPONENT");
        env::remove_var("ECOSENSE_EMBEDDING__ENABLED");
        env::remove_var("ECOSENSE_EMBEDDING__MODEL");
    }
}

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .expect("Failed to create temp config");
    file.write_all(content.as_bytes()).expect("Failed to write temp config");
    file
}

fn path_of(file: &NamedTempFile) -> String {
    file.path().to_string_lossy().into_owned()
}

#[test]
#[serial]
fn test_default_config() {
    clear_env_vars();

    let (config, cli) = AppConfig::load_from_args(["ecosense"]).expect("Failed to load config");

    assert_eq!(config.prediction.sharpening_exponent, 3.0);
    assert_eq!(config.prediction.keyword_bonus, 0.1);
    assert_eq!(config.prediction.neutral_multiplier, 0.5);
    assert_eq!(config.prediction.negation_window, 3);
    assert!(config.embedding.enabled);
    assert_eq!(config.embedding.model, "bge-small-en-v1.5");
    assert_eq!(config.logging.filter, "info,ecosense=debug");
    assert_eq!(cli.entity, "bees");
    assert!(cli.sentences.is_empty());
}

#[test]
#[serial]
fn test_positional_sentences_and_entity() {
    clear_env_vars();

    let (_, cli) = AppConfig::load_from_args([
        "ecosense",
        "--entity",
        "camels",
        "Camels live in the desert",
        "They don't need much water",
    ])
    .expect("Failed to load config");

    assert_eq!(cli.entity, "camels");
    assert_eq!(cli.sentences.len(), 2);
    assert!(!cli.concepts);
}

#[test]
#[serial]
fn test_file_load() {
    clear_env_vars();

    let file = yaml_file(
        r#"
prediction:
  keyword_bonus: 0.2
  negation_window: 4
embedding:
  model: all-minilm-l6-v2
"#,
    );

    let path = path_of(&file);
    let (config, _) = AppConfig::load_from_args(["ecosense", "--config", path.as_str()])
        .expect("Failed to load config from file");

    assert_eq!(config.prediction.keyword_bonus, 0.2);
    assert_eq!(config.prediction.negation_window, 4);
    // Keys missing from the file keep their defaults
    assert_eq!(config.prediction.sharpening_exponent, 3.0);
    assert_eq!(config.embedding.model, "all-minilm-l6-v2");
    assert!(config.embedding.enabled);
}

#[test]
#[serial]
fn test_config_file_from_env() {
    clear_env_vars();

    let file = yaml_file("prediction:\n  sharpening_exponent: 2.0\n");
    unsafe {
        env::set_var("CONFIG_FILE", path_of(&file));
    }

    let (config, _) = AppConfig::load_from_args(["ecosense"]).expect("Failed to load config");
    assert_eq!(config.prediction.sharpening_exponent, 2.0);

    clear_env_vars();
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env_vars();

    let file = yaml_file("prediction:\n  keyword_bonus: 0.2\n");
    unsafe {
        env::set_var("ECOSENSE_PREDICTION__KEYWORD_BONUS", "0.25");
    }

    let path = path_of(&file);
    let (config, _) = AppConfig::load_from_args(["ecosense", "--config", path.as_str()])
        .expect("Failed to load config");
    assert_eq!(config.prediction.keyword_bonus, 0.25);

    clear_env_vars();
}

#[test]
#[serial]
fn test_cli_overrides_env() {
    clear_env_vars();
    unsafe {
        env::set_var("ECOSENSE_EMBEDDING__ENABLED", "true");
        env::set_var("ECOSENSE_EMBEDDING__MODEL", "bge-small");
    }

    let (config, _) =
        AppConfig::load_from_args(["ecosense", "--no-embeddings", "--model", "minilm"])
            .expect("Failed to load config");

    assert!(!config.embedding.enabled);
    assert_eq!(config.embedding.model, "minilm");

    clear_env_vars();
}

#[test]
#[serial]
fn test_rust_log_overrides_logging_filter() {
    clear_env_vars();
    unsafe {
        env::set_var("RUST_LOG", "warn");
    }

    let (config, _) = AppConfig::load_from_args(["ecosense"]).expect("Failed to load config");
    assert_eq!(config.logging.filter, "warn");

    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_env_vars();

    let result = AppConfig::load_from_args(["ecosense", "--config", "does-not-exist.yaml"]);
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env_vars();

    for content in [
        "prediction:\n  sharpening_exponent: 0\n",
        "prediction:\n  keyword_bonus: -0.1\n",
        "prediction:\n  neutral_multiplier: 1.5\n",
    ] {
        let file = yaml_file(content);
        let path = path_of(&file);
        let result = AppConfig::load_from_args(["ecosense", "--config", path.as_str()]);
        assert!(result.is_err(), "accepted invalid config: {content}");
    }
}
