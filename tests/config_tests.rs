//! 配置功能测试

use polyglot::infrastructure::config::{default_languages, Config};
use polyglot::state::AppState;
use polyglot::AppError;
use std::time::Duration;

#[test]
fn test_config_toml_format() {
    let toml_content = r#"
provider = "google"

[network]
timeout_ms = 2500
retries = 5

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"

[display]
theme = "wudao"
enable_emoji = false

[[languages]]
code = "ko"
name = "Korean"
"#;

    let config = Config::from_toml_str(toml_content).unwrap();
    assert_eq!(config.network.timeout_ms, 2500);
    assert_eq!(config.network.retries, 5);
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));
    assert_eq!(config.display.theme, "wudao");
    assert!(!config.display.enable_emoji);
    assert_eq!(config.languages.len(), 1);

    let transport = config.network.transport_config();
    assert_eq!(transport.timeout, Duration::from_millis(2500));
    assert_eq!(transport.retries, 5);
}

#[test]
fn test_default_language_order() {
    let codes: Vec<_> = default_languages().into_iter().map(|l| l.code).collect();
    assert_eq!(&codes[..4], &["en", "zh-CN", "zh-TW", "ja"]);
}

#[test]
fn test_unknown_provider_is_fatal() {
    let config = Config {
        provider: "babelfish".to_string(),
        ..Config::default()
    };

    match AppState::new(config) {
        Err(AppError::UnknownProvider { given, valid }) => {
            assert_eq!(given, "babelfish");
            assert!(valid.contains("google"));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("unknown provider accepted"),
    }
}

#[test]
fn test_known_provider_builds_state() {
    let state = AppState::new(Config::default()).unwrap();
    assert_eq!(state.orchestrator.languages().len(), 15);
    assert_eq!(state.config.provider, "google");
}
