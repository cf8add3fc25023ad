//! Tests for configuration parsing

use mentor_core::config::CONFIG_FILE_NAME;
use mentor_core::{FindingKind, MentorConfig, Severity};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = MentorConfig::default();
    assert_eq!(config.general.fail_on, "error");
    assert_eq!(config.ai.provider, "deepseek");
    assert_eq!(config.ai.model, "deepseek-chat");
    assert_eq!(config.ai.memory_turns, 20);
    assert!(config.ai.api_key.is_none());
    assert_eq!(config.output.format, "terminal");
    assert!(config.output.color);
    assert_eq!(config.logging.level, "warn");
    assert!(config.review.disabled_rules.is_empty());
    assert!(config.review.ignore_paths.contains(&"node_modules/".to_string()));
    assert!(config.rules.is_empty());
}

#[test]
fn test_empty_file_gives_defaults() {
    let config: MentorConfig = toml::from_str("").unwrap();
    assert_eq!(config.ai.max_tokens, 2048);
    assert_eq!(config.ai.temperature, 0.7);
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: MentorConfig = toml::from_str(
        r#"
[ai]
provider = "ollama"
model = "qwen2.5"
memory_turns = 0
"#,
    )
    .unwrap();
    assert_eq!(config.ai.provider, "ollama");
    assert_eq!(config.ai.memory_turns, 0);
    assert_eq!(config.ai.max_tokens, 2048);
    assert_eq!(config.general.fail_on, "error");
}

#[test]
fn test_serialize_config() {
    let config = MentorConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("fail_on"));
    assert!(toml_str.contains("deepseek-chat"));
    assert!(!toml_str.contains("api_key"));
}

#[test]
fn test_parse_custom_rules() {
    let toml_str = r#"
[[rules]]
id = "no-alert"
pattern = 'alert\('
message = "不要使用alert"
type = "error"
severity = "high"
paths = ["*.js", "*.ts"]
suggestion = "使用页面内提示"
reject_if_contains = "// allow"

[[rules]]
pattern = "HACK"
message = "临时代码"
"#;

    let config: MentorConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.rules.len(), 2);

    let r0 = &config.rules[0];
    assert_eq!(r0.id.as_deref(), Some("no-alert"));
    assert_eq!(r0.pattern, r"alert\(");
    assert_eq!(r0.kind, FindingKind::Error);
    assert_eq!(r0.severity, Severity::High);
    assert_eq!(r0.paths, vec!["*.js", "*.ts"]);
    assert_eq!(r0.suggestion.as_deref(), Some("使用页面内提示"));
    assert_eq!(r0.reject_if_contains.as_deref(), Some("// allow"));

    let r1 = &config.rules[1];
    assert!(r1.id.is_none());
    assert_eq!(r1.kind, FindingKind::Warning);
    assert_eq!(r1.severity, Severity::Medium);
    assert!(r1.paths.is_empty());
    assert!(r1.suggestion.is_none());
}

#[test]
fn test_bad_severity_is_rejected() {
    let result: Result<MentorConfig, _> = toml::from_str(
        r#"
[[rules]]
pattern = "x"
message = "y"
severity = "critical"
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_save_and_load() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE_NAME);

    let mut config = MentorConfig::default();
    config.ai.provider = "anthropic".to_string();
    config.review.disabled_rules = vec!["magic-number".to_string()];
    config.save(&path).unwrap();

    let loaded = MentorConfig::from_file(&path).unwrap();
    assert_eq!(loaded.ai.provider, "anthropic");
    assert_eq!(loaded.review.disabled_rules, vec!["magic-number"]);
}

#[test]
fn test_find_and_load_walks_up() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        "[general]\nfail_on = \"warning\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    let config = MentorConfig::find_and_load(&nested).unwrap();
    assert_eq!(config.general.fail_on, "warning");
}

#[test]
fn test_invalid_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[general\n").unwrap();
    assert!(MentorConfig::from_file(&path).is_err());
}
