//! Configuration loading from disk.

use vigil_core::VigilConfig;

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".vigil.toml");
    std::fs::write(
        &path,
        r#"
[llm]
provider = "ollama"
model = "llama3.2"
base_url = "http://localhost:11434"

[triage]
analysts = ["Erin", "Frank"]
"#,
    )
    .unwrap();

    let config = VigilConfig::from_file(&path).unwrap();
    assert_eq!(config.llm.provider, "ollama");
    assert_eq!(config.triage.analysts, vec!["Erin", "Frank"]);
    // Omitted keys fall back to defaults.
    assert_eq!(config.triage.unassigned_label, "Unassigned");
}

#[test]
fn missing_config_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = VigilConfig::from_file(&dir.path().join("nope.toml"));
    assert!(result.is_err());
}

#[test]
fn default_config_roundtrips_through_toml() {
    let config = VigilConfig::default();
    let serialized = toml::to_string(&config).unwrap();
    let reparsed = VigilConfig::from_toml(&serialized).unwrap();
    assert_eq!(reparsed.llm.model, config.llm.model);
    assert_eq!(reparsed.triage.analysts, config.triage.analysts);
}
