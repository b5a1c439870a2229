use sailbridge::core::ConfigProvider;
use sailbridge::{BridgeEngine, BridgeError, BridgePipeline, LocalStorage, TomlConfig};
use serde_json::json;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

fn bridge_toml(source: &str, output: &str) -> String {
    format!(
        r#"
[bridge]
name = "club-bridge"
description = "Race export bridge"
version = "1.0.0"

[source]
path = "{source}"

[load]
output_path = "{output}"
"#
    )
}

#[test]
fn test_toml_config_driven_conversion() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let export = json!({
        "competitors": {
            "1": { "compsailno": "7891", "comphelmname": "Molly Stanbridge" },
            "2": { "compsailno": "" },
        }
    });

    let source = write_file(&temp_dir, "Xmas.json", &export.to_string());
    let output = temp_dir
        .path()
        .join("competitors.csv")
        .to_str()
        .unwrap()
        .to_string();

    let config_path = write_file(&temp_dir, "bridge.toml", &bridge_toml(&source, &output));

    let config = TomlConfig::from_file(&config_path)?;
    config.validate_config()?;

    assert_eq!(config.source_path(), source);
    assert_eq!(config.output_path(), output);

    let storage = LocalStorage::new();
    let pipeline = BridgePipeline::new(storage, config);
    let engine = BridgeEngine::new(pipeline);

    let report = engine.run()?;

    assert_eq!(report.rows_written, 1);
    assert_eq!(report.skipped, 1);

    let written = std::fs::read_to_string(&output)?;
    assert!(written.starts_with("SailNo,Class,"));
    assert!(written.contains("7891"));

    Ok(())
}

#[test]
fn test_env_var_substitution_in_paths() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let export = json!({
        "competitors": {
            "1": { "compsailno": "42", "comphelmname": "Solo Sailor" },
        }
    });
    write_file(&temp_dir, "Xmas.json", &export.to_string());

    std::env::set_var("SAILBRIDGE_ITEST_DATA_DIR", temp_dir.path());

    let toml_content = format!(
        r#"
[bridge]
name = "club-bridge"
description = "Race export bridge"
version = "1.0.0"

[source]
path = "${{SAILBRIDGE_ITEST_DATA_DIR}}/Xmas.json"

[load]
output_path = "${{SAILBRIDGE_ITEST_DATA_DIR}}/competitors.csv"
"#
    );
    let config_path = write_file(&temp_dir, "bridge.toml", &toml_content);

    let config = TomlConfig::from_file(&config_path)?;

    let storage = LocalStorage::new();
    let pipeline = BridgePipeline::new(storage, config);
    let engine = BridgeEngine::new(pipeline);

    let report = engine.run()?;
    assert_eq!(report.rows_written, 1);
    assert!(temp_dir.path().join("competitors.csv").exists());

    std::env::remove_var("SAILBRIDGE_ITEST_DATA_DIR");
    Ok(())
}

#[test]
fn test_toml_monitoring_block_drives_engine_monitoring() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let export = json!({
        "competitors": {
            "1": { "compsailno": "7", "comphelmname": "Monitored Run" },
        }
    });

    let source = write_file(&temp_dir, "Xmas.json", &export.to_string());
    let output = temp_dir
        .path()
        .join("competitors.csv")
        .to_str()
        .unwrap()
        .to_string();

    let toml_content = format!(
        "{}\n[monitoring]\nenabled = true\n",
        bridge_toml(&source, &output)
    );
    let config_path = write_file(&temp_dir, "bridge.toml", &toml_content);

    let config = TomlConfig::from_file(&config_path)?;
    assert!(config.monitoring_enabled());

    let monitor_enabled = config.monitoring_enabled();
    let storage = LocalStorage::new();
    let pipeline = BridgePipeline::new(storage, config);
    let engine = BridgeEngine::new_with_monitoring(pipeline, monitor_enabled);

    let report = engine.run()?;
    assert_eq!(report.rows_written, 1);
    Ok(())
}

#[test]
fn test_toml_validation_rejects_non_csv_output() {
    let toml_content = bridge_toml("Xmas.json", "competitors.txt");

    let config = TomlConfig::from_toml_str(&toml_content).unwrap();
    let error = config.validate_config().unwrap_err();

    assert!(matches!(error, BridgeError::InvalidConfigValueError { .. }));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("no_such.toml");

    let error = TomlConfig::from_file(&missing).unwrap_err();
    assert!(matches!(error, BridgeError::IoError(_)));
}
