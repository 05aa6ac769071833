use std::fs;
use std::path::Path;

use anyhow::Context;

use super::settings::{self, EngineConfig, PartialEngineConfig};

fn is_toml_path(path: &Path) -> bool {
    path.extension()
        .and_then(|value| value.to_str())
        .map(|value| value.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

fn parse_partial_config(path: &Path, raw: &str) -> anyhow::Result<PartialEngineConfig> {
    if is_toml_path(path) {
        return toml::from_str(raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()));
    }

    serde_json::from_str(raw).with_context(|| format!("Failed to parse config file {}", path.display()))
}

pub(super) fn read_engine_config(path: &Path) -> anyhow::Result<EngineConfig> {
    if !path.exists() {
        return Ok(EngineConfig::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    if raw.trim().is_empty() {
        return Ok(EngineConfig::default());
    }

    let partial = parse_partial_config(path, &raw)?;
    log::info!("Loaded engine config from {}", path.display());

    Ok(settings::merge_partial_config(partial))
}

pub(super) fn write_engine_config(path: &Path, config: EngineConfig) -> anyhow::Result<EngineConfig> {
    let normalized = settings::normalize_engine_config(config);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
    }

    let content = if is_toml_path(path) {
        toml::to_string_pretty(&normalized).context("Failed to serialize config")?
    } else {
        serde_json::to_string_pretty(&normalized).context("Failed to serialize config")?
    };
    fs::write(path, format!("{}\n", content.trim_end()))
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    log::info!("Saved engine config to {}", path.display());

    Ok(normalized)
}

pub(super) fn load_config_impl(path: &Path) -> Result<EngineConfig, String> {
    read_engine_config(path).map_err(|e| format!("{:#}", e))
}

pub(super) fn save_config_impl(path: &Path, config: EngineConfig) -> Result<EngineConfig, String> {
    write_engine_config(path, config).map_err(|e| format!("{:#}", e))
}

/// CSS rules that render the three marker kinds distinctly.
pub fn build_marker_stylesheet(config: &EngineConfig) -> String {
    let rules = [
        (&config.current_class, &config.current_background, ""),
        (&config.other_class, &config.other_background, ""),
        (
            &config.replaced_class,
            &config.replaced_background,
            " transition: background-color 0.3s ease;",
        ),
    ];

    rules
        .iter()
        .map(|(class, background, extra)| {
            format!(
                ".{} {{ background-color: {} !important; color: {} !important;{} }}",
                class, background, config.marker_text_color, extra
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config_path(file_name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("richfind-config-{}", uuid::Uuid::new_v4()))
            .join(file_name)
    }

    #[test]
    fn read_engine_config_should_return_defaults_for_missing_file() {
        let path = temp_config_path("config.json");
        let config = read_engine_config(&path).expect("missing config should load");

        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn read_engine_config_should_merge_partial_json() {
        let path = temp_config_path("config.json");
        fs::create_dir_all(path.parent().expect("temp path should have a parent"))
            .expect("temp dir should be created");
        fs::write(&path, r##"{ "otherBackground": "#eeeeee", "scrollDelayMs": 250 }"##)
            .expect("config should be written");

        let config = read_engine_config(&path).expect("config should load");

        assert_eq!(config.other_background, "#eeeeee");
        assert_eq!(config.scroll_delay_ms, 250);
        assert_eq!(config.current_class, "current-match");

        let _ = fs::remove_dir_all(path.parent().expect("temp path should have a parent"));
    }

    #[test]
    fn read_engine_config_should_parse_toml_by_extension() {
        let path = temp_config_path("config.toml");
        fs::create_dir_all(path.parent().expect("temp path should have a parent"))
            .expect("temp dir should be created");
        fs::write(&path, "currentClass = \"now\"\nscrollIntoView = false\n")
            .expect("config should be written");

        let config = read_engine_config(&path).expect("config should load");

        assert_eq!(config.current_class, "now");
        assert!(!config.scroll_into_view);

        let _ = fs::remove_dir_all(path.parent().expect("temp path should have a parent"));
    }

    #[test]
    fn load_config_impl_should_report_parse_errors() {
        let path = temp_config_path("config.json");
        fs::create_dir_all(path.parent().expect("temp path should have a parent"))
            .expect("temp dir should be created");
        fs::write(&path, "{ not json").expect("config should be written");

        let error = load_config_impl(&path).expect_err("broken config should fail");

        assert!(error.contains("Failed to parse config file"));

        let _ = fs::remove_dir_all(path.parent().expect("temp path should have a parent"));
    }

    #[test]
    fn write_engine_config_should_normalize_and_round_trip() {
        let path = temp_config_path("config.json");
        let config = EngineConfig {
            replaced_class: "  done  ".to_string(),
            ..EngineConfig::default()
        };

        let saved = write_engine_config(&path, config).expect("config should save");
        let loaded = read_engine_config(&path).expect("config should load");

        assert_eq!(saved.replaced_class, "done");
        assert_eq!(loaded, saved);

        let raw = fs::read_to_string(&path).expect("config file should exist");
        assert!(raw.ends_with("}\n"));

        let _ = fs::remove_dir_all(path.parent().expect("temp path should have a parent"));
    }

    #[test]
    fn build_marker_stylesheet_should_emit_one_rule_per_marker_kind() {
        let stylesheet = build_marker_stylesheet(&EngineConfig::default());

        assert_eq!(stylesheet.lines().count(), 3);
        assert!(stylesheet.contains(".current-match { background-color: #ffeb3b !important;"));
        assert!(stylesheet.contains(".other-match { background-color: #fff59d !important;"));
        assert!(stylesheet.contains(".replaced-match { background-color: #a5d6a7 !important;"));
    }
}
