use crate::error::{CodegradeError, Result};
use crate::types::config::CodegradeConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "codegrade.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/codegrade/config.toml";

/// Loads configuration for scoring `target`: a `codegrade.toml` sitting
/// next to the target file, layered over the user's global config. Both
/// files are optional; defaults cover everything.
pub fn load_config(target: &Path) -> Result<CodegradeConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    let local = target
        .parent()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    load_config_files(global.as_deref(), &local)
}

pub(crate) fn load_config_files(
    global_path: Option<&Path>,
    local_path: &Path,
) -> Result<CodegradeConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, local_path)?;

    merged
        .try_into()
        .map_err(|e: toml::de::Error| CodegradeError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let content = std::fs::read_to_string(path)?;
    let value = toml::from_str(&content)
        .map_err(|e| CodegradeError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, value);
    Ok(())
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn no_config_files_yields_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_files(None, &dir.path().join(DEFAULT_CONFIG_FILE))
            .expect("load should not fail");
        assert_eq!(cfg.analyzer().binary, "cppcheck");
        assert!(cfg.fail_under().is_none());
    }

    #[test]
    fn local_config_overrides_global() {
        let global_dir = TempDir::new().expect("global temp dir should be created");
        let local_dir = TempDir::new().expect("local temp dir should be created");
        let global_path = global_dir.path().join("config.toml");
        let local_path = local_dir.path().join(DEFAULT_CONFIG_FILE);

        fs::write(
            &global_path,
            r#"
[narrative]
model = "gemini-2.0-flash"

[gate]
fail_under = 50.0
"#,
        )
        .expect("global config should write");

        fs::write(
            &local_path,
            r#"
[narrative]
model = "gemini-2.5-flash"
"#,
        )
        .expect("local config should write");

        let cfg = load_config_files(Some(&global_path), &local_path).expect("load should succeed");
        assert_eq!(cfg.narrative().model, "gemini-2.5-flash");
        // global keys not shadowed locally survive the merge
        assert_eq!(cfg.fail_under(), Some(50.0));
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "not = [valid").expect("config should write");

        let err = load_config_files(None, &path).expect_err("malformed toml should fail");
        assert!(matches!(err, CodegradeError::ConfigParse(_)));
    }
}
