use serde::Deserialize;
use std::path::Path;

use crate::test::Framework;

pub const DEFAULT_MAX_OUTPUT_LINES: usize = 10_000;
pub const MAX_OUTPUT_LINES_LIMIT: usize = 1_000_000;

const SETTINGS_FILE: &str = ".verdict/settings.json";

/// All configurable settings with their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictSettings {
    /// Used when the caller names no framework.
    pub default_framework: Framework,
    /// Per-record cap on `output` lines.
    pub max_output_lines: usize,
}

impl Default for VerdictSettings {
    fn default() -> Self {
        Self {
            default_framework: Framework::Generic,
            max_output_lines: DEFAULT_MAX_OUTPUT_LINES,
        }
    }
}

/// Raw JSON representation, all fields optional for partial overrides.
#[derive(Debug, Deserialize, Default)]
struct SettingsFile {
    #[serde(rename = "parse.defaultFramework")]
    default_framework: Option<String>,
    #[serde(rename = "output.maxLinesPerTest")]
    max_output_lines: Option<usize>,
}

/// Resolve settings: defaults → user global → project-local.
pub fn resolve(project_root: Option<&Path>) -> VerdictSettings {
    let global_path = dirs::home_dir().map(|h| h.join(SETTINGS_FILE));
    let project_path = project_root.map(|r| r.join(SETTINGS_FILE));
    resolve_with_paths(global_path.as_deref(), project_path.as_deref())
}

/// Resolver over explicit file paths, without the home directory lookup.
pub fn resolve_with_paths(global_path: Option<&Path>, project_path: Option<&Path>) -> VerdictSettings {
    let mut settings = VerdictSettings::default();

    if let Some(path) = global_path {
        apply_file(&mut settings, path);
    }
    if let Some(path) = project_path {
        apply_file(&mut settings, path);
    }

    settings
}

fn apply_file(settings: &mut VerdictSettings, path: &Path) {
    let Ok(content) = std::fs::read_to_string(path) else { return };
    let Ok(file) = serde_json::from_str::<SettingsFile>(&content) else {
        tracing::warn!("Invalid settings file, ignoring: {}", path.display());
        return;
    };
    if let Some(id) = file.default_framework {
        match id.parse::<Framework>() {
            Ok(framework) => settings.default_framework = framework,
            Err(_) => tracing::warn!("parse.defaultFramework ({}) is not a known framework, ignoring", id),
        }
    }
    if let Some(v) = file.max_output_lines {
        if v > 0 && v <= MAX_OUTPUT_LINES_LIMIT {
            settings.max_output_lines = v;
        } else {
            tracing::warn!(
                "output.maxLinesPerTest ({}) out of range (1..{}), using default",
                v,
                MAX_OUTPUT_LINES_LIMIT
            );
        }
    }
}
