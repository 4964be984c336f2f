use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_CONFIG_PATH: &str = "config/guide.toml";

/// Host-facing knobs for the guide.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GuideConfig {
    /// Play UI cues when a recipe is staged or denied.
    pub play_sounds: bool,
    /// Tint ingredient tiles the player is missing.
    pub highlight_missing: bool,
    /// Optional JSON recipe pack merged into the catalog at startup.
    pub recipe_pack: Option<PathBuf>,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            play_sounds: true,
            highlight_missing: true,
            recipe_pack: None,
        }
    }
}

impl GuideConfig {
    /// Load the guide configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<GuideConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    GuideConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                GuideConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_config(contents: &str) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("brewguide_config_{timestamp}.toml"));
        fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn missing_file_means_defaults() {
        let cfg = GuideConfig::load_from_path(Path::new("config/does_not_exist.toml"));
        assert!(cfg.play_sounds);
        assert!(cfg.highlight_missing);
        assert!(cfg.recipe_pack.is_none());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let path = temp_config("play_sounds = false\n");
        let cfg = GuideConfig::load_from_path(&path);
        assert!(!cfg.play_sounds);
        assert!(cfg.highlight_missing);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_means_defaults() {
        let path = temp_config("play_sounds = \"asdf");
        let cfg = GuideConfig::load_from_path(&path);
        assert!(cfg.play_sounds);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn recipe_pack_path_round_trips() {
        let path = temp_config("recipe_pack = \"packs/extra.json\"\n");
        let cfg = GuideConfig::load_from_path(&path);
        assert_eq!(cfg.recipe_pack, Some(PathBuf::from("packs/extra.json")));
        let _ = fs::remove_file(&path);
    }
}
