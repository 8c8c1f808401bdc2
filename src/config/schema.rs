//! Configuration schema for `.examplenv.yml`.
//!
//! Every field is optional in the file; missing fields take the defaults
//! below.

use serde::{Deserialize, Serialize};

/// Root configuration structure for `.examplenv.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExamplenvConfig {
    /// File name prefix identifying env files.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Redact every value, keeping only keys.
    #[serde(default, skip_serializing_if = "is_false")]
    pub mask_all: bool,

    /// Descend into subdirectories.
    #[serde(default = "default_true")]
    pub recursive: bool,

    /// Directory names that are never descended into.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for ExamplenvConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            mask_all: false,
            recursive: true,
            exclude: default_exclude(),
        }
    }
}

/// Values given on the command line, taking precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub prefix: Option<String>,
    pub mask_all: bool,
    pub no_recursive: bool,
}

impl ExamplenvConfig {
    /// Apply command line overrides.
    ///
    /// Flags can only switch behaviour on; a `mask_all: true` in the file is
    /// not undone by omitting `--mask-all`.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(prefix) = &overrides.prefix {
            self.prefix = prefix.clone();
        }
        if overrides.mask_all {
            self.mask_all = true;
        }
        if overrides.no_recursive {
            self.recursive = false;
        }
        self
    }
}

fn default_prefix() -> String {
    ".env".to_string()
}

fn default_true() -> bool {
    true
}

fn default_exclude() -> Vec<String> {
    vec![".git".to_string(), "node_modules".to_string()]
}

fn is_false(v: &bool) -> bool {
    !v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dotenv_conventions() {
        let config = ExamplenvConfig::default();
        assert_eq!(config.prefix, ".env");
        assert!(!config.mask_all);
        assert!(config.recursive);
        assert_eq!(config.exclude, vec![".git", "node_modules"]);
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: ExamplenvConfig = serde_yaml::from_str("mask_all: true").unwrap();
        assert!(config.mask_all);
        assert_eq!(config.prefix, ".env");
        assert!(config.recursive);
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r#"
prefix: .secrets
mask_all: false
recursive: false
exclude: [vendor]
"#;
        let config: ExamplenvConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.prefix, ".secrets");
        assert!(!config.recursive);
        assert_eq!(config.exclude, vec!["vendor"]);
    }

    #[test]
    fn overrides_take_precedence() {
        let overrides = ConfigOverrides {
            prefix: Some(".local".to_string()),
            mask_all: true,
            no_recursive: true,
        };
        let config = ExamplenvConfig::default().with_overrides(&overrides);
        assert_eq!(config.prefix, ".local");
        assert!(config.mask_all);
        assert!(!config.recursive);
    }

    #[test]
    fn empty_overrides_keep_file_values() {
        let file = ExamplenvConfig {
            mask_all: true,
            ..Default::default()
        };
        let config = file.clone().with_overrides(&ConfigOverrides::default());
        assert_eq!(config, file);
    }

    #[test]
    fn serialization_skips_false_mask_all() {
        let yaml = serde_yaml::to_string(&ExamplenvConfig::default()).unwrap();
        assert!(!yaml.contains("mask_all"));
        assert!(yaml.contains("prefix"));
    }
}
