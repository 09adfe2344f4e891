// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::errors::PromptError;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sampler: SamplerConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,
}

/// Counts handed to the archive when sampling inspirations, plus whether
/// stored feedback is shown alongside each program.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub k_elite: usize,
    pub k_rand: usize,
    pub enable_feedback: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            k_elite: 3,
            k_rand: 2,
            enable_feedback: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackConfig {
    /// Fence tag for the program and evaluation script in the feedback prompt.
    #[serde(default = "default_language")]
    pub language: String,
    /// Script used when a feedback request names none.
    #[serde(default)]
    pub evaluation_script: Option<PathBuf>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            evaluation_script: None,
        }
    }
}

fn default_language() -> String {
    "python".into()
}

impl FeedbackConfig {
    /// The language tag sits right after a code fence, so it must be a single word.
    pub fn validate(&self) -> Result<(), PromptError> {
        if self.language.is_empty()
            || self
                .language
                .chars()
                .any(|c| c.is_whitespace() || c == '`')
        {
            return Err(PromptError::Config(format!(
                "feedback.language must be a single fence tag, got {:?}",
                self.language
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_dir() {
            Some(dir) => Self::load_in(&dir),
            None => Ok(Self::default()),
        }
    }

    /// Load `config.toml` from `dir`, falling back to defaults when absent.
    pub fn load_in(dir: &Path) -> anyhow::Result<Self> {
        let path = paths::config_file_in(dir);
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reasonable() {
        let c = Config::default();
        assert_eq!(c.sampler.k_elite, 3);
        assert_eq!(c.sampler.k_rand, 2);
        assert!(c.sampler.enable_feedback);
        assert_eq!(c.feedback.language, "python");
        assert!(c.feedback.evaluation_script.is_none());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.sampler.k_elite, 3);
        assert_eq!(config.feedback.language, "python");
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
[sampler]
k_elite = 5
k_rand = 0
enable_feedback = false

[feedback]
language = "rust"
evaluation_script = "bench/eval.rs"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.sampler.k_elite, 5);
        assert_eq!(config.sampler.k_rand, 0);
        assert!(!config.sampler.enable_feedback);
        assert_eq!(config.feedback.language, "rust");
        assert_eq!(
            config.feedback.evaluation_script,
            Some(PathBuf::from("bench/eval.rs"))
        );
    }

    #[test]
    fn test_feedback_section_without_language() {
        let toml_str = r#"
[feedback]
evaluation_script = "eval.py"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.feedback.language, "python");
    }

    #[test]
    fn test_language_validation() {
        assert!(FeedbackConfig::default().validate().is_ok());
        for bad in ["", "py thon", "```", "rust\n"] {
            let c = FeedbackConfig {
                language: bad.into(),
                evaluation_script: None,
            };
            assert!(c.validate().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[sampler]\nk_elite = 1\nk_rand = 4\nenable_feedback = true\n")
            .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.sampler.k_elite, 1);
        assert_eq!(config.sampler.k_rand, 4);
    }

    #[test]
    fn test_load_in_reads_config_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("config.toml"),
            "[sampler]\nk_elite = 7\nk_rand = 0\nenable_feedback = false\n",
        )
        .unwrap();
        let config = Config::load_in(dir.path()).unwrap();
        assert_eq!(config.sampler.k_elite, 7);
        assert!(!config.sampler.enable_feedback);
    }

    #[test]
    fn test_load_in_empty_dir_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_in(dir.path()).unwrap();
        assert_eq!(config.sampler.k_elite, 3);
        assert_eq!(config.feedback.language, "python");
    }

    #[test]
    fn test_partial_sampler_section_keeps_defaults() {
        let config: Config = toml::from_str("[sampler]\nk_elite = 5\n").unwrap();
        assert_eq!(config.sampler.k_elite, 5);
        assert_eq!(config.sampler.k_rand, 2);
        assert!(config.sampler.enable_feedback);

        let config: Config = toml::from_str("[sampler]\nenable_feedback = false\n").unwrap();
        assert_eq!(config.sampler.k_elite, 3);
        assert!(!config.sampler.enable_feedback);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
