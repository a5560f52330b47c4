//! `[output]` section: result rendering and terminal color

use primality_domain::OutputFormat;
use serde::{Deserialize, Serialize};

pub use primality_domain::OutputFormat as FileOutputFormat;

/// `[output]` as written in TOML
///
/// ```toml
/// [output]
/// format = "full"
/// color = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Rendering when `-o` is not given; unset means summary
    pub format: Option<OutputFormat>,
    /// Colored verdicts and pass/fail marks; `--no-color` also disables it
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_output_defaults_to_unset_format_with_color() {
        let config: super::super::FileConfig = toml::from_str("[output]\ncolor = false\n").unwrap();
        assert_eq!(config.output.format, None);
        assert!(!config.output.color);
        assert!(FileOutputConfig::default().color);
    }
}
