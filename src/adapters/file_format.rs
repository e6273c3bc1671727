//! File format detection shared by the file adapters.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Serialization format of a data file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(FileFormat::Yaml),
            "json" => Some(FileFormat::Json),
            _ => None,
        }
    }

    pub(crate) fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T, String> {
        match self {
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            FileFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }

    pub(crate) fn render<T: Serialize>(&self, value: &T) -> Result<String, String> {
        match self {
            FileFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
            FileFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_yaml_and_json() {
        assert_eq!(FileFormat::from_path(Path::new("a/b.yaml")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("b.YML")), Some(FileFormat::Yaml));
        assert_eq!(FileFormat::from_path(Path::new("c.json")), Some(FileFormat::Json));
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(FileFormat::from_path(Path::new("data/profils.xlsx")), None);
        assert_eq!(FileFormat::from_path(Path::new("no_extension")), None);
    }

    #[test]
    fn parse_reports_syntax_errors() {
        let result: Result<Vec<f64>, _> = FileFormat::Json.parse("[1, 2,");
        assert!(result.is_err());
    }
}
