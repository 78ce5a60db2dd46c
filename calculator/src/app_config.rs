use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_max_dimension() -> usize {
    10
}

/// Runtime settings for the calculator: where the solver lives and how large
/// each entry grid may grow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_max_dimension")]
    pub max_rows: usize,
    #[serde(default = "default_max_dimension")]
    pub max_cols: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_rows: default_max_dimension(),
            max_cols: default_max_dimension(),
        }
    }
}

impl CalculatorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading calculator config {}", path_ref.display()))?;
        let config: CalculatorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing calculator config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"endpoint: http://127.0.0.1:8080\nmax_rows: 4\nmax_cols: 3\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = CalculatorConfig::load(&path).unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:8080");
        assert_eq!(config.max_rows, 4);
        assert_eq!(config.max_cols, 3);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CalculatorConfig = serde_yaml::from_str("max_rows: 6\n").unwrap();
        assert_eq!(config.max_rows, 6);
        assert_eq!(config.max_cols, 10);
        assert_eq!(config.endpoint, "http://127.0.0.1:5000");
    }

    #[test]
    fn cli_endpoint_overrides_config() {
        let config = CalculatorConfig::default()
            .with_endpoint(Some("http://solver:9000".to_string()));
        assert_eq!(config.endpoint, "http://solver:9000");

        let untouched = CalculatorConfig::default().with_endpoint(None);
        assert_eq!(untouched.endpoint, "http://127.0.0.1:5000");
    }
}
