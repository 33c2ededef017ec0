use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use mnk::EngineConfig;

/// Reads an [`EngineConfig`] from a JSON file.
pub fn load_config(path: &Path) -> anyhow::Result<EngineConfig> {
    let file = File::open(path)
        .with_context(|| format!("Could not open config file '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config file '{}'", path.display()))
}

pub fn parse_config(json: &str) -> anyhow::Result<EngineConfig> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use mnk::Strategy;

    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = parse_config(r#"{"m": 5, "n": 5, "k": 4}"#).unwrap();
        assert_eq!(
            config,
            EngineConfig {
                m: 5,
                n: 5,
                k: 4,
                strategy: Strategy::AlphaBeta,
                max_depth: None,
            }
        );
        assert_eq!(parse_config("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn strategy_and_depth() {
        let config = parse_config(r#"{"strategy": "minimax", "max_depth": 2}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Minimax);
        assert_eq!(config.max_depth, Some(2));
    }

    #[test]
    fn written_config_reads_back() {
        let json = serde_json::to_string(&EngineConfig::default()).unwrap();
        assert_eq!(json, r#"{"m":3,"n":3,"k":3,"strategy":"alpha_beta"}"#);
        assert_eq!(parse_config(&json).unwrap(), EngineConfig::default());

        let config = EngineConfig {
            strategy: Strategy::FirstEmpty,
            max_depth: Some(3),
            ..EngineConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""strategy":"first_empty""#));
        assert_eq!(parse_config(&json).unwrap(), config);
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(parse_config(r#"{"strategy": "random"}"#).is_err());
    }

    #[test]
    fn missing_file() {
        let err = load_config(Path::new("/nonexistent/mnk.json")).unwrap_err();
        assert!(err.to_string().contains("Could not open config file"));
    }
}
