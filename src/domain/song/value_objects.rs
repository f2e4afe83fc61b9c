//! Song Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 生成模型
///
/// 对应上游 Suno 的 `model` 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Model {
    #[default]
    #[serde(rename = "chirp-v3-5")]
    V3_5,
    #[serde(rename = "chirp-v4")]
    V4,
    #[serde(rename = "chirp-v3-0")]
    V3_0,
    #[serde(rename = "chirp-v2-xxl-alpha")]
    V2,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V3_5 => "chirp-v3-5",
            Self::V4 => "chirp-v4",
            Self::V3_0 => "chirp-v3-0",
            Self::V2 => "chirp-v2-xxl-alpha",
        }
    }
}

impl FromStr for Model {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chirp-v3-5" => Ok(Self::V3_5),
            "chirp-v4" => Ok(Self::V4),
            "chirp-v3-0" => Ok(Self::V3_0),
            "chirp-v2-xxl-alpha" => Ok(Self::V2),
            other => Err(format!("unknown model: {}", other)),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 音频生成动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Generate,
    Extend,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Extend => "extend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default_is_v3_5() {
        assert_eq!(Model::default(), Model::V3_5);
        assert_eq!(Model::default().as_str(), "chirp-v3-5");
    }

    #[test]
    fn test_model_serde_names() {
        let json = serde_json::to_string(&Model::V2).unwrap();
        assert_eq!(json, "\"chirp-v2-xxl-alpha\"");

        let model: Model = serde_json::from_str("\"chirp-v4\"").unwrap();
        assert_eq!(model, Model::V4);
    }

    #[test]
    fn test_model_from_str_rejects_unknown() {
        assert_eq!("chirp-v3-0".parse::<Model>(), Ok(Model::V3_0));
        assert!("chirp-v9".parse::<Model>().is_err());
    }

    #[test]
    fn test_action_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Action::Extend).unwrap(), "\"extend\"");
        assert_eq!(Action::Generate.as_str(), "generate");
    }
}
