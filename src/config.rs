// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Annotator configuration supplied once at initialization.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::FeatureName;
use crate::selection::NEAR_WINDOW;

fn default_near_window() -> usize {
    NEAR_WINDOW
}

#[derive(Debug, Clone, Deserialize)]
struct AnnotatorConfigJson {
    features: Vec<String>,
    #[serde(default = "default_near_window")]
    near_window: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    features: Vec<FeatureName>,
    near_window: usize,
}

impl AnnotatorConfig {
    pub fn new(features: Vec<FeatureName>) -> Result<Self, ConfigError> {
        validate_features(&features)?;
        Ok(Self { features, near_window: NEAR_WINDOW })
    }

    pub fn with_near_window(mut self, near_window: usize) -> Self {
        self.near_window = near_window;
        self
    }

    pub fn features(&self) -> &[FeatureName] {
        &self.features
    }

    pub fn near_window(&self) -> usize {
        self.near_window
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let json: AnnotatorConfigJson =
            serde_json::from_str(raw).map_err(|source| ConfigError::Json { path: None, source })?;
        Self::from_json(json)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let json: AnnotatorConfigJson = serde_json::from_str(&raw)
            .map_err(|source| ConfigError::Json { path: Some(path.to_path_buf()), source })?;
        Self::from_json(json)
    }

    fn from_json(json: AnnotatorConfigJson) -> Result<Self, ConfigError> {
        let features = json
            .features
            .into_iter()
            .map(|value| {
                FeatureName::new(&value)
                    .map_err(|source| ConfigError::InvalidFeature { value, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(features)?.with_near_window(json.near_window))
    }
}

fn validate_features(features: &[FeatureName]) -> Result<(), ConfigError> {
    if features.is_empty() {
        return Err(ConfigError::NoFeatures);
    }
    for (index, feature) in features.iter().enumerate() {
        if features[..index].contains(feature) {
            return Err(ConfigError::DuplicateFeature { feature: feature.clone() });
        }
    }
    Ok(())
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Json { path: Option<PathBuf>, source: serde_json::Error },
    NoFeatures,
    DuplicateFeature { feature: FeatureName },
    InvalidFeature { value: String, source: crate::model::IdError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Json { path: Some(path), source } => {
                write!(f, "invalid config json in {}: {source}", path.display())
            }
            Self::Json { path: None, source } => write!(f, "invalid config json: {source}"),
            Self::NoFeatures => f.write_str("config must name at least one feature"),
            Self::DuplicateFeature { feature } => {
                write!(f, "feature '{feature}' is listed more than once")
            }
            Self::InvalidFeature { value, source } => {
                write!(f, "invalid feature name '{value}': {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidFeature { source, .. } => Some(source),
            Self::NoFeatures | Self::DuplicateFeature { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnnotatorConfig, ConfigError};
    use crate::selection::NEAR_WINDOW;

    #[test]
    fn parses_features_in_order_with_default_window() {
        let config = AnnotatorConfig::from_json_str(r#"{"features": ["kind", "eid"]}"#)
            .expect("config");
        let names = config.features().iter().map(|f| f.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["kind", "eid"]);
        assert_eq!(config.near_window(), NEAR_WINDOW);
    }

    #[test]
    fn rejects_empty_duplicate_and_invalid_features() {
        assert!(matches!(
            AnnotatorConfig::from_json_str(r#"{"features": []}"#),
            Err(ConfigError::NoFeatures)
        ));
        assert!(matches!(
            AnnotatorConfig::from_json_str(r#"{"features": ["kind", "kind"]}"#),
            Err(ConfigError::DuplicateFeature { .. })
        ));
        assert!(matches!(
            AnnotatorConfig::from_json_str(r#"{"features": ["a,b"]}"#),
            Err(ConfigError::InvalidFeature { .. })
        ));
        assert!(matches!(
            AnnotatorConfig::from_json_str("not json"),
            Err(ConfigError::Json { path: None, .. })
        ));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = AnnotatorConfig::load("/nonexistent/annospan-config.json").expect_err("missing");
        assert!(err.to_string().contains("annospan-config.json"));
    }

    #[test]
    fn explicit_window_overrides_default() {
        let config =
            AnnotatorConfig::from_json_str(r#"{"features": ["kind"], "near_window": 3}"#)
                .expect("config");
        assert_eq!(config.near_window(), 3);
    }
}
