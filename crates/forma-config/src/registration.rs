//! Startup schema registration.

use serde::{Deserialize, Deserializer, Serialize};

/// Types registered when none are configured.
pub const DEFAULT_TYPES: [&str; 5] = ["Skin", "PurchaseProduct", "Offer", "Cascade", "Tile"];

fn default_types() -> Vec<String> {
    DEFAULT_TYPES.iter().map(ToString::to_string).collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Generate schemas for `types` before every command runs.
    #[serde(default)]
    pub enabled: bool,

    /// Type names to register, in order. Accepts a list or a
    /// comma-separated string; blank means the defaults.
    #[serde(default = "default_types", deserialize_with = "deserialize_types")]
    pub types: Vec<String>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            types: default_types(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypeList {
    Csv(String),
    List(Vec<String>),
}

fn deserialize_types<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match TypeList::deserialize(deserializer)? {
        TypeList::Csv(s) => s.split(',').map(str::to_string).collect(),
        TypeList::List(list) => list,
    };
    let types: Vec<String> = raw
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if types.is_empty() {
        Ok(default_types())
    } else {
        Ok(types)
    }
}
