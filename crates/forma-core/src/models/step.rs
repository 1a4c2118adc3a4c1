use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;
use crate::models::Reward;

/// A single progression step and the rewards it grants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub step: i32,
    pub required_step: Option<i32>,
    pub rewards: Vec<Reward>,
}

describe_struct!(Step {
    "step" => i32,
    "requiredStep" => Option<i32>,
    "rewards" => Vec<Reward>,
});

/// Named group of consecutive steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepGroup {
    pub group: Option<String>,
    pub steps: Vec<Step>,
}

describe_struct!(StepGroup {
    "group" => Option<String>,
    "steps" => Vec<Step>,
});
