use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;
use crate::enums::Requirement;

/// One gating condition, e.g. `minLevel >= 10`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementCondition {
    pub requirement: Option<Requirement>,
    pub operator: Option<String>,
    pub value: Option<i32>,
}

describe_struct!(RequirementCondition {
    "requirement" => Option<Requirement>,
    "operator" => Option<String>,
    "value" => Option<i32>,
});
