use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;
use crate::models::{StepGroup, TileWeight};

/// A timed cascade event: a board skin, a tile distribution and step rewards.
///
/// `startDate`/`endDate` are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cascade {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub skin_id: Option<i32>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub step_rule: Vec<TileWeight>,
    pub step_info: Vec<StepGroup>,
}

describe_struct!(Cascade {
    "_id" => Option<String>,
    "name" => Option<String>,
    "skinId" => Option<i32>,
    "startDate" => Option<i64>,
    "endDate" => Option<i64>,
    "stepRule" => Vec<TileWeight>,
    "stepInfo" => Vec<StepGroup>,
});
