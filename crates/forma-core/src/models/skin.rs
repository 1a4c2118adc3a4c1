use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;

/// Visual theme for a board. `createdDate` is epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub asset_url: Option<String>,
    pub unlock_level: Option<i32>,
    pub premium: bool,
    pub created_date: Option<i64>,
}

describe_struct!(Skin {
    "_id" => Option<String>,
    "name" => Option<String>,
    "assetUrl" => Option<String>,
    "unlockLevel" => Option<i32>,
    "premium" => bool,
    "createdDate" => Option<i64>,
});
