use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;

/// A board tile belonging to a skin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub skin_id: Option<i32>,
}

describe_struct!(Tile {
    "_id" => Option<String>,
    "name" => Option<String>,
    "color" => Option<String>,
    "skinId" => Option<i32>,
});

/// Relative spawn weight of a tile inside a cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TileWeight {
    pub tile_id: Option<i32>,
    pub weight: i32,
}

describe_struct!(TileWeight {
    "tileId" => Option<i32>,
    "weight" => i32,
});
