use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;

/// A store product with its price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseProduct {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: f64,
    pub currency: Option<String>,
}

describe_struct!(PurchaseProduct {
    "_id" => Option<String>,
    "name" => Option<String>,
    "price" => f64,
    "currency" => Option<String>,
});
