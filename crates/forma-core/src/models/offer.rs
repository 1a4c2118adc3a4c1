use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;
use crate::models::RequirementCondition;

/// A purchasable offer gated by player requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub purchase_product_id: Option<String>,
    pub requirements: Vec<RequirementCondition>,
}

describe_struct!(Offer {
    "_id" => Option<String>,
    "name" => Option<String>,
    "purchaseProductId" => Option<String>,
    "requirements" => Vec<RequirementCondition>,
});
