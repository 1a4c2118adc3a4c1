use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_struct;
use crate::enums::{EventType, TradeType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub trade_type: Option<TradeType>,
    pub event_type: Option<EventType>,
    pub value: i32,
    pub remaining_seconds: Option<i32>,
}

describe_struct!(Reward {
    "tradeType" => Option<TradeType>,
    "eventType" => Option<EventType>,
    "value" => i32,
    "remainingSeconds" => Option<i32>,
});
