use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Order styles supported by the connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    /// Execute at current market price
    Market,
    /// Execute at specified price or better
    Limit,
    /// Limit order that only ever adds liquidity
    LimitMaker,
}

impl OrderType {
    /// Canonical name used in persisted snapshots and exchange messages
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::LimitMaker => "LIMIT_MAKER",
        }
    }

    /// Returns true for order styles that rest at a limit price
    pub fn is_limit_type(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::LimitMaker)
    }
}

impl FromStr for OrderType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            "LIMIT_MAKER" => Ok(OrderType::LimitMaker),
            other => Err(Error::InvalidArgument(format!(
                "unknown order type '{other}'"
            ))),
        }
    }
}
