//! Persisted order snapshots
//!
//! A snapshot is the string-keyed mapping a connector persists for each
//! tracked order so that tracking state survives a process restart. Enum
//! and decimal values are carried as text, exactly as they appear in the
//! persisted JSON document.

use serde::{Deserialize, Serialize};

/// Persisted representation of a single in-flight order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub client_order_id: String,
    pub exchange_order_id: Option<String>,
    pub trading_pair: String,
    /// Canonical `OrderType` name, e.g. "LIMIT"
    pub order_type: String,
    /// Canonical `TradeType` name, e.g. "BUY"
    pub trade_type: String,
    pub price: String,
    pub amount: String,
    pub last_state: String,
    pub executed_amount_base: String,
    pub executed_amount_quote: String,
    pub fee_asset: String,
    pub fee_paid: String,
}
