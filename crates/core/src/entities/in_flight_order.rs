use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderType, TradeType};
use crate::error::{Error, Result};
use crate::snapshot::OrderSnapshot;

/// State of an order that has been submitted locally but not yet
/// acknowledged by the exchange
pub const STATE_LOCAL: &str = "LOCAL";

/// Exchange status codes after which an order receives no further updates.
/// The vocabulary is exchange-reported and connector-supplied; these sets
/// are the connector's current configuration, not a closed enumeration.
pub const DONE_STATES: &[&str] = &["DONE", "CANCEL"];

/// Exchange status codes that mean the order ended without completing
pub const CANCELLED_STATES: &[&str] = &["CANCEL"];

/// One order tracked by the connector, from local submission to its
/// terminal exchange state.
///
/// The record is a plain mutable value: the order tracker owns it, keyed by
/// `client_order_id`, and mutates it in place as exchange updates arrive.
/// It carries no synchronization of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InFlightOrder {
    /// Connector-assigned ID, unique per order attempt. Stable identity key.
    pub client_order_id: String,
    /// Exchange-assigned ID; absent until the exchange acknowledges the order
    pub exchange_order_id: Option<String>,
    pub trading_pair: String,
    pub order_type: OrderType,
    pub trade_type: TradeType,
    /// Limit price; carried but not meaningful for market orders
    pub price: Decimal,
    pub amount: Decimal,
    /// Exchange-reported status code, e.g. "submitted", "partial-filled"
    pub last_state: String,
    /// Cumulative filled quantity in base asset units. Non-decreasing.
    pub executed_amount_base: Decimal,
    /// Cumulative filled quantity in quote asset units. Non-decreasing.
    pub executed_amount_quote: Decimal,
    pub fee_asset: String,
    /// Cumulative fee paid. Non-decreasing.
    pub fee_paid: Decimal,
}

impl InFlightOrder {
    /// Create a record for a freshly submitted order, in the "LOCAL" state
    pub fn new(
        client_order_id: impl Into<String>,
        exchange_order_id: Option<String>,
        trading_pair: impl Into<String>,
        order_type: OrderType,
        trade_type: TradeType,
        price: Decimal,
        amount: Decimal,
    ) -> Self {
        Self::new_with_state(
            client_order_id,
            exchange_order_id,
            trading_pair,
            order_type,
            trade_type,
            price,
            amount,
            STATE_LOCAL,
        )
    }

    /// Create a record in an explicit initial state.
    /// Used when restoring an order that has already lived past "LOCAL".
    #[allow(clippy::too_many_arguments)]
    pub fn new_with_state(
        client_order_id: impl Into<String>,
        exchange_order_id: Option<String>,
        trading_pair: impl Into<String>,
        order_type: OrderType,
        trade_type: TradeType,
        price: Decimal,
        amount: Decimal,
        initial_state: impl Into<String>,
    ) -> Self {
        Self {
            client_order_id: client_order_id.into(),
            exchange_order_id,
            trading_pair: trading_pair.into(),
            order_type,
            trade_type,
            price,
            amount,
            last_state: initial_state.into(),
            executed_amount_base: Decimal::ZERO,
            executed_amount_quote: Decimal::ZERO,
            fee_asset: String::new(),
            fee_paid: Decimal::ZERO,
        }
    }

    /// True once the exchange has reported a terminal status
    pub fn is_done(&self) -> bool {
        DONE_STATES.contains(&self.last_state.as_str())
    }

    /// True if the order ended without completing
    pub fn is_failure(&self) -> bool {
        CANCELLED_STATES.contains(&self.last_state.as_str())
    }

    /// True if the order was cancelled.
    /// Same condition as `is_failure`; the two are kept as separate reads
    /// because callers ask the two questions in different places.
    pub fn is_cancelled(&self) -> bool {
        CANCELLED_STATES.contains(&self.last_state.as_str())
    }

    /// True while the order has not yet been acknowledged by the exchange
    pub fn is_local(&self) -> bool {
        self.last_state == STATE_LOCAL
    }

    /// Base asset of the trading pair, e.g. "ETH" for "ETH-USDT"
    pub fn base_asset(&self) -> &str {
        self.trading_pair.split('-').next().unwrap_or("")
    }

    /// Quote asset of the trading pair, e.g. "USDT" for "ETH-USDT"
    pub fn quote_asset(&self) -> &str {
        self.trading_pair.split('-').nth(1).unwrap_or("")
    }

    /// Record the exchange acknowledgment. The exchange order ID moves from
    /// absent to present exactly once; a second assignment is rejected.
    pub fn update_exchange_order_id(&mut self, exchange_order_id: impl Into<String>) -> Result<()> {
        if let Some(existing) = &self.exchange_order_id {
            return Err(Error::InvalidArgument(format!(
                "order {} already has exchange order id {existing}",
                self.client_order_id
            )));
        }
        self.exchange_order_id = Some(exchange_order_id.into());
        Ok(())
    }

    /// Accumulate one fill into the executed amounts and fee counters
    pub fn register_fill(
        &mut self,
        base_amount: Decimal,
        quote_amount: Decimal,
        fee_asset: &str,
        fee_amount: Decimal,
    ) {
        self.executed_amount_base += base_amount;
        self.executed_amount_quote += quote_amount;
        if self.fee_asset.is_empty() {
            self.fee_asset = fee_asset.to_string();
        }
        self.fee_paid += fee_amount;
    }

    /// Record the latest exchange-reported status code. Ordering along the
    /// exchange lifecycle is the caller's responsibility.
    pub fn set_last_state(&mut self, state: impl Into<String>) {
        self.last_state = state.into();
    }

    /// Rebuild a record from a persisted snapshot.
    ///
    /// All-or-nothing: either every field of the snapshot parses and a fully
    /// populated record is returned, or the first bad field fails the call.
    /// The snapshot's `last_state` becomes the record's state directly; a
    /// restored order must not be treated as freshly local.
    pub fn from_snapshot(snapshot: &OrderSnapshot) -> Result<Self> {
        let order_type = OrderType::from_str(&snapshot.order_type)?;
        let trade_type = TradeType::from_str(&snapshot.trade_type)?;
        let price = parse_decimal("price", &snapshot.price)?;
        let amount = parse_decimal("amount", &snapshot.amount)?;
        let executed_amount_base =
            parse_decimal("executed_amount_base", &snapshot.executed_amount_base)?;
        let executed_amount_quote =
            parse_decimal("executed_amount_quote", &snapshot.executed_amount_quote)?;
        let fee_paid = parse_decimal("fee_paid", &snapshot.fee_paid)?;

        let mut order = Self::new_with_state(
            snapshot.client_order_id.clone(),
            snapshot.exchange_order_id.clone(),
            snapshot.trading_pair.clone(),
            order_type,
            trade_type,
            price,
            amount,
            snapshot.last_state.clone(),
        );
        order.executed_amount_base = executed_amount_base;
        order.executed_amount_quote = executed_amount_quote;
        order.fee_asset = snapshot.fee_asset.clone();
        order.fee_paid = fee_paid;
        order.last_state = snapshot.last_state.clone();
        Ok(order)
    }

    /// Persistence view of this record, the inverse of `from_snapshot`
    pub fn to_snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            client_order_id: self.client_order_id.clone(),
            exchange_order_id: self.exchange_order_id.clone(),
            trading_pair: self.trading_pair.clone(),
            order_type: self.order_type.as_str().to_string(),
            trade_type: self.trade_type.as_str().to_string(),
            price: self.price.to_string(),
            amount: self.amount.to_string(),
            last_state: self.last_state.clone(),
            executed_amount_base: self.executed_amount_base.to_string(),
            executed_amount_quote: self.executed_amount_quote.to_string(),
            fee_asset: self.fee_asset.clone(),
            fee_paid: self.fee_paid.to_string(),
        }
    }
}

fn parse_decimal(field: &'static str, text: &str) -> Result<Decimal> {
    Decimal::from_str(text).map_err(|source| Error::ParseError { field, source })
}
