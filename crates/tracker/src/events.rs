//! Connector order events
//!
//! Events emitted by the tracker as orders move through their lifecycle.
//! Consumers are the strategy/reporting layers above the connector.

use marlin_core::{InFlightOrder, OrderType, Price, Quantity, Timestamp, TradeType};
use serde::{Deserialize, Serialize};

/// A single fill reported by the exchange for one of our orders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFill {
    /// Exchange-assigned trade ID
    pub exchange_trade_id: String,
    /// Price this fill executed at
    pub price: Price,
    /// Filled quantity in base asset units
    pub amount: Quantity,
    /// Filled quantity in quote asset units
    pub quote_amount: Quantity,
    /// Asset the fee is denominated in
    pub fee_asset: String,
    /// Fee charged for this fill
    pub fee_amount: Quantity,
    /// When the fill occurred
    pub timestamp: Timestamp,
}

/// Everything the tracker can report about an order's lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OrderEvent {
    Created(OrderCreatedEvent),
    Filled(OrderFilledEvent),
    Completed(OrderCompletedEvent),
    Cancelled(OrderCancelledEvent),
    Failure(OrderFailureEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    pub timestamp: Timestamp,
    pub client_order_id: String,
    pub exchange_order_id: Option<String>,
    pub trading_pair: String,
    pub order_type: OrderType,
    pub trade_type: TradeType,
    pub price: Price,
    pub amount: Quantity,
}

impl OrderCreatedEvent {
    pub fn new(order: &InFlightOrder, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            client_order_id: order.client_order_id.clone(),
            exchange_order_id: order.exchange_order_id.clone(),
            trading_pair: order.trading_pair.clone(),
            order_type: order.order_type,
            trade_type: order.trade_type,
            price: order.price,
            amount: order.amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFilledEvent {
    pub timestamp: Timestamp,
    pub client_order_id: String,
    pub trading_pair: String,
    pub trade_type: TradeType,
    pub order_type: OrderType,
    pub price: Price,
    pub amount: Quantity,
    pub fee_asset: String,
    pub fee_amount: Quantity,
    pub exchange_trade_id: String,
}

impl OrderFilledEvent {
    pub fn new(order: &InFlightOrder, fill: &OrderFill) -> Self {
        Self {
            timestamp: fill.timestamp,
            client_order_id: order.client_order_id.clone(),
            trading_pair: order.trading_pair.clone(),
            trade_type: order.trade_type,
            order_type: order.order_type,
            price: fill.price,
            amount: fill.amount,
            fee_asset: fill.fee_asset.clone(),
            fee_amount: fill.fee_amount,
            exchange_trade_id: fill.exchange_trade_id.clone(),
        }
    }
}

/// Emitted once, when an order reaches a completed terminal state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCompletedEvent {
    pub timestamp: Timestamp,
    pub client_order_id: String,
    pub exchange_order_id: Option<String>,
    pub base_asset: String,
    pub quote_asset: String,
    pub fee_asset: String,
    pub base_asset_amount: Quantity,
    pub quote_asset_amount: Quantity,
    pub fee_amount: Quantity,
    pub order_type: OrderType,
    pub trade_type: TradeType,
}

impl OrderCompletedEvent {
    pub fn new(order: &InFlightOrder, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            client_order_id: order.client_order_id.clone(),
            exchange_order_id: order.exchange_order_id.clone(),
            base_asset: order.base_asset().to_string(),
            quote_asset: order.quote_asset().to_string(),
            fee_asset: order.fee_asset.clone(),
            base_asset_amount: order.executed_amount_base,
            quote_asset_amount: order.executed_amount_quote,
            fee_amount: order.fee_paid,
            order_type: order.order_type,
            trade_type: order.trade_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancelledEvent {
    pub timestamp: Timestamp,
    pub client_order_id: String,
    pub exchange_order_id: Option<String>,
}

/// Emitted when an order never made it onto the exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderFailureEvent {
    pub timestamp: Timestamp,
    pub client_order_id: String,
    pub order_type: OrderType,
}
