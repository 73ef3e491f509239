//! In-flight order table
//!
//! Tracks every order the connector has submitted, keyed by
//! `client_order_id`. Exchange updates are applied in place and surface as
//! [`OrderEvent`]s. The table is single-owner: it holds no locks, and the
//! surrounding connector decides who gets to mutate it and when.

use std::collections::HashMap;

use chrono::Utc;
use log::{debug, info, warn};
use marlin_core::{InFlightOrder, OrderSnapshot};

use crate::error::{Error, Result};
use crate::events::{
    OrderCancelledEvent, OrderCompletedEvent, OrderCreatedEvent, OrderEvent, OrderFailureEvent,
    OrderFill, OrderFilledEvent,
};

/// In-memory table of in-flight orders
#[derive(Debug, Default)]
pub struct OrderTracker {
    orders: HashMap<String, InFlightOrder>,
}

impl OrderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin tracking a freshly submitted order
    pub fn start_tracking(&mut self, order: InFlightOrder) -> Result<OrderEvent> {
        if self.orders.contains_key(&order.client_order_id) {
            return Err(Error::DuplicateOrder {
                client_order_id: order.client_order_id.clone(),
            });
        }
        debug!(
            "tracking order {} ({} {:?} {:?} {} @ {})",
            order.client_order_id,
            order.trading_pair,
            order.trade_type,
            order.order_type,
            order.amount,
            order.price,
        );
        let event = OrderCreatedEvent::new(&order, Utc::now());
        self.orders.insert(order.client_order_id.clone(), order);
        Ok(OrderEvent::Created(event))
    }

    /// Record the exchange acknowledgment of an order: assigns the exchange
    /// order ID (exactly once) and advances the reported state.
    pub fn acknowledge(
        &mut self,
        client_order_id: &str,
        exchange_order_id: &str,
        new_state: &str,
    ) -> Result<()> {
        let order = self.get_mut(client_order_id)?;
        order.update_exchange_order_id(exchange_order_id)?;
        order.set_last_state(new_state);
        debug!("order {client_order_id} acknowledged as {exchange_order_id} ({new_state})");
        Ok(())
    }

    /// Apply one fill to an order, accumulating executed amounts and fees.
    ///
    /// Fills cannot precede the exchange acknowledgment: applying a fill to
    /// an order still in the "LOCAL" state fails with `OrderNotCreated`.
    pub fn apply_fill(&mut self, client_order_id: &str, fill: &OrderFill) -> Result<OrderEvent> {
        let order = self.get_mut(client_order_id)?;
        if order.is_local() {
            return Err(marlin_core::Error::OrderNotCreated {
                client_order_id: client_order_id.to_string(),
            }
            .into());
        }
        order.register_fill(fill.amount, fill.quote_amount, &fill.fee_asset, fill.fee_amount);
        debug!(
            "order {client_order_id} filled {} @ {} (total {})",
            fill.amount, fill.price, order.executed_amount_base,
        );
        Ok(OrderEvent::Filled(OrderFilledEvent::new(order, fill)))
    }

    /// Apply an exchange-reported status change.
    ///
    /// Entering a cancelled state emits [`OrderEvent::Cancelled`]; entering
    /// any other terminal state emits [`OrderEvent::Completed`]. Non-terminal
    /// transitions emit nothing.
    pub fn update_state(&mut self, client_order_id: &str, state: &str) -> Result<Option<OrderEvent>> {
        let order = self.get_mut(client_order_id)?;
        order.set_last_state(state);

        if order.is_cancelled() {
            info!("order {client_order_id} cancelled");
            return Ok(Some(OrderEvent::Cancelled(OrderCancelledEvent {
                timestamp: Utc::now(),
                client_order_id: order.client_order_id.clone(),
                exchange_order_id: order.exchange_order_id.clone(),
            })));
        }
        if order.is_done() {
            info!(
                "order {client_order_id} completed: {} {} for {} {}",
                order.executed_amount_base,
                order.base_asset(),
                order.executed_amount_quote,
                order.quote_asset(),
            );
            return Ok(Some(OrderEvent::Completed(OrderCompletedEvent::new(
                order,
                Utc::now(),
            ))));
        }
        Ok(None)
    }

    /// Drop an order whose submission never reached the exchange
    pub fn fail_order(&mut self, client_order_id: &str) -> Result<OrderEvent> {
        let order = self.remove(client_order_id)?;
        warn!("order {client_order_id} failed before reaching the exchange");
        Ok(OrderEvent::Failure(OrderFailureEvent {
            timestamp: Utc::now(),
            client_order_id: order.client_order_id,
            order_type: order.order_type,
        }))
    }

    /// Retire an order from active tracking, returning its final record
    pub fn stop_tracking(&mut self, client_order_id: &str) -> Result<InFlightOrder> {
        self.remove(client_order_id)
    }

    pub fn get(&self, client_order_id: &str) -> Option<&InFlightOrder> {
        self.orders.get(client_order_id)
    }

    /// Orders still awaiting a terminal state
    pub fn active_orders(&self) -> impl Iterator<Item = &InFlightOrder> {
        self.orders.values().filter(|o| !o.is_done())
    }

    /// Orders that have reached a terminal state but are not yet retired
    pub fn done_orders(&self) -> impl Iterator<Item = &InFlightOrder> {
        self.orders.values().filter(|o| o.is_done())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Persistence view of the whole table, keyed by `client_order_id`
    pub fn to_snapshots(&self) -> HashMap<String, OrderSnapshot> {
        self.orders
            .iter()
            .map(|(id, order)| (id.clone(), order.to_snapshot()))
            .collect()
    }

    /// Rebuild the table from persisted snapshots.
    ///
    /// All-or-nothing: the first corrupt record fails the call and leaves the
    /// table untouched, so the caller can decide whether to repair the
    /// persisted state or start from scratch.
    pub fn restore(&mut self, snapshots: &HashMap<String, OrderSnapshot>) -> Result<()> {
        let mut restored = HashMap::with_capacity(snapshots.len());
        for snapshot in snapshots.values() {
            let order = InFlightOrder::from_snapshot(snapshot)?;
            restored.insert(order.client_order_id.clone(), order);
        }
        info!("restored {} in-flight orders from snapshots", restored.len());
        self.orders = restored;
        Ok(())
    }

    fn get_mut(&mut self, client_order_id: &str) -> Result<&mut InFlightOrder> {
        self.orders
            .get_mut(client_order_id)
            .ok_or_else(|| Error::UnknownOrder {
                client_order_id: client_order_id.to_string(),
            })
    }

    fn remove(&mut self, client_order_id: &str) -> Result<InFlightOrder> {
        self.orders
            .remove(client_order_id)
            .ok_or_else(|| Error::UnknownOrder {
                client_order_id: client_order_id.to_string(),
            })
    }
}
