//! Order Tracker Integration Test
//!
//! Tests the full connector flow:
//! 1. Orders are submitted and tracked in the "LOCAL" state
//! 2. Exchange acknowledgments assign exchange order IDs
//! 3. Fills accumulate and emit events
//! 4. Terminal states emit completed/cancelled events
//! 5. Tracking state survives a simulated restart via snapshots

use chrono::Utc;
use marlin_core::{InFlightOrder, OrderType, TradeType};
use marlin_tracker::{OrderEvent, OrderFill, OrderTracker};
use rust_decimal_macros::dec;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fill(trade_id: &str, amount: rust_decimal::Decimal, price: rust_decimal::Decimal) -> OrderFill {
    OrderFill {
        exchange_trade_id: trade_id.to_string(),
        price,
        amount,
        quote_amount: amount * price,
        fee_asset: "USDT".to_string(),
        fee_amount: dec!(0.005),
        timestamp: Utc::now(),
    }
}

#[test]
fn test_full_order_lifecycle() {
    init_logging();
    let mut tracker = OrderTracker::new();

    // === Step 1: Submit ===
    let event = tracker
        .start_tracking(InFlightOrder::new(
            "C1",
            None,
            "ETH-USDT",
            OrderType::Limit,
            TradeType::Buy,
            dec!(10.00),
            dec!(2.0),
        ))
        .unwrap();
    assert!(matches!(event, OrderEvent::Created(_)));
    assert!(tracker.get("C1").unwrap().is_local());

    // === Step 2: Exchange acknowledges ===
    tracker.acknowledge("C1", "E1", "submitted").unwrap();
    let order = tracker.get("C1").unwrap();
    assert!(!order.is_local());
    assert_eq!(order.exchange_order_id.as_deref(), Some("E1"));

    // === Step 3: Fills arrive ===
    let event = tracker
        .apply_fill("C1", &fill("T1", dec!(0.5), dec!(10.00)))
        .unwrap();
    match event {
        OrderEvent::Filled(filled) => {
            assert_eq!(filled.amount, dec!(0.5));
            assert_eq!(filled.exchange_trade_id, "T1");
        }
        other => panic!("expected Filled, got {other:?}"),
    }
    tracker.update_state("C1", "partial-filled").unwrap();

    tracker
        .apply_fill("C1", &fill("T2", dec!(1.5), dec!(10.00)))
        .unwrap();

    let order = tracker.get("C1").unwrap();
    assert_eq!(order.executed_amount_base, dec!(2.0));
    assert_eq!(order.executed_amount_quote, dec!(20.0));
    assert_eq!(order.fee_paid, dec!(0.01));

    // === Step 4: Terminal state ===
    let event = tracker.update_state("C1", "DONE").unwrap().unwrap();
    match event {
        OrderEvent::Completed(completed) => {
            assert_eq!(completed.base_asset, "ETH");
            assert_eq!(completed.quote_asset, "USDT");
            assert_eq!(completed.base_asset_amount, dec!(2.0));
            assert_eq!(completed.fee_amount, dec!(0.01));
        }
        other => panic!("expected Completed, got {other:?}"),
    }

    // === Step 5: Retire ===
    let retired = tracker.stop_tracking("C1").unwrap();
    assert!(retired.is_done());
    assert!(!retired.is_failure());
    assert!(tracker.is_empty());
}

#[test]
fn test_snapshot_restore_after_restart() {
    init_logging();
    let mut tracker = OrderTracker::new();

    tracker
        .start_tracking(InFlightOrder::new(
            "C1",
            None,
            "ETH-USDT",
            OrderType::Limit,
            TradeType::Buy,
            dec!(10.00),
            dec!(2.0),
        ))
        .unwrap();
    tracker.acknowledge("C1", "E1", "submitted").unwrap();
    tracker
        .apply_fill("C1", &fill("T1", dec!(1.5), dec!(10.00)))
        .unwrap();
    tracker.update_state("C1", "partial-filled").unwrap();

    tracker
        .start_tracking(InFlightOrder::new(
            "C2",
            None,
            "BTC-USDT",
            OrderType::Market,
            TradeType::Sell,
            dec!(0),
            dec!(0.1),
        ))
        .unwrap();

    // Persist, round-trip through JSON as the connector's state store would,
    // and restore into a fresh tracker
    let persisted = serde_json::to_string(&tracker.to_snapshots()).unwrap();
    let snapshots = serde_json::from_str(&persisted).unwrap();

    let mut restarted = OrderTracker::new();
    restarted.restore(&snapshots).unwrap();
    assert_eq!(restarted.len(), 2);

    let order = restarted.get("C1").unwrap();
    assert_eq!(order.last_state, "partial-filled");
    assert!(!order.is_local());
    assert_eq!(order.exchange_order_id.as_deref(), Some("E1"));
    assert_eq!(order.executed_amount_base, dec!(1.5));
    assert_eq!(order.executed_amount_quote, dec!(15.0));
    assert_eq!(order.fee_asset, "USDT");
    assert_eq!(order.fee_paid, dec!(0.005));

    // A restored order keeps accepting updates
    restarted
        .apply_fill("C1", &fill("T2", dec!(0.5), dec!(10.00)))
        .unwrap();
    assert_eq!(restarted.get("C1").unwrap().executed_amount_base, dec!(2.0));

    // The still-local order restores as local
    assert!(restarted.get("C2").unwrap().is_local());
}

#[test]
fn test_restore_rejects_corrupt_snapshot_and_keeps_table_untouched() {
    init_logging();
    let mut tracker = OrderTracker::new();
    tracker
        .start_tracking(InFlightOrder::new(
            "C1",
            None,
            "ETH-USDT",
            OrderType::Limit,
            TradeType::Buy,
            dec!(10.00),
            dec!(2.0),
        ))
        .unwrap();

    let mut snapshots = tracker.to_snapshots();
    snapshots.get_mut("C1").unwrap().price = "not-a-number".to_string();

    let mut restarted = OrderTracker::new();
    let err = restarted.restore(&snapshots).unwrap_err();
    assert!(matches!(
        err,
        marlin_tracker::Error::Core(marlin_core::Error::ParseError { field: "price", .. })
    ));
    assert!(restarted.is_empty());
}
