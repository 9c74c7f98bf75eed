// dms-client/tests/dealer_order_flow.rs
// Dispatch, delivery, refund and the dealer order board

mod common;

use common::{client, dealer_order, payment};
use dms_client::models::DealerOrder;
use dms_client::{
    DealerOrderStatus, DealerPaymentStatus, DeliveryStatus, LifecycleAction, PaymentStatus, Role,
    WorkflowError,
};
use shared::error::{DispatchFailure, ErrorCode};

fn parse(value: serde_json::Value) -> DealerOrder {
    serde_json::from_value(value).unwrap()
}

// ========== Dispatch ==========

#[tokio::test]
async fn test_dispatch_validation_makes_no_request() {
    let (client, backend) = client(Role::EvmStaff);
    let orchestrator = client.orchestrator();

    let mut no_quantity = parse(dealer_order(7, 5, "CONFIRMED"));
    no_quantity.quantity = 0;
    let err = orchestrator.dispatch(&no_quantity).await.unwrap_err();
    assert_eq!(err.to_string(), "Số lượng xe không hợp lệ");

    let mut no_color = parse(dealer_order(7, 5, "CONFIRMED"));
    no_color.color = Some("  ".into());
    let err = orchestrator.dispatch(&no_color).await.unwrap_err();
    assert_eq!(err.to_string(), "Màu xe không được để trống");

    assert!(backend.lock().unwrap().requests.is_empty());
}

#[tokio::test]
async fn test_dispatch_requires_confirmed_and_evm_staff() {
    let (evm, backend) = client(Role::EvmStaff);
    let pending = parse(dealer_order(7, 5, "PENDING"));
    let err = evm.orchestrator().dispatch(&pending).await.unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition(_)));

    let (dealer, _) = client(Role::DealerStaff);
    let confirmed = parse(dealer_order(7, 5, "CONFIRMED"));
    let err = dealer.orchestrator().dispatch(&confirmed).await.unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden(_)));

    assert!(backend.lock().unwrap().requests.is_empty());
}

#[tokio::test]
async fn test_dispatch_marks_vehicle_delivered() {
    let (client, backend) = client(Role::EvmStaff);
    backend
        .lock()
        .unwrap()
        .insert("DealerOrder", dealer_order(7, 5, "CONFIRMED"));

    let outcome = client
        .orchestrator()
        .dispatch(&parse(dealer_order(7, 5, "CONFIRMED")))
        .await
        .unwrap();

    assert!(outcome.status_synced);
    assert!(outcome.warning().is_none());
    assert_eq!(outcome.dealer_order.status, DealerOrderStatus::VehicleDelivered);

    let b = backend.lock().unwrap();
    assert_eq!(
        b.requests,
        vec!["POST /api/Inventory/dispatch", "PUT /api/DealerOrder/7"]
    );
    assert_eq!(b.record("DealerOrder", 7).unwrap()["status"], "VEHICLE_DELIVERED");
}

#[tokio::test]
async fn test_dispatch_failure_is_classified() {
    let (client, backend) = client(Role::EvmStaff);
    backend.lock().unwrap().dispatch_error = Some("Insufficient stock for this model".into());

    let err = client
        .orchestrator()
        .dispatch(&parse(dealer_order(7, 5, "CONFIRMED")))
        .await
        .unwrap_err();

    match err {
        WorkflowError::Dispatch { kind, message } => {
            assert_eq!(kind, DispatchFailure::OutOfStock);
            assert_eq!(
                message,
                "Không đủ xe trong kho để xuất: Insufficient stock for this model"
            );
        }
        other => panic!("expected dispatch error, got {other:?}"),
    }
    // Status is untouched when the dispatch itself fails
    assert_eq!(backend.lock().unwrap().count("PUT"), 0);
}

#[tokio::test]
async fn test_dispatch_status_failure_is_partial_outcome() {
    let (client, backend) = client(Role::EvmStaff);
    {
        let mut b = backend.lock().unwrap();
        b.insert("DealerOrder", dealer_order(7, 5, "CONFIRMED"));
        b.fail("PUT /api/DealerOrder/7");
    }

    let outcome = client
        .orchestrator()
        .dispatch(&parse(dealer_order(7, 5, "CONFIRMED")))
        .await
        .unwrap();

    assert!(outcome.needs_reconciliation());
    assert_eq!(outcome.dealer_order.status, DealerOrderStatus::Confirmed);
    assert_eq!(outcome.status_error.as_deref(), Some("database unavailable"));
    let warning = outcome.warning().unwrap();
    assert_eq!(warning.code, ErrorCode::DispatchStatusStale);
}

#[tokio::test]
async fn test_confirm_dealer_order_is_evm_only() {
    let (evm, backend) = client(Role::EvmStaff);
    backend
        .lock()
        .unwrap()
        .insert("DealerOrder", dealer_order(7, 5, "PENDING"));
    let pending = parse(dealer_order(7, 5, "PENDING"));

    let confirmed = evm
        .orchestrator()
        .set_dealer_order_status(&pending, DealerOrderStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(confirmed.status, DealerOrderStatus::Confirmed);
    assert_eq!(
        backend.lock().unwrap().record("DealerOrder", 7).unwrap()["status"],
        "CONFIRMED"
    );

    // Not in the table
    let err = evm
        .orchestrator()
        .set_dealer_order_status(&pending, DealerOrderStatus::Completed)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::InvalidTransition(_)));

    let (dealer, _) = client(Role::DealerStaff);
    let err = dealer
        .orchestrator()
        .set_dealer_order_status(&pending, DealerOrderStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden(_)));
}

// ========== Delivery ==========

#[tokio::test]
async fn test_delivery_from_delivered_dealer_order() {
    let (client, backend) = client(Role::DealerStaff);
    let arrived = parse(dealer_order(7, 5, "VEHICLE_DELIVERED"));
    let orchestrator = client.orchestrator();

    let draft = orchestrator.delivery_draft(&arrived).unwrap();
    assert_eq!(draft.order_id, 5);
    assert_eq!(draft.vehicle_id, 200);
    assert_eq!(draft.delivery_status, DeliveryStatus::Pending);

    let created = orchestrator.create_delivery(&arrived, &draft).await.unwrap();
    assert_eq!(created.delivery_id, 1);
    let record = backend.lock().unwrap().record("Delivery", 1).unwrap();
    assert_eq!(record["userId"], 7);
    assert_eq!(record["color"], "Đỏ");

    let confirmed = parse(dealer_order(8, 6, "CONFIRMED"));
    assert!(matches!(
        orchestrator.delivery_draft(&confirmed),
        Err(WorkflowError::InvalidTransition(_))
    ));
}

// ========== Refund ==========

fn refund_backend(role: Role) -> (dms_client::DmsClient<dms_client::OneshotHttpClient>, common::SharedBackend) {
    let (client, backend) = client(role);
    {
        let mut b = backend.lock().unwrap();
        b.insert("DealerOrder", dealer_order(7, 5, "CANCELLED"));
        b.insert("Payment", payment(3, 5, "COMPLETED"));
        b.insert("Payment", payment(4, 6, "COMPLETED"));
    }
    (client, backend)
}

#[tokio::test]
async fn test_refund_then_second_refund_is_rejected() {
    let (client, backend) = refund_backend(Role::DealerStaff);
    let cancelled = parse(dealer_order(7, 5, "CANCELLED"));
    let orchestrator = client.orchestrator();

    let outcome = orchestrator.refund(&cancelled).await.unwrap();
    assert_eq!(outcome.payment.payment_id, 3);
    assert_eq!(outcome.payment.status, PaymentStatus::Refunded);
    assert_eq!(outcome.dealer_order.payment_status, DealerPaymentStatus::Refunded);
    {
        let b = backend.lock().unwrap();
        assert_eq!(b.record("Payment", 3).unwrap()["status"], "REFUNDED");
        assert_eq!(b.record("Payment", 4).unwrap()["status"], "COMPLETED");
        assert_eq!(b.record("DealerOrder", 7).unwrap()["paymentStatus"], "REFUNDED");
    }

    let err = orchestrator.refund(&cancelled).await.unwrap_err();
    assert!(matches!(err, WorkflowError::AlreadyRefunded { order_id: 5 }));
    assert_eq!(orchestrator.refunded_order_ids().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_refund_without_payment() {
    let (client, _backend) = refund_backend(Role::DealerStaff);
    let other = parse(dealer_order(9, 42, "CANCELLED"));

    let err = client.orchestrator().refund(&other).await.unwrap_err();
    assert!(matches!(err, WorkflowError::PaymentNotFound { order_id: 42 }));
}

#[tokio::test]
async fn test_refund_rolls_back_payment_when_dealer_order_fails() {
    let (client, backend) = refund_backend(Role::DealerStaff);
    backend.lock().unwrap().fail("PUT /api/DealerOrder/7");

    let err = client
        .orchestrator()
        .refund(&parse(dealer_order(7, 5, "CANCELLED")))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        WorkflowError::RefundRolledBack {
            payment_id: 3,
            dealer_order_id: 7,
            ..
        }
    ));
    let b = backend.lock().unwrap();
    assert_eq!(b.count("PUT /api/Payment/3"), 2);
    assert_eq!(b.record("Payment", 3).unwrap()["status"], "COMPLETED");
    assert_eq!(b.record("DealerOrder", 7).unwrap()["paymentStatus"], "PAID");
}

#[tokio::test]
async fn test_refund_reports_inconsistency_when_rollback_fails() {
    let (client, backend) = refund_backend(Role::DealerStaff);
    {
        let mut b = backend.lock().unwrap();
        b.fail("PUT /api/DealerOrder/7");
        b.fail_after("PUT /api/Payment/3", 1);
    }

    let err = client
        .orchestrator()
        .refund(&parse(dealer_order(7, 5, "CANCELLED")))
        .await
        .unwrap_err();

    assert!(matches!(err, WorkflowError::Inconsistent { .. }));
    assert_eq!(err.error_code(), ErrorCode::RefundInconsistent);
    assert_eq!(
        backend.lock().unwrap().record("Payment", 3).unwrap()["status"],
        "REFUNDED"
    );
}

#[tokio::test]
async fn test_refund_is_for_dealer_staff_only() {
    let (client, backend) = refund_backend(Role::EvmStaff);
    let err = client
        .orchestrator()
        .refund(&parse(dealer_order(7, 5, "CANCELLED")))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Forbidden(_)));
    assert!(backend.lock().unwrap().requests.is_empty());
}

// ========== Board ==========

#[tokio::test]
async fn test_board_hides_refund_for_refunded_order() {
    let (client, backend) = client(Role::DealerStaff);
    {
        let mut b = backend.lock().unwrap();
        b.insert("DealerOrder", dealer_order(7, 5, "CANCELLED"));
        b.insert("DealerOrder", dealer_order(8, 6, "CANCELLED"));
        b.insert("Payment", payment(3, 5, "REFUNDED"));
        b.insert("Payment", payment(4, 6, "COMPLETED"));
    }

    let mut board = client.dealer_order_board();
    board.refresh().await.unwrap();
    assert_eq!(board.rows().len(), 2);
    assert!(board.refunded_order_ids().contains(&5));

    let refunded = &board.rows()[0];
    assert!(!board.available_actions(refunded).contains(&LifecycleAction::Refund));
    let open = &board.rows()[1];
    assert!(board.available_actions(open).contains(&LifecycleAction::Refund));
}

#[tokio::test]
async fn test_board_offers_refund_that_refund_accepts() {
    let (client, backend) = client(Role::DealerStaff);
    let mut row = dealer_order(7, 5, "CANCELLED");
    row["paymentStatus"] = "REFUNDED".into();
    {
        let mut b = backend.lock().unwrap();
        b.insert("DealerOrder", row);
        b.insert("Payment", payment(3, 5, "COMPLETED"));
    }

    let mut board = client.dealer_order_board();
    board.refresh().await.unwrap();
    let stale = board.rows()[0].clone();
    assert_eq!(stale.payment_status, DealerPaymentStatus::Refunded);
    assert!(!board.is_refunded(&stale));
    assert!(board.available_actions(&stale).contains(&LifecycleAction::Refund));

    let outcome = client.orchestrator().refund(&stale).await.unwrap();
    assert_eq!(outcome.payment.payment_id, 3);
    assert_eq!(
        backend.lock().unwrap().record("Payment", 3).unwrap()["status"],
        "REFUNDED"
    );

    board.refresh().await.unwrap();
    let row = &board.rows()[0];
    assert!(!board.available_actions(row).contains(&LifecycleAction::Refund));
}

#[tokio::test]
async fn test_board_actions_follow_role() {
    let (client, backend) = client(Role::EvmStaff);
    backend
        .lock()
        .unwrap()
        .insert("DealerOrder", dealer_order(7, 5, "CONFIRMED"));

    let mut board = client.dealer_order_board();
    board.refresh().await.unwrap();
    let row = &board.rows()[0];
    let actions = board.available_actions(row);
    assert!(actions.contains(&LifecycleAction::DispatchInventory));
    assert!(!actions.contains(&LifecycleAction::CreateDelivery));
}

#[tokio::test]
async fn test_board_accepts_object_of_objects_lists() {
    let (client, backend) = client(Role::DealerStaff);
    {
        let mut b = backend.lock().unwrap();
        b.object_lists = true;
        b.insert("DealerOrder", dealer_order(7, 5, "PENDING"));
        b.insert("DealerOrder", dealer_order(8, 6, "CONFIRMED"));
    }

    let mut board = client.dealer_order_board();
    board.refresh().await.unwrap();
    let ids: Vec<i64> = board.rows().iter().map(|r| r.dealer_order_id).collect();
    assert_eq!(ids, vec![7, 8]);

    let hits: Vec<i64> = board
        .filtered("confirmed")
        .iter()
        .map(|r| r.dealer_order_id)
        .collect();
    assert_eq!(hits, vec![8]);
}

#[tokio::test]
async fn test_board_keeps_rows_when_refresh_fails() {
    let (client, backend) = client(Role::DealerStaff);
    backend
        .lock()
        .unwrap()
        .insert("DealerOrder", dealer_order(7, 5, "PENDING"));

    let mut board = client.dealer_order_board();
    board.refresh().await.unwrap();
    backend.lock().unwrap().fail("GET /api/Payment");
    assert!(board.refresh().await.is_err());
    assert_eq!(board.rows().len(), 1);
}
