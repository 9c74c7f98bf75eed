// dms-client/tests/common/mod.rs
// Fake dealership backend for integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use dms_client::{DmsClient, MemorySessionStore, OneshotHttpClient, Role, Session};
use dms_client::models::UserProfile;
use serde_json::{Map, Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Records and call log behind the fake backend
#[derive(Debug, Default)]
pub struct Backend {
    pub tables: HashMap<&'static str, Vec<Value>>,
    pub customers: HashMap<i64, Value>,
    pub users: Vec<Value>,
    /// Every request as "METHOD /path"
    pub requests: Vec<String>,
    /// Requests ("METHOD /path") answered with a 500 once they have
    /// already been answered this many times
    pub failing: HashMap<String, usize>,
    /// Backend message returned by the dispatch endpoint, if it should fail
    pub dispatch_error: Option<String>,
    /// Deliver lists as `{"0": {..}, "1": {..}}` instead of an array
    pub object_lists: bool,
    pub revenue: Option<Vec<Value>>,
    pub uploads: Vec<String>,
}

pub type SharedBackend = Arc<Mutex<Backend>>;

/// Table name and id field for a CRUD path segment
fn table(segment: &str) -> Option<(&'static str, &'static str)> {
    match segment {
        "Order" => Some(("Order", "orderId")),
        "DealerOrder" => Some(("DealerOrder", "dealerOrderId")),
        "Payment" => Some(("Payment", "paymentId")),
        "Delivery" => Some(("Delivery", "deliveryId")),
        "SaleContract" => Some(("SaleContract", "saleContractId")),
        _ => None,
    }
}

impl Backend {
    pub fn insert(&mut self, table: &'static str, record: Value) {
        self.tables.entry(table).or_default().push(record);
    }

    pub fn table(&self, table: &str) -> Vec<Value> {
        self.tables.get(table).cloned().unwrap_or_default()
    }

    /// Stored record by table and id
    pub fn record(&self, name: &str, id: i64) -> Option<Value> {
        let (_, key) = table(name)?;
        self.table(name)
            .into_iter()
            .find(|r| r.get(key).and_then(Value::as_i64) == Some(id))
    }

    /// Fail every `line` request with a 500
    pub fn fail(&mut self, line: &str) {
        self.fail_after(line, 0);
    }

    /// Let `times` `line` requests through, then fail the rest
    pub fn fail_after(&mut self, line: &str, times: usize) {
        self.failing.insert(line.to_string(), times);
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.requests.iter().filter(|r| r.starts_with(prefix)).count()
    }

    fn list_body(&self, items: Vec<Value>) -> Value {
        if self.object_lists {
            let map: Map<String, Value> = items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect();
            json!({ "data": map, "status": 200 })
        } else {
            json!({ "data": items, "status": 200 })
        }
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn ok(body: Value) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

async fn handle(
    State(backend): State<SharedBackend>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let mut b = backend.lock().unwrap();
    let line = format!("{} {}", method, path);
    let seen = b.requests.iter().filter(|r| **r == line).count();
    b.requests.push(line.clone());
    if b.failing.get(&line).is_some_and(|&times| seen >= times) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }

    let segments: Vec<&str> = path.trim_start_matches("/api/").split('/').collect();
    match (method.clone(), segments.as_slice()) {
        (Method::POST, ["Inventory", "dispatch"]) => match b.dispatch_error.clone() {
            Some(message) => error(StatusCode::BAD_REQUEST, &message),
            None => ok(json!({ "status": 200, "message": "ok" })),
        },
        (Method::GET, ["DealerRevenue"]) => match b.revenue.clone() {
            Some(rows) => ok(b.list_body(rows)),
            None => error(StatusCode::NOT_FOUND, "Not Found"),
        },
        (Method::GET, ["DebtReport", "Dealers"]) => {
            let rows = b.table("DebtDealers");
            ok(b.list_body(rows))
        }
        (Method::GET, ["DebtReport", "Customers"]) => {
            let rows = b.table("DebtCustomers");
            ok(b.list_body(rows))
        }
        (Method::GET, ["Customer", id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            match b.customers.get(&id) {
                Some(c) => ok(json!({ "data": c })),
                None => error(StatusCode::NOT_FOUND, "Customer not found"),
            }
        }
        (Method::GET, ["User"]) => {
            let users = b.users.clone();
            ok(b.list_body(users))
        }
        (Method::GET, ["User", id]) => {
            let id: i64 = id.parse().unwrap_or_default();
            let user = b
                .users
                .iter()
                .find(|u| u.get("userId").and_then(Value::as_i64) == Some(id))
                .cloned();
            match user {
                Some(u) => ok(json!({ "data": u })),
                None => error(StatusCode::NOT_FOUND, "User not found"),
            }
        }
        (Method::POST, ["Order", _, "attachments"]) => {
            b.uploads.push(String::from_utf8_lossy(&body).into_owned());
            ok(json!({ "status": 200 }))
        }
        (m, [segment, rest @ ..]) => {
            let Some((name, key)) = table(segment) else {
                return error(StatusCode::NOT_FOUND, "Not Found");
            };
            let id: Option<i64> = rest.first().and_then(|s| s.parse().ok());
            let rows = b.tables.entry(name).or_default();
            let position = |rows: &Vec<Value>| {
                id.and_then(|id| {
                    rows.iter()
                        .position(|r| r.get(key).and_then(Value::as_i64) == Some(id))
                })
            };
            match (m, id) {
                (Method::GET, None) => {
                    let rows = rows.clone();
                    ok(b.list_body(rows))
                }
                (Method::GET, Some(_)) => match position(rows) {
                    Some(i) => ok(json!({ "data": rows[i] })),
                    None => error(StatusCode::NOT_FOUND, "Not Found"),
                },
                (Method::POST, None) => {
                    let mut record: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
                    let next = rows
                        .iter()
                        .filter_map(|r| r.get(key).and_then(Value::as_i64))
                        .max()
                        .unwrap_or(0)
                        + 1;
                    record[key] = json!(next);
                    rows.push(record.clone());
                    ok(json!({ "data": record, "status": 201 }))
                }
                (Method::PUT, Some(_)) => match position(rows) {
                    Some(i) => {
                        rows[i] = serde_json::from_slice(&body).unwrap_or(Value::Null);
                        ok(json!({ "status": 200 }))
                    }
                    None => error(StatusCode::NOT_FOUND, "Not Found"),
                },
                (Method::DELETE, Some(_)) => match position(rows) {
                    Some(i) => {
                        rows.remove(i);
                        ok(json!({ "status": 200 }))
                    }
                    None => error(StatusCode::NOT_FOUND, "Not Found"),
                },
                _ => error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
            }
        }
        _ => error(StatusCode::NOT_FOUND, "Not Found"),
    }
}

pub fn router(backend: SharedBackend) -> Router {
    Router::new().fallback(handle).with_state(backend)
}

pub fn profile(role: Role) -> UserProfile {
    UserProfile {
        id: 99,
        username: "operator".into(),
        full_name: Some("Nguyễn Văn A".into()),
        role,
    }
}

/// Client signed in as `role` against a fresh backend
pub fn client(role: Role) -> (DmsClient<OneshotHttpClient>, SharedBackend) {
    dms_client::init_logger("warn");
    let backend: SharedBackend = Arc::new(Mutex::new(Backend::default()));
    let session = Arc::new(MemorySessionStore::with_session(Session::new(
        "test-token",
        profile(role),
    )));
    (DmsClient::in_process(router(backend.clone()), session), backend)
}

pub fn approved_order() -> Value {
    json!({
        "orderId": 2,
        "userId": 20,
        "vehicleId": 200,
        "status": "approved",
        "color": "Đỏ",
        "totalAmount": 500000000,
        "finalPrice": 480000000,
        "deliveryAddress": "12 Lê Lợi"
    })
}

pub fn pending_order() -> Value {
    json!({
        "orderId": 1,
        "userId": 10,
        "vehicleId": 100,
        "status": "PENDING",
        "color": "Trắng",
        "totalAmount": 300000000
    })
}

pub fn dealer_order(id: i64, order_id: i64, status: &str) -> Value {
    json!({
        "dealerOrderId": id,
        "userId": 7,
        "orderId": order_id,
        "vehicleId": 200,
        "quantity": 1,
        "color": "Đỏ",
        "orderDate": "2026-10-01",
        "status": status,
        "paymentStatus": "PAID",
        "totalAmount": 480000000
    })
}

pub fn payment(id: i64, order_id: i64, status: &str) -> Value {
    json!({
        "paymentId": id,
        "orderId": order_id,
        "paymentDate": "2026-10-02",
        "amount": 480000000,
        "method": "BANK_TRANSFER",
        "status": status
    })
}
