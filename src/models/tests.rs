#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── TransactionStatus ─────────────────────────────────────────

#[test]
fn test_status_wire_values() {
    assert_eq!(TransactionStatus::Pending.as_str(), "pending");
    assert_eq!(TransactionStatus::Complete.as_str(), "complete");
    assert_eq!(TransactionStatus::Complete.to_string(), "complete");
}

#[test]
fn test_status_all_in_display_order() {
    assert_eq!(
        TransactionStatus::all(),
        &[TransactionStatus::Pending, TransactionStatus::Complete]
    );
}

#[test]
fn test_status_rejects_unknown_value() {
    let result: Result<TransactionStatus, _> = serde_json::from_str("\"completed\"");
    assert!(result.is_err());
}

#[test]
fn test_status_is_case_sensitive() {
    let result: Result<TransactionStatus, _> = serde_json::from_str("\"Pending\"");
    assert!(result.is_err());
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_from_json_number_amount() {
    let txn: Transaction = serde_json::from_str(
        r#"{"id":"t1","amount":12.5,"category":"Food","status":"pending"}"#,
    )
    .unwrap();
    assert_eq!(txn.id, "t1");
    assert_eq!(txn.amount, dec!(12.5));
    assert_eq!(txn.category, "Food");
    assert!(txn.is_pending());
}

#[test]
fn test_transaction_integer_amount() {
    let txn: Transaction = serde_json::from_str(
        r#"{"id":"t2","amount":0,"category":"Utilities","status":"complete"}"#,
    )
    .unwrap();
    assert_eq!(txn.amount, Decimal::ZERO);
    assert!(!txn.is_pending());
}

#[test]
fn test_transaction_negative_amount() {
    let txn: Transaction = serde_json::from_str(
        r#"{"id":"t3","amount":-42.99,"category":"Transport","status":"complete"}"#,
    )
    .unwrap();
    assert_eq!(txn.amount, dec!(-42.99));
}

#[test]
fn test_transaction_free_text_category() {
    let txn: Transaction = serde_json::from_str(
        r#"{"id":"t4","amount":3,"category":"Entertainment","status":"pending"}"#,
    )
    .unwrap();
    assert_eq!(txn.category, "Entertainment");
    assert!(!SUGGESTED_CATEGORIES.contains(&txn.category.as_str()));
}

#[test]
fn test_transaction_missing_field_is_error() {
    let result: Result<Transaction, _> =
        serde_json::from_str(r#"{"id":"t5","amount":1,"status":"pending"}"#);
    assert!(result.is_err());
}

// ── TransactionsResponse ──────────────────────────────────────

#[test]
fn test_response_envelope() {
    let body = r#"{"data":[
        {"id":"a","amount":1.25,"category":"Food","status":"pending"},
        {"id":"b","amount":99,"category":"Transport","status":"complete"}
    ]}"#;
    let resp: TransactionsResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].id, "a");
    assert_eq!(resp.data[1].status, TransactionStatus::Complete);
}

#[test]
fn test_response_empty_data() {
    let resp: TransactionsResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
    assert!(resp.data.is_empty());
}

#[test]
fn test_response_with_amount_beyond_decimal_range_is_error() {
    let body = r#"{"data":[
        {"id":"a","amount":1.25,"category":"Food","status":"pending"},
        {"id":"b","amount":1e30,"category":"Food","status":"pending"}
    ]}"#;
    let result: Result<TransactionsResponse, _> = serde_json::from_str(body);
    assert!(result.is_err());
}

#[test]
fn test_response_without_data_is_error() {
    let result: Result<TransactionsResponse, _> = serde_json::from_str(r#"{"items":[]}"#);
    assert!(result.is_err());
}

// ── find_duplicate_id ─────────────────────────────────────────

fn make_txn(id: &str) -> Transaction {
    Transaction {
        id: id.into(),
        amount: dec!(1.00),
        category: "Food".into(),
        status: TransactionStatus::Pending,
    }
}

#[test]
fn test_no_duplicates() {
    let txns = vec![make_txn("a"), make_txn("b"), make_txn("c")];
    assert_eq!(find_duplicate_id(&txns), None);
}

#[test]
fn test_duplicate_found() {
    let txns = vec![make_txn("a"), make_txn("b"), make_txn("a")];
    assert_eq!(find_duplicate_id(&txns), Some("a"));
}

#[test]
fn test_duplicates_empty_list() {
    assert_eq!(find_duplicate_id(&[]), None);
}
