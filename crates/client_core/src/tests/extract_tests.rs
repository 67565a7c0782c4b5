use super::*;
use serde_json::json;
use shared::domain::PAGE_SIZE;

fn raw(body: Value) -> RawUsersResponse {
    RawUsersResponse {
        total_header: None,
        body,
    }
}

fn raw_with_header(header: &str, body: Value) -> RawUsersResponse {
    RawUsersResponse {
        total_header: Some(header.to_string()),
        body,
    }
}

fn names(users: &[UserRecord]) -> Vec<String> {
    users
        .iter()
        .map(|user| user.display_name().unwrap_or_default())
        .collect()
}

#[test]
fn list_strategies_are_ordered() {
    let order: Vec<&str> = LIST_STRATEGIES.iter().map(|s| s.name).collect();
    assert_eq!(
        order,
        ["bare_array", "users", "data", "results", "items", "first_array_value"]
    );
}

#[test]
fn extracts_from_each_known_key() {
    for key in ["users", "data", "results", "items"] {
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), json!([{"name": "Ana"}, {"name": "Bia"}]));
        let body = Value::Object(object);
        let (strategy, users) = extract_users(&body);
        assert_eq!(strategy, Some(key));
        assert_eq!(names(&users), ["Ana", "Bia"]);
    }
}

#[test]
fn extracts_bare_array() {
    let (strategy, users) = extract_users(&json!([{"name": "Ana"}]));
    assert_eq!(strategy, Some("bare_array"));
    assert_eq!(users.len(), 1);
}

#[test]
fn known_keys_win_over_document_order() {
    let body = json!({
        "items": [{"name": "from-items"}],
        "users": [{"name": "from-users"}]
    });
    let (strategy, users) = extract_users(&body);
    assert_eq!(strategy, Some("users"));
    assert_eq!(names(&users), ["from-users"]);
}

#[test]
fn known_key_that_is_not_an_array_is_skipped() {
    let body = json!({"users": {"count": 2}, "data": [{"name": "Ana"}]});
    let (strategy, _) = extract_users(&body);
    assert_eq!(strategy, Some("data"));
}

#[test]
fn falls_back_to_first_array_valued_property() {
    let body = json!({
        "page": 1,
        "people": [{"name": "Ana"}],
        "others": [{"name": "Bia"}]
    });
    let (strategy, users) = extract_users(&body);
    assert_eq!(strategy, Some("first_array_value"));
    assert_eq!(names(&users), ["Ana"]);
}

#[test]
fn index_like_keys_are_scanned_before_named_keys() {
    let body = json!({
        "people": [{"name": "Named"}],
        "10": [{"name": "Ten"}],
        "2": [{"name": "Two"}],
        "01": [{"name": "Padded"}]
    });
    let (strategy, users) = extract_users(&body);
    assert_eq!(strategy, Some("first_array_value"));
    assert_eq!(names(&users), ["Two"]);

    let body = json!({"01": [{"name": "Padded"}], "-1": [{"name": "Negative"}]});
    assert_eq!(names(&extract_users(&body).1), ["Padded"]);
}

#[test]
fn no_array_anywhere_yields_empty_list() {
    let (strategy, users) = extract_users(&json!({"page": 1, "meta": {"total": 0}}));
    assert_eq!(strategy, None);
    assert!(users.is_empty());

    let (_, users) = extract_users(&json!("not an object"));
    assert!(users.is_empty());
}

#[test]
fn body_total_overwrites_total_count_header() {
    assert_eq!(extract_total(&raw_with_header("42", json!([])), PAGE_SIZE), Some(42));
    assert_eq!(
        extract_total(&raw_with_header("42", json!({"total": 7})), PAGE_SIZE),
        Some(7)
    );
}

#[test]
fn header_wins_when_body_has_no_total_fields() {
    let body = json!({"users": [], "page": 3});
    assert_eq!(extract_total(&raw_with_header("42", body), PAGE_SIZE), Some(42));
}

#[test]
fn later_body_fields_overwrite_earlier_ones() {
    let body = json!({"total": 1, "totalCount": 2, "count": 3});
    assert_eq!(extract_total(&raw(body), PAGE_SIZE), Some(3));
}

#[test]
fn meta_total_count_is_read() {
    assert_eq!(
        extract_total(&raw(json!({"meta": {"totalCount": 5}})), PAGE_SIZE),
        Some(5)
    );
    assert_eq!(
        extract_total(&raw(json!({"meta": {"total": "12"}})), PAGE_SIZE),
        Some(12)
    );
}

#[test]
fn meta_zero_total_without_total_count_is_unknown() {
    assert_eq!(extract_total(&raw(json!({"meta": {"total": 0}})), PAGE_SIZE), None);
}

#[test]
fn total_pages_derives_an_approximate_total() {
    assert_eq!(extract_total(&raw(json!({"totalPages": 3})), PAGE_SIZE), Some(30));
}

#[test]
fn zero_total_is_replaced_by_total_pages_estimate() {
    let body = json!({"total": 0, "totalPages": 2});
    assert_eq!(extract_total(&raw(body), PAGE_SIZE), Some(20));
}

#[test]
fn zero_total_without_total_pages_is_kept() {
    assert_eq!(extract_total(&raw(json!({"total": 0})), PAGE_SIZE), Some(0));
}

#[test]
fn non_numeric_values_leave_total_unknown() {
    assert_eq!(extract_total(&raw(json!({"total": "lots"})), PAGE_SIZE), None);
    assert_eq!(
        extract_total(&raw_with_header("many", json!({})), PAGE_SIZE),
        None
    );
    assert_eq!(extract_total(&raw(json!({})), PAGE_SIZE), None);
}

#[test]
fn non_numeric_body_total_overwrites_valid_header() {
    let response = raw_with_header("42", json!({"total": {"value": 42}}));
    assert_eq!(extract_total(&response, PAGE_SIZE), None);
}

#[test]
fn null_fields_are_treated_as_absent() {
    let response = raw_with_header("42", json!({"total": null, "count": null}));
    assert_eq!(extract_total(&response, PAGE_SIZE), Some(42));
}

#[test]
fn fractional_and_negative_totals_are_normalized() {
    assert_eq!(extract_total(&raw(json!({"total": 24.2})), PAGE_SIZE), Some(25));
    assert_eq!(extract_total(&raw(json!({"total": -3})), PAGE_SIZE), Some(0));
}

#[test]
fn normalize_combines_list_and_total() {
    let response = raw_with_header(
        "25",
        json!({"results": [{"name": "Ana", "email": "a@x.com", "id": 3}]}),
    );
    let page = normalize(&response, PAGE_SIZE);
    assert_eq!(page.total, Some(25));
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].email().as_deref(), Some("a@x.com"));
}
