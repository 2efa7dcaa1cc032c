use super::*;
use serde_json::json;

#[test]
fn builders_set_method_and_path() {
    assert_eq!(ApiRequest::get("/trip").method, Method::Get);
    assert_eq!(ApiRequest::post("/trip").method, Method::Post);
    assert_eq!(ApiRequest::patch("/trip/1").method, Method::Patch);
    assert_eq!(ApiRequest::delete("/trip/1").method, Method::Delete);
    assert_eq!(ApiRequest::get("/trip").path, "/trip");
}

#[test]
fn new_requests_carry_no_query_payload_or_token() {
    let request = ApiRequest::get("/trip");
    assert!(request.query.is_empty());
    assert_eq!(request.payload, None);
    assert_eq!(request.bearer, None);
}

#[test]
fn queries_extend_in_order() {
    let request = ApiRequest::get("/trip").queries(vec![
        ("limit".to_owned(), "10".to_owned()),
        ("currentPage".to_owned(), "2".to_owned()),
    ]);
    assert_eq!(
        request.query,
        vec![
            ("limit".to_owned(), "10".to_owned()),
            ("currentPage".to_owned(), "2".to_owned()),
        ]
    );
}

#[test]
fn json_and_bearer_attach_to_the_request() {
    let request = ApiRequest::post("/trip")
        .json(json!({ "origin": "Jakarta" }))
        .bearer(Some("token-1".to_owned()));
    assert_eq!(
        request.payload,
        Some(Payload::Json(json!({ "origin": "Jakarta" })))
    );
    assert_eq!(request.bearer.as_deref(), Some("token-1"));
}

#[test]
fn item_path_appends_the_id() {
    assert_eq!(item_path("/driver", 3), "/driver/3");
    assert_eq!(item_path("/e-money", 42), "/e-money/42");
}

#[test]
fn method_names_match_the_wire() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Patch.as_str(), "PATCH");
}
