use api_scaffold::api::dto::{PaginateGetAllResponse, PaginationRequest};
use api_scaffold::api::extractors::{ValidatedJson, ValidatedQuery};
use api_scaffold::error::AppError;
use axum::body::Bytes;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_test::TestServer;
use serde::Deserialize;
use serde_json::{Value, json};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
struct Address {
    #[validate(length(equal = 5))]
    zip: String,
}

#[derive(Debug, Deserialize, Validate)]
struct CreateContact {
    #[validate(length(min = 1, message = "should not be empty"))]
    name: String,
    #[validate(nested)]
    address: Address,
}

#[derive(Debug, Deserialize, Validate)]
struct Signup {
    #[validate(length(min = 1, message = "should not be empty"))]
    name: String,
    #[validate(email)]
    email: String,
}

async fn signup(ValidatedJson(signup): ValidatedJson<Signup>) -> Json<Value> {
    Json(json!({"name": signup.name, "email": signup.email}))
}

async fn list_from_body(
    ValidatedJson(pagination): ValidatedJson<PaginationRequest>,
) -> Json<PaginateGetAllResponse<i64>> {
    let (page, limit) = pagination.page_and_limit();
    Json(PaginateGetAllResponse::new(vec![page, limit], page, limit, 25))
}

async fn list_from_query(
    ValidatedQuery(pagination): ValidatedQuery<PaginationRequest>,
) -> Json<Value> {
    let (offset, limit) = pagination.offset_and_limit();
    Json(json!({"offset": offset, "limit": limit}))
}

async fn create_contact(
    ValidatedJson(contact): ValidatedJson<CreateContact>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({"name": contact.name})))
}

fn server() -> TestServer {
    let app = Router::new()
        .route("/items/search", post(list_from_body))
        .route("/items", get(list_from_query))
        .route("/contacts", post(create_contact))
        .route("/signup", post(signup));

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_invalid_body_field_is_named() {
    let response = server()
        .post("/items/search")
        .json(&json!({"page": "abc"}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>(),
        json!({"success": false, "message": "page: must be an integer"})
    );
}

#[tokio::test]
async fn test_all_failing_fields_are_reported() {
    let response = server()
        .post("/items/search")
        .json(&json!({"limit": "ten", "page": 1.5}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "page: must be an integer; limit: must be an integer"
    );
}

#[tokio::test]
async fn test_integral_float_and_zero_are_accepted() {
    let response = server()
        .post("/items/search")
        .json(&json!({"page": 2.0, "limit": 0}))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["data"], json!([2, 1]));
}

#[tokio::test]
async fn test_valid_body_reaches_handler() {
    let response = server()
        .post("/items/search")
        .json(&json!({"page": "2", "limit": 10}))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["current_page"], 2);
    assert_eq!(json["total_page"], 3);
    assert_eq!(json["length"], 2);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let response = server()
        .post("/items/search")
        .bytes(Bytes::from_static(b"{\"page\": "))
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_invalid_query_field_is_named() {
    let response = server().get("/items").add_query_param("page", "abc").await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["message"], "page: must be an integer");
}

#[tokio::test]
async fn test_query_defaults_apply() {
    let response = server().get("/items").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"offset": 0, "limit": 10}));
}

#[tokio::test]
async fn test_query_values_are_coerced() {
    let response = server()
        .get("/items")
        .add_query_param("page", "3")
        .add_query_param("limit", "20")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({"offset": 40, "limit": 20}));
}

#[tokio::test]
async fn test_nested_failures_use_dotted_paths() {
    let response = server()
        .post("/contacts")
        .json(&json!({"name": "", "address": {"zip": "123"}}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "name: should not be empty; address.zip: must be exactly 5 characters"
    );
}

#[tokio::test]
async fn test_siblings_follow_declaration_order() {
    let response = server()
        .post("/signup")
        .json(&json!({"email": "not-an-email", "name": ""}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "name: should not be empty; email: must be an email"
    );
}

#[tokio::test]
async fn test_missing_required_field_is_bad_request() {
    let response = server()
        .post("/contacts")
        .json(&json!({"name": "Ada"}))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["success"], false);
}

#[tokio::test]
async fn test_query_failures_follow_declaration_order() {
    let response = server()
        .get("/items")
        .add_query_param("limit", "y")
        .add_query_param("page", "x")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["message"],
        "page: must be an integer; limit: must be an integer"
    );
}
