//! Integration tests for the news HTTP endpoints.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_create_and_get_news() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/news",
            Some(json!({
                "title": "Launch A",
                "description": "alpha content",
                "publicationDate": "2024-01-15T10:00:00Z",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let code = response.body["code"].as_str().unwrap().to_string();
    assert_eq!(response.body["creationDate"], response.body["updateDate"]);
    assert!(response.body.get("id").is_none());

    let response = app.request("GET", &format!("/api/news/{code}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Launch A");
    assert_eq!(response.body["description"], "alpha content");
    assert_eq!(response.body["publicationDate"], "2024-01-15T10:00:00Z");
}

#[tokio::test]
async fn test_create_rejects_invalid_body() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/news", Some(json!({ "title": "", "description": "d" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request("POST", "/api/news", Some(json!({ "description": "no title" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let long = "x".repeat(256);
    let response = app
        .request("POST", "/api/news", Some(json!({ "title": "t", "description": long })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_and_malformed_code() {
    let app = TestApp::new();

    let response = app
        .request("GET", &format!("/api/news/{}", uuid::Uuid::new_v4()), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");

    let response = app.request("GET", "/api/news/not-a-uuid", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_search_matches_title_or_description() {
    let app = TestApp::with_news(&[("Launch A", "alpha content"), ("Launch B", "beta content")]);

    let response = app.request("GET", "/api/news?search=alpha", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Launch A");

    let response = app
        .request("GET", "/api/news?search=content&orderBy=title&sortBy=DESC", None)
        .await;
    let titles: Vec<&str> = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Launch B", "Launch A"]);
    assert_eq!(response.body["meta"]["total"], 2);
}

#[tokio::test]
async fn test_list_search_without_match_is_empty() {
    let app = TestApp::with_news(&[("Launch A", "alpha content")]);

    let response = app.request("GET", "/api/news?search=gamma", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
    assert_eq!(response.body["meta"]["total"], 0);
    assert_eq!(response.body["meta"]["totalPages"], 0);
}

#[tokio::test]
async fn test_list_pagination_metadata() {
    let titles: Vec<String> = (1..=45).map(|i| format!("news {i:02}")).collect();
    let items: Vec<(&str, &str)> = titles.iter().map(|t| (t.as_str(), "body")).collect();
    let app = TestApp::with_news(&items);

    let response = app.request("GET", "/api/news?page=3&limit=20", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 5);
    assert_eq!(
        response.body["meta"],
        json!({ "total": 45, "page": 3, "limit": 20, "totalPages": 3 })
    );

    let response = app.request("GET", "/api/news", None).await;
    assert_eq!(response.body["meta"]["limit"], 10);
    assert_eq!(response.body["meta"]["page"], 1);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_list_treats_empty_parameters_as_defaults() {
    let app = TestApp::with_news(&[("Launch A", "alpha"), ("Launch B", "beta")]);

    for query in ["page=&limit=", "sortBy=", "page=&limit=&orderBy=&sortBy=&search="] {
        let response = app.request("GET", &format!("/api/news?{query}"), None).await;
        assert_eq!(response.status, StatusCode::OK, "query {query}");
        assert_eq!(response.body["meta"]["page"], 1, "query {query}");
        assert_eq!(response.body["meta"]["limit"], 10, "query {query}");
        assert_eq!(response.body["meta"]["total"], 2, "query {query}");
    }
}

#[tokio::test]
async fn test_list_rejects_bad_parameters() {
    let app = TestApp::new();

    for query in [
        "limit=101",
        "orderBy=password",
        "sortBy=sideways",
        "page=abc",
    ] {
        let response = app.request("GET", &format!("/api/news?{query}"), None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "query {query}");
    }
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let app = TestApp::new();
    let code = app.create_news("Launch A", "alpha content").await;
    let before = app.request("GET", &format!("/api/news/{code}"), None).await.body;

    let response = app
        .request("PUT", &format!("/api/news/{code}"), Some(json!({ "title": "Launch A2" })))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], "Launch A2");
    assert_eq!(response.body["description"], "alpha content");
    assert_eq!(response.body["creationDate"], before["creationDate"]);
    assert_ne!(response.body["updateDate"], before["updateDate"]);
}

#[tokio::test]
async fn test_update_with_empty_body_advances_update_date() {
    let app = TestApp::new();
    let code = app.create_news("Launch A", "alpha content").await;
    let before = app.request("GET", &format!("/api/news/{code}"), None).await.body;

    let response = app
        .request("PUT", &format!("/api/news/{code}"), Some(json!({})))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["title"], before["title"]);
    assert_eq!(response.body["description"], before["description"]);
    assert_ne!(response.body["updateDate"], before["updateDate"]);
}

#[tokio::test]
async fn test_update_unknown_code_is_not_found() {
    let app = TestApp::new();
    let response = app
        .request(
            "PUT",
            &format!("/api/news/{}", uuid::Uuid::new_v4()),
            Some(json!({ "title": "x" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_hides_news() {
    let app = TestApp::new();
    let code = app.create_news("Launch A", "alpha content").await;

    let response = app.request("DELETE", &format!("/api/news/{code}"), None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app.request("GET", &format!("/api/news/{code}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/news", None).await;
    assert_eq!(response.body["meta"]["total"], 0);

    let response = app.request("DELETE", &format!("/api/news/{code}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Still stored for audit.
    assert_eq!(app.news.codes().len(), 1);
}
