//! HTTP transport integration tests.
//!
//! Starts an axum server on an ephemeral port and exercises it with reqwest.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};
use video_store::{http, InMemoryVideoRepository, VideoService};

use crate::support::invalid;

/// Bind to port 0 and return the base URL.
async fn start_server(repo: InMemoryVideoRepository) -> String {
    let app = http::router(Arc::new(VideoService::new(repo)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn create(client: &reqwest::Client, base: &str, body: Value) -> Value {
    let resp = client
        .post(format!("{base}/videos"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.unwrap()
}

async fn list(client: &reqwest::Client, base: &str) -> Value {
    let resp = client.get(format!("{base}/videos")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn empty_collection_lists_nothing() {
    let base = start_server(InMemoryVideoRepository::new()).await;
    let client = reqwest::Client::new();

    assert_eq!(list(&client, &base).await, json!([]));
}

#[tokio::test]
async fn unknown_video_is_404() {
    let base = start_server(InMemoryVideoRepository::new()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/videos/234")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.text().await.unwrap().is_empty());

    let resp = client.get(format!("{base}/videos/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_each_bad_field() {
    let base = start_server(InMemoryVideoRepository::new()).await;
    let client = reqwest::Client::new();

    let cases = [
        (
            json!({ "title": "", "author": "Anna", "availableResolutions": ["P1080"] }),
            "title",
        ),
        (
            json!({
                "title": "Tomas first words",
                "author": "",
                "availableResolutions": ["P1080"],
            }),
            "author",
        ),
        (
            json!({ "title": "Tomas first words", "author": "Here", "availableResolutions": [22] }),
            "availableResolutions",
        ),
    ];

    for (body, field) in cases {
        let resp = client
            .post(format!("{base}/videos"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let errors: Value = resp.json().await.unwrap();
        assert_eq!(errors, invalid(field));
    }

    assert_eq!(list(&client, &base).await, json!([]));
}

#[tokio::test]
async fn malformed_body_reports_required_fields() {
    let base = start_server(InMemoryVideoRepository::new()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/videos"))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let errors: Value = resp.json().await.unwrap();
    let fields: Vec<&str> = errors["errorsMessages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| error["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["title", "author"]);
}

#[tokio::test]
async fn create_returns_full_record() {
    let base = start_server(InMemoryVideoRepository::new()).await;
    let client = reqwest::Client::new();

    let video = create(
        &client,
        &base,
        json!({ "title": "Sashullliaa", "author": "Here", "availableResolutions": ["P144"] }),
    )
    .await;

    assert!(video["id"].is_i64());
    assert_eq!(video["title"], "Sashullliaa");
    assert_eq!(video["author"], "Here");
    assert_eq!(video["canBeDownloaded"], false);
    assert_eq!(video["minAgeRestriction"], Value::Null);
    assert_eq!(video["availableResolutions"], json!(["P144"]));

    let timestamp = |key: &str| {
        chrono::DateTime::parse_from_rfc3339(video[key].as_str().unwrap()).unwrap()
    };
    let created_at = timestamp("createdAt");
    let published = timestamp("publicationDate");
    assert_eq!(published - created_at, chrono::TimeDelta::days(1));

    assert_eq!(list(&client, &base).await, json!([video]));
}

#[tokio::test]
async fn replace_flow() {
    let base = start_server(InMemoryVideoRepository::new()).await;
    let client = reqwest::Client::new();

    let video = create(
        &client,
        &base,
        json!({ "title": "Sashullliaa", "author": "Here", "availableResolutions": ["P144"] }),
    )
    .await;
    let id = video["id"].as_i64().unwrap();
    let url = format!("{base}/videos/{id}");
    let publication_date = "2030-01-02T03:04:05.678Z";

    // Unknown id wins over an invalid body.
    let resp = client
        .put(format!("{base}/videos/11"))
        .json(&json!({ "title": "", "author": "Veronika Bluuuuzz" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    for (body, field) in [
        (json!({ "title": "", "author": "Veronika Bluuuuzz", "minAgeRestriction": 11 }), "title"),
        (json!({ "title": "QmateFuc", "author": "", "minAgeRestriction": 11 }), "author"),
    ] {
        let resp = client.put(&url).json(&body).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.json::<Value>().await.unwrap(), invalid(field));
    }

    let unchanged: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(unchanged, video);

    let resp = client
        .put(&url)
        .json(&json!({
            "title": "Andreas",
            "author": "Konstantin Michaelis",
            "canBeDownloaded": true,
            "minAgeRestriction": 11,
            "publicationDate": publication_date,
            "availableResolutions": ["P144", "P2160"],
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(resp.text().await.unwrap().is_empty());

    let updated: Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    assert_eq!(
        updated,
        json!({
            "id": id,
            "title": "Andreas",
            "author": "Konstantin Michaelis",
            "canBeDownloaded": true,
            "minAgeRestriction": 11,
            "createdAt": video["createdAt"],
            "publicationDate": publication_date,
            "availableResolutions": ["P144", "P2160"],
        })
    );
}

#[tokio::test]
async fn delete_flow() {
    let base = start_server(InMemoryVideoRepository::new()).await;
    let client = reqwest::Client::new();

    let first = create(
        &client,
        &base,
        json!({ "title": "Sashullliaa", "author": "Here", "availableResolutions": ["P144"] }),
    )
    .await;
    let second = create(
        &client,
        &base,
        json!({
            "title": "Clarity Team forever",
            "author": "Potraha",
            "availableResolutions": ["P144", "P2160"],
        }),
    )
    .await;
    assert_eq!(list(&client, &base).await, json!([first.clone(), second.clone()]));

    let first_url = format!("{base}/videos/{}", first["id"]);
    let resp = client.delete(&first_url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client.get(&first_url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client.delete(&first_url).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .get(format!("{base}/videos/{}", second["id"]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), second);

    assert_eq!(list(&client, &base).await, json!([second]));
}

#[tokio::test]
async fn reset_clears_everything() {
    let base = start_server(InMemoryVideoRepository::seeded()).await;
    let client = reqwest::Client::new();

    create(
        &client,
        &base,
        json!({ "title": "t", "author": "a", "availableResolutions": [] }),
    )
    .await;
    assert_eq!(list(&client, &base).await.as_array().unwrap().len(), 2);

    let resp = client
        .delete(format!("{base}/testing/all-data"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(list(&client, &base).await, json!([]));
}

#[tokio::test]
async fn health_reports_count() {
    let base = start_server(InMemoryVideoRepository::seeded()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Value>().await.unwrap(), json!({ "ok": true, "videos": 1 }));
}
