//! Full HTTP roundtrips against a server bound to an OS-assigned port.

use crate::support::{insert_book, spawn_app, temp_database};
use diesel::sqlite::SqliteConnection;
use serde_json::{json, Value};

#[tokio::test]
async fn create_then_fetch_roundtrip() {
    let base = spawn_app(temp_database()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "firstName": "Ann", "lastName": "Lee" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let location = resp
        .headers()
        .get("location")
        .expect("201 carries a Location header")
        .to_str()
        .unwrap()
        .to_string();

    let created: Value = resp.json().await.unwrap();
    let id = created["authorId"].as_i64().expect("store-assigned id");
    assert!(id > 0);
    assert_eq!(location, format!("/api/Author/{}", id));
    assert_eq!(created["firstName"], "Ann");
    assert_eq!(created["lastName"], "Lee");

    let resp = client
        .get(format!("{}/api/Author/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched["authorId"], created["authorId"]);
    assert_eq!(fetched["firstName"], "Ann");
    assert_eq!(fetched["lastName"], "Lee");
    assert_eq!(fetched["books"], json!([]));
}

#[tokio::test]
async fn full_lifecycle() {
    let base = spawn_app(temp_database()).await;
    let client = reqwest::Client::new();

    // Create
    let resp = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "firstName": "Ann", "lastName": "Lee" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    let id = created["authorId"].as_i64().unwrap();

    // Update
    let resp = client
        .put(format!("{}/api/Author/{}", base, id))
        .json(&json!({ "authorId": id, "firstName": "Anne", "lastName": "Lee" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().is_empty());

    // Read back: overwrite, not merge
    let fetched: Value = client
        .get(format!("{}/api/Author/{}", base, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["firstName"], "Anne");
    assert_eq!(fetched["lastName"], "Lee");

    // Delete
    let resp = client
        .delete(format!("{}/api/Author/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert!(resp.text().await.unwrap().is_empty());

    // Idempotent absence
    let resp = client
        .get(format!("{}/api/Author/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn missing_ids_report_not_found() {
    let base = spawn_app(temp_database()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("{}/api/Author/9999", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    assert!(resp.text().await.unwrap().is_empty());

    let resp = client
        .put(format!("{}/api/Author/9999", base))
        .json(&json!({ "authorId": 9999, "firstName": "No", "lastName": "One" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{}/api/Author/9999", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // None of the misses touched storage
    let all: Value = client
        .get(format!("{}/api/Author/", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn list_tracks_creates_and_deletes() {
    let base = spawn_app(temp_database()).await;
    let client = reqwest::Client::new();

    let all: Value = client
        .get(format!("{}/api/Author/", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all, json!([]));

    let first: Value = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "firstName": "Octavia", "lastName": "Butler" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "firstName": "Ursula", "lastName": "Le Guin" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let all: Value = client
        .get(format!("{}/api/Author/", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = all.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.contains(&first));
    assert!(listed.contains(&second));

    let resp = client
        .delete(format!("{}/api/Author/{}", base, first["authorId"]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let all: Value = client
        .get(format!("{}/api/Author/", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let listed = all.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert!(!listed.contains(&first));
    assert!(listed.contains(&second));
}

#[tokio::test]
async fn create_honors_client_supplied_id() {
    let base = spawn_app(temp_database()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "authorId": 42, "firstName": "Toni", "lastName": "Morrison" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);

    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["authorId"], 42);

    let resp = client
        .get(format!("{}/api/Author/42", base))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn update_can_renumber_an_author() {
    let base = spawn_app(temp_database()).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "firstName": "James", "lastName": "Baldwin" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["authorId"].as_i64().unwrap();

    // The payload's identifier overwrites the row's, same as the names
    let resp = client
        .put(format!("{}/api/Author/{}", base, id))
        .json(&json!({ "authorId": 777, "firstName": "James", "lastName": "Baldwin" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .get(format!("{}/api/Author/{}", base, id))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let moved: Value = client
        .get(format!("{}/api/Author/777", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(moved["authorId"], 777);
    assert_eq!(moved["firstName"], "James");
}

#[tokio::test]
async fn author_detail_includes_only_their_books() {
    let database = temp_database();
    let base = spawn_app(database.clone()).await;
    let client = reqwest::Client::new();

    let first: Value = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "firstName": "Ursula", "lastName": "Le Guin" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .post(format!("{}/api/Author/", base))
        .json(&json!({ "firstName": "Octavia", "lastName": "Butler" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first_id = first["authorId"].as_i64().unwrap() as i32;
    let second_id = second["authorId"].as_i64().unwrap() as i32;

    {
        let mut pooled = database.get_conn().unwrap();
        let conn: &mut SqliteConnection = &mut pooled;
        insert_book(conn, first_id, "The Left Hand of Darkness", Some("1969-03-01"));
        insert_book(conn, second_id, "Kindred", Some("1979-06-01"));
    }

    let detail: Value = client
        .get(format!("{}/api/Author/{}", base, first_id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let their_books = detail["books"].as_array().unwrap();
    assert_eq!(their_books.len(), 1);
    assert_eq!(their_books[0]["title"], "The Left Hand of Darkness");
    assert_eq!(their_books[0]["authorId"], first["authorId"]);
    assert_eq!(their_books[0]["publishDate"], "1969-03-01");
}
