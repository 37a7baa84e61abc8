use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::web::Data;
use actix_web::App;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};

use campman_server::{
    cors_headers, routes, AssetStore, Database, MemoryAssetStore, MemoryDatabase,
};

macro_rules! test_app {
    ($db:expr, $assets:expr) => {
        test::init_service(
            App::new()
                .wrap(cors_headers())
                .app_data(Data::new(Box::new($db.clone()) as Box<dyn Database>))
                .app_data(Data::new(Box::new($assets.clone()) as Box<dyn AssetStore>))
                .configure(routes),
        )
        .await
    };
}

#[actix_web::test]
async fn upload_stores_asset_and_returns_presigned_url() {
    let db = MemoryDatabase::new();
    let assets = MemoryAssetStore::new();
    let app = test_app!(db, assets);

    let content = b"pretend this is a jpeg";
    let req = test::TestRequest::post()
        .uri("/uploads")
        .set_json(json!({
            "fileContent": STANDARD.encode(content),
            "fileName": "logo.jpg",
            "fileType": "logo",
            "campaignId": "17000000000000001234",
            "contentType": "image/jpeg"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;

    let key = body["key"].as_str().unwrap();
    assert!(key.starts_with("logo/17000000000000001234/"));
    assert!(key.ends_with("-logo.jpg"));
    assert_eq!(body["size"].as_u64(), Some(content.len() as u64));
    assert_eq!(body["contentType"].as_str(), Some("image/jpeg"));
    assert_eq!(
        body["url"].as_str(),
        Some(format!("/uploads/{}?expires=604800", key).as_str())
    );

    let stored = assets.object(key).await.expect("object was not stored");
    assert_eq!(stored.bytes, content);
    assert_eq!(stored.content_type, "image/jpeg".to_string());
    assert_eq!(stored.metadata.campaign_id, "17000000000000001234".to_string());
    assert_eq!(stored.metadata.file_type, "logo".to_string());
}

#[actix_web::test]
async fn upload_rejects_disallowed_content_type() {
    let db = MemoryDatabase::new();
    let assets = MemoryAssetStore::new();
    let app = test_app!(db, assets);

    let req = test::TestRequest::post()
        .uri("/uploads")
        .set_json(json!({
            "fileContent": STANDARD.encode(b"some notes"),
            "fileName": "notes.txt",
            "contentType": "text/plain"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body["error"].as_str(),
        Some("Invalid file type. Allowed types: JPG, PNG, GIF, PDF, SVG")
    );
    assert_eq!(assets.object_count().await, 0);
}

#[actix_web::test]
async fn upload_rejects_files_over_ten_mib() {
    let db = MemoryDatabase::new();
    let assets = MemoryAssetStore::new();
    let app = test_app!(db, assets);

    let content = vec![0u8; 15 * 1024 * 1024];
    let req = test::TestRequest::post()
        .uri("/uploads")
        .set_json(json!({
            "fileContent": STANDARD.encode(&content),
            "fileName": "huge.jpg",
            "contentType": "image/jpeg"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body["error"].as_str(),
        Some("File too large. Maximum size is 10MB")
    );
    assert_eq!(assets.object_count().await, 0);
}

#[actix_web::test]
async fn upload_accepts_five_mib_jpeg() {
    let db = MemoryDatabase::new();
    let assets = MemoryAssetStore::new();
    let app = test_app!(db, assets);

    let content = vec![0u8; 5 * 1024 * 1024];
    let req = test::TestRequest::post()
        .uri("/uploads")
        .set_json(json!({
            "fileContent": STANDARD.encode(&content),
            "fileName": "banner.jpg",
            "contentType": "image/jpeg"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(res).await;
    // defaults apply when fileType and campaignId are left out
    assert!(body["key"].as_str().unwrap().starts_with("other/general/"));
    assert_eq!(body["size"].as_u64(), Some(content.len() as u64));
}

#[actix_web::test]
async fn upload_requires_file_name() {
    let db = MemoryDatabase::new();
    let assets = MemoryAssetStore::new();
    let app = test_app!(db, assets);

    let req = test::TestRequest::post()
        .uri("/uploads")
        .set_json(json!({
            "fileContent": STANDARD.encode(b"orphan bytes"),
            "contentType": "image/png"
        }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body["error"].as_str(),
        Some("Missing required field: fileName")
    );
    assert_eq!(assets.object_count().await, 0);
}
