//! Integration tests for the HTTP record store against a local fixture server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use futures::stream::{self, StreamExt};
use serde_json::json;

use degrees_storage::{HttpRecordStore, HttpStoreConfig, RecordStore, StorageError};

async fn record(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "sholay" => Json(json!({
            "url": "sholay",
            "type": "Movie",
            "name": "Sholay",
            "cast": [{"url": "amitabh-bachchan", "name": "Amitabh Bachchan", "role": "Actor"}],
            "crew": []
        }))
        .into_response(),
        "broken" => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        "garbage" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Json(json!({"url": "slow"})).into_response()
        }
        "stalled" => {
            // Headers and the first chunk go out at once; the rest never arrives in time.
            let head = stream::once(async {
                Ok::<_, std::io::Error>(Bytes::from_static(b"{\"url\": "))
            });
            let tail = stream::once(async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok::<_, std::io::Error>(Bytes::from_static(b"\"stalled\"}"))
            });
            (StatusCode::OK, Body::from_stream(head.chain(tail))).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_fixture_server() -> SocketAddr {
    let app = Router::new().route("/:id", get(record));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn store_for(addr: SocketAddr) -> HttpRecordStore {
    let config = HttpStoreConfig::default()
        .with_base_url(format!("http://{addr}"))
        .with_request_timeout(Duration::from_millis(100));
    HttpRecordStore::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_existing_record_is_returned_as_json() {
    let store = store_for(spawn_fixture_server().await).await;

    let record = store.fetch_record("sholay").await.unwrap();

    assert_eq!(record["name"], "Sholay");
    assert_eq!(record["cast"][0]["url"], "amitabh-bachchan");
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let store = store_for(spawn_fixture_server().await).await;

    let err = store.fetch_record("nobody").await.unwrap_err();

    assert!(matches!(err, StorageError::NotFound { id } if id == "nobody"));
}

#[tokio::test]
async fn test_server_error_maps_to_transport() {
    let store = store_for(spawn_fixture_server().await).await;

    let err = store.fetch_record("broken").await.unwrap_err();

    assert!(matches!(err, StorageError::Transport { .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_non_json_body_maps_to_invalid_response() {
    let store = store_for(spawn_fixture_server().await).await;

    let err = store.fetch_record("garbage").await.unwrap_err();

    assert!(matches!(err, StorageError::InvalidResponse { .. }));
}

#[tokio::test]
async fn test_request_timeout_maps_to_transport() {
    let store = store_for(spawn_fixture_server().await).await;

    let err = store.fetch_record("slow").await.unwrap_err();

    assert!(matches!(err, StorageError::Transport { .. }));
}

#[tokio::test]
async fn test_stalled_body_maps_to_transport_not_invalid_response() {
    let store = store_for(spawn_fixture_server().await).await;

    let err = store.fetch_record("stalled").await.unwrap_err();

    assert!(matches!(err, StorageError::Transport { ref id, .. } if id == "stalled"));
    assert!(err.to_string().contains("failed to read body"));
}

#[tokio::test]
async fn test_dot_dot_id_is_rejected_without_reaching_the_server() {
    let store = store_for(spawn_fixture_server().await).await;

    let err = store.fetch_record("..").await.unwrap_err();

    assert!(matches!(err, StorageError::InvalidId { .. }));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_transport() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let store = store_for(addr).await;

    let err = store.fetch_record("sholay").await.unwrap_err();

    assert!(matches!(err, StorageError::Transport { .. }));
}
