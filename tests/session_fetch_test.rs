//! Integration tests for the one-shot session fetch against an in-process
//! WebSocket server.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::handshake::server::{Request, Response};
use tokio_tungstenite::tungstenite::Message;

use traceview::websocket::{fetch_session, WsClientConfig, WsError};

/// Spawn a server that accepts one connection, reports the request URI and
/// replies with the given frames.
async fn spawn_server(frames: Vec<Message>) -> (SocketAddr, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (uri_tx, uri_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();

        let mut uri = String::new();
        let callback = |req: &Request, resp: Response| {
            uri = req.uri().to_string();
            Ok(resp)
        };
        let mut ws = accept_hdr_async(stream, callback).await.unwrap();
        let _ = uri_tx.send(uri);

        for frame in frames {
            if ws.send(frame).await.is_err() {
                return;
            }
        }
        // Drain until the client closes
        while let Some(Ok(_)) = ws.next().await {}
    });

    (addr, uri_rx)
}

fn payload_json() -> String {
    r#"{
        "values": {
            "state.position": {"name": "Position", "x": [0.0, 0.5, 1.0], "y": [1.0, 1.5, 2.0]}
        },
        "groups": [
            {"name": "Cart", "values": ["state.position"]}
        ]
    }"#
    .to_string()
}

#[tokio::test]
async fn test_fetch_sends_session_id_and_parses_payload() {
    let (addr, uri_rx) = spawn_server(vec![Message::Text(payload_json())]).await;
    let config = WsClientConfig::default().with_host(addr.to_string());

    let session = fetch_session(&config, "abc").await.unwrap();

    assert_eq!(session.values.len(), 1);
    assert_eq!(session.values["state.position"].name, "Position");
    assert_eq!(session.values["state.position"].y, vec![1.0, 1.5, 2.0]);
    assert_eq!(session.groups.len(), 1);

    let uri = uri_rx.await.unwrap();
    assert_eq!(uri, "/ws?session_id=abc");
}

#[tokio::test]
async fn test_fetch_percent_encodes_session_id() {
    let (addr, uri_rx) = spawn_server(vec![Message::Text(payload_json())]).await;
    let config = WsClientConfig::default().with_host(addr.to_string());

    fetch_session(&config, "run 7/a").await.unwrap();

    let uri = uri_rx.await.unwrap();
    assert_eq!(uri, "/ws?session_id=run%207%2Fa");
}

#[tokio::test]
async fn test_fetch_sends_empty_session_id() {
    let (addr, uri_rx) = spawn_server(vec![Message::Text(payload_json())]).await;
    let config = WsClientConfig::default().with_host(addr.to_string());

    fetch_session(&config, "").await.unwrap();

    let uri = uri_rx.await.unwrap();
    assert_eq!(uri, "/ws?session_id=");
}

#[tokio::test]
async fn test_fetch_skips_non_text_frames() {
    let (addr, _uri_rx) = spawn_server(vec![
        Message::Binary(vec![1, 2, 3]),
        Message::Text(payload_json()),
    ])
    .await;
    let config = WsClientConfig::default().with_host(addr.to_string());

    let session = fetch_session(&config, "abc").await.unwrap();
    assert_eq!(session.values.len(), 1);
}

#[tokio::test]
async fn test_fetch_uses_first_text_frame_only() {
    let second = r#"{"values": {}, "groups": []}"#.to_string();
    let (addr, _uri_rx) = spawn_server(vec![
        Message::Text(payload_json()),
        Message::Text(second),
    ])
    .await;
    let config = WsClientConfig::default().with_host(addr.to_string());

    let session = fetch_session(&config, "abc").await.unwrap();
    assert_eq!(session.values.len(), 1);
}

#[tokio::test]
async fn test_fetch_malformed_payload_is_parse_error() {
    let (addr, _uri_rx) = spawn_server(vec![Message::Text("not json".to_string())]).await;
    let config = WsClientConfig::default().with_host(addr.to_string());

    let result = fetch_session(&config, "abc").await;
    assert!(matches!(result, Err(WsError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_close_without_payload_is_closed_early() {
    let (addr, _uri_rx) = spawn_server(vec![Message::Close(None)]).await;
    let config = WsClientConfig::default().with_host(addr.to_string());

    let result = fetch_session(&config, "abc").await;
    assert!(matches!(result, Err(WsError::ClosedEarly)));
}
