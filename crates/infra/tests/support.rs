//! Shared test helpers for `ecotrack-infra` integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ecotrack_core::SessionEvents;
use ecotrack_infra::{
    ApiClient, ChannelState, ChannelStatus, EventCallback, EventChannel, MemoryCredentialStore,
    StatusCallback,
};
use ecotrack_domain::ClientConfig;
use futures::SinkExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;

/// Counts sign-in navigations triggered by the 401 interceptor
#[derive(Default)]
pub struct RecordingSession {
    pub navigations: AtomicUsize,
}

impl RecordingSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.navigations.load(Ordering::SeqCst)
    }
}

impl SessionEvents for RecordingSession {
    fn auth_expired(&self) {
        self.navigations.fetch_add(1, Ordering::SeqCst);
    }
}

/// API client against a mock server with an in-memory credential store
pub fn api_client(
    base_url: &str,
    store: Arc<MemoryCredentialStore>,
) -> (Arc<ApiClient>, Arc<RecordingSession>) {
    let session = RecordingSession::new();
    let config = ClientConfig::production(base_url);
    let client = ApiClient::new(&config, store, session.clone()).expect("api client");
    (Arc::new(client), session)
}

/// Bind a listener for a test WebSocket server
pub async fn bind_ws() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    (listener, format!("ws://{addr}"))
}

/// Send one `{event, data}` envelope over a server-side socket
pub async fn send_event(
    ws: &mut WebSocketStream<TcpStream>,
    event: &str,
    data: serde_json::Value,
) {
    let frame = serde_json::json!({ "event": event, "data": data }).to_string();
    ws.send(Message::Text(frame)).await.expect("send event");
}

/// Callback pushing every payload into a channel, in delivery order
pub fn event_recorder() -> (EventCallback, mpsc::UnboundedReceiver<serde_json::Value>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let callback: EventCallback = Arc::new(move |data: &serde_json::Value| {
        let _ = tx.send(data.clone());
    });
    (callback, rx)
}

/// Callback recording every status transition
pub fn status_recorder() -> (StatusCallback, Arc<Mutex<Vec<ChannelStatus>>>) {
    let statuses = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&statuses);
    let callback: StatusCallback = Arc::new(move |status: &ChannelStatus| {
        sink.lock().unwrap().push(*status);
    });
    (callback, statuses)
}

/// Poll until the channel reaches `state` or the timeout elapses
pub async fn wait_for_state(channel: &EventChannel, state: ChannelState, timeout: Duration) {
    let deadline = tokio::time::Instant::now() + timeout;
    while channel.state() != state {
        assert!(
            tokio::time::Instant::now() < deadline,
            "channel never reached {state:?}, stuck at {:?}",
            channel.state()
        );
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Receive with a timeout, panicking when nothing arrives
pub async fn recv_within(
    rx: &mut mpsc::UnboundedReceiver<serde_json::Value>,
    timeout: Duration,
) -> serde_json::Value {
    tokio::time::timeout(timeout, rx.recv())
        .await
        .expect("timed out waiting for event")
        .expect("recorder channel closed")
}

/// A server-side WebSocket accept over an already-bound listener
pub async fn accept_ws(listener: &TcpListener) -> WebSocketStream<TcpStream> {
    let (stream, _) = listener.accept().await.expect("accept");
    tokio_tungstenite::accept_async(stream).await.expect("ws handshake")
}
