//! Event channel implementation
//!
//! One long-lived handle per process, produced by [`EventChannel::spawn`].
//! The channel owns the socket; subscribers only attach and detach
//! handlers and must never close the channel themselves.
//!
//! State machine: `disconnected -> connecting -> connected`, with drops
//! routed through `reconnecting` under a capped, jittered backoff. Three
//! conditions latch the channel terminal until `force_reconnect`: a
//! server-initiated disconnect, an authentication rejection (close code
//! 4401 or a 401 on the upgrade), and an exhausted reconnect cap. The
//! credential is re-read from storage before every attempt; if it is gone
//! the reconnection is abandoned.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ecotrack_core::CredentialStore;
use ecotrack_domain::{ChannelError, ClientConfig};
use futures::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::client::IntoClientRequest;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use super::backoff::ReconnectPolicy;
use super::protocol::{Envelope, EventName};

/// Close code the server uses to reject a credential
const CLOSE_CODE_AUTH: u16 = 4401;

/// Handshake timeout per connect attempt
const CONNECT_TIMEOUT: Duration = Duration::from_secs(20);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Callback invoked with an event payload
pub type EventCallback = Arc<dyn Fn(&serde_json::Value) + Send + Sync>;

/// Callback invoked with channel status transitions
pub type StatusCallback = Arc<dyn Fn(&ChannelStatus) + Send + Sync>;

/// Channel lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Disconnected,
    Connecting,
    Connected,
    Reconnecting,
}

/// Why the channel latched terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    ServerShutdown,
    AuthRejected,
    ReconnectExhausted,
}

/// Status notifications delivered to status observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStatus {
    Connecting,
    Connected,
    Reconnecting { attempt: u32 },
    Disconnected,
    /// Fired exactly once per connection epoch
    Terminal { reason: TerminalReason },
}

/// Identifies one subscription; returned by `on` and consumed by `off`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Event channel configuration
#[derive(Debug, Clone)]
pub struct EventChannelConfig {
    /// WebSocket URL of the event server
    pub url: String,
    pub reconnect: ReconnectPolicy,
}

impl EventChannelConfig {
    /// Derive from the client configuration, mapping http(s) to ws(s)
    ///
    /// # Errors
    /// `ChannelError::InvalidUrl` when the event URL does not resolve or
    /// carries an unsupported scheme.
    pub fn from_client_config(config: &ClientConfig) -> Result<Self, ChannelError> {
        let raw = config.event_url().map_err(|e| ChannelError::InvalidUrl(e.to_string()))?;
        let mut url =
            Url::parse(&raw).map_err(|e| ChannelError::InvalidUrl(format!("{raw}: {e}")))?;
        let scheme = match url.scheme() {
            "http" | "ws" => "ws",
            "https" | "wss" => "wss",
            other => {
                return Err(ChannelError::InvalidUrl(format!("unsupported scheme {other}")));
            }
        };
        if url.set_scheme(scheme).is_err() {
            return Err(ChannelError::InvalidUrl(raw));
        }
        Ok(Self { url: url.to_string(), reconnect: ReconnectPolicy::default() })
    }

    pub fn with_reconnect(mut self, reconnect: ReconnectPolicy) -> Self {
        self.reconnect = reconnect;
        self
    }
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    events: HashMap<EventName, Vec<(u64, EventCallback)>>,
    status: Vec<(u64, StatusCallback)>,
}

struct ChannelInner {
    config: EventChannelConfig,
    credentials: Arc<dyn CredentialStore>,
    state: Mutex<ChannelState>,
    attempts: AtomicU32,
    terminal: AtomicBool,
    subscribers: Mutex<Subscribers>,
    outbound: Mutex<Option<mpsc::UnboundedSender<Message>>>,
    cancel: Mutex<Option<CancellationToken>>,
}

impl ChannelInner {
    fn set_state(&self, state: ChannelState) {
        *self.state.lock() = state;
    }

    fn notify_status(&self, status: ChannelStatus) {
        let callbacks: Vec<StatusCallback> =
            self.subscribers.lock().status.iter().map(|(_, cb)| Arc::clone(cb)).collect();
        for callback in callbacks {
            callback(&status);
        }
    }

    /// Deliver an event synchronously to its subscribers, registration order
    fn dispatch(&self, name: EventName, data: &serde_json::Value) {
        let callbacks: Vec<EventCallback> = self
            .subscribers
            .lock()
            .events
            .get(&name)
            .map(|list| list.iter().map(|(_, cb)| Arc::clone(cb)).collect())
            .unwrap_or_default();
        debug!(event = name.as_str(), subscribers = callbacks.len(), "dispatching event");
        for callback in callbacks {
            callback(data);
        }
    }

    fn latch_terminal(&self, reason: TerminalReason) {
        self.terminal.store(true, Ordering::SeqCst);
        self.set_state(ChannelState::Disconnected);
        *self.outbound.lock() = None;
        warn!(?reason, "event channel terminal");
        self.notify_status(ChannelStatus::Terminal { reason });
    }
}

/// Handle to the process-wide event channel
///
/// Cloning the handle shares the same underlying channel.
#[derive(Clone)]
pub struct EventChannel {
    inner: Arc<ChannelInner>,
}

impl EventChannel {
    /// Factory producing a long-lived channel handle
    ///
    /// The channel starts disconnected; call [`EventChannel::connect`] once
    /// a credential is stored.
    pub fn spawn(config: EventChannelConfig, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            inner: Arc::new(ChannelInner {
                config,
                credentials,
                state: Mutex::new(ChannelState::Disconnected),
                attempts: AtomicU32::new(0),
                terminal: AtomicBool::new(false),
                subscribers: Mutex::new(Subscribers::default()),
                outbound: Mutex::new(None),
                cancel: Mutex::new(None),
            }),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> ChannelState {
        *self.inner.state.lock()
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ChannelState::Connected
    }

    /// Subscribe to a named event; callbacks run in registration order
    pub fn on(&self, event: EventName, callback: EventCallback) -> SubscriptionId {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.next_id += 1;
        let id = subscribers.next_id;
        subscribers.events.entry(event).or_default().push((id, callback));
        SubscriptionId(id)
    }

    /// Withdraw a subscription; unknown ids are ignored
    pub fn off(&self, event: EventName, id: SubscriptionId) {
        let mut subscribers = self.inner.subscribers.lock();
        if let Some(list) = subscribers.events.get_mut(&event) {
            list.retain(|(existing, _)| *existing != id.0);
        }
    }

    /// Subscribe to status transitions
    pub fn on_status(&self, callback: StatusCallback) -> SubscriptionId {
        let mut subscribers = self.inner.subscribers.lock();
        subscribers.next_id += 1;
        let id = subscribers.next_id;
        subscribers.status.push((id, callback));
        SubscriptionId(id)
    }

    /// Withdraw a status subscription
    pub fn off_status(&self, id: SubscriptionId) {
        self.inner.subscribers.lock().status.retain(|(existing, _)| *existing != id.0);
    }

    /// Connect to the event server
    ///
    /// Requires a stored credential; without one the transition is rejected
    /// and the state is unchanged. A no-op when already connecting or
    /// connected.
    ///
    /// # Errors
    /// `ChannelError::MissingCredential` without a credential,
    /// `ChannelError::Terminal` after a terminal latch that has not been
    /// cleared by [`EventChannel::force_reconnect`].
    pub fn connect(&self) -> Result<(), ChannelError> {
        if self.inner.terminal.load(Ordering::SeqCst) {
            return Err(ChannelError::Terminal);
        }
        if self.inner.credentials.get().is_none() {
            warn!("no credential available, event channel connect rejected");
            return Err(ChannelError::MissingCredential);
        }

        {
            let mut state = self.inner.state.lock();
            if *state != ChannelState::Disconnected {
                debug!(current = ?*state, "connect ignored, channel already active");
                return Ok(());
            }
            *state = ChannelState::Connecting;
        }

        info!(url = %self.inner.config.url, "connecting to event server");
        self.inner.attempts.store(0, Ordering::SeqCst);
        self.inner.notify_status(ChannelStatus::Connecting);

        let cancel = CancellationToken::new();
        *self.inner.cancel.lock() = Some(cancel.clone());
        tokio::spawn(run(Arc::clone(&self.inner), cancel));
        Ok(())
    }

    /// Force the channel down, releasing the socket and resetting the
    /// failure counter
    pub fn disconnect(&self) {
        info!("disconnecting event channel");
        if let Some(cancel) = self.inner.cancel.lock().take() {
            cancel.cancel();
        }
        *self.inner.outbound.lock() = None;
        self.inner.attempts.store(0, Ordering::SeqCst);
        self.inner.set_state(ChannelState::Disconnected);
        self.inner.notify_status(ChannelStatus::Disconnected);
    }

    /// Clear a terminal latch and connect again
    ///
    /// # Errors
    /// Same as [`EventChannel::connect`], minus the terminal case.
    pub fn force_reconnect(&self) -> Result<(), ChannelError> {
        info!("force reconnect requested");
        if let Some(cancel) = self.inner.cancel.lock().take() {
            cancel.cancel();
        }
        self.inner.terminal.store(false, Ordering::SeqCst);
        self.inner.attempts.store(0, Ordering::SeqCst);
        self.inner.set_state(ChannelState::Disconnected);
        self.connect()
    }

    /// Send the outgoing keepalive frame
    ///
    /// A warning when not connected, matching the channel's fire-and-forget
    /// emit semantics.
    pub fn ping(&self) {
        let sender = self.inner.outbound.lock().clone();
        match sender {
            Some(sender) => {
                let frame = serde_json::to_string(&Envelope::ping()).unwrap_or_default();
                if sender.send(Message::Text(frame)).is_err() {
                    warn!("event channel closed while sending ping");
                }
            }
            None => warn!("event channel not connected, cannot send ping"),
        }
    }
}

/// Outcome of one established connection
enum DropReason {
    Cancelled,
    ServerShutdown,
    AuthRejected,
    Transport(String),
}

/// Outcome of one connect attempt
enum ConnectFailure {
    AuthRejected,
    Transport(String),
}

/// Driver task: owns the socket for one connection epoch, including the
/// reconnect loop. Exactly one driver runs at a time; attempts are strictly
/// serialized.
async fn run(inner: Arc<ChannelInner>, cancel: CancellationToken) {
    loop {
        // Re-read the credential for every attempt; if it was cleared the
        // reconnection is abandoned.
        let Some(token) = inner.credentials.get() else {
            warn!("credential gone, abandoning event channel reconnection");
            inner.set_state(ChannelState::Disconnected);
            inner.notify_status(ChannelStatus::Disconnected);
            return;
        };

        let connected = tokio::select! {
            () = cancel.cancelled() => return,
            result = connect_ws(&inner.config.url, &token) => result,
        };

        match connected {
            Ok(stream) => {
                info!(url = %inner.config.url, "event channel connected");
                inner.attempts.store(0, Ordering::SeqCst);
                inner.set_state(ChannelState::Connected);
                inner.notify_status(ChannelStatus::Connected);

                match pump(&inner, stream, &cancel).await {
                    DropReason::Cancelled => return,
                    DropReason::ServerShutdown => {
                        inner.latch_terminal(TerminalReason::ServerShutdown);
                        return;
                    }
                    DropReason::AuthRejected => {
                        inner.credentials.clear();
                        inner.latch_terminal(TerminalReason::AuthRejected);
                        return;
                    }
                    DropReason::Transport(reason) => {
                        warn!(%reason, "event channel dropped");
                    }
                }
            }
            Err(ConnectFailure::AuthRejected) => {
                inner.credentials.clear();
                inner.latch_terminal(TerminalReason::AuthRejected);
                return;
            }
            Err(ConnectFailure::Transport(reason)) => {
                debug!(%reason, "event channel connect attempt failed");
            }
        }

        let attempt = inner.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if inner.config.reconnect.exhausted(attempt) {
            inner.latch_terminal(TerminalReason::ReconnectExhausted);
            return;
        }

        let delay = inner.config.reconnect.delay_for(attempt);
        warn!(
            attempt,
            max_attempts = inner.config.reconnect.max_attempts,
            delay_ms = delay.as_millis() as u64,
            "scheduling event channel reconnect"
        );
        inner.set_state(ChannelState::Reconnecting);
        inner.notify_status(ChannelStatus::Reconnecting { attempt });

        tokio::select! {
            () = cancel.cancelled() => return,
            () = tokio::time::sleep(delay) => {}
        }
    }
}

/// Perform the authenticated WebSocket handshake
async fn connect_ws(url: &str, token: &str) -> Result<WsStream, ConnectFailure> {
    let mut request = url
        .into_client_request()
        .map_err(|e| ConnectFailure::Transport(e.to_string()))?;
    let bearer = format!("Bearer {token}")
        .parse()
        .map_err(|_| ConnectFailure::Transport("credential is not header-safe".to_string()))?;
    request.headers_mut().insert("Authorization", bearer);

    let handshake = tokio::time::timeout(CONNECT_TIMEOUT, connect_async(request)).await;
    match handshake {
        Ok(Ok((stream, _response))) => Ok(stream),
        Ok(Err(WsError::Http(response))) if response.status().as_u16() == 401 => {
            Err(ConnectFailure::AuthRejected)
        }
        Ok(Err(e)) => Err(ConnectFailure::Transport(e.to_string())),
        Err(_) => Err(ConnectFailure::Transport("handshake timed out".to_string())),
    }
}

/// Read/write loop for one established connection
async fn pump(
    inner: &Arc<ChannelInner>,
    stream: WsStream,
    cancel: &CancellationToken,
) -> DropReason {
    let (mut sink, mut source) = stream.split();
    let (outbound_tx, mut outbound_rx) = mpsc::unbounded_channel::<Message>();
    *inner.outbound.lock() = Some(outbound_tx);

    let reason = loop {
        tokio::select! {
            () = cancel.cancelled() => break DropReason::Cancelled,

            outgoing = outbound_rx.recv() => {
                // recv yields None once disconnect() drops the sender
                let Some(message) = outgoing else { break DropReason::Cancelled };
                if let Err(e) = sink.send(message).await {
                    break DropReason::Transport(e.to_string());
                }
            }

            incoming = source.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if let Some(reason) = handle_frame(inner, &text) {
                        break reason;
                    }
                }
                Some(Ok(Message::Close(frame))) => {
                    let code = frame.as_ref().map(|f| u16::from(f.code));
                    if code == Some(CLOSE_CODE_AUTH) {
                        break DropReason::AuthRejected;
                    }
                    // Any other explicit close is a server-initiated
                    // disconnect and stays down.
                    break DropReason::ServerShutdown;
                }
                Some(Ok(_)) => {} // binary/ping/pong frames carry nothing here
                Some(Err(e)) => break DropReason::Transport(e.to_string()),
                None => break DropReason::Transport("stream ended".to_string()),
            },
        }
    };

    *inner.outbound.lock() = None;
    reason
}

/// Parse and dispatch one text frame; returns a drop reason for terminal
/// events
fn handle_frame(inner: &Arc<ChannelInner>, text: &str) -> Option<DropReason> {
    let envelope: Envelope = match serde_json::from_str(text) {
        Ok(envelope) => envelope,
        Err(e) => {
            debug!(error = %e, "discarding malformed event frame");
            return None;
        }
    };

    let Some(name) = EventName::parse(&envelope.event) else {
        debug!(event = %envelope.event, "discarding unrecognized event");
        return None;
    };

    inner.dispatch(name, &envelope.data);

    if name == EventName::ServerShutdown {
        return Some(DropReason::ServerShutdown);
    }
    None
}
