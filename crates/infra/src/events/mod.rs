//! Persistent event channel
//!
//! A single authenticated WebSocket connection to the event server,
//! delivering named events (tips, insights, goal updates) to subscribers.
//! Handles capped, jittered reconnection and the terminal conditions
//! (server shutdown, auth rejection, exhausted reconnect cap).

pub mod backoff;
pub mod channel;
pub mod protocol;

pub use backoff::ReconnectPolicy;
pub use channel::{
    ChannelState, ChannelStatus, EventCallback, EventChannel, EventChannelConfig, StatusCallback,
    SubscriptionId, TerminalReason,
};
pub use protocol::{Envelope, EventName};
