//! Shared WebSocket adapter state.
//!
//! Console sessions depend on the same domain ports as the HTTP handlers, plus
//! the origin allow-list applied at upgrade time.

use url::Url;

use crate::inbound::http::state::HttpState;

/// Dependency bundle for the console session endpoint.
#[derive(Clone)]
pub struct WsState {
    pub ports: HttpState,
    /// Extra origin accepted besides `http://localhost:<port>`.
    pub allowed_origin: Option<Url>,
}

impl WsState {
    /// Construct state from explicit port implementations.
    pub fn new(ports: HttpState, allowed_origin: Option<Url>) -> Self {
        Self {
            ports,
            allowed_origin,
        }
    }
}
