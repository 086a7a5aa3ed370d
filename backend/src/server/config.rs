//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use interview_console::outbound::record_store::RecordStoreClient;
use url::Url;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) record_store: Option<Arc<RecordStoreClient>>,
    pub(crate) allowed_origin: Option<Url>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            record_store: None,
            allowed_origin: None,
        }
    }

    /// Attach a hosted record store client.
    ///
    /// When absent, the server keeps records in process memory.
    #[must_use]
    pub fn with_record_store(mut self, client: RecordStoreClient) -> Self {
        self.record_store = Some(Arc::new(client));
        self
    }

    /// Accept console sessions from `origin` in addition to localhost.
    #[must_use]
    pub fn with_allowed_origin(mut self, origin: Option<Url>) -> Self {
        self.allowed_origin = origin;
        self
    }
}
