//! WebSocket inbound adapter carrying the live console session.
//!
//! Responsibilities:
//! - validate upgrade requests (origin allow-list)
//! - spawn the per-connection console session
//! - keep WebSocket-specific concerns at the edge of the system

use actix_web::web::{self, Payload};
use actix_web::{
    HttpRequest, HttpResponse, get,
    http::header::{HeaderValue, ORIGIN},
};
use tracing::{error, warn};
use url::Url;

use crate::domain::TraceId;

mod session;

pub mod messages;
pub mod state;

/// Handle WebSocket upgrade for the `/ws` endpoint.
#[get("/ws")]
pub async fn ws_entry(
    state: web::Data<state::WsState>,
    req: HttpRequest,
    stream: Payload,
) -> actix_web::Result<HttpResponse> {
    let mut origin_iter = req.headers().get_all(ORIGIN);
    let origin_header = origin_iter.next().ok_or_else(|| {
        error!("Missing Origin header on WebSocket upgrade");
        actix_web::error::ErrorForbidden("Origin not allowed")
    })?;
    if origin_iter.next().is_some() {
        error!("Multiple Origin headers on WebSocket upgrade");
        return Err(actix_web::error::ErrorBadRequest("Invalid Origin header"));
    }

    validate_origin(origin_header, state.allowed_origin.as_ref())?;

    let (response, session, msg_stream) = actix_ws::handle(&req, stream).map_err(|error| {
        error!(error = %error, "WebSocket upgrade failed");
        actix_web::error::ErrorInternalServerError("WebSocket upgrade failed")
    })?;
    // Spawned tasks do not inherit task-locals; hand the upgrade's trace id
    // to the session so its store calls report the same id.
    let trace_id = TraceId::current().unwrap_or_else(TraceId::generate);
    actix_web::rt::spawn(session::handle_ws_session(
        state.ports.clone(),
        trace_id,
        session,
        msg_stream,
    ));
    Ok(response)
}

fn validate_origin(origin_header: &HeaderValue, allowed: Option<&Url>) -> actix_web::Result<()> {
    let origin_value = match origin_header.to_str() {
        Ok(value) => value,
        Err(error) => {
            error!(error = %error, "Failed to parse Origin header as string");
            return Err(actix_web::error::ErrorBadRequest("Invalid Origin header"));
        }
    };

    let origin = Url::parse(origin_value).map_err(|error| {
        error!(error = %error, "Failed to parse Origin header as URL");
        actix_web::error::ErrorBadRequest("Invalid Origin header")
    })?;

    if is_allowed_origin(&origin, allowed) {
        Ok(())
    } else {
        warn!(
            origin = origin_value,
            "Rejected WS upgrade due to disallowed Origin"
        );
        Err(actix_web::error::ErrorForbidden("Origin not allowed"))
    }
}

const LOCALHOST: &str = "localhost";

/// Returns true when a parsed Origin is acceptable.
///
/// HTTP requests from localhost with a non-zero explicit port are always
/// accepted so the console works during development. Anything else must match
/// the configured origin on scheme, host and effective port.
fn is_allowed_origin(origin: &Url, allowed: Option<&Url>) -> bool {
    let Some(host) = origin.host_str() else {
        return false;
    };

    if origin.scheme() == "http" && host == LOCALHOST {
        return matches!(origin.port(), Some(port) if port != 0);
    }

    allowed.is_some_and(|allowed| {
        allowed.scheme() == origin.scheme()
            && allowed.host_str() == Some(host)
            && allowed.port_or_known_default() == origin.port_or_known_default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header::HeaderValue};
    use rstest::{fixture, rstest};

    fn header(value: &str) -> HeaderValue {
        HeaderValue::from_str(value).expect("valid header value")
    }

    #[fixture]
    fn configured() -> Url {
        Url::parse("https://console.example.com").expect("valid url")
    }

    #[rstest]
    #[case("http://localhost:3000")]
    #[case("https://console.example.com")]
    #[case("https://console.example.com:443")]
    fn accepts_configured_origins(configured: Url, #[case] origin: &str) {
        let header = header(origin);
        assert!(validate_origin(&header, Some(&configured)).is_ok());
    }

    #[rstest]
    #[case("http://localhost")]
    #[case("https://example.com")]
    #[case("http://console.example.com")]
    #[case("https://console.example.com:8443")]
    fn rejects_disallowed_origins(configured: Url, #[case] origin: &str) {
        let header = header(origin);
        let error =
            validate_origin(&header, Some(&configured)).expect_err("origin should be rejected");
        assert_eq!(
            error.as_response_error().status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn rejects_non_utf8_origin_header() {
        let header = HeaderValue::from_bytes(&[0x80]).expect("opaque header value");
        let error = validate_origin(&header, None).expect_err("origin should be rejected");
        assert_eq!(
            error.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn rejects_unparsable_origin_header() {
        let header = HeaderValue::from_static("not a url");
        let error = validate_origin(&header, None).expect_err("origin should be rejected");
        assert_eq!(
            error.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[rstest]
    #[case("http://localhost:4000", true)]
    #[case("http://localhost:0", false)]
    #[case("http://localhost", false)]
    #[case("https://console.example.com", false)]
    fn only_localhost_without_configured_origin(#[case] origin: &str, #[case] expected: bool) {
        let parsed = Url::parse(origin).expect("url should parse");
        assert_eq!(is_allowed_origin(&parsed, None), expected);
    }
}
