//! Resolution of the normalized request fields.
//!
//! Each resolver lists its candidate sources in precedence order and ends in a
//! literal default; see [`first_truthy`].

use crate::config::EchoConfig;
use crate::event::{InvocationContext, InvocationEvent};
use crate::fallback::first_truthy;

/// Placeholder for values no source could provide.
pub const UNKNOWN: &str = "unknown";
pub const DEFAULT_PATH: &str = "/";
pub const DEFAULT_METHOD: &str = "GET";

/// Header carrying the proxy chain, client first.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Configured region, then the 4th colon-delimited ARN segment.
pub fn resolve_region<'a>(config: &'a EchoConfig, context: &'a InvocationContext) -> &'a str {
    let from_arn = context
        .invoked_function_arn
        .as_deref()
        .and_then(|arn| arn.split(':').nth(3));

    first_truthy([config.region.as_deref(), from_arn], UNKNOWN)
}

/// `rawPath`, then the legacy `path`.
pub fn resolve_path(event: &InvocationEvent) -> &str {
    first_truthy([event.raw_path.as_deref(), event.path.as_deref()], DEFAULT_PATH)
}

/// `requestContext.http.method`, then the legacy `httpMethod`.
pub fn resolve_method(event: &InvocationEvent) -> &str {
    let http_method = event.http().and_then(|http| http.method.as_deref());
    first_truthy([http_method, event.http_method.as_deref()], DEFAULT_METHOD)
}

/// First `x-forwarded-for` hop, then the source IP the front door recorded.
pub fn resolve_client_ip(event: &InvocationEvent) -> &str {
    let forwarded = event
        .header(X_FORWARDED_FOR)
        .and_then(|chain| chain.split(',').next())
        .map(str::trim);
    let http_source = event.http().and_then(|http| http.source_ip.as_deref());
    let identity_source = event.identity().and_then(|id| id.source_ip.as_deref());

    first_truthy([forwarded, http_source, identity_source], UNKNOWN)
}
