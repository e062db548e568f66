//! Query-string resolution for card requests.
//!
//! Turns the raw `(key, value)` pairs of an incoming request into validated,
//! defaulted card parameters plus the filtered query forwarded upstream.
//! Invalid optional values are dropped silently and the default is kept; only
//! a missing `username` is an error.

use crate::card::{Card, DEFAULT_ROLE_X, DEFAULT_ROLE_Y};
use crate::error::{OverlayError, Result};

/// Keys consumed locally and never forwarded upstream.
pub const LOCAL_KEYS: [&str; 5] = ["svg_width", "svg_height", "role", "role_x", "role_y"];

/// Raw query pairs in arrival order; repeated keys are allowed.
pub type QueryPairs = Vec<(String, String)>;

/// Fully resolved parameters of one card request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParams {
    pub card: Card,
    /// Trimmed, non-empty username.
    pub username: String,
    pub width: i64,
    pub height: i64,
    /// Sanitized role name, safe to use as a file stem.
    pub role: Option<String>,
    pub role_x: i64,
    pub role_y: i64,
    /// Query forwarded to the upstream service, sorted by key.
    pub upstream_query: QueryPairs,
}

impl CardParams {
    /// Resolve parameters for `card` from the incoming query pairs.
    pub fn resolve(card: Card, query: &[(String, String)]) -> Result<Self> {
        let username = first(query, "username").map(str::trim).unwrap_or_default();
        if username.is_empty() {
            return Err(OverlayError::UsernameRequired);
        }

        let width = first(query, "svg_width")
            .and_then(parse_positive)
            .unwrap_or(card.default_width());
        let height = first(query, "svg_height")
            .and_then(parse_positive)
            .unwrap_or(card.default_height());

        let role = first(query, "role").and_then(sanitize_role).map(str::to_owned);

        let role_x = first(query, "role_x")
            .and_then(parse_int)
            .unwrap_or(DEFAULT_ROLE_X);
        let role_y = first(query, "role_y")
            .and_then(parse_int)
            .unwrap_or(DEFAULT_ROLE_Y);

        Ok(Self {
            card,
            upstream_query: upstream_query(card, query, username),
            username: username.to_owned(),
            width,
            height,
            role,
            role_x,
            role_y,
        })
    }
}

/// Accept a role only when it is a safe file stem (`[A-Za-z0-9_-]+`).
pub fn sanitize_role(raw: &str) -> Option<&str> {
    let ok = !raw.is_empty()
        && raw
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
    if ok {
        Some(raw)
    } else {
        tracing::debug!(role = %raw, "role rejected: not a safe file name");
        None
    }
}

/// Build the upstream query: drop local keys, force `username`, then fill
/// card-specific defaults that the caller left unset or empty.
fn upstream_query(card: Card, query: &[(String, String)], username: &str) -> QueryPairs {
    let mut out: QueryPairs = query
        .iter()
        .filter(|(k, _)| k != "username" && !LOCAL_KEYS.contains(&k.as_str()))
        .cloned()
        .collect();
    out.push(("username".to_owned(), username.to_owned()));

    for (key, value) in card.forced_defaults() {
        let unset = first(&out, key).map_or(true, str::is_empty);
        if unset {
            out.retain(|(k, _)| k != key);
            out.push(((*key).to_owned(), (*value).to_owned()));
        }
    }

    // Stable sort: values of a repeated key keep their arrival order.
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

fn first<'a>(query: &'a [(String, String)], key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_int(v: &str) -> Option<i64> {
    v.parse().ok()
}

fn parse_positive(v: &str) -> Option<i64> {
    parse_int(v).filter(|n| *n > 0)
}
