//! HTTP transport for the Wit.ai `/converse` endpoint.
//!
//! Each round is a `POST {base_url}/converse` carrying the API version,
//! session id and (on the first round of a turn) the user's message as query
//! parameters, with the full context as the JSON body.

mod api;
mod client;
mod config;

pub use client::HttpTransport;
pub use config::{TransportConfig, BASE_URL_ENV, TOKEN_ENV, VERSION_ENV};
