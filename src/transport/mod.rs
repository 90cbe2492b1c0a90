//! HTTP transport: the only place the crate touches the network.

mod http;

pub use http::{HttpRequest, HttpResponse, HttpSender, ReqwestSender, TransportError};
