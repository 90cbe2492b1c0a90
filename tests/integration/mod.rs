//! Integration tests with mock HTTP server

pub mod error_handling;
pub mod messages;
pub mod mock_server;
