//! Client for the Messages API.
//!
//! Keep the public surface small and predictable. Implementation details are
//! split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod messages;

pub use builder::ClientBuilder;
pub use core::Client;
pub use messages::Messages;
