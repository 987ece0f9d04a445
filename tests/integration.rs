//! Integration tests against local HTTP servers.
//!
//! These drive the real blocking reqwest transport; no iiko server is needed.
//!
//!   cargo test --test integration

#[path = "integration/common.rs"]
mod common;
#[path = "integration/server.rs"]
mod server;
#[path = "integration/cloud.rs"]
mod cloud;
#[path = "integration/transport.rs"]
mod transport;
