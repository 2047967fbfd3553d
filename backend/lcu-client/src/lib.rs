//! Client library for the League of Legends client (LCU) API.
//!
//! - [`discovery`]: find the running client and its credentials
//! - [`client`]: HTTP requests against the LCU REST API
//! - [`ws`]: event subscriptions over the LCU websocket
//! - [`connect`]: wait until a client is running and answering
//! - [`config`]: the `config.toml` shared with the CLI

pub mod client;
pub mod config;
pub mod connect;
pub mod discovery;
pub mod error;
pub mod ws;

#[cfg(test)]
mod tests;

pub use client::LcuClient;
pub use config::HasagiConfig;
pub use connect::{AttemptFailed, connect};
pub use ws::EventStream;

pub const LCU_PROCESS_NAME: &str = "LeagueClientUx";
pub const LCU_PROCESS_EXE_NAME: &str = const_format::concatcp!(LCU_PROCESS_NAME, ".exe");
pub const LOCKFILE_NAME: &str = "lockfile";
