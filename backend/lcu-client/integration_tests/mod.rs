mod client;
mod config;
mod connect;
mod discovery;
mod error;
mod helpers;
mod ws;
