pub mod config;
pub mod connect;
pub mod discovery;
pub mod lcu_client;
pub mod ws;
