mod config;
mod discovery;
