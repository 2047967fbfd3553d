mod cli;
mod credentials;
mod helpers;
mod listen;
mod request;
mod schema;
