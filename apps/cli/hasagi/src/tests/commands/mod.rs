mod credentials;
mod listen;
mod request;
mod schema;
