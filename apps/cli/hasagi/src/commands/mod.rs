pub mod credentials;
pub mod listen;
pub mod request;
pub mod schema;
