mod credentials;
mod request_result;
