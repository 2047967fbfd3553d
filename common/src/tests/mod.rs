mod http_status;
mod pretty_json;
