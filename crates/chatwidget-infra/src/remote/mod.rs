pub mod http;

pub use http::HttpReplyBackend;
