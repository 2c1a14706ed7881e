pub mod handlers;
pub mod http;
pub mod requests;
pub mod responses;
