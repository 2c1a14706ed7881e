pub mod cors;
pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
