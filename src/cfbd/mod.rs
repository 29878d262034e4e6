//! CollegeFootballData API access: endpoint table and HTTP client.

pub mod endpoints;
pub mod http;
