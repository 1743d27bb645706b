pub mod raw_api;
pub mod raw_errors;
