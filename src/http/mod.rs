// HTTP helpers module
// MIME lookup and response builders, decoupled from request handling

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_file_response, build_forbidden_response, build_not_found_response};
