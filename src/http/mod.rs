//! HTTP protocol layer module
//!
//! Content-type detection and response builders, independent of path resolution.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use mime::content_type_for;
pub use response::{build_405_response, build_500_response, build_file_response};
