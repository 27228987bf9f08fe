//! API request extractors and response envelopes

pub mod extract;
pub mod response;

pub use extract::AppJson;
pub use response::{ApiResponse, Created, DataResponse, NoContent};
