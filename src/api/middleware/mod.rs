//! Middleware components for request processing: request ID tracking,
//! request logging and JSON error normalization.

mod error_handler;
mod logging;
mod request_id;

pub use error_handler::{error_body, error_to_code, error_to_status_code, global_error_handler};
pub use logging::logging_middleware;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
