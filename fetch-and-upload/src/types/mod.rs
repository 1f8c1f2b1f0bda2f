mod environment;
mod error;
mod request;
mod response;

pub use environment::{Environment, DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_MAX_IMAGE_BYTES};
pub use error::{ApiErrorResponse, AppError};
pub use request::{FetchImageRequest, InvalidRequest};
pub use response::json_response;
