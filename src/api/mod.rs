pub mod caller;
pub mod error;
pub mod handlers;
pub mod path;
pub mod router;
pub mod types;

pub use caller::{AuthenticatedCaller, MEMBER_ID_HEADER};
pub use error::ApiError;
pub use path::ApiPath;
pub use router::create_router;
pub use types::*;
