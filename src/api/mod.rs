pub mod client;
pub mod error;
pub mod traits;
pub mod types;

pub use client::InserateClient;
pub use error::{ApiError, USER_FACING_ERROR};
pub use traits::SearchApi;
pub use types::{ParamField, SearchParams};
