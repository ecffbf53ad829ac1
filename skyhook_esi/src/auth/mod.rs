mod source;
mod types;

pub use source::{AccessTokenSource, Clock, StaticAccessToken, StoredAccessToken, SystemClock};
pub use types::StoredToken;
