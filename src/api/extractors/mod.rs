//! Request extractors shared by handlers.
//!
//! - [`validated`] - deserialization plus `validator` rules, failing with a
//!   single flattened `400` message
//! - [`current_user`] - identity placed on the request by an authentication layer

pub mod current_user;
pub mod validated;

pub use current_user::{CurrentUser, UserPayload};
pub use validated::{ValidatedJson, ValidatedQuery};
