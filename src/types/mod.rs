//! Shared response types.

mod response;

pub use response::{ContactReceipt, IdResponse, MessageResponse};
