//! Domain layer: message drafts, response model, and status codes (no I/O).

mod message;
mod response;
mod value;

pub use message::SmsMessage;
pub use response::{SendSmsResponse, SmsResult};
pub use value::{KnownStatusCode, Password, StatusCode, Username};
