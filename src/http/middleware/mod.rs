mod recover;
mod trace;

pub use recover::handle_panic;
pub use trace::{request_span, REQUEST_ID_HEADER};
