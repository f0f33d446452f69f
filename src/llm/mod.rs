mod client;
mod message;
mod request;
mod response;

pub use client::*;
pub use message::*;
pub use request::*;
pub use response::*;
