pub mod openid;
pub mod path;
pub mod token;

pub use openid::{Continuation, apply};
