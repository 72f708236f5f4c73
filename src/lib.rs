pub mod encode;
pub mod error;
pub mod sha256;

pub use encode::{Encoding, Options};
pub use error::{Error, Result};
pub use sha256::{digest, digest_str, Digest};
