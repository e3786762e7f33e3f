pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use codec::ClaimsCodec;
pub use errors::JwtError;
