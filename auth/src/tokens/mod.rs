pub mod errors;
pub mod identity;
pub mod issuer;

pub use errors::TokenError;
pub use identity::Identity;
pub use issuer::TokenIssuer;
pub use issuer::TokenPair;
pub use issuer::TokenSettings;
