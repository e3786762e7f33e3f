pub mod movie;
pub mod session;
pub mod user;
