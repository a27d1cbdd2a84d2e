mod auth;
pub use auth::Auth;
