mod extract;
mod password;
mod token;

pub use extract::AuthUser;
pub use password::{hash_password, verify_password};
pub use token::{TokenError, TokenService};
