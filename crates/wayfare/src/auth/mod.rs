//! Authentication: configured accounts, session tokens, and the
//! request-guarding middleware

pub mod middleware;
pub mod password;
pub mod session;

pub use middleware::{AuthUser, require_auth};
pub use session::{Session, SessionStore};
