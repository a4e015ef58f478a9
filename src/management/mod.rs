//! Local identity provider: registered accounts and login sessions.

mod accounts;
mod sessions;

pub use accounts::AccountManager;
pub use sessions::SessionManager;
