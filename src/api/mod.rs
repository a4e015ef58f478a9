//! # API Module
//!
//! HTTP handlers of the Tunechart web front end. Every handler is an async
//! function plugged into the axum router in [`crate::server`].
//!
//! ## Endpoints
//!
//! ### Pages (login required)
//!
//! - [`index`] - Chart artists and the top 18 tracks in rows of six
//! - [`music`] - Detail page of a single track
//! - [`profile`] - Artist profile with ranked tracks
//! - [`search_form`] / [`search`] - Track search
//! - [`logout`] - Ends the session
//!
//! ### Accounts
//!
//! - [`login_form`] / [`login`] - Session login
//! - [`signup_form`] / [`signup`] - Account creation
//!
//! ### Monitoring
//!
//! - [`health`] - Status and version information
//!
//! ## Access Control
//!
//! Pages that need a user take a [`CurrentUser`] argument. Extracting it fails
//! with a redirect to `/login` when the request carries no live session, which
//! makes the extractor the `login_required` gate.

mod auth;
mod health;
mod pages;
mod session;
pub mod views;

pub use auth::{login, login_form, logout, signup, signup_form};
pub use health::health;
pub use pages::{index, music, profile, search, search_form};
pub use session::{CurrentUser, SESSION_COOKIE};
