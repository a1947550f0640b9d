//! Page components for the application.
//!
//! Each page is a zero-argument Leptos component bound to one route.

pub mod login;
pub mod not_found;
pub mod profile;

pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
