//! Navigation model for the waypoint application shell.
//!
//! This crate provides:
//! - The closed set of routes (`Route`, `RouteId`)
//! - A validated, literal route table (`RouteTable`)
//! - An explicit current location with history and subscriptions
//!   (`CurrentLocation`, `Location`)
//! - The renderable view capability (`View`, `ViewSet`)
//! - The root application shell (`Shell`)
//!
//! `Shell` and the placeholder views are the headless reference model of the
//! application's navigation: they run without a browser and pin down which
//! view each location renders. The Leptos front end in `waypoint-web`
//! renders its own page components but resolves routes through the same
//! `RouteTable` and `CurrentLocation`.
//!
//! # Example
//!
//! ```
//! use waypoint_navigation::{CurrentLocation, Route, Shell};
//!
//! let location = CurrentLocation::default();
//! let mut shell = Shell::standard(location.clone());
//!
//! let rendered = shell.mount().expect("fresh shell mounts");
//! assert_eq!(rendered.route(), &Route::Login);
//!
//! location.navigate_to("/profile").expect("valid path");
//! assert_eq!(shell.rendered().unwrap().route(), &Route::Profile);
//!
//! location.navigate_to("/unknown").expect("valid path");
//! assert!(shell.rendered().unwrap().route().is_not_found());
//! ```

pub mod error;
pub mod location;
pub mod route;
pub mod shell;
pub mod table;
pub mod view;

// Re-export main types at crate root
pub use error::{NavigationError, RouteTableError, ShellError};
pub use location::{CurrentLocation, Location, SubscriptionId};
pub use route::{Route, RouteId};
pub use shell::Shell;
pub use table::{Binding, RouteTable};
pub use view::{LoginView, NotFoundView, ProfileView, Rendered, View, ViewSet};
