//! The closed set of routes the application can display.
//!
//! Resolution always lands on a `Route`: either one of the declared views or
//! an explicit `NotFound` carrying the path that failed to match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a declarable route, i.e. one that can appear in a route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteId {
    /// The login view, served at `/`.
    Login,
    /// The profile view, served at `/profile`.
    Profile,
}

impl RouteId {
    /// Every declarable route, in table order.
    pub const ALL: [RouteId; 2] = [RouteId::Login, RouteId::Profile];

    /// Returns the canonical literal path for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Profile => "/profile",
        }
    }

    /// Returns the string representation used in logs and serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of resolving a location against a route table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Login,
    Profile,
    /// No binding matched `path`.
    NotFound { path: String },
}

impl Route {
    /// Returns the declared route id, or `None` for `NotFound`.
    #[must_use]
    pub fn id(&self) -> Option<RouteId> {
        match self {
            Self::Login => Some(RouteId::Login),
            Self::Profile => Some(RouteId::Profile),
            Self::NotFound { .. } => None,
        }
    }

    /// Returns the canonical path for declared routes, or the unmatched path.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Login => RouteId::Login.path(),
            Self::Profile => RouteId::Profile.path(),
            Self::NotFound { path } => path,
        }
    }

    /// Returns true if no binding matched.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<RouteId> for Route {
    fn from(id: RouteId) -> Self {
        match id {
            RouteId::Login => Self::Login,
            RouteId::Profile => Self::Profile,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Profile => write!(f, "profile"),
            Self::NotFound { path } => write!(f, "not_found({path})"),
        }
    }
}
