//! Error types for the navigation crate.
//!
//! Errors are designed for layered context using rootcause:
//! - `RouteTableError`: Route table construction failures
//! - `NavigationError`: Rejected navigation requests
//! - `ShellError`: Shell lifecycle misuse

use crate::route::RouteId;
use std::fmt;

/// Errors from building a route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    /// The table declares no bindings at all.
    EmptyTable,
    /// A pattern is not a literal absolute path.
    InvalidPattern { pattern: String, reason: String },
    /// Two bindings share the same pattern.
    DuplicatePath { pattern: String },
    /// The same route is bound to more than one pattern.
    DuplicateRoute { route: RouteId },
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTable => write!(f, "route table has no bindings"),
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid route pattern '{pattern}': {reason}")
            }
            Self::DuplicatePath { pattern } => {
                write!(f, "route pattern '{pattern}' is declared more than once")
            }
            Self::DuplicateRoute { route } => {
                write!(f, "route {route} is bound to more than one pattern")
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

/// Errors from navigation requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested path cannot be turned into a location.
    InvalidPath { path: String, reason: String },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPath { path, reason } => {
                write!(f, "invalid navigation path '{path}': {reason}")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Errors from the application shell lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// `mount` was called on a shell that is already mounted.
    AlreadyMounted,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyMounted => write!(f, "shell is already mounted"),
        }
    }
}

impl std::error::Error for ShellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_display() {
        let err = RouteTableError::InvalidPattern {
            pattern: "profile".to_string(),
            reason: "must start with '/'".to_string(),
        };
        assert!(err.to_string().contains("'profile'"));
        assert!(err.to_string().contains("must start with"));
    }

    #[test]
    fn duplicate_route_display() {
        let err = RouteTableError::DuplicateRoute {
            route: RouteId::Profile,
        };
        assert!(err.to_string().contains("profile"));
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn invalid_path_display() {
        let err = NavigationError::InvalidPath {
            path: "nowhere".to_string(),
            reason: "path must be absolute".to_string(),
        };
        assert!(err.to_string().contains("nowhere"));
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn already_mounted_display() {
        assert!(ShellError::AlreadyMounted.to_string().contains("mounted"));
    }
}
