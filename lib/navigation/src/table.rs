//! Ordered table of literal path bindings.

use crate::error::RouteTableError;
use crate::location::Location;
use crate::route::{Route, RouteId};
use std::collections::HashSet;
use waypoint_core::Result;

/// A single `pattern -> route` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pattern: String,
    route: RouteId,
}

impl Binding {
    /// Returns the literal path pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the bound route.
    #[must_use]
    pub fn route(&self) -> RouteId {
        self.route
    }
}

/// Static route table, built once at startup.
///
/// Patterns are literal, unique and matched exactly against the location
/// path. The first matching binding wins; anything else resolves to
/// [`Route::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    bindings: Vec<Binding>,
}

impl RouteTable {
    /// Builds a table from `(pattern, route)` pairs, in order.
    ///
    /// # Errors
    ///
    /// Returns a `RouteTableError` if the table is empty, a pattern is not a
    /// literal absolute path, or a pattern or route appears twice.
    pub fn new<I, P>(bindings: I) -> Result<Self, RouteTableError>
    where
        I: IntoIterator<Item = (P, RouteId)>,
        P: Into<String>,
    {
        let mut patterns = HashSet::new();
        let mut routes = HashSet::new();
        let mut table = Vec::new();

        for (pattern, route) in bindings {
            let pattern = pattern.into();
            validate_pattern(&pattern)?;
            if !patterns.insert(pattern.clone()) {
                return Err(RouteTableError::DuplicatePath { pattern }.into());
            }
            if !routes.insert(route) {
                return Err(RouteTableError::DuplicateRoute { route }.into());
            }
            table.push(Binding { pattern, route });
        }

        if table.is_empty() {
            return Err(RouteTableError::EmptyTable.into());
        }

        Ok(Self { bindings: table })
    }

    /// The application's route table: `/` shows login, `/profile` shows the
    /// profile.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bindings: RouteId::ALL
                .into_iter()
                .map(|route| Binding {
                    pattern: route.path().to_string(),
                    route,
                })
                .collect(),
        }
    }

    /// Resolves `location` to a route.
    #[must_use]
    pub fn resolve(&self, location: &Location) -> Route {
        let path = location.path();
        self.bindings
            .iter()
            .find(|binding| binding.pattern == path)
            .map_or_else(
                || Route::NotFound {
                    path: path.to_string(),
                },
                |binding| Route::from(binding.route),
            )
    }

    /// Returns the pattern bound to `route`, if any.
    #[must_use]
    pub fn path_for(&self, route: RouteId) -> Option<&str> {
        self.bindings
            .iter()
            .find(|binding| binding.route == route)
            .map(Binding::pattern)
    }

    /// Returns the bindings in declaration order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_pattern(pattern: &str) -> Result<(), RouteTableError> {
    let reason = if !pattern.starts_with('/') {
        Some("must start with '/'")
    } else if pattern.contains("//") {
        Some("must not contain empty segments")
    } else if pattern.contains(['?', '#']) {
        Some("must not contain a query or fragment")
    } else if pattern.contains([':', '*']) {
        Some("dynamic segments are not supported")
    } else if pattern.chars().any(|c| c.is_whitespace() || c.is_control()) {
        Some("must not contain whitespace or control characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RouteTableError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(table: &RouteTable, path: &str) -> Route {
        table.resolve(&Location::parse(path).expect("valid path"))
    }

    #[test]
    fn standard_table_binds_login_and_profile() {
        let table = RouteTable::standard();
        assert_eq!(table.bindings().len(), 2);
        assert_eq!(resolve(&table, "/"), Route::Login);
        assert_eq!(resolve(&table, "/profile"), Route::Profile);
    }

    #[test]
    fn standard_table_passes_validation() {
        let validated = RouteTable::new(RouteId::ALL.map(|id| (id.path(), id)))
            .expect("standard bindings are valid");
        assert_eq!(validated, RouteTable::standard());
    }

    #[test]
    fn unmatched_path_is_not_found() {
        let table = RouteTable::standard();
        assert_eq!(
            resolve(&table, "/unknown"),
            Route::NotFound {
                path: "/unknown".to_string()
            }
        );
    }

    #[test]
    fn matching_is_exact() {
        let table = RouteTable::standard();
        assert!(resolve(&table, "/profile/").is_not_found());
        assert!(resolve(&table, "/profile/edit").is_not_found());
        assert!(resolve(&table, "/Profile").is_not_found());
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let table = RouteTable::standard();
        assert_eq!(resolve(&table, "/profile?tab=bio#top"), Route::Profile);
        assert_eq!(resolve(&table, "?next=/profile"), Route::Login);
    }

    #[test]
    fn path_for_returns_bound_pattern() {
        let table = RouteTable::new([("/me", RouteId::Profile)]).expect("valid");
        assert_eq!(table.path_for(RouteId::Profile), Some("/me"));
        assert_eq!(table.path_for(RouteId::Login), None);
        assert!(resolve(&table, "/").is_not_found());
    }

    #[test]
    fn rejects_empty_table() {
        let err = RouteTable::new(Vec::<(String, RouteId)>::new()).expect_err("empty");
        assert_eq!(*err.current_context(), RouteTableError::EmptyTable);
    }

    #[test]
    fn rejects_duplicate_pattern() {
        let err = RouteTable::new([("/", RouteId::Login), ("/", RouteId::Profile)])
            .expect_err("duplicate");
        assert_eq!(
            *err.current_context(),
            RouteTableError::DuplicatePath {
                pattern: "/".to_string()
            }
        );
    }

    #[test]
    fn rejects_duplicate_route() {
        let err = RouteTable::new([("/", RouteId::Login), ("/login", RouteId::Login)])
            .expect_err("duplicate");
        assert_eq!(
            *err.current_context(),
            RouteTableError::DuplicateRoute {
                route: RouteId::Login
            }
        );
    }

    #[test]
    fn rejects_non_literal_patterns() {
        for pattern in ["profile", "//profile", "/profile?x", "/users/:id", "/*any", "/a b"] {
            let err = RouteTable::new([(pattern, RouteId::Profile)]).expect_err(pattern);
            assert!(
                matches!(
                    err.current_context(),
                    RouteTableError::InvalidPattern { .. }
                ),
                "{pattern} should be rejected"
            );
        }
    }
}
