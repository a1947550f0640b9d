//! Bridge between the router's location and the shared [`CurrentLocation`].
//!
//! `leptos_router` owns browser history. Each router navigation is mirrored
//! into a `CurrentLocation` provided as context, and the resolved [`Route`]
//! is published as a signal so components can react to it without parsing
//! paths themselves.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use waypoint_navigation::{CurrentLocation, Route, RouteId, RouteTable};

/// The route currently displayed.
#[derive(Clone, Copy)]
pub struct ActiveRoute(pub ReadSignal<Route>);

/// A header navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub route: RouteId,
    pub href: String,
    pub label: &'static str,
}

/// Returns header links for every route bound in `table`, in table order.
#[must_use]
pub fn nav_links(table: &RouteTable) -> Vec<NavLink> {
    table
        .bindings()
        .iter()
        .map(|binding| NavLink {
            route: binding.route(),
            href: binding.pattern().to_string(),
            label: label(binding.route()),
        })
        .collect()
}

fn label(route: RouteId) -> &'static str {
    match route {
        RouteId::Login => "Log in",
        RouteId::Profile => "Profile",
    }
}

/// Seeds a `CurrentLocation` from the router's pathname.
///
/// A path that fails to parse is logged and replaced by `/`.
fn initial_location(path: &str) -> CurrentLocation {
    match CurrentLocation::from_path(path) {
        Ok(location) => location,
        Err(report) => {
            leptos::logging::warn!("router path {path:?} rejected, starting at /: {report}");
            CurrentLocation::default()
        }
    }
}

/// Creates the `CurrentLocation` for this render, keeps it in step with the
/// router and provides the resolved [`ActiveRoute`] as context.
///
/// Must be called from a component rendered inside `<Router>`.
pub fn provide_navigation(table: RouteTable) {
    let pathname = use_location().pathname;
    let location = initial_location(&pathname.get_untracked());
    let (active, set_active) = signal(location.route(&table));

    let subscription = location.subscribe(move |current| {
        _ = set_active.try_set(table.resolve(current));
    });
    on_cleanup({
        let location = location.clone();
        move || {
            location.unsubscribe(subscription);
        }
    });

    // Browser history stays authoritative, so router changes replace the
    // current entry instead of growing a second history.
    Effect::new({
        let location = location.clone();
        move |_| {
            let path = pathname.get();
            if location.current().path() != path {
                if let Err(report) = location.replace(&path) {
                    leptos::logging::warn!("ignoring router location: {report}");
                }
            }
        }
    });

    provide_context(ActiveRoute(active));
}

/// Returns the [`ActiveRoute`] provided by [`provide_navigation`].
///
/// # Panics
///
/// Panics if called outside the component tree set up by `provide_navigation`.
#[must_use]
pub fn use_active_route() -> ReadSignal<Route> {
    expect_context::<ActiveRoute>().0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_follow_route_table() {
        let links = nav_links(&RouteTable::standard());
        assert_eq!(
            links,
            vec![
                NavLink {
                    route: RouteId::Login,
                    href: "/".to_string(),
                    label: "Log in",
                },
                NavLink {
                    route: RouteId::Profile,
                    href: "/profile".to_string(),
                    label: "Profile",
                },
            ]
        );
    }

    #[test]
    fn active_route_is_read_from_context() {
        let owner = Owner::new();
        owner.with(|| {
            let (active, set_active) = signal(Route::Login);
            provide_context(ActiveRoute(active));
            set_active.set(Route::Profile);
            assert_eq!(use_active_route().get_untracked(), Route::Profile);
        });
    }

    #[test]
    fn initial_location_keeps_valid_path() {
        let location = initial_location("/profile");
        assert_eq!(location.route(&RouteTable::standard()), Route::Profile);
    }

    #[test]
    fn initial_location_falls_back_to_root() {
        let location = initial_location("/bad path");
        assert_eq!(location.current().path(), "/");
        assert_eq!(location.history_len(), 1);
    }

    #[test]
    fn nav_links_use_custom_patterns() {
        let table = RouteTable::new([("/me", RouteId::Profile)]).expect("valid");
        let links = nav_links(&table);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "/me");
    }
}
