//! Main Leptos application component and routing.

use crate::navigation::{nav_links, provide_navigation, use_active_route};
use crate::pages::{LoginPage, NotFoundPage, ProfilePage};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use waypoint_navigation::RouteTable;

/// The main application component.
///
/// The route declarations below mirror [`RouteTable::standard`]; the tests
/// at the bottom of this file compare the two.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="waypoint"/>
        <Router>
            <AppShell/>
        </Router>
    }
}

/// Everything rendered inside the router context.
#[component]
fn AppShell() -> impl IntoView {
    provide_navigation(RouteTable::standard());

    view! {
        <Header/>
        <main class="container">
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LoginPage/>
                <Route path=path!("/profile") view=ProfilePage/>
            </Routes>
        </main>
    }
}

/// Header component with one link per declared route.
#[component]
fn Header() -> impl IntoView {
    let active = use_active_route();
    let links = nav_links(&RouteTable::standard());

    view! {
        <header class="header">
            <div class="header-left">
                <span class="logo">"waypoint"</span>
            </div>
            <nav class="header-right">
                {links
                    .into_iter()
                    .map(|link| {
                        let route = link.route;
                        let is_active = move || active.with(|current| current.id() == Some(route));
                        view! {
                            <a
                                href=link.href
                                class:active=is_active
                                aria-current=move || is_active().then_some("page")
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn declared_paths() -> Vec<String> {
        let mut paths: Vec<String> = leptos_axum::generate_route_list(App)
            .iter()
            .map(|listing| listing.path().to_string())
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn router_routes_match_route_table() {
        let mut expected: Vec<String> = RouteTable::standard()
            .bindings()
            .iter()
            .map(|binding| binding.pattern().to_string())
            .collect();
        expected.sort();

        assert_eq!(declared_paths(), expected);
    }

    #[test]
    fn router_declares_no_catch_all_route() {
        assert!(
            declared_paths()
                .iter()
                .all(|path| !path.contains('*') && !path.contains(':')),
            "unmatched paths must fall through to the not-found page"
        );
    }
}
