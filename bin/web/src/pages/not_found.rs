//! Fallback page for paths with no route.

use crate::navigation::use_active_route;
use leptos::prelude::*;
use waypoint_navigation::RouteId;

/// Rendered for every path that no route matches.
///
/// During server rendering the response status is set to 404.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    let active = use_active_route();
    let path = move || active.with(|route| route.path().to_string());

    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <a href=RouteId::Login.path()>"Back to login"</a>
        </div>
    }
}
