//! Renderable views and the exhaustive route-to-view binding.

use crate::location::Location;
use crate::route::Route;
use std::fmt;
use std::sync::Arc;

/// A self-contained renderable unit.
///
/// Views take no arguments beyond the location being displayed and must not
/// carry state from one render to the next.
pub trait View: Send + Sync {
    /// Stable name used in logs and rendered output.
    fn name(&self) -> &'static str;

    /// Renders the view's markup for `location`.
    fn render(&self, location: &Location) -> String;
}

/// Output of a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    view: &'static str,
    route: Route,
    markup: String,
}

impl Rendered {
    /// Renders `view` for `route` at `location`.
    pub fn new(view: &dyn View, route: Route, location: &Location) -> Self {
        Self {
            view: view.name(),
            route,
            markup: view.render(location),
        }
    }

    /// Name of the view that produced this output.
    #[must_use]
    pub fn view(&self) -> &'static str {
        self.view
    }

    /// The route that was resolved.
    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// The rendered markup.
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// Placeholder login view.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginView;

impl View for LoginView {
    fn name(&self) -> &'static str {
        "login"
    }

    fn render(&self, _location: &Location) -> String {
        r#"<div class="login-page"><h1>Log in</h1></div>"#.to_string()
    }
}

/// Placeholder profile view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileView;

impl View for ProfileView {
    fn name(&self) -> &'static str {
        "profile"
    }

    fn render(&self, _location: &Location) -> String {
        r#"<div class="profile-page"><h1>Profile</h1></div>"#.to_string()
    }
}

/// Shown when no binding matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotFoundView;

impl View for NotFoundView {
    fn name(&self) -> &'static str {
        "not_found"
    }

    fn render(&self, location: &Location) -> String {
        format!(
            r#"<div class="not-found-page"><h1>Page not found</h1><p>{}</p></div>"#,
            html_escape::encode_quoted_attribute(location.path())
        )
    }
}

/// One view per [`Route`] variant.
#[derive(Clone)]
pub struct ViewSet {
    login: Arc<dyn View>,
    profile: Arc<dyn View>,
    not_found: Arc<dyn View>,
}

impl ViewSet {
    #[must_use]
    pub fn new(login: Arc<dyn View>, profile: Arc<dyn View>, not_found: Arc<dyn View>) -> Self {
        Self {
            login,
            profile,
            not_found,
        }
    }

    /// Returns the view bound to `route`.
    #[must_use]
    pub fn view_for(&self, route: &Route) -> &dyn View {
        match route {
            Route::Login => self.login.as_ref(),
            Route::Profile => self.profile.as_ref(),
            Route::NotFound { .. } => self.not_found.as_ref(),
        }
    }
}

impl Default for ViewSet {
    fn default() -> Self {
        Self::new(Arc::new(LoginView), Arc::new(ProfileView), Arc::new(NotFoundView))
    }
}

impl fmt::Debug for ViewSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSet")
            .field("login", &self.login.name())
            .field("profile", &self.profile.name())
            .field("not_found", &self.not_found.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_views_cover_every_route() {
        let views = ViewSet::default();
        assert_eq!(views.view_for(&Route::Login).name(), "login");
        assert_eq!(views.view_for(&Route::Profile).name(), "profile");
        let missing = Route::NotFound {
            path: "/x".to_string(),
        };
        assert_eq!(views.view_for(&missing).name(), "not_found");
    }

    #[test]
    fn not_found_view_shows_requested_path() {
        let location = Location::parse("/unknown").expect("valid");
        let rendered = Rendered::new(
            &NotFoundView,
            Route::NotFound {
                path: "/unknown".to_string(),
            },
            &location,
        );
        assert_eq!(rendered.view(), "not_found");
        assert!(rendered.markup().contains("/unknown"));
    }

    #[test]
    fn not_found_view_escapes_path() {
        let location = Location::parse("/<script>").expect("valid");
        let markup = NotFoundView.render(&location);
        assert!(markup.contains("/&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn not_found_view_escapes_quotes() {
        let location = Location::parse("/it's\"here\"").expect("valid");
        let markup = NotFoundView.render(&location);
        assert!(!markup.contains("it's"), "single quote left unescaped");
        assert!(!markup.contains("\"here\""), "double quote left unescaped");
        assert!(markup.contains("/it"));
    }
}
