//! Profile page component.

use leptos::prelude::*;

/// Profile page, served at `/profile`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
        </div>
    }
}
