//! Login page component.

use leptos::prelude::*;

/// Login page, served at `/`.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-box">
                <h1>"Log in to waypoint"</h1>
                <p>"Sign in to continue to your profile."</p>
            </div>
        </div>
    }
}
