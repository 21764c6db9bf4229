use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session state lives at the root so every page sees the same signal.
    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
