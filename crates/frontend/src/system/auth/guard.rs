use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Wrapper for private routes. While the stored session is being restored
/// it shows a placeholder; once restoration settles, an unauthenticated
/// visitor is redirected to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().is_authenticated()
            fallback=move || {
                view! {
                    <Show
                        when=move || auth_state.get().restoring
                        fallback=|| view! { <Redirect path="/login" /> }
                    >
                        <div class="page__loading">"Carregando..."</div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
