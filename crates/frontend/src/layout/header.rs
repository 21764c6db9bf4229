use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::system::auth::context::{do_logout, use_auth};

#[component]
fn NavLink(to: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == to;

    view! {
        <a
            href=to
            class="header__link"
            class:header__link--active=is_active
        >
            {label}
        </a>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let on_logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
        });
    };

    let user_email = move || {
        auth_state
            .get()
            .user
            .and_then(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <header class="header">
            <nav class="header__nav">
                <a href="/" class="header__brand">
                    "Dash Pant Marketing"
                </a>
                <div class="header__links">
                    <NavLink to="/dashboard" label="Dashboard" />
                    <NavLink to="/admin/clients" label="Clientes" />
                    <Show
                        when=move || auth_state.get().is_authenticated()
                        fallback=|| {
                            view! {
                                <a href="/login" class="button button--primary button--small">
                                    "Entrar"
                                </a>
                            }
                        }
                    >
                        <span class="header__user">{user_email}</span>
                        <button class="button button--ghost button--small" on:click=on_logout>
                            "Sair"
                        </button>
                    </Show>
                </div>
            </nav>
        </header>
    }
}
