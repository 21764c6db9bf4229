use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::AuthState;
use crate::system::auth::{api, context::use_auth, storage};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error_message, set_error_message) = create_signal(Option::<String>::None);
    let (is_loading, set_is_loading) = create_signal(false);

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let navigate = navigate.clone();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::sign_in(email_val, password_val).await {
                Ok(session) => {
                    storage::save_access_token(&session.access_token);
                    storage::save_refresh_token(&session.refresh_token);

                    set_auth_state.set(AuthState::signed_in(session.access_token, session.user));
                    set_is_loading.set(false);

                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Falha no login: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Dash Pant Marketing"</h1>
                <h2>"Acesse seu dashboard"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="voce@empresa.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
