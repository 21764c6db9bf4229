use contracts::domain::a001_client::{BusinessType, Client, CreateClientRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{business_type_label, business_type_options};
use crate::domain::a001_client::api;
use crate::shared::components::ui::{Input, Select};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

/// Admin screen: creates client accounts (auth identity + linked client
/// record) and lists the existing ones.
#[component]
pub fn AdminClientsPage() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (business_type, set_business_type) =
        create_signal(BusinessType::LeadGen.as_str().to_string());

    let (error_message, set_error_message) = create_signal(Option::<String>::None);
    let (success_message, set_success_message) = create_signal(Option::<String>::None);
    let (is_saving, set_is_saving) = create_signal(false);

    let (clients, set_clients) = create_signal(Vec::<Client>::new());

    let load_clients = move || {
        spawn_local(async move {
            match api::fetch_clients().await {
                Ok(list) => set_clients.set(list),
                Err(e) => log::error!("Failed to load clients: {}", e),
            }
        });
    };

    // Initial list load
    Effect::new(move |_| load_clients());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = CreateClientRequest {
            name: name.get(),
            email: email.get(),
            password: password.get(),
            business_type: BusinessType::parse(&business_type.get())
                .unwrap_or(BusinessType::LeadGen),
        };

        set_is_saving.set(true);
        set_error_message.set(None);
        set_success_message.set(None);

        spawn_local(async move {
            match api::create_client_account(request).await {
                Ok(client) => {
                    set_success_message
                        .set(Some(format!("Cliente \"{}\" criado com sucesso!", client.name)));
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_password.set(String::new());
                    set_is_saving.set(false);
                    load_clients();
                }
                Err(e) => {
                    // Partial failures name the orphaned identity; show the
                    // message as-is so the operator can follow up.
                    set_error_message.set(Some(e.to_string()));
                    set_is_saving.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a001_client--admin" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2 class="page__title">"Administração de Clientes"</h2>
            </div>

            <div class="admin-clients">
                <div class="card">
                    <h3 class="card__title">"Criar Novo Cliente"</h3>

                    <Show when=move || error_message.get().is_some()>
                        <div class="alert alert--error">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <Show when=move || success_message.get().is_some()>
                        <div class="alert alert--success">
                            {move || success_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <Input
                            label="Nome do Cliente"
                            id="client-name"
                            value=name
                            on_input=Callback::new(move |v| set_name.set(v))
                            required=true
                        />
                        <Input
                            label="Email"
                            id="client-email"
                            input_type="email"
                            value=email
                            on_input=Callback::new(move |v| set_email.set(v))
                            required=true
                        />
                        <Input
                            label="Senha Temporária"
                            id="client-password"
                            input_type="password"
                            value=password
                            on_input=Callback::new(move |v| set_password.set(v))
                            required=true
                        />
                        <Select
                            label="Tipo de Negócio"
                            id="client-business-type"
                            value=business_type
                            on_change=Callback::new(move |v| set_business_type.set(v))
                            options=Signal::derive(business_type_options)
                        />

                        <button
                            type="submit"
                            class="button button--primary"
                            disabled=move || is_saving.get()
                        >
                            {move || if is_saving.get() { "Criando..." } else { "Criar Cliente" }}
                        </button>
                    </form>
                </div>

                <div class="card">
                    <h3 class="card__title">"Clientes Cadastrados"</h3>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Nome"</th>
                                <th>"Email"</th>
                                <th>"Tipo de Negócio"</th>
                                <th>"Criado em"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                clients.get().into_iter().map(|client| {
                                    let created = client
                                        .created_at
                                        .map(|d| d.format("%d/%m/%Y").to_string())
                                        .unwrap_or_else(|| "—".to_string());
                                    view! {
                                        <tr>
                                            <td>{client.name}</td>
                                            <td>{client.email}</td>
                                            <td>{business_type_label(client.business_type)}</td>
                                            <td>{created}</td>
                                        </tr>
                                    }
                                }).collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
