use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    // Same-origin anchors are intercepted by the router, so plain <a>
    // keeps client-side navigation.
    view! {
        <div class="home">
            <section class="home__hero">
                <h1 class="home__title">"Dash Pant Marketing — Portal de Dashboards"</h1>
                <p class="home__subtitle">
                    "Gestão de clientes com dashboards personalizados para Geração de Leads "
                    "e E-commerce. KPIs claros, gráficos e funis para decisões melhores."
                </p>
                <div class="home__actions">
                    <a href="/dashboard" class="button button--primary">
                        "Entrar no Dashboard"
                    </a>
                    <a href="/admin/clients" class="button button--secondary">
                        "Administração de Clientes"
                    </a>
                </div>
            </section>
        </div>
    }
}
