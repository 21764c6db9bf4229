use crate::dashboards::d100_campaign_performance::ui::CampaignDashboard;
use crate::domain::a001_client::ui::AdminClientsPage;
use crate::layout::header::Header;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route
                        path=path!("/dashboard")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <CampaignDashboard />
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=path!("/admin/clients")
                        view=|| {
                            view! {
                                <RequireAuth>
                                    <AdminClientsPage />
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
