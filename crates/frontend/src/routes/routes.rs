use crate::dashboards::StatusSummaryDashboard;
use crate::domain::a001_transaction::ui::create::TransactionCreatePage;
use crate::domain::a001_transaction::ui::details::TransactionDetailsPage;
use crate::domain::a001_transaction::ui::edit::TransactionEditPage;
use crate::domain::a001_transaction::ui::list::TransactionList;
use crate::domain::a001_transaction::ui::tracking::TrackingPage;
use crate::domain::a002_service_price::ui::details::{
    ServicePriceCreatePage, ServicePriceDetailsPage,
};
use crate::domain::a002_service_price::ui::list::ServicePriceList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Admin page inside the shell, reachable only with a session
#[component]
fn AdminPage(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireAuth>
            {
                let children = children.clone();
                view! { <Shell>{children()}</Shell> }
            }
        </RequireAuth>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="page">"Page not found."</div> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/track") view=TrackingPage />
                <Route
                    path=path!("/")
                    view=|| view! { <AdminPage><StatusSummaryDashboard /></AdminPage> }
                />
                <Route
                    path=path!("/transactions")
                    view=|| view! { <AdminPage><TransactionList /></AdminPage> }
                />
                // Static segments first: the first matching route wins
                <Route
                    path=path!("/transactions/new")
                    view=|| view! { <AdminPage><TransactionCreatePage /></AdminPage> }
                />
                <Route
                    path=path!("/transactions/:id")
                    view=|| view! { <AdminPage><TransactionDetailsPage /></AdminPage> }
                />
                <Route
                    path=path!("/transactions/:id/edit")
                    view=|| view! { <AdminPage><TransactionEditPage /></AdminPage> }
                />
                <Route
                    path=path!("/service-prices")
                    view=|| view! { <AdminPage><ServicePriceList /></AdminPage> }
                />
                <Route
                    path=path!("/service-prices/new")
                    view=|| view! { <AdminPage><ServicePriceCreatePage /></AdminPage> }
                />
                <Route
                    path=path!("/service-prices/:id")
                    view=|| view! { <AdminPage><ServicePriceDetailsPage /></AdminPage> }
                />
            </Routes>
        </Router>
    }
}
