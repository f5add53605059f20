use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::public_site::home::HomePage;
use crate::public_site::quotation::PublicQuotationPage;
use crate::shared::toast::Toaster;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Top-level routing by pathname. The marketing homepage and the customer
/// quotation page are public; everything under /app is the auth-gated
/// back-office shell. Plain pathname matching, no Router components.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize ?active= tab sync. This runs once when the component is created.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
fn BackOffice() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let path = current_path();

    let content = if path == "/" || path.is_empty() {
        view! { <HomePage /> }.into_any()
    } else if let Some(id) = path.strip_prefix("/quote/") {
        let quotation_id = id.trim_end_matches('/').to_string();
        view! { <PublicQuotationPage quotation_id=quotation_id /> }.into_any()
    } else {
        // "/app" and anything else lands in the back office.
        view! {
            <AuthProvider>
                <BackOffice />
            </AuthProvider>
        }
        .into_any()
    };

    view! {
        {content}
        <Toaster />
    }
}
