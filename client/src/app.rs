//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the session store and toast queue once and provides them as
//! signals. Stored session state is loaded in an effect, after hydration.
//! Leptos routing is reduced to two catch-all routes; the matched path is
//! handed to [`crate::routes::resolve`], and the outlet below picks the page,
//! the chrome around it and any access gate.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toasts::ToastHost;
use crate::config::ClientConfig;
use crate::pages::activate::ActivatePage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::{DashboardHomePage, DashboardLayout, ProductsPage};
use crate::pages::fallbacks::{ComingSoonPage, NotFoundPage};
use crate::pages::forgot::ForgotPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::public::{AboutPage, HomePage, KnowledgeHubPage, SubscribePage, TrainingPage};
use crate::pages::register::RegisterPage;
use crate::pages::reset::ResetPage;
use crate::routes::{self, Page, ROUTES, ResolvedRoute};
use crate::state::session::{Session, SessionStore};
use crate::state::storage::BrowserStorage;
use crate::state::toast::ToastState;
use crate::util::access::RouteRequirement;
use crate::util::{auth, dark_mode};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cfg = ClientConfig::from_build_env();
    // Server and first client render both start logged out in the light
    // theme; stored state is applied once the page has hydrated.
    let mut store = SessionStore::deferred(BrowserStorage, cfg.persist_session);
    store.subscribe(|s: &Session| dark_mode::apply(s.dark_mode()));

    let session = RwSignal::new(store);
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);
    provide_context(cfg.clone());

    Effect::new(move || {
        session.update(SessionStore::restore);
        auth::restore_remote_session(&cfg, session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tenderhub.css"/>
        <Title text="Tender-Hub"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=RouteOutlet/>
                <Route path=WildcardSegment("any") view=RouteOutlet/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

/// Resolve the current path against the route table and render it.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let Some(route) = routes::resolve(ROUTES, &path) else {
            log::debug!("no route for {path}");
            return with_public_chrome(view! { <NotFoundPage/> }.into_any());
        };

        let dashboard = route.in_dashboard();
        let page = if route.is_protected() {
            let requirements: Vec<RouteRequirement> = route.requirements().copied().collect();
            view! {
                <ProtectedRoute requirements=requirements>
                    {render_route(&route)}
                </ProtectedRoute>
            }
            .into_any()
        } else {
            render_route(&route)
        };
        if dashboard { page } else { with_public_chrome(page) }
    }
}

fn with_public_chrome(page: AnyView) -> AnyView {
    view! {
        <div class="site">
            <Navbar/>
            <main class="site__content">{page}</main>
            <Footer/>
        </div>
    }
    .into_any()
}

/// The leaf page, wrapped in the dashboard layout when matched under it.
fn render_route(route: &ResolvedRoute) -> AnyView {
    let page = render_page(route.leaf(), route);
    if route.in_dashboard() {
        view! { <DashboardLayout>{page}</DashboardLayout> }.into_any()
    } else {
        page
    }
}

fn render_page(page: Page, route: &ResolvedRoute) -> AnyView {
    let token = || route.param("token").unwrap_or_default().to_owned();
    match page {
        Page::Home => view! { <HomePage/> }.into_any(),
        Page::About => view! { <AboutPage/> }.into_any(),
        Page::Contact => view! { <ContactPage/> }.into_any(),
        Page::Training => view! { <TrainingPage/> }.into_any(),
        Page::KnowledgeHub => view! { <KnowledgeHubPage/> }.into_any(),
        Page::Subscribe => view! { <SubscribePage/> }.into_any(),
        Page::ComingSoon => view! { <ComingSoonPage/> }.into_any(),
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::Register => view! { <RegisterPage/> }.into_any(),
        Page::Forgot => view! { <ForgotPage/> }.into_any(),
        Page::Activate => view! { <ActivatePage token=token()/> }.into_any(),
        Page::Reset => view! { <ResetPage token=token()/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
        Page::DashboardHome => view! { <DashboardHomePage/> }.into_any(),
        Page::Products => view! { <ProductsPage/> }.into_any(),
        Page::DashboardLayout | Page::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
