//! Screens rendered in place of content the visitor may not see, plus the
//! not-found and coming-soon placeholders.

use leptos::prelude::*;

#[component]
fn StatusCard(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="status-page">
            <div class="status-card">
                <div class="status-card__icon" aria-hidden="true">{icon}</div>
                <h1 class="status-card__title">{title}</h1>
                <div class="status-card__body">{children()}</div>
            </div>
        </div>
    }
}

#[component]
pub fn NotLoggedInPage() -> impl IntoView {
    view! {
        <StatusCard icon="🔒" title="Not Logged In">
            <p>"You need to sign in to view this page."</p>
            <a href="/login" class="btn btn--primary">"Sign In"</a>
            <a href="/" class="btn btn--outline">"Home"</a>
        </StatusCard>
    }
}

#[component]
pub fn SuspendedPage() -> impl IntoView {
    view! {
        <StatusCard icon="⛔" title="Account Suspended">
            <p>"Your account has been suspended. Contact support if you believe this is a mistake."</p>
            <a href="/contact" class="btn btn--primary">"Contact Support"</a>
        </StatusCard>
    }
}

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <StatusCard icon="⚠" title="Access Denied">
            <p>"Your account does not have permission to view this page."</p>
            <pre class="status-card__terminal">"$ ssh access-denied\nPermission denied (publickey)."</pre>
            <a href="/" class="btn btn--primary">"Go Home"</a>
        </StatusCard>
    }
}

#[component]
pub fn NotActivatedPage() -> impl IntoView {
    view! {
        <StatusCard icon="✉" title="Account Not Activated">
            <p>"Check your inbox for the activation link we sent when you registered."</p>
            <a href="/contact" class="btn btn--outline">"Didn't get it? Contact us"</a>
        </StatusCard>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <StatusCard icon="404" title="Page Not Found">
            <p>"The page you're looking for doesn't exist or has moved."</p>
            <a href="/" class="btn btn--primary">"Back Home"</a>
        </StatusCard>
    }
}

#[component]
pub fn ComingSoonPage() -> impl IntoView {
    view! {
        <StatusCard icon="🚧" title="Coming Soon!">
            <p>"This feature is under construction. Check back shortly."</p>
            <a href="/" class="btn btn--outline">"Home"</a>
        </StatusCard>
    }
}
