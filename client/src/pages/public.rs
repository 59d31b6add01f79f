//! Static marketing pages.

use leptos::prelude::*;

#[component]
fn Hero(title: &'static str, lead: &'static str) -> impl IntoView {
    view! {
        <header class="hero">
            <h1 class="hero__title">{title}</h1>
            <p class="hero__lead">{lead}</p>
        </header>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let features = [
        ("Live tender listings", "Browse open public and private tenders in one place."),
        ("Bid alerts", "Get notified when a tender in your industry is published."),
        ("Supplier profiles", "Keep your company documents ready for every submission."),
        ("Procurement insight", "Track awards and pricing trends across sectors."),
    ];
    view! {
        <section class="page home">
            <Hero
                title="Find and win tenders faster"
                lead="Tender-Hub connects bidders with tender advertisers across Kenya."
            />
            <div class="hero__actions">
                <a href="/register" class="btn btn--primary btn--lg">"Get Started"</a>
                <a href="/about" class="btn btn--outline btn--lg">"Learn More"</a>
            </div>
            <div class="feature-grid">
                {features
                    .into_iter()
                    .map(|(title, body)| view! {
                        <article class="feature-card">
                            <h3>{title}</h3>
                            <p>{body}</p>
                        </article>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page about">
            <Hero
                title="About Tender-Hub"
                lead="We make public procurement simpler, more transparent and easier to access."
            />
            <p>
                "Suppliers of every size deserve a fair shot at government and private contracts. "
                "Tender-Hub gathers opportunities, documents and deadlines so you can focus on the bid."
            </p>
        </section>
    }
}

#[component]
pub fn TrainingPage() -> impl IntoView {
    let modules = [
        "Understanding the procurement cycle",
        "Preparing compliant bid documents",
        "Pricing and evaluation criteria",
        "Appeals and contract management",
    ];
    view! {
        <section class="page training">
            <Hero title="Tender Training" lead="Practical courses for first-time and seasoned bidders."/>
            <ol class="training__modules">
                {modules.into_iter().map(|m| view! { <li>{m}</li> }).collect::<Vec<_>>()}
            </ol>
            <a href="/commingsoon" class="btn btn--primary">"Enroll"</a>
        </section>
    }
}

#[component]
pub fn KnowledgeHubPage() -> impl IntoView {
    view! {
        <section class="page knowledge-hub">
            <Hero title="Knowledge Hub" lead="Guides, templates and regulations in one library."/>
            <p>"New articles are published weekly. "<a href="/subscribe">"Subscribe"</a>" to stay informed."</p>
        </section>
    }
}

#[component]
pub fn SubscribePage() -> impl IntoView {
    view! {
        <section class="page subscribe">
            <Hero title="Subscribe" lead="Choose a plan that matches how often you bid."/>
            <div class="plan-grid">
                <article class="plan-card">
                    <h3>"Basic"</h3>
                    <p>"Daily tender digest by email."</p>
                </article>
                <article class="plan-card plan-card--featured">
                    <h3>"Professional"</h3>
                    <p>"Real-time alerts, saved searches and document storage."</p>
                </article>
            </div>
            <a href="/commingsoon" class="btn btn--primary">"Choose Plan"</a>
        </section>
    }
}
