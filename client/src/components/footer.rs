//! Footer shown on public pages.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div>
                    <h4>"Tender-Hub"</h4>
                    <p>"Connecting bidders and tenderers across Kenya."</p>
                </div>
                <div>
                    <h4>"Explore"</h4>
                    <ul>
                        <li><a href="/about">"About"</a></li>
                        <li><a href="/training">"Training"</a></li>
                        <li><a href="/knowledge-hub">"Knowledge Hub"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Support"</h4>
                    <ul>
                        <li><a href="/contact">"Contact"</a></li>
                        <li><a href="/subscribe">"Subscribe"</a></li>
                    </ul>
                </div>
            </div>
            <p class="footer__legal">"© Tender-Hub. All rights reserved."</p>
        </footer>
    }
}
