//! Footer component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-text">"Built with curiosity for freelance bidders"</div>
            </div>
        </footer>
    }
}
