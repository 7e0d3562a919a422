//! Header component

use leptos::prelude::*;

use crate::app::Mode;

#[component]
pub fn Header<F>(
    mode: ReadSignal<Mode>,
    set_mode: WriteSignal<Mode>,
    on_toggle_settings: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <header class="header">
            <div class="header-content">
                <div class="header-left">
                    <h1>"AI Bid Writer"</h1>
                    <p class="tagline">"Win more projects with AI-powered proposals"</p>
                </div>
                <div class="header-right">
                    <button
                        class="settings-btn"
                        title="Settings"
                        on:click={
                            let on_toggle_settings = on_toggle_settings.clone();
                            move |_| on_toggle_settings(())
                        }
                    >
                        "⚙️ Settings"
                    </button>
                </div>
            </div>

            <div class="mode-switch">
                <button
                    class=move || {
                        if mode.get() == Mode::Smart { "mode-btn active" } else { "mode-btn" }
                    }
                    on:click=move |_| set_mode.set(Mode::Smart)
                >
                    "🎯 Smart Mode"
                </button>
                <button
                    class=move || {
                        if mode.get() == Mode::Manual { "mode-btn active" } else { "mode-btn" }
                    }
                    on:click=move |_| set_mode.set(Mode::Manual)
                >
                    "✍️ Manual Mode"
                </button>
            </div>
        </header>
    }
}
