//! Toast notification view

use leptos::prelude::*;

use crate::notify::Notification;

#[component]
pub fn Toast(notification: RwSignal<Option<Notification>>) -> impl IntoView {
    view! {
        {move || {
            notification
                .get()
                .map(|toast| {
                    let class = format!("toast toast-{} animate-slide-down", toast.severity.as_str());
                    view! { <div class=class>{toast.message}</div> }
                })
        }}
    }
}
