//! Parsed project preview
//!
//! Renders whatever fields the parser managed to extract; absent
//! fields simply do not appear.

use bid_writer_common::ParsedProject;
use leptos::prelude::*;

#[component]
pub fn ParsedPreview(parsed: ReadSignal<Option<ParsedProject>>) -> impl IntoView {
    let data = move || parsed.get().unwrap_or_default();

    let item = |label: &'static str, value: Option<String>| {
        value.map(|value| {
            view! {
                <div class="parsed-item animate-fade-in">
                    <strong>{label}</strong>
                    " "
                    {value}
                </div>
            }
        })
    };

    view! {
        <div class="parsed-preview animate-slide-up">
            <h3>"📋 Extracted Information"</h3>
            <div class="parsed-grid">
                {move || {
                    let data = data();
                    vec![
                        item("Project:", data.project_name),
                        item("Total Bids:", data.total_bids.map(|n| n.to_string())),
                        item("Average Bid:", data.average_bid),
                        item("Budget:", data.budget_range),
                        item("Time Left:", data.time_remaining),
                        item("Client:", data.client_location),
                        item("Rating:", data.client_rating),
                    ]
                }}
            </div>

            <Show when=move || data().project_description.is_some()>
                <div class="project-description animate-fade-in">
                    <h4>"📝 Project Description"</h4>
                    <div class="description-text">
                        {move || data().project_description.unwrap_or_default()}
                    </div>
                </div>
            </Show>

            <Show when=move || !data().required_skills.is_empty()>
                <div class="required-skills animate-fade-in">
                    <h4>"🛠️ Required Skills"</h4>
                    <div class="skills-tags">
                        {move || {
                            data()
                                .required_skills
                                .into_iter()
                                .map(|skill| view! { <span class="skill-tag">{skill}</span> })
                                .collect_view()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
