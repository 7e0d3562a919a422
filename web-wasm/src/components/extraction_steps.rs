//! Extraction progress list

use bid_writer_common::ExtractionTrace;
use leptos::prelude::*;

#[component]
pub fn ExtractionSteps(trace: RwSignal<ExtractionTrace>) -> impl IntoView {
    view! {
        <div class="extraction-process">
            <h3>"⚙️ Processing..."</h3>
            <div class="extraction-steps">
                {move || {
                    trace
                        .get()
                        .steps()
                        .iter()
                        .map(|step| {
                            let class = if step.complete {
                                "extraction-step complete"
                            } else {
                                "extraction-step active"
                            };
                            let icon = if step.complete { "✓" } else { "⟳" };
                            view! {
                                <div class=class>
                                    <div class="step-icon">{icon}</div>
                                    <div class="step-text">{step.label}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
