//! Smart mode: paste the whole project page

use bid_writer_common::{ExtractionTrace, ParsedProject};
use leptos::prelude::*;

use crate::components::extraction_steps::ExtractionSteps;
use crate::components::parsed_preview::ParsedPreview;

#[component]
pub fn SmartMode<FP, FG, FR>(
    smart_content: ReadSignal<String>,
    set_smart_content: WriteSignal<String>,
    parsed: ReadSignal<Option<ParsedProject>>,
    trace: RwSignal<ExtractionTrace>,
    parsing: ReadSignal<bool>,
    generating: ReadSignal<bool>,
    on_preview: FP,
    on_generate: FG,
    on_reset: FR,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FG: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    let has_content = move || !smart_content.get().trim().is_empty();

    view! {
        <div class="smart-mode">
            <div class="form-group">
                <label for="smart_content">
                    "Paste Entire Project Page " <span class="required">"*"</span>
                    <span class="hint">"Copy everything from the project page and paste it here"</span>
                </label>
                <textarea
                    id="smart_content"
                    class="smart-textarea"
                    rows="15"
                    placeholder="Paste the entire project page here - including title, description, bids, budget, everything!"
                    prop:value=move || smart_content.get()
                    on:input=move |ev| set_smart_content.set(event_target_value(&ev))></textarea>
            </div>

            <Show when=move || parsed.get().is_some()>
                <ParsedPreview parsed=parsed />
            </Show>

            <Show when=move || !trace.get().is_empty()>
                <ExtractionSteps trace=trace />
            </Show>

            <div class="button-group">
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || parsing.get() || !has_content()
                    on:click={
                        let on_preview = on_preview.clone();
                        move |_| on_preview(())
                    }
                >
                    {move || if parsing.get() { "Parsing..." } else { "🔍 Preview Extraction" }}
                </button>
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled=move || generating.get() || !has_content()
                    on:click={
                        let on_generate = on_generate.clone();
                        move |_| on_generate(())
                    }
                >
                    {move || if generating.get() { "Generating..." } else { "✨ Generate Bid" }}
                </button>
                <button
                    type="button"
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "🔄 Reset"
                </button>
            </div>
        </div>
    }
}
