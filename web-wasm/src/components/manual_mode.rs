//! Manual mode: structured form fields

use bid_writer_common::ManualForm;
use leptos::prelude::*;

#[component]
pub fn ManualMode<FG, FR>(
    form: ReadSignal<ManualForm>,
    set_form: WriteSignal<ManualForm>,
    generating: ReadSignal<bool>,
    on_generate: FG,
    on_reset: FR,
) -> impl IntoView
where
    FG: Fn(()) + 'static + Clone,
    FR: Fn(()) + 'static + Clone,
{
    view! {
        <div class="form-section">
            <form on:submit={
                let on_generate = on_generate.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_generate(());
                }
            }>
                <div class="form-group">
                    <label for="project_name">
                        "Project Name " <span class="required">"*"</span>
                    </label>
                    <input
                        type="text"
                        id="project_name"
                        placeholder="e.g., Website Text Scraping to Excel"
                        prop:value=move || form.get().project_name
                        on:input=move |ev| {
                            set_form.update(|f| f.project_name = event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="project_description">
                        "Project Description " <span class="required">"*"</span>
                    </label>
                    <textarea
                        id="project_description"
                        rows="10"
                        placeholder="Paste the full project description here..."
                        prop:value=move || form.get().project_description
                        on:input=move |ev| {
                            set_form.update(|f| f.project_description = event_target_value(&ev));
                        }></textarea>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="bid_rank">"Your Bid Rank (Optional)"</label>
                        <input
                            type="number"
                            id="bid_rank"
                            placeholder="e.g., 16"
                            prop:value=move || form.get().bid_rank
                            on:input=move |ev| {
                                set_form.update(|f| f.bid_rank = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="total_bids">"Total Bids (Optional)"</label>
                        <input
                            type="number"
                            id="total_bids"
                            placeholder="e.g., 23"
                            prop:value=move || form.get().total_bids
                            on:input=move |ev| {
                                set_form.update(|f| f.total_bids = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="your_bid_amount">"Your Bid Amount (Optional)"</label>
                        <input
                            type="text"
                            id="your_bid_amount"
                            placeholder="e.g., $100 USD"
                            prop:value=move || form.get().your_bid_amount
                            on:input=move |ev| {
                                set_form.update(|f| f.your_bid_amount = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="winning_bid_amount">"Winning Bid (Optional)"</label>
                        <input
                            type="text"
                            id="winning_bid_amount"
                            placeholder="e.g., $75 USD"
                            prop:value=move || form.get().winning_bid_amount
                            on:input=move |ev| {
                                set_form.update(|f| f.winning_bid_amount = event_target_value(&ev));
                            }
                        />
                    </div>
                </div>

                <div class="button-group">
                    <button type="submit" class="btn btn-primary" disabled=move || generating.get()>
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
            </form>
        </div>
    }
}
