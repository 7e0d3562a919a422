//! Settings panel component
//!
//! Edits a draft copy of the settings; nothing is committed until the
//! Save button fires the `on_save` callback.

use std::collections::HashMap;

use bid_writer_common::Settings;
use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FS, FC>(
    draft: RwSignal<Settings>,
    available_models: ReadSignal<HashMap<String, Vec<String>>>,
    on_save: FS,
    on_cancel: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    // Catalog entries for the selected provider; before /config has
    // answered, the current model is the only choice
    let provider_models = move || {
        let current = draft.get();
        let models = available_models
            .get()
            .get(&current.provider)
            .cloned()
            .unwrap_or_default();
        if models.is_empty() {
            vec![current.model]
        } else {
            models
        }
    };

    view! {
        <div class="settings-panel animate-fade-in">
            <h3>"⚙️ Settings"</h3>
            <div class="settings-content">
                <div class="setting-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().use_custom_key
                            on:change=move |ev| {
                                draft.update(|s| s.use_custom_key = event_target_checked(&ev));
                            }
                        />
                        "Use Custom API Key"
                    </label>
                </div>

                <Show when=move || draft.get().use_custom_key>
                    <div class="setting-group">
                        <label>"AI Provider"</label>
                        <select
                            prop:value=move || draft.get().provider
                            on:change=move |ev| {
                                let provider = event_target_value(&ev);
                                let first_model = available_models
                                    .get_untracked()
                                    .get(&provider)
                                    .and_then(|models| models.first().cloned())
                                    .unwrap_or_default();
                                draft.update(|s| {
                                    s.provider = provider;
                                    s.model = first_model;
                                });
                            }
                        >
                            <option value="gemini">"Google Gemini (Free)"</option>
                            <option value="openai">"OpenAI"</option>
                            <option value="anthropic">"Anthropic Claude"</option>
                        </select>
                    </div>

                    <div class="setting-group">
                        <label>"Model"</label>
                        <select
                            prop:value=move || draft.get().model
                            on:change=move |ev| {
                                draft.update(|s| s.model = event_target_value(&ev));
                            }
                        >
                            <For
                                each=provider_models
                                key=|model| model.clone()
                                children=move |model: String| {
                                    let value = model.clone();
                                    view! { <option value=value>{model}</option> }
                                }
                            />
                        </select>
                    </div>

                    <div class="setting-group">
                        <label>"API Key"</label>
                        <input
                            type="password"
                            placeholder="Enter your API key"
                            prop:value=move || draft.get().api_key
                            on:input=move |ev| {
                                draft.update(|s| s.api_key = event_target_value(&ev));
                            }
                        />
                        <small>"Your API key is stored locally and never sent to our servers"</small>
                    </div>
                </Show>

                <div class="setting-actions">
                    <button
                        class="btn-primary"
                        on:click={
                            let on_save = on_save.clone();
                            move |_| on_save(())
                        }
                    >
                        "💾 Save Settings"
                    </button>
                    <button
                        class="btn-secondary"
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel(())
                        }
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
}
