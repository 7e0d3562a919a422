//! Custom refinement modal
//!
//! Collects a free-text instruction before a custom refinement is
//! dispatched. Apply stays disabled while the instruction is blank.

use leptos::prelude::*;

#[component]
pub fn CustomRefineModal<FA, FC>(
    instruction: ReadSignal<String>,
    set_instruction: WriteSignal<String>,
    on_apply: FA,
    on_cancel: FC,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div
            class="modal-overlay"
            on:click={
                let on_cancel = on_cancel.clone();
                move |_| on_cancel(())
            }
        >
            <div class="modal-content" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>"✨ Custom Refinement"</h3>
                    <button
                        class="modal-close"
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel(())
                        }
                    >
                        "✕"
                    </button>
                </div>
                <div class="modal-body">
                    <label>"Enter your custom instructions:"</label>
                    <textarea
                        rows="4"
                        placeholder="E.g., 'Make it more technical', 'Add emphasis on deadlines', 'Include pricing justification'..."
                        prop:value=move || instruction.get()
                        on:input=move |ev| set_instruction.set(event_target_value(&ev))></textarea>
                </div>
                <div class="modal-footer">
                    <button
                        class="btn-secondary"
                        on:click={
                            let on_cancel = on_cancel.clone();
                            move |_| on_cancel(())
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn-primary"
                        disabled=move || instruction.get().trim().is_empty()
                        on:click={
                            let on_apply = on_apply.clone();
                            move |_| on_apply(())
                        }
                    >
                        "✨ Apply"
                    </button>
                </div>
            </div>
        </div>
    }
}
