//! Main application component
//!
//! Owns all workflow state and sequences the Smart-mode pipeline
//! (parse preview, staged generate) and the Manual-mode submission,
//! plus refinement dispatch. Each network action has its own busy flag
//! that disables the trigger control while a call is in flight.

use std::collections::HashMap;

use bid_writer_common::{
    BidRequest, BidResult, ExtractionTrace, ManualForm, ParsedProject, RefineRequest,
    RefinementType, SmartRequest,
};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use crate::api;
use crate::components::{
    custom_refine_modal::CustomRefineModal, footer::Footer, header::Header,
    manual_mode::ManualMode, result_view::ResultView, settings_panel::SettingsPanel,
    smart_mode::SmartMode, toast::Toast,
};
use crate::narrator;
use crate::notify::{Notifier, Severity};
use crate::settings_store;

/// Input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Smart,
    Manual,
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Input state
    let (mode, set_mode) = signal(Mode::Smart);
    let (smart_content, set_smart_content) = signal(String::new());
    let (form, set_form) = signal(ManualForm::default());

    // Result state
    let (parsed, set_parsed) = signal(Option::<ParsedProject>::None);
    let (result, set_result) = signal(Option::<BidResult>::None);
    let trace = RwSignal::new(ExtractionTrace::default());
    let (error, set_error) = signal(Option::<String>::None);

    // Busy flags, one per trigger control
    let (parsing, set_parsing) = signal(false);
    let (generating, set_generating) = signal(false);
    let (refining, set_refining) = signal(false);
    let (copied, set_copied) = signal(false);

    // Panels and menus
    let (show_settings, set_show_settings) = signal(false);
    let (show_refine_menu, set_show_refine_menu) = signal(false);
    let (show_custom_refine, set_show_custom_refine) = signal(false);
    let (custom_instruction, set_custom_instruction) = signal(String::new());

    // Committed settings plus the copy the panel edits; the committed
    // value survives in memory even when the store is unusable
    let settings = RwSignal::new(settings_store::load());
    let draft = RwSignal::new(settings.get_untracked());
    let (available_models, set_available_models) = signal(HashMap::<String, Vec<String>>::new());

    let notifier = Notifier::new();

    // Load the provider/model catalog once; absence of the catalog
    // never blocks generation or refinement
    spawn_local(async move {
        match api::fetch_config().await {
            Ok(config) => set_available_models.set(config.available_models),
            Err(err) => gloo::console::error!(format!("Failed to load config: {}", err)),
        }
    });

    // Smart mode: preview extraction without touching result state
    let on_preview = move |_: ()| {
        let request = match SmartRequest::new(&smart_content.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };

        set_parsing.set(true);
        set_error.set(None);
        set_parsed.set(None);

        spawn_local(async move {
            match api::parse_project(&request).await {
                Ok(data) => set_parsed.set(Some(data)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_parsing.set(false);
        });
    };

    // Smart mode: staged generate, narrator joined with the real call
    let on_generate_smart = move |_: ()| {
        let request = match SmartRequest::new(&smart_content.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };

        set_generating.set(true);
        set_error.set(None);
        set_result.set(None);
        // A fresh run always restarts the trace; two progress
        // sequences never interleave
        trace.update(|t| t.clear());

        spawn_local(async move {
            let (outcome, _) =
                futures::join!(api::smart_generate(&request), narrator::narrate(trace));
            match outcome {
                Ok(bid) => {
                    trace.update(|t| t.complete_current());
                    set_result.set(Some(bid));
                }
                Err(err) => {
                    trace.update(|t| t.clear());
                    set_error.set(Some(err.to_string()));
                }
            }
            set_generating.set(false);
        });
    };

    // Manual mode: direct generate, no narrator
    let on_generate_manual = move |_: ()| {
        let request = match BidRequest::from_form(&form.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };

        set_generating.set(true);
        set_error.set(None);
        set_result.set(None);

        spawn_local(async move {
            match api::generate_bid(&request).await {
                Ok(bid) => set_result.set(Some(bid)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_generating.set(false);
        });
    };

    // Refinement context: the parsed description when Smart mode
    // produced one, otherwise whatever the form holds
    let refine_context = move || {
        parsed
            .get_untracked()
            .and_then(|p| p.project_description)
            .unwrap_or_else(|| form.get_untracked().project_description)
    };

    let dispatch_refine = move |refinement: RefinementType,
                                instruction: Option<String>,
                                success_message: &'static str,
                                failure_message: &'static str| {
        let Some(bid) = result.get_untracked() else {
            return;
        };
        // Settings are read at dispatch time; a save during an
        // in-flight refine only affects the next call
        let request = match RefineRequest::build(
            &bid.bid_text,
            refinement,
            &refine_context(),
            instruction.as_deref(),
            &settings.get_untracked(),
        ) {
            Ok(request) => request,
            Err(err) => {
                notifier.notify(format!("⚠️ {}", err), Severity::Warning);
                return;
            }
        };

        set_refining.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::refine_bid(&request).await {
                Ok(response) => {
                    set_result.update(|current| {
                        if let Some(bid) = current {
                            bid.apply_refinement(response.refined_bid);
                        }
                    });
                    if refinement == RefinementType::Custom {
                        set_custom_instruction.set(String::new());
                    }
                    notifier.notify(success_message, Severity::Success);
                }
                Err(err) => {
                    set_error.set(Some(err.to_string()));
                    notifier.notify(failure_message, Severity::Error);
                }
            }
            set_refining.set(false);
        });
    };

    let on_refine = move |refinement: RefinementType| {
        set_show_refine_menu.set(false);
        if refinement == RefinementType::Custom {
            set_show_custom_refine.set(true);
            return;
        }
        dispatch_refine(
            refinement,
            None,
            "✨ Bid refined successfully!",
            "❌ Failed to refine bid",
        );
    };

    let on_apply_custom = move |_: ()| {
        let instruction = custom_instruction.get_untracked();
        if instruction.trim().is_empty() {
            // Modal stays open; no request leaves the client
            notifier.notify(
                "⚠️ Please enter your custom instructions",
                Severity::Warning,
            );
            return;
        }
        set_show_custom_refine.set(false);
        dispatch_refine(
            RefinementType::Custom,
            Some(instruction),
            "✨ Custom refinement applied!",
            "❌ Failed to apply custom refinement",
        );
    };

    let on_copy = move |_: ()| {
        let Some(bid) = result.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let clipboard = window().navigator().clipboard();
            if JsFuture::from(clipboard.write_text(&bid.bid_text))
                .await
                .is_ok()
            {
                set_copied.set(true);
                TimeoutFuture::new(2000).await;
                set_copied.set(false);
            }
        });
    };

    let on_toggle_settings = move |_: ()| {
        if !show_settings.get_untracked() {
            draft.set(settings.get_untracked());
        }
        set_show_settings.update(|open| *open = !*open);
    };

    let on_save_settings = move |_: ()| {
        let committed = draft.get_untracked();
        if let Err(err) = settings_store::save(&committed) {
            gloo::console::warn!(format!("{}", err));
        }
        settings.set(committed);
        set_show_settings.set(false);
        notifier.notify(
            "⚙️ Settings saved! Changes will apply to next bid generation.",
            Severity::Success,
        );
    };

    let on_cancel_settings = move |_: ()| set_show_settings.set(false);

    let on_reset = move |_: ()| {
        set_smart_content.set(String::new());
        set_parsed.set(None);
        set_form.set(ManualForm::default());
        set_result.set(None);
        set_error.set(None);
        trace.update(|t| t.clear());
    };

    let on_cancel_custom = move |_: ()| set_show_custom_refine.set(false);

    view! {
        <div class="bid-generator">
            <Toast notification=notifier.current() />

            <div class="container">
                <Header mode=mode set_mode=set_mode on_toggle_settings=on_toggle_settings />

                <Show when=move || show_settings.get()>
                    <SettingsPanel
                        draft=draft
                        available_models=available_models
                        on_save=on_save_settings
                        on_cancel=on_cancel_settings
                    />
                </Show>

                <div class="content">
                    <Show
                        when=move || mode.get() == Mode::Smart
                        fallback=move || {
                            view! {
                                <ManualMode
                                    form=form
                                    set_form=set_form
                                    generating=generating
                                    on_generate=on_generate_manual
                                    on_reset=on_reset
                                />
                            }
                        }
                    >
                        <SmartMode
                            smart_content=smart_content
                            set_smart_content=set_smart_content
                            parsed=parsed
                            trace=trace
                            parsing=parsing
                            generating=generating
                            on_preview=on_preview
                            on_generate=on_generate_smart
                            on_reset=on_reset
                        />
                    </Show>

                    <Show when=move || error.get().is_some()>
                        <div class="alert alert-error">
                            <strong>"Error: "</strong>
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <ResultView
                        result=result
                        refining=refining
                        copied=copied
                        show_refine_menu=show_refine_menu
                        set_show_refine_menu=set_show_refine_menu
                        on_copy=on_copy
                        on_refine=on_refine
                    />
                </div>

                <Footer />
            </div>

            <Show when=move || show_custom_refine.get()>
                <CustomRefineModal
                    instruction=custom_instruction
                    set_instruction=set_custom_instruction
                    on_apply=on_apply_custom
                    on_cancel=on_cancel_custom
                />
            </Show>
        </div>
    }
}
