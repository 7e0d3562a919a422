//! Generated bid display
//!
//! Stat cards, the bid text with copy/refine actions, skill cards and
//! the optional optimization block. Renders nothing until a bid
//! exists.

use bid_writer_common::{BidResult, RefinementType};
use leptos::prelude::*;

#[component]
pub fn ResultView<FC, FR>(
    result: ReadSignal<Option<BidResult>>,
    refining: ReadSignal<bool>,
    copied: ReadSignal<bool>,
    show_refine_menu: ReadSignal<bool>,
    set_show_refine_menu: WriteSignal<bool>,
    on_copy: FC,
    on_refine: FR,
) -> impl IntoView
where
    FC: Fn(()) + Clone + Send + Sync + 'static,
    FR: Fn(RefinementType) + Clone + Send + Sync + 'static,
{
    view! {
        {move || {
            let on_copy = on_copy.clone();
            let on_refine = on_refine.clone();
            result.get().map(|result| {
                let analysis = result.project_analysis.clone();
                view! {
                    <div class="result-section">
                        <div class="stats-grid">
                            <div class="stat-card">
                                <div class="stat-value">{analysis.project_type.clone()}</div>
                                <div class="stat-label">"Project Type"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">
                                    {format!("{:.0}%", result.confidence_score)}
                                </div>
                                <div class="stat-label">"Confidence"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{result.word_count}</div>
                                <div class="stat-label">"Words"</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">
                                    {format!("{:.0}%", analysis.skill_match_score)}
                                </div>
                                <div class="stat-label">"Skill Match"</div>
                            </div>
                        </div>

                        <div class="bid-output">
                            <div class="bid-header">
                                <h3>"📝 Generated Bid"</h3>
                                <div class="bid-actions">
                                    <button class="btn btn-copy" on:click=move |_| on_copy(())>
                                        {move || if copied.get() { "✓ Copied!" } else { "📋 Copy" }}
                                    </button>
                                    <div class="refine-dropdown">
                                        <button
                                            class="btn btn-refine"
                                            disabled=move || refining.get()
                                            on:click=move |_| {
                                                set_show_refine_menu.update(|open| *open = !*open);
                                            }
                                        >
                                            {move || {
                                                if refining.get() {
                                                    "⏳ Refining..."
                                                } else {
                                                    "✨ Refine Bid"
                                                }
                                            }}
                                        </button>
                                        <Show when=move || show_refine_menu.get()>
                                            <div class="refine-menu animate-fade-in">
                                                {RefinementType::CATALOG
                                                    .iter()
                                                    .map(|&option| {
                                                        let on_refine = on_refine.clone();
                                                        view! {
                                                            <button
                                                                class="refine-option"
                                                                on:click=move |_| on_refine(option)
                                                            >
                                                                <span class="refine-label">
                                                                    {option.label()}
                                                                </span>
                                                                <span class="refine-desc">
                                                                    {option.description()}
                                                                </span>
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </Show>
                                    </div>
                                </div>
                            </div>
                            <div class="bid-text">{result.bid_text.clone()}</div>
                        </div>

                        {(!analysis.matched_skills.is_empty())
                            .then(|| {
                                view! {
                                    <div class="info-card">
                                        <h4>"✅ Matched Skills"</h4>
                                        <div class="tags">
                                            {analysis
                                                .matched_skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="tag tag-success">{skill.clone()}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}

                        {(!analysis.required_skills.is_empty())
                            .then(|| {
                                view! {
                                    <div class="info-card">
                                        <h4>"🎯 Required Skills"</h4>
                                        <div class="tags">
                                            {analysis
                                                .required_skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <span class="tag tag-primary">{skill.clone()}</span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })}

                        {result
                            .optimization
                            .clone()
                            .map(|opt| {
                                view! {
                                    <div class="optimization-card">
                                        <h4>"💡 Optimization Suggestions"</h4>

                                        {opt.estimated_win_probability
                                            .map(|probability| {
                                                view! {
                                                    <div class="win-probability">
                                                        <div class="progress-bar">
                                                            <div
                                                                class="progress-fill"
                                                                style=format!("width: {}%", probability)
                                                            ></div>
                                                        </div>
                                                        <span class="probability-text">
                                                            {format!("{:.0}% Win Probability", probability)}
                                                        </span>
                                                    </div>
                                                }
                                            })}

                                        {opt.pricing_advice
                                            .clone()
                                            .map(|advice| {
                                                view! {
                                                    <div class="advice-item">
                                                        <strong>"💰 Pricing: "</strong>
                                                        {advice}
                                                    </div>
                                                }
                                            })}

                                        {opt.positioning_advice
                                            .clone()
                                            .map(|advice| {
                                                view! {
                                                    <div class="advice-item">
                                                        <strong>"🎯 Positioning: "</strong>
                                                        {advice}
                                                    </div>
                                                }
                                            })}

                                        {(!opt.improvements.is_empty())
                                            .then(|| {
                                                view! {
                                                    <div class="advice-list">
                                                        <strong>"🔧 Improvements:"</strong>
                                                        <ul>
                                                            {opt.improvements
                                                                .iter()
                                                                .map(|entry| view! { <li>{entry.clone()}</li> })
                                                                .collect_view()}
                                                        </ul>
                                                    </div>
                                                }
                                            })}

                                        {(!opt.warnings.is_empty())
                                            .then(|| {
                                                view! {
                                                    <div class="advice-list warnings">
                                                        <strong>"⚠️ Warnings:"</strong>
                                                        <ul>
                                                            {opt.warnings
                                                                .iter()
                                                                .map(|entry| view! { <li>{entry.clone()}</li> })
                                                                .collect_view()}
                                                        </ul>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })}
                    </div>
                }
            })
        }}
    }
}
