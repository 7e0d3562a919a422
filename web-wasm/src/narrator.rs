//! Progress narrator
//!
//! Cosmetic step-by-step progress for Smart-mode generation. The
//! backend gives no intermediate signal, so the first five labels
//! advance on a fixed cadence, and the final label is revealed
//! immediately after, staying incomplete until the real response
//! lands.

use bid_writer_common::{ExtractionTrace, EXTRACTION_STEPS};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Delay between cosmetic steps
const STEP_MS: u32 = 300;

/// Play the timed steps, then reveal the final label
///
/// Runs joined with the in-flight generate call. Completing the final
/// label is the caller's job once the response arrives, which keeps it
/// from completing before the real work has finished.
pub async fn narrate(trace: RwSignal<ExtractionTrace>) {
    let last = EXTRACTION_STEPS.len() - 1;
    for &label in &EXTRACTION_STEPS[..last] {
        trace.update(|t| t.begin(label));
        TimeoutFuture::new(STEP_MS).await;
        trace.update(|t| t.complete_current());
    }
    trace.update(|t| t.begin(EXTRACTION_STEPS[last]));
}
