//! Extraction step trace
//!
//! Bookkeeping for the staged progress list shown while a Smart-mode
//! bid is generated. The labels are fixed; the trace only ever grows
//! in display order and is discarded wholesale when a run settles.

/// Narrator labels, in display order
pub const EXTRACTION_STEPS: [&str; 6] = [
    "📄 Parsing project content...",
    "💰 Extracting budget information...",
    "📊 Analyzing bid competition...",
    "🎯 Matching required skills...",
    "✨ Generating AI-powered bid...",
    "🚀 Optimizing proposal...",
];

/// One visible progress entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStep {
    pub label: &'static str,
    pub complete: bool,
}

/// Ordered list of extraction steps
///
/// Invariant: at most the last step is incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionTrace {
    steps: Vec<ExtractionStep>,
}

impl ExtractionTrace {
    /// Reveal the next label, initially incomplete
    pub fn begin(&mut self, label: &'static str) {
        self.steps.push(ExtractionStep {
            label,
            complete: false,
        });
    }

    /// Mark the most recently revealed label complete
    pub fn complete_current(&mut self) {
        if let Some(step) = self.steps.last_mut() {
            step.complete = true;
        }
    }

    /// Discard the whole trace (failed or reset run)
    pub fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn steps(&self) -> &[ExtractionStep] {
        &self.steps
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// True once every revealed step has completed
    pub fn all_complete(&self) -> bool {
        self.steps.iter().all(|step| step.complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_fixed_order() {
        assert_eq!(EXTRACTION_STEPS.len(), 6);
        assert!(EXTRACTION_STEPS[0].contains("Parsing"));
        assert!(EXTRACTION_STEPS[4].contains("Generating"));
        assert!(EXTRACTION_STEPS[5].contains("Optimizing"));
    }

    #[test]
    fn test_trace_reveals_in_order() {
        let mut trace = ExtractionTrace::default();
        for label in EXTRACTION_STEPS {
            trace.begin(label);
            trace.complete_current();
        }

        let labels: Vec<&str> = trace.steps().iter().map(|s| s.label).collect();
        assert_eq!(labels, EXTRACTION_STEPS.to_vec());
        assert!(trace.all_complete());
    }

    #[test]
    fn test_only_last_step_incomplete() {
        let mut trace = ExtractionTrace::default();
        trace.begin(EXTRACTION_STEPS[0]);
        trace.complete_current();
        trace.begin(EXTRACTION_STEPS[1]);

        assert!(trace.steps()[0].complete);
        assert!(!trace.steps()[1].complete);
        assert!(!trace.all_complete());
    }

    #[test]
    fn test_clear_discards_everything() {
        let mut trace = ExtractionTrace::default();
        trace.begin(EXTRACTION_STEPS[0]);
        trace.begin(EXTRACTION_STEPS[1]);
        trace.clear();

        assert!(trace.is_empty());
        // A cleared trace restarts cleanly
        trace.begin(EXTRACTION_STEPS[0]);
        assert_eq!(trace.steps().len(), 1);
    }

    #[test]
    fn test_complete_current_on_empty_is_noop() {
        let mut trace = ExtractionTrace::default();
        trace.complete_current();
        assert!(trace.is_empty());
    }
}
