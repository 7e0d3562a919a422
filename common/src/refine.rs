//! Refinement catalog
//!
//! Fixed menu of post-generation transformations plus the free-text
//! `Custom` entry. The wire id must match what the backend's prompt
//! table expects.

/// A refinement the user can apply to a generated bid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinementType {
    ReduceLength,
    MakeCasual,
    MakeFormal,
    AddUrgency,
    EmphasizeSkills,
    AddExamples,
    Custom,
}

impl RefinementType {
    /// Menu order
    pub const CATALOG: [RefinementType; 7] = [
        RefinementType::ReduceLength,
        RefinementType::MakeCasual,
        RefinementType::MakeFormal,
        RefinementType::AddUrgency,
        RefinementType::EmphasizeSkills,
        RefinementType::AddExamples,
        RefinementType::Custom,
    ];

    /// Wire id sent as `refinement_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            RefinementType::ReduceLength => "reduce_length",
            RefinementType::MakeCasual => "make_casual",
            RefinementType::MakeFormal => "make_formal",
            RefinementType::AddUrgency => "add_urgency",
            RefinementType::EmphasizeSkills => "emphasize_skills",
            RefinementType::AddExamples => "add_examples",
            RefinementType::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefinementType::ReduceLength => "✂️ Make Shorter",
            RefinementType::MakeCasual => "😊 More Casual",
            RefinementType::MakeFormal => "💼 More Formal",
            RefinementType::AddUrgency => "⚡ Add Urgency",
            RefinementType::EmphasizeSkills => "🎯 Emphasize Skills",
            RefinementType::AddExamples => "📝 Add Examples",
            RefinementType::Custom => "✨ Custom",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RefinementType::ReduceLength => "Reduce to 150 words",
            RefinementType::MakeCasual => "Friendly tone",
            RefinementType::MakeFormal => "Business tone",
            RefinementType::AddUrgency => "Emphasize availability",
            RefinementType::EmphasizeSkills => "Highlight expertise",
            RefinementType::AddExamples => "Include work samples",
            RefinementType::Custom => "Your own instructions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_ids() {
        assert_eq!(RefinementType::ReduceLength.as_str(), "reduce_length");
        assert_eq!(RefinementType::MakeCasual.as_str(), "make_casual");
        assert_eq!(RefinementType::Custom.as_str(), "custom");
    }

    #[test]
    fn test_catalog_order_and_size() {
        assert_eq!(RefinementType::CATALOG.len(), 7);
        assert_eq!(RefinementType::CATALOG[0], RefinementType::ReduceLength);
        // Custom is always the last menu entry
        assert_eq!(RefinementType::CATALOG[6], RefinementType::Custom);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<&str> = RefinementType::CATALOG.iter().map(|r| r.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), RefinementType::CATALOG.len());
    }
}
