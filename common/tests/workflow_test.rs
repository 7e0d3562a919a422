//! Workflow-level tests
//!
//! Drive the data path of one full session: smart parse preview,
//! generated result, refinement dispatch and in-place text
//! replacement.

use bid_writer_common::{
    BidRequest, BidResult, Error, ManualForm, ParsedProject, RefineRequest, RefinementType,
    Settings, SmartRequest,
};

/// Paste -> parse -> generate -> refine, with backend payloads as the
/// server would send them
#[test]
fn test_smart_session_end_to_end() {
    let pasted = "Website redesign, budget $500, 12 bids";

    let request = SmartRequest::new(pasted).expect("non-empty content must validate");
    assert_eq!(request.raw_content, pasted);

    let parsed: ParsedProject = serde_json::from_str(
        r#"{
            "project_name": "Website redesign",
            "project_description": "Redesign a marketing site",
            "budget_range": "$500",
            "total_bids": 12,
            "required_skills": ["HTML", "CSS", "Figma"]
        }"#,
    )
    .expect("parse response must deserialize");
    assert_eq!(parsed.total_bids, Some(12));
    assert_eq!(parsed.budget_range.as_deref(), Some("$500"));

    let mut result: BidResult = serde_json::from_str(
        r#"{
            "bid_text": "Hi, I just reviewed your redesign brief and can start today.",
            "project_analysis": {
                "project_type": "Web Development",
                "skill_match_score": 80.0,
                "matched_skills": ["HTML", "CSS"],
                "required_skills": ["HTML", "CSS", "Figma"]
            },
            "word_count": 12,
            "confidence_score": 87.0
        }"#,
    )
    .expect("generate response must deserialize");
    assert!(!result.bid_text.is_empty());
    assert!((0.0..=100.0).contains(&result.confidence_score));

    // Refine with a fixed catalog entry, then overwrite in place
    let refine = RefineRequest::build(
        &result.bid_text,
        RefinementType::MakeCasual,
        parsed.project_description.as_deref().unwrap_or(""),
        None,
        &Settings::default(),
    )
    .expect("fixed refinement needs no instruction");
    assert_eq!(refine.refinement_type, "make_casual");
    assert_eq!(refine.original_bid, result.bid_text);

    let before = result.clone();
    result.apply_refinement("Hey! Saw your redesign brief, happy to jump in today.".to_string());
    assert_ne!(result.bid_text, before.bid_text);
    assert_eq!(result.word_count, before.word_count);
    assert_eq!(result.confidence_score, before.confidence_score);
    assert_eq!(result.project_analysis, before.project_analysis);
}

/// Manual mode with a missing required field is rejected before any
/// payload exists
#[test]
fn test_manual_session_rejected_locally() {
    let form = ManualForm {
        project_description: "Scrape listings into Excel".to_string(),
        ..Default::default()
    };

    let err = BidRequest::from_form(&form).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

/// A custom refinement without instructions never produces a payload;
/// with instructions it produces exactly one carrying them
#[test]
fn test_custom_refinement_gating() {
    let settings = Settings::default();

    let rejected = RefineRequest::build("bid", RefinementType::Custom, "", None, &settings);
    assert!(matches!(rejected, Err(Error::Validation(_))));

    let accepted = RefineRequest::build(
        "bid",
        RefinementType::Custom,
        "",
        Some("Mention my portfolio"),
        &settings,
    )
    .expect("non-empty instruction must validate");
    assert_eq!(
        accepted.custom_instruction.as_deref(),
        Some("Mention my portfolio")
    );
}
