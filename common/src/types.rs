//! Backend response types
//!
//! Wire models for the bid backend:
//! - ParsedProject: output of /parse-project
//! - BidResult: output of /generate-bid and /smart-generate-bid
//! - BackendConfig: output of /config
//!
//! The backend serializes snake_case and may omit any field it could
//! not fill in, so everything deserializes with defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Structured extraction of a pasted project page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedProject {
    pub project_name: Option<String>,
    pub project_description: Option<String>,
    pub budget_range: Option<String>,
    pub bid_rank: Option<u32>,
    pub total_bids: Option<u32>,
    pub average_bid: Option<String>,
    pub time_remaining: Option<String>,
    pub client_location: Option<String>,
    pub client_rating: Option<String>,
    pub required_skills: Vec<String>,
}

/// Per-project analysis attached to every generated bid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectAnalysis {
    pub project_type: String,
    pub skill_match_score: f32,
    pub matched_skills: Vec<String>,
    pub required_skills: Vec<String>,
}

/// Optional optimization block (win probability, advice, warnings)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Optimization {
    pub estimated_win_probability: Option<f32>,
    pub pricing_advice: Option<String>,
    pub positioning_advice: Option<String>,
    pub improvements: Vec<String>,
    pub warnings: Vec<String>,
}

/// A generated bid proposal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidResult {
    pub bid_text: String,
    pub project_analysis: ProjectAnalysis,
    pub word_count: u32,
    pub confidence_score: f32,
    pub optimization: Option<Optimization>,
}

impl BidResult {
    /// Replace the bid text in place. Word count, scores and analysis
    /// keep the values from the original generation.
    pub fn apply_refinement(&mut self, refined: String) {
        self.bid_text = refined;
    }
}

/// Response of POST /refine-bid
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RefineResponse {
    pub refined_bid: String,
}

/// Response of GET /config
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub available_providers: Vec<String>,
    pub available_models: HashMap<String, Vec<String>>,
}
