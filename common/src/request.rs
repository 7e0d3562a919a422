//! Request payloads and local validation
//!
//! Every constructor is fallible: a `Validation` error means the input
//! never left the client. Payload shapes follow the backend's request
//! models for /parse-project, /generate-bid, /smart-generate-bid and
//! /refine-bid.

use crate::error::{Error, Result};
use crate::refine::RefinementType;
use crate::settings::Settings;
use serde::Serialize;

/// Body of POST /parse-project and POST /smart-generate-bid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartRequest {
    pub raw_content: String,
}

impl SmartRequest {
    /// Wrap pasted page content, rejecting blank input
    pub fn new(raw_content: &str) -> Result<Self> {
        if raw_content.trim().is_empty() {
            return Err(Error::Validation(
                "Please paste project content".to_string(),
            ));
        }
        Ok(Self {
            raw_content: raw_content.to_string(),
        })
    }
}

/// Manual-mode form state, as typed (numbers stay strings until submit)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualForm {
    pub project_name: String,
    pub project_description: String,
    pub bid_rank: String,
    pub total_bids: String,
    pub your_bid_amount: String,
    pub winning_bid_amount: String,
}

/// Body of POST /generate-bid
///
/// Blank optional fields serialize as explicit nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BidRequest {
    pub project_name: String,
    pub project_description: String,
    pub bid_rank: Option<u32>,
    pub total_bids: Option<u32>,
    pub your_bid_amount: Option<String>,
    pub winning_bid_amount: Option<String>,
}

impl BidRequest {
    /// Validate the form and build the payload
    ///
    /// Name and description are required; rank and total bids must be
    /// whole numbers when present.
    pub fn from_form(form: &ManualForm) -> Result<Self> {
        if form.project_name.trim().is_empty() {
            return Err(Error::Validation("Please enter a project name".to_string()));
        }
        if form.project_description.trim().is_empty() {
            return Err(Error::Validation(
                "Please enter a project description".to_string(),
            ));
        }

        Ok(Self {
            project_name: form.project_name.clone(),
            project_description: form.project_description.clone(),
            bid_rank: parse_optional_count(&form.bid_rank, "Bid rank")?,
            total_bids: parse_optional_count(&form.total_bids, "Total bids")?,
            your_bid_amount: non_blank(&form.your_bid_amount),
            winning_bid_amount: non_blank(&form.winning_bid_amount),
        })
    }
}

/// Body of POST /refine-bid
///
/// `custom_instruction` and the credential override fields are omitted
/// from the JSON entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefineRequest {
    pub original_bid: String,
    pub refinement_type: &'static str,
    pub project_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_instruction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl RefineRequest {
    /// Build a refinement payload
    ///
    /// `Custom` requires a non-empty instruction; every other type
    /// never carries one. The credential override is attached only
    /// when `use_custom_key` is set and a key has been entered.
    pub fn build(
        original_bid: &str,
        refinement_type: RefinementType,
        project_description: &str,
        custom_instruction: Option<&str>,
        settings: &Settings,
    ) -> Result<Self> {
        let custom_instruction = match refinement_type {
            RefinementType::Custom => {
                let instruction = custom_instruction.map(str::trim).unwrap_or_default();
                if instruction.is_empty() {
                    return Err(Error::Validation(
                        "Please enter your custom instructions".to_string(),
                    ));
                }
                Some(instruction.to_string())
            }
            _ => None,
        };

        let with_key = settings.use_custom_key && !settings.api_key.trim().is_empty();

        Ok(Self {
            original_bid: original_bid.to_string(),
            refinement_type: refinement_type.as_str(),
            project_description: project_description.to_string(),
            custom_instruction,
            api_key: with_key.then(|| settings.api_key.clone()),
            provider: with_key.then(|| settings.provider.clone()),
            model: with_key.then(|| settings.model.clone()),
        })
    }
}

fn parse_optional_count(value: &str, field: &str) -> Result<Option<u32>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| Error::Validation(format!("{} must be a whole number", field)))
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ManualForm {
        ManualForm {
            project_name: "Website Text Scraping to Excel".to_string(),
            project_description: "Scrape product listings into a spreadsheet".to_string(),
            bid_rank: "16".to_string(),
            total_bids: "23".to_string(),
            your_bid_amount: "$100 USD".to_string(),
            winning_bid_amount: "$75 USD".to_string(),
        }
    }

    // =============================================
    // SmartRequest
    // =============================================

    #[test]
    fn test_smart_request_rejects_blank() {
        assert!(matches!(SmartRequest::new(""), Err(Error::Validation(_))));
        assert!(matches!(
            SmartRequest::new("   \n\t"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_smart_request_keeps_content_verbatim() {
        let request = SmartRequest::new("  Website redesign, budget $500, 12 bids  ").unwrap();
        // Content is validated trimmed but sent as pasted
        assert_eq!(
            request.raw_content,
            "  Website redesign, budget $500, 12 bids  "
        );
    }

    #[test]
    fn test_smart_request_serialize() {
        let request = SmartRequest::new("project page").unwrap();
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert_eq!(json, r#"{"raw_content":"project page"}"#);
    }

    // =============================================
    // BidRequest
    // =============================================

    #[test]
    fn test_bid_request_requires_name() {
        let mut form = filled_form();
        form.project_name = "  ".to_string();
        let err = BidRequest::from_form(&form).unwrap_err();
        assert_eq!(
            err,
            Error::Validation("Please enter a project name".to_string())
        );
    }

    #[test]
    fn test_bid_request_requires_description() {
        let mut form = filled_form();
        form.project_description = String::new();
        assert!(matches!(
            BidRequest::from_form(&form),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_bid_request_parses_numeric_fields() {
        let request = BidRequest::from_form(&filled_form()).unwrap();
        assert_eq!(request.bid_rank, Some(16));
        assert_eq!(request.total_bids, Some(23));
        assert_eq!(request.your_bid_amount.as_deref(), Some("$100 USD"));
    }

    #[test]
    fn test_bid_request_blank_optionals_are_null() {
        let form = ManualForm {
            project_name: "Logo design".to_string(),
            project_description: "A minimal logo".to_string(),
            ..Default::default()
        };
        let request = BidRequest::from_form(&form).unwrap();
        assert_eq!(request.bid_rank, None);
        assert_eq!(request.winning_bid_amount, None);

        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(json.contains("\"bid_rank\":null"));
        assert!(json.contains("\"your_bid_amount\":null"));
    }

    #[test]
    fn test_bid_request_rejects_non_numeric_rank() {
        let mut form = filled_form();
        form.bid_rank = "first".to_string();
        let err = BidRequest::from_form(&form).unwrap_err();
        assert_eq!(
            err,
            Error::Validation("Bid rank must be a whole number".to_string())
        );
    }

    // =============================================
    // RefineRequest
    // =============================================

    #[test]
    fn test_refine_request_plain_type() {
        let request = RefineRequest::build(
            "My original bid",
            RefinementType::MakeCasual,
            "Build a website",
            None,
            &Settings::default(),
        )
        .unwrap();

        assert_eq!(request.refinement_type, "make_casual");
        assert_eq!(request.custom_instruction, None);
        assert_eq!(request.api_key, None);
    }

    #[test]
    fn test_refine_request_custom_requires_instruction() {
        for instruction in [None, Some(""), Some("   ")] {
            let result = RefineRequest::build(
                "bid",
                RefinementType::Custom,
                "",
                instruction,
                &Settings::default(),
            );
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[test]
    fn test_refine_request_custom_carries_instruction() {
        let request = RefineRequest::build(
            "bid",
            RefinementType::Custom,
            "desc",
            Some("Make it more technical"),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(
            request.custom_instruction.as_deref(),
            Some("Make it more technical")
        );
    }

    #[test]
    fn test_refine_request_ignores_instruction_for_fixed_types() {
        let request = RefineRequest::build(
            "bid",
            RefinementType::AddUrgency,
            "desc",
            Some("left over from an earlier custom run"),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(request.custom_instruction, None);
    }

    #[test]
    fn test_refine_request_credential_override() {
        let settings = Settings {
            api_key: "sk-test".to_string(),
            provider: "openai".to_string(),
            model: "gpt-4o".to_string(),
            use_custom_key: true,
        };
        let request =
            RefineRequest::build("bid", RefinementType::MakeFormal, "desc", None, &settings)
                .unwrap();
        assert_eq!(request.api_key.as_deref(), Some("sk-test"));
        assert_eq!(request.provider.as_deref(), Some("openai"));
        assert_eq!(request.model.as_deref(), Some("gpt-4o"));
    }

    #[test]
    fn test_refine_request_no_override_without_flag() {
        let settings = Settings {
            api_key: "sk-test".to_string(),
            use_custom_key: false,
            ..Default::default()
        };
        let request =
            RefineRequest::build("bid", RefinementType::MakeFormal, "desc", None, &settings)
                .unwrap();
        assert_eq!(request.api_key, None);
        assert_eq!(request.provider, None);
        assert_eq!(request.model, None);
    }

    #[test]
    fn test_refine_request_no_override_with_empty_key() {
        let settings = Settings {
            use_custom_key: true,
            ..Default::default()
        };
        let request =
            RefineRequest::build("bid", RefinementType::ReduceLength, "desc", None, &settings)
                .unwrap();
        assert_eq!(request.api_key, None);
    }

    #[test]
    fn test_refine_request_omits_absent_fields_from_json() {
        let request = RefineRequest::build(
            "bid",
            RefinementType::EmphasizeSkills,
            "desc",
            None,
            &Settings::default(),
        )
        .unwrap();
        let json = serde_json::to_string(&request).expect("serialize failed");
        assert!(!json.contains("custom_instruction"));
        assert!(!json.contains("api_key"));
        assert!(json.contains("\"refinement_type\":\"emphasize_skills\""));
    }
}
