//! AI Bid Writer Common Library
//!
//! Types and pure request logic shared by the web client

pub mod error;
pub mod refine;
pub mod request;
pub mod settings;
pub mod steps;
pub mod types;

pub use error::{Error, Result};
pub use refine::RefinementType;
pub use request::{BidRequest, ManualForm, RefineRequest, SmartRequest};
pub use settings::Settings;
pub use steps::{ExtractionStep, ExtractionTrace, EXTRACTION_STEPS};
pub use types::{
    BackendConfig, BidResult, Optimization, ParsedProject, ProjectAnalysis, RefineResponse,
};
