//! Bid backend API

mod backend;

pub use backend::{fetch_config, generate_bid, parse_project, refine_bid, smart_generate};
