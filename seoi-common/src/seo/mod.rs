//! SEO analysis model and the canonical rule set
//!
//! Everything here is a pure function of extracted tags. Fetching and HTML
//! parsing live in the server crate; scoring, recommendations and the views
//! derived from them live here so every consumer applies the same rules.

pub mod checklist;
pub mod export;
pub mod report;
pub mod rules;
pub mod target;
pub mod types;

pub use checklist::{compute_score, missing_tags, CHECKLIST};
pub use export::{csv_file_name, to_csv};
pub use report::{build_report, AnalysisReport, ScoreRating};
pub use rules::{recommend, sort_by_priority, TagAnalysis};
pub use target::{display_domain, normalize_url, UrlError};
pub use types::{AnalysisResult, MetaTagSet, Recommendation, RecommendationType};

/// Brand color reported when a page has an `og:image` but no theme color
pub const FALLBACK_PRIMARY_COLOR: &str = "#3B82F6";
