//! HTTP API handlers for seoi-server

pub mod analyze;
pub mod buildinfo;
pub mod export;
pub mod health;
pub mod report;

pub use analyze::analyze_url;
pub use buildinfo::get_build_info;
pub use export::export_csv;
pub use health::health_routes;
pub use report::build_analysis_report;
