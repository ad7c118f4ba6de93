#![forbid(unsafe_code)]

pub mod dashboard_service;
pub mod error;
pub mod view;

pub use prep_core::Clock;

pub use dashboard_service::DashboardService;
pub use error::DashboardError;
pub use view::{ChapterListView, SubjectFacets};
