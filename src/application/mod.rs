//! Application layer - Use cases and orchestration

pub mod build_site;
pub mod init;
pub mod list_tags;

pub use build_site::{BuildOptions, BuildSiteService, BuildSummary};
pub use init::InitService;
pub use list_tags::ListTagsService;
