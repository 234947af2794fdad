//! Application layer - use cases and orchestration.
//!
//! This layer contains the domain store, the bundled seed dataset, derived
//! statistics, and output formatting.

pub mod formatter;
pub mod seed;
pub mod stats;
pub mod store;

pub use formatter::{
    format_conversation_markdown, format_conversations_table, format_donations_table,
    format_event_markdown, format_events_table, format_job_markdown, format_jobs_table,
    format_json, format_members_table, format_mentorships_table, format_stats, OutputFormat,
};
pub use seed::seeded_store;
pub use stats::collect_stats;
pub use store::Store;
