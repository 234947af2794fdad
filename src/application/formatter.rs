//! Output formatting for store contents.
//!
//! Supports multiple output formats: table listings, Markdown detail views,
//! and JSON for programmatic use.

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;

use crate::domain::{
    Conversation, Donation, Event, Job, MentorshipRequest, Message, PlatformStats, User,
};

/// Output format options.
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Compact table listing.
    #[default]
    Table,
    /// JSON format for programmatic use.
    Json,
    /// Human-readable Markdown format.
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown format: {s}. Use: table, json, markdown")),
        }
    }
}

/// Formats any serializable value as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn format_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Formats a table listing of job postings.
pub fn format_jobs_table(jobs: &[Job]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "ID", "Title", "Company", "Location", "Type", "Posted", "Applicants", "Status",
    ]);

    for job in jobs {
        table.add_row(vec![
            short_id(&job.id),
            truncate(&job.title, 30),
            truncate(&job.company, 20),
            truncate(&job.location, 18),
            job.employment_type.to_string(),
            job.posted_date.format("%Y-%m-%d").to_string(),
            job.applicants.to_string(),
            job.status.to_string(),
        ]);
    }

    table.to_string()
}

/// Formats a table listing of events.
pub fn format_events_table(events: &[Event]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "ID", "Title", "Date", "Time", "Type", "Registered", "Capacity", "Status",
    ]);

    for event in events {
        let capacity = event
            .max_capacity
            .map_or_else(|| "-".to_string(), |cap| cap.to_string());

        table.add_row(vec![
            short_id(&event.id),
            truncate(&event.title, 30),
            event.date.format("%Y-%m-%d").to_string(),
            event.time.clone(),
            event.event_type.to_string(),
            event.registered.to_string(),
            capacity,
            event.status.to_string(),
        ]);
    }

    table.to_string()
}

/// Formats a table listing of members.
pub fn format_members_table(members: &[User]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "ID", "Name", "Role", "Organization", "Title", "Location", "Points",
    ]);

    for member in members {
        table.add_row(vec![
            short_id(&member.id),
            member.name.clone(),
            member.role.to_string(),
            truncate(&member.organization, 20),
            truncate(&member.title, 24),
            truncate(&member.location, 16),
            member.points.to_string(),
        ]);
    }

    table.to_string()
}

/// Formats a table listing of mentorship requests.
pub fn format_mentorships_table(requests: &[MentorshipRequest]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "ID", "Student", "Mentor", "Field", "Requested", "Status",
    ]);

    for request in requests {
        table.add_row(vec![
            short_id(&request.id),
            request.student_name.clone(),
            request.mentor_name.clone(),
            truncate(&request.field, 24),
            request.request_date.format("%Y-%m-%d").to_string(),
            request.status.to_string(),
        ]);
    }

    table.to_string()
}

/// Formats a table listing of donations, masking anonymous donors.
pub fn format_donations_table(donations: &[Donation]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Donor", "Amount", "Category", "Purpose", "Date"]);

    for donation in donations {
        table.add_row(vec![
            short_id(&donation.id),
            donation.display_donor().to_string(),
            format!("{:.2}", donation.amount),
            donation.category.to_string(),
            truncate(&donation.purpose, 32),
            donation.date.format("%Y-%m-%d").to_string(),
        ]);
    }

    table.to_string()
}

/// Formats a table listing of conversations.
pub fn format_conversations_table(conversations: &[Conversation]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Participants", "Last message", "Unread"]);

    for conversation in conversations {
        let participants = format!(
            "{} / {}",
            conversation.participants[0].name, conversation.participants[1].name
        );
        let last = conversation
            .last_message
            .as_ref()
            .map_or_else(|| "-".to_string(), |m| truncate(&m.text, 36));

        table.add_row(vec![
            short_id(&conversation.id),
            participants,
            last,
            conversation.unread.to_string(),
        ]);
    }

    table.to_string()
}

/// Formats a single job posting as Markdown.
pub fn format_job_markdown(job: &Job) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {} at {}\n\n", job.title, job.company));
    out.push_str(&format!(
        "**Location:** {} | **Type:** {} | **Status:** {}\n",
        job.location, job.employment_type, job.status
    ));
    out.push_str(&format!(
        "**Posted:** {} by {}\n",
        job.posted_date.format("%Y-%m-%d"),
        job.posted_by_name
    ));
    out.push_str(&format!("**Applicants:** {}\n\n", job.applicants));
    out.push_str(&format!("{}\n", job.description));

    if !job.requirements.is_empty() {
        out.push_str("\n**Requirements:**\n");
        for requirement in &job.requirements {
            out.push_str(&format!("- {requirement}\n"));
        }
    }

    out
}

/// Formats a single event as Markdown.
pub fn format_event_markdown(event: &Event) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {} ({})\n\n", event.title, event.event_type));
    out.push_str(&format!(
        "**When:** {} {}\n**Where:** {}\n**Status:** {}\n",
        event.date.format("%Y-%m-%d"),
        event.time,
        event.location,
        event.status
    ));

    let capacity = event
        .max_capacity
        .map_or_else(|| "unlimited".to_string(), |cap| cap.to_string());
    out.push_str(&format!(
        "**Registered:** {} / {capacity}\n",
        event.registered
    ));
    out.push_str(&format!("**Organizer:** {}\n\n", event.organizer));
    out.push_str(&format!("{}\n", event.description));

    out
}

/// Formats a conversation thread as Markdown.
pub fn format_conversation_markdown(conversation: &Conversation, messages: &[&Message]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# {} / {}\n\n",
        conversation.participants[0].name, conversation.participants[1].name
    ));
    out.push_str(&format!(
        "**Messages:** {} | **Unread:** {}\n\n---\n\n",
        messages.len(),
        conversation.unread
    ));

    for message in messages {
        out.push_str(&format!(
            "**{}** *{}*\n\n",
            message.sender_name,
            message.timestamp.format("%Y-%m-%d %H:%M")
        ));
        out.push_str(&message.content);
        out.push_str("\n\n---\n\n");
    }

    out
}

/// Formats platform statistics for display.
pub fn format_stats(stats: &PlatformStats) -> String {
    let mut out = format!(
        "{}\n  Members: {} alumni, {} students\n  Jobs: {} open of {} ({} applications)\n  Events: {} upcoming, {} registrations\n  Mentorships: {} pending, {} accepted\n  Messaging: {} conversations, {} messages\n  Donations: {} totalling {}\n  Points in circulation: {}",
        "📊 Platform statistics".bold(),
        stats.alumni_count.to_string().cyan(),
        stats.student_count.to_string().cyan(),
        stats.open_jobs.to_string().green(),
        stats.total_jobs,
        stats.total_applications,
        stats.upcoming_events.to_string().green(),
        stats.total_registrations,
        stats.pending_mentorships.to_string().yellow(),
        stats.accepted_mentorships.to_string().green(),
        stats.conversation_count,
        stats.message_count,
        stats.donation_count.to_string().cyan(),
        format!("{:.2}", stats.donation_total).cyan(),
        stats.total_points.to_string().cyan(),
    );

    if !stats.donations_by_category.is_empty() {
        out.push_str("\n  By category:");
        for (category, total) in &stats.donations_by_category {
            out.push_str(&format!("\n    {category}: {total:.2}"));
        }
    }

    out
}

/// Truncates a string to max length with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    let s = s.lines().next().unwrap_or(s);
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

/// First eight characters of an id, enough to address seeded and generated
/// records alike.
fn short_id(id: &str) -> String {
    id[..8.min(id.len())].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::seed::seeded_store;
    use crate::domain::AppConfig;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world!", 8), "hello...");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("j1"), "j1");
        assert_eq!(short_id("3fa85f64-5717-4562"), "3fa85f64");
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!(
            "table".parse::<OutputFormat>(),
            Ok(OutputFormat::Table)
        ));
        assert!(matches!(
            "json".parse::<OutputFormat>(),
            Ok(OutputFormat::Json)
        ));
        assert!(matches!(
            "md".parse::<OutputFormat>(),
            Ok(OutputFormat::Markdown)
        ));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_jobs_table_lists_all_rows() {
        let store = seeded_store(&AppConfig::default());
        let rendered = format_jobs_table(store.jobs());

        assert!(rendered.contains("Backend Engineer"));
        assert!(rendered.contains("Full-time"));
    }

    #[test]
    fn test_donations_table_masks_anonymous_donor() {
        let store = seeded_store(&AppConfig::default());
        let rendered = format_donations_table(store.donations());

        assert!(rendered.contains("Anonymous"));
        assert!(!rendered.contains("Daniel Okafor"));
    }

    #[test]
    fn test_conversation_markdown_includes_thread() {
        let store = seeded_store(&AppConfig::default());
        let conversation = store.find_conversation("c1").unwrap();
        let messages = store.conversation_messages("c1");

        let rendered = format_conversation_markdown(conversation, &messages);
        assert!(rendered.contains("Priya Nair"));
        assert!(rendered.contains("Thursday 17:00 works"));
    }

    #[test]
    fn test_job_json_round_trips() {
        let store = seeded_store(&AppConfig::default());
        let json = format_json(&store.jobs()).unwrap();
        let parsed: Vec<Job> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), store.jobs().len());
    }
}
