//! CLI interface using clap.
//!
//! Provides command-line arguments and subcommands for the tool.

use clap::{Parser, Subcommand};

use crate::application::OutputFormat;
use crate::domain::Role;

/// alumnilink - browse and drive the engagement platform's sample store.
///
/// Every command starts from a fresh store seeded with the bundled sample
/// dataset; nothing is persisted between runs.
#[derive(Parser, Debug)]
#[command(name = "alumnilink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format: table, json, or markdown.
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Sign in as this email before running the command.
    #[arg(long, global = true)]
    pub actor: Option<String>,

    /// Role to sign in with: alumni, student, or admin.
    #[arg(long, default_value = "student", global = true)]
    pub actor_role: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List job postings.
    Jobs {
        /// Maximum number of postings to show.
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only show postings still accepting applications.
        #[arg(long)]
        open_only: bool,
    },

    /// List events.
    Events {
        /// Maximum number of events to show.
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// List members of the directory.
    Directory {
        /// Which members to list: alumni, students, or all.
        #[arg(short, long, default_value = "all")]
        role: String,

        /// Only show members with this skill (substring match).
        #[arg(short, long)]
        skill: Option<String>,
    },

    /// List mentorship requests.
    Mentorships,

    /// List donation history.
    Donations,

    /// Show a job or event in detail (full or partial id).
    Show { id: String },

    /// Register a new member profile and sign in as it.
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// alumni, student, or admin. Defaults to student.
        #[arg(long)]
        role: Option<String>,

        #[arg(long, default_value = "")]
        organization: String,

        #[arg(long, default_value = "")]
        title: String,

        /// Skill tag (repeatable).
        #[arg(long = "skill")]
        skills: Vec<String>,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        bio: String,
    },

    /// Update fields of a member profile.
    UpdateProfile {
        /// Member id (full or partial).
        #[arg(long)]
        member: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        organization: Option<String>,

        #[arg(long)]
        title: Option<String>,

        /// Replacement skill list (repeatable).
        #[arg(long = "skill")]
        skills: Vec<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        bio: Option<String>,
    },

    /// Post a job as the current actor.
    PostJob {
        #[arg(long)]
        title: String,

        #[arg(long)]
        company: String,

        #[arg(long, default_value = "Remote")]
        location: String,

        /// full-time, part-time, contract, or internship.
        #[arg(long, default_value = "full-time")]
        employment_type: String,

        #[arg(long, default_value = "")]
        description: String,

        /// Requirement line (repeatable).
        #[arg(long = "requirement")]
        requirements: Vec<String>,
    },

    /// Close a job posting to further applications.
    CloseJob {
        /// Job id (full or partial).
        #[arg(long)]
        job: String,
    },

    /// Remove a job posting.
    DeleteJob {
        /// Job id (full or partial).
        #[arg(long)]
        job: String,
    },

    /// Apply to a job as the current actor.
    Apply {
        /// Job id (full or partial).
        #[arg(long)]
        job: String,

        #[arg(long, default_value = "resume.pdf")]
        resume: String,

        #[arg(long, default_value = "")]
        cover_letter: String,
    },

    /// Set the status of a job application.
    ReviewApplication {
        /// Application id (full or partial).
        #[arg(long)]
        application: String,

        /// pending, reviewed, accepted, or rejected.
        #[arg(long)]
        status: String,
    },

    /// Create an event organized by the current actor.
    CreateEvent {
        #[arg(long)]
        title: String,

        /// Event date, e.g. 2026-09-12.
        #[arg(long)]
        date: String,

        #[arg(long, default_value = "18:00 - 20:00")]
        time: String,

        #[arg(long, default_value = "Campus")]
        location: String,

        #[arg(long, default_value = "")]
        description: String,

        /// reunion, webinar, workshop, or networking.
        #[arg(long, default_value = "networking")]
        event_type: String,

        #[arg(long)]
        max_capacity: Option<u32>,
    },

    /// Cancel an event.
    CancelEvent {
        /// Event id (full or partial).
        #[arg(long)]
        event: String,
    },

    /// Remove an event.
    DeleteEvent {
        /// Event id (full or partial).
        #[arg(long)]
        event: String,
    },

    /// Register for an event.
    Register {
        /// Event id (full or partial).
        #[arg(long)]
        event: String,
    },

    /// Request mentorship from an alumni member.
    RequestMentorship {
        /// Mentor member id.
        #[arg(long)]
        mentor: String,

        /// Field of interest.
        #[arg(long)]
        field: String,

        #[arg(long, default_value = "")]
        message: String,
    },

    /// Accept or reject a mentorship request.
    RespondMentorship {
        /// Request id (full or partial).
        #[arg(long)]
        request: String,

        /// accepted or rejected.
        #[arg(long)]
        status: String,
    },

    /// Record a donation by the current actor.
    Donate {
        #[arg(long)]
        amount: f64,

        /// scholarship, infrastructure, research, general, or emergency.
        #[arg(long, default_value = "general")]
        category: String,

        #[arg(long)]
        purpose: String,

        #[arg(long)]
        message: Option<String>,

        #[arg(long, default_value = "card")]
        method: String,

        /// Hide the donor name in listings.
        #[arg(long)]
        anonymous: bool,
    },

    /// Start a conversation with a member and send the first message.
    Send {
        /// Counterpart member id.
        #[arg(long)]
        to: String,

        #[arg(long)]
        message: String,
    },

    /// Show a conversation thread and mark it read.
    Chat {
        /// Conversation id (full or partial).
        conversation_id: String,
    },

    /// Show derived platform statistics.
    Stats,

    /// Export a JSON snapshot of the store.
    Export {
        /// Output file path (stamped file in the exports directory if not
        /// specified).
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the config file and data directories being used.
    Paths,
}

impl Cli {
    /// Parse the output format argument.
    pub fn output_format(&self) -> Result<OutputFormat, String> {
        self.format.parse()
    }

    /// Parse the actor role argument.
    pub fn actor_role(&self) -> Result<Role, String> {
        self.actor_role.parse()
    }
}
