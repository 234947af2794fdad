//! Domain layer - core business logic and types.
//!
//! This layer contains pure domain models, configuration, and error types
//! without any external dependencies (IO, rendering, etc.).

pub mod engagement;
pub mod error;
pub mod models;
pub mod settings;

pub use engagement::{
    Application, ApplicationStatus, Conversation, Donation, DonationCategory, LastMessage,
    MentorshipRequest, MentorshipStatus, Message, NewApplication, NewDonation,
    NewMentorshipRequest, Participant, PlatformStats,
};
pub use error::{AppError, Result};
pub use models::{
    initials, Activity, EducationEntry, EmploymentType, Event, EventPatch, EventStatus, EventType,
    ExperienceEntry, Job, JobPatch, JobStatus, NewEvent, NewJob, NewProfile, Role, SocialLinks,
    User, UserPatch,
};
pub use settings::{AppConfig, GamificationConfig, PathConfig, SeedConfig};
