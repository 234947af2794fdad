//! alumnilink - browse and drive an alumni-student engagement platform.
//!
//! All state lives in an in-memory store seeded with a bundled sample
//! dataset on every run; commands read collections or apply mutations and
//! print the result. Nothing is persisted between invocations.
//!
//! Quick start:
//!   alumnilink jobs                        # browse the job board
//!   alumnilink show j1                     # job or event detail
//!   alumnilink --actor priya.nair@example.com apply --job j1
//!   alumnilink donate --amount 50 --purpose "Scholarship fund"
//!   alumnilink stats                       # derived platform statistics

mod application;
mod cli;
mod domain;
mod infrastructure;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    collect_stats, format_conversation_markdown, format_conversations_table,
    format_donations_table, format_event_markdown, format_events_table, format_job_markdown,
    format_jobs_table, format_json, format_members_table, format_mentorships_table, format_stats,
    seeded_store, stats::applications_with_status, OutputFormat, Store,
};
use cli::{Cli, Commands};
use domain::{
    AppConfig, AppError, ApplicationStatus, Conversation, DonationCategory, EmploymentType,
    EventPatch, EventStatus, EventType, JobPatch, JobStatus, MentorshipStatus, NewApplication,
    NewDonation, NewEvent, NewJob, NewMentorshipRequest, NewProfile, Role, User, UserPatch,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(cli: Cli) -> domain::Result<()> {
    let format = cli
        .output_format()
        .map_err(|e| AppError::Config { message: e })?;

    let config = infrastructure::load_config()?;
    let mut store = seeded_store(&config);

    if let Some(email) = cli.actor.clone() {
        let role = cli
            .actor_role()
            .map_err(|e| AppError::Config { message: e })?;
        store.authenticate(&email, role);
    }

    match cli.command {
        Commands::Jobs { limit, open_only } => {
            cmd_jobs(&store, limit, open_only, format)?;
        }
        Commands::Events { limit } => {
            cmd_events(&store, limit, format)?;
        }
        Commands::Directory { role, skill } => {
            cmd_directory(&store, &role, skill.as_deref(), format)?;
        }
        Commands::Mentorships => {
            cmd_mentorships(&store, format)?;
        }
        Commands::Donations => {
            cmd_donations(&store, format)?;
        }
        Commands::Show { id } => {
            cmd_show(&store, &id, format)?;
        }
        Commands::Signup {
            name,
            email,
            role,
            organization,
            title,
            skills,
            location,
            bio,
        } => {
            let role = role.as_deref().map(parse_arg::<Role>).transpose()?;
            cmd_signup(
                &mut store,
                NewProfile {
                    name,
                    email,
                    role,
                    organization,
                    title,
                    skills,
                    location,
                    bio,
                },
            );
        }
        Commands::UpdateProfile {
            member,
            name,
            organization,
            title,
            skills,
            location,
            bio,
        } => {
            let patch = UserPatch {
                name,
                organization,
                title,
                skills: if skills.is_empty() { None } else { Some(skills) },
                location,
                bio,
                ..UserPatch::default()
            };
            cmd_update_profile(&mut store, &member, patch)?;
        }
        Commands::PostJob {
            title,
            company,
            location,
            employment_type,
            description,
            requirements,
        } => {
            cmd_post_job(
                &mut store,
                NewJob {
                    title,
                    company,
                    location,
                    employment_type: parse_arg::<EmploymentType>(&employment_type)?,
                    description,
                    requirements,
                },
            );
        }
        Commands::CloseJob { job } => {
            cmd_close_job(&mut store, &job)?;
        }
        Commands::DeleteJob { job } => {
            cmd_delete_job(&mut store, &job)?;
        }
        Commands::Apply {
            job,
            resume,
            cover_letter,
        } => {
            cmd_apply(&mut store, &job, resume, cover_letter)?;
        }
        Commands::ReviewApplication {
            application,
            status,
        } => {
            let status = parse_arg::<ApplicationStatus>(&status)?;
            cmd_review_application(&mut store, &application, status)?;
        }
        Commands::CreateEvent {
            title,
            date,
            time,
            location,
            description,
            event_type,
            max_capacity,
        } => {
            let date = chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
                AppError::Config {
                    message: format!("Invalid date '{date}': {e}. Use YYYY-MM-DD"),
                }
            })?;
            cmd_create_event(
                &mut store,
                NewEvent {
                    title,
                    date,
                    time,
                    location,
                    description,
                    event_type: parse_arg::<EventType>(&event_type)?,
                    max_capacity,
                },
            );
        }
        Commands::CancelEvent { event } => {
            cmd_cancel_event(&mut store, &event)?;
        }
        Commands::DeleteEvent { event } => {
            cmd_delete_event(&mut store, &event)?;
        }
        Commands::Register { event } => {
            cmd_register(&mut store, &event)?;
        }
        Commands::RequestMentorship {
            mentor,
            field,
            message,
        } => {
            cmd_request_mentorship(&mut store, &mentor, field, message)?;
        }
        Commands::RespondMentorship { request, status } => {
            let status = parse_arg::<MentorshipStatus>(&status)?;
            cmd_respond_mentorship(&mut store, &request, status)?;
        }
        Commands::Donate {
            amount,
            category,
            purpose,
            message,
            method,
            anonymous,
        } => {
            cmd_donate(
                &mut store,
                NewDonation {
                    amount,
                    purpose,
                    category: parse_arg::<DonationCategory>(&category)?,
                    message,
                    payment_method: method,
                    anonymous,
                },
            );
        }
        Commands::Send { to, message } => {
            cmd_send(&mut store, &to, &message)?;
        }
        Commands::Chat { conversation_id } => {
            cmd_chat(&mut store, &conversation_id, format)?;
        }
        Commands::Stats => {
            cmd_stats(&store, format)?;
        }
        Commands::Export { output } => {
            cmd_export(&store, &config, output.as_deref())?;
        }
        Commands::Paths => {
            cmd_paths(&config)?;
        }
    }

    Ok(())
}

/// Parse a FromStr argument into a config error on failure.
fn parse_arg<T: std::str::FromStr<Err = String>>(value: &str) -> domain::Result<T> {
    value.parse().map_err(|e| AppError::Config { message: e })
}

/// List job postings.
fn cmd_jobs(
    store: &Store,
    limit: usize,
    open_only: bool,
    format: OutputFormat,
) -> domain::Result<()> {
    let mut jobs: Vec<_> = store
        .jobs()
        .iter()
        .filter(|j| !open_only || j.is_open())
        .cloned()
        .collect();
    jobs.sort_by(|a, b| b.posted_date.cmp(&a.posted_date));
    jobs.truncate(limit);

    match format {
        OutputFormat::Json => println!("{}", format_json(&jobs).map_err(AppError::json)?),
        _ => {
            println!("{}", format_jobs_table(&jobs));
            println!("{} posting(s)", jobs.len());
        }
    }

    Ok(())
}

/// List events.
fn cmd_events(store: &Store, limit: usize, format: OutputFormat) -> domain::Result<()> {
    let mut events: Vec<_> = store.events().to_vec();
    events.sort_by(|a, b| a.date.cmp(&b.date));
    events.truncate(limit);

    match format {
        OutputFormat::Json => println!("{}", format_json(&events).map_err(AppError::json)?),
        _ => println!("{}", format_events_table(&events)),
    }

    Ok(())
}

/// List directory members, optionally filtered by role and skill.
fn cmd_directory(
    store: &Store,
    role: &str,
    skill: Option<&str>,
    format: OutputFormat,
) -> domain::Result<()> {
    let members: Vec<User> = match role.to_lowercase().as_str() {
        "alumni" => store.alumni().to_vec(),
        "students" | "student" => store.students().to_vec(),
        "all" => store
            .alumni()
            .iter()
            .chain(store.students().iter())
            .cloned()
            .collect(),
        other => {
            return Err(AppError::Config {
                message: format!("Unknown directory role: {other}. Use: alumni, students, all"),
            })
        }
    };

    let skill_lower = skill.map(str::to_lowercase);
    let members: Vec<User> = members
        .into_iter()
        .filter(|m| {
            skill_lower
                .as_ref()
                .is_none_or(|needle| m.skills.iter().any(|s| s.to_lowercase().contains(needle)))
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", format_json(&members).map_err(AppError::json)?),
        _ => println!("{}", format_members_table(&members)),
    }

    Ok(())
}

/// List mentorship requests.
fn cmd_mentorships(store: &Store, format: OutputFormat) -> domain::Result<()> {
    match format {
        OutputFormat::Json => println!(
            "{}",
            format_json(&store.mentorship_requests()).map_err(AppError::json)?
        ),
        _ => println!("{}", format_mentorships_table(store.mentorship_requests())),
    }

    Ok(())
}

/// List donation history.
fn cmd_donations(store: &Store, format: OutputFormat) -> domain::Result<()> {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                format_json(&store.donations()).map_err(AppError::json)?
            );
        }
        _ => {
            println!("{}", format_donations_table(store.donations()));
            let total: f64 = store.donations().iter().map(|d| d.amount).sum();
            println!("Total: {total:.2}");
        }
    }

    Ok(())
}

/// Show a job or event in detail by full or partial id.
fn cmd_show(store: &Store, id: &str, format: OutputFormat) -> domain::Result<()> {
    if let Some(job) = find_job_partial(store, id) {
        match format {
            OutputFormat::Json => println!("{}", format_json(job).map_err(AppError::json)?),
            _ => println!("{}", format_job_markdown(job)),
        }
        return Ok(());
    }

    if let Some(event) = find_event_partial(store, id) {
        match format {
            OutputFormat::Json => println!("{}", format_json(event).map_err(AppError::json)?),
            _ => println!("{}", format_event_markdown(event)),
        }
        return Ok(());
    }

    Err(AppError::invalid_data(format!(
        "No job or event matches: {id}"
    )))
}

/// Register a new member profile and sign in as it.
fn cmd_signup(store: &mut Store, profile: NewProfile) {
    let id = store.register_actor(profile);

    println!("{} Member registered ({})", "✓".green().bold(), id.cyan());

    match store.find_member(&id) {
        Some(member) => {
            println!();
            println!("{}", format_members_table(std::slice::from_ref(member)));
        }
        // Admin registrations only become the session actor.
        None => println!("  Signed in as admin; not listed in the directory"),
    }
}

/// Update fields of a member profile.
fn cmd_update_profile(
    store: &mut Store,
    member_query: &str,
    patch: UserPatch,
) -> domain::Result<()> {
    let member = find_member_partial(store, member_query)
        .ok_or_else(|| AppError::invalid_data(format!("Member not found: {member_query}")))?;
    let member_id = member.id.clone();

    store.upsert_user_fields(&member_id, patch);

    if let Some(member) = store.find_member(&member_id) {
        println!("{} Profile updated", "✓".green().bold());
        println!();
        println!("{}", format_members_table(std::slice::from_ref(member)));
    }

    Ok(())
}

/// Post a job as the current actor and show the resulting posting.
fn cmd_post_job(store: &mut Store, new: NewJob) {
    let id = store.create_job(new);

    if let Some(job) = store.find_job(&id) {
        println!("{} Job posted ({})", "✓".green().bold(), id.cyan());
        println!();
        println!("{}", format_job_markdown(job));
    }
    println!("Board now lists {} posting(s)", store.jobs().len());
}

/// Close a job posting to further applications.
fn cmd_close_job(store: &mut Store, job_query: &str) -> domain::Result<()> {
    let job = find_job_partial(store, job_query)
        .ok_or_else(|| AppError::invalid_data(format!("Job not found: {job_query}")))?;
    let job_id = job.id.clone();
    let title = job.title.clone();

    store.update_job(
        &job_id,
        JobPatch {
            status: Some(JobStatus::Closed),
            ..JobPatch::default()
        },
    );

    println!("{} Closed {}", "✓".green().bold(), title.cyan());
    Ok(())
}

/// Remove a job posting.
fn cmd_delete_job(store: &mut Store, job_query: &str) -> domain::Result<()> {
    let job = find_job_partial(store, job_query)
        .ok_or_else(|| AppError::invalid_data(format!("Job not found: {job_query}")))?;
    let job_id = job.id.clone();
    let title = job.title.clone();

    store.delete_job(&job_id);

    println!(
        "{} Deleted {}; board now lists {} posting(s)",
        "✓".green().bold(),
        title.cyan(),
        store.jobs().len()
    );
    Ok(())
}

/// Apply to a job as the current actor.
fn cmd_apply(
    store: &mut Store,
    job_query: &str,
    resume: String,
    cover_letter: String,
) -> domain::Result<()> {
    let job = find_job_partial(store, job_query)
        .ok_or_else(|| AppError::invalid_data(format!("Job not found: {job_query}")))?;
    let job_id = job.id.clone();
    let title = job.title.clone();

    store.create_application(NewApplication {
        job_id: job_id.clone(),
        resume,
        cover_letter,
    });

    let applicants = store.find_job(&job_id).map_or(0, |j| j.applicants);
    println!(
        "{} Applied to {}, now {} applicant(s)",
        "✓".green().bold(),
        title.cyan(),
        applicants
    );

    Ok(())
}

/// Set the status of a job application.
fn cmd_review_application(
    store: &mut Store,
    application_query: &str,
    status: ApplicationStatus,
) -> domain::Result<()> {
    let application = store
        .applications()
        .iter()
        .find(|a| a.id.starts_with(application_query) || a.id.contains(application_query))
        .ok_or_else(|| {
            AppError::invalid_data(format!("Application not found: {application_query}"))
        })?;
    let application_id = application.id.clone();
    let student_name = application.student_name.clone();

    store.set_application_status(&application_id, status);

    println!(
        "{} Application from {} marked {}",
        "✓".green().bold(),
        student_name.cyan(),
        status
    );
    Ok(())
}

/// Create an event organized by the current actor.
fn cmd_create_event(store: &mut Store, new: NewEvent) {
    let id = store.create_event(new);

    if let Some(event) = store.find_event(&id) {
        println!("{} Event created ({})", "✓".green().bold(), id.cyan());
        println!();
        println!("{}", format_event_markdown(event));
    }
}

/// Cancel an event.
fn cmd_cancel_event(store: &mut Store, event_query: &str) -> domain::Result<()> {
    let event = find_event_partial(store, event_query)
        .ok_or_else(|| AppError::invalid_data(format!("Event not found: {event_query}")))?;
    let event_id = event.id.clone();
    let title = event.title.clone();

    store.update_event(
        &event_id,
        EventPatch {
            status: Some(EventStatus::Cancelled),
            ..EventPatch::default()
        },
    );

    println!("{} Cancelled {}", "✓".green().bold(), title.cyan());
    Ok(())
}

/// Remove an event.
fn cmd_delete_event(store: &mut Store, event_query: &str) -> domain::Result<()> {
    let event = find_event_partial(store, event_query)
        .ok_or_else(|| AppError::invalid_data(format!("Event not found: {event_query}")))?;
    let event_id = event.id.clone();
    let title = event.title.clone();

    store.delete_event(&event_id);

    println!(
        "{} Deleted {}; {} event(s) remain",
        "✓".green().bold(),
        title.cyan(),
        store.events().len()
    );
    Ok(())
}

/// Register for an event.
fn cmd_register(store: &mut Store, event_query: &str) -> domain::Result<()> {
    let event = find_event_partial(store, event_query)
        .ok_or_else(|| AppError::invalid_data(format!("Event not found: {event_query}")))?;
    let event_id = event.id.clone();

    store.register_for_event(&event_id);

    if let Some(event) = store.find_event(&event_id) {
        let capacity = event
            .max_capacity
            .map_or_else(|| "unlimited".to_string(), |cap| cap.to_string());
        println!(
            "{} Registered for {} ({} / {capacity})",
            "✓".green().bold(),
            event.title.cyan(),
            event.registered
        );
        if event.is_full() {
            println!("  Note: registrations now meet or exceed the announced capacity");
        }
    }

    Ok(())
}

/// Request mentorship from an alumni member.
fn cmd_request_mentorship(
    store: &mut Store,
    mentor_query: &str,
    field: String,
    message: String,
) -> domain::Result<()> {
    let mentor = find_member_partial(store, mentor_query)
        .ok_or_else(|| AppError::invalid_data(format!("Member not found: {mentor_query}")))?;
    let mentor_id = mentor.id.clone();
    let mentor_name = mentor.name.clone();

    let id = store.create_mentorship_request(NewMentorshipRequest {
        mentor_id,
        mentor_name: mentor_name.clone(),
        field,
        message,
    });

    println!(
        "{} Mentorship requested from {} ({})",
        "✓".green().bold(),
        mentor_name.cyan(),
        id
    );

    Ok(())
}

/// Accept or reject a mentorship request.
fn cmd_respond_mentorship(
    store: &mut Store,
    request_query: &str,
    status: MentorshipStatus,
) -> domain::Result<()> {
    let request = store
        .mentorship_requests()
        .iter()
        .find(|r| r.id.starts_with(request_query) || r.id.contains(request_query))
        .ok_or_else(|| AppError::invalid_data(format!("Request not found: {request_query}")))?;
    let request_id = request.id.clone();
    let student_name = request.student_name.clone();

    store.set_mentorship_status(&request_id, status);

    println!(
        "{} Request from {} marked {}",
        "✓".green().bold(),
        student_name.cyan(),
        status
    );
    Ok(())
}

/// Record a donation and show the donor's gamification update.
fn cmd_donate(store: &mut Store, new: NewDonation) {
    let donor_id = store.current_actor().map(|a| a.id.clone());
    let amount = new.amount;
    let category = new.category;

    let id = store.record_donation(new);

    println!(
        "{} Donation of {:.2} recorded for {} ({})",
        "✓".green().bold(),
        amount,
        category.to_string().cyan(),
        id
    );

    match donor_id.and_then(|donor_id| store.find_member(&donor_id)) {
        Some(donor) => {
            println!(
                "  {} now has {} points and badges: {}",
                donor.name,
                donor.points.to_string().cyan(),
                donor.badges.join(", ")
            );
        }
        None => {
            println!("  Points apply to registered members only; sign in with --actor");
        }
    }
}

/// Start a conversation with a member and send the first message.
fn cmd_send(store: &mut Store, to_query: &str, message: &str) -> domain::Result<()> {
    let counterpart = find_member_partial(store, to_query)
        .ok_or_else(|| AppError::invalid_data(format!("Member not found: {to_query}")))?;
    let counterpart_id = counterpart.id.clone();
    let counterpart_name = counterpart.name.clone();

    let conversation_id = store.create_conversation(&counterpart_id);
    store.send_message(&conversation_id, message);

    println!(
        "{} Message sent to {} (conversation {})",
        "✓".green().bold(),
        counterpart_name.cyan(),
        conversation_id
    );
    println!();

    let threads: Vec<Conversation> = store
        .conversations()
        .iter()
        .filter(|c| c.involves(&counterpart_id))
        .cloned()
        .collect();
    println!("{}", format_conversations_table(&threads));

    Ok(())
}

/// Show a conversation thread and mark it read.
fn cmd_chat(store: &mut Store, id: &str, format: OutputFormat) -> domain::Result<()> {
    let conversation = store
        .conversations()
        .iter()
        .find(|c| c.id.starts_with(id) || c.id.contains(id))
        .cloned()
        .ok_or_else(|| AppError::invalid_data(format!("Conversation not found: {id}")))?;

    if let Some(actor) = store.current_actor() {
        if let Some(other) = conversation.counterpart(&actor.id) {
            println!("Chat with {}", other.name.cyan());
            println!();
        }
    }

    let messages = store.conversation_messages(&conversation.id);

    match format {
        OutputFormat::Json => println!("{}", format_json(&messages).map_err(AppError::json)?),
        _ => println!("{}", format_conversation_markdown(&conversation, &messages)),
    }

    // Viewing the thread counts as reading it.
    store.mark_read(&conversation.id);

    Ok(())
}

/// Show derived platform statistics.
fn cmd_stats(store: &Store, format: OutputFormat) -> domain::Result<()> {
    let stats = collect_stats(store);

    match format {
        OutputFormat::Json => println!("{}", format_json(&stats).map_err(AppError::json)?),
        _ => {
            println!("{}", format_stats(&stats));
            println!(
                "  Applications awaiting review: {}",
                applications_with_status(store, ApplicationStatus::Pending)
            );
        }
    }

    Ok(())
}

/// Export a JSON snapshot of the store.
fn cmd_export(store: &Store, config: &AppConfig, output: Option<&str>) -> domain::Result<()> {
    let written = infrastructure::export_snapshot(store, config, output.map(Path::new))?;

    println!(
        "{} Exported snapshot to {}",
        "✓".green().bold(),
        written.display()
    );

    Ok(())
}

/// Show the config file and data directories being used, creating the
/// default config on first run.
fn cmd_paths(config: &AppConfig) -> domain::Result<()> {
    infrastructure::ensure_config_exists()?;

    println!("{}", "📂 alumnilink paths".bold());
    println!();
    println!(
        "  config:  {}",
        infrastructure::config_file_path().display()
    );
    println!("  data:    {}", config.data_dir().display());
    println!("  exports: {}", config.exports_dir().display());

    Ok(())
}

/// Find a job by full or partial id.
fn find_job_partial<'a>(store: &'a Store, id: &str) -> Option<&'a domain::Job> {
    store
        .jobs()
        .iter()
        .find(|j| j.id.starts_with(id) || j.id.contains(id))
}

/// Find an event by full or partial id.
fn find_event_partial<'a>(store: &'a Store, id: &str) -> Option<&'a domain::Event> {
    store
        .events()
        .iter()
        .find(|e| e.id.starts_with(id) || e.id.contains(id))
}

/// Find a member by full or partial id across both collections.
fn find_member_partial<'a>(store: &'a Store, id: &str) -> Option<&'a User> {
    store
        .alumni()
        .iter()
        .chain(store.students().iter())
        .find(|u| u.id.starts_with(id) || u.id.contains(id))
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
