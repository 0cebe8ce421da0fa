//! Intake binary entry point
//!
//! Drives the intake workflow over stdin: start, upload a transcript,
//! review the parsed courses, toggle preferences, and print the ranked
//! recommendations the backend returns.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use intake::{
    dashboard, ClientConfig, HttpBackendClient, Intake, IntakeResult, Session, Stage,
    TranscriptFile,
};
use shared::{Department, Preferences};

#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(about = "Course advisor intake workflow client")]
struct Args {
    /// Scoring backend base URL (overrides ADVISOR_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides ADVISOR_REQUEST_TIMEOUT_SECS)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let mut config = ClientConfig::from_env()?;
    if let Some(url) = args.api_url {
        config.api_base_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        config.request_timeout = Duration::from_secs(secs);
    }

    let backend = HttpBackendClient::new(&config)?;
    let mut flow = Intake::new(backend);
    let mut prefs = Preferences::default();

    println!("Course advisor intake (backend: {})", config.api_base_url);
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n[{:?}] > ", flow.session().stage());
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.trim().splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        let outcome = match command {
            "" => Ok(()),
            "help" => {
                print_help();
                Ok(())
            }
            "quit" | "exit" => break,
            "reset" => {
                flow.session_mut().reset();
                Ok(())
            }
            "back" => flow.session_mut().back(),
            "start" => flow.session_mut().start(),
            "file" => attach_file(flow.session_mut(), argument),
            "remove" => flow.session_mut().remove_transcript(),
            "dept" => set_department(flow.session_mut(), argument),
            "submit" => {
                let result = flow.submit_transcript().await;
                if result.is_ok() {
                    print_courses(flow.session());
                }
                result
            }
            "courses" => {
                print_courses(flow.session());
                Ok(())
            }
            "continue" => flow.session_mut().continue_to_preferences(),
            "prefs" => {
                print_prefs(&prefs);
                Ok(())
            }
            "toggle" => {
                if prefs.toggle(argument) {
                    print_prefs(&prefs);
                } else {
                    println!("Unknown flag: {argument}");
                }
                Ok(())
            }
            "generate" => {
                let result = flow.submit_preferences(prefs.clone()).await;
                if result.is_ok() {
                    print_results(flow.session());
                }
                result
            }
            "results" => {
                print_results(flow.session());
                Ok(())
            }
            other => {
                println!("Unknown command: {other} (try 'help')");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

fn attach_file(session: &mut Session, argument: &str) -> IntakeResult<()> {
    if argument.is_empty() {
        println!("Usage: file <path-to-transcript.pdf>");
        return Ok(());
    }
    let file = TranscriptFile::from_path(Path::new(argument))?;
    session.attach_transcript(file)?;
    println!("Transcript loaded. 'submit' to parse it.");
    Ok(())
}

fn set_department(session: &mut Session, argument: &str) -> IntakeResult<()> {
    match Department::from_code(argument) {
        Some(department) => {
            session.set_department(department)?;
            println!("Department: {}", department.label());
        }
        None => println!("Usage: dept <CE|CSE>"),
    }
    Ok(())
}

fn print_help() {
    println!("Commands by stage:");
    println!("  Welcome:     start");
    println!("  Upload:      file <path> | remove | dept <CE|CSE> | submit");
    println!("  Review:      courses | continue");
    println!("  Preferences: prefs | toggle <flag> | generate");
    println!("  Results:     results");
    println!("  Anywhere:    back | reset | help | quit");
}

fn print_courses(session: &Session) {
    let courses = session.completed_courses();
    if courses.is_empty() {
        println!("No completed courses found on the transcript.");
        return;
    }
    println!("Completed courses ({}):", courses.len());
    for course in courses {
        println!("  {course}");
    }
}

fn print_prefs(prefs: &Preferences) {
    println!("Preferences (toggle <flag> to change):");
    for (name, enabled) in prefs.flags() {
        println!("  [{}] {name}", if enabled { "x" } else { " " });
    }
}

fn print_results(session: &Session) {
    if session.stage() != Stage::Results {
        println!("No recommendations yet. Finish the flow with 'generate'.");
        return;
    }

    let groups = session.recommendations();
    let summary = dashboard::summarize(groups);
    println!(
        "{} classes, {} professor matches",
        summary.visible_classes, summary.total_professors
    );
    if let Some(avg) = summary.average_match_score {
        println!("Average match score: {avg:.1}%");
    }
    if let Some(avg) = summary.average_rating {
        println!("Average rating: {avg:.1}/5");
    }

    for group in dashboard::visible_groups(groups) {
        println!("\n{} | {}", group.course_code, group.course_name);
        for (index, prof) in group.professors.iter().enumerate() {
            let marker = if dashboard::is_top_match(index) {
                " (top match)"
            } else {
                ""
            };
            let rating = if prof.is_rated() {
                format!("{:.1}/5", prof.rating)
            } else {
                "unrated".to_string()
            };
            println!(
                "  {}. {}{} | {:.0}% match | {} | {}",
                index + 1,
                prof.name,
                marker,
                prof.match_score,
                rating,
                prof.difficulty
            );
            let tags = dashboard::display_tags(prof);
            if !tags.is_empty() {
                println!("     {}", tags.join(", "));
            }
        }
    }
}
