use std::io::{IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use vigil_core::{OutputFormat, SystemDetails, TrackedThreat, VigilConfig};
use vigil_suggest::advisor::LlmAdvisor;
use vigil_suggest::intel::IntelFeed;
use vigil_suggest::{SuggestRequest, SuggestionOrchestrator};
use vigil_triage::{materialize, stats, TriageStore};

#[derive(Parser)]
#[command(
    name = "vigil",
    version,
    about = "AI threat modeling and triage for security operations",
    long_about = "Vigil suggests candidate threats for a described system and tracks their triage.\n\n\
                   Curated threat intelligence is authoritative when available; a language-model\n\
                   advisor fills in when it is not.\n\n\
                   Examples:\n  \
                     vigil analyze 'A web app with a Postgres database'   Analyze a description\n  \
                     cat system.txt | vigil analyze                       Analyze from stdin\n  \
                     vigil analyze --file system.txt --format json        Machine-readable output\n  \
                     vigil init                                           Write a default .vigil.toml\n  \
                     vigil doctor                                         Check setup and environment"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .vigil.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        long_help = "Output format for command results.\n\n\
                       Formats:\n  \
                         text      Human-readable tables and summaries (default)\n  \
                         json      Machine-readable JSON with camelCase keys\n  \
                         markdown  Markdown-formatted output"
    )]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Suggest threats for a system description and show the triage view
    #[command(long_about = "Suggest threats for a system description and show the triage view.\n\n\
        The description is read from the argument, --file, or stdin, and must be\n\
        10-5000 characters. Suggested threats enter a fresh triage session as\n\
        Pending and unassigned.\n\n\
        Examples:\n  vigil analyze 'A mobile banking backend with a database'\n  \
        git show HEAD:docs/architecture.md | vigil analyze --format json")]
    Analyze {
        /// System description (omit to read from --file or stdin)
        description: Option<String>,

        /// Read the description from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Create a .vigil.toml with default configuration
    Init,
    /// Check your Vigil setup and environment
    #[command(long_about = "Check your Vigil setup and environment.\n\n\
        Verifies the configuration file, advisor API key, and analyst roster.")]
    Doctor,
}

/// Everything the analyze subcommand renders: the triage list and the
/// derived dashboard for one completed analysis.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisReport {
    threats: Vec<TrackedThreat>,
    dashboard: stats::Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VigilConfig::from_file(path).into_diagnostic()?,
        None => {
            let default_path = std::path::Path::new(".vigil.toml");
            if default_path.exists() {
                VigilConfig::from_file(default_path).into_diagnostic()?
            } else {
                VigilConfig::default()
            }
        }
    };

    if cli.verbose {
        eprintln!("format: {}", cli.format);
        eprintln!(
            "advisor: {} ({}) | analysts: {}",
            config.llm.provider,
            config.llm.model,
            config.triage.analysts.join(", "),
        );
    }

    match cli.command {
        None => {
            println!("vigil {}", env!("CARGO_PKG_VERSION"));
            println!("AI threat modeling and triage for security operations.\n");
            println!("  analyze   Suggest threats for a system description");
            println!("  init      Create a .vigil.toml with default configuration");
            println!("  doctor    Check your setup and environment");
            println!("\nRun 'vigil --help' for details.");
        }
        Some(Command::Analyze {
            ref description,
            ref file,
        }) => {
            let raw = read_description_input(description, file)?;
            let details = match SystemDetails::new(raw) {
                Ok(details) => details,
                Err(e) => miette::bail!(miette::miette!(
                    help = "Describe the system's architecture, technologies, data flow, and user types.",
                    "{e}"
                )),
            };

            let advisor = LlmAdvisor::new(&config.llm).into_diagnostic()?;
            let orchestrator =
                SuggestionOrchestrator::new(Box::new(IntelFeed::new()), Box::new(advisor));

            let is_tty = std::io::stderr().is_terminal();
            let spinner = if is_tty {
                let pb = indicatif::ProgressBar::new_spinner();
                pb.set_style(
                    indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                        .unwrap(),
                );
                pb.set_message("Analyzing system for threats...");
                pb.enable_steady_tick(std::time::Duration::from_millis(120));
                Some(pb)
            } else {
                None
            };

            let request = SuggestRequest {
                system_details: details,
            };
            let response = orchestrator
                .suggest_threats(&request)
                .await
                .inspect_err(|_e| {
                    if let Some(pb) = &spinner {
                        pb.finish_with_message("Failed");
                    }
                })
                .into_diagnostic()?;

            if let Some(pb) = spinner {
                pb.finish_with_message(format!(
                    "Identified {} potential threats",
                    response.threats.len()
                ));
            }

            let mut store = TriageStore::new();
            store.replace_all(materialize(response.threats));

            let report = AnalysisReport {
                dashboard: stats::dashboard(store.threats(), &config.triage),
                threats: store.threats().to_vec(),
            };

            match cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&report).into_diagnostic()?
                    );
                }
                OutputFormat::Markdown => print_markdown_report(&report),
                OutputFormat::Text => print_text_report(&report),
            }
        }
        Some(Command::Init) => {
            let path = std::path::Path::new(".vigil.toml");
            if path.exists() {
                miette::bail!(".vigil.toml already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created .vigil.toml with default configuration");
        }
        Some(Command::Doctor) => {
            run_doctor(&config);
        }
    }

    Ok(())
}

fn read_description_input(arg: &Option<String>, file: &Option<PathBuf>) -> Result<String> {
    if let Some(text) = arg {
        return Ok(text.clone());
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path).into_diagnostic();
    }
    if std::io::stdin().is_terminal() {
        miette::bail!(miette::miette!(
            help = "Pass a description, use --file <path>, or pipe text to vigil analyze",
            "No system description provided"
        ));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .into_diagnostic()?;
    Ok(buffer.trim().to_string())
}

fn print_text_report(report: &AnalysisReport) {
    println!("Threat Analysis");
    println!("===============");
    let s = &report.dashboard.summary;
    println!(
        "Total: {} | Pending: {} | Triaged: {} | In Progress: {} | Resolved: {}\n",
        s.total, s.pending, s.triaged, s.in_progress, s.resolved,
    );

    for t in &report.threats {
        println!("[{}] {}", t.status, t.name);
        println!("  {}", t.description);
        println!(
            "  id: {} | assignee: {}\n",
            t.id,
            t.assignee.as_deref().unwrap_or("-")
        );
    }

    println!("Assignee workload:");
    for entry in &report.dashboard.assignee_distribution {
        println!("  {:<12} {}", entry.category, entry.count);
    }
}

fn print_markdown_report(report: &AnalysisReport) {
    println!("# Threat Analysis\n");
    let s = &report.dashboard.summary;
    println!(
        "**Total:** {} | **Pending:** {} | **Triaged:** {} | **In Progress:** {} | **Resolved:** {}\n",
        s.total, s.pending, s.triaged, s.in_progress, s.resolved,
    );

    for t in &report.threats {
        println!("## {} ({})\n", t.name, t.status);
        println!("{}\n", t.description);
    }

    println!("| Assignee | Threats |");
    println!("|----------|---------|");
    for entry in &report.dashboard.assignee_distribution {
        println!("| {} | {} |", entry.category, entry.count);
    }
}

fn run_doctor(config: &VigilConfig) {
    println!("Vigil doctor");
    println!("============");

    let config_path = std::path::Path::new(".vigil.toml");
    if config_path.exists() {
        println!("[ok] .vigil.toml found");
    } else {
        println!("[--] .vigil.toml not found (using defaults; run 'vigil init')");
    }

    let llm_env_var = match config.llm.provider.as_str() {
        "anthropic" => "ANTHROPIC_API_KEY",
        "gemini" => "GEMINI_API_KEY",
        _ => "OPENAI_API_KEY",
    };
    if config.llm.api_key.is_some() || std::env::var(llm_env_var).is_ok() {
        println!(
            "[ok] advisor credentials present for provider '{}'",
            config.llm.provider
        );
    } else {
        println!(
            "[!!] no API key for provider '{}': set {llm_env_var} or add api_key under [llm]",
            config.llm.provider
        );
        println!("     (the advisor only runs when threat intelligence is unavailable)");
    }

    if config.triage.analysts.is_empty() {
        println!("[!!] analyst roster is empty: add analysts under [triage]");
    } else {
        println!(
            "[ok] {} analysts on the roster (unassigned sentinel: '{}')",
            config.triage.analysts.len(),
            config.triage.unassigned_label
        );
    }
}

const DEFAULT_CONFIG: &str = r#"# Vigil Configuration
# See https://github.com/vigil-sec/vigil for documentation.

[llm]
# Advisor provider: any OpenAI-compatible chat completions API.
provider = "openai"
model = "gpt-4o"
# api_key = "sk-..."           # or set OPENAI_API_KEY
# base_url = "http://localhost:11434"   # e.g. for Ollama

[triage]
# Analysts available for assignment, in display order.
analysts = ["Alice", "Bob", "Charlie", "Dana"]
# Label shown for unassigned threats. Selecting it clears the assignee.
unassigned_label = "Unassigned"
"#;
