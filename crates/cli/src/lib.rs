use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use roadmap_sectionizer::{extract_steps, AnalysisReport, Roadmap, RoadmapStep};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod render;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(about = "Sectionize AI-generated study roadmaps", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the steps found in a roadmap document
    Steps(StepsArgs),

    /// Render a roadmap as a text timeline
    Show(ShowArgs),
}

#[derive(Args)]
struct StepsArgs {
    /// Roadmap markdown file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Treat the input as an analysis report and sectionize its roadmap field
    #[arg(long)]
    report: bool,

    /// Output JSON format
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pretty: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Roadmap markdown file (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Treat the input as an analysis report and sectionize its roadmap field
    #[arg(long)]
    report: bool,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Auto-enable quiet mode when --json is used (to keep stdout clean for JSON parsing)
    let json_output = match &cli.command {
        Commands::Steps(args) => args.json,
        Commands::Show(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Steps(args) => run_steps(args),
        Commands::Show(args) => run_show(args),
    }
}

/// List extracted steps, as text lines or JSON
fn run_steps(args: StepsArgs) -> Result<()> {
    let roadmap = read_roadmap(args.file.as_deref(), args.report)?;
    let steps: Vec<RoadmapStep> = extract_steps(&roadmap).collect();

    if args.json {
        let payload = if args.pretty {
            serde_json::to_string_pretty(&steps)?
        } else {
            serde_json::to_string(&steps)?
        };
        print_stdout(&payload)?;
        return Ok(());
    }

    if steps.is_empty() {
        eprintln!("No steps found; the document renders verbatim");
        return Ok(());
    }
    for step in &steps {
        print_stdout(&format!("Step {}: {}", step.number, step.title))?;
    }
    log::info!("listed {} steps", steps.len());
    Ok(())
}

/// Render the roadmap timeline, falling back to the verbatim document
fn run_show(args: ShowArgs) -> Result<()> {
    let roadmap = read_roadmap(args.file.as_deref(), args.report)?;
    print_stdout(&render::render_roadmap(&Roadmap::parse(&roadmap)))?;
    Ok(())
}

/// Load the roadmap text, unwrapping the report envelope when asked.
///
/// Empty input is not an error: it sectionizes to zero steps downstream.
fn read_roadmap(file: Option<&Path>, report: bool) -> Result<String> {
    let raw = read_input(file)?;
    if !report {
        return Ok(raw);
    }
    let envelope = AnalysisReport::from_json_str(&raw).context("Invalid analysis report")?;
    log::debug!("report generated at {}", envelope.timestamp);
    Ok(envelope.roadmap)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}
