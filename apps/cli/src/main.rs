use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;
use tubenotes_core::{
    FetchedVideo, Settings, extract_key_points, fetch_video, format_key_points_readable,
    summarize_all, summarize_video_dir, sync_notes,
};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

#[derive(Parser)]
#[command(name = "tubenotes")]
#[command(about = "Download YouTube transcripts, extract key points and keep Markdown video notes")]
struct Cli {
    /// Directory holding one folder per video
    #[arg(long, global = true, env = "TUBENOTES_OUTPUT_DIR", default_value = "output")]
    output_dir: PathBuf,

    /// Transcript language code
    #[arg(short, long, global = true, env = "TUBENOTES_LANG", default_value = "en")]
    lang: String,

    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the transcript and create the video note
    Fetch {
        /// Video URL or ID
        url: String,
    },
    /// Fetch a video, then extract key points into its note
    Process {
        /// Video URL or ID
        url: String,
    },
    /// Re-extract key points for every video in the output directory
    Summarize,
    /// Print key points of a transcript text file ("-" reads stdin)
    Extract {
        file: PathBuf,

        /// Print JSON instead of readable text
        #[arg(long)]
        json: bool,
    },
    /// Copy notes into a synced drive folder
    Sync {
        #[arg(long, env = "TUBENOTES_DRIVE_PATH")]
        drive: Option<PathBuf>,
    },
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .expect("valid spinner template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_header() {
    println!(
        "\n{}  {}\n",
        style("tubenotes").cyan().bold(),
        style("Video Notes").dim()
    );
}

async fn run_fetch(url: &str, settings: &Settings) -> Result<FetchedVideo> {
    let step_start = Instant::now();
    let spinner = create_spinner("Fetching transcript...");
    let fetched = match fetch_video(url, settings).await {
        Ok(fetched) => fetched,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };
    spinner.finish_with_message(format!(
        "{} Fetched: {} ({:.1} min, {}) {}",
        style("✓").green().bold(),
        style(&fetched.info.title).bold(),
        fetched.transcript.duration_minutes(),
        style(&fetched.transcript.language).yellow(),
        style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
    ));
    println!(
        "{} {}",
        style("Saved:").dim(),
        style(fetched.video_dir.display()).cyan()
    );
    Ok(fetched)
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::default()
        .with_output_dir(cli.output_dir)
        .with_language(cli.lang);

    match cli.command {
        Command::Fetch { url } => {
            print_header();
            run_fetch(&url, &settings).await?;
        }
        Command::Process { url } => {
            print_header();
            let fetched = run_fetch(&url, &settings).await?;

            let step_start = Instant::now();
            let spinner = create_spinner("Extracting key points...");
            let key_points = summarize_video_dir(&fetched.video_dir, &settings).await?;
            spinner.finish_with_message(format!(
                "{} Key points extracted: {} {}",
                style("✓").green().bold(),
                key_points.total(),
                style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
            ));

            println!("{}", style("─".repeat(60)).dim());
            println!("{}", format_key_points_readable(&key_points));
        }
        Command::Summarize => {
            print_header();
            let total_start = Instant::now();
            let outcomes = summarize_all(&settings).await?;
            if outcomes.is_empty() {
                println!(
                    "{} No videos found in {}",
                    style("!").yellow().bold(),
                    settings.output_dir.display()
                );
            }

            let mut failures = 0;
            for outcome in &outcomes {
                let name = outcome
                    .video_dir
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                match &outcome.result {
                    Ok(key_points) => println!(
                        "{} {} {}",
                        style("✓").green().bold(),
                        name,
                        style(format!("({} points)", key_points.total())).dim()
                    ),
                    Err(e) => {
                        failures += 1;
                        println!("{} {} {}", style("✗").red().bold(), name, style(e).red());
                    }
                }
            }

            println!(
                "\n{} {}\n",
                style("Total time:").dim(),
                style(format_duration(total_start.elapsed())).cyan().bold()
            );
            if failures > 0 {
                anyhow::bail!("{failures} of {} videos failed", outcomes.len());
            }
        }
        Command::Extract { file, json } => {
            let text = if file.as_os_str() == "-" {
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            } else {
                tokio::fs::read_to_string(&file)
                    .await
                    .with_context(|| format!("reading {}", file.display()))?
            };

            let key_points = extract_key_points(&text);
            if json {
                println!("{}", serde_json::to_string_pretty(&key_points)?);
            } else {
                println!("{}", format_key_points_readable(&key_points));
            }
        }
        Command::Sync { drive } => {
            let settings = settings.with_drive_dir(drive);
            let drive = settings
                .drive_dir
                .clone()
                .context("no drive directory: pass --drive or set TUBENOTES_DRIVE_PATH")?;
            print_header();

            let spinner = create_spinner("Syncing notes...");
            let report = match sync_notes(&settings.output_dir, &drive).await {
                Ok(report) => report,
                Err(e) => {
                    spinner.finish_and_clear();
                    return Err(e.into());
                }
            };
            spinner.finish_with_message(format!(
                "{} Synced {} notes to {}",
                style("✓").green().bold(),
                report.copied.len(),
                style(drive.display()).cyan()
            ));

            for path in &report.skipped {
                println!(
                    "{} Skipped {} {}",
                    style("!").yellow().bold(),
                    path.display(),
                    style("(no title)").dim()
                );
            }
            for (path, error) in &report.failed {
                println!(
                    "{} Failed {} {}",
                    style("✗").red().bold(),
                    path.display(),
                    style(error).red()
                );
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
