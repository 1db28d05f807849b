use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use shift_tally::config::Config;
use shift_tally::hours::Hms;
use shift_tally::points::{compute_final_points, Grade};
use shift_tally::timesheet::TimesheetDraft;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug)]
struct BasePointsArgs {
    /// Base points to grade against (overrides --position and the config)
    #[arg(short, long)]
    base_points: Option<u64>,

    /// Position whose configured base points to use
    #[arg(short, long, conflicts_with = "base_points")]
    position: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert hours, minutes and seconds to decimal hours
    #[command(allow_negative_numbers = true)]
    ToDecimal {
        hours: i64,
        /// Clamped into 0..=59
        #[arg(default_value_t = 0)]
        minutes: i64,
        /// Clamped into 0..=59
        #[arg(default_value_t = 0)]
        seconds: i64,
    },
    /// Convert decimal hours to hours, minutes and seconds
    #[command(allow_negative_numbers = true)]
    FromDecimal { decimal: f64 },
    /// Show the points a grade awards (all grades if none is given)
    Points {
        /// Grade label: excellent, good, acceptable, needs_improvement, rejected
        #[arg(short, long)]
        grade: Option<String>,

        #[command(flatten)]
        base: BasePointsArgs,
    },
    /// Validate a timesheet entry and preview its decimal hours and points
    #[command(allow_negative_numbers = true)]
    Preview {
        /// Duration as "4:30", "4:30:15" or "4h 30m"
        #[arg(short, long, conflicts_with_all = ["hours", "minutes", "seconds"])]
        duration: Option<String>,

        #[arg(long)]
        hours: Option<i64>,

        #[arg(long)]
        minutes: Option<i64>,

        #[arg(long)]
        seconds: Option<i64>,

        /// Grade label; unknown labels leave the entry not assessed
        #[arg(short, long)]
        grade: Option<String>,

        /// Review notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Status transition: pending, approved, rejected
        #[arg(short, long)]
        status: Option<String>,

        #[command(flatten)]
        base: BasePointsArgs,

        /// Print the submission payload as JSON instead of the preview
        #[arg(long)]
        json: bool,
    },
    /// Interactive setup wizard to create a config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "shift-tally")]
#[command(about = "Volunteer timesheet hours and points calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/shift-tally/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.map(PathBuf::from);

    match cli.command {
        Commands::Init => {
            if let Err(e) = shift_tally::config::init::run_init_wizard(config_path) {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        Commands::ToDecimal {
            hours,
            minutes,
            seconds,
        } => {
            let hms = Hms::clamped(hours, minutes, seconds);
            if cli.verbose
                && (hms.hours as i64 != hours
                    || hms.minutes as i64 != minutes
                    || hms.seconds as i64 != seconds)
            {
                eprintln!(
                    "Clamped {}:{}:{} to {}",
                    hours, minutes, seconds, hms
                );
            }
            println!(
                "{}",
                shift_tally::output::format_decimal_hours(hms.to_decimal_hours())
            );
        }
        Commands::FromDecimal { decimal } => {
            if !decimal.is_finite() || decimal < 0.0 {
                eprintln!("Decimal hours must be a non-negative number, got {}", decimal);
                std::process::exit(EXIT_INVALID_INPUT);
            }
            let hms = shift_tally::hours::from_decimal_hours(decimal);
            println!(
                "{}  ({})",
                shift_tally::output::format_clock(&hms),
                shift_tally::output::format_hms(&hms)
            );
        }
        Commands::Points { grade, base } => {
            let config = load_validated_config(config_path, cli.verbose);
            let base_points = resolve_base_points(&config, &base, cli.verbose);
            let use_colors = shift_tally::output::should_use_colors();

            match grade {
                None => {
                    println!(
                        "{}",
                        shift_tally::output::format_grade_table(base_points, use_colors)
                    );
                }
                Some(label) => {
                    let grade = Grade::parse_label(&label);
                    if grade.is_none() {
                        eprintln!(
                            "Unknown grade '{}', treating as not assessed (expected one of: {})",
                            label,
                            Grade::valid_labels()
                        );
                    }
                    println!(
                        "{}",
                        shift_tally::output::format_points(compute_final_points(
                            base_points,
                            grade
                        ))
                    );
                }
            }
        }
        Commands::Preview {
            duration,
            hours,
            minutes,
            seconds,
            grade,
            notes,
            status,
            base,
            json,
        } => {
            let config = load_validated_config(config_path, cli.verbose);

            let mut draft = match duration {
                Some(text) => match shift_tally::hours::parse_duration(&text) {
                    Ok(hms) => TimesheetDraft::from_hms(hms),
                    Err(e) => {
                        eprintln!("Invalid duration: {:#}", e);
                        std::process::exit(EXIT_INVALID_INPUT);
                    }
                },
                None => TimesheetDraft {
                    hours: hours.unwrap_or(0),
                    minutes: minutes.unwrap_or(0),
                    seconds: seconds.unwrap_or(0),
                    ..TimesheetDraft::default()
                },
            };
            draft.grade = grade;
            draft.review_notes = notes;
            draft.status = status;

            if cli.verbose {
                if let Some(ref label) = draft.grade {
                    if Grade::parse_label(label).is_none() {
                        eprintln!("Unknown grade '{}', treating as not assessed", label);
                    }
                }
            }

            let submission = match draft.into_submission() {
                Ok(s) => s,
                Err(errors) => {
                    eprintln!("Timesheet errors:");
                    for error in errors {
                        eprintln!("  - {}", error);
                    }
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            };

            if json {
                match submission.to_json() {
                    Ok(payload) => println!("{}", payload),
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_INVALID_INPUT);
                    }
                }
            } else {
                let base_points = resolve_base_points(&config, &base, cli.verbose);
                let award = shift_tally::timesheet::preview(&submission, base_points);
                let use_colors = shift_tally::output::should_use_colors();
                println!(
                    "{}",
                    shift_tally::output::format_preview(&submission, award.as_ref(), use_colors)
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and validate config, exiting with the config error code on failure
fn load_validated_config(path: Option<PathBuf>, verbose: bool) -> Config {
    if verbose {
        match &path {
            Some(p) => eprintln!("Loading config from {}", p.display()),
            None => eprintln!("Loading config from default location"),
        }
    }

    let config = match shift_tally::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = shift_tally::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if verbose {
        eprintln!(
            "Default base points: {}, {} positions configured",
            config.default_base_points,
            config.positions.len()
        );
    }

    config
}

/// Explicit --base-points wins, then --position, then the config default
fn resolve_base_points(config: &Config, args: &BasePointsArgs, verbose: bool) -> u64 {
    if let Some(points) = args.base_points {
        return points;
    }

    if let Some(ref name) = args.position {
        if config.position(name).is_none() {
            eprintln!("Unknown position '{}'.", name);
            if !config.positions.is_empty() {
                eprintln!("Configured positions:");
                for position in &config.positions {
                    eprintln!("  - {} ({} pts)", position.name, position.base_points);
                }
            }
            std::process::exit(EXIT_INVALID_INPUT);
        }
    }

    let points = config.base_points_for(args.position.as_deref());
    if verbose {
        eprintln!("Using base points: {}", points);
    }
    points
}
