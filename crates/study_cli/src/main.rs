//! Command-line host for the study desk core.
//!
//! # Responsibility
//! - Drive the store and canvas the way a windowed host would.
//! - Print human-readable or JSON output for quick local inspection.

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use study_core::{
    core_version, init_logging, CanvasController, CardView, DragEvent, KanbanBoard, Position,
    SnapToggle, StudyConfig, StudyStore, SubjectId,
};

#[derive(Debug, Parser)]
#[command(name = "study", about = "Study command center: subject canvas and task board")]
struct Cli {
    /// Database file (overrides STUDY_DESK_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides STUDY_DESK_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (overrides STUDY_DESK_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create tables and seed default subjects.
    Init,
    /// List subjects with their stored positions.
    Subjects {
        #[arg(long)]
        json: bool,
    },
    /// Build the canvas and print every card placement.
    Canvas {
        #[arg(long)]
        json: bool,
    },
    /// Replay a drag gesture on one card and persist the result.
    Drag {
        subject_id: SubjectId,
        #[arg(allow_negative_numbers = true)]
        dx: f64,
        #[arg(allow_negative_numbers = true)]
        dy: f64,
        /// Number of update events the delta is split into.
        #[arg(long, default_value_t = 1)]
        steps: u32,
        /// Release without snapping to the grid (STUDY_DESK_SNAP=off does the same).
        #[arg(long)]
        no_snap: bool,
    },
    /// Add a task in the Todo column.
    AddTask {
        title: String,
        #[arg(long)]
        subject: Option<SubjectId>,
    },
    /// Print the task board.
    Tasks {
        #[arg(long)]
        json: bool,
    },
    /// Print the core version.
    Version,
}

#[derive(Debug, Serialize)]
struct DragReport {
    subject_id: SubjectId,
    snapped: bool,
    position: Position,
}

type CliResult = Result<(), Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult {
    let config = resolve_config(&cli)?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir)?;
    }

    match cli.command {
        Command::Version => {
            println!("study_core version={}", core_version());
        }
        Command::Init => {
            let store = open_store(&config)?;
            let count = store.list_subjects()?.len();
            println!("initialized {} ({count} subjects)", store.db_path().display());
        }
        Command::Subjects { json } => {
            let store = open_store(&config)?;
            let subjects = store.list_subjects()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&subjects)?);
            } else {
                for subject in &subjects {
                    println!(
                        "{:>3}  {:<24} {:<8} {:<10} ({}, {})  {}",
                        subject.id,
                        subject.name,
                        subject.color,
                        subject.icon,
                        subject.position.x,
                        subject.position.y,
                        subject.schedule
                    );
                }
            }
        }
        Command::Canvas { json } => {
            let store = open_store(&config)?;
            let controller = build_canvas(&store, &config, config.snap_enabled)?;
            print_cards(&controller.views(), json)?;
        }
        Command::Drag {
            subject_id,
            dx,
            dy,
            steps,
            no_snap,
        } => {
            let store = open_store(&config)?;
            let mut controller = build_canvas(&store, &config, drag_snaps(&config, no_snap))?;
            let steps = steps.max(1);
            let (step_x, step_y) = (dx / f64::from(steps), dy / f64::from(steps));

            controller.handle(subject_id, DragEvent::Start)?;
            for _ in 0..steps {
                controller.handle(
                    subject_id,
                    DragEvent::Update {
                        dx: step_x,
                        dy: step_y,
                    },
                )?;
            }
            let settled = controller.handle(subject_id, DragEvent::End)?;

            let report = DragReport {
                subject_id,
                snapped: controller.snap_toggle().is_enabled(),
                position: settled.to_position(),
            };
            info!(
                "event=cli_drag module=cli status=ok subject_id={} x={} y={}",
                report.subject_id, report.position.x, report.position.y
            );
            println!("{}", serde_json::to_string(&report)?);
        }
        Command::AddTask { title, subject } => {
            let store = open_store(&config)?;
            let task_id = store.add_task(title.trim(), subject)?;
            println!("task {task_id} added");
        }
        Command::Tasks { json } => {
            let store = open_store(&config)?;
            let board = KanbanBoard::from_tasks(store.list_tasks()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                for column in &board.columns {
                    println!("== {} ({})", column.status, column.tasks.len());
                    for task in &column.tasks {
                        match task.subject_id {
                            Some(subject_id) => {
                                println!("  #{} {} [subject {subject_id}]", task.id, task.title)
                            }
                            None => println!("  #{} {}", task.id, task.title),
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<StudyConfig, Box<dyn Error>> {
    let mut config = StudyConfig::from_env()?;
    if let Some(db) = cli.db.clone() {
        config = config.with_db_path(db)?;
    }
    if let Some(level) = cli.log_level.as_deref() {
        config = config.with_log_level(level)?;
    }
    if let Some(dir) = cli.log_dir.clone() {
        config = config.with_log_dir(dir)?;
    }
    Ok(config)
}

fn drag_snaps(config: &StudyConfig, no_snap: bool) -> bool {
    config.snap_enabled && !no_snap
}

fn open_store(config: &StudyConfig) -> Result<Rc<StudyStore>, Box<dyn Error>> {
    let store = StudyStore::from_config(config);
    store.initialize()?;
    Ok(Rc::new(store))
}

fn build_canvas(
    store: &Rc<StudyStore>,
    config: &StudyConfig,
    snap: bool,
) -> Result<CanvasController, Box<dyn Error>> {
    let subjects = store.list_subjects()?;
    let controller =
        CanvasController::build(subjects, config.grid, SnapToggle::new(snap), store.clone())?;
    Ok(controller)
}

fn print_cards(cards: &[CardView], json: bool) -> CliResult {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }
    for card in cards {
        println!(
            "{:>3}  {:<24} left={:<6} top={:<6} {}",
            card.subject_id, card.name, card.left, card.top, card.icon
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{drag_snaps, Cli, Command};
    use clap::Parser;
    use study_core::StudyConfig;

    #[test]
    fn drag_accepts_negative_deltas() {
        let cli = Cli::try_parse_from(["study", "drag", "2", "-50", "-12.5", "--no-snap"]).unwrap();
        match cli.command {
            Command::Drag {
                subject_id,
                dx,
                dy,
                no_snap,
                steps,
            } => {
                assert_eq!(subject_id, 2);
                assert_eq!(dx, -50.0);
                assert_eq!(dy, -12.5);
                assert!(no_snap);
                assert_eq!(steps, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn drag_snaps_only_when_config_and_flag_allow_it() {
        let snapping = StudyConfig::default();
        let free = StudyConfig::default().with_snap_enabled(false);
        assert!(drag_snaps(&snapping, false));
        assert!(!drag_snaps(&snapping, true));
        assert!(!drag_snaps(&free, false));
        assert!(!drag_snaps(&free, true));
    }

    #[test]
    fn global_db_flag_parses_after_subcommand() {
        let cli = Cli::try_parse_from(["study", "tasks", "--db", "/tmp/x.db"]).unwrap();
        assert_eq!(cli.db.as_deref(), Some(std::path::Path::new("/tmp/x.db")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
