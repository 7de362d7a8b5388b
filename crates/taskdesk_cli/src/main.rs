//! Command-line front end for TaskDesk.
//!
//! # Responsibility
//! - Parse commands and forward them to `taskdesk_core::TaskDesk`.
//! - Print results; hold no task state between calls.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use taskdesk_core::{
    default_log_level, init_logging, ActionResponse, AppPaths, AppearanceMode, CreateRequest,
    EditRequest, JsonSettingsStore, JsonTaskStore, LogSink, SortKey, StatusFilter, Task, TaskDesk,
};

type Desk = TaskDesk<JsonTaskStore, JsonSettingsStore>;

#[derive(Debug, Parser)]
#[command(name = "taskdesk", version, about = "Track short tasks in a local JSON file")]
struct Cli {
    /// Directory holding tasks.json, settings.json and logs/.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show tasks, highest priority first.
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value_t = SortArg::Priority)]
        sort: SortArg,
    },
    /// Create a task.
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        due: String,
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// Change fields of a task; omitted fields keep their value.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Mark a task as done.
    Done { id: String },
    /// Delete a task. Requires --yes.
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Show task counts.
    Stats,
    /// Write tasks to disk (needed when autosave is off).
    Save,
    /// Show or change preferences.
    Settings {
        #[arg(long, value_enum)]
        appearance: Option<AppearanceArg>,
        #[arg(long)]
        autosave: Option<bool>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Active,
    Done,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Priority,
    Due,
    Status,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AppearanceArg {
    System,
    Light,
    Dark,
}

impl From<FilterArg> for StatusFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::All => Self::All,
            FilterArg::Active => Self::Active,
            FilterArg::Done => Self::Done,
        }
    }
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Priority => Self::Priority,
            SortArg::Due => Self::DueDate,
            SortArg::Status => Self::Status,
        }
    }
}

impl From<AppearanceArg> for AppearanceMode {
    fn from(value: AppearanceArg) -> Self {
        match value {
            AppearanceArg::System => Self::System,
            AppearanceArg::Light => Self::Light,
            AppearanceArg::Dark => Self::Dark,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let paths = AppPaths::resolve(cli.data_dir.as_deref());

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, &paths.log_dir()) {
        // Logging is best effort; the command still runs.
        eprintln!("warning: {err}");
    }

    log::debug!(
        "event=cli_start module=cli status=ok data_dir={}",
        paths.data_dir.display()
    );
    let mut desk = TaskDesk::open(&paths, LogSink::shared());
    if run(&mut desk, cli.command) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run(desk: &mut Desk, command: Command) -> bool {
    match command {
        Command::List {
            filter,
            search,
            sort,
        } => {
            let tasks = desk.view_sorted(filter.into(), &search, sort.into());
            if tasks.is_empty() {
                println!("No tasks.");
            }
            for task in &tasks {
                print_task(task);
            }
            true
        }
        Command::Add {
            title,
            description,
            due,
            priority,
        } => report(desk.create(&CreateRequest {
            title,
            description,
            due_date: due,
            priority,
        })),
        Command::Edit {
            id,
            title,
            description,
            due,
            status,
            priority,
        } => {
            let Some(current) = desk.task(&id) else {
                eprintln!("Task `{id}` not found.");
                return false;
            };
            let current = EditRequest::from(&current);
            let request = EditRequest {
                title: title.unwrap_or(current.title),
                description: description.unwrap_or(current.description),
                due_date: due.unwrap_or(current.due_date),
                status: status.unwrap_or(current.status),
                priority: priority.unwrap_or(current.priority),
            };
            report(desk.edit(&id, &request))
        }
        Command::Done { id } => report(desk.mark_done(&id)),
        Command::Delete { id, yes } => report(desk.delete(&id, yes)),
        Command::Stats => {
            let stats = desk.stats();
            println!(
                "total={} active={} done={}",
                stats.total, stats.active, stats.done
            );
            true
        }
        Command::Save => report(desk.save()),
        Command::Settings {
            appearance,
            autosave,
        } => {
            let mut ok = true;
            if let Some(mode) = appearance {
                ok &= report(desk.set_appearance_mode(mode.into()));
            }
            if let Some(autosave) = autosave {
                ok &= report(desk.set_autosave(autosave));
            }
            let settings = desk.settings();
            println!(
                "appearance_mode={} autosave={}",
                settings.appearance_mode, settings.autosave
            );
            ok
        }
    }
}

fn report(response: ActionResponse) -> bool {
    match (&response.task_id, response.ok) {
        (Some(id), true) => println!("{} ({id})", response.message),
        (None, true) => println!("{}", response.message),
        (_, false) => eprintln!("{}", response.message),
    }
    response.ok
}

fn print_task(task: &Task) {
    let mark = if task.is_done() { "x" } else { " " };
    let due = if task.due_date.is_empty() {
        "-"
    } else {
        task.due_date.as_str()
    };
    println!(
        "[{mark}] {:<6} {}  due:{due}  {}",
        task.priority, task.title, task.id
    );
    if !task.description.is_empty() {
        println!("        {}", task.description);
    }
}
