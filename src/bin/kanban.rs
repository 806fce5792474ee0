//! Interactive kanban shell.
//!
//! Reads one command per line from stdin. Type `help` for the command list.

use anyhow::{bail, Context};
use chrono::NaiveDate;
use kanban_store::domain::filter::is_hidden_by_search;
use kanban_store::{
    App, Board, BoardId, ColumnId, Language, NewTask, Priority, Prompter, Route, SettingsUpdate,
    Store, StoreConfig, TaskId, Theme,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  boards                          list boards
  new <name>                      create a board and open it
  open <n>                        open board number n
  go <route>                      follow a route such as `settings` or `board/<id>`
  delete-board <n>                delete board number n
  show                            show the open board
  add <col> <priority> <title>    add a task to column col
  edit <col> <task>               open a task for editing
  title <text> | desc <text> | priority <p> | due <yyyy-mm-dd|none>
  save | cancel | rm              finish editing
  move <col> <task> <target>      drag a task to another column
  search [query]                  filter the open board (no query clears)
  lang <en|es|fr> | theme <light|dark>
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Boards,
    New(String),
    Open(usize),
    Go(String),
    DeleteBoard(usize),
    Show,
    Add {
        column: usize,
        priority: Priority,
        title: String,
    },
    Edit {
        column: usize,
        task: usize,
    },
    Title(String),
    Description(String),
    SetPriority(Priority),
    Due(Option<NaiveDate>),
    Save,
    Cancel,
    Remove,
    Move {
        column: usize,
        task: usize,
        target: usize,
    },
    Search(String),
    Lang(Language),
    Theme(Theme),
    Help,
    Quit,
}

fn index(arg: Option<&str>, what: &str) -> anyhow::Result<usize> {
    let raw = arg.with_context(|| format!("missing {} number", what))?;
    let n: usize = raw
        .parse()
        .with_context(|| format!("invalid {} number: {}", what, raw))?;
    if n == 0 {
        bail!("{} numbers start at 1", what);
    }
    Ok(n - 1)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match verb {
            "boards" => Self::Boards,
            "new" => Self::New(rest.to_string()),
            "open" => Self::Open(index(args.next(), "board")?),
            "go" => Self::Go(rest.to_string()),
            "delete-board" => Self::DeleteBoard(index(args.next(), "board")?),
            "show" => Self::Show,
            "add" => {
                let column = index(args.next(), "column")?;
                let priority = args.next().context("missing priority")?.parse()?;
                let title = args.collect::<Vec<_>>().join(" ");
                Self::Add {
                    column,
                    priority,
                    title,
                }
            }
            "edit" => Self::Edit {
                column: index(args.next(), "column")?,
                task: index(args.next(), "task")?,
            },
            "title" => Self::Title(rest.to_string()),
            "desc" => Self::Description(rest.to_string()),
            "priority" => Self::SetPriority(rest.parse()?),
            "due" => match rest {
                "none" | "" => Self::Due(None),
                date => Self::Due(Some(
                    NaiveDate::parse_from_str(date, "%Y-%m-%d")
                        .with_context(|| format!("invalid date: {}", date))?,
                )),
            },
            "save" => Self::Save,
            "cancel" => Self::Cancel,
            "rm" => Self::Remove,
            "move" => Self::Move {
                column: index(args.next(), "column")?,
                task: index(args.next(), "task")?,
                target: index(args.next(), "column")?,
            },
            "search" => Self::Search(rest.to_string()),
            "lang" => Self::Lang(rest.parse()?),
            "theme" => Self::Theme(rest.parse()?),
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command: {}", other),
        };
        Ok(command)
    }
}

/// Prompts on stdout, answers from stdin
struct StdioPrompter;

impl Prompter for StdioPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn notify(&mut self, message: &str) {
        println!("! {}", message);
    }
}

fn board_at(app: &App<StdioPrompter>, n: usize) -> anyhow::Result<BoardId> {
    app.store()
        .boards()
        .get(n)
        .map(|b| b.id.clone())
        .with_context(|| format!("no board number {}", n + 1))
}

fn open_board(app: &App<StdioPrompter>) -> anyhow::Result<&Board> {
    app.store().current_board().context("no board is open")
}

fn column_at(app: &App<StdioPrompter>, n: usize) -> anyhow::Result<ColumnId> {
    open_board(app)?
        .columns
        .get(n)
        .map(|c| c.id.clone())
        .with_context(|| format!("no column number {}", n + 1))
}

fn task_at(
    app: &App<StdioPrompter>,
    column: usize,
    n: usize,
) -> anyhow::Result<(ColumnId, TaskId)> {
    let board = open_board(app)?;
    let col = board
        .columns
        .get(column)
        .with_context(|| format!("no column number {}", column + 1))?;
    let task = col
        .tasks
        .get(n)
        .with_context(|| format!("no task number {} in {}", n + 1, col.name))?;
    Ok((col.id.clone(), task.id.clone()))
}

fn print_board(app: &App<StdioPrompter>) -> anyhow::Result<()> {
    let store = app.store();
    let board = open_board(app)?;
    let filtered = store.filtered_current_board().context("no board is open")?;
    let query = store.filter_query();

    println!("== {} ==", board.name);
    if !query.is_empty() {
        println!("(search: {})", query);
    }
    for (col_idx, (column, shown)) in board.columns.iter().zip(&filtered.columns).enumerate() {
        println!("[{}] {} ({})", col_idx + 1, shown.name, shown.tasks.len());
        for task in &shown.tasks {
            // Numbered by position in the stored column so `edit`/`move` line up
            let number = column.task_index(&task.id).map_or(0, |i| i + 1);
            let due = task
                .due_date
                .map(|d| format!(" due {}", d))
                .unwrap_or_default();
            println!(
                "    {}. {} [{}]{}",
                number,
                task.title,
                store.translate(task.priority.label_key(), &[]),
                due
            );
        }
        if is_hidden_by_search(column, shown, query) {
            println!("    {}", store.translate("noSearchResults", &[]));
        } else if column.tasks.is_empty() {
            println!("    {}", store.translate("noTasksInColumn", &[]));
        }
    }
    Ok(())
}

fn print_boards(app: &App<StdioPrompter>) {
    let boards = app.store().boards();
    if boards.is_empty() {
        println!("{}", app.store().translate("noBoardsYet", &[]));
    }
    for (i, board) in boards.iter().enumerate() {
        println!("{}. {} ({} tasks)", i + 1, board.name, board.task_count());
    }
}

fn print_route(app: &App<StdioPrompter>) -> anyhow::Result<()> {
    match app.route() {
        Route::Boards => print_boards(app),
        Route::Board(_) => print_board(app)?,
        Route::Settings => {
            let settings = app.store().settings();
            println!(
                "language: {} ({}), theme: {}",
                settings.language,
                settings.language.native_name(),
                settings.theme
            );
        }
    }
    Ok(())
}

fn edit_copy(app: &mut App<StdioPrompter>) -> anyhow::Result<&mut kanban_store::Task> {
    app.store_mut()
        .editing_task_mut()
        .map(|session| session.task_mut())
        .context("no task is open for editing")
}

/// Executes one command. Returns `false` when the shell should exit.
fn execute(app: &mut App<StdioPrompter>, command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Boards => {
            app.navigate(Route::Boards);
            print_boards(app);
        }
        Command::New(name) => {
            if app.add_board_and_navigate(&name).is_some() {
                print_board(app)?;
            }
        }
        Command::Open(n) => {
            let id = board_at(app, n)?;
            app.navigate(Route::Board(id));
            print_route(app)?;
        }
        Command::Go(hash) => {
            app.hash_changed(&hash);
            print_route(app)?;
        }
        Command::DeleteBoard(n) => {
            let id = board_at(app, n)?;
            if app.request_delete_board(&id) {
                print_route(app)?;
            }
        }
        Command::Show => print_route(app)?,
        Command::Add {
            column,
            priority,
            title,
        } => {
            let board_id = open_board(app)?.id.clone();
            let column_id = column_at(app, column)?;
            let details = NewTask::new(title)
                .with_priority(priority)
                .in_column(column_id);
            if app.add_task(&board_id, details).is_some() {
                print_board(app)?;
            }
        }
        Command::Edit { column, task } => {
            let (column_id, task_id) = task_at(app, column, task)?;
            app.open_task(&task_id, &column_id);
            if let Some(session) = app.store().editing_task() {
                println!("editing: {:#?}", session.task);
            }
        }
        Command::Title(title) => edit_copy(app)?.title = title,
        Command::Description(text) => {
            edit_copy(app)?.description = Some(text).filter(|t| !t.is_empty());
        }
        Command::SetPriority(priority) => edit_copy(app)?.priority = priority,
        Command::Due(date) => edit_copy(app)?.due_date = date,
        Command::Save => {
            if app.save_task() {
                print_board(app)?;
            }
        }
        Command::Cancel => app.close_task(),
        Command::Remove => {
            if app.request_delete_task() {
                print_board(app)?;
            }
        }
        Command::Move {
            column,
            task,
            target,
        } => {
            let (column_id, task_id) = task_at(app, column, task)?;
            let target_id = column_at(app, target)?;
            app.drag_start(task_id, column_id);
            app.drop_on_column(&target_id);
            print_board(app)?;
        }
        Command::Search(query) => {
            app.set_filter_query(&query);
            print_board(app)?;
        }
        Command::Lang(language) => app.update_settings(SettingsUpdate::language(language)),
        Command::Theme(theme) => app.update_settings(SettingsUpdate::theme(theme)),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match std::env::var("KANBAN_CONFIG") {
        Ok(json) => StoreConfig::from_json(&json).context("invalid KANBAN_CONFIG")?,
        Err(_) => StoreConfig::default(),
    };

    let mut app = App::new(Store::with_config(config), StdioPrompter);
    let initial = std::env::args().nth(1);
    app.start(initial.as_deref());
    print_route(&app)?;

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let outcome = line
            .parse::<Command>()
            .and_then(|command| execute(&mut app, command));
        match outcome {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => println!("error: {:#}", err),
        }
    }
    Ok(())
}
