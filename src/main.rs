use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use mini_shell::{ExecResult, Shell, ShellError, ShellOptions};

/// Type of event to trace.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, clap::ValueEnum)]
enum TraceEvent {
    /// Traces parsing of command lines.
    #[clap(name = "parse")]
    Parse,
    /// Traces application invocations.
    #[clap(name = "eval")]
    Eval,
    /// Traces glob matching.
    #[clap(name = "glob")]
    Glob,
    /// Traces failures escalated by safe dispatch.
    #[clap(name = "dispatch")]
    Dispatch,
}

impl TraceEvent {
    fn target(self) -> (&'static str, tracing::Level) {
        match self {
            TraceEvent::Parse => ("parse", tracing::Level::DEBUG),
            TraceEvent::Eval => ("eval", tracing::Level::DEBUG),
            TraceEvent::Glob => ("glob", tracing::Level::TRACE),
            TraceEvent::Dispatch => ("dispatch", tracing::Level::DEBUG),
        }
    }
}

#[derive(Parser)]
#[command(name = "mini-shell")]
#[command(about = "A small shell with quoting, substitution, pipes and globbing")]
#[command(version)]
struct Cli {
    /// Execute one command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// TOML file with shell options
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable tracing for the given events
    #[arg(long = "log-enable", value_enum)]
    log_enable: Vec<TraceEvent>,
}

fn init_tracing(events: &[TraceEvent]) {
    let filter = events.iter().fold(
        Targets::new().with_default(tracing_subscriber::filter::LevelFilter::INFO),
        |filter, event| filter.with_target(event.target().0, event.target().1),
    );

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(filter);

    if tracing_subscriber::registry().with(layer).try_init().is_err() {
        eprintln!("warning: failed to initialize tracing.");
    }
}

fn print_result(result: &ExecResult, json: bool) {
    if json {
        match serde_json::to_string(result) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("error: {}", e),
        }
        return;
    }

    print!("{}", result.stdout_text());
    let _ = std::io::stdout().flush();
    for line in &result.stderr {
        eprintln!("{}", line);
    }
}

fn print_error(err: &ShellError) {
    eprintln!("error: {}", err);
}

fn run_repl(shell: &mut Shell, json: bool) {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        let cwd = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        print!("{}> ", cwd);
        let _ = std::io::stdout().flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: {}", e);
                break;
            }
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        match shell.exec(command) {
            Ok(result) => print_result(&result, json),
            Err(err) => print_error(&err),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_enable);

    let options = match &cli.config {
        Some(path) => match ShellOptions::load(path) {
            Ok(options) => options,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellOptions::default(),
    };
    let mut shell = Shell::new(options);

    let Some(command) = cli.command else {
        run_repl(&mut shell, cli.json);
        return;
    };

    match shell.exec(&command) {
        Ok(result) => {
            print_result(&result, cli.json);
            std::process::exit(result.exit_code);
        }
        Err(err) => {
            print_error(&err);
            std::process::exit(1);
        }
    }
}
