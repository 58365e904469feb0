use std::{
    fs::File,
    io::{self, BufReader},
    process::ExitCode,
};

use clap::Parser;
use stanza::shell::Shell;
use tracing_subscriber::EnvFilter;

/// stanza is a small line-oriented expression language.
///
/// Without CONTENTS an interactive session starts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells stanza to treat CONTENTS as a file and run each of its lines.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// A line to run, or a path when `--file` is given.
    contents: Option<String>,
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter)
                                     .with_writer(io::stderr)
                                     .try_init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    install_tracing();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let (mut out, mut err) = (stdout.lock(), stderr.lock());

    let result = match args.contents {
        None => Shell::new("<stdin>").repl(io::stdin().lock(), &mut out, &mut err)
                                     .map(|()| true),
        Some(path) if args.file => match File::open(&path) {
            Ok(file) => Shell::new(&path).run_lines(BufReader::new(file), &mut out, &mut err),
            Err(error) => {
                eprintln!("Failed to read the input file '{path}': {error}");
                return ExitCode::FAILURE;
            },
        },
        Some(line) => Shell::new("<stdin>").execute(&line, &mut out, &mut err),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        },
    }
}
