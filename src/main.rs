use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use verdict::test::output::write_results;
use verdict::{config, Framework, TestParser};

/// Turn captured test-runner output into structured JSON results.
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Framework id: bats (tap), pytest, go, jest, rust (cargo), flutter, generic
    ///
    /// Defaults to `parse.defaultFramework` from the settings files.
    framework: Option<String>,

    /// File holding the runner's stdout ("-" reads standard input)
    #[arg(long, value_name = "FILE")]
    stdout: Option<PathBuf>,

    /// File holding the runner's stderr
    #[arg(long, value_name = "FILE")]
    stderr: Option<PathBuf>,

    /// Project whose .verdict/settings.json applies (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    project_root: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ verdict::Error::UnsupportedFramework(_)) => {
            eprintln!("verdict: {}", e);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("verdict: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> verdict::Result<()> {
    let project_root = cli.project_root.or_else(|| std::env::current_dir().ok());
    let settings = config::resolve(project_root.as_deref());

    let framework = match cli.framework.as_deref() {
        Some(id) => id.parse::<Framework>()?,
        None => settings.default_framework,
    };

    let stdout = read_input(cli.stdout.as_deref())?;
    let stderr = read_input(cli.stderr.as_deref())?;
    tracing::debug!(
        "Parsing {} bytes of stdout and {} bytes of stderr as {}",
        stdout.len(),
        stderr.len(),
        framework
    );

    let results = TestParser::from_settings(&settings).parse_framework(framework, &stdout, &stderr);
    write_results(&mut std::io::stdout().lock(), &results, cli.pretty)
}

/// Missing path means an empty buffer. Invalid UTF-8 is replaced, not rejected.
fn read_input(path: Option<&Path>) -> verdict::Result<String> {
    let bytes = match path {
        None => return Ok(String::new()),
        Some(p) if p == Path::new("-") => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
        Some(p) => std::fs::read(p)?,
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
