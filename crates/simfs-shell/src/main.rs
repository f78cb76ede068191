//! Shell process for the simulated namespace.
//!
//! Builds a namespace, optionally seeds it, then feeds it command lines from
//! `-c` arguments, a script file, or stdin.

mod logging;
mod shell;

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use simfs::{Namespace, Snapshot};

use shell::{Flow, Shell};

#[derive(Debug, Parser)]
#[command(name = "simfs-shell")]
#[command(about = "Shell over an in-memory directory namespace")]
struct Cli {
    /// Run this command line, then exit (repeatable)
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// Read command lines from a file instead of stdin
    #[arg(long, conflicts_with = "commands")]
    script: Option<PathBuf>,

    /// Directory to create before the session starts (repeatable)
    #[arg(long = "seed")]
    seeds: Vec<String>,

    /// Absolute directory to start in, after seeding
    #[arg(long)]
    cwd: Option<String>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print a JSON snapshot of the namespace on exit
    #[arg(long)]
    dump: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ns = build_namespace(&cli.seeds, cli.cwd.as_deref())?;
    let mut shell = Shell::new(ns, io::stdout().lock());

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            if shell.handle_input(line)? == Flow::Exit {
                break;
            }
        }
    } else if let Some(path) = &cli.script {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        run_lines(&mut shell, BufReader::new(file), false)?;
    } else {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        run_lines(&mut shell, stdin.lock(), interactive)?;
    }

    if cli.dump {
        let snapshot = Snapshot::of(shell.namespace())?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

fn run_lines<W: io::Write>(
    shell: &mut Shell<W>,
    reader: impl BufRead,
    interactive: bool,
) -> Result<()> {
    if interactive {
        shell.prompt()?;
    }
    for line in reader.lines() {
        if shell.handle_input(&line?)? == Flow::Exit {
            break;
        }
        if interactive {
            shell.prompt()?;
        }
    }
    Ok(())
}

/// Create the seed directories and move to the requested cwd.
///
/// Seeds that already exist are skipped; any other failure aborts startup.
fn build_namespace(seeds: &[String], cwd: Option<&str>) -> Result<Namespace> {
    let mut ns = Namespace::new();

    for seed in seeds {
        match ns.mkdir(seed) {
            Ok(id) => log::info!("seed: created {} as {}", seed, id),
            Err(e) if e.is_already_exists() => log::debug!("seed: {} already present", seed),
            Err(e) => bail!("seeding {}: {}", seed, e),
        }
    }

    if let Some(path) = cwd {
        if !simfs::is_absolute(path) {
            bail!("--cwd must be an absolute path, got {}", path);
        }
        let id = ns.lookup(path).with_context(|| format!("--cwd {}", path))?;
        ns.set_cwd(id).with_context(|| format!("--cwd {}", path))?;
    }

    Ok(ns)
}
