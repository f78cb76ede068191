//! Command dispatch over a single namespace.
//!
//! Reads one line at a time, runs the named command, and writes its status
//! lines to the output sink. Namespace errors are reported and the session
//! continues; only output failures end it.

use std::io::Write;

use anyhow::Result;
use simfs::{FsError, Namespace};

/// Prompt printed before each interactive line
pub const PROMPT: &str = "simfs> ";

/// What the caller should do after a line has run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading lines
    Continue,
    /// The session asked to end
    Exit,
}

/// Shell state: the namespace plus where status lines go.
pub struct Shell<W: Write> {
    ns: Namespace,
    out: W,
}

impl<W: Write> Shell<W> {
    pub fn new(ns: Namespace, out: W) -> Self {
        Self { ns, out }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.ns
    }

    /// Consume the shell, returning the namespace and the output sink.
    #[cfg(test)]
    pub fn into_parts(self) -> (Namespace, W) {
        (self.ns, self.out)
    }

    /// Print a line (with newline)
    fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    /// Print the prompt without a newline
    pub fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()?;
        Ok(())
    }

    /// Handle one input line
    pub fn handle_input(&mut self, input: &str) -> Result<Flow> {
        let line = input.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        self.execute_command(line)
    }

    /// Execute a command
    fn execute_command(&mut self, line: &str) -> Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let (cmd, args) = match parts.split_first() {
            Some((c, a)) => (*c, a),
            None => return Ok(Flow::Continue),
        };

        log::trace!("shell: {} {:?}", cmd, args);

        match cmd {
            "mkdir" => self.cmd_mkdir(args)?,
            "help" => self.cmd_help()?,
            "exit" | "quit" => return Ok(Flow::Exit),
            _ => {
                self.println(&format!("Unknown command: {}", cmd))?;
                self.println("Type 'help' for available commands.")?;
            }
        }

        Ok(Flow::Continue)
    }

    /// `mkdir PATH...` - one status line per path, in argument order
    fn cmd_mkdir(&mut self, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            let msg = FsError::NoPathProvided.to_string();
            return self.println(&msg);
        }

        for path in args {
            let outcome = self.ns.mkdir_command(path);
            self.println(&outcome.message())?;
        }
        Ok(())
    }

    fn cmd_help(&mut self) -> Result<()> {
        self.println("Available commands:")?;
        self.println("  mkdir PATH...  - Create directories")?;
        self.println("  help           - Show this help message")?;
        self.println("  exit           - End the session")
    }
}
