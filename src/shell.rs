use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{environment::Environment, value::core::Value},
    run,
};

/// Prompt printed before every line in interactive mode.
pub const PROMPT: &str = "stanza > ";

/// An interpreter session.
///
/// A shell owns one [`Environment`], seeded with the built-in names, and
/// runs lines against it one at a time. Errors are reported and the session
/// goes on; bindings made before an error are kept.
#[derive(Debug, Clone)]
pub struct Shell {
    source_name: String,
    env:         Environment,
}

impl Shell {
    /// Creates a session whose errors name `source_name` as their file.
    #[must_use]
    pub fn new(source_name: &str) -> Self {
        Self { source_name: source_name.to_string(),
               env:         Environment::with_builtins(), }
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Runs a single line and writes its outcome.
    ///
    /// A value is written to `out` in its display form, a line without a
    /// value writes nothing, and an error is rendered to `err`. Blank lines
    /// are skipped.
    ///
    /// Returns `false` when the line failed.
    ///
    /// # Example
    /// ```
    /// use stanza::shell::Shell;
    ///
    /// let mut shell = Shell::new("<stdin>");
    /// let (mut out, mut err) = (Vec::new(), Vec::new());
    ///
    /// assert!(shell.execute("let a = 2", &mut out, &mut err).unwrap());
    /// assert!(shell.execute("a / 4", &mut out, &mut err).unwrap());
    /// assert!(!shell.execute("b", &mut out, &mut err).unwrap());
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "0.5\n");
    /// assert!(String::from_utf8(err).unwrap().starts_with("RuntimeError: b not defined"));
    /// ```
    pub fn execute<O, E>(&mut self, line: &str, out: &mut O, err: &mut E) -> io::Result<bool>
        where O: Write,
              E: Write
    {
        if line.trim().is_empty() {
            return Ok(true);
        }

        match self.eval_line(line) {
            Ok(Some(value)) => writeln!(out, "{value}")?,
            Ok(None) => {},
            Err(error) => {
                writeln!(err, "{}", error.render())?;
                return Ok(false);
            },
        }
        Ok(true)
    }

    /// Runs every line of `reader` in order, continuing past failures.
    ///
    /// Returns `true` when no line failed.
    pub fn run_lines<R, O, E>(&mut self, reader: R, out: &mut O, err: &mut E) -> io::Result<bool>
        where R: BufRead,
              O: Write,
              E: Write
    {
        let mut succeeded = true;
        for line in reader.lines() {
            succeeded &= self.execute(&line?, out, err)?;
        }
        Ok(succeeded)
    }

    /// Runs the interactive loop until `reader` reaches end of input.
    pub fn repl<R, O, E>(&mut self, mut reader: R, out: &mut O, err: &mut E) -> io::Result<()>
        where R: BufRead,
              O: Write,
              E: Write
    {
        let mut line = String::new();
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            line.clear();
            if reader.read_line(&mut line)? == 0 {
                writeln!(out)?;
                return Ok(());
            }
            self.execute(line.trim_end_matches(['\n', '\r']), out, err)?;
        }
    }

    fn eval_line(&mut self, line: &str) -> Result<Option<Value>, Error> {
        let result = run(&self.source_name, line, &mut self.env);
        if let Err(error) = &result {
            debug!(kind = error.kind(), %error, "line failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(lines: &str) -> (bool, String, String) {
        let mut shell = Shell::new("<stdin>");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let ok = shell.run_lines(lines.as_bytes(), &mut out, &mut err).unwrap();
        (ok, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn values_are_printed_and_statements_are_silent() {
        let (ok, out, err) = session("let x = 3\nx * 2\n\n1 < 2\n");
        assert!(ok);
        assert_eq!(out, "6\nfact\n");
        assert_eq!(err, "");
    }

    #[test]
    fn builtins_are_available() {
        let (ok, out, _) = session("null\nfact\ncap\nNOT cap\n");
        assert!(ok);
        assert_eq!(out, "0\nfact\ncap\nfact\n");
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (ok, out, err) = session("let a = 1\nlet a = 2\na\n");
        assert!(!ok);
        assert_eq!(out, "1\n");
        assert!(err.starts_with("RuntimeError: Variable a already assigned\nFile <stdin>, line 1"));
    }

    #[test]
    fn repl_prompts_for_every_line() {
        let mut shell = Shell::new("<stdin>");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        shell.repl("1 + 1\nlet q = 4\n".as_bytes(), &mut out, &mut err).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "stanza > 2\nstanza > stanza > \n");
        assert_eq!(shell.environment().get("q"), Some(&Value::from(4)));
    }

    #[test]
    fn repl_handles_windows_line_endings() {
        let mut shell = Shell::new("<stdin>");
        let (mut out, mut err) = (Vec::new(), Vec::new());
        shell.repl("2 * 3\r\n".as_bytes(), &mut out, &mut err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "stanza > 6\nstanza > \n");
        assert!(err.is_empty());
    }
}
