//! The `mkt repl` command.
//!
//! Reads lines interactively and prints the tokens of each one.

use std::io::{self, Write};

use monkc_util::{Handler, SourceFile};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use crate::commands::common::{lex_and_print, PrintOptions};
use crate::error::{MktError, Result};

/// Name shown in diagnostics for REPL input.
const REPL_SOURCE_NAME: &str = "<repl>";

/// Arguments for the repl command.
#[derive(Debug, Clone)]
pub struct ReplArgs {
    /// Prompt printed before each line.
    pub prompt: String,
    /// Output settings.
    pub options: PrintOptions,
}

/// Lex one input line, writing tokens to `out` and diagnostics to `err`.
///
/// `line_number` numbers the session's inputs and doubles as the file id
/// of the line's source.
pub fn eval_line(
    line: &str,
    line_number: usize,
    options: PrintOptions,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let file = SourceFile::new(line_number, REPL_SOURCE_NAME, line);
    let handler = Handler::new();

    lex_and_print(&file, options, out, &handler)?;
    for diagnostic in handler.take_diagnostics() {
        write!(err, "{}", diagnostic.render(&file))?;
    }
    out.flush()?;
    Ok(())
}

/// Run the interactive loop until end of input or interrupt.
pub fn run_repl(args: ReplArgs) -> Result<()> {
    println!("Monkey token REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a line of Monkey to see its tokens. Ctrl-D exits.");

    let mut rl = DefaultEditor::new().map_err(|e| MktError::Repl(e.to_string()))?;
    let mut line_number = 0;

    loop {
        match rl.readline(&args.prompt) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                line_number += 1;
                eval_line(
                    &line,
                    line_number,
                    args.options,
                    &mut io::stdout(),
                    &mut io::stderr(),
                )?;
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!(lines = line_number, "repl closed");
                break;
            },
            Err(e) => return Err(MktError::Repl(e.to_string())),
        }
    }

    Ok(())
}
