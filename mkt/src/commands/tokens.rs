//! Tokens command implementation.
//!
//! Lexes each input and prints its token stream. Illegal bytes are
//! reported as diagnostics on stderr.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use monkc_util::{Handler, SourceMap};
use tracing::{debug, info, warn};

use crate::commands::common::{lex_and_print, PrintOptions};
use crate::error::{MktError, Result};

/// Path that stands for standard input.
const STDIN_PATH: &str = "-";

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files; empty means standard input.
    pub files: Vec<PathBuf>,
    /// Output settings.
    pub options: PrintOptions,
    /// Exit successfully even when illegal tokens were found.
    pub allow_illegal: bool,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    /// Execute the command, writing tokens to stdout and diagnostics to
    /// stderr.
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let stderr = io::stderr();
        let mut err = stderr.lock();
        self.run_with(&mut out, &mut err)
    }

    /// Execute the command against explicit output streams.
    pub fn run_with(&self, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
        let inputs = self.inputs();
        let mut source_map = SourceMap::new();
        let handler = Handler::new();
        let mut illegal = 0;
        let mut illegal_files = Vec::new();

        for path in &inputs {
            let content = read_input(path)?;
            let id = source_map.add_file(path.display().to_string(), content);
            let file = source_map.get_file(id)?;

            let summary = lex_and_print(&file, self.args.options, out, &handler)?;
            for diagnostic in handler.take_diagnostics() {
                write!(err, "{}", diagnostic.render(&file))?;
            }

            if summary.illegal > 0 {
                illegal += summary.illegal;
                illegal_files.push(path.clone());
            }
            if self.args.verbose {
                info!(file = %path.display(), tokens = summary.tokens, "lexed");
            }
        }

        out.flush()?;

        if illegal > 0 && !self.args.allow_illegal {
            return Err(MktError::IllegalInput {
                count: illegal,
                files: illegal_files,
            });
        }
        Ok(())
    }

    /// Inputs in order, with no files meaning standard input.
    fn inputs(&self) -> Vec<PathBuf> {
        if self.args.files.is_empty() {
            vec![PathBuf::from(STDIN_PATH)]
        } else {
            self.args.files.clone()
        }
    }
}

/// Read one input into a string.
///
/// Invalid UTF-8 is replaced with U+FFFD, whose bytes then lex as illegal.
fn read_input(path: &Path) -> Result<String> {
    let bytes = if path == Path::new(STDIN_PATH) {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path).map_err(|e| {
            MktError::FileOperation(format!("Failed to read {}: {}", path.display(), e))
        })?
    };
    debug!(path = %path.display(), bytes = bytes.len(), "read input");

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), "input is not valid UTF-8");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        },
    })
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    TokensCommand::new(args).run()
}
