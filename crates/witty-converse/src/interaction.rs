//! Line-oriented interaction loop.
//!
//! Prompts, reads one line per turn and hands it to a [`ConversationSession`].
//! All bot output happens through action side effects (usually `say`).

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::session::ConversationSession;
use crate::ConverseError;

pub const DEFAULT_PROMPT: &str = "Me: ";

#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Converse(#[from] ConverseError),
}

pub struct Interaction<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl Interaction<BufReader<io::Stdin>, io::Stdout> {
    /// Read from stdin, prompt on stdout.
    pub fn console() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R, W> Interaction<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Drive `session` until the input ends. Returns the number of turns run.
    ///
    /// Blank lines re-prompt without touching the session. A failed turn
    /// ends the loop; the caller decides whether that is fatal.
    pub async fn run(&mut self, session: &mut ConversationSession) -> Result<u32, InteractionError> {
        let mut turns = 0;
        let mut line = String::new();

        loop {
            self.writer.write_all(self.prompt.as_bytes()).await?;
            self.writer.flush().await?;

            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                debug!(turns, "Input closed");
                return Ok(turns);
            }

            if line.trim().is_empty() {
                continue;
            }

            let message = line.trim_end_matches(['\r', '\n']);
            session.handle_turn(Some(message)).await?;
            turns += 1;
        }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}
