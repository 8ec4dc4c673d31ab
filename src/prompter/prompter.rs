use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{CURSOR_BLINKING_BLOCK, HIDE_CURSOR, SHOW_CURSOR};
use std::io::{self, BufRead, BufReader, Write};

#[derive(Debug, Default, Clone)]
pub struct Prompter;

impl Prompter {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn hide_cursor() {
        print!("{HIDE_CURSOR}");
        let _ = io::stdout().flush();
    }

    #[inline]
    fn show_cursor_blinking() {
        print!("{SHOW_CURSOR}{CURSOR_BLINKING_BLOCK}");
        let _ = io::stdout().flush();
    }

    pub fn run<F: Flow>(&self, flow: F) -> Result<()> {
        let reader = BufReader::new(io::stdin());
        self.run_with_reader(flow, reader)
    }

    /// Loops render → read → handle until the flow finishes or input ends.
    pub fn run_with_reader<F: Flow, R: BufRead>(&self, mut flow: F, mut reader: R) -> Result<()> {
        loop {
            Self::hide_cursor();
            flow.render()?;
            Self::show_cursor_blinking();

            // Bytes that are not UTF-8 become U+FFFD instead of ending the session.
            let mut raw = Vec::new();
            let n = reader.read_until(b'\n', &mut raw).map_err(Error::Io)?;
            if n == 0 {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&raw);

            match flow.handle_input(line.trim())? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish => return Ok(()),
            }
        }
    }
}
