use crate::command::registry::{CommandRegistry, Outcome};
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::chrome::{PROMPT, UiChrome};

pub const GREETING: &str = "Welcome to the assistant bot!";

/// The contact-book REPL: one command per line against the context's book.
pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    registry: CommandRegistry,
    chrome: UiChrome,
    logger: Logger,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let registry = CommandRegistry::from_context(ctx);
        let logger = ctx.logger.clone();
        Self {
            ctx,
            registry,
            chrome: UiChrome::new(),
            logger,
        }
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        self.chrome.print_prompt(PROMPT);
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.chrome.end_prompt();
        let line = input.trim();
        if !line.is_empty() {
            self.logger
                .info(format!("Command run: {line}"), LogTarget::FileOnly);
        }

        match self.registry.dispatch(line, &mut self.ctx.book) {
            Outcome::Skip => Ok(FlowCtrl::Continue),
            Outcome::Reply(text) => {
                self.logger.info(text, LogTarget::ConsoleOnly);
                Ok(FlowCtrl::Continue)
            }
            Outcome::Exit(text) => {
                self.logger.info(text, LogTarget::ConsoleAndFile);
                Ok(FlowCtrl::Finish)
            }
        }
    }
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.print_banner();
        println!();
        println!("{GREETING}");
        println!("Type 'help' to list commands.");
        println!();
        match self.ctx.config.source() {
            Some(path) => println!("Config path: {}", path.display()),
            None => println!("Config path: (defaults)"),
        }
        for (key, description, value) in self.ctx.config.rows().iter() {
            println!("  {key} = {value}  ({description})");
        }
        if self.logger.file_logging_enabled() {
            println!("Logs path: {}", self.logger.log_dir().display());
        }
        println!();
        self.logger
            .info("Session started.", LogTarget::FileOnly);
        self.ctx.startup_displayed = true;
    }
}
