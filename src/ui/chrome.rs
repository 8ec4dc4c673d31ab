use crate::ui::ansi::{
    CLEAR_LINE_REST, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC,
    STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Prompt shown before every command.
pub const PROMPT: &str = "Enter a command: ";

const BANNER_WIDTH: usize = 50;

/// Screen-level helpers (banner, prompt line).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn print_banner(&self) {
        for line in self.banner_lines() {
            println!("{line}");
        }
    }

    /// Boxed title with the crate version, centered in the terminal.
    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}C O N T A C T S{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Your assistant bot{STYLE_RESET}");
        let margin = " ".repeat(self.util.center_pad(BANNER_WIDTH + 2));
        vec![
            format!("{margin}╭{}╮", "─".repeat(BANNER_WIDTH)),
            format!("{margin}│{}│", self.center_in_box(&title, BANNER_WIDTH)),
            format!("{margin}│{}│", self.center_in_box(&subtitle, BANNER_WIDTH)),
            format!("{margin}╰{}╯", "─".repeat(BANNER_WIDTH)),
        ]
    }

    /// Styled prompt line; the cursor is left right after `prompt`.
    pub fn print_prompt(&self, prompt: &str) {
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    /// Resets styling after the user pressed enter.
    pub fn end_prompt(&self) {
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    pub fn center_in_box(&self, content: &str, width: usize) -> String {
        let content_width = self.util.visible_width(content);
        if content_width >= width {
            return content.to_string();
        }
        let left = (width - content_width) / 2;
        let right = width - content_width - left;
        format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
    }
}
