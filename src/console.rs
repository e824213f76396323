//! The text command loop.
//!
//! A line-oriented prompt state machine driven by stdin lines that the
//! backend feeds in through the event loop. Command handling never blocks:
//! each line advances the prompt state and may produce one effect for the
//! orchestrator to apply.
//!
//! The command surface is deliberately tiny: `pc` / `bc` re-prompt for a pen
//! or brush color, `gb` re-prompts for a shape mode, an empty line is a
//! no-op, and anything else earns the error line.

use std::io::{self, Write};
use std::process::Command;

use log::{debug, warn};

use crate::draw::Color;
use crate::util;

const COMMAND_PROMPT: &str = "simple_drawer_console(> ";
const PEN_COLOR_PROMPT: &str = "pen color?> ";
const BRUSH_COLOR_PROMPT: &str = "brush color?> ";
const SHAPE_PROMPT: &str = "geometric object?> ";
const UNRECOGNIZED: &str = "simple_drawer_error: unrecognizable command";

/// Which question the console is currently asking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    /// Awaiting a command (`pc`, `bc`, `gb`, or empty)
    Command,
    /// Awaiting the answer to `pen color?>`
    PenColor,
    /// Awaiting the answer to `brush color?>`
    BrushColor,
    /// Awaiting the answer to `geometric object?>`
    ShapeName,
}

/// What a handled line asks the orchestrator to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleEffect {
    /// Nothing to apply (prompt transitions, empty input, errors)
    None,
    /// Change the canvas pen color (`None` = no outline)
    SetPenColor(Option<Color>),
    /// Change the canvas brush color (`None` = unfilled)
    SetBrushColor(Option<Color>),
    /// Ask the mode registry to activate the named builder
    ActivateMode(String),
}

/// Console prompt state machine.
#[derive(Debug)]
pub struct Console {
    prompt: Prompt,
    clear_on_focus: bool,
}

impl Console {
    pub fn new(clear_on_focus: bool) -> Self {
        Self {
            prompt: Prompt::Command,
            clear_on_focus,
        }
    }

    /// The text of the question currently on screen.
    pub fn prompt_text(&self) -> &'static str {
        match self.prompt {
            Prompt::Command => COMMAND_PROMPT,
            Prompt::PenColor => PEN_COLOR_PROMPT,
            Prompt::BrushColor => BRUSH_COLOR_PROMPT,
            Prompt::ShapeName => SHAPE_PROMPT,
        }
    }

    /// Prints the current prompt without a trailing newline.
    pub fn print_prompt(&self) {
        print!("{}", self.prompt_text());
        let _ = io::stdout().flush();
    }

    /// Canvas `c` key: start a fresh console entry.
    ///
    /// Optionally clears the terminal, abandons any half-answered question,
    /// and re-prints the command prompt.
    pub fn focus(&mut self) {
        if self.clear_on_focus {
            clear_screen();
        }
        self.prompt = Prompt::Command;
        self.print_prompt();
    }

    /// Advances the state machine with one input line.
    ///
    /// Inputs are whitespace-trimmed. Unrecognized commands print the error
    /// line; unparseable or empty color answers keep the current color.
    pub fn handle_line(&mut self, line: &str) -> ConsoleEffect {
        let input = line.trim();
        match self.prompt {
            Prompt::Command => self.handle_command(input),
            Prompt::PenColor => {
                self.prompt = Prompt::Command;
                match parse_color_answer(input, "pen") {
                    Some(color) => ConsoleEffect::SetPenColor(color),
                    None => ConsoleEffect::None,
                }
            }
            Prompt::BrushColor => {
                self.prompt = Prompt::Command;
                match parse_color_answer(input, "brush") {
                    Some(color) => ConsoleEffect::SetBrushColor(color),
                    None => ConsoleEffect::None,
                }
            }
            Prompt::ShapeName => {
                self.prompt = Prompt::Command;
                if input.is_empty() {
                    ConsoleEffect::None
                } else {
                    ConsoleEffect::ActivateMode(input.to_string())
                }
            }
        }
    }

    fn handle_command(&mut self, input: &str) -> ConsoleEffect {
        match input {
            "bc" => {
                self.prompt = Prompt::BrushColor;
            }
            "pc" => {
                self.prompt = Prompt::PenColor;
            }
            "gb" => {
                self.prompt = Prompt::ShapeName;
            }
            "" => {}
            other => {
                debug!("Unrecognized console command: '{other}'");
                println!("{UNRECOGNIZED}");
            }
        }
        ConsoleEffect::None
    }
}

/// Parses a color answer; `None` means "keep the current color".
fn parse_color_answer(input: &str, which: &str) -> Option<Option<Color>> {
    if input.is_empty() {
        return None;
    }
    match util::parse_color(input) {
        Some(color) => Some(color),
        None => {
            warn!("Ignoring unknown {which} color '{input}'");
            None
        }
    }
}

/// Clears the terminal the way the platform expects.
fn clear_screen() {
    let program = if cfg!(windows) { "cls" } else { "clear" };
    let _ = Command::new(program).status();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn command_prompt_matches_original_text() {
        let console = Console::new(false);
        assert_eq!(console.prompt_text(), "simple_drawer_console(> ");
    }

    #[test]
    fn pc_command_asks_for_pen_color_then_returns() {
        let mut console = Console::new(false);
        assert_eq!(console.handle_line("pc"), ConsoleEffect::None);
        assert_eq!(console.prompt_text(), "pen color?> ");

        assert_eq!(
            console.handle_line("red"),
            ConsoleEffect::SetPenColor(Some(RED))
        );
        assert_eq!(console.prompt_text(), "simple_drawer_console(> ");
    }

    #[test]
    fn bc_command_sets_brush_color() {
        let mut console = Console::new(false);
        console.handle_line("bc");
        assert_eq!(console.prompt_text(), "brush color?> ");
        assert_eq!(
            console.handle_line("black"),
            ConsoleEffect::SetBrushColor(Some(BLACK))
        );
    }

    #[test]
    fn none_token_clears_a_color() {
        let mut console = Console::new(false);
        console.handle_line("bc");
        assert_eq!(console.handle_line("none"), ConsoleEffect::SetBrushColor(None));
    }

    #[test]
    fn empty_color_answer_keeps_current_color() {
        let mut console = Console::new(false);
        console.handle_line("pc");
        assert_eq!(console.handle_line(""), ConsoleEffect::None);
        assert_eq!(console.prompt_text(), "simple_drawer_console(> ");
    }

    #[test]
    fn unknown_color_answer_keeps_current_color() {
        let mut console = Console::new(false);
        console.handle_line("pc");
        assert_eq!(console.handle_line("vermilion-ish"), ConsoleEffect::None);
    }

    #[test]
    fn gb_command_requests_mode_activation() {
        let mut console = Console::new(false);
        console.handle_line("gb");
        assert_eq!(console.prompt_text(), "geometric object?> ");
        assert_eq!(
            console.handle_line("circle"),
            ConsoleEffect::ActivateMode("circle".to_string())
        );
    }

    #[test]
    fn unknown_mode_name_still_forwarded_for_silent_ignore() {
        // The registry is the component that decides unknown names are
        // ignored; the console passes the answer through untouched.
        let mut console = Console::new(false);
        console.handle_line("gb");
        assert_eq!(
            console.handle_line("triangle"),
            ConsoleEffect::ActivateMode("triangle".to_string())
        );
    }

    #[test]
    fn empty_command_is_a_no_op() {
        let mut console = Console::new(false);
        assert_eq!(console.handle_line(""), ConsoleEffect::None);
        assert_eq!(console.prompt_text(), "simple_drawer_console(> ");
    }

    #[test]
    fn inputs_are_whitespace_trimmed() {
        let mut console = Console::new(false);
        assert_eq!(console.handle_line("  gb  "), ConsoleEffect::None);
        assert_eq!(console.prompt_text(), "geometric object?> ");
        assert_eq!(
            console.handle_line(" circle "),
            ConsoleEffect::ActivateMode("circle".to_string())
        );
    }
}
