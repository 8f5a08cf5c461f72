use anyhow::{Context, Result, anyhow, bail};
use roster_core::carousel::DetailTab;

use crate::messages::UserCommand;

pub const HELP: &str = "commands: h/left, l/right, o/open, c/close, tab <stats|abilities|moves|types>, click <index>, r/reload, q/quit";

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<UserCommand>> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match head.to_ascii_lowercase().as_str() {
        "h" | "left" => UserCommand::Left,
        "l" | "right" => UserCommand::Right,
        "o" | "open" => UserCommand::Open,
        "c" | "close" => UserCommand::Close,
        "r" | "reload" => UserCommand::Reload,
        "q" | "quit" => UserCommand::Quit,
        "tab" => {
            let name = arg.ok_or_else(|| anyhow!("tab needs a name"))?;
            let tab = DetailTab::from_name(name).ok_or_else(|| anyhow!("unknown tab '{name}'"))?;
            UserCommand::Tab(tab)
        }
        "click" => {
            let raw = arg.ok_or_else(|| anyhow!("click needs a render index"))?;
            let index = raw
                .parse::<usize>()
                .with_context(|| format!("invalid render index '{raw}'"))?;
            UserCommand::Click(index)
        }
        other => bail!("unknown command '{other}' ({HELP})"),
    };
    Ok(Some(command))
}
