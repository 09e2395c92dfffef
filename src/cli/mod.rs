use clap::{Parser, Subcommand};

mod panel;
mod score;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "t2d-prs", version, about = "T2D Polygenic Risk CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Score(score::ScoreArgs),
    Validate(validate::ValidateArgs),
    Panel(panel::PanelArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Score(args) => score::handle(args),
            Command::Validate(args) => validate::handle(args),
            Command::Panel(args) => panel::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
