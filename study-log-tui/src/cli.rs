use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "study-log-tui")]
#[command(about = "Terminal UI for keeping a study log")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the configured remote store
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_kebab_case_subcommand() {
        let cli = Cli::try_parse_from(["study-log-tui", "config-path"]).unwrap();
        assert!(matches!(cli.command, Commands::ConfigPath));
    }
}
