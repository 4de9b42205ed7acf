use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Billboard - file-driven content for marquee, carousel and launcher windows
#[derive(Parser, Debug)]
#[command(name = "billboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for scripts and host processes
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./billboard.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the marquee text
    Marquee,

    /// Print the rendered carousel pages
    Carousel {
        /// Render even if nothing changed
        #[arg(short, long)]
        force: bool,
    },

    /// Render one markup file to HTML
    Render {
        /// Markup file to render
        file: PathBuf,
    },

    /// List launcher candidates
    Candidates,

    /// Open a launcher candidate by key
    Open {
        /// Candidate key, e.g. `games/Chess`
        key: String,
    },

    /// Poll content and accept commands on stdin until quit
    Serve {
        /// Poll interval in milliseconds (overrides config)
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Do not start the loopback toggle endpoint
        #[arg(long)]
        no_http: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_marquee() {
        let cli = Cli::try_parse_from(["billboard", "marquee"]).unwrap();
        assert!(matches!(cli.command, Commands::Marquee));
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["billboard", "carousel", "--json", "-vv", "--config", "b.toml"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("b.toml")));
        assert!(matches!(cli.command, Commands::Carousel { force: false }));
    }

    #[test]
    fn test_cli_parse_carousel_force() {
        let cli = Cli::try_parse_from(["billboard", "carousel", "-f"]).unwrap();
        assert!(matches!(cli.command, Commands::Carousel { force: true }));
    }

    #[test]
    fn test_cli_parse_open_key() {
        let cli = Cli::try_parse_from(["billboard", "open", "games/Chess"]).unwrap();
        if let Commands::Open { key } = cli.command {
            assert_eq!(key, "games/Chess");
        } else {
            panic!("Expected Open command");
        }
    }

    #[test]
    fn test_cli_parse_serve() {
        let cli =
            Cli::try_parse_from(["billboard", "serve", "--interval-ms", "250", "--no-http"])
                .unwrap();
        if let Commands::Serve {
            interval_ms,
            no_http,
        } = cli.command
        {
            assert_eq!(interval_ms, Some(250));
            assert!(no_http);
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["billboard"]).is_err());
        assert!(Cli::try_parse_from(["billboard", "render"]).is_err());
    }
}
