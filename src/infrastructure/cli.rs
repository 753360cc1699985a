use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        long,
        value_name = "PATH",
        help = "JSON5 fixture file to show instead of the built-in records"
    )]
    pub fixtures: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["meowbuddy"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert!(cli.fixtures.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "meowbuddy",
            "--tick-rate",
            "2",
            "-f",
            "60",
            "--fixtures",
            "data.json5",
        ]);
        assert_eq!(cli.tick_rate, 2.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert_eq!(cli.fixtures, Some(PathBuf::from("data.json5")));
    }

    #[test]
    fn test_command_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
