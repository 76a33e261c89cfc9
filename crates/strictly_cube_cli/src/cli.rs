//! Command-line interface for strictly_cube.

use clap::{Parser, Subcommand};
use strictly_cube::RuleSet;

/// Strictly Cube - 3x3x3 tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_cube")]
#[command(about = "Play tic-tac-toe on a 3x3x3 cube", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a local game, reading moves from stdin
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Override the configured rules (open, three-in-a-row)
        #[arg(short, long)]
        rules: Option<RuleSet>,
    },

    /// Print the static board meshes as JSON
    Scene,

    /// Resolve a pointer ray to a cell
    Pick {
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        origin: [f64; 3],

        /// Ray direction as x,y,z
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        direction: [f64; 3],
    },
}

/// Parses `x,y,z` into three floats.
pub fn parse_triple(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{}'", s));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse()
            .map_err(|e| format!("invalid number '{}': {}", part, e))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple("1, -2.5,3"), Ok([1.0, -2.5, 3.0]));
        assert!(parse_triple("1,2").is_err());
        assert!(parse_triple("a,b,c").is_err());
    }

    #[test]
    fn test_cli_parses_play() {
        let cli = Cli::try_parse_from(["strictly_cube", "play", "--rules", "three-in-a-row"]).unwrap();
        match cli.command {
            Command::Play { config, rules } => {
                assert!(config.is_none());
                assert_eq!(rules, Some(RuleSet::ThreeInARow));
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_pick() {
        let cli = Cli::try_parse_from([
            "strictly_cube",
            "pick",
            "--origin",
            "0,0,100",
            "--direction",
            "0,0,-1",
        ])
        .unwrap();
        match cli.command {
            Command::Pick { origin, direction } => {
                assert_eq!(origin, [0.0, 0.0, 100.0]);
                assert_eq!(direction, [0.0, 0.0, -1.0]);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }
}
