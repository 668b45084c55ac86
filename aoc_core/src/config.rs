extern crate getopts;
use getopts::Options;
use std::env;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parts {
    pub first: bool,
    pub second: bool,
}

impl Parts {
    pub const BOTH: Parts = Parts {
        first: true,
        second: true,
    };

    pub fn only(part: u32) -> Option<Parts> {
        match part {
            1 => Some(Parts {
                first: true,
                second: false,
            }),
            2 => Some(Parts {
                first: false,
                second: true,
            }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub day: u32,
    pub input_path: Option<String>,
    pub parts: Parts,
    pub render: bool,
    pub json: bool,
    pub verbose: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `--help` was requested; carries the usage text.
    #[error("{0}")]
    Help(String),
    #[error("error: {0}")]
    Invalid(String),
}

impl Config {
    pub const fn default() -> Config {
        Config {
            day: 0,
            input_path: None,
            parts: Parts::BOTH,
            render: false,
            json: false,
            verbose: false,
        }
    }

    /// Input file of the selected day: `--input`, or `dayNN_input.txt` in the working directory.
    pub fn input_path(&self) -> String {
        match &self.input_path {
            Some(path) => path.clone(),
            None => format!("day{:02}_input.txt", self.day),
        }
    }

    pub fn parse_from_args() -> Config {
        let args = env::args().collect::<Vec<_>>();
        match Config::parse_args(&args) {
            Ok(config) => config,
            Err(ConfigError::Help(usage)) => {
                print!("{}", usage);
                std::process::exit(0);
            }
            Err(err) => {
                println!("{}", err);
                std::process::exit(1);
            }
        }
    }

    pub fn parse_args(args: &[String]) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        let mut opts = Options::new();

        let mut bool_flags = [
            (
                &mut config.render,
                "render",
                "rendering of the puzzle board (if the day has one)",
            ),
            (
                &mut config.json,
                "json",
                "JSON output of the rendered board",
            ),
            (&mut config.verbose, "verbose", "show verbose outputs"),
        ];
        for (opt, name, desc) in &mut bool_flags {
            if **opt {
                opts.optflag(
                    "",
                    &format!("enable-{}", name),
                    &format!("Enable {} (default).", desc),
                );
                opts.optflag(
                    "",
                    &format!("disable-{}", name),
                    &format!("Disable {}.", desc),
                );
            } else {
                opts.optflag(
                    "",
                    &format!("enable-{}", name),
                    &format!("Enable {}.", desc),
                );
                opts.optflag(
                    "",
                    &format!("disable-{}", name),
                    &format!("Disable {} (default).", desc),
                );
            }
        }
        opts.optopt("d", "day", "Specify the day of the puzzle to solve (1-25).", "DAY");
        opts.optopt(
            "i",
            "input",
            "Specify the input file (default: dayNN_input.txt).",
            "PATH",
        );
        opts.optopt("p", "part", "Solve only the given part (1 or 2).", "PART");
        opts.optflag("h", "help", "Display this help");

        let program = args.first().map(String::as_str).unwrap_or("aoc");
        let matches = opts
            .parse(args.iter().skip(1))
            .map_err(|f| ConfigError::Invalid(f.to_string()))?;

        if matches.opt_present("h") {
            let brief = format!("Usage: {} --day DAY [options]", program);
            return Err(ConfigError::Help(opts.usage(&brief)));
        }

        for (opt, name, _) in &mut bool_flags {
            let is_set_enable = matches.opt_present(&format!("enable-{}", name));
            let is_set_disable = matches.opt_present(&format!("disable-{}", name));

            match (is_set_enable, is_set_disable) {
                (true, true) => {
                    return Err(ConfigError::Invalid(format!(
                        "conflicting options enable-{} and disable-{} are specified at the same time",
                        name, name
                    )));
                }
                (true, false) => **opt = true,
                (false, true) => **opt = false,
                (false, false) => (),
            }
        }

        match matches.opt_str("day") {
            Some(s) => {
                let day = s.parse::<u32>().map_err(|f| {
                    ConfigError::Invalid(format!("parse failed for --day: {}", f))
                })?;
                if !(1..=25).contains(&day) {
                    return Err(ConfigError::Invalid(format!(
                        "--day must be between 1 and 25 (got {})",
                        day
                    )));
                }
                config.day = day;
            }
            None => return Err(ConfigError::Invalid(String::from("--day is required"))),
        }
        if let Some(s) = matches.opt_str("part") {
            let parts = s
                .parse::<u32>()
                .ok()
                .and_then(Parts::only)
                .ok_or_else(|| ConfigError::Invalid(format!("--part must be 1 or 2 (got {})", s)))?;
            config.parts = parts;
        }
        config.input_path = matches.opt_str("input");

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("aoc")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::parse_args(&args(&["--day", "7"])).unwrap();
        assert_eq!(config.day, 7);
        assert_eq!(config.parts, Parts::BOTH);
        assert!(!config.render);
        assert!(!config.json);
        assert_eq!(config.input_path(), "day07_input.txt");
    }

    #[test]
    fn test_config_options() {
        let config = Config::parse_args(&args(&[
            "-d",
            "15",
            "--input",
            "battle.txt",
            "--part",
            "2",
            "--enable-render",
            "--enable-verbose",
        ]))
        .unwrap();
        assert_eq!(config.day, 15);
        assert_eq!(config.input_path(), "battle.txt");
        assert_eq!(
            config.parts,
            Parts {
                first: false,
                second: true
            }
        );
        assert!(config.render);
        assert!(config.verbose);
    }

    #[test]
    fn test_config_errors() {
        assert!(matches!(
            Config::parse_args(&args(&[])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::parse_args(&args(&["--day", "26"])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::parse_args(&args(&["--day", "1", "--part", "3"])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::parse_args(&args(&["--day", "1", "--enable-json", "--disable-json"])),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Config::parse_args(&args(&["--help"])),
            Err(ConfigError::Help(_))
        ));
    }
}
