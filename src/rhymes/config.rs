//! Command-line configuration.
//!
//! Every option can also come from the environment, e.g. `RHYMER_DICT=/usr/share/cmudict.dict`.

use std::ffi::OsString;
use std::net::IpAddr;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches, SubCommand};

use crate::rhymes::dictionary::CaseFolding;
use crate::rhymes::error::{Error, Result};

pub const DEFAULT_DICT_PATH: &str = "./cmudict.dict";
pub const DEFAULT_CASE_FOLDING: &str = "lower";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "8000";

/// What the binary does once the dictionary is loaded.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Print the rhymes for each of the given words.
    Query(Vec<String>),
    /// Prompt for words on stdin until EOF or a blank line.
    Repl,
    /// Answer lookups over HTTP.
    Serve { address: IpAddr, port: u16 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub dict_path: PathBuf,
    pub case_folding: CaseFolding,
    pub command: Command,
}

/// The clap definition of the command line.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("rhymer")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finds rhymes using the CMU pronouncing dictionary.")
        .arg(
            Arg::with_name("dict")
                .short("d")
                .long("dict")
                .value_name("PATH")
                .help("The cmudict file to load")
                .env("RHYMER_DICT")
                .default_value(DEFAULT_DICT_PATH),
        )
        .arg(
            Arg::with_name("case")
                .long("case")
                .value_name("FOLDING")
                .help("How spellings are normalized, in the dictionary and in queries")
                .env("RHYMER_CASE")
                .possible_values(&["lower", "upper", "preserve"])
                .default_value(DEFAULT_CASE_FOLDING),
        )
        .subcommand(
            SubCommand::with_name("query")
                .about("Prints the rhymes for each word")
                .arg(Arg::with_name("WORD").required(true).multiple(true)),
        )
        .subcommand(SubCommand::with_name("repl").about("Prompts for words interactively"))
        .subcommand(
            SubCommand::with_name("serve")
                .about("Runs the HTTP server")
                .arg(
                    Arg::with_name("address")
                        .long("address")
                        .value_name("IP")
                        .env("RHYMER_ADDRESS")
                        .default_value(DEFAULT_ADDRESS),
                )
                .arg(
                    Arg::with_name("port")
                        .short("p")
                        .long("port")
                        .value_name("PORT")
                        .env("RHYMER_PORT")
                        .default_value(DEFAULT_PORT),
                ),
        )
}

impl Config {
    /// Parses a full argument list, including the program name.
    pub fn from_args<I, T>(args: I) -> Result<Config>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app()
            .get_matches_from_safe(args)
            .map_err(|e| Error::Config(e.message))?;
        Config::from_matches(&matches)
    }

    pub fn from_matches(matches: &ArgMatches) -> Result<Config> {
        let dict_path = PathBuf::from(matches.value_of("dict").unwrap_or(DEFAULT_DICT_PATH));
        let case_folding = matches.value_of("case").unwrap_or(DEFAULT_CASE_FOLDING).parse()?;

        let command = match matches.subcommand() {
            ("query", Some(sub)) => Command::Query(
                sub.values_of("WORD")
                    .map(|words| words.map(String::from).collect())
                    .unwrap_or_default(),
            ),
            ("serve", Some(sub)) => Command::Serve {
                address: parse_value(sub, "address", DEFAULT_ADDRESS)?,
                port: parse_value(sub, "port", DEFAULT_PORT)?,
            },
            _ => Command::Repl,
        };

        Ok(Config {
            dict_path,
            case_folding,
            command,
        })
    }
}

fn parse_value<T: std::str::FromStr>(matches: &ArgMatches, name: &str, default: &str) -> Result<T> {
    let raw = matches.value_of(name).unwrap_or(default);
    raw.parse()
        .map_err(|_| Error::Config(format!("invalid value {:?} for --{}", raw, name)))
}
