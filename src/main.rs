use std::io;
use std::process;

use tracing::error;
use tracing_subscriber::EnvFilter;

use rhymer::rhymes::config::{self, Command, Config};
use rhymer::rhymes::dictionary::Dictionary;
use rhymer::rhymes::{prompt, server};

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rhymer=info")),
        )
        .init();

    let config = match Config::from_matches(&config::app().get_matches()) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    let dict = match Dictionary::from_file(&config.dict_path, config.case_folding) {
        Ok(dict) => dict,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    match config.command {
        Command::Query(words) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for word in &words {
                if let Err(e) = prompt::write_rhymes(&mut out, &dict, word) {
                    error!("Failed to write output: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::Repl => {
            let stdin = io::stdin();
            if let Err(e) = prompt::run_prompt(&dict, stdin.lock(), io::stdout()) {
                error!("Failed to read input: {}", e);
                process::exit(1);
            }
        }
        Command::Serve { address, port } => server::run(dict, address, port).await,
    }
}
