//! HTTP server components for rhymer.
//!
//! The server takes ownership of an already-loaded dictionary. Handlers only read it, so it is
//! shared between request threads as-is.

use std::net::IpAddr;

use rocket::response::status::NotFound;
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::{get, routes, Build, Rocket, State};
use tracing::{error, info};

use crate::rhymes::dictionary::Dictionary;

/// A container for data owned by web server that's available for all requests.
struct ServerState {
    dict: Dictionary,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct StatsResponse {
    words: usize,
    pronunciations: usize,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct LookupResponse {
    word: String,
    pronunciations: Vec<String>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
struct RhymesResponse {
    query: String,
    rhymes: Vec<String>,
}

/// Handler for the root (/) page: reports the dictionary size.
#[get("/")]
fn index(state: &State<ServerState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        words: state.dict.word_count(),
        pronunciations: state.dict.pronunciation_count(),
    })
}

/// Handler for querying the dictionary for a single word.
#[get("/lookup?<word>")]
fn lookup(state: &State<ServerState>, word: &str) -> Result<Json<LookupResponse>, NotFound<String>> {
    let spelling = state.dict.normalize(word);
    let entry = state
        .dict
        .get_word(&spelling)
        .ok_or_else(|| NotFound(format!("word is not in the dictionary: {}", spelling)))?;

    let mut pronunciations: Vec<String> =
        entry.pronunciations().iter().map(|p| p.to_string()).collect();
    pronunciations.sort();
    Ok(Json(LookupResponse {
        word: spelling,
        pronunciations,
    }))
}

/// Handler for the rhymes of a single word.
#[get("/rhymes?<word>")]
fn rhymes(state: &State<ServerState>, word: &str) -> Result<Json<RhymesResponse>, NotFound<String>> {
    let spelling = state.dict.normalize(word);
    match state.dict.get_rhymes(&spelling) {
        Ok(found) => Ok(Json(RhymesResponse {
            query: spelling,
            rhymes: found.into_iter().collect(),
        })),
        Err(e) => Err(NotFound(e.to_string())),
    }
}

/// Assembles the server around `dictionary` without launching it.
pub fn build(dictionary: Dictionary, config: rocket::Config) -> Rocket<Build> {
    rocket::custom(config)
        .manage(ServerState { dict: dictionary })
        .mount("/", routes![index, lookup, rhymes])
}

/// Starts the Rocket HTTP server and awaits until the server shuts down.
///
/// Args:
///
/// * `dictionary` - An already-initialized dictionary to use when handling all requests.
/// * `address`, `port` - Where to listen.
pub async fn run(dictionary: Dictionary, address: IpAddr, port: u16) {
    info!("Launching web server on {}:{}. Type Control-C to stop it.", address, port);

    let config = rocket::Config {
        address,
        port,
        ..rocket::Config::default()
    };
    if let Err(e) = build(dictionary, config).launch().await {
        error!("Failed to launch web server: {}", e);
    }
}
