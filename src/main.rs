use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use log::{error, info};

use matchstats::config::{Config, SourceKind};
use matchstats::engine;
use serde::Serialize;

use matchstats::serialize::to_json_pretty;
use matchstats::{EngineError, EventCache};

const USAGE: &str = "usage:
  matchstats events  <match_id>
  matchstats player  <match_id> <player name>
  matchstats stats   <match_id> <player name>
  matchstats lineups <match_id>
  matchstats batch   <match_id>...

options:
  --source=http|file|fake
  --data-dir=PATH";

enum Command {
    Events(u64),
    Player(u64, String),
    Stats(u64, String),
    Lineups(u64),
    Batch(Vec<u64>),
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<EngineError>() {
                Some(EngineError::UpstreamFetch { .. }) => 3,
                Some(_) => 2,
                None => 1,
            };
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let mut config = Config::from_env()?;
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if wants_help(&args) {
        println!("{USAGE}");
        return Ok(());
    }
    let positional = apply_flags(&mut config, &args)?;
    let command = parse_command(&positional)?;

    info!("using {:?} source", config.source);
    let provider = config.build_provider()?;
    let cache = EventCache::new();

    match command {
        Command::Events(match_id) => {
            let summary = engine::get_main_events(&provider, Some(&cache), match_id)?;
            print(&summary)?;
        }
        Command::Player(match_id, name) => {
            let profile = engine::get_player_profile(&provider, Some(&cache), match_id, &name)?;
            print(&profile)?;
        }
        Command::Stats(match_id, name) => {
            let report = engine::get_player_stats(&provider, Some(&cache), match_id, &name)?;
            print(&report)?;
        }
        Command::Lineups(match_id) => {
            let xi = engine::get_starting_xi(&provider, match_id)?;
            print(&xi)?;
        }
        Command::Batch(match_ids) => {
            let results = engine::main_events_for_matches(
                &provider,
                Some(&cache),
                &match_ids,
                config.parallelism,
            );
            let mut failures = 0;
            for (match_id, result) in results {
                match result {
                    Ok(summary) => {
                        println!("match {match_id}");
                        print(&summary)?;
                    }
                    Err(err) => {
                        failures += 1;
                        eprintln!("match {match_id}: {err}");
                    }
                }
            }
            info!("batch finished: {}/{} ok", match_ids.len() - failures, match_ids.len());
        }
    }

    Ok(())
}

fn print<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_json_pretty(value)?);
    Ok(())
}

fn wants_help(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "-h" || arg == "--help")
}

fn apply_flags(config: &mut Config, args: &[String]) -> Result<Vec<String>> {
    let mut positional = Vec::new();
    let mut idx = 0;
    while idx < args.len() {
        let arg = &args[idx];
        if let Some(raw) = arg.strip_prefix("--source=") {
            config.source =
                SourceKind::parse(raw).ok_or_else(|| anyhow!("unknown source '{raw}'"))?;
        } else if let Some(path) = arg.strip_prefix("--data-dir=") {
            config.data_dir = PathBuf::from(path.trim());
        } else if arg == "--data-dir" {
            let next = args.get(idx + 1).context("--data-dir needs a path")?;
            config.data_dir = PathBuf::from(next.trim());
            idx += 1;
        } else {
            positional.push(arg.clone());
        }
        idx += 1;
    }
    Ok(positional)
}

fn parse_command(args: &[String]) -> Result<Command> {
    let Some((name, rest)) = args.split_first() else {
        return Err(anyhow!("{USAGE}"));
    };
    match name.as_str() {
        "events" => Ok(Command::Events(match_id_arg(rest.first())?)),
        "player" => Ok(Command::Player(match_id_arg(rest.first())?, player_arg(rest)?)),
        "stats" => Ok(Command::Stats(match_id_arg(rest.first())?, player_arg(rest)?)),
        "lineups" => Ok(Command::Lineups(match_id_arg(rest.first())?)),
        "batch" => {
            if rest.is_empty() {
                return Err(anyhow!("batch needs at least one match id"));
            }
            let ids = rest
                .iter()
                .map(|raw| match_id_arg(Some(raw)))
                .collect::<Result<Vec<_>>>()?;
            Ok(Command::Batch(ids))
        }
        other => Err(anyhow!("unknown command '{other}'\n{USAGE}")),
    }
}

fn match_id_arg(raw: Option<&String>) -> Result<u64> {
    let raw = raw.context("missing match id")?;
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("invalid match id '{raw}'"))
}

// Player names contain spaces; accept them unquoted.
fn player_arg(rest: &[String]) -> Result<String> {
    let name = rest.get(1..).unwrap_or_default().join(" ");
    if name.trim().is_empty() {
        return Err(anyhow!("missing player name"));
    }
    Ok(name.trim().to_string())
}
