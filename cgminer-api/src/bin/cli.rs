//! Command-line interface for the miner API.
//!
//! Issues one command against a miner and prints the result as JSON.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use cgminer_api::response::RawResponse;
use cgminer_api::{Client, ClientConfig, Command};

fn usage() -> ! {
    eprintln!("Usage: cgminer-cli <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  version                      Miner software and model");
    eprintln!("  summary                      Miner-wide counters");
    eprintln!("  stats [s7|s9|t9|d3|l3]       Board statistics, optionally narrowed to a model");
    eprintln!("  devs                         Per-device counters");
    eprintln!("  devdetails                   Device descriptions");
    eprintln!("  pools                        Configured pools");
    eprintln!("  addpool <url> <user> <pass>  Add a pool");
    eprintln!("  enablepool <id>              Enable a pool");
    eprintln!("  disablepool <id>             Disable a pool");
    eprintln!("  removepool <id>              Remove a pool");
    eprintln!("  switchpool <id>              Make a pool the active one");
    eprintln!("  restart                      Restart the miner process");
    eprintln!("  quit                         Stop the miner process");
    eprintln!("  raw <command> [parameter]    Any command, full response envelope");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CGMINER_API_ADDR     Miner API address (default: 127.0.0.1:4028)");
    eprintln!("  CGMINER_API_TIMEOUT  Timeout in seconds (default: 5)");
    eprintln!("  RUST_LOG             Log filter (default: warn)");
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    cgminer_api::tracing::init_stderr(LevelFilter::WARN);

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage();
    };
    let rest = &args[1..];

    let client = make_client()?;

    match command.as_str() {
        "version" => print_json(&client.version().await.context("version")?)?,
        "summary" => print_json(&client.summary().await.context("summary")?)?,
        "stats" => cmd_stats(&client, rest.first().map(String::as_str)).await?,
        "devs" => print_json(&client.devs().await.context("devs")?)?,
        "devdetails" => print_json(&client.dev_details().await.context("devdetails")?)?,
        "pools" => print_json(&client.pools().await.context("pools")?)?,
        "addpool" => {
            let [url, user, pass] = rest else {
                usage();
            };
            client
                .add_pool(url, user, pass)
                .await
                .context("addpool")?;
        }
        "enablepool" => client.enable_pool(pool_id(rest)?).await.context("enablepool")?,
        "disablepool" => client
            .disable_pool(pool_id(rest)?)
            .await
            .context("disablepool")?,
        "removepool" => client.remove_pool(pool_id(rest)?).await.context("removepool")?,
        "switchpool" => client.switch_pool(pool_id(rest)?).await.context("switchpool")?,
        "restart" => client.restart().await.context("restart")?,
        "quit" => client.quit().await.context("quit")?,
        "raw" => cmd_raw(&client, rest).await?,
        _ => {
            eprintln!("Unknown command: {}", command);
            eprintln!("Run without arguments to see usage.");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Build a client, honoring CGMINER_API_ADDR and CGMINER_API_TIMEOUT if set.
fn make_client() -> Result<Client> {
    let mut config = ClientConfig::default();

    if let Ok(addr) = env::var("CGMINER_API_ADDR") {
        config.addr = addr;
    }

    if let Ok(secs) = env::var("CGMINER_API_TIMEOUT") {
        let secs: u64 = secs
            .parse()
            .with_context(|| format!("CGMINER_API_TIMEOUT is not a number of seconds: {secs}"))?;
        config.timeout = Duration::from_secs(secs);
    }

    Ok(Client::with_config(config))
}

fn pool_id(args: &[String]) -> Result<i64> {
    let [id] = args else {
        usage();
    };
    id.parse()
        .with_context(|| format!("pool id must be an integer: {id}"))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_stats(client: &Client, model: Option<&str>) -> Result<()> {
    let stats = client.stats().await.context("stats")?;

    match model {
        None => print_json(&stats),
        Some("s7") => print_json(&stats.s7()),
        Some("s9") => print_json(&stats.s9()),
        Some("t9") => print_json(&stats.t9()),
        Some("d3") => print_json(&stats.d3()),
        Some("l3") => print_json(&stats.l3()),
        Some(other) => bail!("unknown model {other}, expected one of s7, s9, t9, d3, l3"),
    }
}

/// Issue an arbitrary command and print the full response envelope.
async fn cmd_raw(client: &Client, args: &[String]) -> Result<()> {
    let command = match args {
        [name] => Command::new(name.as_str()),
        [name, parameter] => Command::with_parameter(name.as_str(), parameter.as_str()),
        _ => usage(),
    };

    let response: RawResponse = client
        .call(&command)
        .await
        .with_context(|| format!("raw {}", command.name()))?;
    print_json(&response.body)
}

