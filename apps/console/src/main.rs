use std::io::Write;

use anyhow::Result;
use clap::Parser;
use console_core::{eval::HELP, ConsoleSession, Reply};
use shared::catalog::RouteConvention;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod ansi;
mod config;

use config::Settings;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    routes: Option<RouteConvention>,
    #[arg(long, default_value = "console.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = config::load_settings(&args.config);
    let server_url = args
        .server_url
        .unwrap_or_else(|| settings.server_url.clone());
    let convention = resolve_convention(args.routes, &settings);
    info!(%server_url, %convention, "starting console");

    let mut session = ConsoleSession::new(&server_url, convention)?;

    println!(
        "{}API debug console pointed at {server_url} using {convention} routes.{}",
        ansi::FAINT,
        ansi::RESET
    );
    print!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print_prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match session.eval(&line).await {
            Reply::Output(text) => print_reply(&text),
            Reply::Quit => break,
        }
    }
    println!();

    Ok(())
}

fn resolve_convention(cli: Option<RouteConvention>, settings: &Settings) -> RouteConvention {
    if let Some(convention) = cli {
        return convention;
    }
    match settings.routes.parse() {
        Ok(convention) => convention,
        Err(err) => {
            warn!("{err}; falling back to classic routes");
            RouteConvention::Classic
        }
    }
}

fn print_prompt() {
    print!("\n{}>>> {}", ansi::RESET, ansi::GREEN);
    let _ = std::io::stdout().flush();
}

fn print_reply(text: &str) {
    if text.is_empty() {
        print!("{}", ansi::RESET);
        return;
    }
    println!("{}{}{}", ansi::BLUE, text.trim_end(), ansi::RESET);
}
