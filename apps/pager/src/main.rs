use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use client_core::UsersClient;
use shared::domain::PageNumber;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use users_pager::{
    config::load_settings,
    controller::commands::{parse_command, resolve_control, PagerCommand},
    ui::{MemoryRegions, Renderer},
    LoadOutcome, PagerController,
};

#[derive(Parser, Debug)]
#[command(about = "Browse a paginated users endpoint from the terminal")]
struct Args {
    /// Base URL of the server exposing the users endpoint.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings =
        load_settings(args.config.as_deref()).context("failed to load settings")?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let client = UsersClient::with_options(
        &settings.server_url,
        &settings.users_path,
        settings.request_timeout(),
    )
    .context("failed to build users client")?;
    tracing::info!(endpoint = %client.endpoint(), "starting users pager");

    let regions = Arc::new(MemoryRegions::default());
    let renderer = Renderer::new().context("failed to compile templates")?;
    let controller = PagerController::new(Arc::new(client), regions.clone(), renderer);

    controller.load_page(PageNumber::new(args.page)).await;
    print_regions(&regions).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let Some(command) = parse_command(&line) else {
            println!("commands: <page number>, next, prev, reload, quit");
            continue;
        };

        let outcome = match command {
            PagerCommand::Quit => break,
            PagerCommand::Reload => controller.reload().await,
            navigation => {
                let controls = regions.controls().await;
                match resolve_control(navigation, &controls) {
                    Some(control) => controller.activate(control).await,
                    None => {
                        println!("no such control on screen");
                        continue;
                    }
                }
            }
        };

        if outcome == LoadOutcome::Ignored {
            println!("control is disabled or already current");
            continue;
        }
        print_regions(&regions).await;
    }

    Ok(())
}

async fn print_regions(regions: &MemoryRegions) {
    let snapshot = regions.snapshot().await;
    println!("<!-- users -->\n{}", snapshot.users_html);
    println!("<!-- pagination -->\n{}", snapshot.pagination.html);
}
