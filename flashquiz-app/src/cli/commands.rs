use crate::api::server as api_server;
use crate::cli::opts::*;
use crate::remote::RemoteApi;

use anyhow::{Context, Result};
use flashquiz_core::{CoreError, DeckApi, DeckService};
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn run_cli(args: Cli) -> Result<()> {
    match args.cmd {
        Command::Serve(cmd) => {
            let addr: SocketAddr = cmd
                .addr
                .parse()
                .with_context(|| format!("invalid bind address {}", cmd.addr))?;
            api_server::run(DeckService::in_memory(), addr).await
        }
        Command::Decks(remote) => {
            let api = RemoteApi::new(remote.server);
            for name in api.list_decks().await? {
                println!("{name}");
            }
            Ok(())
        }
        Command::Show(cmd) => {
            let api = RemoteApi::new(cmd.remote.server);
            let deck = match api.load_deck(&cmd.name).await {
                Err(CoreError::NotFound(_)) => anyhow::bail!("deck not found: {}", cmd.name),
                other => other?,
            };
            for (i, c) in deck.cards.iter().enumerate() {
                println!("{}\t{}\t{}", i + 1, c.front, c.back);
            }
            Ok(())
        }
        Command::Scores(remote) => {
            let api = RemoteApi::new(remote.server);
            let scores = api.list_scores().await?;
            if scores.is_empty() {
                println!("no scores saved");
            }
            for s in scores {
                println!("{s}");
            }
            Ok(())
        }
        Command::Tui(_) => anyhow::bail!("the TUI is started from main on its own runtime"),
    }
}

/// The backend a study session talks to.
pub fn open_api(server: Option<&str>) -> Arc<dyn DeckApi> {
    match server {
        Some(url) => Arc::new(RemoteApi::new(url)),
        None => Arc::new(DeckService::in_memory()),
    }
}
