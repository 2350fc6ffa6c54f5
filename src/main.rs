mod api;
mod models;
mod view;

use api::{InserateClient, ParamField, SearchParams};
use std::io::{BufRead, Write};
use tracing::{info, Level};
use tracing_subscriber;
use view::{render, SearchView, StalePolicy};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    info!("🔎 Inserate Scout");
    info!("API server: {}", base_url);
    info!("");

    let client = InserateClient::new(&base_url)?;
    let mut view = SearchView::new(client, SearchParams::default(), StalePolicy::KeepStaleResults);

    // One automatic search on startup with the default parameters.
    view.submit().await;
    println!("{}", render(view.state()));

    println!();
    println!("Commands: query|location|radius|min_price|page_count <value>, search, show, quit");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "show" => {
                println!("{:#?}", view.params());
                println!("{}", render(view.state()));
            }
            "search" => {
                view.submit().await;
                println!("{}", render(view.state()));
            }
            name => match ParamField::from_name(name) {
                // Edits only touch the store; nothing is fetched until "search".
                Some(field) => {
                    if let Err(e) = view.set_param(field, rest) {
                        println!("Invalid value for {}: {}", name, e);
                    }
                }
                None => println!("Unknown command: {}", command),
            },
        }
    }

    Ok(())
}
