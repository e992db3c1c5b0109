//! memora-client CLI entry point.

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use memora_client::cli::{Cli, Commands, OutputFormat};
use memora_client::output::{format_output, pretty};
use memora_client::session::SessionFile;
use memora_client::{LiveList, MemoraClient};
use memora_core::identity::{AnonymousSession, Caller};
use memora_core::store::{ItemStore, ListStore, StoreError};
use memora_core::todo::{
    CreateItemRequest, CreateListRequest, UpdateItemRequest, UpdateListRequest,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("MEMORA_LOG")
                .unwrap_or_else(|_| "memora_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let client = MemoraClient::new(&cli.base_url);
    let caller = resolve_caller(&cli)?;

    match cli.command {
        Commands::Lists(lists_cmd) => {
            use memora_client::cli::lists::ListsAction;
            match lists_cmd.action {
                ListsAction::List => {
                    let lists = client.list_lists(&caller).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&lists, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_lists(&lists)),
                    }
                }
                ListsAction::Create { title, private } => {
                    let req = CreateListRequest::new(title).with_public(!private);
                    let list = client.create_list(&caller, req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&list, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_list(&list))
                        }
                    }
                }
                ListsAction::Get { id } => {
                    let list = client.get_list(&caller, id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&list, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_list(&list)),
                    }
                }
                ListsAction::Update { id, title, public } => {
                    let mut req = UpdateListRequest::new();
                    if let Some(title) = title {
                        req = req.with_title(title);
                    }
                    if let Some(public) = public {
                        req = req.with_public(public);
                    }
                    let list = client.update_list(&caller, id, req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&list, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_list(&list))
                        }
                    }
                }
                ListsAction::Delete { id } => {
                    client.delete_list(&caller, id).await?;
                    if !cli.quiet {
                        println!("Deleted list {}", id);
                    }
                }
            }
        }
        Commands::Items(items_cmd) => {
            use memora_client::cli::items::ItemsAction;
            match items_cmd.action {
                ItemsAction::List { list_id } => {
                    let items = client.list_items(&caller, list_id).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&items, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_items(&items)),
                    }
                }
                ItemsAction::Create { list_id, title } => {
                    let req = CreateItemRequest::new(list_id, title);
                    let item = client.create_item(&caller, req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_item(&item))
                        }
                    }
                }
                ItemsAction::Update {
                    id,
                    title,
                    completed,
                } => {
                    let mut req = UpdateItemRequest::new();
                    if let Some(title) = title {
                        req = req.with_title(title);
                    }
                    if let Some(completed) = completed {
                        req = req.with_completed(completed);
                    }
                    let item = client.update_item(&caller, id, req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_item(&item))
                        }
                    }
                }
                ItemsAction::Toggle { id, list_id } => {
                    // Read-modify-write: fetch the list to learn the current
                    // completion state, then flip it.
                    let items = client.list_items(&caller, list_id).await?;
                    let current = items
                        .iter()
                        .find(|item| item.id == id)
                        .ok_or_else(|| StoreError::not_found("TodoItem", id))?;
                    let req = UpdateItemRequest::new().with_completed(!current.completed);
                    let item = client.update_item(&caller, id, req).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&item, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Toggled:\n{}", pretty::format_item(&item))
                        }
                    }
                }
                ItemsAction::Delete { id } => {
                    client.delete_item(&caller, id).await?;
                    if !cli.quiet {
                        println!("Deleted item {}", id);
                    }
                }
            }
        }
        Commands::Watch(watch_cmd) => {
            let mut live = LiveList::open(client, caller, watch_cmd.list_id).await?;
            if !cli.quiet {
                println!("Watching {} ({})...", live.list().title, live.list().id);
            }
            print_items(&live, cli.format);

            loop {
                match live.next_update().await {
                    Some(Ok(applied)) => {
                        if applied.changed() {
                            print_items(&live, cli.format);
                        }
                    }
                    Some(Err(error)) => {
                        eprintln!("Error: {}", error);
                        live.resync().await?;
                        print_items(&live, cli.format);
                    }
                    None => {
                        if !cli.quiet {
                            println!("Change feed closed; resyncing...");
                        }
                        live.resync().await?;
                        print_items(&live, cli.format);
                    }
                }
            }
        }
        Commands::Session(session_cmd) => {
            use memora_client::cli::session::SessionAction;
            let file = SessionFile::from_env()?;
            match session_cmd.action {
                SessionAction::New => {
                    let session = AnonymousSession::start(Utc::now());
                    file.save(&session)?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&session, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Started:\n{}", pretty::format_session(&session))
                        }
                    }
                }
                SessionAction::Show => match file.load()? {
                    Some(session) => match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&session, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_session(&session)),
                    },
                    None => println!("No session found."),
                },
                SessionAction::Clear => {
                    file.clear()?;
                    if !cli.quiet {
                        println!("Cleared session file {}", file.path().display());
                    }
                }
            }
        }
    }

    Ok(())
}

/// Resolve the caller identity from the global flags. `--anonymous` reads
/// the session file, starting a session on first use.
fn resolve_caller(cli: &Cli) -> Result<Caller, Box<dyn std::error::Error>> {
    if let Some(user_id) = cli.user {
        return Ok(Caller::User(user_id));
    }
    if cli.anonymous {
        let session = SessionFile::from_env()?.load_or_start()?;
        return Ok(session.caller());
    }
    Ok(Caller::Public)
}

/// Print the current reconciled sequence of a watched list.
fn print_items(live: &LiveList, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let items = live.items().to_vec();
            println!("{}", format_output(&items, format));
        }
        OutputFormat::Pretty => println!("{}", pretty::format_items(live.items())),
    }
}
