use board::application::{init::init, ConfigService, FileBoard, Submitted};
use board::cli::{format_post_detail, format_view, Cli, Commands};
use board::domain::SortOrder;
use board::error::BoardError;
use board::infrastructure::BoardDirectory;
use clap::Parser;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, filtered by BOARD_LOG (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_env("BOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_sort(value: &str) -> Result<SortOrder, BoardError> {
    SortOrder::from_str(value).map_err(BoardError::Config)
}

fn run(cli: Cli) -> Result<(), BoardError> {
    match cli.command {
        Commands::Init { path, sort } => {
            let sort = parse_sort(&sort)?;
            init(&path, sort)?;
            println!("Initialized board at {}", path.display());
            println!("Sort: {}", sort);
            Ok(())
        }
        Commands::Add {
            title,
            content,
            notice,
        } => {
            let mut board = FileBoard::open(&BoardDirectory::discover()?)?;
            let submitted = board.submit(&title, &content, notice)?;
            println!("Post created: {}", submitted.post().id);
            Ok(())
        }
        Commands::Edit {
            id,
            title,
            content,
            notice,
            regular,
        } => {
            let mut board = FileBoard::open(&BoardDirectory::discover()?)?;
            let current = board.start_edit(&id)?;

            let title = title.unwrap_or(current.title);
            let content = content.unwrap_or(current.content);
            let is_notice = if notice {
                true
            } else if regular {
                false
            } else {
                current.is_notice
            };

            match board.submit(&title, &content, is_notice)? {
                Submitted::Updated(post) => println!("Post updated: {}", post.id),
                Submitted::Created(post) => println!("Post created: {}", post.id),
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let mut board = FileBoard::open(&BoardDirectory::discover()?)?;
            if board.delete(&id)? {
                println!("Post deleted: {}", id);
            } else {
                println!("No post with id {}", id);
            }
            Ok(())
        }
        Commands::Show { id } => {
            let board = FileBoard::open(&BoardDirectory::discover()?)?;
            let post = board.find(&id).ok_or(BoardError::NotFound(id))?;
            print!("{}", format_post_detail(&post));
            Ok(())
        }
        Commands::List { search, sort } => {
            let mut board = FileBoard::open(&BoardDirectory::discover()?)?;
            if let Some(sort) = sort {
                board.set_sort_order(parse_sort(&sort)?);
            }
            if let Some(search) = search {
                board.set_search_term(search);
            }
            print!("{}", format_view(&board.view()));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(BoardDirectory::discover()?);

            if list {
                let config = service.list()?;
                println!("sort = {}", config.sort);
                println!("storage_key = {}", config.storage_key);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: board config [--list | <key> [<value>]]");
                println!("Valid keys: sort, storage_key, created");
                Ok(())
            }
        }
    }
}
