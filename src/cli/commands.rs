//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "board")]
#[command(about = "Local bulletin board with pinned notices", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new board
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Default display order (asc, desc)
        #[arg(short, long, default_value = "desc")]
        sort: String,
    },

    /// Create a post
    Add {
        title: String,

        content: String,

        /// Pin the post to the notice list
        #[arg(short, long)]
        notice: bool,
    },

    /// Edit a post; fields that are not given keep their current value
    Edit {
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        #[arg(short, long)]
        content: Option<String>,

        /// Pin the post to the notice list
        #[arg(long, conflicts_with = "regular")]
        notice: bool,

        /// Move the post to the regular list
        #[arg(long)]
        regular: bool,
    },

    /// Delete a post
    Delete { id: String },

    /// Show a single post
    Show { id: String },

    /// List notices and posts
    List {
        /// Only show posts whose title or content contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Display order (asc, desc); defaults to the configured order
        #[arg(long)]
        sort: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_notice() {
        let cli = Cli::try_parse_from(["board", "add", "Title", "Body", "--notice"]).unwrap();
        match cli.command {
            Commands::Add {
                title,
                content,
                notice,
            } => {
                assert_eq!(title, "Title");
                assert_eq!(content, "Body");
                assert!(notice);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_edit_partial() {
        let cli = Cli::try_parse_from(["board", "edit", "post-1", "--content", "New"]).unwrap();
        match cli.command {
            Commands::Edit {
                id,
                title,
                content,
                notice,
                regular,
            } => {
                assert_eq!(id, "post-1");
                assert_eq!(title, None);
                assert_eq!(content.as_deref(), Some("New"));
                assert!(!notice);
                assert!(!regular);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_edit_notice_conflicts_with_regular() {
        let result = Cli::try_parse_from(["board", "edit", "post-1", "--notice", "--regular"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list_options() {
        let cli =
            Cli::try_parse_from(["board", "list", "--search", "lunch", "--sort", "asc"]).unwrap();
        match cli.command {
            Commands::List { search, sort } => {
                assert_eq!(search.as_deref(), Some("lunch"));
                assert_eq!(sort.as_deref(), Some("asc"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
