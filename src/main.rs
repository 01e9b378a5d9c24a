//! CLI entry point for blog-rs

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_rs::content::NewPostRequest;

#[derive(Parser)]
#[command(name = "blog-rs")]
#[command(version)]
#[command(about = "Scaffold new blog posts and open them in an editor", long_about = None)]
struct Cli {
    /// Set the blog root (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new post and open it in an editor
    New {
        /// Title of the new post
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// Editor to open the post with (defaults to the configured editor)
        #[arg(short, long)]
        editor: Option<String>,

        /// Date for the file name, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List existing posts
    #[command(alias = "ls")]
    List,

    /// Display version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "blog_rs=debug,info"
    } else {
        "blog_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // One line per failure: `{:#}` folds the cause chain into the message
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::New {
            title,
            editor,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

            let mut request = NewPostRequest::new(title, date);
            if let Some(editor) = editor {
                request = request.with_editor(editor);
            }
            request.slug()?;

            let blog = blog_rs::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", request.title());
            blog.new_post(&request)?;
        }

        Commands::List => {
            let blog = blog_rs::Blog::new(&base_dir)?;
            blog.list()?;
        }

        Commands::Version => {
            println!("blog-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
