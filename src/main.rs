//! CLI entry point for lexblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexblog::api::HttpApiClient;
use lexblog::listing::ListingQuery;

#[derive(Parser)]
#[command(name = "lexblog")]
#[command(version)]
#[command(about = "Content engine for a legal and technology blog", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// List blog posts
    #[command(alias = "ls")]
    List {
        /// Free-text search over title, description, excerpt and tags
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Listing state as a URL query string, e.g. "search=crypto&page=2"
        #[arg(long, conflicts_with_all = ["search", "tag", "page"])]
        query: Option<String>,
    },

    /// List tags with post counts
    Tags,

    /// Show the glossary
    Glossary {
        #[arg(short, long, default_value = "")]
        search: String,

        #[arg(short, long)]
        tag: Option<String>,

        /// Term or URL hash to expand, e.g. "#actio-pauliana"
        #[arg(long)]
        term: Option<String>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Tags for the front-matter
        #[arg(short, long)]
        tag: Vec<String>,

        /// Write an .mdx file instead of .md
        #[arg(long)]
        mdx: bool,
    },

    /// Show the comments on a post
    Comments {
        slug: String,
    },

    /// Post a comment (needs a session token)
    Comment {
        slug: String,

        content: String,

        /// Reply to this comment id
        #[arg(long)]
        parent: Option<String>,
    },

    /// Like or unlike a comment (needs a session token)
    Like {
        slug: String,

        comment_id: String,

        /// The comment is a reply
        #[arg(long)]
        reply: bool,
    },

    /// Show page-view counts
    Views {
        #[arg(required = true)]
        slugs: Vec<String>,
    },

    /// Serve listings as JSON
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Reload content when files change
        #[arg(short, long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "lexblog=debug,info"
    } else {
        "lexblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = lexblog::Site::new(&base_dir)?;

    match cli.command {
        Commands::List {
            search,
            tag,
            page,
            query,
        } => {
            let query = match query {
                Some(raw) => ListingQuery::parse(&raw),
                None => ListingQuery::default()
                    .with_search(&search)
                    .with_tag(tag.as_deref().unwrap_or(""))
                    .with_page(page),
            };
            lexblog::commands::list::run(&site, &query)?;
        }

        Commands::Tags => {
            lexblog::commands::list::run_tags(&site)?;
        }

        Commands::Glossary { search, tag, term } => {
            lexblog::commands::glossary::run(&site, &search, tag.as_deref(), term.as_deref())?;
        }

        Commands::New { title, tag, mdx } => {
            let path = lexblog::commands::new::create_post(&site, &title, &tag, mdx)?;
            println!("Created: {}", path.display());
        }

        Commands::Comments { slug } => {
            let api = HttpApiClient::new(&site.config.api)?;
            lexblog::commands::comments::show(&api, &slug).await?;
        }

        Commands::Comment {
            slug,
            content,
            parent,
        } => {
            let api = HttpApiClient::new(&site.config.api)?;
            lexblog::commands::comments::submit(&api, &slug, &content, parent.as_deref()).await?;
        }

        Commands::Like {
            slug,
            comment_id,
            reply,
        } => {
            let api = HttpApiClient::new(&site.config.api)?;
            lexblog::commands::comments::like(&api, &slug, &comment_id, reply).await?;
        }

        Commands::Views { slugs } => {
            let api = HttpApiClient::new(&site.config.api)?;
            lexblog::commands::views::run(&api, &slugs).await?;
        }

        Commands::Serve { port, ip, watch } => {
            tracing::info!("Starting server at http://{}:{}", ip, port);
            lexblog::server::start(&site, &ip, port, watch).await?;
        }
    }

    Ok(())
}
