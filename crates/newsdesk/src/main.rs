//! Command-line front-end for the news service.
//!
//! Drives the view controllers from `newsdesk-app` against the REST
//! client from `newsdesk-client`: list with category/text filters, view
//! a single article, create/edit/delete, login, and open a deep-link
//! route. Configuration comes from flags with environment fallbacks
//! (`NEWSDESK_BASE_URL`, `NEWSDESK_API_KEY`).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use newsdesk_app::{EditorController, ListController, Route, ViewerController};
use newsdesk_client::{ApiKeyStore, NewsClient, SessionStore};
use newsdesk_core::article::Article;
use newsdesk_core::image::media_type_for_extension;

/// Base URL used when neither flag nor environment provides one.
const DEFAULT_BASE_URL: &str = "http://sanger.dia.fi.upm.es/pui-rest-news";

#[derive(Parser)]
#[command(name = "newsdesk", about = "Browse and edit news articles", version)]
struct Cli {
    /// REST service base URL (env: NEWSDESK_BASE_URL).
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key for authenticated requests (env: NEWSDESK_API_KEY).
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Authenticate and print the identity's API key.
    Login {
        /// Login name.
        username: String,
        /// Password.
        password: String,
    },
    /// List articles, optionally filtered.
    List {
        /// Category filter ("All" or empty shows everything).
        #[arg(long)]
        category: Option<String>,
        /// Free-text search over title, abstract, subtitle, body, category.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single article.
    View {
        /// Article id.
        id: i64,
    },
    /// Create a new article.
    Create {
        /// Headline.
        #[arg(long)]
        title: String,
        /// Secondary headline.
        #[arg(long, default_value = "")]
        subtitle: String,
        /// Short summary.
        #[arg(long = "abstract", default_value = "")]
        abstract_text: String,
        /// Topical category.
        #[arg(long)]
        category: String,
        /// Rich HTML body.
        #[arg(long)]
        body: Option<String>,
        /// Image file to attach (jpeg/png/gif/webp).
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Edit an existing article.
    Edit {
        /// Article id.
        id: i64,
        /// New headline.
        #[arg(long)]
        title: Option<String>,
        /// New secondary headline.
        #[arg(long)]
        subtitle: Option<String>,
        /// New summary.
        #[arg(long = "abstract")]
        abstract_text: Option<String>,
        /// New category.
        #[arg(long)]
        category: Option<String>,
        /// New body.
        #[arg(long)]
        body: Option<String>,
        /// Replacement image file.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete an article.
    Delete {
        /// Article id.
        id: i64,
    },
    /// Open an application route (/list, /view/:id, /edit/new, /edit/:id).
    Open {
        /// Route path.
        route: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let base_url = cli
        .base_url
        .or_else(|| std::env::var("NEWSDESK_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let keys = Arc::new(ApiKeyStore::new());
    if let Some(key) = cli
        .api_key
        .or_else(|| std::env::var("NEWSDESK_API_KEY").ok())
    {
        keys.set_user_key(&key);
    }

    let client = NewsClient::new(base_url, Arc::clone(&keys));
    let session = SessionStore::new(Arc::clone(&keys));

    match cli.command {
        Command::Login { username, password } => {
            let identity = session.login(&client, &username, &password).await?;
            println!("Logged in as {} ({})", identity.label(), identity.username);
            println!("API key: {}", identity.apikey);
            if let Some(expires) = &identity.expires {
                println!("Expires: {expires}");
            }
        }
        Command::List { category, search } => {
            run_list(&client, category, search).await?;
        }
        Command::View { id } => {
            run_view(&client, &session, id).await?;
        }
        Command::Create {
            title,
            subtitle,
            abstract_text,
            category,
            body,
            image,
        } => {
            let mut editor = EditorController::create();
            editor.title = title;
            editor.subtitle = subtitle;
            editor.abstract_text = abstract_text;
            editor.category = category;
            editor.body = body.unwrap_or_default();
            if let Some(path) = image {
                attach_image_file(&mut editor, &path)?;
            }
            let created = client.submit(&editor.build_submission()).await?;
            println!("Created article {}", created.id);
        }
        Command::Edit {
            id,
            title,
            subtitle,
            abstract_text,
            category,
            body,
            image,
        } => {
            let article = client.article(id).await?;
            let mut editor = EditorController::edit(article);
            if let Some(v) = title {
                editor.title = v;
            }
            if let Some(v) = subtitle {
                editor.subtitle = v;
            }
            if let Some(v) = abstract_text {
                editor.abstract_text = v;
            }
            if let Some(v) = category {
                editor.category = v;
            }
            if let Some(v) = body {
                editor.body = v;
            }
            if let Some(path) = image {
                attach_image_file(&mut editor, &path)?;
            }
            let updated = client.submit(&editor.build_submission()).await?;
            println!("Updated article {}", updated.id);
        }
        Command::Delete { id } => {
            client.delete_article(id).await?;
            println!("Deleted article {id}");
        }
        Command::Open { route } => {
            let Some(route) = Route::parse(&route) else {
                bail!("unrecognized route: {route}");
            };
            match route {
                Route::List => run_list(&client, None, None).await?,
                Route::View(id) => run_view(&client, &session, id).await?,
                Route::EditNew => {
                    println!("Editor (new draft) — use `newsdesk create` to submit one");
                }
                Route::Edit(id) => {
                    let article = client.article(id).await?;
                    let editor = EditorController::edit(article);
                    println!("Editor on article {id}:");
                    println!("  title:    {}", editor.title);
                    println!("  subtitle: {}", editor.subtitle);
                    println!("  abstract: {}", editor.abstract_text);
                    println!("  category: {}", editor.category);
                    println!("Use `newsdesk edit {id} --title ...` to submit changes");
                }
            }
        }
    }

    Ok(())
}

/// Fetch and print the filtered article list.
async fn run_list(
    client: &NewsClient,
    category: Option<String>,
    search: Option<String>,
) -> anyhow::Result<()> {
    let mut list = ListController::new();
    let ticket = list.begin_fetch();
    list.apply_fetch(ticket, client.articles().await);
    if let Some(message) = list.error() {
        bail!("could not load articles: {message}");
    }

    if let Some(category) = category {
        list.set_category(category);
    }
    if let Some(search) = search {
        list.set_search(search);
    }

    let visible = list.visible();
    if visible.is_empty() {
        println!("No articles match.");
        return Ok(());
    }
    for article in &visible {
        print_list_row(article);
    }
    println!("{} of {} articles", visible.len(), list.articles().len());
    Ok(())
}

/// Fetch and print a single article, with resolved authorship.
async fn run_view(client: &NewsClient, session: &SessionStore, id: i64) -> anyhow::Result<()> {
    let mut viewer = ViewerController::new();
    let ticket = viewer.begin_fetch();
    viewer.apply_fetch(ticket, client.article(id).await);
    if let Some(message) = viewer.error() {
        bail!("could not load article {id}: {message}");
    }

    if let Some(user_id) = viewer.article().and_then(|a| a.id_user) {
        let name = session.resolve_display_name(user_id).await;
        viewer.set_author_name(name);
    }

    let Some(article) = viewer.article() else {
        bail!("article {id} is unavailable");
    };
    println!("{} [{}]", article.title, article.category);
    if !article.subtitle.is_empty() {
        println!("{}", article.subtitle);
    }
    if let Some(author) = viewer.author_name() {
        println!("By {author}");
    }
    println!("Updated {}", article.update_date);
    println!();
    println!("{}", article.abstract_text);
    if let Some(body) = &article.body {
        println!();
        println!("{body}");
    }
    if let Some(media_type) = &article.image_media_type {
        println!();
        println!("[image attached: {media_type}]");
    }
    Ok(())
}

/// Read an image from disk, infer its media type, and attach it.
fn attach_image_file(editor: &mut EditorController, path: &Path) -> anyhow::Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let Some(media_type) = media_type_for_extension(extension) else {
        bail!("unsupported image file type: {}", path.display());
    };
    let bytes = std::fs::read(path)
        .with_context(|| format!("could not read image {}", path.display()))?;
    editor
        .attach_image(&bytes, media_type)
        .with_context(|| format!("image rejected: {}", path.display()))?;
    Ok(())
}

/// One list row: id, category, title, and the authoring user if known.
fn print_list_row(article: &Article) {
    let author = article
        .id_user
        .map(|id| format!("  (user {id})"))
        .unwrap_or_default();
    println!(
        "{:>5}  {:<13}  {}{}",
        article.id, article.category, article.title, author
    );
}
