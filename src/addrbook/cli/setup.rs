use addrbook::api::AddrBookApi;
use addrbook::config::{BookConfig, HOME_ENV};
use addrbook::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub(super) struct AppContext {
    pub api: AddrBookApi<FileStore>,
    pub prompt: String,
}

/// Logs go to stderr so stdout carries only replies. `RUST_LOG` overrides the
/// default `warn` level.
pub(super) fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub(super) fn init_context() -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let home = std::env::var_os(HOME_ENV).map(PathBuf::from);

    let config_dir = match &home {
        Some(home) => home.clone(),
        None => ProjectDirs::from("com", "addrbook", "addrbook")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| cwd.clone()),
    };

    let config = BookConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(dir = %config_dir.display(), error = %e, "ignoring unreadable config");
        BookConfig::default()
    });

    let store = FileStore::new(config.books_root(home.as_deref().unwrap_or(cwd.as_path())));
    tracing::debug!(
        books = %store.root().display(),
        page_size = config.page_size,
        "session configured"
    );

    AppContext {
        api: AddrBookApi::new(store, &config),
        prompt: config.prompt,
    }
}
