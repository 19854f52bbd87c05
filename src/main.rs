//! Command-line entry point.
//!
//! Thin wrapper around the library for working with the site outside a
//! browser.
//!
//! # Commands
//!
//! - `render`: print one document in one language to stdout
//! - `build`: write every document in every language to a directory
//! - `language`: show or set the stored language preference
//! - `send`: submit an enquiry through the configured relay, exactly as the
//!   contact page would
//!
//! # Configuration
//!
//! `--config <file>` loads a TOML file; `BASE_URL`, `EMAILJS_*`,
//! `AVSITE_STORAGE_PATH`, `TRACE_LEVEL` and `DESKTOP_BREAKPOINT` from the
//! environment override it.
//!
//! The binary is native only; browser builds use the library's `web` feature.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> avsite::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use avsite::app::StatusState;
    use avsite::content::{localized_content, resolve_initial_language, store_language_preference};
    use avsite::domain::{LanguageCode, Page, SiteError};
    use avsite::infrastructure::default_storage_path;
    use avsite::observability::init_tracing;
    use avsite::relay::EmailJsRelay;
    use avsite::scheduler::ManualScheduler;
    use avsite::storage::{JsonPreferenceStore, PreferenceStore};
    use avsite::ui::dom::MemoryDocument;
    use avsite::ui::markup;
    use avsite::{Config, Result, Site, SiteServices};
    use clap::{Parser, Subcommand, ValueEnum};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    #[derive(Parser, Debug)]
    #[command(name = "avsite", version, about = "Render and operate the AV installation site")]
    struct Cli {
        /// TOML configuration file.
        #[arg(long, global = true)]
        config: Option<PathBuf>,
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand, Debug)]
    enum Command {
        /// Print one document to stdout.
        Render {
            #[arg(long, value_enum, default_value_t = PageArg::Home)]
            page: PageArg,
            /// Language code; defaults to the resolved preference.
            #[arg(long)]
            lang: Option<String>,
        },
        /// Write every document in every language.
        Build {
            #[arg(long, default_value = "dist")]
            out: PathBuf,
        },
        /// Show the resolved language, or store a new preference.
        Language {
            /// Language code to store.
            set: Option<String>,
        },
        /// Submit an enquiry through the configured relay.
        Send {
            #[arg(long)]
            name: String,
            #[arg(long)]
            email: String,
            #[arg(long)]
            category: Option<String>,
            #[arg(long)]
            message: String,
            #[arg(long)]
            lang: Option<String>,
        },
    }

    #[derive(ValueEnum, Clone, Copy, Debug)]
    enum PageArg {
        Home,
        Contact,
        Confirmation,
    }

    impl From<PageArg> for Page {
        fn from(page: PageArg) -> Self {
            match page {
                PageArg::Home => Self::Home,
                PageArg::Contact => Self::Contact,
                PageArg::Confirmation => Self::Confirmation,
            }
        }
    }

    #[tokio::main]
    pub async fn run() -> Result<()> {
        let cli = Cli::parse();
        let config = load_config(cli.config.as_deref())?;
        init_tracing(&config);

        match cli.command {
            Command::Render { page, lang } => {
                let store = open_store(&config)?;
                let language = pick_language(lang.as_deref(), store.as_ref())?;
                print!("{}", markup::document(page.into(), language, &config));
            }
            Command::Build { out } => build(&config, &out)?,
            Command::Language { set } => {
                let mut store = open_store(&config)?;
                match set {
                    Some(value) => {
                        let code = parse_language(&value)?;
                        store_language_preference(store.as_mut(), code);
                        println!("{code} {}", code.flag());
                    }
                    None => {
                        let code = pick_language(None, store.as_ref())?;
                        println!("{code} {}", code.flag());
                    }
                }
            }
            Command::Send {
                name,
                email,
                category,
                message,
                lang,
            } => {
                send(config, name, email, category, message, lang).await?;
            }
        }

        Ok(())
    }

    fn load_config(path: Option<&Path>) -> Result<Config> {
        let mut config = match path {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config.apply_overrides(&Config::env_overrides());
        Ok(config)
    }

    fn open_store(config: &Config) -> Result<Box<dyn PreferenceStore>> {
        let path = config.storage_path.clone().unwrap_or_else(default_storage_path);
        Ok(Box::new(JsonPreferenceStore::open(path)?))
    }

    fn parse_language(value: &str) -> Result<LanguageCode> {
        LanguageCode::parse(value).ok_or_else(|| {
            let supported: Vec<&str> = LanguageCode::ALL.iter().map(|code| code.code()).collect();
            SiteError::Config(format!("unsupported language {value:?}, expected one of {supported:?}"))
        })
    }

    /// Explicit code, else stored preference, else the `LANG` locale, else the default.
    fn pick_language(explicit: Option<&str>, store: &dyn PreferenceStore) -> Result<LanguageCode> {
        if let Some(value) = explicit {
            return parse_language(value);
        }
        let locales: Vec<String> = std::env::var("LANG").into_iter().collect();
        Ok(resolve_initial_language(store, &locales))
    }

    fn build(config: &Config, out: &Path) -> Result<()> {
        let _span = tracing::info_span!("build", out = ?out).entered();

        for language in LanguageCode::ALL {
            let dir = if language == LanguageCode::DEFAULT {
                out.to_path_buf()
            } else {
                out.join(language.code())
            };
            std::fs::create_dir_all(&dir)?;
            for page in Page::ALL {
                let path = dir.join(page.file_name());
                std::fs::write(&path, markup::document(page, language, config))?;
                tracing::info!(path = ?path, %language, "wrote document");
            }
        }
        Ok(())
    }

    async fn send(
        config: Config,
        name: String,
        email: String,
        category: Option<String>,
        message: String,
        lang: Option<String>,
    ) -> Result<()> {
        let store = open_store(&config)?;
        let language = pick_language(lang.as_deref(), store.as_ref())?;
        let relay = Arc::new(EmailJsRelay::from_config(&config.relay));

        let state = avsite::SiteState::new(config.clone(), Page::Contact, language);
        let services = SiteServices { store, relay };
        let mut site = Site::new(state, MemoryDocument::with_shell(), ManualScheduler::default(), services);

        let category = category.unwrap_or_default();
        site.document_mut().fill_form(&name, &email, &category, &message);
        site.submit();
        site.flush_relay().await;
        site.advance(config.timing.redirect_delay());

        let status = &site.state().status;
        match status.state {
            StatusState::Error => Err(SiteError::Config(status.text.clone())),
            StatusState::Success => {
                println!("{}", status.text);
                if let Some(url) = site.navigated_to() {
                    println!("-> {url}");
                }
                Ok(())
            }
            StatusState::Empty => {
                let text = &localized_content(language).contact.form;
                Err(SiteError::Config(format!(
                    "{}: name, email and message are required",
                    text.error_request
                )))
            }
        }
    }
}
