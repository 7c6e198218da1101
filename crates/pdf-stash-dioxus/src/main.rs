use dioxus::prelude::*;
use pdf_stash_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

mod platform;
mod ui;

use pdf_stash_config::Config;
use ui::App;
use ui::components::ErrorScreen;

/// What the UI needs from startup, handed over as root context
#[derive(Clone, Debug)]
enum StartupState {
    Ready {
        documents_path: PathBuf,
    },
    Failed {
        message: String,
        details: Option<String>,
    },
}

/// Write the platform default config so the next start finds it
fn create_default_config() -> PathBuf {
    let default_config = Config::platform_default();
    let config_path = Config::config_path();

    match default_config.save() {
        Ok(()) => log::info!(
            "Created default config file at {}",
            config_path.display()
        ),
        Err(e) => {
            log::warn!("Failed to create default config file: {e}");
            log::warn!("Will use default documents path without persisting config");
        }
    }

    default_config.documents_path
}

fn usage_and_exit(message: &str) -> ! {
    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "pdf-stash".to_string());
    eprintln!("Error: {message}");
    eprintln!("Usage: {program_name} [documents-folder-path]");
    process::exit(1);
}

fn resolve_documents_path() -> PathBuf {
    // On Android, env::args() can cause capacity overflow, and apps get no CLI args anyway
    #[cfg(not(target_os = "android"))]
    {
        let args: Vec<String> = env::args().skip(1).collect();
        match args.as_slice() {
            [] => {}
            [path] => {
                log::info!("Using documents path from CLI argument: {path}");
                return PathBuf::from(path);
            }
            _ => usage_and_exit("Too many arguments"),
        }
    }

    log::info!("Config path: {}", Config::config_path().display());
    match Config::load() {
        Ok(Some(config)) => {
            log::info!(
                "Loaded documents path from config: {}",
                config.documents_path.display()
            );
            config.documents_path
        }
        Ok(None) => {
            log::info!("No config file found, using platform default");
            create_default_config()
        }
        Err(e) => {
            log::error!("Config::load() failed with error: {e}");
            if cfg!(target_os = "android") {
                create_default_config()
            } else {
                usage_and_exit(&format!("Failed to load config file: {e}"))
            }
        }
    }
}

fn prepare_storage(documents_path: PathBuf) -> StartupState {
    match io::ensure_storage_dir(&documents_path) {
        Ok(()) => {
            log::info!("Documents stored in {}", documents_path.display());
            StartupState::Ready { documents_path }
        }
        Err(e) => {
            log::error!(
                "Failed to prepare documents directory {}: {e}",
                documents_path.display()
            );
            StartupState::Failed {
                message: format!(
                    "Could not create the documents folder '{}'",
                    documents_path.display()
                ),
                details: Some(e.to_string()),
            }
        }
    }
}

fn main() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("PdfStash"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
    }

    log::info!("pdf-stash starting up!");

    let startup = prepare_storage(resolve_documents_path());

    #[cfg(not(target_os = "android"))]
    {
        if let StartupState::Failed { message, details } = &startup {
            eprintln!("Error: {message}");
            if let Some(details) = details {
                eprintln!("{details}");
            }
            process::exit(1);
        }

        log::info!("Launching Dioxus app for desktop");
        dioxus::LaunchBuilder::desktop()
            .with_cfg(make_window_config())
            .with_context(startup)
            .launch(app_root);
    }

    #[cfg(target_os = "android")]
    {
        // Startup failures are rendered on screen, there is no console to print to
        log::info!("Launching Dioxus app for Android");
        dioxus::LaunchBuilder::new()
            .with_context(startup)
            .launch(app_root);
    }
}

fn app_root() -> Element {
    match use_context::<StartupState>() {
        StartupState::Ready { documents_path } => rsx! {
            App { documents_path }
        },
        StartupState::Failed { message, details } => rsx! {
            ErrorScreen {
                title: "Storage Error".to_string(),
                message,
                details,
            }
        },
    }
}

#[cfg(not(target_os = "android"))]
fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("pdf-stash")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
