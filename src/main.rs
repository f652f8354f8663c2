use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use lingo::config::{Config, ConfigError};
use lingo::error::AppResult;
use lingo::extract::JinaReader;
use lingo::llm::OpenAICompatibleClient;
use lingo::logging;
use lingo::ui::App;
use lingo::TranslationPipeline;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::sync::Arc;

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)
}

async fn run_tui(app: &mut App) -> AppResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

#[tokio::main]
async fn main() {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let loaded = Config::load();

    // Credential check comes before any other output, even when the
    // config file itself is broken
    let llm_settings = match &loaded {
        Ok(config) => config.llm.clone(),
        Err(_) => Config::credential_settings(),
    };
    let Some(api_key) = llm_settings.resolve_api_key() else {
        eprintln!("Error: {} environment variable not set.", llm_settings.api_key_env);
        eprintln!("Please set the environment variable and try again.");
        if let Err(e) = &loaded
            && !matches!(e, ConfigError::DirectoryNotFound)
        {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    };

    let config = match loaded {
        Ok(config) => config,
        Err(ConfigError::DirectoryNotFound) => Config::default_config(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let log_guard = match Config::config_dir() {
        Ok(dir) => match logging::init_file_logging(&dir, &config.logging.level) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Warning: logging disabled: {}", e);
                None
            }
        },
        Err(_) => None,
    };

    tracing::info!(model = %config.llm.model, base_url = %config.llm.base_url, "starting lingo");

    // First run leaves an editable config behind
    if let Ok(path) = Config::config_path() {
        match config.write_if_missing(&path) {
            Ok(true) => tracing::info!(path = %path.display(), "wrote default config"),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "could not write default config"),
        }
    }

    // Clients are built once here and shared with every request
    let llm = Arc::new(OpenAICompatibleClient::with_endpoint(
        api_key,
        config.llm.base_url.clone(),
        config.llm.model.clone(),
    ));
    let extractor = Arc::new(JinaReader::with_reader_url(config.extraction.reader_url.clone()));
    let pipeline = Arc::new(TranslationPipeline::new(llm, extractor));

    let mut app = match App::new(pipeline, &config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error creating app: {}", e);
            std::process::exit(1);
        }
    };

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run_tui(&mut app).await;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "terminal session failed");
    }
    tracing::info!("exiting");
    drop(log_guard);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
