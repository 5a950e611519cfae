//! vocab command-line entry point.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use cli::{
    CategoryAction, Cli, Command, ConfigAction, ExportFormat, WordAction, WordFields, word_index,
};
use vocab::config::{ConfigError, VocabConfig};
use vocab::constants::DEFAULT_EXPORT_PREFIX;
use vocab::format::{ExportOptions, FormatError, FormatRegistry, VocabularyFormat};
use vocab::import::{ImportPreview, Reconciler, read_payload};
use vocab::store::{StoreError, VocabularyStore, WordInput};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Usage(String),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = VocabConfig::load_from_default_path();
    init_logging(&config, cli.verbose);

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Format(e)) if e.is_unsupported_document() => {
            eprintln!("error: {e}");
            eprintln!("hint: only PDFs exported by vocab (or JSON files) can be imported");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `--verbose`, which wins over the configured level.
fn init_logging(config: &VocabConfig, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level.to_level_filter()
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli, config: VocabConfig) -> Result<(), CliError> {
    let data_file = cli.data.clone().unwrap_or_else(|| config.data_file.clone());
    log::debug!("Using store file {:?}", data_file);

    match cli.command {
        Command::List => list(&VocabularyStore::open(data_file)?),
        Command::Category { action } => {
            category(&VocabularyStore::open(data_file)?, &config, action)
        }
        Command::Word { action } => word(&VocabularyStore::open(data_file)?, action),
        Command::Export {
            path,
            format,
            title,
        } => {
            let store = VocabularyStore::open(data_file)?;
            export(&store, &config, path, format, title)
        }
        Command::Import { path, dry_run } => import(data_file, path, dry_run),
        Command::Config { action } => config_command(&config, action),
    }
}

fn list(store: &VocabularyStore) -> Result<(), CliError> {
    let collection = store.list_categories()?;
    if collection.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }

    for (name, category) in collection.sorted() {
        println!("{} ({}, {} words)", name, category.color, category.len());
        for (i, word) in category.words.iter().enumerate() {
            println!("  {:>3}. {} - {}", i + 1, word.english, word.spanish);
            if word.has_synonyms() {
                println!("       synonyms: {}", word.synonyms.join(", "));
            }
            for example in &word.examples {
                println!("       \"{}\"", example);
            }
        }
    }
    println!("{} words in {} categories", collection.total_words(), collection.len());
    Ok(())
}

fn category(
    store: &VocabularyStore,
    config: &VocabConfig,
    action: CategoryAction,
) -> Result<(), CliError> {
    match action {
        CategoryAction::Add { name, color } => {
            let color = color.as_deref().unwrap_or(&config.default_color);
            let created = store.create_category(&name, Some(color))?;
            println!("Created '{}' ({})", name, created.color);
        }
        CategoryAction::Rename { name, new_name } => {
            store.rename_category(&name, &new_name)?;
            println!("Renamed '{}' to '{}'", name, new_name);
        }
        CategoryAction::Recolor { name, color } => {
            store.recolor_category(&name, &color)?;
            println!("Recolored '{}' to {}", name, color);
        }
        CategoryAction::Delete { name } => {
            store.delete_category(&name)?;
            println!("Deleted '{}'", name);
        }
        CategoryAction::Reorder { names } => {
            store.reorder_categories(&names)?;
            println!("Reordered {} categories", names.len());
        }
    }
    Ok(())
}

fn word_input(fields: WordFields) -> WordInput {
    WordInput::new(fields.english, fields.spanish)
        .synonyms(fields.synonyms)
        .examples(fields.examples)
}

fn position_to_index(category: &str, position: usize) -> Result<usize, CliError> {
    word_index(position).ok_or_else(|| {
        CliError::Usage(format!(
            "word positions start at 1 (got {position} for '{category}')"
        ))
    })
}

fn word(store: &VocabularyStore, action: WordAction) -> Result<(), CliError> {
    match action {
        WordAction::Add { category, fields } => {
            store.add_word(&category, word_input(fields))?;
            println!("Added word to '{}'", category);
        }
        WordAction::Update {
            category,
            position,
            fields,
        } => {
            let index = position_to_index(&category, position)?;
            store.update_word(&category, index, word_input(fields))?;
            println!("Updated word {} in '{}'", position, category);
        }
        WordAction::Delete { category, position } => {
            let index = position_to_index(&category, position)?;
            store.delete_word(&category, index)?;
            println!("Deleted word {} from '{}'", position, category);
        }
    }
    Ok(())
}

fn default_export_path(extension: &str) -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    PathBuf::from(format!("{DEFAULT_EXPORT_PREFIX}_{millis}.{extension}"))
}

fn export(
    store: &VocabularyStore,
    config: &VocabConfig,
    path: Option<PathBuf>,
    choice: Option<ExportFormat>,
    title: Option<String>,
) -> Result<(), CliError> {
    let registry = FormatRegistry::new();
    let format_id = ExportFormat::resolve(choice, path.as_deref(), &registry);
    let format = registry
        .get(format_id)
        .ok_or_else(|| CliError::Usage(format!("unknown export format '{format_id}'")))?;

    let path = path.unwrap_or_else(|| default_export_path(format_id));
    let mut options = ExportOptions::new().page(config.page_layout());
    if let Some(title) = title {
        options = options.title(title);
    }

    let collection = store.list_categories()?;
    let result = format.export(&collection, &path, &options)?;

    if result.has_warnings() {
        log::debug!("Export finished with {} warnings", result.warnings.len());
    }
    for warning in &result.warnings {
        match &warning.category {
            Some(category) => eprintln!("warning: {}: {}", category, warning.message),
            None => eprintln!("warning: {}", warning.message),
        }
    }
    println!(
        "Exported {} words in {} categories to {} ({})",
        result.words_exported,
        result.categories_exported,
        path.display(),
        format.display_name()
    );
    if format.is_printable() {
        println!("{} pages", result.pages);
    }
    Ok(())
}

fn import(data_file: PathBuf, path: PathBuf, dry_run: bool) -> Result<(), CliError> {
    let payload = read_payload(&path)?;
    let preview = ImportPreview::new(&payload)?;

    println!("{} words in {} categories:", preview.total_words, preview.entries.len());
    for entry in &preview.entries {
        println!("  {} ({}, {} words)", entry.name, entry.color, entry.word_count);
    }
    if dry_run {
        println!("Dry run, nothing imported.");
        return Ok(());
    }

    let store = VocabularyStore::open(data_file)?;
    let report = Reconciler::new(&store).apply(&payload);
    println!(
        "Imported {} words ({} errors); {} categories created, {} reused",
        report.imported, report.errors, report.categories_created, report.categories_reused
    );
    Ok(())
}

fn config_command(config: &VocabConfig, action: ConfigAction) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            if let Some(path) = VocabConfig::default_path() {
                println!("# {}", path.display());
            }
            println!("{}", config.to_json().map_err(ConfigError::from)?);
        }
        ConfigAction::Init => match VocabConfig::default_path() {
            Some(path) if path.exists() => {
                println!("Configuration already exists at {}", path.display());
            }
            _ => {
                let path = VocabConfig::new().save_to_default_path()?;
                println!("Wrote default configuration to {}", path.display());
            }
        },
    }
    Ok(())
}
