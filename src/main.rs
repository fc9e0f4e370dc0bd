//! Set review generator.
//!
//! Pools the cards of one expansion from Scryfall, orders them by the
//! review rules, and writes two slide decks plus a grades spreadsheet.

use std::path::{Path, PathBuf};

use clap::Parser;

use set_review::{CardCache, ImageCache, ReviewConfig, Result, ScryfallClient, SetReview};

/// MTG set review generator - builds slide decks and grade sheets from Scryfall data
#[derive(Parser, Debug)]
#[command(name = "set_review")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a JSON run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Primary set code (e.g. OTJ)
    #[arg(short, long)]
    expansion: Option<String>,

    /// Bonus sheet set code (e.g. OTP)
    #[arg(short, long)]
    bonus_sheet: Option<String>,

    /// Scryfall query filling the card pool; may be given multiple times
    #[arg(short, long)]
    query: Vec<String>,

    /// Reviewer name; may be given multiple times
    #[arg(short, long)]
    reviewer: Vec<String>,

    /// Where the documents are written
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the ordered review list to stdout
    #[arg(long, default_value_t = false)]
    print_list: bool,

    /// Only write the grade sheet, skip the slide decks
    #[arg(long, default_value_t = false)]
    skip_decks: bool,
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config, args.print_list, args.skip_decks) {
        log::error!("Set review failed: {}", e);
        std::process::exit(1);
    }
}

/// Merge the config file and the flags into one runnable configuration.
/// Flags win over the file; the pool queries default to the whole
/// primary set (and bonus sheet) when neither names a card source.
fn build_config(args: &Args) -> Result<ReviewConfig> {
    let mut config = match &args.config {
        Some(path) => ReviewConfig::load(path)?,
        None => ReviewConfig::default(),
    };

    if let Some(expansion) = &args.expansion {
        config.set_code = expansion.clone();
    }
    if let Some(bonus) = &args.bonus_sheet {
        config.bonus_set_code = Some(bonus.clone());
    }
    if !args.query.is_empty() {
        config.scryfall_queries = args.query.clone();
    }
    if !args.reviewer.is_empty() {
        config.reviewers = args.reviewer.clone();
    }
    if let Some(output_dir) = &args.output_dir {
        config.output_dir = Some(output_dir.clone());
    }

    if config.scryfall_queries.is_empty()
        && config.expansions.is_empty()
        && !config.set_code.trim().is_empty()
    {
        config.scryfall_queries = config.default_queries();
    }

    config.validate()?;
    Ok(config)
}

fn run(config: &ReviewConfig, print_list: bool, skip_decks: bool) -> Result<()> {
    let client = ScryfallClient::new();

    let mut cache = CardCache::from_queries(&client, &config.scryfall_queries)?;
    for expansion in &config.expansions {
        cache.populate_by_expansion(&client, expansion)?;
    }
    log::info!("Pooled {} cards", cache.len());

    let review = SetReview::build(&cache, &config.set_code, config.bonus_set_code.as_deref());

    if print_list {
        println!("Cards:");
        for card in review.card_list() {
            println!("{card}");
        }
        println!(" - - - - - - - - - - ");
    }

    let output_dir = review.output_dir(&config.resolved_output_dir());

    let sheet = review.generate_grade_sheet(&config.reviewers, &output_dir)?;
    announce(&sheet);

    if skip_decks {
        log::info!("Skipping the slide decks");
        return Ok(());
    }

    let images = ImageCache::new();
    let (day_one, day_two) = review.generate_decks(&client, &images, &output_dir)?;
    announce(&day_one);
    announce(&day_two);
    Ok(())
}

fn announce(path: &Path) {
    if let Some(name) = path.file_name() {
        println!("Created file '{}'!", name.to_string_lossy());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once(&"set_review").chain(argv))
    }

    #[test]
    fn flags_alone_build_a_runnable_config() {
        let config = build_config(&args(&["--expansion", "OTJ"])).unwrap();

        assert_eq!(config.set_code, "OTJ");
        assert_eq!(config.scryfall_queries, vec!["set:otj unique:cards"]);
    }

    #[test]
    fn the_bonus_sheet_gets_a_default_query_too() {
        let config = build_config(&args(&["-e", "OTJ", "-b", "OTP"])).unwrap();

        assert_eq!(
            config.scryfall_queries,
            vec!["set:otj unique:cards", "set:otp unique:cards"]
        );
    }

    #[test]
    fn explicit_queries_suppress_the_defaults() {
        let config =
            build_config(&args(&["-e", "OTJ", "-q", "set:big unique:cards"])).unwrap();

        assert_eq!(config.scryfall_queries, vec!["set:big unique:cards"]);
    }

    #[test]
    fn flags_override_the_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"set_code": "MOM", "scryfall_queries": ["set:mom unique:cards"], "reviewers": ["Alex"]}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = build_config(&args(&["-c", &path, "-e", "OTJ", "-r", "Marc"])).unwrap();

        assert_eq!(config.set_code, "OTJ");
        // Queries come from the file, untouched by the expansion override
        assert_eq!(config.scryfall_queries, vec!["set:mom unique:cards"]);
        assert_eq!(config.reviewers, vec!["Marc"]);
    }

    #[test]
    fn repeated_flags_accumulate() {
        let config = build_config(&args(&[
            "-e", "OTJ", "-q", "set:otj", "-q", "set:otp", "-r", "Alex", "-r", "Marc",
        ]))
        .unwrap();

        assert_eq!(config.scryfall_queries, vec!["set:otj", "set:otp"]);
        assert_eq!(config.reviewers, vec!["Alex", "Marc"]);
    }

    #[test]
    fn a_missing_set_code_is_rejected() {
        assert!(build_config(&args(&["-q", "set:otj"])).is_err());
    }
}
