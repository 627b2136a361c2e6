//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::distance::{bounded_distance, standard_distance};
use crate::index::{IndexBuilder, StateSetIndex};
use crate::mapping::{CharTable, MappingKind};

use super::args::{Commands, ConfigAction, IndexArgs};
use super::paths::{config_file_path, IndexSettings, PersistentConfig};

/// Execute a CLI command
pub fn execute(command: Commands, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = || config_file_path(config_path.as_deref());

    match command {
        Commands::Find { query, index } => cmd_find(&query, &index, &config_path()?),
        Commands::Candidates { query, index } => cmd_candidates(&query, &index, &config_path()?),
        Commands::Distance {
            source,
            target,
            max,
        } => cmd_distance(&source, &target, max),
        Commands::Demo => cmd_demo(),
        Commands::Config { action } => cmd_config(action, &config_path()?),
    }
}

/// Merge command-line options over the stored defaults.
pub fn resolve_settings(args: &IndexArgs, config_path: &Path) -> Result<IndexSettings> {
    let stored = PersistentConfig::load_from(config_path)?;
    Ok(stored
        .merge_with_cli(args.threshold, args.prefix_length, args.mapping, args.coverage)
        .resolve())
}

/// Build an index over `terms` with the given settings.
pub fn build_index(terms: &[String], settings: &IndexSettings) -> Result<StateSetIndex<MappingKind>> {
    IndexBuilder::new()
        .mapping(settings.mapping)
        .prefix_length(settings.prefix_length)
        .coverage(settings.coverage)
        .build(terms)
        .context("Failed to build index")
}

/// Find command
fn cmd_find(query: &str, args: &IndexArgs, config_path: &Path) -> Result<()> {
    let settings = resolve_settings(args, config_path)?;
    let index = build_index(&args.terms, &settings)?;

    match index.find(query, settings.threshold)? {
        Some(candidate) => {
            println!("{} (d={})", candidate.term.green(), candidate.distance);
        }
        None => {
            println!(
                "{}",
                format!("No match within distance {}", settings.threshold).yellow()
            );
        }
    }

    Ok(())
}

/// Candidates command
fn cmd_candidates(query: &str, args: &IndexArgs, config_path: &Path) -> Result<()> {
    let settings = resolve_settings(args, config_path)?;
    let index = build_index(&args.terms, &settings)?;
    let candidates = index.candidates(query, settings.threshold)?;

    if candidates.is_empty() {
        println!("{}", "No candidates".yellow());
        return Ok(());
    }

    for (i, term) in candidates.iter().enumerate() {
        let distance = standard_distance(query, term);
        let label = if distance <= settings.threshold {
            term.green()
        } else {
            term.dimmed()
        };
        println!("   {}. {} (d={})", i + 1, label, distance);
    }
    println!();
    println!(
        "{} candidate(s), {} node(s) in index",
        candidates.len(),
        index.node_count()
    );

    Ok(())
}

/// Distance command
fn cmd_distance(source: &str, target: &str, max: Option<usize>) -> Result<()> {
    match max {
        None => println!("{}", standard_distance(source, target)),
        Some(max) => match bounded_distance(source, target, max) {
            Some(distance) => println!("{}", distance),
            None => println!("{}", format!("> {}", max).yellow()),
        },
    }
    Ok(())
}

/// Dictionary of the built-in example.
pub const DEMO_TERMS: [&str; 5] = ["Müller", "Mueller", "Muentner", "Muster", "Mustermann"];

/// Alphabet of the built-in example: eleven letters folded onto four labels.
pub fn demo_mapping() -> CharTable {
    [
        ('M', '1'),
        ('r', '1'),
        ('s', '1'),
        ('u', '2'),
        ('ü', '2'),
        ('m', '2'),
        ('e', '3'),
        ('n', '3'),
        ('a', '3'),
        ('l', '4'),
        ('t', '4'),
    ]
    .into_iter()
    .collect()
}

/// Demo command
fn cmd_demo() -> Result<()> {
    let query = "Mustre";
    let threshold = 2;
    let index = StateSetIndex::build(DEMO_TERMS, demo_mapping(), 6)?;

    println!("{}", "State Set Index demo".bold().underline());
    println!();
    println!("  Dictionary: {}", DEMO_TERMS.join(", ").cyan());
    println!("  Nodes:      {}", index.node_count());
    println!("  Query:      {} (threshold {})", query.cyan(), threshold);
    println!(
        "  Candidates: {}",
        index.candidates(query, threshold)?.join(", ")
    );

    match index.find(query, threshold)? {
        Some(candidate) => println!(
            "  Result:     {} (d={})",
            candidate.term.green().bold(),
            candidate.distance
        ),
        None => println!("  Result:     {}", "none".yellow()),
    }

    Ok(())
}

/// Config command
fn cmd_config(action: ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = PersistentConfig::load_from(config_path)?;
            println!("  Config file: {}", config_path.display().to_string().cyan());
            println!();
            print_settings(&config.resolve());
        }
        ConfigAction::Set {
            threshold,
            prefix_length,
            mapping,
            coverage,
        } => {
            if prefix_length == Some(0) {
                anyhow::bail!("Prefix length must be at least 1");
            }

            let config = PersistentConfig::load_from(config_path)?
                .merge_with_cli(threshold, prefix_length, mapping, coverage);
            config.save_to(config_path)?;

            println!("{}", "Configuration saved".green().bold());
            println!();
            print_settings(&config.resolve());
        }
        ConfigAction::Reset => {
            let config = PersistentConfig::default();
            config.save_to(config_path)?;
            println!("{}", "Configuration reset to defaults".green().bold());
            println!();
            print_settings(&config.resolve());
        }
    }

    Ok(())
}

fn print_settings(settings: &IndexSettings) {
    println!("  Threshold:     {}", settings.threshold.to_string().green());
    println!("  Prefix length: {}", settings.prefix_length.to_string().green());
    println!("  Mapping:       {}", settings.mapping.to_string().green());
    println!("  Coverage:      {}", settings.coverage.to_string().green());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_finds_muster() {
        let index = StateSetIndex::build(DEMO_TERMS, demo_mapping(), 6).unwrap();
        let found = index.find("Mustre", 2).unwrap().unwrap();
        assert_eq!(found.term, "Muster");
        assert_eq!(found.distance, 2);
    }

    #[test]
    fn test_build_index_uses_settings() {
        let settings = IndexSettings {
            threshold: 1,
            prefix_length: 3,
            mapping: MappingKind::CaseFold,
            coverage: crate::index::Coverage::IndexedPrefix,
        };
        let terms = vec!["Alpha".to_string(), "ALPHA".to_string()];
        let index = build_index(&terms, &settings).unwrap();

        assert_eq!(index.prefix_length(), 3);
        assert_eq!(index.node_count(), 4);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_build_index_rejects_zero_prefix() {
        let settings = IndexSettings {
            prefix_length: 0,
            ..IndexSettings::default()
        };
        assert!(build_index(&["a".to_string()], &settings).is_err());
    }
}
