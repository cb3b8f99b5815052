mod defaults;

use crate::cli::EvolveArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use hpfold::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialPopulationConfig {
    size: Option<usize>,
    elite_count: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialSelectionConfig {
    tournament_size: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialVariationConfig {
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialTerminationConfig {
    max_generations: Option<usize>,
    target_fitness: Option<f64>,
}

/// Search settings as read from a TOML file; every field may be omitted.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialEvolutionConfig {
    seed: Option<u64>,
    population: Option<PartialPopulationConfig>,
    selection: Option<PartialSelectionConfig>,
    variation: Option<PartialVariationConfig>,
    termination: Option<PartialTerminationConfig>,
}

/// Fully resolved settings for one `evolve` run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub evolution: core_config::EvolutionConfig,
    pub seed: Option<u64>,
}

impl PartialEvolutionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Precedence: command-line flags, then the file, then built-in defaults.
    pub fn merge_with_cli(self, args: &EvolveArgs) -> Result<RunConfig> {
        let defaults = DefaultsConfig::default();
        let population = self.population.unwrap_or_default();
        let selection = self.selection.unwrap_or_default();
        let variation = self.variation.unwrap_or_default();
        let termination = self.termination.unwrap_or_default();

        let evolution = core_config::EvolutionConfigBuilder::new()
            .population_size(
                args.population_size
                    .or(population.size)
                    .unwrap_or(defaults.population_size),
            )
            .elite_count(
                args.elite_count
                    .or(population.elite_count)
                    .unwrap_or(defaults.elite_count),
            )
            .tournament_size(
                args.tournament_size
                    .or(selection.tournament_size)
                    .unwrap_or(defaults.tournament_size),
            )
            .crossover_rate(
                args.crossover_rate
                    .or(variation.crossover_rate)
                    .unwrap_or(defaults.crossover_rate),
            )
            .mutation_rate(
                args.mutation_rate
                    .or(variation.mutation_rate)
                    .unwrap_or(defaults.mutation_rate),
            )
            .max_generations(
                args.generations
                    .or(termination.max_generations)
                    .unwrap_or(defaults.max_generations),
            )
            .target_fitness(args.target_fitness.or(termination.target_fitness))
            .build()?;

        Ok(RunConfig {
            evolution,
            seed: args.seed.or(self.seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::io::Write;

    fn evolve_args(extra: &[&str]) -> EvolveArgs {
        let mut argv = vec!["hpfold", "evolve", "-s", "10011"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Evolve(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    const FULL_CONFIG: &str = r#"
seed = 11

[population]
size = 80
elite-count = 4

[selection]
tournament-size = 5

[variation]
crossover-rate = 0.7
mutation-rate = 0.2

[termination]
max-generations = 300
target-fitness = 6.0
"#;

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config = PartialEvolutionConfig::from_toml("")
            .unwrap()
            .merge_with_cli(&evolve_args(&[]))
            .unwrap();
        let defaults = DefaultsConfig::default();
        assert_eq!(config.evolution.population_size, defaults.population_size);
        assert_eq!(config.evolution.max_generations, defaults.max_generations);
        assert_eq!(config.evolution.target_fitness, None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn file_values_are_applied() {
        let config = PartialEvolutionConfig::from_toml(FULL_CONFIG)
            .unwrap()
            .merge_with_cli(&evolve_args(&[]))
            .unwrap();
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.evolution.population_size, 80);
        assert_eq!(config.evolution.selection.elite_count, 4);
        assert_eq!(config.evolution.selection.tournament_size, 5);
        assert_eq!(config.evolution.variation.crossover_rate, 0.7);
        assert_eq!(config.evolution.variation.mutation_rate, 0.2);
        assert_eq!(config.evolution.max_generations, 300);
        assert_eq!(config.evolution.target_fitness, Some(6.0));
    }

    #[test]
    fn cli_overrides_take_precedence_over_file() {
        let config = PartialEvolutionConfig::from_toml(FULL_CONFIG)
            .unwrap()
            .merge_with_cli(&evolve_args(&["-n", "30", "--seed", "99", "--mutation-rate", "0.5"]))
            .unwrap();
        assert_eq!(config.evolution.population_size, 30);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.evolution.variation.mutation_rate, 0.5);
        assert_eq!(config.evolution.variation.crossover_rate, 0.7);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PartialEvolutionConfig::from_toml("[population]\nsize = 10\ncolour = 3\n").is_err());
        assert!(PartialEvolutionConfig::from_toml("generations = 10\n").is_err());
    }

    #[test]
    fn invalid_merged_values_surface_as_config_errors() {
        let result = PartialEvolutionConfig::default().merge_with_cli(&evolve_args(&["--crossover-rate", "2.0"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn from_file_reads_and_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();

        let good = dir.path().join("search.toml");
        std::fs::File::create(&good)
            .unwrap()
            .write_all(FULL_CONFIG.as_bytes())
            .unwrap();
        assert!(PartialEvolutionConfig::from_file(&good).is_ok());

        let bad = dir.path().join("broken.toml");
        std::fs::write(&bad, "[population\nsize = 1").unwrap();
        match PartialEvolutionConfig::from_file(&bad) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected a parsing error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn from_file_reports_missing_files_as_io_errors() {
        let result = PartialEvolutionConfig::from_file(Path::new("/nonexistent/hpfold.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
