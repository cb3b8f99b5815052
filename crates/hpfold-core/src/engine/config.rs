use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{parameter}': {reason}")]
    InvalidValue {
        parameter: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    pub tournament_size: usize,
    pub elite_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariationConfig {
    /// Probability that a selected parent pair is recombined.
    pub crossover_rate: f64,
    /// Probability that an offspring receives one point mutation.
    pub mutation_rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub max_generations: usize,
    /// Stop as soon as the best fold reaches this fitness.
    pub target_fitness: Option<f64>,
    pub selection: SelectionConfig,
    pub variation: VariationConfig,
}

#[derive(Default)]
pub struct EvolutionConfigBuilder {
    population_size: Option<usize>,
    max_generations: Option<usize>,
    target_fitness: Option<f64>,
    tournament_size: Option<usize>,
    elite_count: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
}

impl EvolutionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }
    pub fn max_generations(mut self, generations: usize) -> Self {
        self.max_generations = Some(generations);
        self
    }
    pub fn target_fitness(mut self, fitness: Option<f64>) -> Self {
        self.target_fitness = fitness;
        self
    }
    pub fn tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = Some(size);
        self
    }
    pub fn elite_count(mut self, count: usize) -> Self {
        self.elite_count = Some(count);
        self
    }
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = Some(rate);
        self
    }
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    pub fn build(self) -> Result<EvolutionConfig, ConfigError> {
        let population_size = self
            .population_size
            .ok_or(ConfigError::MissingParameter("population_size"))?;
        let max_generations = self
            .max_generations
            .ok_or(ConfigError::MissingParameter("max_generations"))?;
        let tournament_size = self
            .tournament_size
            .ok_or(ConfigError::MissingParameter("tournament_size"))?;
        let elite_count = self
            .elite_count
            .ok_or(ConfigError::MissingParameter("elite_count"))?;
        let crossover_rate = self
            .crossover_rate
            .ok_or(ConfigError::MissingParameter("crossover_rate"))?;
        let mutation_rate = self
            .mutation_rate
            .ok_or(ConfigError::MissingParameter("mutation_rate"))?;

        if population_size < 2 {
            return Err(invalid("population_size", "must be at least 2"));
        }
        if max_generations == 0 {
            return Err(invalid("max_generations", "must be at least 1"));
        }
        if tournament_size == 0 || tournament_size > population_size {
            return Err(invalid(
                "tournament_size",
                format!("must be between 1 and the population size ({population_size})"),
            ));
        }
        if elite_count >= population_size {
            return Err(invalid(
                "elite_count",
                format!("must be smaller than the population size ({population_size})"),
            ));
        }
        check_probability("crossover_rate", crossover_rate)?;
        check_probability("mutation_rate", mutation_rate)?;
        if let Some(target) = self.target_fitness {
            if !target.is_finite() || target < 0.0 {
                return Err(invalid("target_fitness", "must be a non-negative number"));
            }
        }

        Ok(EvolutionConfig {
            population_size,
            max_generations,
            target_fitness: self.target_fitness,
            selection: SelectionConfig {
                tournament_size,
                elite_count,
            },
            variation: VariationConfig {
                crossover_rate,
                mutation_rate,
            },
        })
    }
}

fn invalid(parameter: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        parameter,
        reason: reason.into(),
    }
}

fn check_probability(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(parameter, format!("{value} is not within [0, 1]")))
    }
}
