pub struct DefaultsConfig {
    pub population_size: usize,
    pub max_generations: usize,
    pub tournament_size: usize,
    pub elite_count: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 500,
            tournament_size: 3,
            elite_count: 2,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
        }
    }
}
