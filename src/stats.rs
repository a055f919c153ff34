/// Stores statistics about a running simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Current generation number
    pub generation: u64,
    /// Total number of cells born since start
    pub cells_created: u64,
    /// Total number of cells that died since start
    pub cells_destroyed: u64,
    /// Current number of living cells
    pub current_population: u64,
}

impl Stats {
    /// Creates a `Stats` instance for generation zero with the given population.
    pub fn new(population: u64) -> Self {
        Stats {
            current_population: population,
            ..Stats::default()
        }
    }

    /// Records one generation step.
    pub fn record(&mut self, created: u64, destroyed: u64, population: u64) {
        self.generation += 1;
        self.cells_created += created;
        self.cells_destroyed += destroyed;
        self.current_population = population;
    }

    /// Average births per generation.
    pub fn birth_rate(&self) -> f64 {
        self.cells_created as f64 / self.generation.max(1) as f64
    }

    /// Average deaths per generation.
    pub fn death_rate(&self) -> f64 {
        self.cells_destroyed as f64 / self.generation.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_before_first_generation_are_zero() {
        let stats = Stats::new(12);
        assert_eq!(stats.generation, 0);
        assert_eq!(stats.birth_rate(), 0.0);
        assert_eq!(stats.death_rate(), 0.0);
    }

    #[test]
    fn record_accumulates() {
        let mut stats = Stats::new(10);
        stats.record(4, 2, 12);
        stats.record(0, 6, 6);
        assert_eq!(stats.generation, 2);
        assert_eq!(stats.cells_created, 4);
        assert_eq!(stats.cells_destroyed, 8);
        assert_eq!(stats.current_population, 6);
        assert_eq!(stats.birth_rate(), 2.0);
        assert_eq!(stats.death_rate(), 4.0);
    }
}
