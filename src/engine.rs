//! The simulation engine: owns the live field and drives it.
//!
//! The engine is the only writer of its field. Every mutating method takes
//! `&mut self`, so stepping and painting are serialized by construction; a host
//! sharing an engine between threads wraps it in a `Mutex`.

use std::sync::Arc;

use rand::rngs::SmallRng;

use crate::automaton::grid::{create_field, field_get, field_set, seed_binary, Field};
use crate::automaton::patterns::Pattern;
use crate::automaton::region;
use crate::automaton::rules::{RuleSet, RuleSetRegistry};
use crate::automaton::stepping::step_field;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::render::{self, FrameBuffer, Palette};

pub struct SimulationEngine {
    field: Field,
    /// Scratch buffer for the next generation; swapped with the field on commit.
    back: Vec<f64>,
    registry: RuleSetRegistry,
    active: Arc<RuleSet>,
    palette: Palette,
    rng: SmallRng,
    thread_pool: rayon::ThreadPool,
    generation: u64,
    iterations_per_tick: u32,
}

impl SimulationEngine {
    /// Build an engine with the built-in rule sets, Worm active, and a random field.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Self::with_registry(config, RuleSetRegistry::builtin())
    }

    /// Build an engine over a caller-supplied registry. The first entry is the default
    /// rule; an empty registry is rejected with `UnknownRuleSet`.
    pub fn with_registry(
        config: EngineConfig,
        registry: RuleSetRegistry,
    ) -> Result<Self, EngineError> {
        config.validate()?;

        let active = match registry.default_rule() {
            Some(rule) => Arc::clone(rule),
            None => {
                return Err(EngineError::UnknownRuleSet {
                    name: String::new(),
                })
            }
        };

        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()?;

        let mut rng = config.seeded_rng();
        let palette = match config.palette {
            Some(palette) => palette,
            None => Palette::random(&mut rng),
        };

        let mut field = create_field(config.rows, config.cols);
        seed_binary(&mut field, &mut rng);

        log::info!(
            "engine created: {}x{} grid, rule {:?}, {} worker threads",
            config.rows,
            config.cols,
            active.name,
            thread_pool.current_num_threads()
        );

        Ok(SimulationEngine {
            back: vec![0.0; field.cells().len()],
            field,
            registry,
            active,
            palette,
            rng,
            thread_pool,
            generation: 0,
            iterations_per_tick: config.iterations_per_tick.max(1),
        })
    }

    /// Replace the field with a fresh uniform 0/1 field and restart the generation count.
    pub fn reset(&mut self) {
        seed_binary(&mut self.field, &mut self.rng);
        self.generation = 0;
        log::info!("field reset ({}x{})", self.field.rows(), self.field.cols());
    }

    /// Make `name` the active rule set from the next step on.
    ///
    /// On error the active rule set and the field are unchanged.
    pub fn select_rule_set(&mut self, name: &str) -> Result<(), EngineError> {
        match self.registry.get(name) {
            Ok(rule) => {
                log::debug!("rule set {:?} -> {:?}", self.active.name, rule.name);
                self.active = rule;
                Ok(())
            }
            Err(err) => {
                log::warn!("{}", err);
                Err(err)
            }
        }
    }

    /// Add a rule set to this engine's registry.
    pub fn register_rule_set(&mut self, rule: RuleSet) -> Result<(), EngineError> {
        self.registry.register(rule)
    }

    /// Advance `count` generations under the active rule set.
    ///
    /// Each generation is fully committed before the next one reads the field.
    /// If a generation produces a non-finite value, stepping stops there: the
    /// field holds the last committed generation and the error is returned.
    pub fn step(&mut self, count: u32) -> Result<(), EngineError> {
        let rule = Arc::clone(&self.active);
        let SimulationEngine {
            field,
            back,
            thread_pool,
            generation,
            ..
        } = self;

        thread_pool.install(|| {
            for _ in 0..count {
                if let Err(err) = step_field(field, back, &rule) {
                    log::error!("generation {}: {}", *generation + 1, err);
                    return Err(err);
                }
                *generation += 1;
            }
            Ok(())
        })
    }

    /// Advance by the configured iterations per tick.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        self.step(self.iterations_per_tick)
    }

    pub fn iterations_per_tick(&self) -> u32 {
        self.iterations_per_tick
    }

    /// Set the iterations per tick; values below 1 become 1.
    pub fn set_iterations_per_tick(&mut self, iterations: u32) {
        self.iterations_per_tick = iterations.max(1);
        log::debug!("iterations per tick: {}", self.iterations_per_tick);
    }

    pub fn increase_iterations(&mut self) {
        self.set_iterations_per_tick(self.iterations_per_tick.saturating_add(1));
    }

    pub fn decrease_iterations(&mut self) {
        self.set_iterations_per_tick(self.iterations_per_tick.saturating_sub(1));
    }

    /// Set the inclusive square of half-width `half_size` around `(row, col)` to live cells.
    /// Coordinates wrap.
    pub fn paint(&mut self, row: isize, col: isize, half_size: usize) {
        region::paint(&mut self.field, row, col, half_size);
    }

    /// Stamp a seed pattern anchored at `(row, col)`. Coordinates wrap.
    pub fn place_pattern(&mut self, pattern: Pattern, row: isize, col: isize) {
        region::stamp(&mut self.field, row, col, pattern.cells());
    }

    /// Render the current field with the engine's palette.
    pub fn current_frame(&self) -> FrameBuffer {
        self.thread_pool
            .install(|| render::render(&self.field, &self.palette))
    }

    /// Render into an existing buffer, reusing its allocation.
    pub fn render_into(&self, frame: &mut FrameBuffer) {
        self.thread_pool
            .install(|| render::render_into(&self.field, &self.palette, frame));
    }

    /// Read a cell; coordinates wrap.
    pub fn cell(&self, row: isize, col: isize) -> f64 {
        field_get(&self.field, row, col)
    }

    /// Write a cell; coordinates wrap.
    pub fn set_cell(&mut self, row: isize, col: isize, value: f64) {
        field_set(&mut self.field, row, col, value);
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn rows(&self) -> usize {
        self.field.rows()
    }

    pub fn cols(&self) -> usize {
        self.field.cols()
    }

    /// Generations committed since construction or the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn active_rule_set(&self) -> &RuleSet {
        &self.active
    }

    pub fn registry(&self) -> &RuleSetRegistry {
        &self.registry
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::activation::Activation;
    use crate::automaton::kernel::Kernel;
    use crate::automaton::rules::{GAME_OF_LIFE, SLIME_MOULD, WAVES, WORM};

    fn seeded(rows: usize, cols: usize, seed: u64) -> SimulationEngine {
        SimulationEngine::new(EngineConfig {
            seed: Some(seed),
            num_threads: 2,
            ..EngineConfig::with_dimensions(rows, cols)
        })
        .unwrap()
    }

    fn clear(engine: &mut SimulationEngine) {
        for r in 0..engine.rows() as isize {
            for c in 0..engine.cols() as isize {
                engine.set_cell(r, c, 0.0);
            }
        }
    }

    #[test]
    fn test_new_engine_defaults() {
        let engine = seeded(12, 9, 1);
        assert_eq!(engine.rows(), 12);
        assert_eq!(engine.cols(), 9);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.iterations_per_tick(), 1);
        assert_eq!(engine.active_rule_set().name, WORM);
        assert!(engine.palette().validate().is_ok());
        assert!(engine.field().cells().iter().all(|&c| c == 0.0 || c == 1.0));
    }

    #[test]
    fn test_invalid_dimensions_fail_construction() {
        let result = SimulationEngine::new(EngineConfig::with_dimensions(0, 5));
        assert!(matches!(
            result,
            Err(EngineError::InvalidDimensions { rows: 0, cols: 5 })
        ));
    }

    #[test]
    fn test_oversized_dimensions_fail_construction() {
        let rows = usize::MAX / 2;
        let result = SimulationEngine::new(EngineConfig::with_dimensions(rows, 4));
        assert_eq!(result.err(), Some(EngineError::InvalidDimensions { rows, cols: 4 }));
    }

    #[test]
    fn test_configured_palette_is_kept() {
        let palette = Palette::new(0.1, 0.2, 0.3).unwrap();
        let engine = SimulationEngine::new(EngineConfig {
            palette: Some(palette),
            ..EngineConfig::with_dimensions(4, 4)
        })
        .unwrap();
        assert_eq!(*engine.palette(), palette);
    }

    #[test]
    fn test_reset_produces_binary_field() {
        let mut engine = seeded(20, 30, 5);
        engine.select_rule_set(SLIME_MOULD).unwrap();
        engine.step(3).unwrap();
        assert_eq!(engine.generation(), 3);

        engine.reset();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.field().rows(), 20);
        assert_eq!(engine.field().cols(), 30);
        assert!(engine.field().cells().iter().all(|&c| c == 0.0 || c == 1.0));
    }

    #[test]
    fn test_unknown_rule_set_leaves_state_unchanged() {
        let mut engine = seeded(8, 8, 2);
        engine.select_rule_set(GAME_OF_LIFE).unwrap();
        let before = engine.field().clone();

        let err = engine.select_rule_set("nonexistent").unwrap_err();
        assert_eq!(
            err,
            EngineError::UnknownRuleSet {
                name: "nonexistent".to_string()
            }
        );
        assert_eq!(engine.active_rule_set().name, GAME_OF_LIFE);
        assert_eq!(*engine.field(), before);
    }

    #[test]
    fn test_two_single_steps_equal_one_double_step() {
        for rule in [WORM, GAME_OF_LIFE, SLIME_MOULD] {
            let mut a = seeded(16, 24, 11);
            let mut b = seeded(16, 24, 11);
            a.select_rule_set(rule).unwrap();
            b.select_rule_set(rule).unwrap();
            assert_eq!(a.field(), b.field());

            a.step(1).unwrap();
            a.step(1).unwrap();
            b.step(2).unwrap();

            assert_eq!(a.field(), b.field(), "rule {}", rule);
            assert_eq!(a.generation(), b.generation());
        }
    }

    #[test]
    fn test_step_zero_is_noop() {
        let mut engine = seeded(6, 6, 3);
        let before = engine.field().clone();
        engine.step(0).unwrap();
        assert_eq!(*engine.field(), before);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_blinker_period_two() {
        let mut engine = seeded(9, 9, 4);
        engine.select_rule_set(GAME_OF_LIFE).unwrap();
        clear(&mut engine);
        engine.place_pattern(Pattern::Blinker, 4, 4);
        let start = engine.field().clone();

        engine.step(1).unwrap();
        assert_ne!(*engine.field(), start);
        assert_eq!(engine.cell(4, 3), 1.0);
        assert_eq!(engine.cell(4, 5), 1.0);
        assert_eq!(engine.cell(3, 4), 0.0);

        engine.step(1).unwrap();
        assert_eq!(*engine.field(), start);
    }

    #[test]
    fn test_paint_single_cell() {
        let mut engine = seeded(10, 10, 6);
        clear(&mut engine);
        let before = engine.field().clone();

        engine.paint(-1, 10, 0);

        let changed: Vec<usize> = engine
            .field()
            .cells()
            .iter()
            .zip(before.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect();
        // (-1, 10) wraps to (9, 0)
        assert_eq!(changed, vec![90]);
        assert_eq!(engine.cell(9, 0), 1.0);
    }

    #[test]
    fn test_paint_between_steps() {
        let mut engine = seeded(10, 10, 7);
        engine.select_rule_set(GAME_OF_LIFE).unwrap();
        clear(&mut engine);

        // The painted square must be fully in place before the step reads it.
        engine.paint(5, 5, 1);
        engine.step(1).unwrap();
        // The 3x3 square keeps its corners and loses its center and edges.
        assert_eq!(engine.cell(4, 4), 1.0);
        assert_eq!(engine.cell(5, 5), 0.0);
        assert_eq!(engine.cell(4, 5), 0.0);
        assert_eq!(engine.cell(3, 5), 1.0);
    }

    #[test]
    fn test_non_finite_step_is_reported_and_rolled_back() {
        let mut engine = seeded(6, 6, 8);
        engine
            .register_rule_set(RuleSet::new(
                "Runaway",
                Kernel::new([[f64::MAX; 3]; 3]),
                Activation::Waves,
            ))
            .unwrap();
        engine.select_rule_set("Runaway").unwrap();
        engine.paint(0, 0, 6);

        let before = engine.field().clone();
        let err = engine.step(5).unwrap_err();
        assert!(matches!(err, EngineError::NonFiniteResult { .. }));
        assert_eq!(*engine.field(), before);
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_non_finite_keeps_earlier_generations_of_the_call() {
        // Identity over a uniform 1e100 kernel multiplies a flat field by 9e100
        // each generation: three steps stay finite, the fourth overflows.
        let runaway = || {
            let mut engine = seeded(6, 6, 14);
            engine
                .register_rule_set(RuleSet::new(
                    "Slow Runaway",
                    Kernel::new([[1e100; 3]; 3]),
                    Activation::Identity,
                ))
                .unwrap();
            engine.select_rule_set("Slow Runaway").unwrap();
            engine.paint(0, 0, 6);
            engine
        };

        let mut expected = runaway();
        expected.step(3).unwrap();
        assert!(expected.field().cells().iter().all(|v| v.is_finite() && *v > 1e302));

        let mut engine = runaway();
        let err = engine.step(6).unwrap_err();
        assert!(matches!(err, EngineError::NonFiniteResult { row: 0, col: 0, .. }));
        assert_eq!(engine.generation(), 3);
        assert_eq!(engine.field(), expected.field());
    }

    #[test]
    fn test_waves_stays_finite_for_a_while() {
        let mut engine = seeded(16, 16, 9);
        engine.select_rule_set(WAVES).unwrap();
        engine.step(10).unwrap();
        assert!(engine.field().cells().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_iterations_clamp_at_one() {
        let mut engine = seeded(4, 4, 10);
        engine.decrease_iterations();
        assert_eq!(engine.iterations_per_tick(), 1);

        engine.increase_iterations();
        engine.increase_iterations();
        assert_eq!(engine.iterations_per_tick(), 3);

        engine.set_iterations_per_tick(0);
        assert_eq!(engine.iterations_per_tick(), 1);
    }

    #[test]
    fn test_tick_runs_configured_iterations() {
        let mut engine = seeded(8, 8, 12);
        engine.set_iterations_per_tick(4);
        engine.tick().unwrap();
        assert_eq!(engine.generation(), 4);
    }

    #[test]
    fn test_current_frame_matches_field() {
        let mut engine = SimulationEngine::new(EngineConfig {
            palette: Some(Palette::white()),
            seed: Some(13),
            ..EngineConfig::with_dimensions(5, 7)
        })
        .unwrap();
        clear(&mut engine);
        engine.set_cell(2, 3, 1.0);

        let frame = engine.current_frame();
        assert_eq!((frame.rows(), frame.cols()), (5, 7));
        assert_eq!(frame.pixel(2, 3), [255, 255, 255]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0]);

        let mut reused = FrameBuffer::new(5, 7);
        engine.render_into(&mut reused);
        assert_eq!(reused, frame);
    }

    #[test]
    fn test_empty_registry_rejected() {
        let result = SimulationEngine::with_registry(
            EngineConfig::with_dimensions(4, 4),
            RuleSetRegistry::new(),
        );
        assert!(result.is_err());
    }
}
