#[cfg(test)]
mod tests {
    use crate::automaton::rules::{GAME_OF_LIFE, PATHWAYS, RANDOM, SLIME_MOULD, WORM};
    use crate::ffi::*;
    use crate::{EngineConfig, EngineError, Palette, Pattern, SimulationEngine};
    use std::ffi::CString;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_host_frame_loop() {
        init_logging();
        unsafe {
            let engine = ka_create(32, 48, 21, 2);
            assert!(!engine.is_null());

            let name = CString::new(SLIME_MOULD).unwrap();
            assert_eq!(ka_select_rule_set(engine, name.as_ptr()), KA_OK);
            ka_set_iterations(engine, 2);

            let len = ka_frame_len(engine);
            assert_eq!(len, 32 * 48 * 3);
            let mut frame = vec![0u8; len as usize];

            // A few host ticks: step, paint, render.
            for tick in 0..5 {
                assert_eq!(ka_tick(engine), KA_OK);
                ka_paint(engine, tick * 7, tick * 11, 2);
                assert_eq!(ka_render(engine, frame.as_mut_ptr(), len), len);
            }
            assert_eq!(ka_get_generation(engine), 10);

            // The last paint is visible in the last frame.
            let (r, c) = (28usize, 44usize);
            assert_eq!(ka_get_cell(engine, r as i32, c as i32), 1.0);
            let base = (r * 48 + c) * 3;
            let palette = (*engine).palette().channels();
            for i in 0..3 {
                assert_eq!(frame[base + i], (255.0 * palette[i]) as u8);
            }

            ka_destroy(engine);
        }
    }

    #[test]
    fn test_every_builtin_rule_steps_cleanly() {
        init_logging();
        let mut engine = SimulationEngine::new(EngineConfig {
            seed: Some(99),
            num_threads: 2,
            ..EngineConfig::with_dimensions(24, 24)
        })
        .unwrap();

        let names: Vec<String> = engine.registry().names().map(str::to_string).collect();
        for name in names {
            engine.reset();
            engine.select_rule_set(&name).unwrap();
            engine.step(5).unwrap();
            assert_eq!(engine.generation(), 5, "{}", name);
            assert!(engine.field().cells().iter().all(|v| v.is_finite()), "{}", name);

            let frame = engine.current_frame();
            assert_eq!(frame.as_bytes().len(), 24 * 24 * 3);
        }
    }

    #[test]
    fn test_bounded_rules_keep_unit_range() {
        init_logging();
        for rule in [WORM, GAME_OF_LIFE, PATHWAYS, SLIME_MOULD] {
            let mut engine = SimulationEngine::new(EngineConfig {
                seed: Some(5),
                ..EngineConfig::with_dimensions(20, 20)
            })
            .unwrap();
            engine.select_rule_set(rule).unwrap();
            engine.step(20).unwrap();
            assert!(
                engine.field().cells().iter().all(|v| (0.0..=1.0).contains(v)),
                "{} left the unit range",
                rule
            );
        }
    }

    #[test]
    fn test_random_rule_is_linear() {
        init_logging();
        // Identity activation: one step is exactly the convolution of the field.
        let mut engine = SimulationEngine::new(EngineConfig {
            seed: Some(17),
            ..EngineConfig::with_dimensions(10, 10)
        })
        .unwrap();
        engine.select_rule_set(RANDOM).unwrap();
        let kernel = engine.active_rule_set().kernel;
        let expected = crate::automaton::convolve(engine.field(), &kernel);

        engine.step(1).unwrap();
        assert_eq!(*engine.field(), expected);
    }

    #[test]
    fn test_same_seed_same_world() {
        init_logging();
        let config = EngineConfig {
            seed: Some(1234),
            ..EngineConfig::with_dimensions(16, 16)
        };
        let mut a = SimulationEngine::new(config.clone()).unwrap();
        let mut b = SimulationEngine::new(config).unwrap();
        assert_eq!(a.palette(), b.palette());
        assert_eq!(a.field(), b.field());

        a.reset();
        b.reset();
        assert_eq!(a.field(), b.field());
    }

    #[test]
    fn test_life_glider_wraps_whole_torus() {
        init_logging();
        let mut engine = SimulationEngine::new(EngineConfig {
            seed: Some(3),
            palette: Some(Palette::white()),
            ..EngineConfig::with_dimensions(8, 8)
        })
        .unwrap();
        engine.select_rule_set(GAME_OF_LIFE).unwrap();
        for r in 0..8 {
            for c in 0..8 {
                engine.set_cell(r, c, 0.0);
            }
        }
        engine.place_pattern(Pattern::Glider, 0, 0);
        let start = engine.field().clone();

        // 4 generations per diagonal cell, 8 cells to come back around.
        engine.step(32).unwrap();
        assert_eq!(*engine.field(), start);
    }

    #[test]
    fn test_unknown_rule_through_rust_api() {
        init_logging();
        let mut engine = SimulationEngine::new(EngineConfig::with_dimensions(4, 4)).unwrap();
        assert!(matches!(
            engine.select_rule_set("Conway"),
            Err(EngineError::UnknownRuleSet { .. })
        ));
        assert_eq!(engine.active_rule_set().name, WORM);
    }
}
