//! Named rule sets and the registry the engine selects from.
//!
//! A rule set pairs a kernel with an activation. The registry keeps them in
//! display order and resolves names exactly; there is no fallback rule.

use std::sync::Arc;

use super::activation::Activation;
use super::kernel::Kernel;
use crate::error::EngineError;

pub const WORM: &str = "Worm";
pub const GAME_OF_LIFE: &str = "Game of Life";
pub const RANDOM: &str = "Random";
pub const PATHWAYS: &str = "Pathways";
pub const SLIME_MOULD: &str = "Slime Mould";
pub const WAVES: &str = "Waves";
pub const MITOSIS: &str = "Mitosis";

/// A named kernel + activation pair.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub name: String,
    pub kernel: Kernel,
    pub activation: Activation,
}

impl RuleSet {
    pub fn new(name: impl Into<String>, kernel: Kernel, activation: Activation) -> Self {
        RuleSet {
            name: name.into(),
            kernel,
            activation,
        }
    }
}

/// Ordered collection of rule sets with unique names.
#[derive(Debug, Clone, Default)]
pub struct RuleSetRegistry {
    rules: Vec<Arc<RuleSet>>,
}

impl RuleSetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven built-in rule sets, Worm first.
    pub fn builtin() -> Self {
        let rules = vec![
            RuleSet::new(
                WORM,
                Kernel::new([[0.68, -0.9, 0.68], [-0.9, -0.66, -0.9], [0.68, -0.9, 0.68]]),
                Activation::InvertedGaussian,
            ),
            RuleSet::new(
                GAME_OF_LIFE,
                Kernel::new([[1.0, 1.0, 1.0], [1.0, 9.0, 1.0], [1.0, 1.0, 1.0]]),
                Activation::GameOfLife,
            ),
            // Shares the identity activation; kept as-is.
            RuleSet::new(
                RANDOM,
                Kernel::new([
                    [-0.448, 0.256, -0.448],
                    [0.256, 0.246, 0.256],
                    [-0.448, 0.256, -0.448],
                ]),
                Activation::Identity,
            ),
            RuleSet::new(
                PATHWAYS,
                Kernel::new([[0.0, 1.0, 0.0], [1.0, 1.0, 1.0], [0.0, 1.0, 0.0]]),
                Activation::Pathways,
            ),
            RuleSet::new(
                SLIME_MOULD,
                Kernel::new([[0.8, -0.85, 0.8], [-0.85, -0.2, -0.85], [0.8, -0.85, 0.8]]),
                Activation::SlimeMould,
            ),
            RuleSet::new(
                WAVES,
                Kernel::new([
                    [0.5646, -0.716, 0.5646],
                    [-0.716, 0.627, -0.716],
                    [0.5646, -0.716, 0.5646],
                ]),
                Activation::Waves,
            ),
            // Shares the waves activation; kept as-is.
            RuleSet::new(
                MITOSIS,
                Kernel::new([
                    [-0.939, 0.88, -0.939],
                    [0.88, 0.4, 0.88],
                    [-0.939, 0.88, -0.939],
                ]),
                Activation::Waves,
            ),
        ];

        RuleSetRegistry {
            rules: rules.into_iter().map(Arc::new).collect(),
        }
    }

    /// Add a rule set at the end of the display order.
    ///
    /// Rejects duplicate names, and activations that compare scores exactly
    /// when paired with a non-integral kernel.
    pub fn register(&mut self, rule: RuleSet) -> Result<(), EngineError> {
        if self.contains(&rule.name) {
            return Err(EngineError::DuplicateRuleSet { name: rule.name });
        }
        if rule.activation.requires_integral_scores() && !rule.kernel.is_integral() {
            return Err(EngineError::NonIntegralKernel { name: rule.name });
        }
        self.rules.push(Arc::new(rule));
        Ok(())
    }

    /// Look up a rule set by exact name.
    pub fn get(&self, name: &str) -> Result<Arc<RuleSet>, EngineError> {
        self.rules
            .iter()
            .find(|rule| rule.name == name)
            .cloned()
            .ok_or_else(|| EngineError::UnknownRuleSet {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.name == name)
    }

    /// Rule set at a display position.
    pub fn get_index(&self, index: usize) -> Option<&Arc<RuleSet>> {
        self.rules.get(index)
    }

    /// The rule set a new engine starts with: the first registered one (Worm
    /// for the built-ins).
    pub fn default_rule(&self) -> Option<&Arc<RuleSet>> {
        self.rules.first()
    }

    /// Names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<RuleSet>> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
