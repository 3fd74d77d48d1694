//! Deck generation configuration.
//!
//! The modulus is the only required input; everything else has a
//! default matching the reference deck (`p = 7`, 57 cards of 8 symbols).
//!
//! Configs can be built in code or loaded from JSON:
//!
//! ```
//! use rust_spotit::core::DeckConfig;
//!
//! let config = DeckConfig::from_json(r#"{ "modulus": 3 }"#).unwrap();
//! assert_eq!(config.modulus, 3);
//! assert!(config.verify);
//! ```

use serde::{Deserialize, Serialize};

use super::error::PlaneError;
use super::modulus::Modulus;
use crate::plane::Canonicalization;

/// Modulus used when none is configured.
pub const DEFAULT_MODULUS: u32 = 7;

/// Configuration for [`Deck::generate`](crate::deck::Deck::generate).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Field modulus `p`. Must be prime.
    pub modulus: u32,

    /// Dedup strategy for projective classes.
    pub canonicalization: Canonicalization,

    /// Check every deck post-condition after building.
    pub verify: bool,

    /// Shuffle card order with this seed. `None` keeps line order.
    pub shuffle_seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODULUS)
    }
}

impl DeckConfig {
    /// Create a configuration for `modulus` with default settings.
    #[must_use]
    pub fn new(modulus: u32) -> Self {
        Self {
            modulus,
            canonicalization: Canonicalization::default(),
            verify: true,
            shuffle_seed: None,
        }
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, PlaneError> {
        serde_json::from_str(text).map_err(|e| PlaneError::Config(e.to_string()))
    }

    /// Select the canonicalization strategy.
    #[must_use]
    pub fn with_canonicalization(mut self, strategy: Canonicalization) -> Self {
        self.canonicalization = strategy;
        self
    }

    /// Skip post-build verification.
    #[must_use]
    pub fn without_verify(mut self) -> Self {
        self.verify = false;
        self
    }

    /// Shuffle the finished deck with a seed.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Validate the configured modulus.
    ///
    /// Runs before any generation work so a bad modulus never yields a
    /// malformed deck.
    pub fn modulus(&self) -> Result<Modulus, PlaneError> {
        Modulus::new(self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeckConfig::default();
        assert_eq!(config.modulus, 7);
        assert_eq!(config.canonicalization, Canonicalization::Normalized);
        assert!(config.verify);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn test_builder() {
        let config = DeckConfig::new(5)
            .with_canonicalization(Canonicalization::PairwiseScan)
            .without_verify()
            .with_shuffle_seed(11);

        assert_eq!(config.modulus, 5);
        assert_eq!(config.canonicalization, Canonicalization::PairwiseScan);
        assert!(!config.verify);
        assert_eq!(config.shuffle_seed, Some(11));
    }

    #[test]
    fn test_from_json() {
        let config = DeckConfig::from_json(
            r#"{ "modulus": 5, "canonicalization": "pairwise_scan", "shuffle_seed": 3 }"#,
        )
        .unwrap();
        assert_eq!(config.modulus, 5);
        assert_eq!(config.canonicalization, Canonicalization::PairwiseScan);
        assert_eq!(config.shuffle_seed, Some(3));
        assert!(config.verify);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        assert!(matches!(
            DeckConfig::from_json(r#"{ "modulo": 5 }"#),
            Err(PlaneError::Config(_))
        ));
    }

    #[test]
    fn test_modulus_validation() {
        assert!(DeckConfig::new(7).modulus().is_ok());
        assert!(matches!(
            DeckConfig::new(4).modulus(),
            Err(PlaneError::InvalidModulus { modulus: 4, .. })
        ));
    }
}
