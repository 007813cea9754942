use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigError, Result};

/// Macroscopic field selected for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    #[default]
    Density,
    VelocityX,
    VelocityY,
    Speed,
    Curl,
}

impl Quantity {
    pub const ALL: [Quantity; 5] = [
        Quantity::Density,
        Quantity::VelocityX,
        Quantity::VelocityY,
        Quantity::Speed,
        Quantity::Curl,
    ];

    pub fn index(self) -> u8 {
        match self {
            Quantity::Density => 0,
            Quantity::VelocityX => 1,
            Quantity::VelocityY => 2,
            Quantity::Speed => 3,
            Quantity::Curl => 4,
        }
    }

    pub fn from_index(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(ConfigError::UnknownQuantity(index))
    }

    pub fn label(self) -> &'static str {
        match self {
            Quantity::Density => "rho",
            Quantity::VelocityX => "ux",
            Quantity::VelocityY => "uy",
            Quantity::Speed => "speed",
            Quantity::Curl => "curl",
        }
    }

    /// Curl is derived lazily and only for this quantity
    #[inline]
    pub fn needs_curl(self) -> bool {
        matches!(self, Quantity::Curl)
    }

    /// Cycle forward, wrapping like the display selector does
    pub fn next(self) -> Self {
        Self::ALL[(self.index() as usize + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_stable() {
        for (i, q) in Quantity::ALL.iter().enumerate() {
            assert_eq!(q.index() as usize, i);
            assert_eq!(Quantity::from_index(i as u8).unwrap(), *q);
        }
        assert!(Quantity::from_index(5).is_err());
    }

    #[test]
    fn next_wraps_around() {
        assert_eq!(Quantity::Curl.next(), Quantity::Density);
        assert_eq!(Quantity::Density.next(), Quantity::VelocityX);
    }
}
