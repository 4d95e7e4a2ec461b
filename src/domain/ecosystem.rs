//! The closed set of ecosystem classes and a table type keyed by them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// An ecosystem the predictor can choose between.
///
/// Declaration order is alphabetical and doubles as the tie-break order:
/// when two classes share the top probability, the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Arctic,
    Desert,
    Forest,
    Grassland,
    Ocean,
}

impl Ecosystem {
    /// Number of classes.
    pub const COUNT: usize = 5;

    /// Every class, in tie-break order.
    pub const ALL: [Ecosystem; Self::COUNT] = [
        Ecosystem::Arctic,
        Ecosystem::Desert,
        Ecosystem::Forest,
        Ecosystem::Grassland,
        Ecosystem::Ocean,
    ];

    /// Position of this class inside [`Ecosystem::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Ecosystem::Arctic => 0,
            Ecosystem::Desert => 1,
            Ecosystem::Forest => 2,
            Ecosystem::Grassland => 3,
            Ecosystem::Ocean => 4,
        }
    }

    /// Machine label, as serialized.
    pub const fn label(self) -> &'static str {
        match self {
            Ecosystem::Arctic => "arctic",
            Ecosystem::Desert => "desert",
            Ecosystem::Forest => "forest",
            Ecosystem::Grassland => "grassland",
            Ecosystem::Ocean => "ocean",
        }
    }

    /// Human-facing name shown next to the bar chart.
    pub const fn title(self) -> &'static str {
        match self {
            Ecosystem::Arctic => "Arctic",
            Ecosystem::Desert => "Desert",
            Ecosystem::Forest => "Forest",
            Ecosystem::Grassland => "Grassland",
            Ecosystem::Ocean => "Ocean",
        }
    }

    /// Parse a machine label (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|eco| eco.label() == label)
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value for every [`Ecosystem`].
///
/// Backed by a fixed array, so no class can ever be missing. Used for
/// per-sentence score vectors, aggregates and cached class embeddings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ByEcosystem<T>([T; Ecosystem::COUNT]);

/// Per-class non-negative scores.
pub type ClassScoreVector = ByEcosystem<f64>;

impl<T> ByEcosystem<T> {
    /// Build a table by evaluating `f` for each class in order.
    pub fn from_fn(mut f: impl FnMut(Ecosystem) -> T) -> Self {
        Self(Ecosystem::ALL.map(&mut f))
    }

    /// Iterate `(class, value)` pairs in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (Ecosystem, &T)> {
        Ecosystem::ALL.into_iter().zip(self.0.iter())
    }

    /// Values in tie-break order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Transform every value, keeping the class keys.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ByEcosystem<U> {
        ByEcosystem(self.0.map(f))
    }
}

impl<T: Default> Default for ByEcosystem<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<Ecosystem> for ByEcosystem<T> {
    type Output = T;

    fn index(&self, eco: Ecosystem) -> &T {
        &self.0[eco.index()]
    }
}

impl<T> IndexMut<Ecosystem> for ByEcosystem<T> {
    fn index_mut(&mut self, eco: Ecosystem) -> &mut T {
        &mut self.0[eco.index()]
    }
}

impl ClassScoreVector {
    /// Sum of all class scores.
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Element-wise accumulate another vector into this one.
    pub fn add_assign(&mut self, other: &ClassScoreVector) {
        for (acc, value) in self.0.iter_mut().zip(other.0.iter()) {
            *acc += value;
        }
    }

    /// Highest-scoring class; ties go to the earliest class.
    pub fn argmax(&self) -> (Ecosystem, f64) {
        let mut best = (Ecosystem::ALL[0], self.0[0]);
        for (eco, &value) in self.iter().skip(1) {
            if value > best.1 {
                best = (eco, value);
            }
        }
        best
    }
}
