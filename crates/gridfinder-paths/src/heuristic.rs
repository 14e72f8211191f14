//! Distance metrics and weighted heuristics.

use std::fmt;
use std::str::FromStr;

use gridfinder_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> f64 {
    f64::from(a.manhattan(b))
}

/// Euclidean (L2) distance between two positions.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    a.euclidean(b)
}

/// A named distance function over grid positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Metric {
    #[default]
    Manhattan,
    Euclidean,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Manhattan, Metric::Euclidean];

    /// Unweighted distance between `a` and `b`.
    #[inline]
    pub fn distance(self, a: Pos, b: Pos) -> f64 {
        match self {
            Metric::Manhattan => manhattan(a, b),
            Metric::Euclidean => euclidean(a, b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::Manhattan => "manhattan",
            Metric::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown metric name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetric(pub String);

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown metric \u{201c}{}\u{201d} (expected manhattan or euclidean)", self.0)
    }
}

impl std::error::Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" | "l1" => Ok(Metric::Manhattan),
            "euclidean" | "l2" => Ok(Metric::Euclidean),
            _ => Err(UnknownMetric(s.to_string())),
        }
    }
}

/// A metric bound to a weight: `estimate(a, b) = weight × metric(a, b)`.
///
/// With weight 1 and [`Metric::Manhattan`] the estimate never overestimates
/// the true cost on a 4-connected unit-cost grid, so A* stays optimal.
/// Weights above 1 inflate the estimate and trade optimality for speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heuristic {
    metric: Metric,
    weight: f64,
}

impl Heuristic {
    pub fn new(metric: Metric, weight: f64) -> Self {
        Self { metric, weight }
    }

    #[inline]
    pub fn estimate(&self, a: Pos, b: Pos) -> f64 {
        self.weight * self.metric.distance(a, b)
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Default for Heuristic {
    fn default() -> Self {
        Self::new(Metric::Manhattan, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_match_definitions() {
        let a = Pos::new(1, 1);
        let b = Pos::new(4, 5);
        assert_eq!(Metric::Manhattan.distance(a, b), 7.0);
        assert_eq!(Metric::Euclidean.distance(a, b), 5.0);
        assert_eq!(Metric::Euclidean.distance(b, a), 5.0);
    }

    #[test]
    fn weight_scales_the_estimate() {
        let a = Pos::new(0, 0);
        let b = Pos::new(2, 3);
        assert_eq!(Heuristic::new(Metric::Manhattan, 2.0).estimate(a, b), 10.0);
        assert_eq!(Heuristic::new(Metric::Manhattan, 0.0).estimate(a, b), 0.0);
        assert_eq!(Heuristic::new(Metric::Manhattan, 0.5).estimate(a, b), 2.5);
    }

    #[test]
    fn manhattan_weight_one_never_overestimates() {
        // On an open grid the true cost is exactly the Manhattan distance.
        let h = Heuristic::default();
        let goal = Pos::new(3, 3);
        for r in 0..7 {
            for c in 0..7 {
                let p = Pos::new(r, c);
                assert!(h.estimate(p, goal) <= f64::from(p.manhattan(goal)));
            }
        }
    }

    #[test]
    fn euclidean_is_bounded_by_manhattan() {
        let a = Pos::new(2, 9);
        for b in [Pos::new(0, 0), Pos::new(2, 2), Pos::new(7, 9)] {
            assert!(euclidean(a, b) <= manhattan(a, b));
        }
    }

    #[test]
    fn parse_metric_names() {
        assert_eq!("Manhattan".parse::<Metric>(), Ok(Metric::Manhattan));
        assert_eq!("l2".parse::<Metric>(), Ok(Metric::Euclidean));
        assert!("chebyshev".parse::<Metric>().is_err());
        assert_eq!(Metric::Euclidean.to_string(), "euclidean");
    }
}
