//! Per-contract storage slot counts.

use core::fmt;
use core::str::FromStr;
use rand::Rng;

/// Shape parameter of the power-law draw.
const POWER_LAW_ALPHA: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Distribution {
    #[default]
    Uniform,
    PowerLaw,
    Exponential,
}

impl Distribution {
    /// Lenient selector: anything unrecognized falls back to uniform.
    pub fn from_selector(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::PowerLaw => "power-law",
            Distribution::Exponential => "exponential",
        }
    }

    /// Draws one slot count per contract. Every count lies in `[min, max]`.
    /// Callers must ensure `min <= max`.
    pub fn sample<R: Rng>(&self, rng: &mut R, contracts: usize, min: usize, max: usize) -> Vec<usize> {
        (0..contracts).map(|_| self.sample_one(rng, min, max)).collect()
    }

    fn sample_one<R: Rng>(&self, rng: &mut R, min: usize, max: usize) -> usize {
        match self {
            // drawn as u64 so the stream is the same on 32- and 64-bit targets
            Distribution::Uniform => rng.gen_range(min as u64..=max as u64) as usize,
            Distribution::PowerLaw => {
                let u: f64 = rng.gen();
                power_law(u, min, max)
            }
            Distribution::Exponential => {
                let u: f64 = rng.gen();
                exponential(u, min, max)
            }
        }
    }
}

/// `min / (1-u)^(1/alpha)`, capped at `max`, floored, and at least `min`.
pub fn power_law(u: f64, min: usize, max: usize) -> usize {
    let slots = (min as f64 / (1.0 - u).powf(1.0 / POWER_LAW_ALPHA)).min(max as f64);
    (slots.floor() as usize).max(min)
}

/// Exponential with rate `ln(2) / (max/4)`, clamped to `[min, max]`.
///
/// `max/4` uses integer division; for `max < 4` the rate is infinite and every
/// draw clamps to `min`.
pub fn exponential(u: f64, min: usize, max: usize) -> usize {
    let lambda = core::f64::consts::LN_2 / (max / 4) as f64;
    let slots = -(1.0 - u).ln() / lambda;
    let clamped = slots.min(max as f64).max(min as f64);
    clamped as usize
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDistribution(pub String);

impl fmt::Display for UnknownDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown distribution {:?} (expected uniform, power-law or exponential)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDistribution {}

impl FromStr for Distribution {
    type Err = UnknownDistribution;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Distribution::Uniform),
            "power-law" => Ok(Distribution::PowerLaw),
            "exponential" => Ok(Distribution::Exponential),
            other => Err(UnknownDistribution(other.to_string())),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
