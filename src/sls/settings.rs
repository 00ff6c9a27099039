//! Run configuration, composed the way the teacher composes
//! `solver::Settings` out of focused sub-structs (`db`, `heur`,
//! `restart`, ...): one nested struct per concern, each with a `Default`
//! that matches the constants spec.md names.

use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Heuristic {
    Gsat,
    GsatRandomWalk,
    WalkSat,
    WalkSatTabu,
    GsatTabu,
    Novelty,
    AdaptiveNoveltyPlus,
    RNovelty,
    RoTS,
    HRTS,
    IRoTS,
    Amls,
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Heuristic::*;
        Ok(match s {
            "gsat" => Gsat,
            "gsat-rw" => GsatRandomWalk,
            "walksat" => WalkSat,
            "walksat-tabu" => WalkSatTabu,
            "gsat-tabu" => GsatTabu,
            "novelty" => Novelty,
            "novelty-plus" => AdaptiveNoveltyPlus,
            "r-novelty" => RNovelty,
            "rots" => RoTS,
            "hrts" => HRTS,
            "irots" => IRoTS,
            "amls" => Amls,
            other => return Err(format!("unknown heuristic {:?}", other)),
        })
    }
}

impl Heuristic {
    pub fn name(&self) -> &'static str {
        use Heuristic::*;
        match self {
            Gsat => "gsat",
            GsatRandomWalk => "gsat-rw",
            WalkSat => "walksat",
            WalkSatTabu => "walksat-tabu",
            GsatTabu => "gsat-tabu",
            Novelty => "novelty",
            AdaptiveNoveltyPlus => "novelty-plus",
            RNovelty => "r-novelty",
            RoTS => "rots",
            HRTS => "hrts",
            IRoTS => "irots",
            Amls => "amls",
        }
    }
}

/// Noise parameters shared by the random-walk family of selectors.
#[derive(Copy, Clone, Debug)]
pub struct NoiseSettings {
    /// `p` in GSAT/WalkSAT/GSAT-Tabu/WalkSAT-Tabu/Novelty/R-Novelty.
    pub p: f64,
    /// `θ`, `φ` for Adaptive Novelty⁺'s noise feedback.
    pub theta: f64,
    pub phi: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        NoiseSettings {
            p: 0.2,
            theta: 1.0 / 6.0,
            phi: 0.2,
        }
    }
}

/// Tabu-tenure overrides; `None` means "use the spec.md default formula".
#[derive(Copy, Clone, Debug, Default)]
pub struct TabuSettings {
    pub circular_tenure: Option<usize>,
}

#[derive(Copy, Clone, Debug)]
pub struct Settings {
    pub heuristic: Heuristic,
    pub noise: NoiseSettings,
    pub tabu: TabuSettings,
    pub seed: u64,
    /// `None` => spec.md default (`50`).
    pub max_tries: Option<u64>,
    /// `None` => spec.md default (`100·n`, or the per-variant override).
    pub max_flips: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            heuristic: Heuristic::WalkSat,
            noise: NoiseSettings::default(),
            tabu: TabuSettings::default(),
            seed: 0,
            max_tries: None,
            max_flips: None,
        }
    }
}

impl Settings {
    pub const DEFAULT_MAX_TRIES: u64 = 50;

    pub fn max_tries(&self) -> u64 {
        self.max_tries.unwrap_or(Self::DEFAULT_MAX_TRIES)
    }

    /// Base `MAX_FLIPS = 100·n`; AMLS overrides to `⌊n²/4⌋` in its own
    /// selector since that budget also gates its internal restart
    /// behaviour (spec.md §4.4).
    pub fn max_flips(&self, n_vars: usize) -> u64 {
        self.max_flips.unwrap_or_else(|| match self.heuristic {
            Heuristic::Amls => ((n_vars * n_vars) / 4) as u64,
            _ => 100 * n_vars as u64,
        })
    }
}
