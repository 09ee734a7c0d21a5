/// Minimum games played before a player receives a PER.
pub const PER_MIN_GAMES: i32 = 5;

/// Minimum games played before a team is eligible for power rankings.
pub const POWER_MIN_GAMES: i32 = 3;

/// The cohort mean every PER pass is rescaled to.
pub const PER_LEAGUE_AVERAGE: f64 = 15.0;

/// Percentile at or above which a dimension counts as a strength.
pub const STRENGTH_PERCENTILE: u8 = 75;

/// Percentile at or below which a dimension counts as a weakness.
pub const WEAKNESS_PERCENTILE: u8 = 25;

/// Number of players in a suggested lineup.
pub const LINEUP_SIZE: usize = 5;

/// Number of leading scorers averaged for the power rating "top 5" component.
pub const POWER_TOP_SCORERS: usize = 5;

/// Moving average window used by the trend detector.
pub const TREND_WINDOW: usize = 3;

/// Allowed drift of a weight profile's sum away from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Standard deviations below this are treated as zero.
pub const STDEV_EPSILON: f64 = 1e-9;

/// Largest roster the lineup search may be configured to walk exhaustively.
pub const MAX_EXHAUSTIVE_ROSTER: usize = 30;
