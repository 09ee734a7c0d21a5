//! Two independent player taxonomies.
//!
//! [`Archetype`] describes a scoring profile and is used by report cards
//! and listings. [`RoleArchetype`] describes a shot-mix role and only feeds
//! the chemistry model. Labels overlap ("Sharpshooter") but the rules do
//! not, so the two are never converted into each other.

use crate::model::StatLine;
use crate::rates::rates;
use crate::util::serialize_as_label;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Archetype {
    #[strum(serialize = "High Volume")]
    HighVolume,
    Sharpshooter,
    Physical,
    #[strum(serialize = "Inside Scorer")]
    InsideScorer,
    Balanced,
}

serialize_as_label!(Archetype);

/// First matching rule wins.
pub fn classify(ppg: f64, three_pt_pg: f64, two_pt_pg: f64, fouls_pg: f64) -> Archetype {
    if ppg >= 15.0 {
        Archetype::HighVolume
    } else if three_pt_pg >= 2.0 && three_pt_pg > two_pt_pg * 0.6 {
        Archetype::Sharpshooter
    } else if fouls_pg >= 3.0 || (fouls_pg >= 2.0 && ppg < 8.0) {
        Archetype::Physical
    } else if two_pt_pg >= 3.0 && two_pt_pg > three_pt_pg * 2.0 {
        Archetype::InsideScorer
    } else {
        Archetype::Balanced
    }
}

pub fn classify_line(line: &StatLine) -> Archetype {
    let r = rates(line);
    classify(r.ppg, r.three_pt_pg, r.two_pt_pg, r.fouls_pg)
}

/// Roles in rule order. The discriminant doubles as the synergy table index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
pub enum RoleArchetype {
    Sharpshooter,
    Scorer,
    #[strum(serialize = "Free-Throw Merchant")]
    FreeThrowMerchant,
    Enforcer,
    #[strum(serialize = "All-Rounder")]
    AllRounder,
    #[strum(serialize = "Role Player")]
    RolePlayer,
    #[strum(serialize = "Bench Contributor")]
    BenchContributor,
}

serialize_as_label!(RoleArchetype);

impl RoleArchetype {
    pub const COUNT: usize = 7;

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Shot-mix profile the role taxonomy is evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShotProfile {
    pub ppg: f64,
    pub one_share: f64,
    pub two_share: f64,
    pub three_share: f64,
    /// Fouls per game over the five-foul limit.
    pub foul_rate: f64,
}

impl ShotProfile {
    pub fn from_line(line: &StatLine) -> Self {
        let r = rates(line);
        let makes = line.made_baskets();
        let share = |n: i32| {
            if makes > 0 {
                f64::from(n) / f64::from(makes)
            } else {
                0.0
            }
        };
        Self {
            ppg: r.ppg,
            one_share: share(line.one_point),
            two_share: share(line.two_point),
            three_share: share(line.three_point),
            foul_rate: r.fouls_pg / 5.0,
        }
    }
}

pub fn classify_role(p: &ShotProfile) -> RoleArchetype {
    if p.three_share > 0.4 {
        RoleArchetype::Sharpshooter
    } else if p.two_share > 0.5 && p.ppg > 8.0 {
        RoleArchetype::Scorer
    } else if p.one_share > 0.4 {
        RoleArchetype::FreeThrowMerchant
    } else if p.foul_rate > 0.3 {
        RoleArchetype::Enforcer
    } else if p.ppg > 6.0 {
        RoleArchetype::AllRounder
    } else if p.ppg > 3.0 {
        RoleArchetype::RolePlayer
    } else {
        RoleArchetype::BenchContributor
    }
}
