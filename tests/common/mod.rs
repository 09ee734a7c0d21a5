#![allow(dead_code)]

use courtside::model::{StatLine, TeamLine};

/// Fluent builder for stat lines in tests.
#[derive(Clone)]
pub struct LineBuilder {
    line: StatLine,
}

impl LineBuilder {
    pub fn new(player_id: &str) -> Self {
        Self {
            line: StatLine {
                player_id: player_id.to_string(),
                player_name: format!("Player {}", player_id),
                team_id: "t1".to_string(),
                team_name: "Team One".to_string(),
                season_id: "s1".to_string(),
                season_name: "Summer 2024".to_string(),
                grade_id: "g1".to_string(),
                grade_name: "U16 Boys".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn team(mut self, team_id: &str) -> Self {
        self.line.team_id = team_id.to_string();
        self.line.team_name = format!("Team {}", team_id);
        self
    }

    pub fn season(mut self, season_id: &str) -> Self {
        self.line.season_id = season_id.to_string();
        self.line.season_name = format!("Season {}", season_id);
        self
    }

    pub fn grade(mut self, grade_id: &str) -> Self {
        self.line.grade_id = grade_id.to_string();
        self.line.grade_name = format!("Grade {}", grade_id);
        self
    }

    pub fn games(mut self, gp: i32) -> Self {
        self.line.games_played = gp;
        self
    }

    /// Sets the make counts and derives total points from them.
    pub fn makes(mut self, one: i32, two: i32, three: i32) -> Self {
        self.line.one_point = one;
        self.line.two_point = two;
        self.line.three_point = three;
        self.line.total_points = one + 2 * two + 3 * three;
        self
    }

    pub fn points(mut self, total: i32) -> Self {
        self.line.total_points = total;
        self
    }

    pub fn fouls(mut self, fouls: i32) -> Self {
        self.line.total_fouls = fouls;
        self
    }

    pub fn build(self) -> StatLine {
        self.line
    }
}

/// A line with `gp` games and `ppg` points per game, no makes or fouls.
pub fn scorer(id: &str, gp: i32, ppg: i32) -> StatLine {
    LineBuilder::new(id).games(gp).points(gp * ppg).build()
}

pub fn team(id: &str, wins: i32, losses: i32, pf: i32, pa: i32) -> TeamLine {
    TeamLine {
        team_id: id.to_string(),
        name: format!("Team {}", id),
        season_id: "s1".to_string(),
        wins,
        losses,
        games_played: wins + losses,
        points_for: pf,
        points_against: pa,
    }
}

pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}
