use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use courtside::chemistry::TeamChemistry;
use courtside::percentile::PercentileDimension;
use courtside::rates::round1;
use courtside::scoring::draft::DraftRow;
use courtside::scoring::per::PerRow;
use courtside::scoring::power::PowerRow;
use courtside::scoring::report_card::{LetterGrade, ReportCard};
use courtside::scouting::ScoutingReport;
use courtside::similarity::SimilarityResult;
use courtside::trend::{TrendPoint, TrendSummary};

fn new_table(headers: Vec<Cell>, numeric_from: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    let width = headers.len();
    table.set_header(headers);
    for i in numeric_from..width {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

fn bold(s: &str) -> Cell {
    Cell::new(s).add_attribute(Attribute::Bold)
}

fn num(v: f64) -> Cell {
    Cell::new(format!("{:.1}", round1(v)))
}

fn grade_cell(grade: LetterGrade) -> Cell {
    let color = match grade {
        LetterGrade::APlus | LetterGrade::A => Color::Green,
        LetterGrade::BPlus | LetterGrade::B => Color::Cyan,
        LetterGrade::CPlus | LetterGrade::C => Color::Yellow,
        LetterGrade::D | LetterGrade::F => Color::Red,
    };
    Cell::new(grade.to_string()).fg(color).add_attribute(Attribute::Bold)
}

fn dimension_list(dims: &[PercentileDimension]) -> String {
    if dims.is_empty() {
        return "-".to_string();
    }
    dims.iter().map(|d| d.to_string()).collect::<Vec<_>>().join(", ")
}

pub fn print_per_table(rows: &[PerRow]) {
    let mut table = new_table(
        vec![
            bold("#"),
            bold("Player"),
            bold("Team"),
            bold("Grade"),
            Cell::new("GP"),
            Cell::new("PPG"),
            Cell::new("PER").fg(Color::Cyan),
            Cell::new("Pct"),
            Cell::new("Tier"),
            Cell::new("Grade #"),
        ],
        4,
    );
    for r in rows {
        table.add_row(vec![
            Cell::new(r.rank),
            bold(&r.player_name),
            Cell::new(&r.team_name),
            Cell::new(&r.grade_name),
            Cell::new(r.games_played),
            num(r.rates.ppg),
            num(r.per).fg(Color::Cyan),
            Cell::new(r.percentile),
            Cell::new(r.tier.to_string()).set_alignment(CellAlignment::Left),
            Cell::new(format!("{}/{}", r.grade_rank, r.grade_total)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_power_table(rows: &[PowerRow]) {
    let mut table = new_table(
        vec![
            bold("#"),
            bold("Team"),
            Cell::new("W-L"),
            Cell::new("Rating").fg(Color::Cyan),
            Cell::new("Win"),
            Cell::new("Diff"),
            Cell::new("Top 5"),
            Cell::new("Bench"),
            Cell::new("Avg +/-"),
            Cell::new("Roster"),
        ],
        2,
    );
    for r in rows {
        table.add_row(vec![
            Cell::new(r.rank),
            bold(&r.name),
            Cell::new(format!("{}-{}", r.wins, r.losses)),
            num(r.power_rating).fg(Color::Cyan),
            num(r.breakdown.win_pct),
            num(r.breakdown.point_diff),
            num(r.breakdown.top5_scoring),
            num(r.breakdown.bench_depth),
            num(r.avg_point_diff),
            Cell::new(r.roster_size),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_draft_table(rows: &[DraftRow]) {
    let mut table = new_table(
        vec![
            bold("#"),
            bold("Player"),
            bold("Team"),
            bold("Grade"),
            Cell::new("Score").fg(Color::Cyan),
            Cell::new("PER"),
            Cell::new("PPG"),
            Cell::new("GP"),
            Cell::new("Tier"),
        ],
        4,
    );
    for r in rows {
        table.add_row(vec![
            Cell::new(r.rank),
            bold(&r.player_name),
            Cell::new(&r.team_name),
            Cell::new(&r.grade_name),
            num(r.composite).fg(Color::Cyan),
            num(r.per),
            num(r.ppg),
            Cell::new(r.games_played),
            Cell::new(r.tier.to_string()).set_alignment(CellAlignment::Left),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_report_card(card: &ReportCard) {
    println!(
        "\n{} ({} games, {} points)  Archetype: {}",
        card.player_name, card.total_games, card.total_points, card.current_archetype
    );

    let mut table = new_table(vec![bold("Dimension"), Cell::new("Percentile")], 1);
    for e in &card.percentiles.entries {
        table.add_row(vec![Cell::new(e.dimension.to_string()), Cell::new(e.percentile)]);
    }
    table.add_row(vec![bold("Composite"), Cell::new(card.composite).add_attribute(Attribute::Bold)]);
    table.add_row(vec![bold("Grade"), grade_cell(card.grade)]);
    println!("{}", table);

    println!("Strengths:  {}", dimension_list(&card.strengths));
    println!("Weaknesses: {}", dimension_list(&card.weaknesses));
    println!("PPG growth: {:+.1}", card.ppg_growth);

    let mut seasons = new_table(
        vec![
            bold("Season"),
            bold("Archetype"),
            Cell::new("GP"),
            Cell::new("PPG"),
            Cell::new("2PT/G"),
            Cell::new("3PT/G"),
            Cell::new("F/G"),
            Cell::new("Avg"),
            Cell::new("Mark"),
        ],
        2,
    );
    for ((p, a), t) in card
        .progression
        .iter()
        .zip(&card.archetype_history)
        .zip(&card.ppg_trend)
    {
        seasons.add_row(vec![
            Cell::new(&p.label),
            Cell::new(a.archetype.to_string()),
            Cell::new(p.games_played),
            num(p.rates.ppg),
            num(p.rates.two_pt_pg),
            num(p.rates.three_pt_pg),
            num(p.rates.fouls_pg),
            num(t.moving_avg),
            mark_cell(t),
        ]);
    }
    println!("{}", seasons);
}

pub fn print_scouting_report(report: &ScoutingReport) {
    println!(
        "\nScouting: {} ({}, {} games)",
        report.player_name, report.team_name, report.games_played
    );
    let mut table = new_table(vec![bold("Dimension"), Cell::new("Percentile")], 1);
    for e in &report.percentiles.entries {
        table.add_row(vec![Cell::new(e.dimension.to_string()), Cell::new(e.percentile)]);
    }
    table.add_row(vec![bold("Mean"), num(report.mean_percentile)]);
    table.add_row(vec![bold("Grade"), grade_cell(report.grade)]);
    println!("{}", table);

    println!("Strengths:  {}", dimension_list(&report.strengths));
    println!("Weaknesses: {}", dimension_list(&report.weaknesses));

    if !report.comparables.is_empty() {
        println!("\nComparable players:");
        print_similarity_rows(&report.comparables);
    }
}

fn print_similarity_rows(results: &[SimilarityResult]) {
    let mut table = new_table(
        vec![
            bold("Player"),
            bold("Team"),
            Cell::new("GP"),
            Cell::new("PPG"),
            Cell::new("2PT/G"),
            Cell::new("3PT/G"),
            Cell::new("F/G"),
            Cell::new("Match").fg(Color::Cyan),
        ],
        2,
    );
    for r in results {
        table.add_row(vec![
            bold(&r.player_name),
            Cell::new(&r.team_name),
            Cell::new(r.games_played),
            num(r.rates.ppg),
            num(r.rates.two_pt_pg),
            num(r.rates.three_pt_pg),
            num(r.rates.fouls_pg),
            Cell::new(format!("{:.0}%", r.score)).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn print_similarity_table(player_id: &str, results: &[SimilarityResult]) {
    println!("\nPlayers most similar to '{}':", player_id);
    print_similarity_rows(results);
}

pub fn print_chemistry(chem: &TeamChemistry, pair_limit: usize) {
    println!(
        "\nChemistry score: {:.0} / 100 ({} players)",
        chem.score,
        chem.members.len()
    );

    let mut roster = new_table(vec![bold("Player"), bold("Role"), Cell::new("GP"), Cell::new("PPG")], 2);
    for m in &chem.members {
        roster.add_row(vec![
            bold(&m.player_name),
            Cell::new(m.role.to_string()),
            Cell::new(m.games_played),
            num(m.ppg),
        ]);
    }
    println!("{}", roster);

    let breakdown: Vec<String> = chem
        .breakdown
        .iter()
        .map(|c| format!("{} x{}", c.archetype, c.count))
        .collect();
    println!("Roles: {}", breakdown.join(", "));

    let mut pairs = new_table(vec![bold("Pair"), bold("Why"), Cell::new("Score")], 2);
    for p in chem.pairs.iter().take(pair_limit) {
        pairs.add_row(vec![
            Cell::new(format!("{} / {}", p.player1_name, p.player2_name)),
            Cell::new(&p.reason),
            Cell::new(format!("{:.2}", p.score)),
        ]);
    }
    println!("{}", pairs);

    let names: Vec<&str> = chem.best_lineup.iter().map(|m| m.player_name.as_str()).collect();
    println!(
        "Best lineup ({}): {}",
        chem.lineup_strategy,
        names.join(", ")
    );
}

fn mark_cell(t: &TrendPoint) -> Cell {
    if t.is_peak {
        Cell::new("peak").fg(Color::Green)
    } else if t.is_valley {
        Cell::new("valley").fg(Color::Red)
    } else {
        Cell::new("")
    }
}

pub fn print_trend(summary: &TrendSummary) {
    let mut table = new_table(vec![bold("#"), Cell::new("PPG"), Cell::new("Avg"), Cell::new("Mark")], 1);
    for (i, t) in summary.points.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), num(t.value), num(t.moving_avg), mark_cell(t)]);
    }
    println!("\n{}", table);
    if summary.insufficient {
        println!("Not enough entries to mark peaks or valleys.");
    } else {
        println!("Growth since previous entry: {:+.1}", summary.growth);
    }
}
