// src/specs/batter_summary.rs
// Aggregated batter scouting stats (batter_summary.csv).

pub static COLUMNS: &[(&str, &str)] = &[
    ("mlbam_id", "MLB Advanced Media player ID (unique identifier)"),
    ("player_name", "Player's full name"),
    ("country", "ISO country code (e.g. USA, JPN, DOM)"),
    ("PA", "Plate appearances"),
    ("AB", "At-bats"),
    ("H", "Hits"),
    ("1B", "Singles"),
    ("2B", "Doubles"),
    ("3B", "Triples"),
    ("HR", "Home runs"),
    ("BB", "Walks (base on balls)"),
    ("HBP", "Hit by pitch"),
    ("K", "Strikeouts"),
    ("TB", "Total bases"),
    ("AVG", "Batting average (H / AB)"),
    ("OBP", "On-base percentage ((H + BB + HBP) / PA)"),
    ("SLG", "Slugging percentage (TB / AB)"),
    ("OPS", "On-base plus slugging (OBP + SLG)"),
    ("K_pct", "Strikeout rate as a percentage of PA"),
    ("BB_pct", "Walk rate as a percentage of PA"),
    ("xwOBA", "Expected weighted on-base average based on launch speed and angle (Statcast)"),
    ("avg_exit_velo", "Average exit velocity on batted balls in mph"),
    ("avg_launch_angle", "Average launch angle on batted balls in degrees"),
];
