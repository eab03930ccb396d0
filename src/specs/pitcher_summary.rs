// src/specs/pitcher_summary.rs
// Aggregated pitcher scouting stats (pitcher_summary.csv).

pub static COLUMNS: &[(&str, &str)] = &[
    ("mlbam_id", "MLB Advanced Media player ID (unique identifier)"),
    ("player_name", "Pitcher's full name"),
    ("country", "ISO country code (e.g. USA, JPN, DOM)"),
    ("total_pitches", "Total pitches thrown (MLB regular season)"),
    ("PA_faced", "Total plate appearances faced"),
    ("K", "Strikeouts"),
    ("BB", "Walks allowed (base on balls)"),
    ("HR_allowed", "Home runs allowed"),
    ("H_allowed", "Hits allowed"),
    ("opp_AVG", "Opponent batting average (H / AB)"),
    ("opp_SLG", "Opponent slugging percentage (TB / AB)"),
    ("K_pct", "Strikeout rate as a percentage of PA faced"),
    ("BB_pct", "Walk rate as a percentage of PA faced"),
    ("xwOBA_against", "Expected wOBA against based on contact quality (lower = better for pitcher)"),
    ("avg_velo", "Average pitch velocity in mph"),
    ("avg_spin_rate", "Average spin rate in RPM"),
    ("pitch_type_count", "Number of distinct pitch types thrown"),
    ("primary_pitch", "Most frequently used pitch type code (FF, SL, CH, etc.)"),
];
