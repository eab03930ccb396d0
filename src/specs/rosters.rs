// src/specs/rosters.rs
// WBC 2026 roster columns (rosters.csv).

pub static COLUMNS: &[(&str, &str)] = &[
    ("name", "Player's full name in English"),
    ("country", "ISO country code (e.g. USA, JPN, DOM, VEN)"),
    ("pool", "WBC 2026 pool assignment (e.g. A (San Juan), B (Houston))"),
    ("position", "Fielding position or pitching hand (C, 1B, 2B, 3B, SS, LF, CF, RF, DH, UTL, RHP, LHP)"),
    ("team", "MLB team affiliation at time of roster announcement"),
    ("on_40_man", "Whether the player is on the 40-man MLB roster (true/false)"),
    ("role", "Player role: batter or pitcher"),
];
