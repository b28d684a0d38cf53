//! Built-in demo roster.

use matchday_foundation::{Jersey, Result, Roster};

type Squad = (&'static str, &'static str, &'static [(Jersey, &'static str)]);

const SQUADS: &[Squad] = &[
    (
        "BAR",
        "Barcelona",
        &[
            (1, "Ter Stegen"),
            (3, "Koundé"),
            (5, "Íñigo"),
            (7, "Ferran Torres"),
            (9, "Lewandowski"),
            (10, "Lamine Yamal"),
            (11, "Raphinha"),
            (12, "Cancelo"),
            (15, "Christensen"),
            (17, "Gündogan"),
            (20, "Félix"),
            (13, "Iñaki Peña"),
            (14, "Joao Cancelo"),
            (16, "Fermín"),
            (18, "Pedri"),
        ],
    ),
    (
        "RMA",
        "Real Madrid",
        &[
            (1, "Courtois"),
            (2, "Carvajal"),
            (3, "Militão"),
            (4, "Alaba"),
            (5, "Bellingham"),
            (6, "Camavinga"),
            (7, "Vinícius"),
            (8, "Kroos"),
            (9, "Rodrygo"),
            (10, "Modrić"),
            (11, "Valverde"),
            (12, "Lunin"),
            (13, "Kepa"),
            (14, "Mendy"),
            (15, "Tchouaméni"),
        ],
    ),
    (
        "LIV",
        "Liverpool",
        &[
            (1, "Alisson"),
            (2, "Trent A-A"),
            (3, "Robertson"),
            (4, "Van Dijk"),
            (5, "Konaté"),
            (6, "Szoboszlai"),
            (7, "Luis Díaz"),
            (8, "Mac Allister"),
            (9, "Darwin Núñez"),
            (10, "Salah"),
            (11, "Gakpo"),
        ],
    ),
    (
        "MCI",
        "Manchester City",
        &[
            (1, "Ederson"),
            (2, "Walker"),
            (3, "Akanji"),
            (4, "Dias"),
            (5, "Gvardiol"),
            (6, "Rodri"),
            (7, "Foden"),
            (8, "Kovacic"),
            (9, "Haaland"),
            (10, "Bernardo"),
            (11, "Doku"),
        ],
    ),
];

/// Builds the four-team roster the CLI loads reports against.
///
/// # Errors
/// Only fails if the built-in squads are inconsistent.
pub fn demo_roster() -> Result<Roster> {
    let mut roster = Roster::new();
    for &(code, name, players) in SQUADS {
        let team = roster.add_team(name, code)?;
        for &(number, player) in players {
            team.add_player(number, player)?;
        }
    }
    Ok(roster)
}
