//! Text rendering of players for the terminal menu

use crate::storage::Player;

const HEADERS: [&str; 4] = ["id", "name", "age", "team"];

/// Render players as a right-aligned text table with a header row.
pub fn render_table(players: &[Player]) -> String {
    let rows: Vec<[String; 4]> = players
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.age.to_string(),
                p.team.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&line);
    out.push('\n');
}

/// One-line summary used for team listings
pub fn render_player_line(player: &Player) -> String {
    format!(
        "#{} {} ({}) - {}",
        player.id, player.name, player.age, player.team
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    fn player(id: i64, name: &str, age: i64, team: &str) -> Player {
        Player {
            id: PlayerId::new(id),
            name: name.to_string(),
            age,
            team: team.to_string(),
        }
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let table = render_table(&[
            player(1, "Ana", 22, "Falcons"),
            player(10, "Bernardo", 9, "Hawks"),
        ]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id     name age    team");
        assert_eq!(lines[1], " 1      Ana  22 Falcons");
        assert_eq!(lines[2], "10 Bernardo   9   Hawks");
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[]), "id name age team\n");
    }

    #[test]
    fn test_render_player_line() {
        assert_eq!(
            render_player_line(&player(3, "Caio", 27, "Falcons")),
            "#3 Caio (27) - Falcons"
        );
    }
}
