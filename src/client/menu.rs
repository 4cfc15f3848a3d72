//! Interactive terminal menu
//!
//! Reads choices from any `BufRead` and writes to any `Write`, so the loop
//! can run against stdin/stdout or scripted input in tests. Every action is
//! a single call on [`PlayerApiClient`].

use std::io::{BufRead, Write};

use super::display::{render_player_line, render_table};
use super::http::PlayerApiClient;
use crate::storage::{NewPlayer, PlayerUpdate};
use crate::{PlayerId, Result};

const MENU: &str = "
MENU:
  1 - List players
  2 - Create player (name, age, team)
  3 - Update player
  4 - Delete player
  5 - List players by team
  0 - Exit
";

const UPDATE_MENU: &str = "What do you want to update?
  1 - Name
  2 - Age
  3 - Team";

pub struct Menu<R, W> {
    api: PlayerApiClient,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(api: PlayerApiClient, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user picks 0 or input ends
    pub async fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt_number("Your choice: ")? else {
                break;
            };

            let outcome = match choice {
                1 => self.list_players().await,
                2 => self.create_player().await,
                3 => self.update_player().await,
                4 => self.delete_player().await,
                5 => self.list_by_team().await,
                0 => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Invalid choice: {}", choice)?;
                    Ok(())
                }
            };

            if let Err(e) = outcome {
                writeln!(self.output, "ERROR calling the API: {}", e)?;
            }
        }
        Ok(())
    }

    async fn list_players(&mut self) -> Result<()> {
        writeln!(self.output, "All players:\n")?;
        let players = self.api.list_players().await?;
        if players.is_empty() {
            writeln!(self.output, "No players found.")?;
        } else {
            write!(self.output, "{}", render_table(&players))?;
        }
        Ok(())
    }

    async fn create_player(&mut self) -> Result<()> {
        writeln!(self.output, "Create a new player:\n")?;
        let Some(name) = self.prompt("Player name: ")? else {
            return Ok(());
        };
        let Some(age) = self.prompt_number("Player age: ")? else {
            return Ok(());
        };
        let Some(team) = self.prompt("Player team: ")? else {
            return Ok(());
        };

        let created = self
            .api
            .create_player(&NewPlayer::new(name, age, team))
            .await?;
        writeln!(
            self.output,
            "Player created: {} (id {})",
            created.name, created.id
        )?;
        Ok(())
    }

    async fn update_player(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number("ID of the player to update: ")? else {
            return Ok(());
        };
        let id = PlayerId::new(id);
        writeln!(self.output, "Updating player {}", id)?;
        writeln!(self.output, "{}", UPDATE_MENU)?;

        let update = match self.prompt_number("Field: ")? {
            None => return Ok(()),
            Some(1) => self.prompt("New name: ")?.map(PlayerUpdate::name),
            Some(2) => self.prompt_number("New age: ")?.map(PlayerUpdate::age),
            Some(3) => self.prompt("New team: ")?.map(PlayerUpdate::team),
            Some(other) => {
                writeln!(self.output, "Invalid field: {}", other)?;
                return Ok(());
            }
        };

        // A blank name or team means the user changed their mind
        let update = update.filter(|u| {
            !u.name.as_deref().is_some_and(str::is_empty)
                && !u.team.as_deref().is_some_and(str::is_empty)
        });
        let Some(update) = update else {
            writeln!(self.output, "Nothing to update.")?;
            return Ok(());
        };

        let updated = self.api.update_player(id, &update).await?;
        writeln!(
            self.output,
            "Player updated: {}",
            render_player_line(&updated)
        )?;
        Ok(())
    }

    async fn delete_player(&mut self) -> Result<()> {
        let Some(id) = self.prompt_number("ID of the player to delete: ")? else {
            return Ok(());
        };
        let confirmation = self.api.delete_player(PlayerId::new(id)).await?;
        writeln!(self.output, "{}", confirmation.message)?;
        Ok(())
    }

    async fn list_by_team(&mut self) -> Result<()> {
        let Some(team) = self.prompt("Team: ")? else {
            return Ok(());
        };
        writeln!(self.output, "Players on team {}:", team)?;

        match self.api.get_players_by_team(&team).await {
            Ok(players) => {
                for player in &players {
                    writeln!(self.output, "{}", render_player_line(player))?;
                }
            }
            Err(e) if e.is_not_found() => {
                writeln!(self.output, "No players for team {}", team)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt) but re-asks until the line is an integer
    fn prompt_number(&mut self, label: &str) -> Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }
}
