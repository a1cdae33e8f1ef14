use alloc::string::ToString;
use alloc::vec::Vec;

use tracing::info;

use crate::error::{JoinError, QuitError};
use crate::options::MatchOptions;
use crate::player::{Player, PlayerId};
use crate::status::{MatchEvent, Status};
use crate::turn::Turn;

use super::{MAX_PLAYERS, Match, Table};

impl Table {
    fn join(
        &mut self,
        options: &MatchOptions,
        name: &str,
    ) -> Result<(Player, Status), JoinError> {
        if self.game_over {
            return Err(JoinError::MatchOver);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(JoinError::MatchFull);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(JoinError::EmptyName);
        }
        if name.chars().count() > options.max_name_len {
            return Err(JoinError::NameTooLong {
                max: options.max_name_len,
            });
        }

        let player = Player::new(self.next_id, name.to_string());
        self.next_id = self.next_id.wrapping_add(1);
        self.players.push(player.clone());
        info!(player = player.id, name = %player.name, "player joined");
        let mut events = alloc::vec![MatchEvent::PlayerJoined {
            player: player.id,
            name: player.name.clone(),
        }];

        if let [first, second] = self.players.as_slice() {
            let (first, second) = (first.id, second.id);
            self.active = Some(first);
            self.opponent = Some(second);
            self.turn = Some(Turn::new(first));
            self.bump();
            info!(first, "match started");
            events.push(MatchEvent::MatchStarted { first });
        }

        let status = self.snapshot(options, events);
        Ok((player, status))
    }

    fn quit(&mut self, options: &MatchOptions, id: PlayerId) -> Result<Status, QuitError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or(QuitError::PlayerNotFound(id))?;
        let player = self.players.remove(index);
        info!(player = id, name = %player.name, "player quit");

        let started = self.active.is_some();
        if self.active == Some(id) {
            self.active = None;
        }
        if self.opponent == Some(id) {
            self.opponent = None;
        }

        if !self.game_over {
            self.game_over = true;
            if started {
                self.winner = self.players.first().cloned();
            }
        }
        self.turn = None;

        self.bump();
        Ok(self.snapshot(
            options,
            alloc::vec![MatchEvent::PlayerQuit { player: id }],
        ))
    }

    fn reset(&mut self, options: &MatchOptions) -> Status {
        self.players.clear();
        self.next_id = 0;
        self.active = None;
        self.opponent = None;
        self.turn = None;
        self.game_over = false;
        self.winner = None;
        self.cup.unload();
        info!("match reset");

        self.bump();
        self.snapshot(options, alloc::vec![MatchEvent::Reset])
    }
}

impl Match {
    /// Seats a new player and returns them with a snapshot of the match.
    ///
    /// Player IDs are handed out from 0. When the second player joins, the
    /// first one becomes active and the match begins; the snapshot then
    /// carries [`MatchEvent::MatchStarted`] after [`MatchEvent::PlayerJoined`].
    ///
    /// # Errors
    ///
    /// Returns an error if two players are already seated, the match is
    /// over, or the name is empty or too long.
    pub fn join(&self, name: &str) -> Result<(Player, Status), JoinError> {
        self.table.with(|table| table.join(&self.options, name))
    }

    /// Removes a player. The match is over afterwards; if it had started,
    /// the remaining player wins by forfeit.
    ///
    /// # Errors
    ///
    /// Returns [`QuitError::PlayerNotFound`] if no such player is seated.
    pub fn quit(&self, player: PlayerId) -> Result<Status, QuitError> {
        self.table.with(|table| table.quit(&self.options, player))
    }

    /// Clears the roster, any game in progress and any loaded dice so a new
    /// match can start.
    ///
    /// The change version keeps counting up, so pollers see the reset as a
    /// change like any other.
    pub fn reset(&self) -> Status {
        self.table.with(|table| table.reset(&self.options))
    }

    /// Returns every seated player, in join order.
    pub fn players(&self) -> Vec<Player> {
        self.table.with(|table| table.players.clone())
    }
}
