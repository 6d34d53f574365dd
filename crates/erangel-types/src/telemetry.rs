use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{entities::Location, events::Event};

/// Marker for team and ranking values that have not been observed.
pub const UNSET: i32 = -1;

/// Per-player view reconstructed from the event stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub account_id: String,
    pub team_id: i32,
    pub ranking: i32,
    /// Positions into [`Telemetry::events`], in wire order.
    pub history: Vec<usize>,
    /// Actor location at each entry of `history`.
    pub locations: Vec<Location>,
}

impl Player {
    pub fn new(name: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            account_id: account_id.into(),
            team_id: UNSET,
            ranking: UNSET,
            history: Vec::new(),
            locations: Vec::new(),
        }
    }

    pub fn has_team(&self) -> bool {
        self.team_id != UNSET
    }

    pub fn is_ranked(&self) -> bool {
        self.ranking != UNSET
    }
}

/// Aggregated view of one telemetry file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Telemetry {
    pub events: Vec<Event>,
    /// Keyed by account id.
    pub players: HashMap<String, Player>,
    pub match_started: bool,
    pub ping_quality: String,
    pub match_id: String,
}

impl Telemetry {
    pub fn player(&self, account_id: &str) -> Option<&Player> {
        self.players.get(account_id)
    }

    /// Events attributed to `player`, in wire order.
    pub fn player_events<'a>(&'a self, player: &'a Player) -> impl Iterator<Item = &'a Event> + 'a {
        player
            .history
            .iter()
            .filter_map(move |&idx| self.events.get(idx))
    }

    /// Players ranked first, ordered by name.
    pub fn winners(&self) -> Vec<&Player> {
        let mut winners: Vec<&Player> = self
            .players
            .values()
            .filter(|player| player.ranking == 1)
            .collect();
        winners.sort_by(|a, b| a.name.cmp(&b.name).then(a.account_id.cmp(&b.account_id)));
        winners
    }

    /// Players grouped by observed team; players without a team are skipped.
    pub fn teams(&self) -> BTreeMap<i32, Vec<&Player>> {
        let mut teams: BTreeMap<i32, Vec<&Player>> = BTreeMap::new();
        for player in self.players.values().filter(|player| player.has_team()) {
            teams.entry(player.team_id).or_default().push(player);
        }
        for members in teams.values_mut() {
            members.sort_by(|a, b| a.name.cmp(&b.name));
        }
        teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventPayload, Roster};

    fn player(name: &str, account_id: &str, team_id: i32, ranking: i32) -> Player {
        Player {
            team_id,
            ranking,
            ..Player::new(name, account_id)
        }
    }

    #[test]
    fn new_player_starts_unset() {
        let p = Player::new("A", "acc1");
        assert_eq!(p.team_id, UNSET);
        assert_eq!(p.ranking, UNSET);
        assert!(!p.has_team());
        assert!(!p.is_ranked());
        assert!(p.history.is_empty());
    }

    #[test]
    fn winners_and_teams() {
        let mut telemetry = Telemetry::default();
        for p in [
            player("Zed", "acc3", 1, 1),
            player("Amy", "acc1", 1, 1),
            player("Bob", "acc2", 2, 5),
            player("Ghost", "acc4", UNSET, UNSET),
        ] {
            telemetry.players.insert(p.account_id.clone(), p);
        }

        let winners: Vec<&str> = telemetry.winners().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(winners, vec!["Amy", "Zed"]);

        let teams = telemetry.teams();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[&1].len(), 2);
        assert_eq!(teams[&2][0].name, "Bob");
    }

    #[test]
    fn player_events_follow_history() {
        let mut telemetry = Telemetry::default();
        telemetry.events = vec![
            Event::new(1, None, EventPayload::MatchStart(Roster::default())),
            Event::new(1, None, EventPayload::MatchEnd(Roster::default())),
        ];
        let mut p = Player::new("A", "acc1");
        p.history = vec![1, 0];
        let kinds: Vec<_> = telemetry.player_events(&p).map(Event::kind).collect();
        assert_eq!(
            kinds,
            vec![
                crate::events::EventKind::MatchEnd,
                crate::events::EventKind::MatchStart
            ]
        );
    }
}
