//! Left fold of decoded events into a [`Telemetry`].

use std::collections::HashMap;

use erangel_types::{
    entities::Character,
    events::{Event, EventPayload},
    telemetry::{Player, Telemetry},
    vocabulary::Vocabulary,
};
use tracing::{debug, info};

/// Fold state threaded through the event sequence.
///
/// Once `match_started` latches, every later attribution lands in the player's
/// history; before that, handlers may still register players and teams.
#[derive(Debug, Default)]
pub struct Aggregator {
    players: HashMap<String, Player>,
    match_started: bool,
    ping_quality: String,
    match_id: String,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the event at position `index` of the sequence.
    pub fn process(&mut self, index: usize, event: &Event) {
        debug!(index, kind = event.kind().as_str(), "processing event");

        if let Some(character) = event.character() {
            self.attribute(index, character);
        }

        match &event.payload {
            EventPayload::MatchDefinition(definition) => {
                self.ping_quality = definition.ping_quality.clone();
                self.match_id = definition.match_id.clone();
            }
            EventPayload::MatchStart(_) => {
                self.match_started = true;
            }
            EventPayload::MatchEnd(roster) => {
                for character in &roster.characters {
                    if let Some(player) = self.player_mut(character) {
                        player.ranking = character.ranking;
                    }
                }
            }
            EventPayload::PlayerCreate => {
                if let Some(character) = event.character() {
                    if let Some(player) = self.player_mut(character) {
                        player.team_id = character.team_id;
                    }
                }
            }
            EventPayload::PlayerAttack(body) => {
                self.attribute(index, &body.attacker);
            }
            EventPayload::PlayerTakeDamage(body) => {
                self.attribute(index, &body.attacker);
                self.attribute(index, &body.victim);
            }
            EventPayload::VehicleDestroy(body) => {
                self.attribute(index, &body.attacker);
            }
            EventPayload::PlayerLogin(_)
            | EventPayload::PlayerLogout(_)
            | EventPayload::PlayerPosition(_)
            | EventPayload::PlayerKill(_)
            | EventPayload::ItemPickup(_)
            | EventPayload::ItemDrop(_)
            | EventPayload::ItemEquip(_)
            | EventPayload::ItemUnequip(_)
            | EventPayload::ItemAttach(_)
            | EventPayload::ItemDetach(_)
            | EventPayload::ItemUse(_)
            | EventPayload::VehicleRide(_)
            | EventPayload::VehicleLeave(_)
            | EventPayload::GameStatePeriodic(_)
            | EventPayload::CarePackageSpawn(_)
            | EventPayload::CarePackageLand(_) => {}
        }
    }

    pub fn match_started(&self) -> bool {
        self.match_started
    }

    /// Hand the accumulated state over together with the events it indexes.
    pub fn finish(self, events: Vec<Event>) -> Telemetry {
        info!(
            events = events.len(),
            players = self.players.len(),
            match_id = %self.match_id,
            match_started = self.match_started,
            "telemetry aggregated"
        );
        Telemetry {
            events,
            players: self.players,
            match_started: self.match_started,
            ping_quality: self.ping_quality,
            match_id: self.match_id,
        }
    }

    /// Lookup-or-insert by account id. Unnamed characters never get a player.
    fn player_mut(&mut self, character: &Character) -> Option<&mut Player> {
        if !character.is_named() {
            return None;
        }
        let player = self
            .players
            .entry(character.account_id.clone())
            .or_insert_with(|| Player::new(character.name.as_str(), character.account_id.as_str()));
        Some(player)
    }

    fn attribute(&mut self, index: usize, character: &Character) {
        let started = self.match_started;
        if let Some(player) = self.player_mut(character) {
            if started {
                player.history.push(index);
                player.locations.push(character.location);
            }
        }
    }
}

/// Fold `events` left to right into a fresh [`Telemetry`].
pub fn aggregate(events: Vec<Event>) -> Telemetry {
    let aggregator = events
        .iter()
        .enumerate()
        .fold(Aggregator::new(), |mut acc, (index, event)| {
            acc.process(index, event);
            acc
        });
    aggregator.finish(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use erangel_types::{
        entities::Location,
        events::{
            Attack, EventKind, Kill, MatchDefinition, Position, Roster, TakeDamage,
            VehicleDestruction,
        },
        telemetry::UNSET,
    };

    fn named(name: &str, account_id: &str) -> Character {
        Character {
            name: name.into(),
            account_id: account_id.into(),
            ..Default::default()
        }
    }

    fn at(mut character: Character, x: f64) -> Character {
        character.location = Location::new(x, 0.0, 0.0);
        character
    }

    fn event(payload: EventPayload) -> Event {
        Event::new(1, None, payload)
    }

    fn start() -> Event {
        event(EventPayload::MatchStart(Roster::default()))
    }

    fn position(character: Character) -> Event {
        event(EventPayload::PlayerPosition(Position::default())).with_character(character)
    }

    fn create(character: Character) -> Event {
        event(EventPayload::PlayerCreate).with_character(character)
    }

    fn end(characters: Vec<Character>) -> Event {
        event(EventPayload::MatchEnd(Roster { characters }))
    }

    #[test]
    fn empty_sequence_yields_empty_telemetry() {
        let telemetry = aggregate(Vec::new());
        assert!(telemetry.events.is_empty());
        assert!(telemetry.players.is_empty());
        assert!(!telemetry.match_started);
        assert!(telemetry.match_id.is_empty());
    }

    #[test]
    fn events_before_start_are_not_attributed() {
        let a = named("A", "acc1");
        let telemetry = aggregate(vec![
            position(at(a.clone(), 1.0)),
            start(),
            position(at(a.clone(), 2.0)),
        ]);
        let player = telemetry.player("acc1").expect("player registered before start");
        assert_eq!(player.history, vec![2]);
        assert_eq!(player.locations, vec![Location::new(2.0, 0.0, 0.0)]);
        assert!(telemetry.match_started);
    }

    #[test]
    fn create_registers_team_regardless_of_phase() {
        let mut a = named("A", "acc1");
        a.team_id = 7;
        let telemetry = aggregate(vec![create(a)]);
        let player = telemetry.player("acc1").unwrap();
        assert_eq!(player.team_id, 7);
        assert_eq!(player.ranking, UNSET);
        assert!(player.history.is_empty());
        assert!(!telemetry.match_started);
    }

    #[test]
    fn unnamed_characters_never_create_players() {
        let ghost = Character {
            account_id: "acc-ghost".into(),
            ranking: 3,
            team_id: 4,
            ..Default::default()
        };
        let telemetry = aggregate(vec![
            start(),
            create(ghost.clone()),
            position(ghost.clone()),
            end(vec![ghost]),
        ]);
        assert!(telemetry.players.is_empty());
    }

    #[test]
    fn take_damage_is_attributed_to_both_parties() {
        let telemetry = aggregate(vec![
            start(),
            event(EventPayload::PlayerTakeDamage(TakeDamage {
                attacker: at(named("A", "acc1"), 10.0),
                victim: at(named("B", "acc2"), 20.0),
                damage: 12.0,
                ..Default::default()
            })),
        ]);
        let attacker = telemetry.player("acc1").unwrap();
        let victim = telemetry.player("acc2").unwrap();
        assert_eq!(attacker.history, vec![1]);
        assert_eq!(victim.history, vec![1]);
        assert_eq!(attacker.locations[0].x, 10.0);
        assert_eq!(victim.locations[0].x, 20.0);
    }

    #[test]
    fn take_damage_from_environment_only_hits_victim() {
        let telemetry = aggregate(vec![
            start(),
            event(EventPayload::PlayerTakeDamage(TakeDamage {
                victim: named("B", "acc2"),
                ..Default::default()
            })),
        ]);
        assert_eq!(telemetry.players.len(), 1);
        assert_eq!(telemetry.player("acc2").unwrap().history, vec![1]);
    }

    #[test]
    fn attack_and_vehicle_destroy_follow_attacker() {
        let a = named("A", "acc1");
        let telemetry = aggregate(vec![
            event(EventPayload::PlayerAttack(Attack {
                attacker: a.clone(),
                ..Default::default()
            })),
            start(),
            event(EventPayload::PlayerAttack(Attack {
                attacker: a.clone(),
                ..Default::default()
            })),
            event(EventPayload::VehicleDestroy(VehicleDestruction {
                attacker: a,
                ..Default::default()
            })),
        ]);
        let player = telemetry.player("acc1").unwrap();
        assert_eq!(player.history, vec![2, 3]);
        let kinds: Vec<_> = telemetry.player_events(player).map(Event::kind).collect();
        assert_eq!(kinds, vec![EventKind::PlayerAttack, EventKind::VehicleDestroy]);
    }

    #[test]
    fn character_is_attributed_alongside_attacker_and_victim() {
        let c = named("C", "acc3");
        let a = named("A", "acc1");
        let b = named("B", "acc2");
        let telemetry = aggregate(vec![
            start(),
            event(EventPayload::PlayerAttack(Attack {
                attacker: a.clone(),
                ..Default::default()
            }))
            .with_character(c.clone()),
            event(EventPayload::PlayerTakeDamage(TakeDamage {
                attacker: a,
                victim: b,
                ..Default::default()
            }))
            .with_character(c),
        ]);
        assert_eq!(telemetry.player("acc3").unwrap().history, vec![1, 2]);
        assert_eq!(telemetry.player("acc1").unwrap().history, vec![1, 2]);
        assert_eq!(telemetry.player("acc2").unwrap().history, vec![2]);
    }

    #[test]
    fn character_matching_attacker_is_attributed_twice() {
        let a = named("A", "acc1");
        let telemetry = aggregate(vec![
            start(),
            event(EventPayload::PlayerAttack(Attack {
                attacker: a.clone(),
                ..Default::default()
            }))
            .with_character(a.clone()),
            event(EventPayload::VehicleDestroy(VehicleDestruction {
                attacker: a.clone(),
                ..Default::default()
            }))
            .with_character(a),
        ]);
        let player = telemetry.player("acc1").unwrap();
        assert_eq!(player.history, vec![1, 1, 2, 2]);
        assert_eq!(player.locations.len(), 4);
    }

    #[test]
    fn character_on_kill_is_attributed() {
        let telemetry = aggregate(vec![
            start(),
            event(EventPayload::PlayerKill(Kill {
                killer: named("A", "acc1"),
                victim: named("B", "acc2"),
                ..Default::default()
            }))
            .with_character(named("C", "acc3")),
        ]);
        assert_eq!(telemetry.player("acc3").unwrap().history, vec![1]);
        // kills carry no killer or victim attribution of their own
        assert!(telemetry.player("acc1").is_none());
        assert!(telemetry.player("acc2").is_none());
    }

    #[test]
    fn histories_preserve_wire_order_per_player() {
        let a = named("A", "acc1");
        let b = named("B", "acc2");
        let telemetry = aggregate(vec![
            start(),
            position(a.clone()),
            position(b.clone()),
            position(a.clone()),
            position(b),
            position(a),
        ]);
        assert_eq!(telemetry.player("acc1").unwrap().history, vec![1, 3, 5]);
        assert_eq!(telemetry.player("acc2").unwrap().history, vec![2, 4]);
    }

    #[test]
    fn match_end_sets_ranking_and_definition_last_wins() {
        let mut a = named("A", "acc1");
        a.ranking = 1;
        let mut b = named("B", "acc2");
        b.ranking = 2;
        let telemetry = aggregate(vec![
            event(EventPayload::MatchDefinition(MatchDefinition {
                match_id: "first".into(),
                ping_quality: "high".into(),
            })),
            start(),
            create(named("C", "acc3")),
            end(vec![a, b]),
            event(EventPayload::MatchDefinition(MatchDefinition {
                match_id: "second".into(),
                ping_quality: "low".into(),
            })),
        ]);
        assert_eq!(telemetry.player("acc1").unwrap().ranking, 1);
        assert_eq!(telemetry.player("acc2").unwrap().ranking, 2);
        assert_eq!(telemetry.player("acc3").unwrap().ranking, UNSET);
        assert_eq!(telemetry.player("acc1").unwrap().team_id, UNSET);
        assert_eq!(telemetry.match_id, "second");
        assert_eq!(telemetry.ping_quality, "low");
    }

    #[test]
    fn start_latch_never_reverts() {
        let mut aggregator = Aggregator::new();
        assert!(!aggregator.match_started());
        aggregator.process(0, &start());
        aggregator.process(1, &end(Vec::new()));
        aggregator.process(2, &position(named("A", "acc1")));
        assert!(aggregator.match_started());
    }

    #[test]
    fn player_keeps_first_observed_name() {
        let telemetry = aggregate(vec![
            start(),
            position(named("Original", "acc1")),
            position(named("Renamed", "acc1")),
        ]);
        let player = telemetry.player("acc1").unwrap();
        assert_eq!(player.name, "Original");
        assert_eq!(player.history.len(), 2);
    }
}
