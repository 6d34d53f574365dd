//! Human-readable digest of an aggregated match.

use std::fmt;

use chrono::{DateTime, Utc};
use erangel_types::{
    entities::Location,
    events::EventKind,
    telemetry::{Player, Telemetry},
    vocabulary::Vocabulary,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub timestamp: Option<DateTime<Utc>>,
    pub kind: EventKind,
    pub location: Location,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinnerSummary {
    pub name: String,
    pub account_id: String,
    pub team_id: i32,
    pub timeline: Vec<TimelineEntry>,
    /// Entries left out because of the timeline limit.
    pub omitted: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    pub match_id: String,
    pub ping_quality: String,
    pub match_started: bool,
    pub event_count: usize,
    pub player_count: usize,
    pub team_count: usize,
    pub winners: Vec<WinnerSummary>,
}

impl MatchSummary {
    pub fn from_telemetry(telemetry: &Telemetry, timeline_limit: usize) -> Self {
        let winners = telemetry
            .winners()
            .into_iter()
            .map(|player| winner_summary(telemetry, player, timeline_limit))
            .collect();

        Self {
            match_id: telemetry.match_id.clone(),
            ping_quality: telemetry.ping_quality.clone(),
            match_started: telemetry.match_started,
            event_count: telemetry.events.len(),
            player_count: telemetry.players.len(),
            team_count: telemetry.teams().len(),
            winners,
        }
    }
}

fn winner_summary(telemetry: &Telemetry, player: &Player, timeline_limit: usize) -> WinnerSummary {
    let timeline: Vec<TimelineEntry> = telemetry
        .player_events(player)
        .zip(player.locations.iter())
        .take(timeline_limit)
        .map(|(event, location)| TimelineEntry {
            timestamp: event.timestamp,
            kind: event.kind(),
            location: *location,
        })
        .collect();
    let omitted = player.history.len().saturating_sub(timeline.len());

    WinnerSummary {
        name: player.name.clone(),
        account_id: player.account_id.clone(),
        team_id: player.team_id,
        timeline,
        omitted,
    }
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} events parsed", self.event_count)?;
        writeln!(f, "{} players in {} teams", self.player_count, self.team_count)?;
        if !self.match_id.is_empty() {
            writeln!(f, "match {} (ping quality: {})", self.match_id, self.ping_quality)?;
        }
        if !self.match_started {
            writeln!(f, "match never started")?;
        }
        if self.winners.is_empty() {
            return writeln!(f, "no winner recorded");
        }
        for winner in &self.winners {
            writeln!(
                f,
                "winner: {} ({}, team {})",
                winner.name, winner.account_id, winner.team_id
            )?;
            for entry in &winner.timeline {
                let at = entry
                    .timestamp
                    .map(|ts| ts.format("%H:%M:%S%.3f").to_string())
                    .unwrap_or_else(|| "--:--:--".into());
                writeln!(f, "  {at}  {}", entry.kind.as_str())?;
            }
            if winner.omitted > 0 {
                writeln!(f, "  ... {} more", winner.omitted)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erangel_types::{
        entities::Character,
        events::{Event, EventPayload, Position, Roster},
    };

    use crate::aggregator::aggregate;

    fn winner_match(positions: usize) -> Telemetry {
        let mut a = Character {
            name: "A".into(),
            account_id: "acc1".into(),
            team_id: 2,
            ..Default::default()
        };
        let mut events = vec![
            Event::new(1, None, EventPayload::MatchStart(Roster::default())),
            Event::new(1, None, EventPayload::PlayerCreate).with_character(a.clone()),
        ];
        for _ in 0..positions {
            events.push(
                Event::new(1, None, EventPayload::PlayerPosition(Position::default()))
                    .with_character(a.clone()),
            );
        }
        a.ranking = 1;
        events.push(Event::new(
            1,
            None,
            EventPayload::MatchEnd(Roster {
                characters: vec![a],
            }),
        ));
        aggregate(events)
    }

    #[test]
    fn summary_counts_and_winner_timeline() {
        let telemetry = winner_match(3);
        let summary = MatchSummary::from_telemetry(&telemetry, 10);
        assert_eq!(summary.event_count, 6);
        assert_eq!(summary.player_count, 1);
        assert_eq!(summary.team_count, 1);
        assert_eq!(summary.winners.len(), 1);
        let winner = &summary.winners[0];
        assert_eq!(winner.timeline.len(), 4);
        assert_eq!(winner.timeline[0].kind, EventKind::PlayerCreate);
        assert_eq!(winner.omitted, 0);
    }

    #[test]
    fn timeline_limit_truncates() {
        let telemetry = winner_match(5);
        let summary = MatchSummary::from_telemetry(&telemetry, 2);
        let winner = &summary.winners[0];
        assert_eq!(winner.timeline.len(), 2);
        assert_eq!(winner.omitted, 4);
        let text = summary.to_string();
        assert!(text.contains("winner: A (acc1, team 2)"));
        assert!(text.contains("... 4 more"));
    }

    #[test]
    fn empty_match_reports_no_winner() {
        let summary = MatchSummary::from_telemetry(&Telemetry::default(), 5);
        let text = summary.to_string();
        assert!(text.starts_with("0 events parsed"));
        assert!(text.contains("match never started"));
        assert!(text.contains("no winner recorded"));
    }
}
