use thiserror::Error;

use super::models::{Team, TeamPair};

/// Field positions of an 8-a-side team, in slot order
pub const POSITIONS: [&str; 8] = [
    "Goalkeeper",
    "Defender 1",
    "Defender 2",
    "Defender 3",
    "Midfielder 1",
    "Midfielder 2",
    "Midfielder 3",
    "Forward",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineupError {
    #[error("position {0} does not exist")]
    UnknownPosition(usize),
    #[error("{0} is not in the available players")]
    UnknownPlayer(String),
    #[error("{0} is already selected")]
    AlreadySelected(String),
}

/// Assigns parsed players to the positions of both teams
#[derive(Debug, Clone)]
pub struct LineupBuilder {
    available: Vec<String>,
    slots: TeamPair<Vec<Option<String>>>,
}

impl LineupBuilder {
    pub fn new(available: Vec<String>) -> Self {
        let empty = vec![None; POSITIONS.len()];
        Self {
            available,
            slots: TeamPair::new(empty.clone(), empty),
        }
    }

    /// Rebuild from saved rosters; their players become the available pool
    pub fn from_rosters(rosters: &TeamPair<Vec<String>>) -> Self {
        let available = rosters
            .white
            .iter()
            .chain(rosters.black.iter())
            .cloned()
            .collect();
        let mut builder = Self::new(available);

        for (team, roster) in rosters.iter() {
            for (slot, player) in builder.slots.get_mut(team).iter_mut().zip(roster) {
                *slot = Some(player.clone());
            }
        }
        builder
    }

    pub fn assign(&mut self, team: Team, position: usize, player: &str) -> Result<(), LineupError> {
        if position >= POSITIONS.len() {
            return Err(LineupError::UnknownPosition(position));
        }
        if !self.available.iter().any(|p| p == player) {
            return Err(LineupError::UnknownPlayer(player.to_string()));
        }
        if self.is_selected(player) {
            return Err(LineupError::AlreadySelected(player.to_string()));
        }

        self.slots.get_mut(team)[position] = Some(player.to_string());
        Ok(())
    }

    pub fn remove(&mut self, team: Team, position: usize) -> Option<String> {
        self.slots
            .get_mut(team)
            .get_mut(position)
            .and_then(Option::take)
    }

    pub fn free_players(&self) -> Vec<&str> {
        self.available
            .iter()
            .filter(|p| !self.is_selected(p))
            .map(String::as_str)
            .collect()
    }

    pub fn is_team_complete(&self, team: Team) -> bool {
        self.slots.get(team).iter().all(Option::is_some)
    }

    /// Fill the other team when one side is complete and exactly a team's
    /// worth of free players is left
    pub fn auto_complete(&mut self) -> bool {
        let free: Vec<String> = self.free_players().into_iter().map(String::from).collect();
        if free.len() != POSITIONS.len() {
            return false;
        }

        let target = match (
            self.is_team_complete(Team::White),
            self.is_team_complete(Team::Black),
        ) {
            (true, false) => Team::Black,
            (false, true) => Team::White,
            _ => return false,
        };

        *self.slots.get_mut(target) = free.into_iter().map(Some).collect();
        true
    }

    /// Assigned players per team in position order, empty slots skipped
    pub fn rosters(&self) -> TeamPair<Vec<String>> {
        let collect =
            |team: Team| -> Vec<String> { self.slots.get(team).iter().flatten().cloned().collect() };
        TeamPair::new(collect(Team::White), collect(Team::Black))
    }

    fn is_selected(&self, player: &str) -> bool {
        self.slots
            .iter()
            .any(|(_, slots)| slots.iter().flatten().any(|p| p == player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("P{i}")).collect()
    }

    #[test]
    fn test_assign_and_remove() {
        let mut builder = LineupBuilder::new(players(16));

        builder.assign(Team::White, 0, "P1").unwrap();
        assert_eq!(builder.free_players().len(), 15);
        assert_eq!(builder.rosters().white, vec!["P1".to_string()]);

        assert_eq!(builder.remove(Team::White, 0), Some("P1".to_string()));
        assert_eq!(builder.free_players().len(), 16);
        assert_eq!(builder.remove(Team::White, 0), None);
    }

    #[test]
    fn test_assign_rejects_bad_input() {
        let mut builder = LineupBuilder::new(players(16));
        builder.assign(Team::White, 0, "P1").unwrap();

        assert_eq!(
            builder.assign(Team::Black, 0, "P1"),
            Err(LineupError::AlreadySelected("P1".into()))
        );
        assert_eq!(
            builder.assign(Team::Black, 0, "Nobody"),
            Err(LineupError::UnknownPlayer("Nobody".into()))
        );
        assert_eq!(
            builder.assign(Team::Black, 8, "P2"),
            Err(LineupError::UnknownPosition(8))
        );
    }

    #[test]
    fn test_auto_complete_fills_other_team() {
        let mut builder = LineupBuilder::new(players(16));
        for (position, player) in players(8).iter().enumerate() {
            builder.assign(Team::White, position, player).unwrap();
        }

        assert!(builder.auto_complete());
        assert!(builder.is_team_complete(Team::Black));
        assert_eq!(builder.rosters().black, (9..=16).map(|i| format!("P{i}")).collect::<Vec<_>>());
        assert!(builder.free_players().is_empty());
    }

    #[test]
    fn test_auto_complete_needs_exactly_one_team_worth_of_free_players() {
        let mut builder = LineupBuilder::new(players(17));
        for (position, player) in players(8).iter().enumerate() {
            builder.assign(Team::White, position, player).unwrap();
        }
        assert!(!builder.auto_complete());

        let mut empty = LineupBuilder::new(players(8));
        assert!(!empty.auto_complete());
    }

    #[test]
    fn test_from_rosters_restores_slots() {
        let rosters = TeamPair::new(players(8), (9..=16).map(|i| format!("P{i}")).collect());
        let builder = LineupBuilder::from_rosters(&rosters);

        assert!(builder.is_team_complete(Team::White));
        assert!(builder.is_team_complete(Team::Black));
        assert_eq!(builder.rosters(), rosters);
    }
}
