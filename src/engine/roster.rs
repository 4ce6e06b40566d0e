use crate::model::player::{Gender, Player, PlayerId, PlayerUpdate};

pub const MIN_PLAYERS: usize = 2;

/// Pre-game roster editor. Discarded once the roster is submitted.
#[derive(Debug, Clone)]
pub struct RosterBuilder {
    players: Vec<Player>,
    next_id: PlayerId,
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self {
            players: vec![Player::blank(1, Gender::Male), Player::blank(2, Gender::Female)],
            next_id: 3,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn can_remove(&self) -> bool {
        self.players.len() > MIN_PLAYERS
    }

    pub fn add_player(&mut self) -> PlayerId {
        let id = self.next_id;
        self.next_id += 1;
        self.players.push(Player::blank(id, Gender::default()));
        id
    }

    /// Returns false when removal would leave fewer than two players.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        if !self.can_remove() {
            return false;
        }
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    pub fn update(&mut self, id: PlayerId, update: PlayerUpdate) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                update.apply(player);
                true
            }
            None => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.players.len() >= MIN_PLAYERS && self.players.iter().all(Player::is_ready)
    }

    /// The final ordered roster, or `None` while any entry is incomplete.
    pub fn submit(&self) -> Option<Vec<Player>> {
        self.is_valid().then(|| self.players.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> RosterBuilder {
        let mut roster = RosterBuilder::new();
        while roster.len() < names.len() {
            roster.add_player();
        }
        let ids: Vec<PlayerId> = roster.players().iter().map(|p| p.id).collect();
        for (id, name) in ids.into_iter().zip(names) {
            roster.update(id, PlayerUpdate::Name((*name).to_string()));
        }
        roster
    }

    #[test]
    fn starts_with_two_blank_players() {
        let roster = RosterBuilder::new();
        assert_eq!(roster.len(), 2);
        assert!(roster.players().iter().all(|p| p.name.is_empty() && p.age == 21));
        assert_eq!(roster.players()[0].gender, Gender::Male);
        assert_eq!(roster.players()[1].gender, Gender::Female);
        assert!(roster.submit().is_none());
    }

    #[test]
    fn added_players_get_unique_ids_and_defaults() {
        let mut roster = RosterBuilder::new();
        let a = roster.add_player();
        let b = roster.add_player();
        assert_ne!(a, b);
        let added = roster.players().last().unwrap();
        assert_eq!(added.age, 21);
        assert_eq!(added.gender, Gender::Male);
    }

    #[test]
    fn remove_is_noop_at_minimum_size() {
        let mut roster = RosterBuilder::new();
        let first = roster.players()[0].id;
        assert!(!roster.remove_player(first));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn remove_above_minimum_drops_player() {
        let mut roster = RosterBuilder::new();
        let id = roster.add_player();
        assert!(roster.remove_player(id));
        assert_eq!(roster.len(), 2);
        assert!(!roster.remove_player(999));
    }

    #[test]
    fn submit_emits_roster_unchanged_in_order() {
        let roster = named(&["Ava", "Sam", "Lee"]);
        let players = roster.submit().unwrap();
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Ava", "Sam", "Lee"]);
        assert_eq!(players, roster.players());
    }

    #[test]
    fn whitespace_name_blocks_submit() {
        let mut roster = named(&["Ava", "Sam"]);
        let id = roster.players()[1].id;
        roster.update(id, PlayerUpdate::Name("   ".into()));
        assert!(!roster.is_valid());
        assert!(roster.submit().is_none());
    }

    #[test]
    fn zero_age_blocks_submit() {
        let mut roster = named(&["Ava", "Sam"]);
        let id = roster.players()[0].id;
        roster.update(id, PlayerUpdate::Age(0));
        assert!(roster.submit().is_none());
        roster.update(id, PlayerUpdate::Age(17));
        assert!(roster.submit().is_some());
    }

    #[test]
    fn field_updates_are_typed() {
        let mut roster = RosterBuilder::new();
        let id = roster.players()[0].id;
        assert!(roster.update(id, PlayerUpdate::Gender(Gender::NonBinary)));
        assert_eq!(roster.players()[0].gender, Gender::NonBinary);
        assert!(!roster.update(404, PlayerUpdate::Age(30)));
    }
}
