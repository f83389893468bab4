use serde::{Deserialize, Serialize};

use crate::game::{group_by_suit, Card, Player, Position, SuitGroup};

/// One suit of a hand as shown on the table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuitGroupView {
    pub suit: String,
    pub symbol: String,
    pub cards: Vec<Card>,
}

impl From<SuitGroup> for SuitGroupView {
    fn from(group: SuitGroup) -> Self {
        Self {
            suit: group.suit.code().to_string(),
            symbol: group.suit.symbol().to_string(),
            cards: group.cards,
        }
    }
}

/// A seat with its hand grouped and sorted for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatView {
    pub id: u8,
    pub name: String,
    pub position: Position,
    pub card_count: usize,
    pub groups: Vec<SuitGroupView>,
}

impl From<&Player> for SeatView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            position: player.position,
            card_count: player.cards.len(),
            groups: group_by_suit(&player.cards)
                .into_iter()
                .map(SuitGroupView::from)
                .collect(),
        }
    }
}

/// Response for the table endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableResponse {
    pub players: Vec<SeatView>,
}

impl TableResponse {
    pub fn from_players(players: &[Player]) -> Self {
        Self {
            players: players.iter().map(SeatView::from).collect(),
        }
    }
}
