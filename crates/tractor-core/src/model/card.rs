use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of distinct cards in one deck: 52 ranked cards plus two jokers.
pub const DECK_SIZE: usize = 54;

pub const JOKER_ID: u8 = 52;
pub const COLOR_JOKER_ID: u8 = 53;

/// One physical card, identified by its printed face. Cards with the same
/// face compare equal even across deck copies. A `Card` carries no trump
/// context; contextual suit and rank are derived through
/// [`Trump`](crate::model::trump::Trump).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    id: u8,
}

impl Card {
    pub const fn from_id(id: u8) -> Option<Self> {
        if id < DECK_SIZE as u8 {
            Some(Self { id })
        } else {
            None
        }
    }

    /// Builds a card from its printed suit and rank. Jokers ignore the
    /// suit argument; synthetic ranks other than the jokers do not name a
    /// physical card.
    pub fn of(suit: Suit, rank: Rank) -> Self {
        match rank {
            Rank::Joker => Self { id: JOKER_ID },
            Rank::ColorJoker => Self { id: COLOR_JOKER_ID },
            _ => {
                assert!(rank.is_natural(), "no physical card has rank {rank}");
                assert!(suit.is_natural(), "no physical card has suit {suit}");
                Self {
                    id: 13 * suit as u8 + rank.ordinal(),
                }
            }
        }
    }

    pub const fn id(self) -> u8 {
        self.id
    }

    pub const fn is_joker(self) -> bool {
        self.id >= JOKER_ID
    }

    pub fn base_suit(self) -> Suit {
        if self.is_joker() {
            Suit::Trump
        } else {
            Suit::NATURAL[self.id as usize / 13]
        }
    }

    pub fn base_rank(self) -> Rank {
        match self.id {
            JOKER_ID => Rank::Joker,
            COLOR_JOKER_ID => Rank::ColorJoker,
            _ => Rank::NATURAL[self.id as usize % 13],
        }
    }

    /// Captured-point value: fives are worth 5, tens and kings 10.
    /// Independent of trump.
    pub fn point_value(self) -> u8 {
        match self.base_rank() {
            Rank::Five => 5,
            Rank::Ten | Rank::King => 10,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            JOKER_ID => f.write_str("JOKER"),
            COLOR_JOKER_ID => f.write_str("COLOR-JOKER"),
            _ => write!(f, "{}{}", self.base_rank(), self.base_suit()),
        }
    }
}
