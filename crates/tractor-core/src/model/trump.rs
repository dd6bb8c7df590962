use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::cmp::Ordering;
use serde::{Deserialize, Serialize};

/// The trump context for one round: an optional trump suit and the trump
/// rank. A round with no trump suit (after a joker-pair declaration, or no
/// declaration at all) still treats trump-rank cards and jokers as trump.
///
/// Contextual suit and rank are pure functions of `(Trump, Card)`; a card's
/// printed face is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trump {
    pub suit: Option<Suit>,
    pub rank: Rank,
}

impl Trump {
    pub const fn new(suit: Option<Suit>, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// The suit the card plays as under this context. Jokers and
    /// trump-rank cards always play as `Suit::Trump`.
    pub fn suit_of(self, card: Card) -> Suit {
        if card.is_joker() {
            return Suit::Trump;
        }
        if Some(card.base_suit()) == self.suit || card.base_rank() == self.rank {
            Suit::Trump
        } else {
            card.base_suit()
        }
    }

    /// The rank the card plays as under this context. A trump-rank card
    /// becomes `SuitedNumber` when it is also of the trump suit and
    /// `Number` otherwise, so suited trump-rank cards outrank off-suit
    /// ones.
    pub fn rank_of(self, card: Card) -> Rank {
        if !card.is_joker() && card.base_rank() == self.rank {
            if Some(card.base_suit()) == self.suit {
                Rank::SuitedNumber
            } else {
                Rank::Number
            }
        } else {
            card.base_rank()
        }
    }

    pub fn is_trump(self, card: Card) -> bool {
        self.suit_of(card) == Suit::Trump
    }

    /// Total order used for displaying and deduplicating hands, not for
    /// trick strength: trump cards sort after every non-trump card; trump
    /// cards order by contextual rank with ties (off-suit trump-rank
    /// cards) broken by id; non-trump cards order by id.
    pub fn display_cmp(self, a: Card, b: Card) -> Ordering {
        match (self.is_trump(a), self.is_trump(b)) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self
                .rank_of(a)
                .cmp(&self.rank_of(b))
                .then(a.id().cmp(&b.id())),
            (false, false) => a.id().cmp(&b.id()),
        }
    }
}
