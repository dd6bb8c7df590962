use crate::agent::PartnerCall;
use crate::model::card::Card;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// One seat's contribution to a trick, in play order within the trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPlay {
    pub seat: usize,
    pub cards: Vec<Card>,
}

/// A resolved trick: the lead play first, then each follower in seat
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub leader: usize,
    pub plays: Vec<SeatPlay>,
    pub winner: usize,
    pub points: u32,
}

/// The full record of one played round, returned by the engine and
/// suitable for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub host: usize,
    pub trump_suit: Option<Suit>,
    pub trump_rank: Rank,
    pub partner_call: PartnerCall,
    /// Hands after the kitty exchange, in display order.
    pub hands: Vec<Vec<Card>>,
    pub kitty: Vec<Card>,
    pub tricks: Vec<TrickRecord>,
    /// Captured points per seat.
    pub scores: Vec<u32>,
    pub kitty_points: u32,
}

impl RoundSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
