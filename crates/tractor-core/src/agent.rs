use crate::model::card::Card;
use crate::model::trump::Trump;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The host's nomination of the partner signal: a card face and which copy
/// of it (1-based, below the number of decks) marks the partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerCall {
    pub card: Card,
    pub instance: usize,
}

/// Read-only public state handed to an agent at each decision point.
/// Built fresh per decision; holds no references into engine state.
#[derive(Debug, Clone)]
pub struct GameInfo {
    pub num_players: usize,
    pub num_decks: usize,
    pub host: Option<usize>,
    pub trump: Trump,
    pub partner_call: Option<PartnerCall>,
    pub round: u32,
}

/// The decisions the engine asks of each seat. Card views are copies of
/// engine state; returned indices refer into the view exactly as handed
/// over. Illegal answers are not faults: the engine re-asks until the
/// answer is legal (see the engine's retry budget).
pub trait Agent {
    /// Round setup notification, sent once trump is settled.
    fn initialize_round(&mut self, info: &GameInfo);

    /// Called for each card as it is dealt. Returning indices of matching
    /// cards in `hand` declares (or overturns) trump; `None` passes.
    fn draw(&mut self, new_card: Card, hand: &[Card], info: &GameInfo) -> Option<BTreeSet<usize>>;

    /// Host only: pick exactly `kitty_size` indices of `hand_plus_kitty`
    /// to bury.
    fn handle_kitty(
        &mut self,
        hand_plus_kitty: &[Card],
        kitty_size: usize,
        info: &GameInfo,
    ) -> BTreeSet<usize>;

    /// Host only: name the partner card. Must be a non-trump card with an
    /// instance in `1..num_decks`.
    fn call_partner(&mut self, hand: &[Card], kitty: &[Card], info: &GameInfo) -> PartnerCall;

    /// Open a trick with a single, tuple, or tractor.
    fn lead(&mut self, hand: &[Card], info: &GameInfo) -> BTreeSet<usize>;

    /// Follow a trick; `previous_plays[0]` is the lead.
    fn play(
        &mut self,
        previous_plays: &[Vec<Card>],
        hand: &[Card],
        info: &GameInfo,
    ) -> BTreeSet<usize>;
}
