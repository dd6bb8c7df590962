//! Hand-inspection utilities shared by the strategies: suit scans, suit
//! bucketing, partner-call selection. All index results refer into the
//! card view exactly as handed to the agent.

use std::collections::BTreeMap;
use tractor_core::model::card::{Card, DECK_SIZE};
use tractor_core::model::suit::Suit;
use tractor_core::model::trump::Trump;

/// Indices of all cards playing as `suit`, in hand order.
pub fn same_suit_indices(trump: Trump, cards: &[Card], suit: Suit) -> Vec<usize> {
    cards
        .iter()
        .enumerate()
        .filter(|&(_, &c)| trump.suit_of(c) == suit)
        .map(|(index, _)| index)
        .collect()
}

/// Buckets the view's indices by contextual suit. Every suit is present,
/// possibly empty.
pub fn bucket_by_suit(trump: Trump, cards: &[Card]) -> BTreeMap<Suit, Vec<usize>> {
    let mut buckets: BTreeMap<Suit, Vec<usize>> =
        Suit::ALL.iter().map(|&suit| (suit, Vec::new())).collect();
    for (index, &card) in cards.iter().enumerate() {
        if let Some(bucket) = buckets.get_mut(&trump.suit_of(card)) {
            bucket.push(index);
        }
    }
    buckets
}

/// The shortest natural-suit bucket, falling back to trump when no
/// natural suit remains. Length ties go to the first suit in map order.
pub fn shortest_off_suit(buckets: &BTreeMap<Suit, Vec<usize>>) -> Suit {
    buckets
        .iter()
        .filter(|&(&suit, _)| suit.is_natural())
        .min_by_key(|(_, indices)| indices.len())
        .map(|(&suit, _)| suit)
        .unwrap_or(Suit::Trump)
}

/// The lowest-id non-trump card not present in `hand`; always exists for
/// legal hand sizes. Used to produce a safe partner call.
pub fn first_unheld_off_card(trump: Trump, hand: &[Card]) -> Card {
    (0..DECK_SIZE as u8)
        .filter_map(Card::from_id)
        .find(|&card| !trump.is_trump(card) && !hand.contains(&card))
        .expect("an unheld non-trump card exists")
}
