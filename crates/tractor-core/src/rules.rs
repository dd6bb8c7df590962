//! Pure validity and trick-resolution rules over explicit card
//! collections. Nothing here holds state; every function takes the trump
//! context and the cards it judges. Callers own sequencing and retries.
//!
//! Preconditions (non-empty collections where noted) are programming
//! contracts, not game protocol: violating them panics.

use crate::model::card::{Card, DECK_SIZE};
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::model::trump::Trump;
use std::collections::BTreeSet;

/// Per-face counts for a card collection, indexed by card id. Counts span
/// all deck copies present.
pub fn histogram(cards: &[Card]) -> [u8; DECK_SIZE] {
    let mut counts = [0u8; DECK_SIZE];
    for card in cards {
        counts[card.id() as usize] += 1;
    }
    counts
}

/// Whether every card plays as the same contextual suit.
pub fn same_suit(trump: Trump, cards: &[Card]) -> bool {
    assert!(!cards.is_empty(), "same_suit requires at least one card");
    let suit = trump.suit_of(cards[0]);
    cards.iter().all(|&c| trump.suit_of(c) == suit)
}

/// The single per-face count shared by every distinct face present, or 0
/// if the faces appear with differing counts (a mixed, unstructured
/// selection).
pub fn uniform_multiplicity(cards: &[Card]) -> usize {
    assert!(!cards.is_empty(), "uniform_multiplicity requires at least one card");
    let counts = histogram(cards);
    let mut shared = 0usize;
    for count in counts {
        if count == 0 {
            continue;
        }
        if shared == 0 {
            shared = count as usize;
        } else if shared != count as usize {
            return 0;
        }
    }
    shared
}

/// If the distinct contextual ranks present form a contiguous run, the
/// number of ranks in the run; 0 otherwise. Multiplicity is ignored, so a
/// bare pair spans 1 and two consecutive pairs span 2.
pub fn consecutive_rank_span(trump: Trump, cards: &[Card]) -> usize {
    assert!(!cards.is_empty(), "consecutive_rank_span requires at least one card");
    let mut present = [false; Rank::ALL.len()];
    let mut min = Rank::ALL.len();
    let mut max = 0usize;
    for &card in cards {
        let ordinal = trump.rank_of(card).ordinal() as usize;
        present[ordinal] = true;
        min = min.min(ordinal);
        max = max.max(ordinal);
    }
    if (min..=max).any(|ordinal| !present[ordinal]) {
        return 0;
    }
    max - min + 1
}

/// Partitions the cards of the given contextual suit into straights of the
/// given multiplicity, greedily extracting maximal contiguous rank runs
/// where every rank has at least `multiplicity` copies of a single face,
/// removing each run and sweeping again until no qualifying run remains.
/// Returned sets index into `cards` as given; each run holds exactly
/// `multiplicity` copies per rank.
pub fn partition_into_straights(
    trump: Trump,
    cards: &[Card],
    suit: Suit,
    multiplicity: usize,
) -> Vec<BTreeSet<usize>> {
    assert!(multiplicity >= 1, "multiplicity must be positive");
    let mut pool: Vec<Card> = cards.to_vec();
    pool.sort_by(|a, b| trump.display_cmp(*a, *b));
    if !pool.iter().any(|&c| trump.suit_of(c) == suit) {
        return Vec::new();
    }

    let mut straights: Vec<Vec<Card>> = Vec::new();
    loop {
        let counts = histogram(&pool);
        let has_group = pool
            .iter()
            .any(|&c| counts[c.id() as usize] as usize >= multiplicity && trump.suit_of(c) == suit);
        if !has_group {
            break;
        }

        let mut run: Vec<Card> = Vec::new();
        for rank in Rank::ALL {
            let counts = histogram(&pool);
            let candidate = pool.iter().copied().find(|&c| {
                counts[c.id() as usize] as usize >= multiplicity
                    && trump.suit_of(c) == suit
                    && trump.rank_of(c) == rank
            });
            match candidate {
                Some(card) => {
                    remove_copies(&mut pool, card, multiplicity);
                    run.extend(std::iter::repeat(card).take(multiplicity));
                }
                None => {
                    if !run.is_empty() {
                        straights.push(std::mem::take(&mut run));
                    }
                }
            }
        }
        if !run.is_empty() {
            straights.push(run);
        }
    }

    straights
        .iter()
        .map(|straight| indices_of(cards, straight))
        .collect()
}

fn remove_copies(pool: &mut Vec<Card>, card: Card, copies: usize) {
    for _ in 0..copies {
        if let Some(index) = pool.iter().position(|&c| c == card) {
            pool.remove(index);
        }
    }
}

/// Maps each card of `selection` to a distinct index in `cards` with the
/// same face.
fn indices_of(cards: &[Card], selection: &[Card]) -> BTreeSet<usize> {
    let mut indices = BTreeSet::new();
    for &wanted in selection {
        for (index, &card) in cards.iter().enumerate() {
            if card == wanted && !indices.contains(&index) {
                indices.insert(index);
                break;
            }
        }
    }
    indices
}

/// A legal lead is a non-empty single-suit selection with one shared
/// multiplicity over a contiguous rank run: a single, a pair (or higher
/// tuple), or a tractor of such tuples.
pub fn is_valid_lead(trump: Trump, lead: &[Card]) -> bool {
    if lead.is_empty() {
        return false;
    }
    if !same_suit(trump, lead) {
        return false;
    }
    let multiplicity = uniform_multiplicity(lead);
    if multiplicity == 0 {
        return false;
    }
    if multiplicity == 1 && lead.len() > 1 {
        return false;
    }
    consecutive_rank_span(trump, lead) > 0
}

/// Whether `play` legally follows `lead` out of `hand`. Assumes the lead
/// itself is valid and that `play` is drawn from `hand`.
///
/// The suit-following obligation requires at least
/// `min(lead len, suit cards held)` cards of the lead suit. For a
/// structured lead of multiplicity m, the player must additionally commit
/// either as many m-groups as the lead demands or every m-group the whole
/// hand holds in that suit, whichever is smaller.
pub fn is_valid_play(trump: Trump, lead: &[Card], play: &[Card], hand: &[Card]) -> bool {
    if lead.len() != play.len() {
        return false;
    }

    let suit = trump.suit_of(lead[0]);
    let in_play = play.iter().filter(|&&c| trump.suit_of(c) == suit).count();
    let in_hand = hand.iter().filter(|&&c| trump.suit_of(c) == suit).count();

    if in_play < lead.len() && in_play < in_hand {
        return false;
    }
    // Void in the lead suit: anything of the right length goes.
    if in_hand == 0 {
        return true;
    }

    let span = consecutive_rank_span(trump, lead);
    if span == 0 {
        return true;
    }
    let multiplicity = lead.len() / span;
    if multiplicity == 1 {
        return true;
    }

    let held_groups = group_count(trump, hand, suit, multiplicity);
    let played_groups = group_count(trump, play, suit, multiplicity);
    if played_groups == span {
        return true;
    }
    held_groups == played_groups
}

fn group_count(trump: Trump, cards: &[Card], suit: Suit, multiplicity: usize) -> usize {
    partition_into_straights(trump, cards, suit, multiplicity)
        .iter()
        .map(|straight| straight.len() / multiplicity)
        .sum()
}

/// The index of the winning play. Play 0 is the lead and wins by default;
/// each later play unseats the running winner only if `higher_hand` says
/// it beats it.
pub fn winning_index(trump: Trump, plays: &[Vec<Card>]) -> usize {
    assert!(!plays.is_empty(), "winning_index requires at least one play");
    let mut winner = 0;
    for (index, play) in plays.iter().enumerate().skip(1) {
        if higher_hand(trump, &plays[winner], play) {
            winner = index;
        }
    }
    winner
}

/// Whether `challenger` beats `incumbent`, where the incumbent played
/// first and wins every tie or malformed comparison. A challenger that
/// does not hold one contextual suit, or whose structural multiplicity
/// differs from the incumbent's, loses outright. Trump beats non-trump;
/// otherwise higher contextual rank of the same suit wins. Off-suit
/// trump-rank cards share a rank, so those ties stay with the incumbent.
pub fn higher_hand(trump: Trump, incumbent: &[Card], challenger: &[Card]) -> bool {
    assert!(
        !incumbent.is_empty() && !challenger.is_empty(),
        "higher_hand requires non-empty plays"
    );
    if !same_suit(trump, challenger) {
        return false;
    }
    if incumbent.len() != 1 {
        if uniform_multiplicity(challenger) != uniform_multiplicity(incumbent) {
            return false;
        }
        if consecutive_rank_span(trump, incumbent) >= consecutive_rank_span(trump, challenger) {
            return false;
        }
    }

    let low_incumbent = lowest(trump, incumbent);
    let low_challenger = lowest(trump, challenger);
    if trump.suit_of(low_incumbent) == Suit::Trump {
        trump.suit_of(low_challenger) == Suit::Trump
            && trump.rank_of(low_challenger) > trump.rank_of(low_incumbent)
    } else if trump.suit_of(low_challenger) == Suit::Trump {
        true
    } else {
        trump.suit_of(low_challenger) == trump.suit_of(low_incumbent)
            && trump.rank_of(low_challenger) > trump.rank_of(low_incumbent)
    }
}

fn lowest(trump: Trump, cards: &[Card]) -> Card {
    let mut low = cards[0];
    for &card in &cards[1..] {
        if trump.display_cmp(card, low).is_lt() {
            low = card;
        }
    }
    low
}

pub fn points_in(cards: &[Card]) -> u32 {
    cards.iter().map(|c| c.point_value() as u32).sum()
}

pub fn points_in_plays(plays: &[Vec<Card>]) -> u32 {
    plays.iter().map(|play| points_in(play)).sum()
}
