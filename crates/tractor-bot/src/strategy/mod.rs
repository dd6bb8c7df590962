mod basic;
mod greedy;

pub use basic::BasicAgent;
pub use greedy::GreedyAgent;

use std::collections::BTreeSet;
use tractor_core::model::card::Card;
use tractor_core::model::suit::Suit;
use tractor_core::model::trump::Trump;
use tractor_core::rules;

/// Pads `play` with further hand indices until it reaches `target_size`.
/// With a suit restriction the target may not be reachable; the caller
/// follows up with an unrestricted pass.
pub(crate) fn fill_play(
    play: &mut BTreeSet<usize>,
    trump: Trump,
    hand: &[Card],
    target_size: usize,
    suit: Option<Suit>,
) {
    if play.len() >= target_size {
        return;
    }
    for index in 0..hand.len() {
        if play.contains(&index) {
            continue;
        }
        if let Some(required) = suit {
            if trump.suit_of(hand[index]) != required {
                continue;
            }
        }
        play.insert(index);
        if play.len() == target_size {
            return;
        }
    }
}

/// Follows a structured lead: commit as many multiplicity groups as the
/// lead demands, drawn from the same suit partition the validity check
/// uses, then pad with lead-suit cards, then with anything. Shared by
/// both strategies.
pub(crate) fn follow_structured(
    trump: Trump,
    lead: &[Card],
    hand: &[Card],
    span: usize,
    multiplicity: usize,
) -> BTreeSet<usize> {
    let suit = trump.suit_of(lead[0]);
    let mut play = BTreeSet::new();
    let mut committed = 0usize;
    'straights: for straight in rules::partition_into_straights(trump, hand, suit, multiplicity) {
        // One group per distinct face in the straight. A face held with
        // several whole groups shows up in several straights, so indices
        // are taken through `play` to keep the copies disjoint.
        let mut faces: Vec<Card> = straight.iter().map(|&index| hand[index]).collect();
        faces.sort_by(|a, b| trump.display_cmp(*a, *b));
        faces.dedup();
        for face in faces {
            if committed == span {
                break 'straights;
            }
            take_copies(&mut play, hand, face, multiplicity);
            committed += 1;
        }
    }
    fill_play(&mut play, trump, hand, lead.len(), Some(suit));
    fill_play(&mut play, trump, hand, lead.len(), None);
    play
}

fn take_copies(play: &mut BTreeSet<usize>, hand: &[Card], face: Card, copies: usize) {
    let mut taken = 0usize;
    for (index, &card) in hand.iter().enumerate() {
        if taken == copies {
            return;
        }
        if card == face && play.insert(index) {
            taken += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{fill_play, follow_structured};
    use std::collections::BTreeSet;
    use tractor_core::model::card::Card;
    use tractor_core::model::rank::Rank;
    use tractor_core::model::suit::Suit;
    use tractor_core::model::trump::Trump;
    use tractor_core::rules;

    #[test]
    fn fill_play_respects_suit_restriction() {
        let trump = Trump::new(Some(Suit::Clubs), Rank::Two);
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Spades, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Jack),
        ];
        let mut play = BTreeSet::new();
        fill_play(&mut play, trump, &hand, 2, Some(Suit::Hearts));
        assert_eq!(play, BTreeSet::from([0, 2]));
    }

    #[test]
    fn follow_commits_every_group_of_a_repeated_face() {
        let trump = Trump::new(Some(Suit::Clubs), Rank::Two);
        let lead = vec![
            Card::of(Suit::Hearts, Rank::Eight),
            Card::of(Suit::Hearts, Rank::Eight),
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Ten),
            Card::of(Suit::Hearts, Rank::Ten),
        ];
        // Four queens are two whole pairs; both must come out when the
        // lead demands three.
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Three),
            Card::of(Suit::Hearts, Rank::Four),
            Card::of(Suit::Hearts, Rank::Six),
            Card::of(Suit::Hearts, Rank::Seven),
            Card::of(Suit::Hearts, Rank::Queen),
            Card::of(Suit::Hearts, Rank::Queen),
            Card::of(Suit::Hearts, Rank::Queen),
            Card::of(Suit::Hearts, Rank::Queen),
            Card::of(Suit::Spades, Rank::Ace),
        ];
        let selection = follow_structured(trump, &lead, &hand, 3, 2);
        assert_eq!(selection, BTreeSet::from([0, 1, 4, 5, 6, 7]));
        let play: Vec<Card> = selection.iter().map(|&i| hand[i]).collect();
        assert!(rules::is_valid_play(trump, &lead, &play, &hand));
    }

    #[test]
    fn follow_commits_no_more_groups_than_the_lead_demands() {
        let trump = Trump::new(Some(Suit::Clubs), Rank::Two);
        let lead = vec![
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Ten),
            Card::of(Suit::Hearts, Rank::Ten),
        ];
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Three),
            Card::of(Suit::Hearts, Rank::Three),
            Card::of(Suit::Hearts, Rank::Four),
            Card::of(Suit::Hearts, Rank::Four),
            Card::of(Suit::Hearts, Rank::Jack),
            Card::of(Suit::Hearts, Rank::Jack),
        ];
        let selection = follow_structured(trump, &lead, &hand, 2, 2);
        assert_eq!(selection.len(), 4);
        let play: Vec<Card> = selection.iter().map(|&i| hand[i]).collect();
        assert!(rules::is_valid_play(trump, &lead, &play, &hand));
    }

    #[test]
    fn fill_play_pads_with_anything_without_restriction() {
        let trump = Trump::new(Some(Suit::Clubs), Rank::Two);
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Spades, Rank::Nine),
        ];
        let mut play = BTreeSet::from([1]);
        fill_play(&mut play, trump, &hand, 2, None);
        assert_eq!(play, BTreeSet::from([0, 1]));
    }
}
