use crate::helpers;
use crate::strategy::{fill_play, follow_structured};
use std::collections::BTreeSet;
use tractor_core::agent::{Agent, GameInfo, PartnerCall};
use tractor_core::model::card::Card;
use tractor_core::rules;

/// The simplest legal strategy: never declares trump, buries the first
/// cards it is shown, and plays mechanically. Useful as table filler and
/// as a baseline in tests.
pub struct BasicAgent {
    seat: usize,
}

impl BasicAgent {
    pub fn new(seat: usize) -> Self {
        Self { seat }
    }
}

impl Agent for BasicAgent {
    fn initialize_round(&mut self, _info: &GameInfo) {}

    fn draw(
        &mut self,
        _new_card: Card,
        _hand: &[Card],
        _info: &GameInfo,
    ) -> Option<BTreeSet<usize>> {
        None
    }

    fn handle_kitty(
        &mut self,
        _hand_plus_kitty: &[Card],
        kitty_size: usize,
        _info: &GameInfo,
    ) -> BTreeSet<usize> {
        (0..kitty_size).collect()
    }

    fn call_partner(&mut self, hand: &[Card], _kitty: &[Card], info: &GameInfo) -> PartnerCall {
        PartnerCall {
            card: helpers::first_unheld_off_card(info.trump, hand),
            instance: 1,
        }
    }

    fn lead(&mut self, hand: &[Card], _info: &GameInfo) -> BTreeSet<usize> {
        BTreeSet::from([hand.len() - 1])
    }

    fn play(
        &mut self,
        previous_plays: &[Vec<Card>],
        hand: &[Card],
        info: &GameInfo,
    ) -> BTreeSet<usize> {
        let trump = info.trump;
        let lead = &previous_plays[0];
        let suit = trump.suit_of(lead[0]);

        if lead.len() == 1 {
            let same = helpers::same_suit_indices(trump, hand, suit);
            return match same.last() {
                Some(&index) => BTreeSet::from([index]),
                None => {
                    let mut play = BTreeSet::new();
                    fill_play(&mut play, trump, hand, 1, None);
                    play
                }
            };
        }

        let span = rules::consecutive_rank_span(trump, lead);
        let multiplicity = lead.len() / span;
        let play = follow_structured(trump, lead, hand, span, multiplicity);
        tracing::debug!(seat = self.seat, cards = play.len(), "basic follow");
        play
    }
}

#[cfg(test)]
mod tests {
    use super::BasicAgent;
    use std::collections::BTreeSet;
    use tractor_core::agent::{Agent, GameInfo, PartnerCall};
    use tractor_core::model::card::Card;
    use tractor_core::model::rank::Rank;
    use tractor_core::model::suit::Suit;
    use tractor_core::model::trump::Trump;
    use tractor_core::rules;

    fn info() -> GameInfo {
        GameInfo {
            num_players: 4,
            num_decks: 2,
            host: Some(0),
            trump: Trump::new(Some(Suit::Clubs), Rank::Two),
            partner_call: None,
            round: 0,
        }
    }

    #[test]
    fn never_declares() {
        let mut agent = BasicAgent::new(1);
        let hand = vec![Card::of(Suit::Hearts, Rank::Two)];
        assert_eq!(agent.draw(hand[0], &hand, &info()), None);
    }

    #[test]
    fn buries_the_first_kitty_size_cards() {
        let mut agent = BasicAgent::new(1);
        let merged = vec![Card::of(Suit::Hearts, Rank::Nine); 10];
        let selection = agent.handle_kitty(&merged, 8, &info());
        assert_eq!(selection, (0..8).collect::<BTreeSet<usize>>());
    }

    #[test]
    fn partner_call_is_legal() {
        let mut agent = BasicAgent::new(1);
        let hand = vec![Card::of(Suit::Diamonds, Rank::Ace)];
        let info = info();
        let PartnerCall { card, instance } = agent.call_partner(&hand, &[], &info);
        assert!(!info.trump.is_trump(card));
        assert!(!hand.contains(&card));
        assert_eq!(instance, 1);
    }

    #[test]
    fn follows_a_single_with_the_highest_card_of_suit() {
        let mut agent = BasicAgent::new(1);
        let lead = vec![vec![Card::of(Suit::Hearts, Rank::Nine)]];
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Four),
            Card::of(Suit::Hearts, Rank::Jack),
            Card::of(Suit::Spades, Rank::Ace),
        ];
        assert_eq!(agent.play(&lead, &hand, &info()), BTreeSet::from([1]));
    }

    #[test]
    fn structured_follow_is_always_legal() {
        let mut agent = BasicAgent::new(1);
        let info = info();
        let lead = vec![
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Ten),
            Card::of(Suit::Hearts, Rank::Ten),
        ];
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Four),
            Card::of(Suit::Hearts, Rank::Four),
            Card::of(Suit::Hearts, Rank::Seven),
            Card::of(Suit::Spades, Rank::Three),
            Card::of(Suit::Diamonds, Rank::Jack),
        ];
        let selection = agent.play(&[lead.clone()], &hand, &info);
        let play: Vec<Card> = selection.iter().map(|&i| hand[i]).collect();
        assert!(rules::is_valid_play(info.trump, &lead, &play, &hand));
        // The held pair is committed, the rest padded with hearts.
        assert!(selection.contains(&0) && selection.contains(&1) && selection.contains(&2));
    }
}
