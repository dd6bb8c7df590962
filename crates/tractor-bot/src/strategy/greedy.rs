use crate::helpers;
use crate::strategy::{fill_play, follow_structured};
use std::collections::BTreeSet;
use tracing::debug;
use tractor_core::agent::{Agent, GameInfo, PartnerCall};
use tractor_core::model::card::Card;
use tractor_core::model::suit::Suit;
use tractor_core::rules;

/// A common-sense strategy: declares trump on the first trump-rank card
/// it draws, buries its shortest off-suits, leads its longest tractor,
/// and trumps point-laden tricks it cannot follow.
pub struct GreedyAgent {
    seat: usize,
}

impl GreedyAgent {
    pub fn new(seat: usize) -> Self {
        Self { seat }
    }
}

impl Agent for GreedyAgent {
    fn initialize_round(&mut self, _info: &GameInfo) {}

    fn draw(&mut self, new_card: Card, hand: &[Card], info: &GameInfo) -> Option<BTreeSet<usize>> {
        // Only claim an uncontested declaration in the first round.
        if info.round == 0
            && info.trump.suit.is_none()
            && !new_card.is_joker()
            && new_card.base_rank() == info.trump.rank
        {
            let index = hand.iter().position(|&c| c == new_card)?;
            debug!(seat = self.seat, card = %new_card, "declaring trump");
            return Some(BTreeSet::from([index]));
        }
        None
    }

    fn handle_kitty(
        &mut self,
        hand_plus_kitty: &[Card],
        kitty_size: usize,
        info: &GameInfo,
    ) -> BTreeSet<usize> {
        // Bury whole short suits first, working toward voids.
        let mut buckets = helpers::bucket_by_suit(info.trump, hand_plus_kitty);
        let mut selection = BTreeSet::new();
        while selection.len() < kitty_size {
            let needed = kitty_size - selection.len();
            let suit = helpers::shortest_off_suit(&buckets);
            let Some(indices) = buckets.remove(&suit) else {
                break;
            };
            selection.extend(indices.into_iter().take(needed));
        }
        debug!(seat = self.seat, buried = selection.len(), "kitty buried");
        selection
    }

    fn call_partner(&mut self, hand: &[Card], _kitty: &[Card], info: &GameInfo) -> PartnerCall {
        PartnerCall {
            card: helpers::first_unheld_off_card(info.trump, hand),
            instance: 1,
        }
    }

    fn lead(&mut self, hand: &[Card], info: &GameInfo) -> BTreeSet<usize> {
        // Lead the longest tractor available, highest multiplicity first.
        for multiplicity in (2..=info.num_decks).rev() {
            let mut best: Option<BTreeSet<usize>> = None;
            for suit in Suit::ALL {
                for straight in
                    rules::partition_into_straights(info.trump, hand, suit, multiplicity)
                {
                    if best.as_ref().is_none_or(|b| b.len() < straight.len()) {
                        best = Some(straight);
                    }
                }
            }
            if let Some(best) = best {
                debug!(seat = self.seat, cards = best.len(), "leading a tractor");
                return best;
            }
        }
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
            if let Some(&index) = same.last() {
                return BTreeSet::from([index]);
            }
            let mut play = BTreeSet::new();
            if rules::points_in_plays(previous_plays) > 0 {
                // Void with points on the table: try to take them.
                fill_play(&mut play, trump, hand, 1, Some(Suit::Trump));
            }
            fill_play(&mut play, trump, hand, 1, None);
            return play;
        }

        let span = rules::consecutive_rank_span(trump, lead);
        let multiplicity = lead.len() / span;
        follow_structured(trump, lead, hand, span, multiplicity)
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyAgent;
    use std::collections::BTreeSet;
    use tractor_core::agent::{Agent, GameInfo};
    use tractor_core::model::card::Card;
    use tractor_core::model::rank::Rank;
    use tractor_core::model::suit::Suit;
    use tractor_core::model::trump::Trump;
    use tractor_core::rules;

    fn info(trump_suit: Option<Suit>) -> GameInfo {
        GameInfo {
            num_players: 4,
            num_decks: 2,
            host: Some(0),
            trump: Trump::new(trump_suit, Rank::Two),
            partner_call: None,
            round: 0,
        }
    }

    #[test]
    fn declares_a_drawn_trump_rank_card() {
        let mut agent = GreedyAgent::new(0);
        let hand = vec![
            Card::of(Suit::Spades, Rank::Nine),
            Card::of(Suit::Hearts, Rank::Two),
        ];
        let nomination = agent.draw(hand[1], &hand, &info(None));
        assert_eq!(nomination, Some(BTreeSet::from([1])));
    }

    #[test]
    fn does_not_contest_a_settled_trump_suit() {
        let mut agent = GreedyAgent::new(0);
        let hand = vec![Card::of(Suit::Hearts, Rank::Two)];
        assert_eq!(agent.draw(hand[0], &hand, &info(Some(Suit::Spades))), None);
    }

    #[test]
    fn buries_short_suits_first() {
        let mut agent = GreedyAgent::new(0);
        let info = info(Some(Suit::Clubs));
        let merged = vec![
            Card::of(Suit::Diamonds, Rank::Nine), // lone diamond
            Card::of(Suit::Hearts, Rank::Four),
            Card::of(Suit::Hearts, Rank::Seven),
            Card::of(Suit::Hearts, Rank::Jack),
            Card::of(Suit::Spades, Rank::Five),
            Card::of(Suit::Spades, Rank::Queen),
            Card::of(Suit::Clubs, Rank::Ace),
        ];
        let selection = agent.handle_kitty(&merged, 3, &info);
        // The diamond goes, then the two spades.
        assert_eq!(selection, BTreeSet::from([0, 4, 5]));
    }

    #[test]
    fn leads_its_longest_tractor() {
        let mut agent = GreedyAgent::new(0);
        let info = info(Some(Suit::Clubs));
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Five),
            Card::of(Suit::Hearts, Rank::Five),
            Card::of(Suit::Hearts, Rank::Six),
            Card::of(Suit::Hearts, Rank::Six),
            Card::of(Suit::Spades, Rank::Nine),
            Card::of(Suit::Spades, Rank::Nine),
            Card::of(Suit::Diamonds, Rank::Ace),
        ];
        let selection = agent.lead(&hand, &info);
        assert_eq!(selection, BTreeSet::from([0, 1, 2, 3]));
        let lead: Vec<Card> = selection.iter().map(|&i| hand[i]).collect();
        assert!(rules::is_valid_lead(info.trump, &lead));
    }

    #[test]
    fn falls_back_to_a_single_lead_without_tractors() {
        let mut agent = GreedyAgent::new(0);
        let hand = vec![
            Card::of(Suit::Hearts, Rank::Five),
            Card::of(Suit::Spades, Rank::Nine),
        ];
        assert_eq!(agent.lead(&hand, &info(Some(Suit::Clubs))), BTreeSet::from([1]));
    }

    #[test]
    fn trumps_points_when_void_on_a_single_lead() {
        let mut agent = GreedyAgent::new(0);
        let info = info(Some(Suit::Clubs));
        let plays = vec![vec![Card::of(Suit::Hearts, Rank::Ten)]];
        let hand = vec![
            Card::of(Suit::Spades, Rank::Four),
            Card::of(Suit::Clubs, Rank::Nine),
        ];
        assert_eq!(agent.play(&plays, &hand, &info), BTreeSet::from([1]));
    }

    #[test]
    fn discards_when_void_with_no_points_at_stake() {
        let mut agent = GreedyAgent::new(0);
        let info = info(Some(Suit::Clubs));
        let plays = vec![vec![Card::of(Suit::Hearts, Rank::Four)]];
        let hand = vec![
            Card::of(Suit::Spades, Rank::Four),
            Card::of(Suit::Clubs, Rank::Nine),
        ];
        assert_eq!(agent.play(&plays, &hand, &info), BTreeSet::from([0]));
    }
}
