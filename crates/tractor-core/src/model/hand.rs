use crate::model::card::Card;
use crate::model::trump::Trump;
use std::collections::BTreeSet;

/// A player's cards, owned by the engine. Insertion order is preserved
/// while dealing; once trump settles the engine sorts hands into display
/// order and index-based selections refer to that order.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the cards at the given indices, returning them in ascending
    /// index order. Indices must be in bounds.
    pub fn remove_indices(&mut self, indices: &BTreeSet<usize>) -> Vec<Card> {
        let mut removed: Vec<Card> = indices
            .iter()
            .rev()
            .map(|&index| self.cards.remove(index))
            .collect();
        removed.reverse();
        removed
    }

    pub fn sort_for_display(&mut self, trump: Trump) {
        self.cards.sort_by(|a, b| trump.display_cmp(*a, *b));
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::Hand;
    use crate::model::card::Card;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use crate::model::trump::Trump;
    use std::collections::BTreeSet;

    #[test]
    fn add_preserves_insertion_order() {
        let mut hand = Hand::new();
        hand.add(Card::of(Suit::Spades, Rank::King));
        hand.add(Card::of(Suit::Clubs, Rank::Two));
        assert_eq!(hand.cards()[0], Card::of(Suit::Spades, Rank::King));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn remove_indices_returns_cards_in_index_order() {
        let mut hand = Hand::with_cards(vec![
            Card::of(Suit::Clubs, Rank::Two),
            Card::of(Suit::Clubs, Rank::Five),
            Card::of(Suit::Clubs, Rank::Nine),
            Card::of(Suit::Clubs, Rank::King),
        ]);
        let indices: BTreeSet<usize> = [1, 3].into_iter().collect();
        let removed = hand.remove_indices(&indices);
        assert_eq!(
            removed,
            vec![Card::of(Suit::Clubs, Rank::Five), Card::of(Suit::Clubs, Rank::King)]
        );
        assert_eq!(
            hand.cards(),
            &[Card::of(Suit::Clubs, Rank::Two), Card::of(Suit::Clubs, Rank::Nine)]
        );
    }

    #[test]
    fn sort_for_display_moves_trump_to_the_back() {
        let trump = Trump::new(Some(Suit::Clubs), Rank::Two);
        let mut hand = Hand::with_cards(vec![
            Card::of(Suit::Clubs, Rank::Three),
            Card::of(Suit::Spades, Rank::Ace),
            Card::of(Suit::Hearts, Rank::Two),
        ]);
        hand.sort_for_display(trump);
        assert_eq!(hand.cards()[0], Card::of(Suit::Spades, Rank::Ace));
        assert_eq!(hand.cards()[1], Card::of(Suit::Clubs, Rank::Three));
        assert_eq!(hand.cards()[2], Card::of(Suit::Hearts, Rank::Two));
    }
}
