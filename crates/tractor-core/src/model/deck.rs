use crate::model::card::{Card, DECK_SIZE};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// One or more 54-card decks combined, as used for a multi-deck round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard(num_decks: usize) -> Self {
        let mut cards = Vec::with_capacity(num_decks * DECK_SIZE);
        for _ in 0..num_decks {
            for id in 0..DECK_SIZE as u8 {
                if let Some(card) = Card::from_id(id) {
                    cards.push(card);
                }
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(num_decks: usize, rng: &mut R) -> Self {
        let mut deck = Self::standard(num_decks);
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(num_decks: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(num_decks, &mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
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
}
