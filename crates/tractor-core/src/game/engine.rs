use crate::agent::{Agent, GameInfo, PartnerCall};
use crate::game::summary::{RoundSummary, SeatPlay, TrickRecord};
use crate::model::card::{Card, DECK_SIZE};
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use crate::model::trump::Trump;
use crate::rules;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use std::fmt;

/// Cards set aside for the kitty before sizing hands.
const KITTY_RESERVE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub seed: u64,
    /// How many illegal answers to tolerate per decision before giving
    /// up. `None` re-asks forever, matching table play; tests set a
    /// bound so a broken agent fails instead of hanging.
    pub max_retries: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_retries: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Kitty,
    PartnerCall,
    Lead,
    Play,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Decision::Kitty => "kitty exchange",
            Decision::PartnerCall => "partner call",
            Decision::Lead => "lead",
            Decision::Play => "play",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    TooFewPlayers(usize),
    RetriesExhausted { seat: usize, decision: Decision },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::TooFewPlayers(count) => {
                write!(f, "a game needs at least 4 players, got {count}")
            }
            EngineError::RetriesExhausted { seat, decision } => {
                write!(f, "seat {seat} never produced a legal {decision}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Drives one round end to end: shuffle and deal with live trump
/// declaration, kitty exchange, partner call, then the trick loop. Owns
/// all hands and the kitty; agents only ever see copies.
pub struct GameEngine {
    num_players: usize,
    num_decks: usize,
    cards_per_player: usize,
    max_retries: Option<usize>,
    agents: Vec<Box<dyn Agent>>,
    hands: Vec<Hand>,
    kitty: Vec<Card>,
    round: u32,
    host: Option<usize>,
    trump: Trump,
    partner_call: Option<PartnerCall>,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(agents: Vec<Box<dyn Agent>>, config: EngineConfig) -> Result<Self, EngineError> {
        let num_players = agents.len();
        if num_players < 4 {
            return Err(EngineError::TooFewPlayers(num_players));
        }
        let num_decks = (num_players + 1) / 2;
        let cards_per_player = (num_decks * DECK_SIZE - KITTY_RESERVE) / num_players;
        Ok(Self {
            num_players,
            num_decks,
            cards_per_player,
            max_retries: config.max_retries,
            agents,
            hands: Vec::new(),
            kitty: Vec::new(),
            round: 0,
            host: None,
            trump: Trump::new(None, Rank::Two),
            partner_call: None,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    pub fn num_players(&self) -> usize {
        self.num_players
    }

    pub fn num_decks(&self) -> usize {
        self.num_decks
    }

    pub fn cards_per_player(&self) -> usize {
        self.cards_per_player
    }

    /// Plays one full round and returns its record. Fails only on a
    /// construction-time misconfiguration or an exhausted retry budget;
    /// with the default unbounded budget an agent that never answers
    /// legally stalls the round instead.
    pub fn play_round(&mut self) -> Result<RoundSummary, EngineError> {
        let trump_rank = Rank::Two;
        self.partner_call = None;

        let trump_suit = self.deal(trump_rank);
        self.trump = Trump::new(trump_suit, trump_rank);
        let host = self.host.unwrap_or(0);

        for hand in &mut self.hands {
            hand.sort_for_display(self.trump);
        }

        let info = self.info(Some(host));
        for agent in &mut self.agents {
            agent.initialize_round(&info);
        }

        self.exchange_kitty(host)?;
        let partner_call = self.settle_partner_call(host)?;

        let hands_dealt: Vec<Vec<Card>> = self.hands.iter().map(|h| h.cards().to_vec()).collect();
        let kitty = self.kitty.clone();

        let (tricks, scores) = self.trick_loop(host)?;

        let summary = RoundSummary {
            round: self.round,
            host,
            trump_suit: self.trump.suit,
            trump_rank: self.trump.rank,
            partner_call,
            hands: hands_dealt,
            kitty: kitty.clone(),
            tricks,
            scores,
            kitty_points: rules::points_in(&kitty),
        };
        self.round += 1;
        Ok(summary)
    }

    /// Shuffles and deals round-robin, offering a trump declaration after
    /// every card. Leftover cards become the kitty. Returns the settled
    /// trump suit, `None` when nobody declared or a joker pair forced a
    /// suit-less round.
    fn deal(&mut self, trump_rank: Rank) -> Option<Suit> {
        let mut deck = Deck::standard(self.num_decks);
        deck.shuffle_in_place(&mut self.rng);
        self.hands = (0..self.num_players).map(|_| Hand::new()).collect();

        let mut declared_suit: Option<Suit> = None;
        let mut declared_seat: Option<usize> = None;
        let mut declared_count = 0usize;
        // A joker-pair declaration fixes a suit-less trump for the round.
        let mut locked = false;

        let mut next = 0usize;
        for _ in 0..self.cards_per_player {
            for seat in 0..self.num_players {
                let card = deck.cards()[next];
                next += 1;
                self.hands[seat].add(card);

                let info = GameInfo {
                    num_players: self.num_players,
                    num_decks: self.num_decks,
                    host: self.host,
                    trump: Trump::new(declared_suit.filter(|&s| s.is_natural()), trump_rank),
                    partner_call: self.partner_call,
                    round: self.round,
                };
                let view = self.hands[seat].cards().to_vec();
                let nomination = self.agents[seat].draw(card, &view, &info);

                if locked {
                    continue;
                }
                if let Some(nomination) = nomination {
                    if let Some(first) = Self::check_declaration(
                        &nomination,
                        &view,
                        declared_seat,
                        declared_count,
                        seat,
                    ) {
                        declared_suit = Some(first.base_suit());
                        declared_seat = Some(seat);
                        declared_count = nomination.len();
                        locked = first.is_joker();
                    }
                }
            }
        }

        self.kitty = deck.cards()[next..].to_vec();
        if self.round == 0 {
            // Nobody declared: the fixed initial seat hosts.
            self.host = declared_seat.or(Some(0));
        }
        declared_suit.filter(|&suit| suit.is_natural())
    }

    /// Validates a trump nomination against the standing declaration.
    /// Returns the nominated card when the declaration is accepted.
    fn check_declaration(
        nomination: &BTreeSet<usize>,
        hand: &[Card],
        declared_seat: Option<usize>,
        declared_count: usize,
        seat: usize,
    ) -> Option<Card> {
        let &first_index = nomination.first()?;
        if declared_seat == Some(seat) {
            return None;
        }
        let first = *hand.get(first_index)?;
        if !nomination
            .iter()
            .all(|&index| hand.get(index).is_some_and(|&c| c == first))
        {
            return None;
        }
        if first.is_joker() {
            // Only a same-colored joker pair declares, and it always
            // stands.
            return (nomination.len() > 1).then_some(first);
        }
        (nomination.len() > declared_count).then_some(first)
    }

    fn exchange_kitty(&mut self, host: usize) -> Result<(), EngineError> {
        let kitty_size = self.kitty.len();
        let mut merged: Vec<Card> = self.kitty.clone();
        merged.extend(self.hands[host].cards().iter().copied());
        let info = self.info(Some(host));

        let mut tries = 0usize;
        let selection = loop {
            let selection = self.agents[host].handle_kitty(&merged, kitty_size, &info);
            if selection.len() == kitty_size && selection.iter().all(|&i| i < merged.len()) {
                break selection;
            }
            tries += 1;
            self.check_retry_budget(tries, host, Decision::Kitty)?;
        };

        let mut buried = Vec::with_capacity(kitty_size);
        let mut remaining = Vec::with_capacity(merged.len() - kitty_size);
        for (index, card) in merged.into_iter().enumerate() {
            if selection.contains(&index) {
                buried.push(card);
            } else {
                remaining.push(card);
            }
        }
        self.kitty = buried;
        let mut hand = Hand::with_cards(remaining);
        hand.sort_for_display(self.trump);
        self.hands[host] = hand;
        Ok(())
    }

    fn settle_partner_call(&mut self, host: usize) -> Result<PartnerCall, EngineError> {
        let info = self.info(Some(host));
        let hand = self.hands[host].cards().to_vec();
        let kitty = self.kitty.clone();

        let mut tries = 0usize;
        let call = loop {
            let call = self.agents[host].call_partner(&hand, &kitty, &info);
            if !self.trump.is_trump(call.card) && (1..self.num_decks).contains(&call.instance) {
                break call;
            }
            tries += 1;
            self.check_retry_budget(tries, host, Decision::PartnerCall)?;
        };
        self.partner_call = Some(call);
        Ok(call)
    }

    fn trick_loop(&mut self, host: usize) -> Result<(Vec<TrickRecord>, Vec<u32>), EngineError> {
        let mut lead_seat = host;
        let mut scores = vec![0u32; self.num_players];
        let mut tricks = Vec::new();

        while !self.hands[lead_seat].is_empty() {
            let info = self.info(Some(host));

            let mut tries = 0usize;
            let lead_cards = loop {
                let view = self.hands[lead_seat].cards().to_vec();
                let selection = self.agents[lead_seat].lead(&view, &info);
                if let Some(cards) = Self::cards_at(&view, &selection) {
                    if rules::is_valid_lead(self.trump, &cards) {
                        break self.hands[lead_seat].remove_indices(&selection);
                    }
                }
                tries += 1;
                self.check_retry_budget(tries, lead_seat, Decision::Lead)?;
            };

            let mut plays = vec![lead_cards];
            let mut seats = vec![lead_seat];
            for offset in 1..self.num_players {
                let seat = (lead_seat + offset) % self.num_players;
                let mut tries = 0usize;
                let cards = loop {
                    let view = self.hands[seat].cards().to_vec();
                    let selection = self.agents[seat].play(&plays, &view, &info);
                    if let Some(cards) = Self::cards_at(&view, &selection) {
                        if rules::is_valid_play(self.trump, &plays[0], &cards, &view) {
                            break self.hands[seat].remove_indices(&selection);
                        }
                    }
                    tries += 1;
                    self.check_retry_budget(tries, seat, Decision::Play)?;
                };
                plays.push(cards);
                seats.push(seat);
            }

            let winning = rules::winning_index(self.trump, &plays);
            let winner = seats[winning];
            let points = rules::points_in_plays(&plays);
            scores[winner] += points;
            tricks.push(TrickRecord {
                leader: lead_seat,
                plays: seats
                    .into_iter()
                    .zip(plays)
                    .map(|(seat, cards)| SeatPlay { seat, cards })
                    .collect(),
                winner,
                points,
            });
            lead_seat = winner;
        }

        Ok((tricks, scores))
    }

    fn cards_at(hand: &[Card], indices: &BTreeSet<usize>) -> Option<Vec<Card>> {
        indices
            .iter()
            .map(|&index| hand.get(index).copied())
            .collect()
    }

    fn check_retry_budget(
        &self,
        tries: usize,
        seat: usize,
        decision: Decision,
    ) -> Result<(), EngineError> {
        match self.max_retries {
            Some(cap) if tries > cap => Err(EngineError::RetriesExhausted { seat, decision }),
            _ => Ok(()),
        }
    }

    fn info(&self, host: Option<usize>) -> GameInfo {
        GameInfo {
            num_players: self.num_players,
            num_decks: self.num_decks,
            host,
            trump: self.trump,
            partner_call: self.partner_call,
            round: self.round,
        }
    }
}
