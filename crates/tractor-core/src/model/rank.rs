use core::fmt;
use serde::{Deserialize, Serialize};

/// A card rank. The last four variants are contextual: `Number` and
/// `SuitedNumber` are what trump-rank cards become once trump is fixed
/// (off the trump suit and of the trump suit respectively), and the two
/// jokers only ever exist as trump. Enumeration order is trick-strength
/// order, so derived `Ord` ranks `SuitedNumber` above `Number` and the
/// colored joker above the plain one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
    Number = 13,
    SuitedNumber = 14,
    Joker = 15,
    ColorJoker = 16,
}

impl Rank {
    pub const NATURAL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const ALL: [Rank; 17] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
        Rank::Number,
        Rank::SuitedNumber,
        Rank::Joker,
        Rank::ColorJoker,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn is_natural(self) -> bool {
        (self as u8) < 13
    }

    pub const fn is_joker(self) -> bool {
        matches!(self, Rank::Joker | Rank::ColorJoker)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Number => "#",
            Rank::SuitedNumber => "S#",
            Rank::Joker => "!",
            Rank::ColorJoker => "@",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Rank;

    #[test]
    fn enumeration_order_is_strength_order() {
        assert!(Rank::Ace < Rank::Number);
        assert!(Rank::Number < Rank::SuitedNumber);
        assert!(Rank::SuitedNumber < Rank::Joker);
        assert!(Rank::Joker < Rank::ColorJoker);
    }

    #[test]
    fn natural_ranks_exclude_contextual_values() {
        assert!(Rank::Ace.is_natural());
        assert!(!Rank::Number.is_natural());
        assert!(!Rank::ColorJoker.is_natural());
        assert_eq!(Rank::NATURAL.len(), 13);
    }

    #[test]
    fn display_matches_symbols() {
        assert_eq!(Rank::Ten.to_string(), "10");
        assert_eq!(Rank::SuitedNumber.to_string(), "S#");
        assert_eq!(Rank::ColorJoker.to_string(), "@");
    }
}
