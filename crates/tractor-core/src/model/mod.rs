pub mod card;
pub mod deck;
pub mod hand;
pub mod rank;
pub mod suit;
pub mod trump;
