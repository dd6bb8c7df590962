//! Plain-text rendering of a finished round.

use tractor_core::game::RoundSummary;
use tractor_core::model::card::Card;

pub fn print_round(summary: &RoundSummary) {
    println!("=== Round {} ===", summary.round);
    match summary.trump_suit {
        Some(suit) => println!("Trump: {}{suit}", summary.trump_rank),
        None => println!("Trump: rank {} only, no suit declared", summary.trump_rank),
    }
    println!("Host: seat {}", summary.host);
    println!(
        "Partner call: {} (instance {})",
        summary.partner_call.card, summary.partner_call.instance
    );

    for (seat, hand) in summary.hands.iter().enumerate() {
        println!("Seat {seat}: {}", join(hand));
    }
    println!(
        "Kitty: {} ({} points)",
        join(&summary.kitty),
        summary.kitty_points
    );

    for (number, trick) in summary.tricks.iter().enumerate() {
        let plays: Vec<String> = trick
            .plays
            .iter()
            .map(|play| format!("{}:[{}]", play.seat, join(&play.cards)))
            .collect();
        println!(
            "Trick {:>2}: {} -> seat {} (+{})",
            number + 1,
            plays.join(" "),
            trick.winner,
            trick.points
        );
    }

    for (seat, score) in summary.scores.iter().enumerate() {
        println!("Seat {seat} captured {score} points");
    }
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
