pub mod admin;
pub mod draw;
pub mod history;

pub use admin::reset;
pub use draw::{draw_once, run};
pub use history::{show_history, show_wins};

use drawtick_lottery::{DrawRecord, Outcome};

/// One-line rendering of a drawn or guessed outcome.
pub fn describe(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Toto(ticket) => {
            let numbers: Vec<String> = ticket.numbers.iter().map(|n| format!("{:2}", n)).collect();
            format!("{} + {:2}", numbers.join(" "), ticket.additional)
        }
    }
}

pub fn print_record(record: &DrawRecord) {
    let guess = record
        .guesses
        .first()
        .map(describe)
        .unwrap_or_else(|| "-".to_string());

    println!(
        "#{} {} [{}] draw {} | guess {} | score {}",
        record.id,
        record.timestamp.format("%H:%M:%S"),
        record.lottery_type,
        describe(&record.draw),
        guess,
        record.score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawtick_lottery::TotoTicket;

    #[test]
    fn test_describe_toto() {
        let ticket = TotoTicket::new([1, 2, 13, 24, 35, 49], 7).unwrap();
        assert_eq!(describe(&Outcome::Toto(ticket)), " 1  2 13 24 35 49 +  7");
    }
}
