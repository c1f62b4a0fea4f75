//! Console rendering of a board pair: the player's own fleet on the left,
//! the deduced opponent view on the right.

use crate::board::Board;
use crate::config::BOARD_SIZE;

const LEFT_PAD: &str = "  ";
const DELIMITER: &str = "    ";

fn column_header() -> String {
    let mut out = String::from("  ");
    for x in 0..BOARD_SIZE {
        if x > 0 {
            out.push(' ');
        }
        out.push((b'A' + x) as char);
    }
    out.push_str("  ");
    out
}

/// Print both boards side by side with lettered columns and numbered rows.
pub fn print_board_pair(own: &Board, tracking: &Board) {
    let header = column_header();
    println!("{}{}{}{}", LEFT_PAD, header, DELIMITER, header);
    for y in 0..BOARD_SIZE {
        let label = y + 1;
        println!(
            "{}{} {} {}{}{} {} {}",
            LEFT_PAD,
            label,
            own.render_row(y),
            label,
            DELIMITER,
            label,
            tracking.render_row(y),
            label
        );
    }
    println!("{}{}{}{}", LEFT_PAD, header, DELIMITER, header);
}
