//! German captions shown around a diagram.

use chrono::{Local, NaiveDate};
use komposita_core::Direction;

/// Pivot as it reads inside a compound: `Wahl-` or `-programm`
pub fn pivot_label(pivot: &str, direction: Direction) -> String {
    match direction {
        Direction::ExpandFirst => format!("{pivot}-"),
        Direction::ExpandSecond => format!("-{}", pivot.to_lowercase()),
    }
}

/// Plain heading for a pivot
pub fn heading(pivot: &str, direction: Direction) -> String {
    format!("Nominalkomposita mit {}", pivot_label(pivot, direction))
}

/// Which manifestos a tree diagram is drawn from
pub fn category_caption(categories: &[String]) -> String {
    match categories {
        [single] => format!("im Wahlprogramm von: {single}"),
        many => format!("in den Wahlprogrammen von: {}", many.join(", ")),
    }
}

pub fn edition_stamp(date: NaiveDate) -> String {
    format!("Stand {}", date.format("%d.%m.%Y"))
}

/// Edition stamp for the local date
pub fn today_stamp() -> String {
    edition_stamp(Local::now().date_naive())
}
