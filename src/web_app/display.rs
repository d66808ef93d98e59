// web_app/display.rs - Rendering rules for result cards
//
// Everything here is pure so the card component stays a thin view over it.

use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};

/// Number of star positions on a card
pub const STAR_SLOTS: usize = 5;

/// Summaries longer than this are cut for display
pub const SYNOPSIS_MAX_LENGTH: usize = 80;

const ELLIPSIS: &str = "...";

/// Shown when a search settles without books
pub const EMPTY_RESULTS_MESSAGE: &str = "No se encontraron libros para los parámetros especificados";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarCounts {
    pub filled: usize,
    pub empty: usize,
}

/// Filled stars = floor(rating), clamped to [0, 5]. NaN counts as zero.
pub fn star_counts(rating: f64) -> StarCounts {
    let filled = if rating.is_finite() && rating > 0.0 {
        (rating.floor() as usize).min(STAR_SLOTS)
    } else {
        0
    };
    StarCounts {
        filled,
        empty: STAR_SLOTS - filled,
    }
}

/// Star positions in order, `true` for a filled star
pub fn star_slots(rating: f64) -> [bool; STAR_SLOTS] {
    let filled = star_counts(rating).filled;
    std::array::from_fn(|i| i < filled)
}

pub fn rating_label(rating: f64) -> String {
    format!("{:.1}", rating)
}

pub fn review_noun(count: u32) -> &'static str {
    if count == 1 {
        "calificación"
    } else {
        "calificaciones"
    }
}

/// "(12 calificaciones)"
pub fn review_count_label(count: u32) -> String {
    format!("({} {})", count, review_noun(count))
}

/// First 77 characters plus "..." when the summary exceeds 80 characters.
/// Counts characters, not bytes, so accented text is never split.
pub fn truncate_summary(summary: &str) -> Cow<'_, str> {
    if summary.chars().count() <= SYNOPSIS_MAX_LENGTH {
        return Cow::Borrowed(summary);
    }
    let keep = SYNOPSIS_MAX_LENGTH - ELLIPSIS.len();
    let cut: String = summary.chars().take(keep).collect();
    Cow::Owned(cut + ELLIPSIS)
}

pub fn genre_label(genre: &str) -> String {
    format!("Genero: {}", genre)
}

/// Long Spanish date, e.g. "5 de marzo de 2020"
pub fn long_date_es(date: NaiveDate) -> String {
    let month = MONTHS_ES[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

pub fn publication_label(date: NaiveDate) -> String {
    format!("Publicado: {}", long_date_es(date))
}
