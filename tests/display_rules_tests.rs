// tests/display_rules_tests.rs - Result card rendering rules
//
// Runs the card rules over decoded catalog fixtures, the way BookCard does:
// stars, numeric rating, review count, synopsis, genre and date lines.

use buena_leida_web::fixtures::{CatalogFixture, MixedShelf, TolkienShelf};
use buena_leida_web::web_app::display::*;
use buena_leida_web::web_app::model::Book;

fn book(books: &[Book], id: i64) -> &Book {
    books
        .iter()
        .find(|b| b.id == id)
        .unwrap_or_else(|| panic!("fixture book {} missing", id))
}

#[test]
fn test_hobbit_card_lines() {
    let books = TolkienShelf::books();
    let hobbit = book(&books, 1);

    assert_eq!(star_counts(hobbit.average_rating), StarCounts { filled: 4, empty: 1 });
    assert_eq!(rating_label(hobbit.average_rating), "4.3");
    assert_eq!(review_count_label(hobbit.number_of_reviews), "(1 calificación)");
    assert_eq!(genre_label(&hobbit.genre), "Genero: Fantasía");
    assert_eq!(
        hobbit.publication_date.map(publication_label).as_deref(),
        Some("Publicado: 21 de septiembre de 1937")
    );
}

#[test]
fn test_long_synopsis_is_cut_to_eighty_chars() {
    let books = TolkienShelf::books();
    let hobbit = book(&books, 1);
    assert!(hobbit.summary.chars().count() > SYNOPSIS_MAX_LENGTH);

    let shown = truncate_summary(&hobbit.summary);
    assert_eq!(shown.chars().count(), SYNOPSIS_MAX_LENGTH);
    assert!(shown.ends_with("..."));
    assert!(shown.starts_with("Bilbo Bolsón, un hobbit"));
    let kept: String = hobbit.summary.chars().take(SYNOPSIS_MAX_LENGTH - 3).collect();
    assert_eq!(shown, format!("{}...", kept));
}

#[test]
fn test_short_and_empty_synopsis_unchanged() {
    let books = TolkienShelf::books();
    assert_eq!(truncate_summary(&book(&books, 2).summary), "Frodo hereda un anillo peligroso.");
    assert_eq!(truncate_summary(&book(&books, 3).summary), "");
}

#[test]
fn test_missing_date_omits_publication_line() {
    let books = TolkienShelf::books();
    let silmarillion = book(&books, 3);
    assert!(silmarillion.publication_date.map(publication_label).is_none());
    assert_eq!(review_count_label(silmarillion.number_of_reviews), "(0 calificaciones)");
    assert_eq!(star_counts(silmarillion.average_rating).filled, 3);
}

#[test]
fn test_mixed_shelf_card_lines() {
    let books = MixedShelf::books();

    let cien = book(&books, 10);
    assert_eq!(star_slots(cien.average_rating), [true, true, true, true, false]);
    assert_eq!(rating_label(cien.average_rating), "4.9");
    assert_eq!(review_count_label(cien.number_of_reviews), "(1520 calificaciones)");
    assert_eq!(
        cien.publication_date.map(publication_label).as_deref(),
        Some("Publicado: 30 de mayo de 1967")
    );

    let rayuela = book(&books, 11);
    assert_eq!(star_counts(rayuela.average_rating), StarCounts { filled: 0, empty: 5 });
    assert_eq!(rating_label(rayuela.average_rating), "0.0");
    assert_eq!(review_count_label(rayuela.number_of_reviews), "(2 calificaciones)");
    assert_eq!(
        rayuela.publication_date.map(long_date_es).as_deref(),
        Some("28 de junio de 1963")
    );
}

#[test]
fn test_star_total_is_always_five() {
    for rating in [-1.0, 0.0, 0.99, 2.5, 4.999, 5.0, 7.3, f64::NAN, f64::INFINITY] {
        let counts = star_counts(rating);
        assert_eq!(counts.filled + counts.empty, STAR_SLOTS, "rating {}", rating);
    }
}

#[test]
fn test_empty_message_text() {
    assert_eq!(
        EMPTY_RESULTS_MESSAGE,
        "No se encontraron libros para los parámetros especificados"
    );
}
