// fixtures/shelves/tolkien.rs
//
// What an author search for "Tolkien" returns: three books with a mix of
// ratings, review counts and date formats.

use crate::fixtures::CatalogFixture;

pub struct TolkienShelf;

impl CatalogFixture for TolkienShelf {
    fn catalog_json() -> &'static str {
        r#"[
            {
                "id": 1,
                "title": "El Hobbit",
                "author": "J. R. R. Tolkien",
                "averagerating": 4.27,
                "numberreviews": 1,
                "summary": "Bilbo Bolsón, un hobbit que disfruta de una vida tranquila, es arrastrado a una aventura por el mago Gandalf y trece enanos.",
                "genre": "Fantasía",
                "publication_date": "1937-09-21T12:00:00.000Z",
                "coverimage": "https://covers.example/hobbit.jpg"
            },
            {
                "id": 2,
                "title": "La Comunidad del Anillo",
                "author": "J. R. R. Tolkien",
                "averagerating": 4.5,
                "numberreviews": 320,
                "summary": "Frodo hereda un anillo peligroso.",
                "genre": "Fantasía",
                "publication_date": "1954-07-29",
                "coverimage": "https://covers.example/comunidad.jpg"
            },
            {
                "id": 3,
                "title": "El Silmarillion",
                "author": "J. R. R. Tolkien",
                "averagerating": 3.9,
                "numberreviews": 0,
                "summary": "",
                "genre": "Mitología",
                "publication_date": null,
                "coverimage": ""
            }
        ]"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolkien_shelf_decodes() {
        let books = TolkienShelf::books();
        assert_eq!(books.len(), 3);
        assert!(books.iter().all(|b| b.author == "J. R. R. Tolkien"));
        assert!(books[2].publication_date.is_none());
    }
}
