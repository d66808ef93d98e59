// fixtures/shelves/mixed.rs
//
// Books by different authors, used for combined and title searches.

use crate::fixtures::CatalogFixture;

pub struct MixedShelf;

impl CatalogFixture for MixedShelf {
    fn catalog_json() -> &'static str {
        r#"[
            {
                "id": 10,
                "title": "Cien años de soledad",
                "author": "Gabriel García Márquez",
                "averagerating": 4.9,
                "numberreviews": 1520,
                "summary": "La historia de la familia Buendía a lo largo de siete generaciones en el pueblo ficticio de Macondo.",
                "genre": "Realismo mágico",
                "publication_date": "1967-05-30",
                "coverimage": "https://covers.example/cien.jpg"
            },
            {
                "id": 11,
                "title": "Rayuela",
                "author": "Julio Cortázar",
                "averagerating": 0.0,
                "numberreviews": 2,
                "summary": "Una novela que puede leerse de varias maneras.",
                "genre": "Novela",
                "publication_date": "1963-06-28T12:00:00",
                "coverimage": "https://covers.example/rayuela.jpg"
            }
        ]"#
    }
}
