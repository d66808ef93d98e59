// web_app/components/book.rs - Book result components
//
// BookCard renders one catalog entry; ResultsList lays out a slice of them.
// Cover and title both link to the book page, carrying the book id as
// navigation state.

use leptos::prelude::*;

use super::common::StarRating;
use crate::web_app::display::{
    genre_label, publication_label, rating_label, review_count_label, truncate_summary,
};
use crate::web_app::model::Book;
use crate::web_app::navigation::{use_app_navigate, NavRequest, Route};

/// Book card component
///
/// Cover, title, author, star row with numeric rating and review count,
/// shortened synopsis, genre and publication date (omitted when unknown).
#[component]
pub fn BookCard(
    /// Book to display
    book: Book,
) -> impl IntoView {
    let navigator = use_app_navigate();
    let id = book.id;
    let open_book = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        navigator.go(NavRequest::book(id));
    };

    let summary = truncate_summary(&book.summary).into_owned();
    let published = book.publication_date.map(publication_label);

    view! {
        <article class="book-card flex gap-4 p-4 bg-white border border-gray-200 rounded-lg shadow-sm">
            <a href=Route::Book.path() class="shrink-0" on:click=open_book>
                <img
                    src=book.cover_image_url.clone()
                    alt=book.title.clone()
                    class="w-24 h-36 object-cover rounded bg-gray-100"
                    loading="lazy"
                />
            </a>

            <div class="flex flex-col gap-1 min-w-0">
                <h3 class="text-lg font-semibold text-gray-900">
                    <a href=Route::Book.path() class="hover:underline" on:click=open_book>
                        {book.title.clone()}
                    </a>
                </h3>
                <p class="text-gray-700">{book.author.clone()}</p>

                <div class="flex items-center gap-2 text-sm text-gray-600">
                    <StarRating rating=book.average_rating />
                    <span class="font-medium">{rating_label(book.average_rating)}</span>
                    <span>{review_count_label(book.number_of_reviews)}</span>
                </div>

                <p class="text-sm text-gray-600">{summary}</p>
                <p class="text-sm text-gray-500">{genre_label(&book.genre)}</p>
                {published.map(|label| view! {
                    <p class="text-sm text-gray-500">{label}</p>
                })}
            </div>
        </article>
    }
}

/// Vertical list of book cards
#[component]
pub fn ResultsList(
    /// Books in catalog order
    books: Vec<Book>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4">
            {books
                .into_iter()
                .map(|book| view! { <BookCard book=book /> })
                .collect_view()}
        </div>
    }
}
