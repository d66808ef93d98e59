// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used throughout the application.
// Pure, stateless components that receive all data via props.

use leptos::prelude::*;

use crate::web_app::display::{rating_label, star_slots, EMPTY_RESULTS_MESSAGE};

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12" role="status">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-amber-700"></div>
            {(!message.is_empty()).then(|| view! {
                <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
            })}
        </div>
    }
}

/// Empty results message
#[component]
pub fn EmptyResults() -> impl IntoView {
    view! {
        <p class="text-center py-16 text-gray-600">{EMPTY_RESULTS_MESSAGE}</p>
    }
}

/// Star rating display component
///
/// Five positions; floor(rating) of them are filled.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-0.5" title=format!("Calificación: {}", rating_label(rating))>
            {star_slots(rating).into_iter().map(|filled| {
                let (class, glyph) = if filled {
                    ("star star-filled text-yellow-400 text-lg", "★")
                } else {
                    ("star star-empty text-gray-400 text-lg", "☆")
                };
                view! { <span class=class>{glyph}</span> }
            }).collect_view()}
        </div>
    }
}

