//! Loading placeholder tiles for video grids.

use leptos::prelude::*;

/// A grid of shimmering placeholder tiles shown while a list loads.
#[component]
pub fn SkeletonGrid(#[prop(default = 6)] count: usize) -> impl IntoView {
    view! {
        <div class="skeleton-grid" aria-hidden="true">
            {(0..count)
                .map(|_| view! { <span class="skeleton-grid__tile"></span> })
                .collect::<Vec<_>>()}
        </div>
    }
}
