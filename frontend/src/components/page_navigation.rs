use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Bottom navigation across the three inner pages.
#[function_component(PageNavigation)]
pub fn page_navigation() -> Html {
    let current = use_route::<Route>();

    let pages = [
        (Route::Main, "정보", "📝"),
        (Route::Gallery, "사진", "🖼️"),
        (Route::Wishlist, "선물", "🎁"),
    ];

    html! {
        <nav class="page-navigation">
            <div class="page-navigation-bar">
                {for pages.iter().map(|(route, name, icon)| {
                    let active = current.as_ref() == Some(route);
                    let class = if active { "nav-item active" } else { "nav-item" };
                    html! {
                        <Link<Route> to={route.clone()} classes={class}>
                            <span class="nav-icon">{*icon}</span>
                            <span class="nav-label">{*name}</span>
                        </Link<Route>>
                    }
                })}
            </div>
        </nav>
    }
}
