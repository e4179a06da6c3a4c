use std::rc::Rc;

use shared::WeddingInfo;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod hooks;
mod pages;
mod services;

use pages::{GalleryPage, IntroPage, MainPage, WishlistPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Intro,
    #[at("/main")]
    Main,
    #[at("/gallery")]
    Gallery,
    #[at("/wishlist")]
    Wishlist,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Intro => html! { <IntroPage /> },
        Route::Main => html! { <MainPage /> },
        Route::Gallery => html! { <GalleryPage /> },
        Route::Wishlist => html! { <WishlistPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Intro} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    // Wedding facts are built once at startup and shared read-only with
    // every page through the context.
    let wedding_info = use_memo((), |_| WeddingInfo::default());

    html! {
        <ContextProvider<Rc<WeddingInfo>> context={Rc::clone(&wedding_info)}>
            <BrowserRouter>
                <div class="app-background">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<Rc<WeddingInfo>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
