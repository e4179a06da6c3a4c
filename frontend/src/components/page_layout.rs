use yew::prelude::*;

use crate::components::PageNavigation;

#[derive(Properties, PartialEq)]
pub struct PageLayoutProps {
    pub children: Children,
    #[prop_or(true)]
    pub show_navigation: bool,
}

/// Shared page chrome: the centered content column and, for every page
/// except the intro, the bottom navigation bar.
#[function_component(PageLayout)]
pub fn page_layout(props: &PageLayoutProps) -> Html {
    html! {
        <div class="page">
            <main class="page-content">
                {props.children.clone()}
            </main>
            {if props.show_navigation {
                html! { <PageNavigation /> }
            } else { html! {} }}
        </div>
    }
}
