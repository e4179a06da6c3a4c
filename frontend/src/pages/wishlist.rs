use yew::prelude::*;

use crate::components::PageLayout;
use crate::services::platform;

/// One gift-registry entry. Purely client-side; "sold out" lives only in
/// the session.
#[derive(Clone, PartialEq)]
struct RegistryItem {
    id: u32,
    name: &'static str,
    image: &'static str,
    price: &'static str,
    url: &'static str,
    sold_out: bool,
}

fn initial_items() -> Vec<RegistryItem> {
    vec![
        RegistryItem {
            id: 1,
            name: "홈 커피머신",
            image: "/assets/wishlist/coffee-machine.jpg",
            price: "350,000원",
            url: "https://example.com/coffee-machine",
            sold_out: false,
        },
        RegistryItem {
            id: 2,
            name: "캐리어 세트",
            image: "/assets/wishlist/luggage-set.jpg",
            price: "280,000원",
            url: "https://example.com/luggage-set",
            sold_out: true,
        },
        RegistryItem {
            id: 3,
            name: "식기 세트",
            image: "/assets/wishlist/dinnerware.jpg",
            price: "150,000원",
            url: "https://example.com/dinnerware",
            sold_out: false,
        },
        RegistryItem {
            id: 4,
            name: "침구 세트",
            image: "/assets/wishlist/bedding-set.jpg",
            price: "220,000원",
            url: "https://example.com/bedding-set",
            sold_out: false,
        },
        RegistryItem {
            id: 5,
            name: "에어프라이어",
            image: "/assets/wishlist/air-fryer.jpg",
            price: "120,000원",
            url: "https://example.com/air-fryer",
            sold_out: false,
        },
    ]
}

#[function_component(WishlistPage)]
pub fn wishlist_page() -> Html {
    let items = use_state(initial_items);

    let mark_purchased = {
        let items = items.clone();
        Callback::from(move |id: u32| {
            if !platform::confirm("이 상품을 구매 완료로 표시하시겠습니까?") {
                return;
            }
            let updated = items
                .iter()
                .map(|item| {
                    if item.id == id {
                        RegistryItem { sold_out: true, ..item.clone() }
                    } else {
                        item.clone()
                    }
                })
                .collect::<Vec<_>>();
            items.set(updated);
        })
    };

    html! {
        <PageLayout>
            <h1 class="page-title">{"위시리스트"}</h1>

            <section class="card wishlist-notice">
                <p>
                    {"저희의 새 출발을 위해 필요한 물품들입니다. \
                      마음을 담아 선물해주시면 소중히 간직하고 사용하겠습니다."}
                </p>
                <p class="wishlist-hint">
                    {"* 구매하신 경우 중복 선물을 방지하기 위해 '구매 완료'로 표시해주세요."}
                </p>
            </section>

            <div class="wishlist-grid">
                {for items.iter().map(|item| {
                    let on_purchase = {
                        let mark_purchased = mark_purchased.clone();
                        let id = item.id;
                        Callback::from(move |_: MouseEvent| mark_purchased.emit(id))
                    };
                    html! {
                        <div class="card wishlist-item">
                            {if item.sold_out {
                                html! {
                                    <div class="wishlist-sold-out-overlay">
                                        <span>{"SOLD OUT"}</span>
                                    </div>
                                }
                            } else { html! {} }}

                            <div class="wishlist-image">
                                <img src={item.image} alt={item.name} />
                                <span class="wishlist-price">{item.price}</span>
                            </div>

                            <h3>{item.name}</h3>

                            <div class="wishlist-actions">
                                {if item.sold_out {
                                    html! {
                                        <span class="wishlist-link disabled">{"구매 링크"}</span>
                                    }
                                } else {
                                    html! {
                                        <>
                                            <a
                                                href={item.url}
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="wishlist-link"
                                            >
                                                {"구매 링크"}
                                            </a>
                                            <button class="btn btn-secondary" onclick={on_purchase}>
                                                {"구매 완료"}
                                            </button>
                                        </>
                                    }
                                }}
                            </div>
                        </div>
                    }
                })}
            </div>
        </PageLayout>
    }
}
