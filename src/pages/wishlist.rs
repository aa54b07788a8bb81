//! Wishlist detail page: item cards with funding progress and a contribute
//! dialog. Data comes from the mock fixtures layer keyed by the route id.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::mock;
use crate::net::types::{Wishlist, WishlistItem};

/// Parse and bound a contribution amount against what the item still needs.
fn validate_contribution(amount: &str, remaining: f64) -> Result<f64, &'static str> {
    let Ok(value) = amount.trim().parse::<f64>() else {
        return Err("Please enter a valid amount");
    };
    if !value.is_finite() || value <= 0.0 {
        return Err("Amount must be greater than zero");
    }
    if value > remaining {
        return Err("Amount exceeds what this item still needs");
    }
    Ok(value)
}

fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

async fn fetch_wishlist(_id: String) -> (Wishlist, Vec<WishlistItem>) {
    mock::simulated_latency().await;
    (mock::birthday_wishlist(), mock::birthday_items())
}

#[component]
fn ItemCard(item: WishlistItem, on_contribute: Callback<WishlistItem>) -> impl IntoView {
    let percent = item.funded_percent();
    let remaining = item.remaining_amount();
    let fulfilled = item.is_fulfilled;
    let contribute_target = item.clone();

    view! {
        <div class="card item-card" class=("item-card--fulfilled", fulfilled)>
            <div class="item-card__body">
                <h3 class="item-card__name">{item.name.clone()}</h3>
                {item.description.clone().map(|d| {
                    view! { <p class="item-card__description">{d}</p> }
                })}
                <p class="item-card__price">{format_price(item.price)}</p>

                <div class="progress">
                    <div
                        class="progress__bar"
                        style:width=move || format!("{percent}%")
                    ></div>
                </div>
                <p class="item-card__funding">
                    {if fulfilled {
                        "Fully funded".to_owned()
                    } else {
                        format!(
                            "{} funded, {} to go",
                            format_price(item.fulfilled_amount),
                            format_price(remaining),
                        )
                    }}
                </p>
                {(item.contributors_count > 0)
                    .then(|| {
                        let label = if item.contributors_count == 1 {
                            "1 contributor".to_owned()
                        } else {
                            format!("{} contributors", item.contributors_count)
                        };
                        view! { <p class="item-card__contributors">{label}</p> }
                    })}
            </div>
            <div class="item-card__actions">
                {item.product_url.clone().map(|url| {
                    view! {
                        <a class="btn btn--ghost" href=url target="_blank" rel="noopener">
                            "View Product"
                        </a>
                    }
                })}
                <button
                    class="btn btn--primary"
                    disabled=fulfilled
                    on:click=move |_| on_contribute.run(contribute_target.clone())
                >
                    {if fulfilled { "Fulfilled" } else { "Contribute" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn WishlistPage() -> impl IntoView {
    let params = use_params_map();
    let data = LocalResource::new(move || {
        let id = params.get().get("id").unwrap_or_default();
        fetch_wishlist(id)
    });

    let contribute_item = RwSignal::new(None::<WishlistItem>);
    let amount = RwSignal::new(String::new());
    let dialog_error = RwSignal::new(None::<&'static str>);
    let thanks = RwSignal::new(false);

    let open_dialog = Callback::new(move |item: WishlistItem| {
        amount.set(String::new());
        dialog_error.set(None);
        thanks.set(false);
        contribute_item.set(Some(item));
    });
    let close_dialog = move |_| contribute_item.set(None);

    // Contributions are mocked; a valid amount just shows the thank-you note.
    let submit_contribution = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(item) = contribute_item.get_untracked() else {
            return;
        };
        match validate_contribution(&amount.get_untracked(), item.remaining_amount()) {
            Ok(_) => {
                dialog_error.set(None);
                thanks.set(true);
            }
            Err(message) => dialog_error.set(Some(message)),
        }
    };

    view! {
        <div class="wishlist-page">
            <Suspense fallback=move || {
                view! { <p class="wishlist-page__loading">"Loading wishlist..."</p> }
            }>
                {move || {
                    data.get()
                        .map(|(wishlist, items)| {
                            let percent = wishlist.fulfillment_percent();
                            let created = wishlist
                                .created_at
                                .format("%B %-d, %Y")
                                .to_string();
                            view! {
                                <header class="card wishlist-page__header">
                                    <span class="wishlist-card__category">
                                        {wishlist.category.icon()}
                                        " "
                                        {wishlist.category.label()}
                                    </span>
                                    <h1 class="wishlist-page__title">{wishlist.title.clone()}</h1>
                                    {wishlist.description.clone().map(|d| {
                                        view! { <p class="wishlist-page__description">{d}</p> }
                                    })}
                                    <p class="wishlist-page__meta">
                                        {format!("Created {created}")}
                                    </p>
                                    <div class="progress progress--large">
                                        <div
                                            class="progress__bar"
                                            style:width=move || format!("{percent}%")
                                        ></div>
                                    </div>
                                    <p class="wishlist-page__funding">
                                        {format!(
                                            "{} of {} funded ({percent}%)",
                                            format_price(wishlist.fulfilled_price),
                                            format_price(wishlist.total_price),
                                        )}
                                    </p>
                                </header>

                                <div class="wishlist-page__items">
                                    {items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <ItemCard item=item on_contribute=open_dialog/>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || contribute_item.get().is_some()>
                <div class="dialog-backdrop" on:click=close_dialog>
                    <div class="card dialog" on:click=move |ev| ev.stop_propagation()>
                        {move || {
                            contribute_item
                                .get()
                                .map(|item| {
                                    let remaining = item.remaining_amount();
                                    view! {
                                        <Show
                                            when=move || thanks.get()
                                            fallback=move || {
                                                let name = item.name.clone();
                                                view! {
                                                    <form
                                                        class="dialog__form"
                                                        on:submit=submit_contribution
                                                    >
                                                        <h2 class="dialog__title">
                                                            {format!("Contribute to {name}")}
                                                        </h2>
                                                        <p class="dialog__note">
                                                            {format!(
                                                                "{} still needed",
                                                                format_price(remaining),
                                                            )}
                                                        </p>
                                                        <Show when=move || dialog_error.get().is_some()>
                                                            <div class="auth-form__error">
                                                                {move || {
                                                                    dialog_error.get().unwrap_or_default()
                                                                }}
                                                            </div>
                                                        </Show>
                                                        <label class="auth-form__label">
                                                            "Amount (USD)"
                                                            <input
                                                                class="input"
                                                                type="number"
                                                                min="1"
                                                                step="0.01"
                                                                prop:value=move || amount.get()
                                                                on:input=move |ev| {
                                                                    amount.set(event_target_value(&ev));
                                                                }
                                                            />
                                                        </label>
                                                        <div class="dialog__actions">
                                                            <button class="btn btn--primary" type="submit">
                                                                "Contribute"
                                                            </button>
                                                            <button
                                                                class="btn btn--ghost"
                                                                type="button"
                                                                on:click=close_dialog
                                                            >
                                                                "Cancel"
                                                            </button>
                                                        </div>
                                                    </form>
                                                }
                                            }
                                        >
                                            <div class="dialog__thanks">
                                                <h2 class="dialog__title">"Thank you!"</h2>
                                                <p class="dialog__note">
                                                    "Your contribution helps make this wish come true."
                                                </p>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=close_dialog
                                                >
                                                    "Done"
                                                </button>
                                            </div>
                                        </Show>
                                    }
                                })
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
