//! Wishlist creation form with dynamic item rows. Submission is mocked and
//! returns to the dashboard.

#[cfg(test)]
#[path = "wishlist_create_test.rs"]
mod wishlist_create_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use crate::net::types::WishlistCategory;

/// One editable row in the items list.
#[derive(Clone, Debug, PartialEq)]
pub struct FormItem {
    /// Stable key for list rendering while rows are added and removed.
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub product_url: String,
}

impl FormItem {
    fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: String::new(),
            price: String::new(),
            image_url: String::new(),
            product_url: String::new(),
        }
    }

    fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.description.trim().is_empty()
            && self.price.trim().is_empty()
    }
}

fn validate_title(title: &str) -> Result<String, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Please give your wishlist a title");
    }
    Ok(title.to_owned())
}

/// Require at least one filled-in item; every non-empty row needs a name and a
/// positive price.
fn validate_items(items: &[FormItem]) -> Result<(), &'static str> {
    let filled: Vec<&FormItem> = items.iter().filter(|i| !i.is_empty()).collect();
    if filled.is_empty() {
        return Err("Add at least one item to your wishlist");
    }
    for item in filled {
        if item.name.trim().is_empty() {
            return Err("Every item needs a name");
        }
        match item.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price > 0.0 => {}
            _ => return Err("Every item needs a valid price"),
        }
    }
    Ok(())
}

#[component]
pub fn WishlistCreatePage() -> impl IntoView {
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(WishlistCategory::Birthday);
    let is_public = RwSignal::new(true);
    let items = RwSignal::new(vec![FormItem::blank()]);
    let form_error = RwSignal::new(None::<&'static str>);

    let add_item = move |_| items.update(|rows| rows.push(FormItem::blank()));
    let remove_item = move |id: Uuid| {
        items.update(|rows| {
            rows.retain(|row| row.id != id);
            if rows.is_empty() {
                rows.push(FormItem::blank());
            }
        });
    };
    let edit_item = move |id: Uuid, apply: fn(&mut FormItem, String), value: String| {
        items.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
                apply(row, value);
            }
        });
    };

    // Creation is mocked; a valid form just returns to the dashboard.
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);

        if let Err(message) = validate_title(&title.get_untracked()) {
            form_error.set(Some(message));
            return;
        }
        if let Err(message) = items.with_untracked(|rows| validate_items(rows)) {
            form_error.set(Some(message));
            return;
        }
        navigate("/dashboard", NavigateOptions::default());
    };

    view! {
        <div class="create-page">
            <header class="page-hero">
                <h1 class="page-hero__title">"Create a Wishlist"</h1>
                <p class="page-hero__subtitle">
                    "Add the things you're wishing for and share them with friends"
                </p>
            </header>

            <form class="create-page__form" on:submit=on_submit>
                <Show when=move || form_error.get().is_some()>
                    <div class="auth-form__error">
                        {move || form_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="card create-page__details">
                    <h2>"Details"</h2>
                    <label class="auth-form__label">
                        "Title"
                        <input
                            class="input"
                            type="text"
                            placeholder="e.g. Birthday Wishlist"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Description"
                        <textarea
                            class="input"
                            placeholder="Tell people what this wishlist is for"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="auth-form__label">
                        "Category"
                        <select
                            class="input"
                            on:change=move |ev| {
                                category.set(WishlistCategory::from_slug(&event_target_value(&ev)));
                            }
                        >
                            {WishlistCategory::ALL
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option
                                            value=c.slug()
                                            selected=move || category.get() == c
                                        >
                                            {format!("{} {}", c.icon(), c.label())}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="create-page__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || is_public.get()
                            on:change=move |ev| is_public.set(event_target_checked(&ev))
                        />
                        "Make this wishlist public"
                    </label>
                </div>

                <div class="card create-page__items">
                    <div class="create-page__items-heading">
                        <h2>"Items"</h2>
                        <button class="btn btn--secondary" type="button" on:click=add_item>
                            "+ Add Item"
                        </button>
                    </div>

                    <For
                        each=move || items.get()
                        key=|row| row.id
                        children=move |row| {
                            let id = row.id;
                            view! {
                                <div class="create-page__item-row">
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="Item name"
                                        prop:value=row.name.clone()
                                        on:input=move |ev| {
                                            edit_item(
                                                id,
                                                |r, v| r.name = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="Description (optional)"
                                        prop:value=row.description.clone()
                                        on:input=move |ev| {
                                            edit_item(
                                                id,
                                                |r, v| r.description = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                    <input
                                        class="input"
                                        type="number"
                                        min="1"
                                        step="0.01"
                                        placeholder="Price"
                                        prop:value=row.price.clone()
                                        on:input=move |ev| {
                                            edit_item(
                                                id,
                                                |r, v| r.price = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                    <input
                                        class="input"
                                        type="url"
                                        placeholder="Product link (optional)"
                                        prop:value=row.product_url.clone()
                                        on:input=move |ev| {
                                            edit_item(
                                                id,
                                                |r, v| r.product_url = v,
                                                event_target_value(&ev),
                                            );
                                        }
                                    />
                                    <button
                                        class="btn btn--ghost"
                                        type="button"
                                        on:click=move |_| remove_item(id)
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="create-page__actions">
                    <button class="btn btn--primary" type="submit">"Create Wishlist"</button>
                    <a class="btn btn--ghost" href="/dashboard">"Cancel"</a>
                </div>
            </form>
        </div>
    }
}
