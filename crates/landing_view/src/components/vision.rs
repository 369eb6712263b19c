use content::{I18n, VISION_ITEMS};
use leptos::prelude::*;

use shared::domain::ItemId;

use super::{glyph_path, Icon};
use crate::links::item_path;

/// Compact strip of the six pillars under the closed grid.
#[component]
pub fn VisionStrip(i18n: I18n) -> impl IntoView {
    let items = VISION_ITEMS
        .iter()
        .map(|item| {
            let label = i18n.text_or(&format!("vision.{}.label", item.id), item.label);
            let description = i18n.text_or(&format!("vision.{}.description", item.id), item.description);
            let tooltip = description.clone();
            view! {
                <li class="vision__item" title=tooltip>
                    <Icon path=glyph_path(item.icon) size="18" />
                    <span class="vision__label">{label}</span>
                    <span class="vision__description">{description}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <aside class="vision" aria-label=i18n.t("landing.vision.title")>
            <h2 class="vision__title">{i18n.t("landing.vision.title")}</h2>
            <ul class="vision__list">{items}</ul>
        </aside>
    }
}

/// Closing call to action linking to the contact tile.
#[component]
pub fn CallToAction(i18n: I18n) -> impl IntoView {
    view! {
        <section class="cta">
            <h2 class="cta__heading">{i18n.t("landing.cta.heading")}</h2>
            <p class="cta__description">{i18n.t("landing.cta.description")}</p>
            <a class="cta__button" href=item_path(ItemId::Contact)>{i18n.t("landing.cta.button")}</a>
        </section>
    }
}
