use content::{catalog, sections::resolve_all, I18n};
use landing_core::{
    contact_form::ContactFormState,
    mobile::{list_items, MobileSection},
    UiState,
};
use leptos::prelude::*;
use shared::domain::ItemId;

use super::{glyph_path, Icon, SectionView, ICON_CHEVRON_DOWN};
use crate::{links::mobile_toggle_href, snapshot::PageSnapshot};

/// Phone layout: a hero pane and a scrolling accordion list with a docked
/// contact button.
#[component]
pub fn MobilePage(snapshot: PageSnapshot) -> impl IntoView {
    let PageSnapshot {
        state,
        i18n,
        contact,
        contact_endpoint,
        ..
    } = snapshot;
    let hero = catalog::item(ItemId::Hero);
    let section = match state.mobile.section {
        MobileSection::Hero => "hero",
        MobileSection::List => "list",
    };
    let logo = hero
        .image_url
        .map(|src| view! { <img class="hero__logo" src=src alt=hero.title /> });
    let subtitle = i18n
        .item_subtitle(hero)
        .map(|subtitle| view! { <p class="hero__subtitle">{subtitle}</p> });
    let items = list_items()
        .into_iter()
        .map(|id| {
            view! {
                <AccordionItem
                    id=id
                    state=state.clone()
                    contact=contact.clone()
                    endpoint=contact_endpoint.clone()
                    i18n=i18n.clone()
                />
            }
        })
        .collect::<Vec<_>>();
    let footer_class = if state.mobile.footer_visible {
        "mobile__footer mobile__footer--visible"
    } else {
        "mobile__footer"
    };

    view! {
        <div class=format!("mobile mobile--{section}") data-section=section>
            <section class="mobile__hero" id="hero" style=format!("background:{};", hero.background)>
                {logo}
                <h1 class="hero__title">{i18n.item_title(hero)}</h1>
                {subtitle}
                <p class="hero__description">{i18n.item_description(hero)}</p>
                <a class="mobile__discover" href="#services">
                    <span>{i18n.t("landing.mobile.decouvrir")}</span>
                    <Icon path=ICON_CHEVRON_DOWN size="20" />
                </a>
            </section>
            <section class="mobile__list" id="services">
                <h2 class="mobile__heading">{i18n.t("landing.mobile.servicesOfferts")}</h2>
                <ul class="accordion">{items}</ul>
                <footer class=footer_class>{i18n.t("landing.mobile.copyright")}</footer>
            </section>
            <ContactDock state=state contact=contact endpoint=contact_endpoint i18n=i18n />
        </div>
    }
}

#[component]
fn AccordionItem(
    id: ItemId,
    state: UiState,
    contact: ContactFormState,
    endpoint: String,
    i18n: I18n,
) -> impl IntoView {
    let item = catalog::item(id);
    let open = state.mobile.expanded == Some(id);
    let class = if open {
        "accordion__item accordion__item--open"
    } else {
        "accordion__item"
    };
    let icon = item
        .icon
        .map(|glyph| view! { <Icon path=glyph_path(glyph) size="22" /> });
    let body = if open {
        view! {
            <div class="accordion__body">
                {expanded_sections(id, contact, endpoint, &i18n)}
            </div>
        }
        .into_any()
    } else {
        view! { "" }.into_any()
    };
    view! {
        <li class=class id=format!("item-{id}") style=format!("--item-bg:{};", item.background)>
            <a class="accordion__toggle" href=mobile_toggle_href(id, &state) aria-expanded=open.to_string()>
                {icon}
                <span class="accordion__title">{i18n.item_title(item)}</span>
                <Icon path=ICON_CHEVRON_DOWN size="18" class="accordion__chevron" />
            </a>
            {body}
        </li>
    }
}

#[component]
fn ContactDock(
    state: UiState,
    contact: ContactFormState,
    endpoint: String,
    i18n: I18n,
) -> impl IntoView {
    let item = catalog::item(ItemId::Contact);
    let open = state.mobile.expanded == Some(ItemId::Contact);
    let class = if open {
        "contact-dock contact-dock--open"
    } else if state.mobile.contact_dock_collapsed() {
        "contact-dock contact-dock--collapsed"
    } else {
        "contact-dock"
    };
    let icon = item
        .icon
        .map(|glyph| view! { <Icon path=glyph_path(glyph) size="22" /> });
    let body = if open {
        view! {
            <div class="contact-dock__body">
                {expanded_sections(ItemId::Contact, contact, endpoint, &i18n)}
            </div>
        }
        .into_any()
    } else {
        view! { "" }.into_any()
    };
    view! {
        <div class=class style=format!("background:{};", item.background)>
            <a class="contact-dock__toggle" href=mobile_toggle_href(ItemId::Contact, &state)>
                {icon}
                <span class="contact-dock__label">{i18n.item_title(item)}</span>
            </a>
            {body}
        </div>
    }
}

fn expanded_sections(
    id: ItemId,
    contact: ContactFormState,
    endpoint: String,
    i18n: &I18n,
) -> Vec<AnyView> {
    resolve_all(id, i18n)
        .into_iter()
        .enumerate()
        .map(|(index, content)| {
            view! {
                <SectionView
                    content=content
                    index=index
                    contact=contact.clone()
                    endpoint=endpoint.clone()
                    i18n=i18n.clone()
                />
            }
            .into_any()
        })
        .collect()
}
