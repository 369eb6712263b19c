use content::{catalog::GridItem, I18n};
use landing_core::{
    tile::{render_mode, scale_config, z_index, PortraitRole, RenderMode, ScaleConfig},
    IntroStage, UiState,
};
use leptos::prelude::*;

use super::{glyph_path, Icon, ICON_ARROW_LEFT};
use crate::links::{tile_href, with_layout, INTRO_PATH};

/// Inline style for a tile in its current mode.
pub fn tile_style(item: &GridItem, state: &UiState) -> String {
    let mode = render_mode(item.id, state);
    let mut style = format!(
        "background:{};z-index:{};",
        item.background,
        z_index(item.id, state)
    );
    if let Some(hover) = item.hover_background {
        style.push_str(&format!("--tile-hover:{hover};"));
    }
    if let Some(placement) = mode.placement() {
        style.push_str(&placement.css());
    }
    if let RenderMode::PortraitNav(PortraitRole::NavCell { cell, .. }) = mode {
        style.push_str(&format!(
            "order:{};grid-column:span {};aspect-ratio:{};",
            cell.order,
            cell.col_span,
            cell.aspect.css()
        ));
    }
    let scale = scale_config(item.id, state);
    if scale != ScaleConfig::IDENTITY {
        style.push_str(&format!(
            "transform:scaleX({:.4});transform-origin:{}% center;",
            scale.scale_x,
            scale.origin_x * 100.0
        ));
    }
    style
}

fn content_style(item: &GridItem, state: &UiState) -> String {
    let scale = scale_config(item.id, state);
    if scale == ScaleConfig::IDENTITY {
        String::new()
    } else {
        format!(
            "transform:scaleX({:.4});transform-origin:{}% center;",
            scale.content_scale_x(),
            scale.origin_x * 100.0
        )
    }
}

#[component]
pub fn Tile(item: &'static GridItem, state: UiState, i18n: I18n) -> impl IntoView {
    let mode = render_mode(item.id, &state);
    if mode.is_hidden() {
        return view! { "" }.into_any();
    }
    let tone = if item.is_dark_theme() {
        "tile--on-dark"
    } else {
        "tile--on-light"
    };
    let class = format!("tile tile--{} {} {}", item.id, mode.css_class(), tone);
    let style = tile_style(item, &state);
    let compact = matches!(
        mode,
        RenderMode::Sidebar { .. } | RenderMode::PortraitNav(PortraitRole::NavCell { .. })
    );
    let title = i18n.item_title(item);
    let inner = if item.is_hero() {
        hero_content(item, &state, &i18n, compact)
    } else {
        let icon = item
            .icon
            .map(|glyph| view! { <Icon path=glyph_path(glyph) size="28" class="tile__icon" /> });
        let details = if compact {
            view! { "" }.into_any()
        } else {
            let subtitle = i18n
                .item_subtitle(item)
                .map(|subtitle| view! { <p class="tile__subtitle">{subtitle}</p> });
            view! {
                {subtitle}
                <p class="tile__description">{i18n.item_description(item)}</p>
            }
            .into_any()
        };
        view! {
            {icon}
            <h2 class="tile__title">{title.clone()}</h2>
            {details}
        }
        .into_any()
    };
    let content = view! {
        <div class="tile__content" style=content_style(item, &state)>{inner}</div>
    };
    match tile_href(item.id, &state) {
        Some(href) => view! {
            <a class=class style=style href=href data-item=item.id.as_str() aria-label=title>
                {content}
            </a>
        }
        .into_any(),
        None => view! {
            <div class=class style=style data-item=item.id.as_str()>
                {content}
            </div>
        }
        .into_any(),
    }
}

fn hero_content(item: &'static GridItem, state: &UiState, i18n: &I18n, compact: bool) -> AnyView {
    let logo = item
        .image_url
        .map(|src| view! { <img class="hero__logo" src=src alt=item.title /> });
    if compact || state.active_id().is_some() {
        return view! { {logo} }.into_any();
    }
    let back = if state.stage() == IntroStage::Finished && !state.layout.is_portrait() {
        view! {
            <a class="hero__back" href=with_layout(INTRO_PATH, state.layout)>
                <Icon path=ICON_ARROW_LEFT size="16" />
                <span>{i18n.t("common.retourIntro")}</span>
            </a>
        }
        .into_any()
    } else {
        view! { "" }.into_any()
    };
    let subtitle = i18n
        .item_subtitle(item)
        .map(|subtitle| view! { <p class="hero__subtitle">{subtitle}</p> });
    view! {
        {logo}
        <h1 class="hero__title">{i18n.item_title(item)}</h1>
        {subtitle}
        <p class="hero__description">{i18n.item_description(item)}</p>
        {back}
    }
    .into_any()
}
