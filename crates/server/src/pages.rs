//! Server-rendered landing page routes and the locale switch.

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use axum_extra::extract::CookieJar;
use content::{
    i18n::{locale_from_cookie, LOCALE_COOKIE},
    I18n,
};
use landing_core::{mobile::MobileMsg, mobile::MobileSection, LayoutClass, UiState};
use landing_view::{render_page, PageSnapshot};
use serde::Deserialize;
use shared::{
    domain::{ItemId, Locale},
    protocol::{ErrorBody, ROUTE_NOT_FOUND_MESSAGE},
};
use tracing::debug;

use crate::app_state::AppState;

type PageError = (StatusCode, Json<ErrorBody>);

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    section: Option<usize>,
    layout: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageView {
    Intro,
    Grid,
    Item(ItemId),
}

pub(crate) fn not_found() -> PageError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(ROUTE_NOT_FOUND_MESSAGE)),
    )
}

fn bad_request(message: impl Into<String>) -> PageError {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message)))
}

/// The settled state a URL stands for.
pub(crate) fn page_state(layout: LayoutClass, view: PageView) -> UiState {
    match (layout, view) {
        (_, PageView::Intro) => UiState::new(layout.nominal_viewport()),
        (LayoutClass::Mobile, PageView::Grid) => {
            let mut state = UiState::settled(layout, None);
            state.mobile.section = MobileSection::List;
            state
        }
        (LayoutClass::Mobile, PageView::Item(id)) => {
            let mut state = UiState::settled(layout, None);
            state.mobile.section = MobileSection::List;
            state.mobile.update(MobileMsg::Toggle(id));
            state
        }
        (_, PageView::Grid) => UiState::settled(layout, None),
        (_, PageView::Item(id)) => UiState::settled(layout, Some(id)),
    }
}

fn render(
    state: &AppState,
    cookies: &CookieJar,
    query: PageQuery,
    view: PageView,
) -> Result<Html<String>, PageError> {
    let layout = match query.layout.as_deref() {
        Some(raw) => LayoutClass::from_str(raw).map_err(|err| bad_request(err.to_string()))?,
        None => LayoutClass::Landscape,
    };
    let locale = cookies
        .get(LOCALE_COOKIE)
        .and_then(locale_from_cookie)
        .unwrap_or(Locale::DEFAULT);
    let i18n = I18n::new(state.translations.clone(), locale);
    debug!(?view, %layout, locale = %i18n.locale(), "rendering page");
    let snapshot = PageSnapshot::new(page_state(layout, view), i18n)
        .with_section(query.section.unwrap_or(0))
        .with_contact_endpoint(state.contact_endpoint.clone());
    Ok(Html(render_page(&snapshot)))
}

pub(crate) async fn intro(
    State(state): State<AppState>,
    cookies: CookieJar,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    render(&state, &cookies, query, PageView::Intro)
}

pub(crate) async fn grid(
    State(state): State<AppState>,
    cookies: CookieJar,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    render(&state, &cookies, query, PageView::Grid)
}

pub(crate) async fn item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    cookies: CookieJar,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let id = ItemId::from_str(&id)
        .ok()
        .filter(|id| !id.is_hero())
        .ok_or_else(not_found)?;
    render(&state, &cookies, query, PageView::Item(id))
}

/// Persists the locale in a cookie and returns to the intro.
pub(crate) async fn switch_locale(
    State(state): State<AppState>,
    cookies: CookieJar,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, PageError> {
    let locale = Locale::from_str(&code).map_err(|err| bad_request(err.to_string()))?;
    let mut i18n = I18n::new(state.translations.clone(), Locale::DEFAULT);
    let cookie = i18n.set_locale(locale);
    debug!(%locale, "locale switched");
    Ok((cookies.add(cookie.to_cookie()), Redirect::to("/")))
}
