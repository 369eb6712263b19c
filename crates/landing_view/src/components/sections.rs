use content::{sections::Section, I18n, SectionContent};
use landing_core::contact_form::ContactFormState;
use leptos::prelude::*;

use super::ContactFormView;

/// One detail section; the form section renders the contact form below its copy.
#[component]
pub fn SectionView(
    content: SectionContent,
    index: usize,
    contact: ContactFormState,
    endpoint: String,
    i18n: I18n,
) -> impl IntoView {
    let SectionContent {
        section,
        heading,
        body,
        tags,
        points,
        quote,
        action,
    } = content;
    let body = body.map(|body| view! { <p class="section__body">{body}</p> });
    let tags = if tags.is_empty() {
        view! { "" }.into_any()
    } else {
        view! {
            <ul class="section__tags">
                {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };
    let points = if points.is_empty() {
        view! { "" }.into_any()
    } else {
        view! {
            <ul class="section__points">
                {points
                    .into_iter()
                    .map(|point| {
                        view! {
                            <li>
                                <strong>{point.title}</strong>
                                <span>{point.text}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };
    let quote = quote.map(|quote| view! { <blockquote class="section__quote">{quote}</blockquote> });
    let action = action.map(|action| view! { <p class="section__action">{action}</p> });
    let form = if section.is_form() {
        view! { <ContactFormView state=contact endpoint=endpoint i18n=i18n /> }.into_any()
    } else {
        view! { "" }.into_any()
    };
    view! {
        <article class=section_class(section) data-section=index.to_string() id=format!("section-{index}")>
            <h3 class="section__heading">{heading}</h3>
            {body}
            {tags}
            {points}
            {quote}
            {action}
            {form}
        </article>
    }
}

fn section_class(section: Section) -> String {
    format!("section section--{}", section.key())
}
