use content::I18n;
use landing_core::contact_form::{ContactField, ContactFormState, SubmitError, SubmitStatus};
use leptos::prelude::*;
use shared::contact::ContactValidationError;

/// Translation key of the status line under the form, if any.
pub fn status_key(status: &SubmitStatus) -> Option<&'static str> {
    match status {
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
        SubmitStatus::Succeeded => Some("contact.form.success"),
        SubmitStatus::Failed(SubmitError::Invalid(ContactValidationError::Missing(_))) => {
            Some("contact.form.required")
        }
        SubmitStatus::Failed(SubmitError::Invalid(ContactValidationError::InvalidEmail)) => {
            Some("contact.form.invalidEmail")
        }
        SubmitStatus::Failed(SubmitError::Invalid(ContactValidationError::InvalidPhone { .. })) => {
            Some("contact.form.invalidPhone")
        }
        SubmitStatus::Failed(_) => Some("contact.form.error"),
    }
}

#[component]
pub fn ContactFormView(state: ContactFormState, endpoint: String, i18n: I18n) -> impl IntoView {
    let submitting = state.is_submitting();
    let fields = ContactField::ALL
        .into_iter()
        .map(|field| {
            let id = format!("contact-{}", field.name());
            let label = i18n.t(&field.label_key());
            let value = state.field(field).to_string();
            let control = if field == ContactField::Message {
                view! { <textarea id=id name=field.name() rows="4" required="">{value}</textarea> }
                    .into_any()
            } else {
                view! {
                    <input id=id type=field.input_type() name=field.name() value=value required="" />
                }
                .into_any()
            };
            view! {
                <label class="contact-form__field">
                    <span>{label}</span>
                    {control}
                </label>
            }
        })
        .collect::<Vec<_>>();
    let submit_label = if submitting {
        i18n.t("contact.form.sending")
    } else {
        i18n.t("contact.form.submit")
    };
    let status = match status_key(&state.status) {
        Some(key) => {
            let class = if state.status == SubmitStatus::Succeeded {
                "contact-form__status contact-form__status--ok"
            } else {
                "contact-form__status contact-form__status--error"
            };
            view! { <p class=class role="status">{i18n.t(key)}</p> }.into_any()
        }
        None => view! { "" }.into_any(),
    };
    view! {
        <form
            class="contact-form"
            method="post"
            action=endpoint.clone()
            data-endpoint=endpoint
            data-submitting=submitting.to_string()
        >
            <div class="contact-form__grid">{fields}</div>
            <button class="contact-form__submit" type="submit" disabled=submitting>
                {submit_label}
            </button>
            {status}
        </form>
    }
}
