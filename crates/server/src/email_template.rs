//! Notification email sent to the firm for each contact request.

use std::fmt;

use chrono::{DateTime, Locale, TimeZone};
use html_escape::{encode_double_quoted_attribute, encode_text};
use shared::contact::ContactForm;

use crate::{config::Settings, mailer::OutgoingEmail};

pub const SUBJECT_PREFIX: &str = "Nouvelle demande de contact";

const STYLE: &str = "body { margin: 0; padding: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; background-color: #f3f4f6; color: #1f2937; }
      .email-container { max-width: 600px; margin: 40px auto; background-color: #ffffff; border-radius: 12px; overflow: hidden; box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
      .header { background: linear-gradient(135deg, #1e293b 0%, #334155 100%); padding: 40px 30px; text-align: center; }
      .header h1 { margin: 0; color: #ffffff; font-size: 28px; font-weight: 700; }
      .header p { margin: 10px 0 0 0; color: #cbd5e1; font-size: 14px; }
      .content { padding: 40px 30px; }
      .info-block { margin-bottom: 30px; padding-bottom: 25px; border-bottom: 1px solid #e5e7eb; }
      .info-block:last-child { border-bottom: none; margin-bottom: 0; padding-bottom: 0; }
      .label { display: block; font-size: 12px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.5px; color: #6b7280; margin-bottom: 8px; }
      .value { font-size: 16px; color: #1f2937; line-height: 1.5; word-wrap: break-word; }
      .value a { color: #3b82f6; text-decoration: none; }
      .message-box { background-color: #f9fafb; border-left: 4px solid #3b82f6; padding: 20px; border-radius: 6px; margin-top: 8px; }
      .footer { background-color: #f9fafb; padding: 30px; text-align: center; border-top: 1px solid #e5e7eb; }
      .footer p { margin: 5px 0; color: #6b7280; font-size: 13px; }
      .badge { display: inline-block; background-color: #dbeafe; color: #1e40af; padding: 6px 12px; border-radius: 20px; font-size: 12px; font-weight: 600; margin-top: 10px; }";

/// Date badge in Canadian French, e.g. `5 mars 2026, 14 h 07`.
pub fn date_badge<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format_localized("%-d %B %Y, %H h %M", Locale::fr_CA)
        .to_string()
}

pub fn subject(form: &ContactForm) -> String {
    format!("{SUBJECT_PREFIX} - {}", form.full_name())
}

pub fn text_body(form: &ContactForm) -> String {
    format!(
        "{SUBJECT_PREFIX}\n\nPrénom: {}\nNom: {}\nEmail: {}\nTéléphone: {}\n\nMessage:\n{}",
        form.first_name, form.last_name, form.email, form.phone, form.message
    )
}

pub fn html_body<Tz: TimeZone>(form: &ContactForm, at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let first_name = encode_text(&form.first_name);
    let last_name = encode_text(&form.last_name);
    let email = encode_text(&form.email);
    let email_href = encode_double_quoted_attribute(&form.email);
    let phone = encode_text(&form.phone);
    let phone_href = encode_double_quoted_attribute(&form.phone);
    let message = encode_text(&form.message).replace('\n', "<br>");
    let badge = date_badge(at);
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{SUBJECT_PREFIX} - Groupe Nolet &amp; Andrews</title>
    <style>
      {STYLE}
    </style>
  </head>
  <body>
    <div class="email-container">
      <div class="header">
        <h1>📬 {SUBJECT_PREFIX}</h1>
        <p>Groupe Nolet &amp; Andrews</p>
        <span class="badge">{badge}</span>
      </div>
      <div class="content">
        <div class="info-block">
          <span class="label">Prénom</span>
          <div class="value">{first_name}</div>
        </div>
        <div class="info-block">
          <span class="label">Nom de famille</span>
          <div class="value">{last_name}</div>
        </div>
        <div class="info-block">
          <span class="label">Adresse email</span>
          <div class="value"><a href="mailto:{email_href}">{email}</a></div>
        </div>
        <div class="info-block">
          <span class="label">Numéro de téléphone</span>
          <div class="value"><a href="tel:{phone_href}">{phone}</a></div>
        </div>
        <div class="info-block">
          <span class="label">Message</span>
          <div class="message-box">
            <div class="value">{message}</div>
          </div>
        </div>
      </div>
      <div class="footer">
        <p><strong>Groupe Nolet &amp; Andrews</strong></p>
        <p>Consultation et gestion d&#39;entreprise</p>
      </div>
    </div>
  </body>
</html>"#
    )
}

pub fn compose<Tz: TimeZone>(
    form: &ContactForm,
    settings: &Settings,
    at: &DateTime<Tz>,
) -> OutgoingEmail
where
    Tz::Offset: fmt::Display,
{
    OutgoingEmail {
        from: settings.contact_from.clone(),
        to: vec![settings.contact_email.clone()],
        reply_to: form.email.trim().to_string(),
        subject: subject(form),
        html: html_body(form, at),
        text: text_body(form),
    }
}
