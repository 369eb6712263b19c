use std::sync::Arc;

use content::Translations;

use crate::{config::Settings, mailer::EmailSender};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) settings: Arc<Settings>,
    pub(crate) translations: Arc<Translations>,
    pub(crate) mailer: Arc<dyn EmailSender>,
    /// Action of rendered contact forms.
    pub(crate) contact_endpoint: String,
}
