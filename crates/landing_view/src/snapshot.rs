use content::{sections::resolve_all, I18n, SectionContent};
use landing_core::{
    contact_form::ContactFormState,
    paging::{Pager, Presentation},
    panel::CentralPanel,
    UiState,
};
use shared::protocol::CONTACT_ROUTE;

/// Everything one render of the page depends on.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub state: UiState,
    pub i18n: I18n,
    /// Requested page of the open panel; out-of-range values show the first.
    pub section_index: usize,
    pub contact: ContactFormState,
    /// Where the contact form posts.
    pub contact_endpoint: String,
}

impl PageSnapshot {
    pub fn new(state: UiState, i18n: I18n) -> Self {
        Self {
            state,
            i18n,
            section_index: 0,
            contact: ContactFormState::default(),
            contact_endpoint: CONTACT_ROUTE.to_string(),
        }
    }

    pub fn with_section(mut self, index: usize) -> Self {
        self.section_index = index;
        self
    }

    pub fn with_contact(mut self, contact: ContactFormState) -> Self {
        self.contact = contact;
        self
    }

    pub fn with_contact_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.contact_endpoint = endpoint.into();
        self
    }

    pub fn panel(&self) -> Option<CentralPanel> {
        CentralPanel::for_state(&self.state, &self.i18n)
    }

    /// The open panel with its resolved sections and pager.
    pub fn open_panel(&self) -> Option<OpenPanel> {
        let panel = self.panel()?;
        let sections = resolve_all(panel.item, &self.i18n);
        let pager = match panel.presentation {
            Presentation::Paged => {
                Pager::new(sections.len(), Presentation::Paged).with_index(self.section_index)
            }
            Presentation::Stacked => Pager::new(sections.len(), Presentation::Stacked),
        };
        Some(OpenPanel {
            panel,
            sections,
            pager,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OpenPanel {
    pub panel: CentralPanel,
    pub sections: Vec<SectionContent>,
    pub pager: Pager,
}
