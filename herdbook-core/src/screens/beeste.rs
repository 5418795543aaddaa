//! The Beeste list screen: filter box, record list and the modal workflows.

use crate::catalog::{filter_records, RecordCatalog};
use crate::error::CatalogError;
use crate::models::BeesRecord;
use crate::store::DocumentStore;
use crate::text::heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
}

/// Inputs of the create and edit modals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeesForm {
    pub number: String,
    pub weight: String,
}

/// The single overlay shown above the list.
///
/// An error sits on top of whatever overlay produced it; dismissing the
/// error brings that overlay back unchanged.
#[derive(Debug)]
pub enum Overlay {
    None,
    Creating(BeesForm),
    Editing(BeesForm),
    ConfirmingDelete(BeesRecord),
    Error {
        error: CatalogError,
        resume: Box<Overlay>,
    },
}

impl Overlay {
    pub fn is_none(&self) -> bool {
        matches!(self, Overlay::None)
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            Overlay::Error { error, .. } => Some(error),
            _ => None,
        }
    }
}

pub struct BeesteScreen<S> {
    catalog: RecordCatalog<S>,
    load_state: LoadState,
    records: Vec<BeesRecord>,
    visible: Vec<BeesRecord>,
    filter: String,
    overlay: Overlay,
}

impl<S: DocumentStore> BeesteScreen<S> {
    /// A fresh screen is `Loading` until its first fetch completes.
    pub fn new(catalog: RecordCatalog<S>) -> Self {
        Self {
            catalog,
            load_state: LoadState::Loading,
            records: Vec::new(),
            visible: Vec::new(),
            filter: String::new(),
            overlay: Overlay::None,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn records(&self) -> &[BeesRecord] {
        &self.records
    }

    pub fn visible(&self) -> &[BeesRecord] {
        &self.visible
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Re-reads the collection and re-applies the current filter.
    pub async fn refresh(&mut self) {
        self.begin_refresh();
        let result = self.catalog.list_all().await;
        self.finish_refresh(result);
    }

    /// Enters `Loading`; the list stays as it was until
    /// [`finish_refresh`](Self::finish_refresh).
    pub fn begin_refresh(&mut self) {
        self.load_state = LoadState::Loading;
    }

    pub fn finish_refresh(&mut self, result: Result<Vec<BeesRecord>, CatalogError>) {
        match result {
            Ok(records) => {
                self.records = records;
                self.visible = filter_records(&self.records, &self.filter);
            }
            Err(e) => self.show_error(e),
        }
        self.load_state = LoadState::Idle;
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        self.visible = filter_records(&self.records, &self.filter);
    }

    fn error_shown(&self) -> bool {
        matches!(self.overlay, Overlay::Error { .. })
    }

    /// Opens a blank create modal. Does nothing while an error is shown.
    pub fn open_create(&mut self) -> bool {
        if self.error_shown() {
            return false;
        }
        self.overlay = Overlay::Creating(BeesForm::default());
        true
    }

    /// Opens the edit modal for `id`, pre-filled with its current weight.
    pub fn open_edit(&mut self, id: &str) -> bool {
        if self.error_shown() {
            return false;
        }
        match self.records.iter().find(|r| r.id == id) {
            Some(record) => {
                self.overlay = Overlay::Editing(BeesForm {
                    number: record.id.clone(),
                    weight: record.weight.clone(),
                });
                true
            }
            None => false,
        }
    }

    pub fn open_delete(&mut self, id: &str) -> bool {
        if self.error_shown() {
            return false;
        }
        match self.records.iter().find(|r| r.id == id) {
            Some(record) => {
                self.overlay = Overlay::ConfirmingDelete(record.clone());
                true
            }
            None => false,
        }
    }

    /// Sets the number on the create form; the number of an edited record
    /// is fixed.
    pub fn set_number(&mut self, text: impl Into<String>) {
        if let Overlay::Creating(form) = &mut self.overlay {
            form.number = text.into();
        }
    }

    pub fn set_weight(&mut self, text: impl Into<String>) {
        if let Overlay::Creating(form) | Overlay::Editing(form) = &mut self.overlay {
            form.weight = text.into();
        }
    }

    pub async fn submit_create(&mut self) {
        let form = match &self.overlay {
            Overlay::Creating(form) => form.clone(),
            _ => return,
        };

        match self.catalog.add(&form.number, &form.weight).await {
            Ok(()) => {
                self.overlay = Overlay::None;
                self.refresh().await;
            }
            Err(e) => self.show_error(e),
        }
    }

    pub async fn submit_edit(&mut self) {
        let form = match &self.overlay {
            Overlay::Editing(form) => form.clone(),
            _ => return,
        };

        match self.catalog.edit(&form.number, &form.weight).await {
            Ok(()) => {
                self.overlay = Overlay::None;
                self.refresh().await;
            }
            Err(e) => self.show_error(e),
        }
    }

    /// Deletes the record under confirmation. The modal closes and the list
    /// is reloaded whatever the outcome; a failure is then shown on its own.
    pub async fn confirm_delete(&mut self) {
        let id = match &self.overlay {
            Overlay::ConfirmingDelete(record) => record.id.clone(),
            _ => return,
        };

        let result = self.catalog.delete(&id).await;
        self.overlay = Overlay::None;
        self.refresh().await;
        if let Err(e) = result {
            self.show_error(e);
        }
    }

    /// Closes the active modal, discarding its inputs. Errors are closed
    /// with [`dismiss_error`](Self::dismiss_error) instead.
    pub fn cancel(&mut self) {
        if !self.error_shown() {
            self.overlay = Overlay::None;
        }
    }

    pub fn dismiss_error(&mut self) {
        let overlay = std::mem::replace(&mut self.overlay, Overlay::None);
        self.overlay = match overlay {
            Overlay::Error { resume, .. } => *resume,
            other => other,
        };
    }

    fn show_error(&mut self, error: CatalogError) {
        tracing::warn!("{}", error);
        let resume = std::mem::replace(&mut self.overlay, Overlay::None);
        self.overlay = Overlay::Error {
            error,
            resume: Box::new(resume),
        };
    }

    pub fn render(&self) -> String {
        if self.load_state == LoadState::Loading {
            return "Loading...\n".to_string();
        }

        let mut out = format!("Filter: {}\n", self.filter);
        if self.visible.is_empty() {
            out.push_str("No Data\n");
        }
        for record in &self.visible {
            out.push_str(&format!("{}\n", record));
        }
        out.push_str("[Add]\n");
        render_overlay(&mut out, &self.overlay);
        out
    }
}

fn render_form(out: &mut String, title: &str, form: &BeesForm, action: &str) {
    out.push_str(&format!("\n{}\n", heading(title)));
    out.push_str(&format!("Number: {}\n", form.number));
    out.push_str(&format!("Weight (KG): {}\n", form.weight));
    out.push_str(&format!("[{}] [Cancel]\n", action));
}

fn render_overlay(out: &mut String, overlay: &Overlay) {
    match overlay {
        Overlay::None => {}
        Overlay::Creating(form) => render_form(out, "Create", form, "Add"),
        Overlay::Editing(form) => render_form(out, "Edit", form, "Edit"),
        Overlay::ConfirmingDelete(record) => {
            out.push_str(&format!(
                "\nAre you sure you want to delete bees number {}?\n",
                record.id
            ));
            out.push_str("[Delete] [Cancel]\n");
        }
        Overlay::Error { error, resume } => {
            render_overlay(out, resume);
            out.push_str(&format!("\n{}\n{}\n", heading("Error"), error));
            out.push_str("[Close]\n");
        }
    }
}
