//! Dropdown-style animal-type selector.

use std::collections::BTreeSet;

use crate::error::RegistryError;
use crate::models::AnimalType;
use crate::registry::TypeRegistry;
use crate::store::DocumentStore;
use crate::text::heading;

/// State behind the selector: the loaded list, the current selection, the
/// search box and the per-row delete confirmations.
pub struct TypeSelector<S> {
    registry: TypeRegistry<S>,
    animals: Vec<AnimalType>,
    selected: Option<AnimalType>,
    edit_mode: bool,
    search: String,
    confirming: BTreeSet<String>,
    add_dialog: Option<String>,
    loading: bool,
}

impl<S: DocumentStore> TypeSelector<S> {
    pub fn new(registry: TypeRegistry<S>) -> Self {
        Self {
            registry,
            animals: Vec::new(),
            selected: None,
            edit_mode: false,
            search: String::new(),
            confirming: BTreeSet::new(),
            add_dialog: None,
            loading: true,
        }
    }

    /// Fetches the list. A new selector reports loading until this finishes.
    pub async fn load(&mut self) -> Result<(), RegistryError> {
        self.begin_load();
        let result = self.registry.list_all().await;
        self.finish_load(result)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn finish_load(
        &mut self,
        result: Result<Vec<AnimalType>, RegistryError>,
    ) -> Result<(), RegistryError> {
        self.loading = false;
        self.animals = result?;
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn animals(&self) -> &[AnimalType] {
        &self.animals
    }

    pub fn selected(&self) -> Option<&AnimalType> {
        self.selected.as_ref()
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Entries whose name contains the search text, ignoring case.
    pub fn visible(&self) -> Vec<&AnimalType> {
        self.animals
            .iter()
            .filter(|a| a.matches(&self.search))
            .collect()
    }

    /// Makes `id` the current entry and closes the search. Unknown ids are
    /// ignored.
    pub fn select(&mut self, id: &str) -> bool {
        match self.animals.iter().find(|a| a.id == id) {
            Some(animal) => {
                self.selected = Some(animal.clone());
                self.edit_mode = false;
                true
            }
            None => false,
        }
    }

    pub fn request_delete(&mut self, id: &str) {
        self.confirming.insert(id.to_string());
    }

    pub fn cancel_delete(&mut self, id: &str) {
        self.confirming.remove(id);
    }

    pub fn is_confirming_delete(&self, id: &str) -> bool {
        self.confirming.contains(id)
    }

    pub async fn confirm_delete(&mut self, id: &str) -> Result<(), RegistryError> {
        let animals = self.registry.remove(id).await?;
        self.confirming.remove(id);
        if self.selected.as_ref().is_some_and(|s| s.id == id) {
            self.selected = None;
        }
        self.animals = animals;
        Ok(())
    }

    pub fn open_add(&mut self) {
        self.add_dialog = Some(String::new());
    }

    pub fn is_adding(&self) -> bool {
        self.add_dialog.is_some()
    }

    pub fn set_add_name(&mut self, text: impl Into<String>) {
        if let Some(name) = self.add_dialog.as_mut() {
            *name = text.into();
        }
    }

    pub fn cancel_add(&mut self) {
        self.add_dialog = None;
    }

    /// Adds the typed name. A blank name leaves the dialog open and does
    /// nothing.
    pub async fn submit_add(&mut self) -> Result<(), RegistryError> {
        let name = match self.add_dialog.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => return Ok(()),
        };

        self.animals = self.registry.add(&name).await?;
        self.add_dialog = None;
        Ok(())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let title = match &self.selected {
            Some(animal) => animal.name.as_str(),
            None => "No Selected Animal",
        };
        out.push_str(&heading(title));
        out.push('\n');

        if !self.edit_mode {
            return out;
        }

        out.push_str(&format!("Search: {}\n", self.search));
        if self.loading {
            out.push_str("Loading...\n");
        } else {
            let visible = self.visible();
            if visible.is_empty() {
                out.push_str("No Animals\n");
            }
            for animal in visible {
                if self.is_confirming_delete(&animal.id) {
                    out.push_str(&format!(
                        "  Are you sure you want to delete {} with all records listed underneath? [confirm/cancel]\n",
                        animal.name
                    ));
                } else {
                    out.push_str(&format!("  {:<30} [x]\n", animal.name));
                }
            }
        }

        match &self.add_dialog {
            Some(name) => {
                out.push('\n');
                out.push_str(&heading("Add Animal"));
                out.push_str(&format!("\nName: {}\n", name));
            }
            None => out.push_str("[Add Animal]\n"),
        }
        out
    }
}
