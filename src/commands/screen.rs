use herdbook_core::store::DocumentStore;
use herdbook_core::{BeesteScreen, RecordCatalog, TypeRegistry, TypeSelector};

use crate::config::Screen;

/// Renders one screen the way it first appears, with the type list expanded.
pub async fn render_screen<S: DocumentStore>(
    screen: Screen,
    store: S,
) -> Result<String, Box<dyn std::error::Error>> {
    match screen {
        Screen::Types => {
            let mut selector = TypeSelector::new(TypeRegistry::new(store));
            selector.load().await?;
            selector.toggle_edit_mode();
            Ok(selector.render())
        }
        Screen::Bees => {
            let mut beeste = BeesteScreen::new(RecordCatalog::new(store));
            beeste.refresh().await;
            Ok(beeste.render())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herdbook_core::registry::{ANIMAL_TYPES_FIELD, ANIMAL_TYPE_COLLECTION};
    use herdbook_core::store::single_field;
    use herdbook_core::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_render_types_screen() {
        let store = MemoryStore::new();
        store
            .set(
                ANIMAL_TYPE_COLLECTION,
                "config",
                single_field(ANIMAL_TYPES_FIELD, json!([{"id": "nguni", "name": "Nguni"}])),
            )
            .await
            .unwrap();

        let out = render_screen(Screen::Types, store).await.unwrap();
        assert!(out.starts_with("No Selected Animal"));
        assert!(out.contains("Nguni"));
    }

    #[tokio::test]
    async fn test_render_empty_bees_screen() {
        let out = render_screen(Screen::Bees, MemoryStore::new()).await.unwrap();
        assert!(out.contains("No Data"));
    }
}
