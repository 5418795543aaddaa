use clap::{Args, Subcommand};
use herdbook_core::registry::{ANIMAL_TYPES_FIELD, ANIMAL_TYPE_COLLECTION};
use herdbook_core::store::{single_field, DocumentStore};
use herdbook_core::text::camelize;
use herdbook_core::{AnimalType, TypeRegistry, TypeSelector};
use uuid::Uuid;

use super::{confirm, OutputFormat};

#[derive(Args)]
pub struct TypesCommand {
    #[command(subcommand)]
    pub command: TypesSubcommand,
}

#[derive(Subcommand)]
pub enum TypesSubcommand {
    /// List animal types
    List {
        /// Only show names containing this text (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add an animal type
    Add {
        /// Display name; its id is derived from it
        name: String,
    },

    /// Remove an animal type
    Remove {
        /// Animal type id
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Create the animal-type list document if there is none
    Init,
}

impl TypesCommand {
    pub async fn run<S: DocumentStore>(&self, store: S) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            TypesSubcommand::List { search, format } => {
                let mut selector = TypeSelector::new(TypeRegistry::new(store));
                selector.load().await?;
                if let Some(search) = search {
                    selector.set_search(search.as_str());
                }
                let animals = selector.visible();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&animals)?);
                    }
                    OutputFormat::Text => {
                        if animals.is_empty() {
                            println!("No Animals");
                            return Ok(());
                        }
                        println!("{:<30}  NAME", "ID");
                        println!("{}", "-".repeat(62));
                        for animal in &animals {
                            println!("{:<30}  {}", animal.id, animal.name);
                        }
                        println!("\nTotal: {} animal type(s)", animals.len());
                    }
                }
                Ok(())
            }

            TypesSubcommand::Add { name } => {
                if name.trim().is_empty() {
                    return Err("Animal type name cannot be empty".into());
                }

                let registry = TypeRegistry::new(store);
                let id = camelize(name);
                let existed = registry.list_all().await?.iter().any(|a| a.id == id);
                let animals = registry.add(name).await?;

                match animals.iter().find(|a| a.id == id) {
                    Some(animal) if existed => {
                        println!("Animal type already exists: {} ({})", animal.name, animal.id)
                    }
                    Some(animal) => {
                        println!("Added animal type: {} ({})", animal.name, animal.id)
                    }
                    None => {
                        return Err(
                            "No animal-type list found. Run `herdbook types init` first.".into(),
                        )
                    }
                }
                Ok(())
            }

            TypesSubcommand::Remove { id, force } => {
                let mut selector = TypeSelector::new(TypeRegistry::new(store));
                selector.load().await?;

                let animal: AnimalType = match selector.animals().iter().find(|a| a.id == *id) {
                    Some(animal) => animal.clone(),
                    None => return Err(format!("Animal type not found: {}", id).into()),
                };

                selector.request_delete(id);
                if !force
                    && !confirm(&format!(
                        "Are you sure you want to delete {} with all records listed underneath?",
                        animal.name
                    ))?
                {
                    selector.cancel_delete(id);
                    println!("Deletion cancelled.");
                    return Ok(());
                }

                selector.confirm_delete(id).await?;
                println!("Deleted animal type: {}", animal.name);
                Ok(())
            }

            TypesSubcommand::Init => {
                let existing = store.list(ANIMAL_TYPE_COLLECTION).await?;
                if let Some(doc) = existing.first() {
                    println!("Animal-type list already exists ({})", doc.id);
                    return Ok(());
                }

                let id = Uuid::new_v4().to_string();
                store
                    .set(
                        ANIMAL_TYPE_COLLECTION,
                        &id,
                        single_field(ANIMAL_TYPES_FIELD, serde_json::json!([])),
                    )
                    .await?;
                tracing::info!("Created animal-type list document {}", id);
                println!("Created animal-type list ({})", id);
                Ok(())
            }
        }
    }
}
