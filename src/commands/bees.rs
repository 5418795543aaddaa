use clap::{Args, Subcommand};
use herdbook_core::store::DocumentStore;
use herdbook_core::{BeesteScreen, RecordCatalog};

use super::{confirm, OutputFormat};

#[derive(Args)]
pub struct BeesCommand {
    #[command(subcommand)]
    pub command: BeesSubcommand,
}

#[derive(Subcommand)]
pub enum BeesSubcommand {
    /// List Beeste sorted by number
    List {
        /// Only show numbers containing this text
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a new bees
    Add {
        /// Bees number
        number: String,

        /// Weight in KG
        weight: String,
    },

    /// Change the weight of an existing bees
    Edit {
        /// Bees number
        number: String,

        /// New weight in KG
        weight: String,
    },

    /// Delete a bees
    Delete {
        /// Bees number
        number: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl BeesCommand {
    pub async fn run<S: DocumentStore>(&self, store: S) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            BeesSubcommand::List { filter, format } => {
                let mut screen = BeesteScreen::new(RecordCatalog::new(store));
                screen.refresh().await;
                if let Some(error) = screen.overlay().error() {
                    return Err(error.to_string().into());
                }
                if let Some(filter) = filter {
                    screen.set_filter(filter.as_str());
                }
                let beeste = screen.visible();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(beeste)?);
                    }
                    OutputFormat::Text => {
                        if beeste.is_empty() {
                            println!("No Data");
                            return Ok(());
                        }
                        println!("{:<20}  WEIGHT (KG)", "NUMBER");
                        println!("{}", "-".repeat(40));
                        for bees in beeste {
                            println!("{:<20}  {}", bees.id, bees.weight);
                        }
                        println!("\nTotal: {} bees", beeste.len());
                    }
                }
                Ok(())
            }

            BeesSubcommand::Add { number, weight } => {
                let catalog = RecordCatalog::new(store);
                catalog.add(number, weight).await?;
                println!("Created bees {} ({} KG)", number.trim(), weight.trim());
                Ok(())
            }

            BeesSubcommand::Edit { number, weight } => {
                let catalog = RecordCatalog::new(store);
                catalog.edit(number, weight).await?;
                println!("Updated bees {} ({} KG)", number.trim(), weight.trim());
                Ok(())
            }

            BeesSubcommand::Delete { number, force } => {
                if !force
                    && !confirm(&format!(
                        "Are you sure you want to delete bees number {}?",
                        number
                    ))?
                {
                    println!("Deletion cancelled.");
                    return Ok(());
                }

                let catalog = RecordCatalog::new(store);
                catalog.delete(number).await?;
                println!("Deleted bees {}", number.trim());
                Ok(())
            }
        }
    }
}
