mod animal_type;
mod bees;

pub use animal_type::AnimalType;
pub use bees::BeesRecord;
