//! The fixed starter dataset written by the seed operation.

use crate::animal::AnimalInput;

/// Number of records in the seed dataset.
pub const SEED_COUNT: usize = 5;

/// The five starter animals, in insertion order.
pub fn seed_animals() -> Vec<AnimalInput> {
    vec![
        AnimalInput::new("cat", "egypt", false, 10.0),
        AnimalInput::new("dog", "siberia", false, 11.0),
        AnimalInput::new("Woolly Mammoth", "Africa", true, 60.0),
        AnimalInput::new("dinosaur", "South America", true, 50.0),
        AnimalInput::new("toucan", "Mexico", false, 20.0),
    ]
}
