mod intent;
mod reducer;
mod state;

pub use intent::SplitIntent;
pub use reducer::SplitReducer;
pub use state::{SplitField, SplitFormState};
