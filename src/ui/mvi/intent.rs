/// Marker trait for form intents: key edits, focus moves, toggles.
pub trait Intent: Send + 'static {}
