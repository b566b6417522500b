/// Marker trait for form state.
///
/// `Default` is the freshly mounted form; `PartialEq` lets tests and the
/// render layer compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
