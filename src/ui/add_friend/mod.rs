mod intent;
mod reducer;
mod state;

pub use intent::AddFriendIntent;
pub use reducer::AddFriendReducer;
pub use state::AddFriendFormState;
