pub mod preference_store;
pub mod theme;

pub use preference_store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use theme::{Theme, ThemeController, DARK_MODE_KEY};
