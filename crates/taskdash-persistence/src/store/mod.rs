pub mod atomic_writer;
pub mod json_settings_store;

pub use atomic_writer::AtomicWriter;
pub use json_settings_store::JsonSettingsStore;
