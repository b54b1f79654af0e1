//! Filesystem adapters for switchyard: the JSON settings store and the
//! live-file provider-switch writer, plus composition helpers.

mod factory;
mod live_writer;
mod settings_file;

pub use factory::{build_app_core, default_settings_path, open_default_store};
pub use live_writer::FsProviderSwitchWriter;
pub use settings_file::JsonFileSettingsStore;
