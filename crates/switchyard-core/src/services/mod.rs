//! Core services orchestrating the domain over the port boundaries.

mod app_core;
mod dispatcher;
mod settings_service;
mod switch_service;

pub use app_core::{AppCore, Ports};
pub use dispatcher::DirectoryActionDispatcher;
pub use settings_service::DirectorySettingsService;
pub use switch_service::{
    ProviderSwitchService, SwitchError, SwitchReport, TargetFailure, TargetWrite,
};
