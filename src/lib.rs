//! Hackpack: Template-Driven Project Generator
//!
//! Stateful core of a project generator flow: a scripted, timer-paced
//! generation sequencer that turns a template and a project name into a
//! fabricated project record, and an auto-expiring toast queue used to report
//! problems along the way.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod project;
pub mod slug;
pub mod toast;

pub use catalog::{Category, CategoryFilter, Template, TemplateCatalog};
pub use error::{ApiError, CatalogError, GeneratorError};
pub use generator::{FlowListener, GenerationSequencer, GeneratorConfig, GeneratorStep};
pub use project::{Project, ProjectDraft, ProjectStatus, Task};
pub use slug::slugify;
pub use toast::{Toast, ToastId, ToastMessage, ToastQueue, ToastVariant};
