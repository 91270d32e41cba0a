//! Project generation flow: configure a name, play the scripted log, hand off
//! the finished project.

pub mod config;
pub mod script;
pub mod sequencer;
pub mod step;

pub use config::GeneratorConfig;
pub use script::{narration, SCRIPT_LEN};
pub use sequencer::{FlowListener, FnListener, GenerationSequencer, NAME_TOO_SHORT_TITLE};
pub use step::GeneratorStep;
