//! Generation sequencer: the `config -> generating -> success` flow.
//!
//! `start` validates the draft, moves to `generating` and plays the narration
//! script one line per delay. After the last line and one more delay the
//! project record is synthesized, the step becomes `success` and the listener
//! receives the project. A run cannot be interrupted through the sequencer
//! once it has started. If the task playing it is aborted or dropped before
//! the end, the step falls back to `config` with the draft kept.

use crate::catalog::Template;
use crate::error::GeneratorError;
use crate::generator::config::GeneratorConfig;
use crate::generator::script::narration;
use crate::generator::step::GeneratorStep;
use crate::project::{Project, ProjectDraft};
use crate::toast::{ToastMessage, ToastQueue};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub const NAME_TOO_SHORT_TITLE: &str = "Project name too short";

/// Receives the outcome of the flow. The shell decides where to navigate.
pub trait FlowListener: Send + Sync {
    /// Called once per run with the finished project.
    fn on_success(&self, project: Project);

    /// Called when the user backs out of the flow. Runs while the sequencer
    /// holds its transition lock, so it must not call back into the sequencer.
    fn on_cancel(&self);
}

/// Listener built from two closures.
pub struct FnListener<S, C> {
    on_success: S,
    on_cancel: C,
}

impl<S, C> FnListener<S, C>
where
    S: Fn(Project) + Send + Sync,
    C: Fn() + Send + Sync,
{
    pub fn new(on_success: S, on_cancel: C) -> Self {
        Self {
            on_success,
            on_cancel,
        }
    }
}

impl<S, C> FlowListener for FnListener<S, C>
where
    S: Fn(Project) + Send + Sync,
    C: Fn() + Send + Sync,
{
    fn on_success(&self, project: Project) {
        (self.on_success)(project)
    }

    fn on_cancel(&self) {
        (self.on_cancel)()
    }
}

struct SequencerInner {
    template: Template,
    config: GeneratorConfig,
    toasts: ToastQueue,
    listener: Arc<dyn FlowListener>,
    /// Held while a transition is decided so `start`, `set_name` and `reset`
    /// never interleave.
    draft: Mutex<ProjectDraft>,
    step: watch::Sender<GeneratorStep>,
    logs: watch::Sender<Vec<String>>,
}

#[derive(Clone)]
pub struct GenerationSequencer {
    inner: Arc<SequencerInner>,
}

impl GenerationSequencer {
    pub fn new(
        template: Template,
        config: GeneratorConfig,
        toasts: ToastQueue,
        listener: Arc<dyn FlowListener>,
    ) -> Self {
        let (step, _) = watch::channel(GeneratorStep::Config);
        let (logs, _) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(SequencerInner {
                template,
                config,
                toasts,
                listener,
                draft: Mutex::new(ProjectDraft::default()),
                step,
                logs,
            }),
        }
    }

    pub fn template(&self) -> &Template {
        &self.inner.template
    }

    pub fn step(&self) -> GeneratorStep {
        *self.inner.step.borrow()
    }

    pub fn subscribe_step(&self) -> watch::Receiver<GeneratorStep> {
        self.inner.step.subscribe()
    }

    pub fn logs(&self) -> Vec<String> {
        self.inner.logs.borrow().clone()
    }

    pub fn subscribe_logs(&self) -> watch::Receiver<Vec<String>> {
        self.inner.logs.subscribe()
    }

    pub fn draft(&self) -> ProjectDraft {
        self.inner.draft.lock().clone()
    }

    /// Update the project name. Only allowed while configuring.
    pub fn set_name(&self, name: impl Into<String>) -> Result<(), GeneratorError> {
        let mut draft = self.inner.draft.lock();
        let step = self.step();
        if step != GeneratorStep::Config {
            return Err(GeneratorError::InvalidTransition {
                action: "rename project",
                step,
            });
        }
        draft.set_name(name);
        debug!(name = %draft.name(), slug = %draft.slug(), "project name updated");
        Ok(())
    }

    /// Validate the draft and run the whole script on the current task.
    pub async fn run(&self) -> Result<Project, GeneratorError> {
        let (draft, script) = self.begin()?;
        Ok(play(RunGuard::new(self.inner.clone()), draft, script).await)
    }

    /// Validate the draft and play the script on a spawned task.
    pub fn start(&self) -> Result<JoinHandle<Project>, GeneratorError> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|_| GeneratorError::NoRuntime)?;
        let (draft, script) = self.begin()?;
        Ok(handle.spawn(play(RunGuard::new(self.inner.clone()), draft, script)))
    }

    /// Leave the flow. Refused while a run is in progress.
    pub fn cancel(&self) -> Result<(), GeneratorError> {
        let _draft = self.inner.draft.lock();
        if self.step() == GeneratorStep::Generating {
            warn!(template_id = %self.inner.template.id, "cancel refused during generation");
            return Err(GeneratorError::NotInterruptible);
        }
        info!(template_id = %self.inner.template.id, "generation flow cancelled");
        self.inner.listener.on_cancel();
        Ok(())
    }

    /// Go back to `config` with an empty name after a finished run.
    pub fn reset(&self) -> Result<(), GeneratorError> {
        let mut draft = self.inner.draft.lock();
        match self.step() {
            GeneratorStep::Generating => Err(GeneratorError::NotInterruptible),
            GeneratorStep::Config | GeneratorStep::Success => {
                draft.set_name(String::new());
                self.inner.step.send_replace(GeneratorStep::Config);
                Ok(())
            }
        }
    }

    fn begin(&self) -> Result<(ProjectDraft, Vec<String>), GeneratorError> {
        let draft = self.inner.draft.lock();
        let step = self.step();
        if step != GeneratorStep::Config {
            warn!(step = %step, "start refused");
            return Err(GeneratorError::InvalidTransition {
                action: "start generation",
                step,
            });
        }

        let min = self.inner.config.min_slug_len;
        if !draft.is_valid(min) {
            warn!(name = %draft.name(), slug = %draft.slug(), min, "project name too short");
            self.inner.toasts.push(
                ToastMessage::error(NAME_TOO_SHORT_TITLE)
                    .with_description(format!("Use at least {} letters or numbers", min)),
            );
            return Err(GeneratorError::NameTooShort {
                slug: draft.slug().to_string(),
                len: draft.slug().len(),
                min,
            });
        }

        self.inner.logs.send_replace(Vec::new());
        self.inner.step.send_replace(GeneratorStep::Generating);
        info!(
            template_id = %self.inner.template.id,
            slug = %draft.slug(),
            "generation started"
        );
        Ok((draft.clone(), narration(&self.inner.template)))
    }
}

/// Owned by the playback future. Dropping it before `complete` puts the
/// sequencer back in `config`.
struct RunGuard {
    inner: Arc<SequencerInner>,
    completed: bool,
}

impl RunGuard {
    fn new(inner: Arc<SequencerInner>) -> Self {
        Self {
            inner,
            completed: false,
        }
    }

    fn complete(&mut self) {
        let _draft = self.inner.draft.lock();
        self.inner.step.send_replace(GeneratorStep::Success);
        self.completed = true;
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        if self.completed {
            return;
        }
        let _draft = self.inner.draft.lock();
        if *self.inner.step.borrow() == GeneratorStep::Generating {
            warn!(template_id = %self.inner.template.id, "generation abandoned before finishing");
            self.inner.step.send_replace(GeneratorStep::Config);
        }
    }
}

async fn play(mut guard: RunGuard, draft: ProjectDraft, script: Vec<String>) -> Project {
    let inner = guard.inner.clone();
    let step_delay = inner.config.step_delay();
    for (index, line) in script.into_iter().enumerate() {
        tokio::time::sleep(step_delay).await;
        debug!(index, line = %line, "generation log line");
        inner.logs.send_modify(|logs| logs.push(line));
    }
    tokio::time::sleep(inner.config.finish_delay()).await;

    let project = Project::synthesize(&draft, &inner.template, &inner.config);
    guard.complete();
    info!(
        project_id = %project.id,
        repo_url = %project.repo_url,
        deploy_url = %project.deploy_url,
        "generation finished"
    );
    inner.listener.on_success(project.clone());
    project
}
