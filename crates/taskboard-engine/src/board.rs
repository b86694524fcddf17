use std::sync::Arc;

use taskboard_api::{SessionStore, TaskApi};
use taskboard_domain::{BoardColumns, DraftErrors, Task, TaskDraft, TaskId, TaskStatus};

use crate::banner::{Banner, TRANSIENT_TTL};
use crate::mutation::MutationEngine;

/// State of the open create surface; errors here are scoped to it and do not
/// touch the board-wide banner.
#[derive(Debug, Default, Clone)]
pub struct CreateContext {
    pub field_errors: DraftErrors,
    pub error: Option<String>,
}

/// State of the open edit surface, bound to one task. It stays open on
/// failure so the user can retry or cancel.
#[derive(Debug, Clone)]
pub struct EditContext {
    pub task_id: TaskId,
    pub draft: TaskDraft,
    pub field_errors: DraftErrors,
    pub error: Option<String>,
}

/// Owns the canonical task collection and the board's transient state, and
/// dispatches user intents to the mutation engine.
///
/// The collection is the single source of truth for rendering; after any
/// completed operation (success or rolled-back failure) it matches what the
/// remote store would return for a fresh fetch. Every mutating operation
/// borrows the controller mutably for its whole async body, so two mutations
/// cannot overlap and a rollback always restores the state its own mutation
/// started from.
pub struct BoardController<A> {
    engine: MutationEngine<A>,
    api: Arc<A>,
    session: Arc<SessionStore>,
    tasks: Vec<Task>,
    loading: bool,
    load_error: Option<String>,
    updating: bool,
    banner: Option<Banner>,
    dragged: Option<Task>,
    create: Option<CreateContext>,
    edit: Option<EditContext>,
    pending_delete: Option<TaskId>,
}

impl<A: TaskApi> BoardController<A> {
    pub fn new(api: Arc<A>, session: Arc<SessionStore>) -> Self {
        Self {
            engine: MutationEngine::new(Arc::clone(&api)),
            api,
            session,
            tasks: Vec::new(),
            loading: true,
            load_error: None,
            updating: false,
            banner: None,
            dragged: None,
            create: None,
            edit: None,
            pending_delete: None,
        }
    }

    /// Fetch the full collection from the remote store. On failure the
    /// previous collection is left untouched and a retry is simply another
    /// `load()` call.
    pub async fn load(&mut self) {
        self.loading = true;
        self.load_error = None;

        match self.api.fetch_tasks().await {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "loaded task collection");
                self.tasks = tasks;
            }
            Err(err) => {
                tracing::warn!(%err, "initial load failed");
                self.load_error = Some(err.to_string());
            }
        }
        self.loading = false;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The partitioned view the presentation layer renders.
    pub fn columns(&self) -> BoardColumns<'_> {
        BoardColumns::partition(&self.tasks)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Drop the banner once its display window has passed. Called from the
    /// host's render/update tick.
    pub fn tick(&mut self) {
        if self
            .banner
            .as_ref()
            .is_some_and(|b| b.is_expired(TRANSIENT_TTL))
        {
            self.banner = None;
        }
    }

    // --- drag and drop ---

    pub fn dragged(&self) -> Option<&Task> {
        self.dragged.as_ref()
    }

    /// Pick a task up. Unknown ids are ignored.
    pub fn begin_drag(&mut self, id: TaskId) {
        self.dragged = self.tasks.iter().find(|t| t.id == id).cloned();
    }

    /// Hovering a column changes nothing; the drop target merely has to
    /// accept the gesture.
    pub fn drag_over(&self) {}

    /// Release the held task over a column. Dropping on the task's own
    /// column is a no-op with no repository call; otherwise the move runs
    /// through the mutation engine. The held task is released either way,
    /// and a failed move surfaces on the transient banner.
    pub async fn drop_on(&mut self, status: TaskStatus) {
        let Some(dragged) = self.dragged.take() else {
            return;
        };
        if dragged.has_status(status) {
            return;
        }

        self.updating = true;
        if let Err(err) = self.engine.move_task(&mut self.tasks, dragged.id, status).await {
            self.banner = Some(Banner::error(err.to_string()));
        }
        self.updating = false;
    }

    // --- create ---

    pub fn create(&self) -> Option<&CreateContext> {
        self.create.as_ref()
    }

    pub fn open_create(&mut self) {
        self.create = Some(CreateContext::default());
    }

    pub fn cancel_create(&mut self) {
        self.create = None;
    }

    /// Submit the create form. Validation failures and repository errors
    /// stay inside the create context; the surface closes only on confirmed
    /// success.
    pub async fn submit_create(&mut self, draft: TaskDraft) {
        let Some(ctx) = self.create.as_mut() else {
            return;
        };
        ctx.error = None;

        if let Err(errors) = draft.validate() {
            ctx.field_errors = errors;
            return;
        }
        ctx.field_errors = DraftErrors::default();

        let Some(user) = self.session.user() else {
            ctx.error = Some("User is not authenticated".to_string());
            return;
        };

        match self
            .engine
            .create_task(&mut self.tasks, &draft, user.user_id)
            .await
        {
            Ok(_) => self.create = None,
            Err(err) => {
                if let Some(ctx) = self.create.as_mut() {
                    ctx.error = Some(err.to_string());
                }
            }
        }
    }

    // --- edit ---

    pub fn edit(&self) -> Option<&EditContext> {
        self.edit.as_ref()
    }

    /// Mutable access for the form binding to the draft under edit.
    pub fn edit_mut(&mut self) -> Option<&mut EditContext> {
        self.edit.as_mut()
    }

    /// Open the edit surface for one task, seeded with its current content.
    pub fn open_edit(&mut self, id: TaskId) {
        self.edit = self.tasks.iter().find(|t| t.id == id).map(|task| EditContext {
            task_id: task.id,
            draft: TaskDraft::from_task(task),
            field_errors: DraftErrors::default(),
            error: None,
        });
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Submit the edit surface's draft. On success the task is patched, the
    /// surface closes, and a success banner shows; on failure the surface
    /// stays open with the error scoped to it and the collection untouched.
    pub async fn submit_edit(&mut self) {
        let Some(ctx) = self.edit.as_mut() else {
            return;
        };
        ctx.error = None;

        let draft = ctx.draft.clone();
        if let Err(errors) = draft.validate() {
            ctx.field_errors = errors;
            return;
        }
        ctx.field_errors = DraftErrors::default();
        let task_id = ctx.task_id;

        match self
            .engine
            .update_fields(&mut self.tasks, task_id, &draft)
            .await
        {
            Ok(()) => {
                self.edit = None;
                self.banner = Some(Banner::success("Task updated"));
            }
            Err(err) => {
                if let Some(ctx) = self.edit.as_mut() {
                    ctx.error = Some(err.to_string());
                }
            }
        }
    }

    // --- delete ---

    pub fn pending_delete(&self) -> Option<TaskId> {
        self.pending_delete
    }

    /// Ask for confirmation before deleting. Nothing is mutated and no
    /// repository call is made until `confirm_delete`.
    pub fn request_delete(&mut self, id: TaskId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Run the confirmed delete through the mutation engine; failure
    /// restores the task in place and surfaces on the transient banner.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        self.updating = true;
        match self.engine.delete_task(&mut self.tasks, id).await {
            Ok(()) => self.banner = Some(Banner::success("Task deleted")),
            Err(err) => self.banner = Some(Banner::error(err.to_string())),
        }
        self.updating = false;
    }
}
