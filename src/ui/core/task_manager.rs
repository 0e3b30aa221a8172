use super::actions::{Action, FieldKey};
use crate::search::{FetchTicket, OptionFetcher, RemoteOption, TimerHandle};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// What a background task is doing, used to find the task it supersedes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaskSlot {
    Debounce(FieldKey),
    Fetch(FieldKey),
}

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
}

/// Runs debounce timers and option fetches as tokio tasks.
///
/// Each field has at most one timer and one fetch in flight: spawning into an
/// occupied slot aborts the previous task. Results come back as [`Action`]s
/// on the channel returned by [`TaskManager::new`].
pub struct TaskManager {
    tasks: HashMap<TaskSlot, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Sender for components that report back outside of a spawned task
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_sender.clone()
    }

    /// Arm a debounce timer for a field, replacing any timer already armed
    pub fn spawn_debounce(&mut self, field: FieldKey, handle: TimerHandle, delay: Duration) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Debounce {} ({}ms)", field, delay.as_millis());
        let key = field.clone();

        let join = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(Action::DebounceElapsed { field, handle });
        });

        self.insert(TaskSlot::Debounce(key), join, description)
    }

    /// Fetch options for a field, aborting any fetch still running for it
    pub fn spawn_fetch(
        &mut self,
        field: FieldKey,
        ticket: FetchTicket,
        fetcher: Arc<dyn OptionFetcher<RemoteOption>>,
    ) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Fetch options for {}: '{}'", field, ticket.query());
        let key = field.clone();

        let join = tokio::spawn(async move {
            let result = fetcher.fetch(ticket.query()).await;
            let _ = action_sender.send(Action::OptionsLoaded { field, ticket, result });
        });

        self.insert(TaskSlot::Fetch(key), join, description)
    }

    fn insert(&mut self, slot: TaskSlot, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        if let Some(previous) = self.tasks.remove(&slot) {
            if !previous.handle.is_finished() {
                log::debug!("Tasks: aborting '{}'", previous.description);
                previous.handle.abort();
            }
        }

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
        };
        self.tasks.insert(slot, task);
        task_id
    }

    /// Abort whatever is pending for a field
    pub fn cancel_field(&mut self, field: &FieldKey) {
        for slot in [TaskSlot::Debounce(field.clone()), TaskSlot::Fetch(field.clone())] {
            if let Some(task) = self.tasks.remove(&slot) {
                task.handle.abort();
            }
        }
    }

    /// Check for completed tasks and clean them up
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskSlot> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(slot, _)| slot.clone())
            .collect();

        finished
            .into_iter()
            .filter_map(|slot| self.tasks.remove(&slot))
            .map(|task| task.id)
            .collect()
    }

    pub fn is_pending(&self, slot: &TaskSlot) -> bool {
        self.tasks.get(slot).is_some_and(|task| !task.handle.is_finished())
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
