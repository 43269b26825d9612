use std::collections::VecDeque;

type Task = Box<dyn FnOnce()>;

/// A single-threaded queue of tasks deferred to the next scheduling turn.
///
/// Nothing runs when a task is queued; `run_pending` runs everything queued so far, in order.
///
/// # Examples
/// ```rust
/// use ml_deconstructed::scheduler::TaskQueue;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let ran = Rc::new(Cell::new(false));
/// let mut queue = TaskQueue::new();
/// let flag = ran.clone();
/// queue.defer(move || flag.set(true));
///
/// assert!(!ran.get());
/// assert_eq!(queue.run_pending(), 1);
/// assert!(ran.get());
/// ```
#[derive(Default)]
pub struct TaskQueue {
    tasks: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` for the next turn
    pub fn defer(&mut self, task: impl FnOnce() + 'static) {
        self.tasks.push_back(Box::new(task));
    }

    /// Runs one turn.
    ///
    /// # Returns
    ///
    /// - `usize` - Number of tasks that ran
    pub fn run_pending(&mut self) -> usize {
        let turn: Vec<Task> = self.tasks.drain(..).collect();
        let count = turn.len();
        for task in turn {
            task();
        }
        count
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("pending", &self.tasks.len())
            .finish()
    }
}
