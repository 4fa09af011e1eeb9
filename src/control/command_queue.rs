//! Pending light commands.
//!
//! Producers (a network task, an interrupt handler) push [`LightCommand`]s
//! and the control loop drains them with
//! [`LightControl::process_pending`](super::LightControl::process_pending).
//! A command that fully overrides the newest pending one takes its slot, so
//! a fast dimmer fills a single entry instead of the whole queue.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use super::LightCommand;

/// Returned by [`CommandQueue::try_send`] when the queue is full.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueueFull(pub LightCommand);

/// Fixed capacity, interrupt-safe queue of light commands.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<LightCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for producers. Any number may coexist.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Handle for the control loop.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Queues `command`, replacing the newest pending command it
    /// supersedes. Returns the command back if the queue is full.
    pub fn try_send(&self, command: LightCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if let Some(pending) = queue
                .back_mut()
                .filter(|pending| command.supersedes(pending))
            {
                *pending = command;
                return Ok(());
            }
            queue.push_back(command).map_err(QueueFull)
        })
    }

    /// Oldest pending command, if any.
    pub fn try_receive(&self) -> Option<LightCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every pending command.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().clear());
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle of a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: LightCommand) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }
}

/// Consumer handle of a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<LightCommand> {
        self.queue.try_receive()
    }
}
