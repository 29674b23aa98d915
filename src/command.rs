//! Bounded command queue between the text API context and the render loop.
//!
//! Commands are drained between frames only, so a scheme replacement can
//! never land in the middle of a render and tear the frame. Built on
//! `critical-section` and `heapless::Deque`, safe to feed from another
//! execution context or an interrupt.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::scheme::ColorScheme;

/// Requests the render loop honors between frames.
#[derive(Debug, Clone, Copy)]
pub enum ClockCommand {
    /// Replace brightness and the whole palette atomically.
    SetScheme(ColorScheme),
    /// Run the output sweep before the next repaint.
    RunSelfTest,
}

/// Error returned when trying to send to a full queue.
///
/// Carries the rejected command back to the sender.
#[derive(Debug, Clone, Copy)]
pub struct SendError(pub ClockCommand);

/// A bounded, thread-safe clock command queue.
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<ClockCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get the receiver handle the scheduler drains.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    fn try_send(&self, command: ClockCommand) -> Result<(), SendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(SendError)
        })
    }

    fn try_receive(&self) -> Option<ClockCommand> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to enqueue a command.
    ///
    /// Returns `Err(SendError(command))` if the queue is full.
    pub fn try_send(&self, command: ClockCommand) -> Result<(), SendError> {
        self.channel.try_send(command)
    }
}

/// A receiver handle for a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Take the next pending command, if any.
    pub fn try_receive(&self) -> Option<ClockCommand> {
        self.channel.try_receive()
    }
}
