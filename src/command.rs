//! Group commands queued from other contexts
//!
//! Interrupt handlers or secondary tasks can request group changes without
//! touching the drivers directly. The refresh loop drains the queue with
//! [`LedHal::process_pending`](crate::LedHal::process_pending). The queue is
//! a `heapless::Deque` behind a `critical-section` mutex.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;

/// Request applied to the driver table by the refresh loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalCommand {
    /// Set every driver in a group to one color
    SetGroupColor { group: u8, color: Rgb },
    /// Set the brightness level of every driver in a group
    SetGroupBrightness { group: u8, level: u8 },
    /// Turn a group on
    GroupOn(u8),
    /// Turn a group off
    GroupOff(u8),
    /// Turn every driver off
    Off,
}

/// Returned when the queue has no free slot; carries the rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub HalCommand);

/// Returned when there is nothing to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEmpty;

/// Bounded command queue safe to share with interrupt handlers.
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<HalCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sending handle. Any number can coexist.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    /// Get a receiving handle, normally held by the refresh loop.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Enqueue a command, returning it back if the queue is full.
    pub fn try_send(&self, command: HalCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    /// Dequeue the oldest command.
    pub fn try_receive(&self) -> Result<HalCommand, QueueEmpty> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(QueueEmpty)
        })
    }

    /// Number of queued commands
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: HalCommand) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }

    /// Queue a color change for a group
    pub fn set_group_color(&self, group: u8, color: Rgb) -> Result<(), QueueFull> {
        self.try_send(HalCommand::SetGroupColor { group, color })
    }

    /// Queue a brightness change for a group
    pub fn set_group_brightness(&self, group: u8, level: u8) -> Result<(), QueueFull> {
        self.try_send(HalCommand::SetGroupBrightness { group, level })
    }
}

/// Receiving handle for a [`CommandQueue`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<HalCommand, QueueEmpty> {
        self.queue.try_receive()
    }
}
