use core::cell::Cell;

/// single slot hand-off from an interrupt to the main loop.
/// only touch it inside `avr_device::interrupt::free`
pub struct Mailbox<T: Copy> {
    slot: Cell<Option<T>>,
}

impl<T: Copy> Mailbox<T> {
    pub const fn new() -> Self {
        Self {
            slot: Cell::new(None),
        }
    }

    /// replaces a value that was never taken
    pub fn publish(&self, value: T) {
        self.slot.set(Some(value));
    }

    /// read once, leaves the slot empty
    pub fn take(&self) -> Option<T> {
        self.slot.take()
    }
}

impl<T: Copy> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_is_read_once() {
        let mailbox = Mailbox::new();
        mailbox.publish(7u32);
        assert_eq!(mailbox.take(), Some(7));
        assert_eq!(mailbox.take(), None);
    }

    #[test]
    fn latest_publish_wins() {
        let mailbox = Mailbox::new();
        mailbox.publish(1u32);
        mailbox.publish(2);
        assert_eq!(mailbox.take(), Some(2));
    }
}
