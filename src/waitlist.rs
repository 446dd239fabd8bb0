//! First-come, first-served queue of guests who asked for a room that was taken.

use std::collections::VecDeque;

use crate::room::Customer;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Waitlist {
    entries: VecDeque<Customer>,
}

impl Waitlist {
    /// Create an empty waitlist.
    pub fn new() -> Self {
        Waitlist {
            entries: VecDeque::new(),
        }
    }

    /// Append at the tail. Returns the 1-based position of the new entry.
    pub fn push(&mut self, customer: Customer) -> usize {
        self.entries.push_back(customer);
        self.entries.len()
    }

    /// Put a customer back at the head, ahead of everyone already waiting.
    pub fn push_front(&mut self, customer: Customer) {
        self.entries.push_front(customer);
    }

    /// Remove and return the head of the line.
    pub fn pop(&mut self) -> Option<Customer> {
        self.entries.pop_front()
    }

    /// The head of the line, if anyone is waiting.
    pub fn peek(&self) -> Option<&Customer> {
        self.entries.front()
    }

    /// Number of waiting customers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether anyone with this name is waiting.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|c| c.name == name)
    }

    /// Entries in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.entries.iter()
    }
}
