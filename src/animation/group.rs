//! Animation group
//!
//! Owns a fixed, ordered set of animations and drives them as one.

use embassy_time::Instant;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use super::Tickable;
use crate::color::Rgb;
use crate::error::Error;

/// Group of animations ticked together in insertion order
///
/// The group holds no pixel state of its own. Members are expected to draw
/// into disjoint targets; if two of them share pixels, the later one wins.
/// `N` is the maximum number of members.
#[derive(Debug, Clone)]
pub struct AnimationGroup<A, const N: usize> {
    members: Vec<A, N>,
}

impl<A: Tickable, const N: usize> AnimationGroup<A, N> {
    /// Create an empty group
    pub const fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Create a group holding exactly `members`
    pub fn from_members(members: [A; N]) -> Self {
        #[cfg(feature = "esp32-log")]
        println!("[AnimationGroup.from_members] {} members", N);

        Self {
            members: members.into_iter().collect(),
        }
    }

    /// Append a member
    ///
    /// Meant to be used while building the group at startup.
    pub fn push(&mut self, member: A) -> Result<(), Error> {
        self.members
            .push(member)
            .map_err(|_| Error::GroupFull { capacity: N })
    }

    /// Append a member, builder style
    pub fn with(mut self, member: A) -> Result<Self, Error> {
        self.push(member)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[A] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [A] {
        &mut self.members
    }
}

impl<A: Tickable, const N: usize> Default for AnimationGroup<A, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Tickable, const N: usize> Tickable for AnimationGroup<A, N> {
    fn tick(&mut self, now: Instant) {
        for member in &mut self.members {
            member.tick(now);
        }
    }

    fn reset(&mut self) {
        for member in &mut self.members {
            member.reset();
        }
    }

    fn freeze(&mut self) {
        for member in &mut self.members {
            member.freeze();
        }
    }

    fn resume(&mut self) {
        for member in &mut self.members {
            member.resume();
        }
    }

    fn fill(&mut self, color: Rgb) {
        for member in &mut self.members {
            member.fill(color);
        }
    }

    /// A group cycle completes once every member has completed it
    fn cycle_count(&self) -> u32 {
        self.members
            .iter()
            .map(Tickable::cycle_count)
            .min()
            .unwrap_or(0)
    }
}
