//! Channel registry
//!
//! Tracks which channel descriptors have been registered with the
//! notification subsystem. Registration is keyed by descriptor id and
//! happens at most once per id.

use std::collections::HashMap;

use super::ChannelDescriptor;

/// Outcome of a channel registration attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The channel was registered by this call
    Created,
    /// A channel with the same id already existed; nothing changed
    AlreadyRegistered,
    /// The platform has no channel concept
    NotRequired,
    /// Registration failed (logged, not fatal)
    Failed,
}

/// In-memory set of registered channels
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: HashMap<String, ChannelDescriptor>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor. The first descriptor seen for an id wins.
    pub fn register(&mut self, descriptor: &ChannelDescriptor) -> Registration {
        if self.channels.contains_key(&descriptor.id) {
            return Registration::AlreadyRegistered;
        }
        self.channels
            .insert(descriptor.id.clone(), descriptor.clone());
        Registration::Created
    }

    pub fn contains(&self, id: &str) -> bool {
        self.channels.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&ChannelDescriptor> {
        self.channels.get(id)
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_registration_creates() {
        let mut registry = ChannelRegistry::new();
        assert_eq!(
            registry.register(&ChannelDescriptor::timer()),
            Registration::Created
        );
        assert!(registry.contains(ChannelDescriptor::TIMER_ID));
    }

    #[test]
    fn second_registration_is_noop() {
        let mut registry = ChannelRegistry::new();
        registry.register(&ChannelDescriptor::timer());
        assert_eq!(
            registry.register(&ChannelDescriptor::timer()),
            Registration::AlreadyRegistered
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn reregistration_does_not_replace_metadata() {
        let mut registry = ChannelRegistry::new();
        registry.register(&ChannelDescriptor::timer());
        registry.register(&ChannelDescriptor::timer_named("Other"));

        let stored = registry.get(ChannelDescriptor::TIMER_ID).unwrap();
        assert_eq!(stored.name, "Pomodoro Timer");
    }

    #[test]
    fn distinct_ids_are_separate_channels() {
        let mut registry = ChannelRegistry::new();
        registry.register(&ChannelDescriptor::timer());
        registry.register(&ChannelDescriptor::new("other", "Other", "Other channel"));
        assert_eq!(registry.len(), 2);
    }
}
