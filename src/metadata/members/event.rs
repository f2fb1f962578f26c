use std::sync::{Arc, OnceLock};

use crate::metadata::{customattributes::CustomAttributeList, members::MethodRef, token::Token};

/// A reference-counted pointer to an `Event`
pub type EventRc = Arc<Event>;
/// A vector that holds the events a type owns
pub type EventList = Arc<boxcar::Vec<EventRc>>;

/// Represents an Event that a Type can have, with its accessor methods linked through
/// `MethodSemantics`
pub struct Event {
    /// Token
    pub token: Token,
    /// The name of the event
    pub name: String,
    /// The `Method` that triggers '`OnAdd`'
    pub fn_on_add: OnceLock<MethodRef>,
    /// The `Method` that triggers '`OnRemove`'
    pub fn_on_remove: OnceLock<MethodRef>,
    /// Custom attributes attached to this event
    pub custom_attributes: CustomAttributeList,
}

impl Event {
    /// Create an event without accessors
    pub fn new(token: Token, name: &str) -> Self {
        Event {
            token,
            name: name.to_string(),
            fn_on_add: OnceLock::new(),
            fn_on_remove: OnceLock::new(),
            custom_attributes: Arc::new(boxcar::Vec::new()),
        }
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("token", &self.token)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
