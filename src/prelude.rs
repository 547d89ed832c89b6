//! Commonly used imports
//!
//! Use `use iterable::prelude::*;` for quick access to the most common types and traits.

// Protocol
pub use crate::{Enumerable, Iterable, Materializable, Resettable, Rewindable};

// Capability negotiation
pub use crate::{Capabilities, Capability};

// Containers and values
pub use crate::{Boxed, Pair, Pairs, Strings, Vector};

// Facade
pub use crate::Iter;

// Engine functions
pub use crate::combinators;
