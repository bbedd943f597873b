//! Error types shared by the linked containers.

use core::fmt;

/// Error attempting to access or remove an element from an empty container.
///
/// Always recoverable: check `is_empty()` first, or catch and branch.
///
/// # Example
///
/// ```
/// use chainlist::{Empty, LinkedDeque};
///
/// let mut deque: LinkedDeque<u64> = LinkedDeque::new();
/// assert_eq!(deque.delete_first(), Err(Empty));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container is empty")
    }
}

impl std::error::Error for Empty {}

/// Error returned when a [`Position`](crate::Position) fails validation.
///
/// Both variants are usage errors, not data-driven conditions: they
/// propagate to the caller immediately and are never silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPosition {
    /// The position was created by a different list instance.
    Foreign,
    /// The node the position referred to has since been deleted.
    Dangling,
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPosition::Foreign => {
                write!(f, "position does not belong to this container")
            }
            InvalidPosition::Dangling => write!(f, "position is no longer valid"),
        }
    }
}

impl std::error::Error for InvalidPosition {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Empty.to_string(), "container is empty");
        assert_eq!(
            InvalidPosition::Foreign.to_string(),
            "position does not belong to this container"
        );
        assert_eq!(
            InvalidPosition::Dangling.to_string(),
            "position is no longer valid"
        );
    }
}
