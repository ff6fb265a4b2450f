use core::fmt;

/// Names the operations of `ArrayList`. Used for index validation and for
/// error messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Clear,
    Size,
    IsEmpty,
    Contains,
    Add,
    AddByIndex,
    Get,
    Set,
    Remove,
    IndexOf,
    ToString,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Clear => "clear",
            Operation::Size => "size",
            Operation::IsEmpty => "is_empty",
            Operation::Contains => "contains",
            Operation::Add => "add",
            Operation::AddByIndex => "insert",
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::Remove => "remove",
            Operation::IndexOf => "index_of",
            Operation::ToString => "to_string_with",
        }
    }

    /// Returns true if this operation takes an index argument.
    pub fn takes_index(self) -> bool {
        match self {
            Operation::AddByIndex | Operation::Get | Operation::Set | Operation::Remove => true,
            _ => false,
        }
    }

    /// Validates `index` against a list of length `size`.
    ///
    /// Insertion accepts `index <= size` (inserting at `size` appends). Every other
    /// indexed operation accepts `index < size`. Asking to validate an index for an
    /// operation that takes none is a usage error and returns `InvalidArgument`.
    pub fn check_index(self, index: usize, size: usize) -> Result<(), ListError> {
        if !self.takes_index() {
            return Err(ListError::InvalidArgument { operation: self });
        }
        let valid = if self == Operation::AddByIndex {
            index <= size
        } else {
            index < size
        };
        if valid {
            Ok(())
        } else {
            Err(ListError::OutOfRange {
                operation: self,
                index,
                size,
            })
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListError {
    /// The index is outside the valid range of the operation.
    OutOfRange {
        operation: Operation,
        index: usize,
        size: usize,
    },
    /// Index validation was requested for an operation that takes no index.
    InvalidArgument { operation: Operation },
    /// The buffer could not be grown to `requested` slots.
    AllocationFailed { requested: usize },
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::OutOfRange {
                operation,
                index,
                size,
            } => write!(
                f,
                "operation: {} [size of ArrayList: {}, try to operate at pos: {}]",
                operation, size, index
            ),
            ListError::InvalidArgument { operation } => write!(
                f,
                "operation: {} [no index parameter need to be passed to the operation]",
                operation
            ),
            ListError::AllocationFailed { requested } => {
                write!(f, "failed to allocate buffer for {} elements", requested)
            }
        }
    }
}

impl std::error::Error for ListError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueueError {
    /// The backing store cannot grow to hold another element.
    Full,
    /// Dequeue was called on an empty queue.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Full => f.write_str("queue full"),
            QueueError::Empty => f.write_str("queue empty"),
        }
    }
}

impl std::error::Error for QueueError {}
