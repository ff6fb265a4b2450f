use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Counts how many `Tracked` values sharing it have been dropped.
pub type DropCounter = Rc<Cell<usize>>;

pub fn drop_counter() -> DropCounter {
    Rc::new(Cell::new(0))
}

/// A test element that records its own drop. Compares by `id`.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    drops: DropCounter,
}

impl Tracked {
    pub fn new(id: u32, drops: &DropCounter) -> Self {
        Self {
            id,
            drops: drops.clone(),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.id, &self.drops)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.id.partial_cmp(&other.id)
    }
}
