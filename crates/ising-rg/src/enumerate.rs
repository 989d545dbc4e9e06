use crate::lattice::{Configuration, CONFIGURATION_COUNT};

/// Iterator over every fine configuration in ascending index order.
#[derive(Debug, Clone)]
pub struct Configurations {
    next: usize,
}

/// Returns an iterator yielding each of the 64 configurations exactly once.
pub fn configurations() -> Configurations {
    Configurations { next: 0 }
}

impl Iterator for Configurations {
    type Item = Configuration;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= CONFIGURATION_COUNT {
            return None;
        }
        let config = Configuration::decode(self.next as u8);
        self.next += 1;
        Some(config)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CONFIGURATION_COUNT.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Configurations {}

impl std::iter::FusedIterator for Configurations {}
