use super::Sortable;
use crate::compare::less;

/// Sorts a flat list of group labels.
#[derive(Debug)]
pub struct GroupSorter<'a, S> {
    groups: &'a mut [S],
    ascending: bool,
}

impl<'a, S: AsRef<str>> GroupSorter<'a, S> {
    pub fn new(groups: &'a mut [S], ascending: bool) -> Self {
        Self { groups, ascending }
    }
}

impl<S: AsRef<str>> Sortable for GroupSorter<'_, S> {
    fn len(&self) -> usize {
        self.groups.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.groups.swap(i, j);
    }

    #[allow(clippy::indexing_slicing)] // Indices come from the sort driver, always < len()
    fn is_less(&self, i: usize, j: usize) -> bool {
        less(
            self.ascending,
            self.groups[i].as_ref(),
            self.groups[j].as_ref(),
        )
    }
}
