use std::fmt::{Debug, Formatter};
use std::iter::FusedIterator;

/// Slot position inside a [BucketList] arena. `u32::MAX` marks the end of a chain.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
struct Link(u32);

impl Link {
    const NONE: Link = Link(u32::MAX);

    #[inline(always)]
    fn new(x: usize) -> Self {
        debug_assert!(x < u32::MAX as usize);
        Self(x as u32)
    }

    #[inline(always)]
    fn get(self) -> Option<BucketHandle> {
        (self != Self::NONE).then_some(BucketHandle(self.0))
    }
}

impl From<BucketHandle> for Link {
    fn from(handle: BucketHandle) -> Self {
        Self(handle.0)
    }
}

/// Handle to an element of a [BucketList].
///
/// A handle stays valid until its element is removed, no matter how the rest of the list changes.
/// It can only be used with the list that returned it.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct BucketHandle(u32);

impl BucketHandle {
    #[inline(always)]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl Debug for BucketHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BucketHandle").field(&self.0).finish()
    }
}

#[derive(Debug, Clone)]
struct Slot<T> {
    value: T,
    prev: Link,
    next: Link,
    occupied: bool,
}

/// Doubly linked list stored in an arena of slots.
///
/// Insertion at both ends and removal by [BucketHandle] are O(1). Freed slots are reused by later
/// insertions, so the arena never grows beyond the largest number of elements held at once.
#[derive(Clone)]
pub struct BucketList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<BucketHandle>,
    first: Link,
    last: Link,
    len: usize,
}

impl<T> Default for BucketList<T> {
    fn default() -> Self {
        Self { slots: Vec::new(), free: Vec::new(), first: Link::NONE, last: Link::NONE, len: 0 }
    }
}

impl<T> BucketList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), ..Self::default() }
    }

    /// Number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no element.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every element. All handles handed out so far become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.first = Link::NONE;
        self.last = Link::NONE;
        self.len = 0;
    }

    fn alloc(&mut self, value: T, prev: Link, next: Link) -> BucketHandle {
        self.len += 1;
        if let Some(handle) = self.free.pop() {
            self.slots[handle.index()] = Slot { value, prev, next, occupied: true };
            handle
        } else {
            let handle = BucketHandle(Link::new(self.slots.len()).0);
            self.slots.push(Slot { value, prev, next, occupied: true });
            handle
        }
    }

    /// Inserts `value` before the first element and returns its handle.
    pub fn push_front(&mut self, value: T) -> BucketHandle {
        let old_first = self.first;
        let handle = self.alloc(value, Link::NONE, old_first);
        match old_first.get() {
            Some(first) => self.slots[first.index()].prev = handle.into(),
            None => self.last = handle.into(),
        }
        self.first = handle.into();
        handle
    }

    /// Inserts `value` after the last element and returns its handle.
    pub fn push_back(&mut self, value: T) -> BucketHandle {
        let old_last = self.last;
        let handle = self.alloc(value, old_last, Link::NONE);
        match old_last.get() {
            Some(last) => self.slots[last.index()].next = handle.into(),
            None => self.first = handle.into(),
        }
        self.last = handle.into();
        handle
    }

    /// Handle of the first element.
    pub fn handle_front(&self) -> Option<BucketHandle> {
        self.first.get()
    }

    /// First element.
    pub fn front(&self) -> Option<&T> {
        self.first.get().map(|h| &self.slots[h.index()].value)
    }

    /// Last element.
    pub fn back(&self) -> Option<&T> {
        self.last.get().map(|h| &self.slots[h.index()].value)
    }

    /// Returns the element behind `handle`, or `None` if its slot is currently free.
    pub fn get(&self, handle: BucketHandle) -> Option<&T> {
        self.slots.get(handle.index()).filter(|slot| slot.occupied).map(|slot| &slot.value)
    }

    /// Returns an iterator from the first to the last element.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, current: self.first, remaining: self.len }
    }
}

impl<T: Copy> BucketList<T> {
    /// Unlinks the element behind `handle` and returns it.
    ///
    /// The handle must come from this list and must not have been removed before. The handles of
    /// all other elements stay valid.
    pub fn remove(&mut self, handle: BucketHandle) -> T {
        let slot = &mut self.slots[handle.index()];
        debug_assert!(slot.occupied, "{handle:?} was already removed");
        slot.occupied = false;
        let prev = std::mem::replace(&mut slot.prev, Link::NONE);
        let next = std::mem::replace(&mut slot.next, Link::NONE);
        let value = slot.value;
        match prev.get() {
            Some(prev) => self.slots[prev.index()].next = next,
            None => self.first = next,
        }
        match next.get() {
            Some(next) => self.slots[next.index()].prev = prev,
            None => self.last = prev,
        }
        self.free.push(handle);
        self.len -= 1;
        value
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.first.get().map(|first| self.remove(first))
    }
}

/// Iterator over the elements of a [BucketList], see [BucketList::iter].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    list: &'a BucketList<T>,
    current: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.current.get()?;
        let slot = &self.list.slots[handle.index()];
        self.current = slot.next;
        self.remaining -= 1;
        Some(&slot.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a BucketList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for BucketList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::BucketList;

    fn to_vec(list: &BucketList<u32>) -> Vec<u32> {
        list.iter().copied().collect()
    }

    #[test]
    fn new() {
        let list = BucketList::<u32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.front(), None);
        assert_eq!(list.iter().next(), None);
    }

    #[test]
    fn push_front_and_back() {
        let mut list = BucketList::with_capacity(4);
        list.push_front(2);
        list.push_front(1);
        list.push_back(3);
        assert_eq!(to_vec(&list), [1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.len(), 3);
        assert_eq!(list.iter().len(), 3);
    }

    #[test]
    fn remove_keeps_other_handles() {
        let mut list = BucketList::new();
        let a = list.push_back(10);
        let b = list.push_back(20);
        let c = list.push_back(30);

        assert_eq!(list.remove(b), 20);
        assert_eq!(to_vec(&list), [10, 30]);
        assert_eq!(list.get(a), Some(&10));
        assert_eq!(list.get(b), None);
        assert_eq!(list.get(c), Some(&30));

        assert_eq!(list.remove(a), 10);
        assert_eq!(to_vec(&list), [30]);
        assert_eq!(list.remove(c), 30);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = BucketList::new();
        let a = list.push_back(1);
        let b = list.push_back(2);
        list.remove(a);
        let c = list.push_front(3);
        assert_eq!(c, a);
        assert_eq!(to_vec(&list), [3, 2]);
        assert_eq!(list.get(b), Some(&2));
        assert_eq!(list.remove(b), 2);
        assert_eq!(to_vec(&list), [3]);
    }

    #[test]
    fn iteration_restarts_from_head() {
        let mut list = BucketList::new();
        for i in 0..5 {
            list.push_back(i);
        }
        let first: Vec<_> = list.iter().copied().collect();
        let second: Vec<_> = (&list).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(format!("{list:?}"), "[0, 1, 2, 3, 4]");
    }

    #[test]
    fn debug_output() {
        let mut list = BucketList::new();
        let handle = list.push_back(7u32);
        assert_eq!(format!("{handle:?}"), "BucketHandle(0)");
        let iter = format!("{:?}", list.iter());
        assert!(iter.starts_with("Iter {"), "{iter}");
        assert!(iter.contains("Link(0)"), "{iter}");
    }

    #[test]
    fn pop_front_and_clear() {
        let mut list = BucketList::new();
        list.push_back(1);
        list.push_back(2);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);

        list.push_back(4);
        list.push_back(5);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(to_vec(&list), Vec::<u32>::new());
        list.push_front(6);
        assert_eq!(to_vec(&list), [6]);
    }
}
