/// Trait for elements that can be stored in an `IndexedHeap`.
///
/// The heap keeps the index of each element synchronized with the element's position,
/// so that an element can be removed or re-prioritized later without a linear scan.
pub trait HeapElement {
    /// Type of the priority. Smaller values are popped first.
    type Priority: PartialOrd;

    /// Returns the priority of the element.
    fn get_priority(&self) -> &Self::Priority;

    /// Returns the current position in the heap, or `None` if the element is not in the heap.
    fn get_heap_index(&self) -> Option<usize>;

    /// Sets the current position in the heap.
    fn set_heap_index(&mut self, index: Option<usize>);
}

/// Binary min-heap over handles of elements stored in an external arena.
///
/// Every operation takes the arena as an argument.
/// A handle is the index of an element in the arena.
/// Ties are broken by the structure of the heap, so the order of elements with the same priority is not stable.
#[derive(Clone, Debug, Default)]
pub struct IndexedHeap {
    handles: Vec<usize>,
}

impl IndexedHeap {
    /// Creates a new heap with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Returns the handle of the element with the smallest priority without removing it.
    pub fn peek(&self) -> Option<usize> {
        self.handles.first().copied()
    }

    /// Inserts an element.
    pub fn push<N>(&mut self, elements: &mut [N], handle: usize)
    where
        N: HeapElement,
    {
        debug_assert!(
            elements[handle].get_heap_index().is_none(),
            "element {handle} is already in the heap"
        );

        let index = self.handles.len();
        elements[handle].set_heap_index(Some(index));
        self.handles.push(handle);
        self.sift_up(elements, index);
    }

    /// Removes the element with the smallest priority and returns its handle.
    pub fn pop<N>(&mut self, elements: &mut [N]) -> Option<usize>
    where
        N: HeapElement,
    {
        let last = self.handles.len().checked_sub(1)?;
        self.swap(elements, 0, last);
        self.sift_down(elements, 0, last);

        self.take_last(elements)
    }

    /// Removes the element at the given position and returns its handle.
    ///
    /// The position is usually obtained by `HeapElement::get_heap_index`.
    /// Returns `None` if the position is out of range.
    pub fn remove<N>(&mut self, elements: &mut [N], index: usize) -> Option<usize>
    where
        N: HeapElement,
    {
        if index >= self.handles.len() {
            return None;
        }

        let last = self.handles.len() - 1;

        if index != last {
            self.swap(elements, index, last);

            if !self.sift_down(elements, index, last) {
                self.sift_up(elements, index);
            }
        }

        self.take_last(elements)
    }

    /// Removes all elements and resets their positions.
    pub fn clear<N>(&mut self, elements: &mut [N])
    where
        N: HeapElement,
    {
        for handle in self.handles.drain(..) {
            elements[handle].set_heap_index(None);
        }
    }

    fn take_last<N>(&mut self, elements: &mut [N]) -> Option<usize>
    where
        N: HeapElement,
    {
        let handle = self.handles.pop()?;
        elements[handle].set_heap_index(None);

        Some(handle)
    }

    fn less<N>(&self, elements: &[N], i: usize, j: usize) -> bool
    where
        N: HeapElement,
    {
        elements[self.handles[i]].get_priority() < elements[self.handles[j]].get_priority()
    }

    fn swap<N>(&mut self, elements: &mut [N], i: usize, j: usize)
    where
        N: HeapElement,
    {
        self.handles.swap(i, j);
        elements[self.handles[i]].set_heap_index(Some(i));
        elements[self.handles[j]].set_heap_index(Some(j));
    }

    fn sift_up<N>(&mut self, elements: &mut [N], mut index: usize)
    where
        N: HeapElement,
    {
        while index > 0 {
            let parent = (index - 1) / 2;

            if !self.less(elements, index, parent) {
                break;
            }

            self.swap(elements, parent, index);
            index = parent;
        }
    }

    /// Sifts down the element at `start` among the first `n` elements.
    ///
    /// Returns whether the element moved.
    fn sift_down<N>(&mut self, elements: &mut [N], start: usize, n: usize) -> bool
    where
        N: HeapElement,
    {
        let mut index = start;

        loop {
            let left = 2 * index + 1;

            if left >= n {
                break;
            }

            let right = left + 1;
            let child = if right < n && self.less(elements, right, left) {
                right
            } else {
                left
            };

            if !self.less(elements, child, index) {
                break;
            }

            self.swap(elements, index, child);
            index = child;
        }

        index > start
    }
}
