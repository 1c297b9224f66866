use std::rc::Rc;

/// Tree data structure to store a sequence of values sharing prefixes.
///
/// The root holds no value.
#[derive(Clone, Debug)]
pub struct IdTree<T> {
    id: Option<T>,
    parent: Option<Rc<Self>>,
}

impl<T> Default for IdTree<T> {
    fn default() -> Self {
        Self {
            id: None,
            parent: None,
        }
    }
}

impl<T> IdTree<T> {
    /// Creates a child node.
    pub fn create_child(node: Rc<Self>, id: T) -> Self {
        Self {
            id: Some(id),
            parent: Some(node),
        }
    }

    /// Returns the last value of the sequence.
    pub fn get_id(&self) -> Option<&T> {
        self.id.as_ref()
    }

    /// Returns the length of the sequence.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut current = Some(self);

        while let Some(node) = current {
            if node.id.is_some() {
                len += 1;
            }

            current = node.parent.as_deref();
        }

        len
    }

    /// Returns whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }
}

impl<T> Drop for IdTree<T> {
    /// Unlinks uniquely owned ancestors one by one so that a long sequence does not overflow the stack.
    fn drop(&mut self) {
        let mut parent = self.parent.take();

        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut node) => parent = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T> IdTree<T>
where
    T: Clone,
{
    /// Returns the path from the root to the current node.
    pub fn get_path(&self) -> Vec<T> {
        let mut path = Vec::new();
        let mut current = Some(self);

        while let Some(node) = current {
            if let Some(id) = &node.id {
                path.push(id.clone());
            }

            current = node.parent.as_deref();
        }

        path.reverse();

        path
    }
}
