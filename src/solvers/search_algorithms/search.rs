use std::fmt::Debug;

/// Search parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchParameters {
    /// Whether to suppress the summary logged when the search terminates.
    pub quiet: bool,
    /// Initial capacity of the node registry or the visited set.
    pub initial_registry_capacity: Option<usize>,
}

/// Solution information.
#[derive(Clone, PartialEq, Debug)]
pub struct Solution<T, C> {
    /// Path from the start to the goal, or `None` if the goal is unreachable.
    pub path: Option<Vec<T>>,
    /// Cost of the path.
    pub cost: Option<C>,
    /// Number of nodes expanded.
    pub expanded: usize,
    /// Number of nodes generated.
    pub generated: usize,
}

impl<T, C> Default for Solution<T, C> {
    fn default() -> Self {
        Self {
            path: None,
            cost: None,
            expanded: 0,
            generated: 0,
        }
    }
}

impl<T, C> Solution<T, C> {
    /// Returns whether a path is found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Logs the summary of the search.
    pub(crate) fn log_summary(&self, algorithm: &'static str, parameters: &SearchParameters)
    where
        C: Debug,
    {
        if parameters.quiet {
            return;
        }

        if let Some(path) = &self.path {
            tracing::info!(
                algorithm,
                cost = ?self.cost,
                length = path.len(),
                expanded = self.expanded,
                generated = self.generated,
                "path found"
            );
        } else {
            tracing::info!(
                algorithm,
                expanded = self.expanded,
                generated = self.generated,
                "no path found"
            );
        }
    }
}

/// Search trait.
pub trait Search {
    /// Type of the values forming a path.
    type Value;
    /// Type of the cost.
    type CostType;

    /// Performs search until termination.
    ///
    /// Calling this method again after termination returns the same solution.
    fn search(&mut self) -> Solution<Self::Value, Self::CostType>;
}
