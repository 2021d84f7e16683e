//! Lab registry for discovering and running labs by name.
//!
//! Every lab implements [`LabRunner`] so the harness and the CLI can drive
//! them without knowing the input or result types of each lab.

use crate::error::{LabError, Result};
use rand::rngs::StdRng;

/// One variant of a lab, bound to an already generated input instance.
pub struct VariantClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs the variant once on the bound instance and returns an optional
    /// scalar summary of its result (shown as the "result" column).
    pub run: Box<dyn FnMut() -> Result<Option<f64>> + 'a>,
}

/// Trait that every lab implements.
pub trait LabRunner: Send + Sync {
    /// Registry key (e.g. "sorting").
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Category (e.g. "math", "graph").
    fn category(&self) -> &'static str;

    /// What the size axis measures (e.g. "array size").
    fn size_label(&self) -> &'static str;

    /// Size sequence used when none is supplied.
    fn default_sizes(&self) -> Vec<usize>;

    /// Names of the variants, in the order they are timed.
    fn available_variants(&self) -> Vec<&'static str>;

    /// Generate one instance of `size` and return a closure per variant,
    /// all sharing that instance.
    fn variant_closures<'a>(&'a self, size: usize, rng: &mut StdRng) -> Result<Vec<VariantClosure<'a>>>;

    /// Check every variant against the reference on known inputs.
    fn verify(&self) -> Result<()>;

    /// Extra lines shown under the lab's info box.
    fn notes(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Registry of every lab
pub struct LabRegistry {
    labs: Vec<Box<dyn LabRunner>>,
}

impl LabRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { labs: Vec::new() }
    }

    /// Register a lab
    pub fn register<L: LabRunner + 'static>(&mut self, lab: L) {
        self.labs.push(Box::new(lab));
    }

    /// Get all registered labs
    pub fn all(&self) -> &[Box<dyn LabRunner>] {
        &self.labs
    }

    /// Find a lab by name
    pub fn find(&self, name: &str) -> Option<&dyn LabRunner> {
        self.labs
            .iter()
            .find(|l| l.name() == name)
            .map(|l| l.as_ref())
    }

    /// Find a lab by name or report the registered names.
    pub fn require(&self, name: &str) -> Result<&dyn LabRunner> {
        self.find(name).ok_or_else(|| LabError::UnknownLab {
            name: name.to_string(),
            available: self.list_names().join(", "),
        })
    }

    /// List lab names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.labs.iter().map(|l| l.name()).collect()
    }

    /// List labs by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn LabRunner> {
        self.labs
            .iter()
            .filter(|l| l.category() == category)
            .map(|l| l.as_ref())
            .collect()
    }
}

impl Default for LabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all labs
pub fn build_registry() -> LabRegistry {
    use crate::graph::shortest_path::{Density, ShortestPathRunner};

    let mut registry = LabRegistry::new();

    registry.register(crate::math::fibonacci::FibonacciRunner);
    registry.register(crate::sorting::sort::SortRunner);
    registry.register(crate::math::primes::SieveRunner);
    registry.register(crate::graph::traversal::TraversalRunner);
    registry.register(ShortestPathRunner::new(Density::Dense));
    registry.register(ShortestPathRunner::new(Density::Sparse));
    registry.register(crate::graph::spanning_tree::SpanningTreeRunner);
    registry.register(crate::math::pi_digits::PiDigitRunner);

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let registry = build_registry();
        let mut names = registry.list_names();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn test_require_unknown_lists_available() {
        let registry = build_registry();
        let err = registry.require("bogosort").err().unwrap();
        let message = err.to_string();
        assert!(message.contains("bogosort"));
        assert!(message.contains("sorting"));
    }

    #[test]
    fn test_by_category_graph() {
        let registry = build_registry();
        let graph_labs = registry.by_category("graph");
        assert_eq!(graph_labs.len(), 4);
    }
}
