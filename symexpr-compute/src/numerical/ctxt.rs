use levenshtein::levenshtein;
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A context to use when evaluating an expression, binding variable names to their values.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous value it had.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Removes a variable from the context, returning its value if it was bound.
    pub fn remove_var(&mut self, name: &str) -> Option<f64> {
        self.vars.remove(name)
    }

    /// Removes every variable from the context.
    pub fn clear(&mut self) {
        self.vars.clear();
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }

    /// Returns all variables in the context with a name similar to the given name, in sorted
    /// order.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        let mut similar = self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect::<Vec<_>>();
        similar.sort_unstable();
        similar
    }
}

impl From<HashMap<String, f64>> for Ctxt {
    fn from(vars: HashMap<String, f64>) -> Self {
        Self { vars }
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Ctxt {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn bind_and_unbind() {
        let mut ctxt = Ctxt::new();
        assert_eq!(ctxt.get_var("x"), None);

        ctxt.add_var("x", 2.0);
        ctxt.add_var("x", 5.0);
        assert_eq!(ctxt.get_var("x"), Some(5.0));
        assert_eq!(ctxt.get_vars().len(), 1);

        assert_eq!(ctxt.remove_var("x"), Some(5.0));
        assert_eq!(ctxt.remove_var("x"), None);
        assert!(ctxt.get_vars().is_empty());
    }

    #[test]
    fn construction() {
        let from_iter = Ctxt::from_iter([("x", 2.0), ("y", 3.0)]);
        let from_map = Ctxt::from(HashMap::from([
            ("x".to_string(), 2.0),
            ("y".to_string(), 3.0),
        ]));
        assert_eq!(from_iter, from_map);

        let mut cleared = from_iter.clone();
        cleared.clear();
        assert_eq!(cleared, Ctxt::new());
    }

    #[test]
    fn similar_vars() {
        let ctxt = Ctxt::from_iter([("x", 1.0), ("xy", 2.0), ("abc", 3.0), ("y", 4.0)]);
        assert_eq!(ctxt.get_similar_vars("z"), vec!["x", "y"]);
        assert_eq!(ctxt.get_similar_vars("ab"), vec!["abc"]);
        assert!(ctxt.get_similar_vars("width").is_empty());
    }
}
