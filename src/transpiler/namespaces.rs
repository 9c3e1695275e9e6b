use std::collections::HashMap;

/// Identifier translations for one compilation unit.
/// Fixed entries are shared between units; bindings are added during the walk and shadow them.
pub struct Level {
    fixed: &'static HashMap<&'static str, &'static str>,
    bindings: HashMap<String, String>,
}

impl Level {
    pub fn new(fixed: &'static HashMap<&'static str, &'static str>) -> Level {
        Level {
            fixed,
            bindings: HashMap::new(),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.bindings.get(name)
            .map(String::as_str)
            .or_else(|| self.fixed.get(name).copied())
    }

    /// Bindings stay for the rest of the unit.
    pub fn bind(&mut self, name: &str, replacement: &str) {
        self.bindings.insert(name.to_string(), replacement.to_string());
    }

    pub fn translate<'a>(&'a self, name: &'a str) -> &'a str {
        self.lookup(name).unwrap_or(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::transpiler::java::keywords::SYMBOLS;
    use crate::transpiler::namespaces::Level;

    #[test]
    fn fixed_names_are_translated() {
        let level = Level::new(&SYMBOLS);
        assert_eq!(level.lookup("fmt"), Some("System.out"));
        assert_eq!(level.lookup("float64"), Some("double"));
        assert_eq!(level.lookup("radius"), None);
        assert_eq!(level.translate("radius"), "radius");
    }

    #[test]
    fn bindings_shadow_fixed_names() {
        let mut level = Level::new(&SYMBOLS);
        level.bind("c", "this");
        level.bind("string", "this");
        assert_eq!(level.lookup("c"), Some("this"));
        assert_eq!(level.lookup("string"), Some("this"));
    }

    #[test]
    fn bindings_do_not_leak_into_other_levels() {
        let mut first = Level::new(&SYMBOLS);
        first.bind("c", "this");

        let second = Level::new(&SYMBOLS);
        assert_eq!(second.lookup("c"), None);
    }
}
