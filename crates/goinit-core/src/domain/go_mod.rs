//! Text of the generated `go.mod`.

use std::fmt::Write;

use crate::domain::dependencies::DependencySet;

/// Render a module manifest.
///
/// ```text
/// module <module>
///
/// go <version>
///
/// require (
/// 	<module> <version>
/// )
/// ```
///
/// The `require` block is emitted only for a non-empty set, one tab-indented
/// line per pin in module-path order.
pub fn render(module: &str, go_version: &str, deps: &DependencySet) -> String {
    let mut out = format!("module {module}\n\ngo {go_version}\n");

    if !deps.is_empty() {
        out.push_str("\nrequire (\n");
        for (path, version) in deps.iter() {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "\t{path} {version}");
        }
        out.push_str(")\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dependencies::{CHI, UUID, ZAP};

    #[test]
    fn empty_set_has_no_require_block() {
        let text = render("example.com/svc", "1.22", &DependencySet::new());
        assert_eq!(text, "module example.com/svc\n\ngo 1.22\n");
    }

    #[test]
    fn require_block_is_sorted() {
        let mut deps = DependencySet::new();
        deps.pin(&ZAP);
        deps.pin(&UUID);
        deps.pin(&CHI);

        let text = render("example.com/svc", "1.26.0", &deps);

        assert_eq!(
            text,
            "module example.com/svc\n\ngo 1.26.0\n\nrequire (\n\
             \tgithub.com/go-chi/chi/v5 v5.0.11\n\
             \tgithub.com/google/uuid v1.5.0\n\
             \tgo.uber.org/zap v1.26.0\n\
             )\n"
        );
    }
}
