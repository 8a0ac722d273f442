//! The project's module metadata file (`go.mod`).
//!
//! Only one line matters here: the first `module <path>` declaration. The
//! toolchain writes the file; the context appender reads it back to learn
//! which import path generated code should use.

/// File name of the module metadata file, relative to the project root.
pub const MODULE_FILE: &str = "go.mod";

/// Keyword introducing the module declaration.
const MODULE_KEYWORD: &str = "module ";

/// Extract the module path from module-file contents.
///
/// Lines are trimmed before matching. Returns an empty string when no line
/// declares a module, so callers can treat "unknown" like any other value.
pub fn parse_module_declaration(contents: &str) -> String {
    contents
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(MODULE_KEYWORD))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_first_declaration() {
        let contents = "module example.com/shop\n\ngo 1.22\n";
        assert_eq!(parse_module_declaration(contents), "example.com/shop");
    }

    #[test]
    fn tolerates_indentation_and_trailing_space() {
        let contents = "// generated\n   module   example.com/shop  \r\n";
        assert_eq!(parse_module_declaration(contents), "example.com/shop");
    }

    #[test]
    fn first_match_wins() {
        let contents = "module a\nmodule b\n";
        assert_eq!(parse_module_declaration(contents), "a");
    }

    #[test]
    fn missing_declaration_is_empty() {
        assert_eq!(parse_module_declaration(""), "");
        assert_eq!(parse_module_declaration("go 1.22\nrequire x v1\n"), "");
        // `modules` is not the keyword
        assert_eq!(parse_module_declaration("modules x\n"), "");
    }
}
