//! Page scripts evaluated through `Runtime.evaluate`.
//!
//! Every script is an immediately invoked expression returning a boolean:
//! `true` when the element was found and acted on, `false` otherwise.

use serde_json::Value;

fn literal(text: &str) -> String {
    Value::from(text).to_string()
}

/// Sets the value of the `index`-th `input` element.
pub fn write_field(index: usize, text: &str) -> String {
    format!(
        "(() => {{\n    const el = document.getElementsByTagName('input')[{index}];\n    if (!el) {{ return false; }}\n    el.value = {text};\n    return true;\n}})()",
        index = index,
        text = literal(text),
    )
}

/// Clicks the first element whose `name` attribute equals `name`.
pub fn activate(name: &str) -> String {
    format!(
        "(() => {{\n    const el = document.getElementsByName({name})[0];\n    if (!el || typeof el.click !== 'function') {{ return false; }}\n    el.click();\n    return true;\n}})()",
        name = literal(name),
    )
}

/// Coerces a caller-supplied expression to a boolean, treating exceptions as "not yet".
pub fn settle_probe(expression: &str) -> String {
    format!(
        "(() => {{\n    try {{\n        return Boolean(eval({expr}));\n    }} catch (err) {{\n        return false;\n    }}\n}})()",
        expr = literal(expression),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_field_targets_input_by_position() {
        let script = write_field(2, "13");
        assert!(script.contains("getElementsByTagName('input')[2]"));
        assert!(script.contains("el.value = \"13\";"));
    }

    #[test]
    fn write_field_escapes_text() {
        let script = write_field(0, "a\"b\\c\n");
        assert!(script.contains(r#"el.value = "a\"b\\c\n";"#));
    }

    #[test]
    fn activate_uses_name_lookup() {
        let script = activate("Delete");
        assert!(script.contains("getElementsByName(\"Delete\")[0]"));
        assert!(script.contains("el.click();"));
    }

    #[test]
    fn activate_escapes_name() {
        let script = activate("x\")[0].remove(); (\"");
        assert!(script.contains(r#"getElementsByName("x\")[0].remove(); (\"")[0]"#));
    }

    #[test]
    fn settle_probe_wraps_expression_in_eval() {
        let script = settle_probe("window.animating === false");
        assert!(script.contains("Boolean(eval(\"window.animating === false\"))"));
        assert!(script.contains("catch (err)"));
    }
}
