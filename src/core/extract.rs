/// Extract the first balanced `{...}` substring from free-form model output.
///
/// The model is asked for bare JSON but routinely wraps it in prose or a
/// code fence, so the scan starts at the first `{` and tracks brace depth,
/// skipping braces inside string literals. Returns `None` when the text has
/// no opening brace or the object never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}
