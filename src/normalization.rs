// WHY: documents are indexed as one flat string, so hard line breaks must not
// act as paragraph separators during sentence segmentation

/// Replace every line break with a single space
/// Treats \r\n as one break; all other characters, including runs of spaces, are kept
pub fn flatten_line_breaks(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    flatten_line_breaks_into(text, &mut result);
    result
}

/// Flatten line breaks into supplied buffer to avoid allocation
pub fn flatten_line_breaks_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                // Handle \r\n as single break (peek ahead for \n)
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                buffer.push(' ');
            }
            '\n' => buffer.push(' '),
            _ => buffer.push(ch),
        }
    }
}
