/// Escape text for interpolation into element content or quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '/' => out.push_str("&#x2F;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<a href=\"x\">'&'</a>"),
            "&lt;a href&#x3D;&quot;x&quot;&gt;&#39;&amp;&#39;&lt;&#x2F;a&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_and_unicode() {
        assert_eq!(escape_html("ELITE ৫৯৳"), "ELITE ৫৯৳");
        assert_eq!(escape_html(""), "");
    }
}
