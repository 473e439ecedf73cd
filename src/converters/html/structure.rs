//! The outer document skeleton: page layout CSS, the font stylesheet link, and the
//! page container the body is placed in.

/// Wraps rendered body HTML into a complete HTML document.
///
/// The page is a white 8in x 10in container with 1in padding, centered on a gray
/// full-viewport background. `body_html` and `font_link` are inserted verbatim.
pub fn wrap_in_container(body_html: &str, font_link: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{
      background-color: #d3d3d3;
      display: flex;
      justify-content: center;
      align-items: center;
      height: 100vh;
      margin: 0;
    }}
    .container {{
      background-color: white;
      width: 8in;
      height: 10in;
      padding: 1in;
      margin-top: 120px;
      box-shadow: 0 0 10px rgba(0,0,0,0.1);
    }}
  </style>
  <link href="{font_link}" rel="stylesheet">
</head>
<body>
  <div class="container">
    {body_html}
  </div>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_link_and_body() {
        let html = wrap_in_container("<p>hi</p>", "https://fonts.example/css");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<link href="https://fonts.example/css" rel="stylesheet">"#));
        assert!(html.contains("<div class=\"container\">\n    <p>hi</p>\n  </div>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn page_dimensions_are_fixed() {
        let html = wrap_in_container("", "");
        assert!(html.contains("width: 8in;"));
        assert!(html.contains("height: 10in;"));
        assert!(html.contains("padding: 1in;"));
        assert!(html.contains("background-color: #d3d3d3;"));
    }
}
