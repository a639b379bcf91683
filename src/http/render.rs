//! HTML rendering of the host list.

use std::fmt::Write;

use crate::discovery::HostSet;

/// Render the host list as a standalone HTML page.
pub fn render_host_list(hosts: &HostSet) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>App Directory</title>\n</head>\n<body>\n<h1>App Directory</h1>\n<ul>\n",
    );

    for url in hosts {
        let url = escape_html(url);
        // Writing to a String cannot fail.
        let _ = writeln!(page, "<li><a href=\"{url}\">{url}</a></li>");
    }

    page.push_str("</ul>\n</body>\n</html>\n");
    page
}

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
