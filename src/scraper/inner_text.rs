// inner_text.rs
//! Approximates a browser's `innerText` over a parsed document.
//!
//! Whitespace inside a line collapses to single spaces, block elements start new lines,
//! `<br>` forces a break and paragraphs are separated by a blank line.

use scraper::{node::Node, ElementRef};

const SKIPPED: &[&str] = &["script", "style", "template", "noscript", "head"];

const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "fieldset",
    "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header",
    "hr", "li", "main", "nav", "ol", "section", "table", "tbody", "thead", "tfoot", "tr", "ul",
];

const PARAGRAPHS: &[&str] = &["p", "pre"];

pub fn inner_text(element: ElementRef<'_>) -> String {
    let mut text = TextBuilder::default();
    walk(element, &mut text);
    text.out
}

fn walk(element: ElementRef<'_>, text: &mut TextBuilder) {
    for child in element.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let name = child_el.value().name();
            if SKIPPED.contains(&name) {
                continue;
            }
            if name == "br" {
                text.hard_break();
                continue;
            }

            let breaks = if PARAGRAPHS.contains(&name) {
                2
            } else if BLOCKS.contains(&name) {
                1
            } else {
                0
            };

            text.soft_break(breaks);
            walk(child_el, text);
            text.soft_break(breaks);
        } else if let Node::Text(t) = child.value() {
            text.push(t);
        }
    }
}

#[derive(Default)]
struct TextBuilder {
    out: String,
    pending_breaks: usize,
    pending_space: bool,
}

impl TextBuilder {
    fn push(&mut self, raw: &str) {
        if raw.trim().is_empty() {
            if !raw.is_empty() {
                self.pending_space = true;
            }
            return;
        }

        if !self.out.is_empty() && self.pending_breaks > 0 {
            self.out.push_str(&"\n".repeat(self.pending_breaks));
        } else if !self.out.is_empty()
            && (self.pending_space || raw.starts_with(char::is_whitespace))
        {
            self.out.push(' ');
        }
        self.pending_breaks = 0;

        let mut words = raw.split_whitespace();
        if let Some(first) = words.next() {
            self.out.push_str(first);
        }
        for word in words {
            self.out.push(' ');
            self.out.push_str(word);
        }

        self.pending_space = raw.ends_with(char::is_whitespace);
    }

    fn soft_break(&mut self, count: usize) {
        if count > 0 {
            self.pending_breaks = self.pending_breaks.max(count);
            self.pending_space = false;
        }
    }

    fn hard_break(&mut self) {
        self.pending_breaks += 1;
        self.pending_space = false;
    }
}
