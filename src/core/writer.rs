//! Catalog serializer producing the layout the extraction tool writes.
//!
//! Output is stable: running the writer over a freshly parsed catalog only
//! changes indentation and the placement of comments and unknown elements,
//! which are written after the known children of their parent.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};
use xmltree::{Element, XMLNode};

use crate::core::{Catalog, Context, Location, Message, TranslationText};

const INDENT: &str = "    ";

/// Serialize a catalog to `.ts` XML.
pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    push_nodes(&mut out, 0, &catalog.prolog);
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    push_attr(&mut out, "version", catalog.version.as_deref());
    push_attr(&mut out, "language", catalog.language.as_deref());
    push_attr(&mut out, "sourcelanguage", catalog.source_language.as_deref());
    out.push_str(">\n");
    push_nodes(&mut out, 0, &catalog.extras);

    for context in &catalog.contexts {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

/// Serialize and save a catalog, creating parent directories as needed.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, write_catalog(catalog))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), "catalog written");
    Ok(())
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_element(out, 1, "name", &context.name);
    if let Some(comment) = &context.comment {
        push_element(out, 1, "comment", comment);
    }
    push_nodes(out, 1, &context.extras);
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str(INDENT);
    out.push_str("<message");
    push_attr(out, "id", message.id.as_deref());
    if message.is_numerus() {
        push_attr(out, "numerus", Some("yes"));
    }
    out.push_str(">\n");

    for location in &message.locations {
        write_location(out, location);
    }
    push_element(out, 2, "source", &message.source);
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("oldcomment", &message.old_comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (tag, value) in optional {
        if let Some(value) = value {
            push_element(out, 2, tag, value);
        }
    }

    push_indent(out, 2);
    out.push_str("<translation");
    push_attr(out, "type", message.translation.status.as_attr());
    out.push('>');
    match &message.translation.text {
        TranslationText::Singular(text) => escape_text(out, text),
        TranslationText::Plural(forms) if forms.is_empty() => {}
        TranslationText::Plural(forms) => {
            out.push('\n');
            for form in forms {
                push_element(out, 3, "numerusform", form);
            }
            push_indent(out, 2);
        }
    }
    out.push_str("</translation>\n");
    push_nodes(out, 2, &message.extras);

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn write_location(out: &mut String, location: &Location) {
    push_indent(out, 2);
    out.push_str("<location");
    push_attr(out, "filename", location.filename.as_deref());
    if let Some(line) = location.line {
        let _ = write!(out, " line=\"{}\"", line);
    }
    out.push_str("/>\n");
}

/// Opaque nodes, one per line. Text inside them is written back verbatim.
fn push_nodes(out: &mut String, depth: usize, nodes: &[XMLNode]) {
    for node in nodes {
        push_indent(out, depth);
        write_node(out, node);
        out.push('\n');
    }
}

fn write_node(out: &mut String, node: &XMLNode) {
    match node {
        XMLNode::Element(el) => write_raw_element(out, el),
        XMLNode::Text(text) => escape_text(out, text),
        XMLNode::CData(text) => {
            let _ = write!(out, "<![CDATA[{}]]>", text);
        }
        XMLNode::Comment(text) => {
            let _ = write!(out, "<!--{}-->", text);
        }
        XMLNode::ProcessingInstruction(name, data) => match data {
            Some(data) => {
                let _ = write!(out, "<?{} {}?>", name, data);
            }
            None => {
                let _ = write!(out, "<?{}?>", name);
            }
        },
    }
}

fn write_raw_element(out: &mut String, el: &Element) {
    let name = match &el.prefix {
        Some(prefix) => format!("{}:{}", prefix, el.name),
        None => el.name.clone(),
    };
    let _ = write!(out, "<{}", name);

    // attribute maps are unordered
    let mut attributes: Vec<_> = el.attributes.iter().collect();
    attributes.sort();
    for (key, value) in attributes {
        push_attr(out, key, Some(value));
    }

    if el.children.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in &el.children {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", name);
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn push_element(out: &mut String, depth: usize, tag: &str, text: &str) {
    push_indent(out, depth);
    let _ = write!(out, "<{}>", tag);
    escape_text(out, text);
    let _ = writeln!(out, "</{}>", tag);
}

fn push_attr(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = write!(out, " {}=\"", name);
        escape_text(out, value);
        out.push('"');
    }
}

/// Escape markup characters and quotes; control characters XML can't carry
/// become `<byte value=".."/>` elements.
fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
            }
            c => out.push(c),
        }
    }
}
