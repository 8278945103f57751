//! Qt Linguist `.ts` catalog parser.
//!
//! The element tree is built from `xml-rs` events rather than
//! `xmltree::Element::parse`, which throws whitespace-only text away. Text is
//! kept verbatim, comments and unknown elements survive as opaque nodes, and
//! the reader position of every `<message>` tag is recorded so issues can point
//! at the right line.

use std::{fs, path::Path};

use thiserror::Error;
use xml::{
    common::Position,
    reader::{EventReader, ParserConfig, XmlEvent},
};
use xmltree::{Element, XMLNode};

use crate::core::{
    Catalog, CatalogFile, Context, LineRef, Location, Message, Translation, TranslationStatus,
    TranslationText,
};

#[derive(Debug, Error)]
pub enum TsParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("expected <TS> root element, found <{0}>")]
    UnexpectedRoot(String),

    #[error("<{parent}> is missing its <{element}> element")]
    MissingElement {
        element: &'static str,
        parent: &'static str,
    },

    #[error("invalid {attribute}=\"{value}\" on <{element}>")]
    InvalidAttribute {
        element: &'static str,
        attribute: &'static str,
        value: String,
    },
}

/// Parse catalog content into the model.
pub fn parse_str(content: &str) -> Result<Catalog, TsParseError> {
    let tree = read_tree(content)?;
    parse_document(tree).map(|(catalog, _)| catalog)
}

/// Parse catalog content, keeping the file path and message line numbers.
pub fn parse_catalog_str(file_path: &str, content: &str) -> Result<CatalogFile, TsParseError> {
    let mut tree = read_tree(content)?;
    let tag_lines = std::mem::take(&mut tree.message_lines);
    let (catalog, doc_order) = parse_document(tree)?;

    let message_lines = doc_order
        .iter()
        .map(|&i| tag_lines.get(i).copied().unwrap_or(1))
        .collect();

    Ok(CatalogFile::new(file_path, catalog, message_lines))
}

/// Read and parse a catalog file.
pub fn parse_catalog_file(path: &Path) -> Result<CatalogFile, TsParseError> {
    let file_path = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path).map_err(|source| TsParseError::Io {
        path: file_path.clone(),
        source,
    })?;
    tracing::debug!(path = %file_path, bytes = content.len(), "parsing catalog");
    parse_catalog_str(&file_path, &content)
}

struct Tree {
    root: Element,
    /// Comments before the root element.
    prolog: Vec<XMLNode>,
    /// 1-based line of each `<message>` directly under a `<context>`, in document order.
    message_lines: Vec<usize>,
}

fn read_tree(content: &str) -> Result<Tree, TsParseError> {
    let config = ParserConfig::new()
        .whitespace_to_characters(true)
        .cdata_to_characters(true)
        .ignore_comments(false);
    let mut reader = EventReader::new_with_config(content.as_bytes(), config);

    let mut stack: Vec<Element> = Vec::new();
    let mut prolog = Vec::new();
    let mut message_lines = Vec::new();

    loop {
        let event = reader.next().map_err(|e| TsParseError::Xml(e.to_string()))?;
        match event {
            XmlEvent::StartElement {
                name, attributes, ..
            } => {
                if name.local_name == "message" && stack.last().is_some_and(|p| p.name == "context")
                {
                    message_lines.push(reader.position().row as usize + 1);
                }
                let mut element = Element::new(&name.local_name);
                element.prefix = name.prefix;
                for attr in attributes {
                    let key = match attr.name.prefix {
                        Some(prefix) => format!("{}:{}", prefix, attr.name.local_name),
                        None => attr.name.local_name,
                    };
                    element.attributes.insert(key, attr.value);
                }
                stack.push(element);
            }
            XmlEvent::EndElement { .. } => {
                let Some(element) = stack.pop() else {
                    return Err(TsParseError::Xml("unbalanced end tag".to_string()));
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(XMLNode::Element(element)),
                    None => {
                        return Ok(Tree {
                            root: element,
                            prolog,
                            message_lines,
                        });
                    }
                }
            }
            XmlEvent::Characters(text) | XmlEvent::Whitespace(text) | XmlEvent::CData(text) => {
                if let Some(parent) = stack.last_mut() {
                    push_text(parent, text);
                }
            }
            XmlEvent::Comment(text) => match stack.last_mut() {
                Some(parent) => parent.children.push(XMLNode::Comment(text)),
                None => prolog.push(XMLNode::Comment(text)),
            },
            XmlEvent::ProcessingInstruction { name, data } => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(XMLNode::ProcessingInstruction(name, data));
                }
            }
            XmlEvent::EndDocument => {
                return Err(TsParseError::Xml("document has no root element".to_string()));
            }
            _ => {}
        }
    }
}

// Adjacent character events (text split around an entity, say) form one node.
fn push_text(parent: &mut Element, text: String) {
    match parent.children.last_mut() {
        Some(XMLNode::Text(last)) => last.push_str(&text),
        _ => parent.children.push(XMLNode::Text(text)),
    }
}

/// Returns the catalog plus, for every message in model order, its index in
/// document order. The two differ when a context name appears more than once
/// and the blocks get merged.
fn parse_document(tree: Tree) -> Result<(Catalog, Vec<usize>), TsParseError> {
    let Tree { root, prolog, .. } = tree;
    if root.name != "TS" {
        return Err(TsParseError::UnexpectedRoot(root.name));
    }

    let mut catalog = Catalog {
        version: root.attributes.get("version").cloned(),
        language: root.attributes.get("language").cloned(),
        source_language: root.attributes.get("sourcelanguage").cloned(),
        contexts: Vec::new(),
        prolog,
        extras: Vec::new(),
    };
    let mut order: Vec<Vec<usize>> = Vec::new();
    let mut next_index = 0;

    for node in &root.children {
        let child = match node {
            XMLNode::Element(el) if el.name == "context" => el,
            XMLNode::Text(_) => continue,
            other => {
                catalog.extras.push(other.clone());
                continue;
            }
        };
        let context = parse_context(child)?;
        let indices: Vec<usize> = (next_index..next_index + context.messages.len()).collect();
        next_index += context.messages.len();

        match catalog.contexts.iter().position(|c| c.name == context.name) {
            Some(pos) => {
                let existing = &mut catalog.contexts[pos];
                if existing.comment.is_none() {
                    existing.comment = context.comment;
                }
                existing.messages.extend(context.messages);
                existing.extras.extend(context.extras);
                order[pos].extend(indices);
            }
            None => {
                catalog.contexts.push(context);
                order.push(indices);
            }
        }
    }

    Ok((catalog, order.into_iter().flatten().collect()))
}

fn parse_context(el: &Element) -> Result<Context, TsParseError> {
    let mut name = None;
    let mut context = Context::default();

    for node in &el.children {
        let XMLNode::Element(child) = node else {
            keep_opaque(&mut context.extras, node);
            continue;
        };
        match child.name.as_str() {
            "name" => name = Some(text_of(child)?),
            "comment" => context.comment = Some(text_of(child)?),
            "message" => context.messages.push(parse_message(child)?),
            _ => context.extras.push(node.clone()),
        }
    }

    context.name = name.ok_or(TsParseError::MissingElement {
        element: "name",
        parent: "context",
    })?;
    Ok(context)
}

fn parse_message(el: &Element) -> Result<Message, TsParseError> {
    let numerus = el.attributes.get("numerus").is_some_and(|v| v == "yes");
    let mut message = Message {
        id: el.attributes.get("id").cloned(),
        ..Default::default()
    };
    let mut source = None;
    let mut translation = None;

    for node in &el.children {
        let XMLNode::Element(child) = node else {
            keep_opaque(&mut message.extras, node);
            continue;
        };
        match child.name.as_str() {
            "location" => message.locations.push(parse_location(child)?),
            "source" => source = Some(text_of(child)?),
            "oldsource" => message.old_source = Some(text_of(child)?),
            "comment" => message.comment = Some(text_of(child)?),
            "oldcomment" => message.old_comment = Some(text_of(child)?),
            "extracomment" => message.extra_comment = Some(text_of(child)?),
            "translatorcomment" => message.translator_comment = Some(text_of(child)?),
            "translation" => translation = Some(parse_translation(child, numerus)?),
            _ => message.extras.push(node.clone()),
        }
    }

    message.source = source.ok_or(TsParseError::MissingElement {
        element: "source",
        parent: "message",
    })?;
    message.translation = translation.unwrap_or_else(|| {
        if numerus {
            Translation::plural(TranslationStatus::Unfinished, Vec::new())
        } else {
            Translation::unfinished("")
        }
    });
    Ok(message)
}

fn parse_translation(el: &Element, numerus: bool) -> Result<Translation, TsParseError> {
    let type_attr = el.attributes.get("type");
    let status = TranslationStatus::from_attr(type_attr.map(String::as_str)).ok_or_else(|| {
        TsParseError::InvalidAttribute {
            element: "translation",
            attribute: "type",
            value: type_attr.cloned().unwrap_or_default(),
        }
    })?;

    let text = if numerus {
        let forms = child_elements(el)
            .filter(|child| child.name == "numerusform")
            .map(text_of)
            .collect::<Result<Vec<_>, _>>()?;
        TranslationText::Plural(forms)
    } else {
        TranslationText::Singular(text_of(el)?)
    };

    Ok(Translation { status, text })
}

fn parse_location(el: &Element) -> Result<Location, TsParseError> {
    let line = match el.attributes.get("line") {
        Some(value) => Some(LineRef::parse(value).ok_or_else(|| {
            TsParseError::InvalidAttribute {
                element: "location",
                attribute: "line",
                value: value.clone(),
            }
        })?),
        None => None,
    };

    Ok(Location {
        filename: el.attributes.get("filename").cloned(),
        line,
    })
}

/// Comments and processing instructions between elements are kept; the
/// indentation text around elements is not.
fn keep_opaque(extras: &mut Vec<XMLNode>, node: &XMLNode) {
    if matches!(node, XMLNode::Comment(_) | XMLNode::ProcessingInstruction(..)) {
        extras.push(node.clone());
    }
}

fn child_elements(el: &Element) -> impl Iterator<Item = &Element> {
    el.children.iter().filter_map(|node| match node {
        XMLNode::Element(child) => Some(child),
        _ => None,
    })
}

/// Concatenated text content, decoding `<byte value=".."/>` escapes.
fn text_of(el: &Element) -> Result<String, TsParseError> {
    let mut text = String::new();
    for node in &el.children {
        match node {
            XMLNode::Text(s) | XMLNode::CData(s) => text.push_str(s),
            XMLNode::Element(child) if child.name == "byte" => {
                if let Some(c) = decode_byte(child)? {
                    text.push(c);
                }
            }
            _ => {}
        }
    }
    Ok(text)
}

// value holds a decimal (e.g. 27) or hex (e.g. x1b) code point
fn decode_byte(el: &Element) -> Result<Option<char>, TsParseError> {
    let raw = el
        .attributes
        .get("value")
        .ok_or(TsParseError::MissingElement {
            element: "value",
            parent: "byte",
        })?;
    let (radix, digits) = if let Some(hex) = raw.strip_prefix("0x") {
        (16, hex)
    } else if let Some(hex) = raw.strip_prefix('x') {
        (16, hex)
    } else {
        (10, raw.as_str())
    };

    let invalid = || TsParseError::InvalidAttribute {
        element: "byte",
        attribute: "value",
        value: raw.clone(),
    };
    let code = u32::from_str_radix(digits, radix).map_err(|_| invalid())?;
    if code == 0 {
        return Ok(None);
    }
    char::from_u32(code).map(Some).ok_or_else(invalid)
}
