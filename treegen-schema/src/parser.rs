//! Grammar schema file parser.
//!
//! This module parses the XML schema format into a [`Grammar`]:
//!
//! ```xml
//! <treeSchema package="com.craftinginterpreters.lox">
//!     <import>java.util.List</import>
//!     <base name="Expr">
//!         <rule>Binary : Expr left, Token operator, Expr right</rule>
//!     </base>
//! </treeSchema>
//! ```

use crate::error::ParseError;
use crate::types::Grammar;
use crate::variants::{HierarchyDef, parse_rule};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

const ROOT: &str = "treeSchema";

/// Parses a grammar schema from a string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Parsed grammar or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, has unexpected elements,
/// or contains a malformed rule.
pub fn parse_grammar(xml: &str) -> Result<Grammar, ParseError> {
    let mut reader = Reader::from_str(xml);

    let mut grammar: Option<Grammar> = None;
    let mut root_closed = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if grammar.is_some() && (name == ROOT || root_closed) {
                    return Err(after_root(name));
                }
                if name == ROOT {
                    grammar = Some(parse_schema_element(e)?);
                } else {
                    let Some(grammar) = grammar.as_mut() else {
                        return Err(outside_root(name));
                    };
                    match name {
                        "import" => {
                            let import = read_text(&mut reader, "import")?;
                            if import.is_empty() {
                                return Err(ParseError::InvalidStructure {
                                    message: "empty import element".to_string(),
                                });
                            }
                            grammar.imports.get_or_insert_with(Vec::new).push(import);
                        }
                        "base" => {
                            let hierarchy = parse_base(&mut reader, e)?;
                            grammar.add_hierarchy(hierarchy);
                        }
                        other => return Err(ParseError::unknown_element(other, ROOT)),
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if grammar.is_some() && (name == ROOT || root_closed) {
                    return Err(after_root(name));
                }
                if name == ROOT {
                    grammar = Some(parse_schema_element(e)?);
                    root_closed = true;
                } else {
                    let Some(grammar) = grammar.as_mut() else {
                        return Err(outside_root(name));
                    };
                    match name {
                        "base" => {
                            // A base with no variants still produces an abstract type.
                            let base_name = base_name_attr(e)?;
                            grammar.add_hierarchy(HierarchyDef::new(base_name));
                        }
                        "import" => {
                            return Err(ParseError::InvalidStructure {
                                message: "empty import element".to_string(),
                            });
                        }
                        other => return Err(ParseError::unknown_element(other, ROOT)),
                    }
                }
            }
            Ok(Event::End(_)) => root_closed = true,
            Ok(Event::Text(ref t)) => reject_text(t.as_ref(), ROOT)?,
            Ok(Event::CData(ref c)) => reject_text(c.as_ref(), ROOT)?,
            Ok(Event::GeneralRef(_)) => return Err(stray_text(ROOT)),
            Ok(Event::Eof) => {
                if grammar.is_some() && !root_closed {
                    return Err(unclosed(ROOT));
                }
                break;
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    grammar.ok_or_else(|| ParseError::InvalidStructure {
        message: format!("No {ROOT} element found"),
    })
}

/// Parses a grammar schema from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_grammar_file(path: &std::path::Path) -> Result<Grammar, ParseError> {
    let xml = std::fs::read_to_string(path)?;
    parse_grammar(&xml)
}

fn outside_root(name: &str) -> ParseError {
    ParseError::InvalidStructure {
        message: format!("element '{name}' outside of {ROOT}"),
    }
}

fn after_root(name: &str) -> ParseError {
    ParseError::InvalidStructure {
        message: format!("unexpected element '{name}'; a schema has exactly one {ROOT} root"),
    }
}

fn unclosed(element: &str) -> ParseError {
    ParseError::InvalidStructure {
        message: format!("unexpected end of document inside '{element}'"),
    }
}

fn stray_text(context: &str) -> ParseError {
    ParseError::InvalidStructure {
        message: format!("text directly inside '{context}'; rules belong in <rule> elements"),
    }
}

/// Allows only whitespace between elements.
fn reject_text(bytes: &[u8], context: &str) -> Result<(), ParseError> {
    if std::str::from_utf8(bytes)?.trim().is_empty() {
        Ok(())
    } else {
        Err(stray_text(context))
    }
}

/// Parses the root element attributes.
fn parse_schema_element(e: &BytesStart<'_>) -> Result<Grammar, ParseError> {
    let mut grammar = Grammar::new();

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;

        if key == "package" && !value.trim().is_empty() {
            grammar.package = Some(value.trim().to_string());
        }
    }

    Ok(grammar)
}

fn base_name_attr(e: &BytesStart<'_>) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        if key == "name" {
            return Ok(std::str::from_utf8(&attr.value)?.trim().to_string());
        }
    }
    Err(ParseError::missing_attr("base", "name"))
}

/// Parses a `<base>` element and its rules.
fn parse_base(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<HierarchyDef, ParseError> {
    let mut hierarchy = HierarchyDef::new(base_name_attr(e)?);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name != "rule" {
                    return Err(ParseError::unknown_element(tag_name, "base"));
                }
                let rule = read_text(reader, "rule")?;
                hierarchy.add_variant(parse_rule(&rule)?);
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                if tag_name != "rule" {
                    return Err(ParseError::unknown_element(tag_name, "base"));
                }
                hierarchy.add_variant(parse_rule("")?);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Text(ref t)) => reject_text(t.as_ref(), "base")?,
            Ok(Event::CData(ref c)) => reject_text(c.as_ref(), "base")?,
            Ok(Event::GeneralRef(_)) => return Err(stray_text("base")),
            Ok(Event::Eof) => return Err(unclosed("base")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(hierarchy)
}

/// Reads the text content of the current element up to its end tag.
///
/// Text, CDATA and entity references are concatenated in document order.
fn read_text(reader: &mut Reader<&[u8]>, context: &str) -> Result<String, ParseError> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => text.push_str(std::str::from_utf8(t.as_ref())?),
            Ok(Event::CData(ref c)) => text.push_str(std::str::from_utf8(c.as_ref())?),
            Ok(Event::GeneralRef(ref r)) => {
                let entity = std::str::from_utf8(r.as_ref())?;
                text.push(resolve_entity(entity)?);
            }
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag_name = std::str::from_utf8(&name_bytes)?;
                return Err(ParseError::unknown_element(tag_name, context));
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(unclosed(context)),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}

/// Resolves a predefined or numeric character entity.
fn resolve_entity(entity: &str) -> Result<char, ParseError> {
    let resolved = match entity {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "amp" => Some('&'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => entity.strip_prefix('#').and_then(|code| {
            let value = match code.strip_prefix('x') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }),
    };

    resolved.ok_or_else(|| ParseError::InvalidStructure {
        message: format!("unknown entity '&{entity};'"),
    })
}
