//! XML parsing for the declarative sitemap document.
//!
//! Elements are matched by local name; namespace prefixes (and `xmlns`
//! declarations) are discarded, so documents carry any namespace or none.
//! Unknown child elements are kept in the parsed tree — rejecting them is
//! the tree builder's responsibility, not the parser's.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::element::{NAV_NODE_ELEMENT, NavDocument, NodeElement, SITE_NAV_ELEMENT};
use crate::source::SourceError;

/// Parse a sitemap document from its XML text.
///
/// # Errors
///
/// Returns [`SourceError`] when the XML is malformed, the wrapper element
/// is missing, the wrapper holds a malformed `enableLocalization` value,
/// or the wrapper does not contain exactly one top-level node element.
pub fn parse_document(input: &str) -> Result<NavDocument, SourceError> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if local_name(&e) != SITE_NAV_ELEMENT {
                    return Err(SourceError::MissingWrapper {
                        expected: SITE_NAV_ELEMENT,
                    });
                }
                let wrapper = collect_element(&reader, &e, Vec::new())?;
                let wrapper = with_children(wrapper, parse_children(&mut reader)?);
                return document_from_wrapper(&wrapper);
            }
            Event::Empty(e) => {
                // A self-closing wrapper cannot contain a root node.
                if local_name(&e) == SITE_NAV_ELEMENT {
                    return Err(SourceError::MissingRootNode {
                        expected: NAV_NODE_ELEMENT,
                    });
                }
                return Err(SourceError::MissingWrapper {
                    expected: SITE_NAV_ELEMENT,
                });
            }
            Event::Eof => {
                return Err(SourceError::MissingWrapper {
                    expected: SITE_NAV_ELEMENT,
                });
            }
            _ => {}
        }
    }
}

/// Read the children of the element whose `Start` event was just consumed,
/// up to and including its matching `End` event.
fn parse_children(reader: &mut Reader<&[u8]>) -> Result<Vec<NodeElement>, SourceError> {
    let mut children = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let element = collect_element(reader, &e, Vec::new())?;
                let nested = parse_children(reader)?;
                children.push(with_children(element, nested));
            }
            Event::Empty(e) => {
                children.push(collect_element(reader, &e, Vec::new())?);
            }
            Event::End(_) | Event::Eof => return Ok(children),
            _ => {}
        }
    }
}

fn with_children(mut element: NodeElement, children: Vec<NodeElement>) -> NodeElement {
    for child in children {
        element = element.with_child(child);
    }
    element
}

fn collect_element(
    reader: &Reader<&[u8]>,
    start: &BytesStart<'_>,
    children: Vec<NodeElement>,
) -> Result<NodeElement, SourceError> {
    let mut element = NodeElement::new(local_name(start));
    for attr in start.attributes() {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
            |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            std::borrow::Cow::into_owned,
        );

        // Skip namespace declarations
        if key.starts_with("xmlns") {
            continue;
        }

        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );

        element = element.with_attribute(key, value);
    }
    Ok(with_children(element, children))
}

fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().local_name().as_ref()).into_owned()
}

fn document_from_wrapper(wrapper: &NodeElement) -> Result<NavDocument, SourceError> {
    let enable_localization = match wrapper.attribute("enableLocalization") {
        None | Some("") => false,
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            return Err(SourceError::InvalidWrapperAttribute {
                name: "enableLocalization",
                value: other.to_owned(),
            });
        }
    };

    let mut roots = wrapper.children().iter().filter(|c| c.is_nav_node());
    let root = roots.next().ok_or(SourceError::MissingRootNode {
        expected: NAV_NODE_ELEMENT,
    })?;
    if roots.next().is_some() {
        return Err(SourceError::MultipleRootNodes {
            expected: NAV_NODE_ELEMENT,
        });
    }

    Ok(NavDocument::new(enable_localization, root.clone()))
}
