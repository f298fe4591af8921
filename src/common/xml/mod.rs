//! Minimal XML writing: an element tree, a document wrapper and escaping.

pub mod document;
pub mod escape;
pub mod node;

pub use document::XmlDocument;
pub use escape::{escape_attr, escape_text};
pub use node::XmlNode;

/// Parse `xml` to the end and fail the test on any well-formedness error.
#[cfg(test)]
pub(crate) fn assert_well_formed(xml: &str) {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("malformed XML at {}: {}\n{}", reader.buffer_position(), e, xml),
        }
    }
    assert_eq!(depth, 0, "unbalanced elements in\n{}", xml);
}
