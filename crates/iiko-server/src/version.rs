//! Version extraction from the server description document.
//!
//! The document comes from the network, so the reader is strict: a
//! document type declaration is rejected outright, and any entity other
//! than the five predefined ones fails to unescape. No entity is ever
//! resolved against an external resource.

use quick_xml::events::Event;
use quick_xml::Reader;

use iiko_client::{Error, ErrorKind, Result};

const VERSION_ELEMENT: &[u8] = b"version";

/// Text content of every `version` element, concatenated in document order.
///
/// ```rust
/// use iiko_server::parse_version;
///
/// let xml = "<r><serverName>main</serverName><version>7.4.6017.0</version></r>";
/// assert_eq!(parse_version(xml).unwrap(), "7.4.6017.0");
/// ```
pub fn parse_version(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut depth = 0usize;
    let mut found = false;
    let mut version = String::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::DocType(_) => {
                return Err(Error::new(ErrorKind::Xml(
                    "document type declarations are not accepted".to_string(),
                )));
            }
            Event::Start(e) if e.local_name().as_ref() == VERSION_ELEMENT => {
                depth += 1;
                found = true;
            }
            Event::Empty(e) if e.local_name().as_ref() == VERSION_ELEMENT => {
                found = true;
            }
            Event::End(e) if depth > 0 && e.local_name().as_ref() == VERSION_ELEMENT => {
                depth -= 1;
            }
            Event::Text(text) if depth > 0 => {
                version.push_str(&text.unescape().map_err(xml_error)?);
            }
            Event::CData(data) if depth > 0 => {
                version.push_str(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !found {
        return Err(Error::new(ErrorKind::Xml(
            "no version element in server info".to_string(),
        )));
    }
    Ok(version)
}

fn xml_error(err: impl std::error::Error + Send + Sync + 'static) -> Error {
    let message = err.to_string();
    Error::with_source(ErrorKind::Xml(message), err)
}
