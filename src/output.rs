use std::io::Cursor;

use log::trace;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::Error;
use crate::ConversionResult;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Write the minimal SVG document for a successful conversion.
///
/// The `path` element is omitted when the merged path is empty.
pub fn to_svg(result: &ConversionResult) -> Result<String, Error> {
    trace!("to_svg");
    if let Some(ref e) = result.error {
        return Err(e.clone());
    }

    let frame = result.frame;
    let width = frame.width.to_string();
    let height = frame.height.to_string();
    let x = frame.x.to_string();
    let y = frame.y.to_string();

    let mut svg = BytesStart::borrowed_name(b"svg");
    svg.push_attribute(("xmlns", SVG_NS));
    svg.push_attribute(("width", width.as_str()));
    svg.push_attribute(("height", height.as_str()));
    svg.push_attribute(("x", x.as_str()));
    svg.push_attribute(("y", y.as_str()));

    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let write_err = |e: quick_xml::Error| Error::Serialize(e.to_string());
    if result.d.is_empty() {
        writer.write_event(Event::Empty(svg)).map_err(write_err)?;
    } else {
        let mut path = BytesStart::borrowed_name(b"path");
        path.push_attribute(("d", result.d.as_str()));
        writer.write_event(Event::Start(svg)).map_err(write_err)?;
        writer.write_event(Event::Empty(path)).map_err(write_err)?;
        writer
            .write_event(Event::End(BytesEnd::borrowed(b"svg")))
            .map_err(write_err)?;
    }

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| Error::Serialize(e.to_string()))
}
