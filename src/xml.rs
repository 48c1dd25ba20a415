//! XML codec for `rpc-error` (RFC6241 section 4.3)
//!
//! Elements are written in the fixed RFC order; optional leaves and an empty
//! `error-info` are left out. `error-info` children carry their own `xmlns`
//! when they have a namespace.
//!
//! ```xml
//! <rpc-error xmlns="urn:ietf:params:xml:ns:netconf:base:1.0">
//!     <error-type>rpc</error-type>
//!     <error-tag>missing-attribute</error-tag>
//!     <error-severity>error</error-severity>
//!     <error-message>An expected attribute is missing.</error-message>
//!     <error-info>
//!         <bad-attribute>attrX</bad-attribute>
//!         <bad-element>elemY</bad-element>
//!     </error-info>
//! </rpc-error>
//! ```

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use tracing::debug;

use crate::classify::Classifier;
use crate::error::{CodecError, Result};
use crate::info::{ErrorInfo, InfoTag};
use crate::record::MgmtError;
use crate::typed::TypedError;
use crate::types::NETCONF_NAMESPACE;

pub(crate) const RPC_ERROR: &str = "rpc-error";
const ERROR_TYPE: &str = "error-type";
const ERROR_TAG: &str = "error-tag";
const ERROR_SEVERITY: &str = "error-severity";
const ERROR_APP_TAG: &str = "error-app-tag";
const ERROR_PATH: &str = "error-path";
const ERROR_MESSAGE: &str = "error-message";
const ERROR_INFO: &str = "error-info";

/// Layout of encoded XML
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum XmlIndent {
    /// Everything on one line
    #[default]
    None,
    /// One tab per level
    Tabs,
    /// `n` spaces per level
    Spaces(usize),
}

impl XmlIndent {
    pub fn writer<W: Write>(self, inner: W) -> Writer<W> {
        match self {
            XmlIndent::None => Writer::new(inner),
            XmlIndent::Tabs => Writer::new_with_indent(inner, b'\t', 1),
            XmlIndent::Spaces(n) => Writer::new_with_indent(inner, b' ', n),
        }
    }
}

/// Values that encode as one or more `rpc-error` elements
pub trait ToXml {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()>;

    fn to_xml(&self) -> Result<String> {
        self.to_xml_with(XmlIndent::None)
    }

    fn to_xml_pretty(&self) -> Result<String> {
        self.to_xml_with(XmlIndent::Tabs)
    }

    fn to_xml_with(&self, indent: XmlIndent) -> Result<String> {
        let mut writer = indent.writer(Vec::new());
        self.write_xml(&mut writer)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

/// Values that decode from XML text
pub trait FromXml: Sized {
    fn from_xml(xml: &str) -> Result<Self>;
}

fn write_leaf<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> Result<()> {
    writer
        .create_element(name)
        .write_text_content(BytesText::new(value))?;
    Ok(())
}

fn write_info<W: Write>(writer: &mut Writer<W>, info: &ErrorInfo) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(ERROR_INFO)))?;
    for tag in info {
        let mut start = BytesStart::new(tag.name.as_str());
        if !tag.namespace.is_empty() {
            start.push_attribute(("xmlns", tag.namespace.as_str()));
        }
        writer.write_event(Event::Start(start))?;
        writer.write_event(Event::Text(BytesText::new(&tag.value)))?;
        writer.write_event(Event::End(BytesEnd::new(tag.name.as_str())))?;
    }
    writer.write_event(Event::End(BytesEnd::new(ERROR_INFO)))?;
    Ok(())
}

impl ToXml for MgmtError {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let root = BytesStart::new(RPC_ERROR).with_attributes([("xmlns", NETCONF_NAMESPACE)]);
        writer.write_event(Event::Start(root))?;

        write_leaf(writer, ERROR_TYPE, &self.error_type)?;
        write_leaf(writer, ERROR_TAG, &self.tag)?;
        write_leaf(writer, ERROR_SEVERITY, &self.severity)?;
        for (name, value) in [
            (ERROR_APP_TAG, &self.app_tag),
            (ERROR_PATH, &self.path),
            (ERROR_MESSAGE, &self.message),
        ] {
            if !value.is_empty() {
                write_leaf(writer, name, value)?;
            }
        }
        if !self.info.is_empty() {
            write_info(writer, &self.info)?;
        }

        writer.write_event(Event::End(BytesEnd::new(RPC_ERROR)))?;
        Ok(())
    }
}

impl FromXml for MgmtError {
    /// The document root must be an `rpc-error`
    fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    let name = local_name(&start)?;
                    if name != RPC_ERROR {
                        return Err(CodecError::UnexpectedElement {
                            expected: RPC_ERROR,
                            found: name,
                        });
                    }
                    return read_rpc_error(&mut reader);
                }
                Event::Empty(start) => {
                    let name = local_name(&start)?;
                    if name != RPC_ERROR {
                        return Err(CodecError::UnexpectedElement {
                            expected: RPC_ERROR,
                            found: name,
                        });
                    }
                    return Ok(MgmtError::default());
                }
                Event::Eof => return Err(CodecError::MissingElement(RPC_ERROR)),
                _ => {}
            }
        }
    }
}

impl ToXml for TypedError {
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        self.record().write_xml(writer)
    }
}

impl FromXml for TypedError {
    /// Decodes the record and reclassifies it with the built-in catalogs
    fn from_xml(xml: &str) -> Result<Self> {
        MgmtError::from_xml(xml).map(MgmtError::classify)
    }
}

/// Every `rpc-error` in the document, wherever it is nested, classified with
/// `classifier`
pub(crate) fn read_all(xml: &str, classifier: &Classifier<'_>) -> Result<Vec<TypedError>> {
    let mut reader = NsReader::from_str(xml);
    let mut errors = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(start) if local_name(&start)? == RPC_ERROR => {
                let record = read_rpc_error(&mut reader)?;
                errors.push(classifier.classify(record));
            }
            Event::Empty(start) if local_name(&start)? == RPC_ERROR => {
                errors.push(classifier.classify(MgmtError::default()));
            }
            Event::Eof => return Ok(errors),
            _ => {}
        }
    }
}

fn local_name(start: &BytesStart<'_>) -> Result<String> {
    Ok(std::str::from_utf8(start.local_name().as_ref())?.to_string())
}

// Reads the content of an rpc-error whose start tag was just consumed
fn read_rpc_error(reader: &mut NsReader<&[u8]>) -> Result<MgmtError> {
    let mut record = MgmtError::default();
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = local_name(&start)?;
                match name.as_str() {
                    ERROR_TYPE => record.error_type = read_text(reader, RPC_ERROR)?,
                    ERROR_TAG => record.tag = read_text(reader, RPC_ERROR)?,
                    ERROR_SEVERITY => record.severity = read_text(reader, RPC_ERROR)?,
                    ERROR_APP_TAG => record.app_tag = read_text(reader, RPC_ERROR)?,
                    ERROR_PATH => record.path = read_text(reader, RPC_ERROR)?,
                    ERROR_MESSAGE => record.message = read_text(reader, RPC_ERROR)?,
                    ERROR_INFO => record.info = read_info(reader)?,
                    _ => {
                        debug!(element = %name, "skipping unknown rpc-error child");
                        reader.read_to_end(start.name())?;
                    }
                }
            }
            Event::End(_) => return Ok(record),
            Event::Eof => return Err(CodecError::UnexpectedEof(RPC_ERROR)),
            _ => {}
        }
    }
}

// Text content of a leaf inside `parent`, verbatim. Nested elements are
// skipped.
fn read_text(reader: &mut NsReader<&[u8]>, parent: &'static str) -> Result<String> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(std::str::from_utf8(&c)?),
            Event::Start(start) => {
                debug!(element = %local_name(&start)?, "skipping element inside leaf");
                reader.read_to_end(start.name())?;
            }
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(CodecError::UnexpectedEof(parent)),
            _ => {}
        }
    }
}

fn read_info(reader: &mut NsReader<&[u8]>) -> Result<ErrorInfo> {
    let mut info = ErrorInfo::new();
    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let namespace = info_namespace(reader, &start)?;
                let name = local_name(&start)?;
                let value = read_text(reader, ERROR_INFO)?;
                info.push(InfoTag::new(namespace, name, value));
            }
            Event::Empty(start) => {
                let namespace = info_namespace(reader, &start)?;
                info.push(InfoTag::new(namespace, local_name(&start)?, String::new()));
            }
            Event::End(_) => return Ok(info),
            Event::Eof => return Err(CodecError::UnexpectedEof(ERROR_INFO)),
            _ => {}
        }
    }
}

// An info leaf's own xmlns, else the namespace bound to its prefix. Unprefixed
// leaves without xmlns have no namespace, whatever the enclosing default is.
// Base protocol leaves have no namespace either, however they are qualified.
fn info_namespace(reader: &NsReader<&[u8]>, start: &BytesStart<'_>) -> Result<String> {
    let mut namespace = String::new();
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"xmlns" {
            namespace = attr.unescape_value()?.into_owned();
            break;
        }
    }

    if namespace.is_empty()
        && start.name().prefix().is_some()
        && let (ResolveResult::Bound(ns), _) = reader.resolve_element(start.name())
    {
        namespace = std::str::from_utf8(ns.as_ref())?.to_string();
    }

    if namespace == NETCONF_NAMESPACE {
        namespace.clear();
    }
    Ok(namespace)
}
