use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::Regex;

use crate::models::document::RawDocument;
use crate::parsing::DecodeError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts paragraph text from a DOCX (Office Open XML) container.
///
/// Non-blank paragraphs are joined with `\n`. Legacy binary `.doc` files are
/// not zip archives and fail here with `DecodeError::Decode`.
pub fn decode_docx(content: &[u8]) -> Result<RawDocument, DecodeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(content))
        .map_err(|e| DecodeError::Decode(format!("Not a DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| DecodeError::Decode(format!("Missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| DecodeError::Decode(format!("Unreadable {DOCUMENT_PART}: {e}")))?;

    Ok(parse_document_xml(&xml))
}

fn parse_document_xml(xml: &str) -> RawDocument {
    let paragraphs: Vec<String> = paragraph_regex()
        .captures_iter(xml)
        .map(|caps| paragraph_text(caps.get(1).map(|m| m.as_str()).unwrap_or_default()))
        .filter(|p| !p.trim().is_empty())
        .collect();

    RawDocument {
        text: paragraphs.join("\n"),
        has_tables: xml.contains("<w:tbl>") || xml.contains("<w:tbl "),
        page_count: 1,
    }
}

/// Text of every run in a paragraph. Tabs and breaks inside runs become
/// `\t` and `\n`; tab stops declared in paragraph properties are ignored.
fn paragraph_text(paragraph: &str) -> String {
    let mut text = String::new();
    for run in run_regex().captures_iter(paragraph) {
        let body = run.get(1).map(|m| m.as_str()).unwrap_or_default();
        for token in run_content_regex().captures_iter(body) {
            if let Some(t) = token.get(1) {
                text.push_str(&unescape_xml(t.as_str()));
            } else if let Some(element) = token.get(2) {
                text.push(if element.as_str() == "tab" { '\t' } else { '\n' });
            }
        }
    }
    text
}

/// Decodes the five predefined entities and numeric character references
/// in a single pass, so `&amp;#38;` stays `&#38;`.
fn unescape_xml(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &regex::Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "amp" => Some('&'),
                _ => entity
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .unwrap_or_else(|| entity[1..].parse::<u32>())
                    .ok()
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn paragraph_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)<w:p(?:\s[^>]*)?>(.*?)</w:p>").expect("Invalid regex"))
}

fn run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)<w:r(?:\s[^>]*)?>(.*?)</w:r>").expect("Invalid regex"))
}

fn run_content_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:(tab|br|cr)(?:\s[^>]*)?/>")
            .expect("Invalid regex")
    })
}

fn entity_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"&(#[0-9]+|#x[0-9A-Fa-f]+|lt|gt|quot|apos|amp);").expect("Invalid regex")
    })
}
