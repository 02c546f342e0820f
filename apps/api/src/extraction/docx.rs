//! DOCX reader. A .docx is a zip archive; body text lives in `word/document.xml`.
//!
//! Only top-level body paragraphs are read, and their texts are joined with single
//! spaces in document order. Table cells, content controls (`w:sdt`) and nested
//! text boxes are skipped.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::extraction::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn read_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(e.to_string()))?;

    Ok(paragraphs(&xml)?.join(" "))
}

fn paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut out = Vec::new();
    let mut current = String::new();
    let mut para_depth = 0usize;
    let mut skipped_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::Docx(e.to_string()))?;

        let top_level = para_depth == 1 && skipped_depth == 0;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    para_depth += 1;
                    if para_depth == 1 {
                        current.clear();
                    }
                }
                b"w:tbl" | b"w:sdt" => skipped_depth += 1,
                b"w:t" => in_text = top_level,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if top_level {
                        out.push(std::mem::take(&mut current));
                    }
                    para_depth = para_depth.saturating_sub(1);
                }
                b"w:tbl" | b"w:sdt" => skipped_depth = skipped_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if para_depth == 0 && skipped_depth == 0 => out.push(String::new()),
                b"w:tab" if top_level => current.push('\t'),
                b"w:br" | b"w:cr" if top_level => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| ExtractError::Docx(e.to_string()))?;
                current.push_str(&text);
            }
            Event::CData(t) if in_text => {
                current.push_str(&String::from_utf8_lossy(&t));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}
