//! PDF fixtures built with lopdf for integration tests.

#![allow(dead_code)]

use lopdf::{Document, Object, Stream, StringFormat, dictionary};

/// Content stream drawing a bordered grid with one text string per cell.
///
/// `x0`/`y_top` are in PDF user space (bottom-left origin). Cells are
/// 100pt wide and 30pt tall.
pub fn grid_table(x0: f64, y_top: f64, cells: &[&[&str]]) -> String {
    let col_w = 100.0_f64;
    let row_h = 30.0_f64;
    let rows = cells.len();
    let cols = cells.iter().map(|r| r.len()).max().unwrap_or(0);
    let x1 = x0 + col_w * cols as f64;
    let y_bottom = y_top - row_h * rows as f64;

    let mut cs = String::from("1 w\n");
    for r in 0..=rows {
        let y = y_top - row_h * r as f64;
        cs.push_str(&format!("{x0} {y} m {x1} {y} l S\n"));
    }
    for c in 0..=cols {
        let x = x0 + col_w * c as f64;
        cs.push_str(&format!("{x} {y_top} m {x} {y_bottom} l S\n"));
    }
    for (r, row) in cells.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            let tx = x0 + col_w * c as f64 + 5.0;
            let ty = y_top - row_h * r as f64 - 20.0;
            cs.push_str(&format!("BT /F1 10 Tf {tx} {ty} Td ({text}) Tj ET\n"));
        }
    }
    cs
}

/// Content stream with a single line of text and no ruling lines.
pub fn plain_text(text: &str) -> String {
    format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
}

/// Build a PDF with one US Letter page per content stream.
pub fn build_pdf(pages: &[String]) -> Vec<u8> {
    let mut buf = Vec::new();
    build_document(pages)
        .save_to(&mut buf)
        .expect("failed to save test PDF");
    buf
}

fn build_document(pages: &[String]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut page_ids = Vec::new();
    for content in pages {
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.clone().into_bytes()));
        page_ids.push(doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
        }));
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::from(*id)).collect::<Vec<_>>(),
            "Count" => page_ids.len() as i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

const PAD_BYTES: [u8; 32] = [
    0x28, 0xBF, 0x4E, 0x5E, 0x4E, 0x75, 0x8A, 0x41, 0x64, 0x00, 0x4E, 0x56, 0xFF, 0xFA, 0x01,
    0x08, 0x2E, 0x2E, 0x00, 0xB6, 0xD0, 0x68, 0x3E, 0x80, 0x2F, 0x0C, 0xA9, 0xFE, 0x64, 0x53,
    0x69, 0x7A,
];

fn rc4(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut s: Vec<u8> = (0..=255).collect();
    let mut j: usize = 0;
    for i in 0..256 {
        j = (j + s[i] as usize + key[i % key.len()] as usize) & 0xFF;
        s.swap(i, j);
    }
    let mut out = Vec::with_capacity(data.len());
    let mut i: usize = 0;
    j = 0;
    for &byte in data {
        i = (i + 1) & 0xFF;
        j = (j + s[i] as usize) & 0xFF;
        s.swap(i, j);
        out.push(byte ^ s[(s[i] as usize + s[j] as usize) & 0xFF]);
    }
    out
}

/// Build a PDF protected with a user password (standard security handler,
/// revision 2, 40-bit RC4).
pub fn build_encrypted_pdf(pages: &[String], user_password: &[u8]) -> Vec<u8> {
    let file_id = b"tablextractfixid";
    let permissions: i32 = -4;

    let pw_len = user_password.len().min(32);
    let mut padded_pw = user_password[..pw_len].to_vec();
    padded_pw.extend_from_slice(&PAD_BYTES[..32 - pw_len]);

    // No owner password: O is derived from the padded user password.
    let o_digest = md5::compute(&padded_pw);
    let o_value = rc4(&o_digest[..5], &padded_pw);

    let mut key_input = padded_pw.clone();
    key_input.extend_from_slice(&o_value);
    key_input.extend_from_slice(&(permissions as u32).to_le_bytes());
    key_input.extend_from_slice(file_id);
    let key_digest = md5::compute(&key_input);
    let file_key = key_digest[..5].to_vec();
    let u_value = rc4(&file_key, &PAD_BYTES);

    let mut doc = build_document(pages);
    for (&(num, gen_), obj) in doc.objects.iter_mut() {
        let mut obj_key_input = file_key.clone();
        obj_key_input.extend_from_slice(&num.to_le_bytes()[..3]);
        obj_key_input.extend_from_slice(&gen_.to_le_bytes()[..2]);
        let obj_digest = md5::compute(&obj_key_input);
        let obj_key = &obj_digest[..(file_key.len() + 5).min(16)];

        match obj {
            Object::Stream(stream) => {
                let encrypted = rc4(obj_key, &stream.content);
                stream.set_content(encrypted);
            }
            Object::String(content, _) => *content = rc4(obj_key, content),
            _ => {}
        }
    }

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1_i64,
        "R" => 2_i64,
        "Length" => 40_i64,
        "O" => Object::String(o_value, StringFormat::Literal),
        "U" => Object::String(u_value, StringFormat::Literal),
        "P" => permissions as i64,
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    doc.trailer.set(
        "ID",
        Object::Array(vec![
            Object::String(file_id.to_vec(), StringFormat::Literal),
            Object::String(file_id.to_vec(), StringFormat::Literal),
        ]),
    );

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save encrypted test PDF");
    buf
}

/// Write PDF bytes to a `.pdf` temp file.
pub fn write_temp_pdf(bytes: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    f.write_all(bytes).unwrap();
    f.flush().unwrap();
    f
}
