use std::fmt;

use serde::Serialize;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff"];

/// An uploaded file as received from the caller. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub filename: String,
    pub declared_content_type: String,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(filename: String, declared_content_type: String, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            declared_content_type,
            bytes,
        }
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::classify(&self.filename, &self.declared_content_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Image,
    Unknown,
}

impl DocumentFormat {
    /// Declared content type wins; the filename extension is only consulted
    /// when the content type is not one we recognise.
    pub fn classify(filename: &str, content_type: &str) -> Self {
        match content_type {
            PDF_MIME => return Self::Pdf,
            DOCX_MIME => return Self::Docx,
            ct if ct.starts_with("image/") => return Self::Image,
            _ => {}
        }

        let filename = filename.to_lowercase();
        if filename.ends_with(".pdf") {
            Self::Pdf
        } else if filename.ends_with(".docx") {
            Self::Docx
        } else if IMAGE_EXTENSIONS.iter().any(|ext| filename.ends_with(ext)) {
            Self::Image
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Image => "image",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}
