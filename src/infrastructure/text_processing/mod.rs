mod composite_extractor;
mod docx_adapter;
mod image_ocr_adapter;
mod pdf_adapter;
mod tesseract_ocr_engine;

pub use composite_extractor::CompositeTextExtractor;
pub use docx_adapter::DocxAdapter;
pub use image_ocr_adapter::{ImageOcrAdapter, NO_TEXT_IN_IMAGE, OCR_LANGUAGE};
pub use pdf_adapter::{PAGE_BREAK, PdfAdapter, SCANNED_PDF_NOTICE};
pub use tesseract_ocr_engine::TesseractOcrEngine;
