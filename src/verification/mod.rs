mod controller;
mod pdf_file;

pub use controller::{PdfVerifier, VerificationController, VerificationOutcome, VerificationState};
pub use pdf_file::PdfFile;
