//! # Prompt Scanner
//!
//! The CLI stand-in for the camera capability: the operator types (or
//! wedge-scans) a barcode at an interactive prompt. Real frame
//! decoding is out of scope everywhere in this system; the core only
//! ever consumes decoded strings.

use dialoguer::Input;

use anbar_core::scan::BarcodeScanner;
use anbar_core::CameraAccessError;

/// Reads barcodes from an interactive terminal prompt.
///
/// USB scanner wedges type the code followed by Enter, so this prompt
/// works with real hardware too. Without an attended terminal the
/// capability is unavailable, mirroring a denied or missing camera.
#[derive(Debug, Default)]
pub struct PromptScanner;

impl BarcodeScanner for PromptScanner {
    fn next_code(&mut self) -> Result<Option<String>, CameraAccessError> {
        if !console::user_attended() {
            return Err(CameraAccessError::Unsupported(
                "no interactive terminal; pass the barcode as an argument instead".to_string(),
            ));
        }

        let code: String = Input::new()
            .with_prompt("Scan or type a barcode (empty to cancel)")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CameraAccessError::Denied(e.to_string()))?;

        let code = code.trim().to_string();
        if code.is_empty() {
            Ok(None) // operator cancelled, no side effects
        } else {
            Ok(Some(code))
        }
    }
}
