//! Text Extraction Module Tests
//!
//! Task source validation and file reading.

use crate::error::AppError;
use crate::text_extract;
use std::io::Write;
use tempfile::tempdir;

#[cfg(test)]
mod task_source_tests {
    use super::*;

    #[test]
    fn test_extract_plain_text_unchanged() {
        let content = "  Meeting Donnerstag  \n\nAudit vorbereiten\r\n";
        let result = text_extract::extract_task_text("tasks.txt", content.as_bytes());
        assert_eq!(result.unwrap(), content);
    }

    #[test]
    fn test_umlauts_survive() {
        let content = "Gespräch mit Wirtschaftsförderung";
        let text = text_extract::extract_task_text("notizen.txt", content.as_bytes()).unwrap();
        assert!(text.contains("ä"));
        assert!(text.contains("ö"));
    }

    #[test]
    fn test_reject_other_extensions() {
        for name in ["tasks.md", "tasks.csv", "tasks.pdf", "tasks.txt.docx"] {
            let result = text_extract::extract_task_text(name, b"Meeting");
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "Expected rejection for '{}'",
                name
            );
        }
    }

    #[test]
    fn test_reject_binary_signature() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
        let err = text_extract::extract_task_text("image.txt", &png).unwrap_err();
        assert!(err.to_string().contains("image/png"));
    }

    #[test]
    fn test_reject_nul_bytes() {
        let err = text_extract::extract_task_text("tasks.txt", b"Meeting\0Audit").unwrap_err();
        assert!(err.to_string().contains("Binary files"));
    }

    #[test]
    fn test_reject_invalid_utf8() {
        let err = text_extract::extract_task_text("tasks.txt", b"caf\xe9").unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }
}

#[cfg(test)]
mod task_file_tests {
    use super::*;

    #[test]
    fn test_read_task_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tasks.txt");
        let mut file = std::fs::File::create(&path).expect("Failed to create file");
        writeln!(file, "Meeting Donnerstag").unwrap();
        writeln!(file, "Audit vorbereiten").unwrap();

        let text = text_extract::read_task_file(&path).unwrap();
        assert_eq!(text, "Meeting Donnerstag\nAudit vorbereiten\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let err = text_extract::read_task_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_wrong_extension_on_disk() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("tasks.log");
        std::fs::write(&path, "Meeting").unwrap();
        let err = text_extract::read_task_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
