use std::collections::HashSet;

/// Process-wide configuration, read once at startup and immutable afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory for incidental upload storage. Created at startup; the
    /// generation path never reads from it.
    pub upload_folder: String,
    /// Lowercased file extensions accepted for the `template` field.
    pub allowed_extensions: HashSet<String>,
    /// Request body ceiling in bytes.
    pub max_content_length: usize,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_folder: "uploads".to_string(),
            allowed_extensions: HashSet::from(["docx".to_string()]),
            max_content_length: 16 * 1024 * 1024,
            bind_addr: "0.0.0.0:5000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            upload_folder: std::env::var("UPLOAD_FOLDER").unwrap_or(default.upload_folder),
            allowed_extensions: std::env::var("ALLOWED_EXTENSIONS")
                .map(|v| parse_extensions(&v))
                .unwrap_or(default.allowed_extensions),
            max_content_length: std::env::var("MAX_CONTENT_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_content_length),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(default.bind_addr),
        }
    }

    /// A filename passes when it has an extension and that extension is in
    /// the allow-list, compared case-insensitively.
    pub fn is_allowed(&self, filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| self.allowed_extensions.contains(&ext.to_ascii_lowercase()))
            .unwrap_or(false)
    }
}

fn parse_extensions(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|ext| ext.trim().to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_docx_case_insensitively() {
        let config = Config::default();
        assert!(config.is_allowed("paper.docx"));
        assert!(config.is_allowed("paper.DOCX"));
        assert!(config.is_allowed("archive.tar.docx"));
    }

    #[test]
    fn rejects_other_extensions_and_bare_names() {
        let config = Config::default();
        assert!(!config.is_allowed("paper.txt"));
        assert!(!config.is_allowed("paper.docx.txt"));
        assert!(!config.is_allowed("paper"));
        assert!(!config.is_allowed(""));
    }

    #[test]
    fn parses_extension_list() {
        let exts = parse_extensions("docx, DOC ,,odt");
        assert_eq!(
            exts,
            HashSet::from(["docx".to_string(), "doc".to_string(), "odt".to_string()])
        );
    }
}
