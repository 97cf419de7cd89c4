//! Error chain formatting utilities.

use core::fmt::{self, Display};

use crate::types::{ErrorRef, KeyValues, StructuredError};

/// Configuration for rendering an error chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainFormatConfig {
    pub separator: String,
    pub show_kvs: bool,
    pub kv_separator: String,
    pub cascade: bool,
    pub indent: String,
}

impl Default for ChainFormatConfig {
    fn default() -> Self {
        Self {
            separator: ": ".into(),
            show_kvs: false,
            kv_separator: " ".into(),
            cascade: false,
            indent: "  ".into(),
        }
    }
}

impl ChainFormatConfig {
    /// One layer per line, indented by depth, with each layer's pairs.
    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), show_kvs: true, cascade: true, ..Default::default() }
    }

    /// Single line with each layer's pairs in braces.
    #[inline]
    pub fn with_kvs() -> Self {
        Self { show_kvs: true, ..Default::default() }
    }

    fn write_kvs(&self, out: &mut String, kvs: &KeyValues) {
        if !self.show_kvs || kvs.is_empty() {
            return;
        }
        out.push_str(" {");
        for (i, kv) in kvs.iter().enumerate() {
            if i > 0 {
                out.push_str(&self.kv_separator);
            }
            out.push_str(&kv.to_string());
        }
        out.push('}');
    }

    /// Renders each link of `chain` as one item.
    ///
    /// Structured links contribute their own message; an opaque link is
    /// rendered with its `Display` output and ends the rendering, since that
    /// output already covers whatever it wraps.
    pub fn format_chain(&self, chain: ErrorRef<'_>) -> String {
        let mut result = String::new();

        for (depth, link) in chain.chain().enumerate() {
            if depth > 0 {
                result.push_str(&self.separator);
                if self.cascade {
                    for _ in 0..depth {
                        result.push_str(&self.indent);
                    }
                }
            }
            match link {
                ErrorRef::Structured(s) => {
                    result.push_str(s.message());
                    self.write_kvs(&mut result, s.kvs());
                },
                ErrorRef::Opaque(e) => {
                    result.push_str(&e.to_string());
                    break;
                },
            }
        }
        result
    }
}

/// Builder for customizing error display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a StructuredError,
    pub(crate) config: ChainFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a StructuredError) -> Self {
        Self { error, config: ChainFormatConfig::default() }
    }

    pub fn with_config(mut self, config: ChainFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_kvs(mut self, show: bool) -> Self {
        self.config.show_kvs = show;
        self
    }

    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled && self.config.separator == ": " {
            self.config.separator = "\n".into();
        }
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = ChainFormatConfig::cascaded();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.config.format_chain(self.error.as_error_ref()))
    }
}
