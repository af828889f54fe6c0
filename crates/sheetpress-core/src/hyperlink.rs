//! Cell hyperlinks

/// What a hyperlink points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HyperlinkKind {
    /// Web address
    #[default]
    Url,
    /// Location inside the same workbook (e.g., `Sheet2!A1`)
    Document,
    /// `mailto:` address
    Email,
    /// Local or network file
    File,
}

/// A hyperlink attached to a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    /// Link target as stored in the workbook
    pub address: String,
    /// Target kind
    pub kind: HyperlinkKind,
    /// Optional tooltip text
    pub tooltip: Option<String>,
}

impl Hyperlink {
    /// Create a web link
    pub fn url<S: Into<String>>(address: S) -> Self {
        Self {
            address: address.into(),
            kind: HyperlinkKind::Url,
            tooltip: None,
        }
    }

    /// Create a link with an explicit kind
    pub fn new<S: Into<String>>(address: S, kind: HyperlinkKind) -> Self {
        Self {
            address: address.into(),
            kind,
            tooltip: None,
        }
    }

    /// Set the tooltip
    pub fn with_tooltip<S: Into<String>>(mut self, tooltip: S) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}
