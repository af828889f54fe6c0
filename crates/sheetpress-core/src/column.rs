//! Per-column settings

/// Width and visibility overrides for one column.
///
/// Columns without an entry in the worksheet use the sheet defaults and
/// are visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Column {
    /// Column index (0-based)
    pub index: u16,
    /// Width in characters of the default font's widest digit
    pub width: Option<f64>,
    pub hidden: bool,
}

impl Column {
    pub fn new(index: u16) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    /// Width in characters, falling back to `default` when not overridden
    pub fn width_or(&self, default: f64) -> f64 {
        self.width.unwrap_or(default)
    }

    /// Whether the column renders exactly like one without an entry
    pub fn is_default(&self) -> bool {
        self.width.is_none() && !self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_fallback() {
        let mut column = Column::new(3);
        assert!(column.is_default());
        assert_eq!(column.width_or(8.43), 8.43);

        column.width = Some(20.0);
        assert_eq!(column.width_or(8.43), 20.0);
        assert!(!column.is_default());
    }

    #[test]
    fn test_hidden_is_not_default() {
        let column = Column {
            hidden: true,
            ..Column::new(0)
        };
        assert!(!column.is_default());
    }
}
