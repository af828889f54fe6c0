//! Merged-region lookup

use sheetpress_core::{CellRange, Worksheet};

/// Index of a sheet's merged regions, ordered by first row.
///
/// A lookup binary-searches past the regions starting below the queried
/// row and scans the rest, so building costs one sort however many rows a
/// region spans. When regions overlap (which well-formed sheets never do),
/// the first one in sheet order wins.
#[derive(Debug, Default)]
pub struct MergeIndex {
    regions: Vec<CellRange>,
    /// Positions in `regions`, sorted by `first_row` then sheet order
    by_first_row: Vec<usize>,
}

impl MergeIndex {
    /// Index the merged regions of `sheet`
    pub fn new(sheet: &Worksheet) -> Self {
        Self::from_regions(sheet.merged_regions())
    }

    /// Index an explicit list of regions, kept in the given order
    pub fn from_regions(regions: &[CellRange]) -> Self {
        let mut by_first_row: Vec<usize> = (0..regions.len()).collect();
        by_first_row.sort_by_key(|&i| regions[i].first_row);
        Self {
            regions: regions.to_vec(),
            by_first_row,
        }
    }

    /// Whether `(row, col)` lies inside any merged region
    pub fn is_merged(&self, row: u32, col: u16) -> bool {
        self.region_at(row, col).is_some()
    }

    /// The region covering `(row, col)`, if any
    pub fn region_at(&self, row: u32, col: u16) -> Option<&CellRange> {
        let started = self
            .by_first_row
            .partition_point(|&i| self.regions[i].first_row <= row);
        self.by_first_row[..started]
            .iter()
            .copied()
            .filter(|&i| self.regions[i].contains(row, col))
            .min()
            .map(|i| &self.regions[i])
    }

    /// `(row_span, col_span)` when `(row, col)` is a region's top-left anchor
    pub fn anchor_span(&self, row: u32, col: u16) -> Option<(u32, u16)> {
        self.region_at(row, col)
            .filter(|r| r.is_anchor(row, col))
            .map(|r| (r.row_count(), r.col_count()))
    }

    /// Number of indexed regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the sheet has no merged regions
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
