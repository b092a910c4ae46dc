use crate::constants::CELL_MARGIN_PT;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// N-up configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NupOptions {
    /// Source pages combined onto each output sheet
    pub pages_per_sheet: usize,

    // Output configuration
    pub orientation: Orientation,
    pub paper_size: PaperSize,

    /// Total margin subtracted from each cell dimension, in points
    pub cell_margin_pt: f32,
}

impl Default for NupOptions {
    fn default() -> Self {
        Self {
            pages_per_sheet: 4,
            orientation: Orientation::Portrait,
            paper_size: PaperSize::Letter,
            cell_margin_pt: CELL_MARGIN_PT,
        }
    }
}

impl NupOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes).map_err(|e| {
            NupError::InvalidConfiguration(format!("Failed to parse config: {}", e))
        })?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            NupError::InvalidConfiguration(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Size of every output sheet
    pub fn sheet_size(&self) -> PageSize {
        PageSize::for_orientation(self.paper_size, self.orientation)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.pages_per_sheet < 1 {
            return Err(NupError::InvalidConfiguration(
                "Pages per sheet must be at least 1".to_string(),
            ));
        }

        if !self.sheet_size().is_usable() {
            return Err(NupError::InvalidConfiguration(format!(
                "Paper size {:?} must have positive dimensions",
                self.paper_size
            )));
        }

        if !self.cell_margin_pt.is_finite() || self.cell_margin_pt < 0.0 {
            return Err(NupError::InvalidConfiguration(format!(
                "Cell margin must be a non-negative number of points, got {}",
                self.cell_margin_pt
            )));
        }

        Ok(())
    }
}
