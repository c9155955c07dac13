// SPDX-License-Identifier: GPL-3.0-only

//! The "Tender" color-grade preset

use super::{EffectFilter, FilterType, ResponseFilter};

/// Response filter preset named "Tender"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenderFilter {
    response: ResponseFilter,
}

impl TenderFilter {
    pub fn new() -> Self {
        Self {
            response: ResponseFilter::new("Tender", FilterType::Tender),
        }
    }
}

impl Default for TenderFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectFilter for TenderFilter {
    fn display_name(&self) -> &'static str {
        "Tender"
    }

    fn filter_type(&self) -> FilterType {
        FilterType::Tender
    }

    fn response_name(&self) -> Option<&'static str> {
        self.response.response_name()
    }
}
