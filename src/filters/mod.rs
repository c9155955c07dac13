// SPDX-License-Identifier: GPL-3.0-only

//! Filter presets
//!
//! A preset is a named descriptor: the response name identifies the color-grade
//! kernel the rendering engine applies, the display name is what the filter strip
//! shows. Presets carry no image processing of their own.

mod tender;

pub use tender::TenderFilter;

/// Known filter presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterType {
    /// No filter applied
    #[default]
    None,
    K1,
    Fridge,
    Breeze,
    Orchid,
    Chest,
    Front,
    Fixie,
    Lomo,
    Mellow,
    Soft,
    /// Soft warm grade with lifted highlights
    Tender,
    Bleached,
    Winter,
    Summer,
}

impl FilterType {
    /// All presets in filter strip order
    pub const ALL: [FilterType; 15] = [
        FilterType::None,
        FilterType::K1,
        FilterType::Fridge,
        FilterType::Breeze,
        FilterType::Orchid,
        FilterType::Chest,
        FilterType::Front,
        FilterType::Fixie,
        FilterType::Lomo,
        FilterType::Mellow,
        FilterType::Soft,
        FilterType::Tender,
        FilterType::Bleached,
        FilterType::Winter,
        FilterType::Summer,
    ];

    /// Build the preset descriptor for this filter type
    pub fn effect(self) -> Box<dyn EffectFilter> {
        match self {
            FilterType::None => Box::new(NoneFilter),
            FilterType::Tender => Box::new(TenderFilter::new()),
            other => Box::new(ResponseFilter::new(other.response_name_str(), other)),
        }
    }

    /// Name shown in the filter strip
    pub fn display_name(self) -> &'static str {
        self.effect().display_name()
    }

    fn response_name_str(self) -> &'static str {
        match self {
            FilterType::None => "None",
            FilterType::K1 => "K1",
            FilterType::Fridge => "Fridge",
            FilterType::Breeze => "Breeze",
            FilterType::Orchid => "Orchid",
            FilterType::Chest => "Chest",
            FilterType::Front => "Front",
            FilterType::Fixie => "Fixie",
            FilterType::Lomo => "Lomo",
            FilterType::Mellow => "Mellow",
            FilterType::Soft => "Soft",
            FilterType::Tender => "Tender",
            FilterType::Bleached => "Bleached",
            FilterType::Winter => "Winter",
            FilterType::Summer => "Summer",
        }
    }
}

/// Display metadata every preset exposes to the filter strip and the editor
pub trait EffectFilter: Send + Sync {
    fn display_name(&self) -> &'static str;

    fn filter_type(&self) -> FilterType;

    /// Identifier of the color-grade kernel, `None` for the identity preset
    fn response_name(&self) -> Option<&'static str> {
        None
    }
}

/// A preset backed by a named response curve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFilter {
    response_name: &'static str,
    filter_type: FilterType,
}

impl ResponseFilter {
    pub fn new(response_name: &'static str, filter_type: FilterType) -> Self {
        Self {
            response_name,
            filter_type,
        }
    }
}

impl EffectFilter for ResponseFilter {
    fn display_name(&self) -> &'static str {
        self.response_name
    }

    fn filter_type(&self) -> FilterType {
        self.filter_type
    }

    fn response_name(&self) -> Option<&'static str> {
        Some(self.response_name)
    }
}

/// The identity preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoneFilter;

impl EffectFilter for NoneFilter {
    fn display_name(&self) -> &'static str {
        "None"
    }

    fn filter_type(&self) -> FilterType {
        FilterType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_reports_its_own_type() {
        for filter in FilterType::ALL {
            assert_eq!(filter.effect().filter_type(), filter);
        }
    }

    #[test]
    fn test_only_none_lacks_response_name() {
        for filter in FilterType::ALL {
            let has_response = filter.effect().response_name().is_some();
            assert_eq!(has_response, filter != FilterType::None, "{:?}", filter);
        }
    }

    #[test]
    fn test_display_names_unique() {
        let mut names: Vec<_> = FilterType::ALL.iter().map(|f| f.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FilterType::ALL.len());
    }
}
