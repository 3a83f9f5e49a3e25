//! Configuration providers: where the element list of a render pass comes from.

use crate::types::ElementConfig;

/// Read access to the active well configuration. Each call returns a snapshot
/// that stays unchanged for the duration of one render pass.
pub trait ConfigProvider {
    fn elements(&self) -> Vec<ElementConfig>;
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for &P {
    fn elements(&self) -> Vec<ElementConfig> {
        (**self).elements()
    }
}

/// Provider over a fixed, ordered element list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticProvider {
    elements: Vec<ElementConfig>,
}

impl StaticProvider {
    pub fn new(elements: Vec<ElementConfig>) -> Self {
        Self { elements }
    }

    pub fn single(element: ElementConfig) -> Self {
        Self { elements: vec![element] }
    }

    /// 13 3/8" production casing in a 17" hole, cemented from 553.
    pub fn sample() -> Self {
        Self::single(ElementConfig::casing(17.0, 1900.0, 13.375, 0.0, 1500.0).with_toc(553.0))
    }

    /// 16" open hole to 590.
    pub fn open_hole_sample() -> Self {
        Self::single(ElementConfig::open_hole(16.0, 590.0))
    }

    /// Replace the configuration; the next render pass picks it up.
    pub fn set(&mut self, elements: Vec<ElementConfig>) {
        self.elements = elements;
    }
}

impl ConfigProvider for StaticProvider {
    fn elements(&self) -> Vec<ElementConfig> {
        self.elements.clone()
    }
}
