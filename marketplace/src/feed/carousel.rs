//! Horizontal image carousel nested inside each feed item.

/// Page state of one item's image carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCarousel {
    page: usize,
    page_count: usize,
}

impl ImageCarousel {
    pub fn new(page_count: usize) -> Self {
        Self { page: 0, page_count }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Jump to a page, clamped to the available images.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.min(self.page_count.saturating_sub(1));
        self.page
    }

    /// Update from a horizontal scroll offset; snaps to the nearest page.
    pub fn on_scroll(&mut self, offset_x: f32, page_width: f32) -> usize {
        if page_width <= 0.0 || !offset_x.is_finite() {
            return self.page;
        }
        let page = (offset_x.max(0.0) / page_width).round() as usize;
        self.set_page(page)
    }
}
