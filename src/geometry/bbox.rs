use super::{Point, Size};

/// `BoundingBox` defines an axis-aligned rectangular region in user coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    bbox: Option<BoundingBox>,
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self { bbox: None }
    }

    pub fn extend(&mut self, bbox: BoundingBox) -> &Self {
        if let Some(ref mut b) = self.bbox {
            *b = b.combine(&bbox);
        } else {
            self.bbox = Some(bbox);
        }
        self
    }

    pub fn extend_point(&mut self, p: Point) -> &Self {
        self.extend(BoundingBox::new(p.x, p.y, p.x, p.y))
    }

    pub fn build(self) -> Option<BoundingBox> {
        self.bbox
    }
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            self.x1.min(other.x1),
            self.y1.min(other.y1),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
