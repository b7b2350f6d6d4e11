use crate::constants::{DEFAULT_SEGMENTS, FULL_TURN_DEG};
use crate::error::WheelError;
use std::str::FromStr;

/// One slice of the wheel.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    pub weight: f64,
}

impl Segment {
    pub fn new(label: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            weight,
        }
    }
}

/// Validated, ordered list of segments. Index 0 sits at the pointer when the
/// wheel angle is zero; indices advance against the direction of rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTable {
    segments: Vec<Segment>,
    total_weight: f64,
}

impl SegmentTable {
    pub fn new(segments: Vec<Segment>) -> Result<Self, WheelError> {
        if segments.is_empty() {
            return Err(WheelError::EmptyTable);
        }
        for (index, seg) in segments.iter().enumerate() {
            if !seg.weight.is_finite() || seg.weight < 0.0 {
                return Err(WheelError::InvalidWeight {
                    index,
                    label: seg.label.clone(),
                    weight: seg.weight,
                });
            }
        }
        let total_weight: f64 = segments.iter().map(|s| s.weight).sum();
        if total_weight <= 0.0 {
            return Err(WheelError::ZeroTotalWeight);
        }
        Ok(Self {
            segments,
            total_weight,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a constructed table.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[inline]
    pub fn degrees_per_segment(&self) -> f64 {
        FULL_TURN_DEG / self.segments.len() as f64
    }
}

impl Default for SegmentTable {
    fn default() -> Self {
        let segments: Vec<Segment> = DEFAULT_SEGMENTS
            .iter()
            .map(|(label, weight)| Segment::new(*label, *weight))
            .collect();
        let total_weight = segments.iter().map(|s| s.weight).sum();
        Self {
            segments,
            total_weight,
        }
    }
}

/// Parses `label:weight` entries separated by commas, e.g.
/// `"500:100, 20:0, 10:0"`. The last `:` in an entry separates the weight so
/// labels may contain colons.
impl FromStr for SegmentTable {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = Vec::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (label, weight) = entry
                .rsplit_once(':')
                .ok_or_else(|| WheelError::MalformedSegment(entry.to_string()))?;
            let label = label.trim();
            if label.is_empty() {
                return Err(WheelError::MalformedSegment(entry.to_string()));
            }
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| WheelError::MalformedSegment(entry.to_string()))?;
            segments.push(Segment::new(label, weight));
        }
        Self::new(segments)
    }
}
