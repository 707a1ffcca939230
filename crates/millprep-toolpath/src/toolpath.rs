//! Toolpath model: ordered motion segments plus provenance metadata.

use millprep_core::{unit_label, MeasurementSystem, Vector3d};
use std::fmt;

/// Types of motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveType {
    Rapid,
    #[default]
    Linear,
    ArcCW,
    ArcCCW,
    Dwell,
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rapid => write!(f, "rapid"),
            Self::Linear => write!(f, "linear"),
            Self::ArcCW => write!(f, "arc_cw"),
            Self::ArcCCW => write!(f, "arc_ccw"),
            Self::Dwell => write!(f, "dwell"),
        }
    }
}

/// A single motion segment of a toolpath.
///
/// Every field is advisory metadata set by the producer; nothing here is
/// checked against the move type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToolpathSegment {
    /// Target position in mm
    pub pos: Vector3d,
    /// Feed rate in units/min
    pub feed: f64,
    /// Spindle speed in RPM
    pub spindle: f64,
    pub tool_id: i32,
    pub move_type: MoveType,
    /// Producer-defined bit flags
    pub flags: u32,
    /// Sequence number, monotonic by convention only
    pub index: u64,
    /// Seconds since the start of the program
    pub time_from_start: f64,
    pub comment: String,
}

impl ToolpathSegment {
    /// Creates a linear segment with zero feed and spindle.
    pub fn new(index: u64, pos: Vector3d) -> Self {
        Self {
            pos,
            index,
            ..Default::default()
        }
    }

    pub fn with_feed(mut self, feed: f64) -> Self {
        self.feed = feed;
        self
    }

    pub fn with_spindle(mut self, spindle: f64) -> Self {
        self.spindle = spindle;
        self
    }

    pub fn with_tool(mut self, tool_id: i32) -> Self {
        self.tool_id = tool_id;
        self
    }

    pub fn with_move_type(mut self, move_type: MoveType) -> Self {
        self.move_type = move_type;
        self
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    /// Set the elapsed time from program start, in seconds
    pub fn with_time(mut self, seconds: f64) -> Self {
        self.time_from_start = seconds;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// Toolpath metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ToolpathMeta {
    /// Unit label, "mm" unless set otherwise
    pub units: String,
    pub default_tool_id: i32,
    /// Seconds since the Unix epoch, 0.0 when unset
    pub creation_timestamp: f64,
    /// Free-form provenance (generator name, source file, ...)
    pub source: String,
}

impl Default for ToolpathMeta {
    fn default() -> Self {
        Self {
            units: unit_label(MeasurementSystem::Metric).to_string(),
            default_tool_id: 0,
            creation_timestamp: 0.0,
            source: String::new(),
        }
    }
}

impl ToolpathMeta {
    /// Metadata stamped with the current wall-clock time.
    pub fn stamped(source: impl Into<String>) -> Self {
        let now = chrono::Utc::now();
        Self {
            creation_timestamp: now.timestamp_millis() as f64 / 1000.0,
            source: source.into(),
            ..Default::default()
        }
    }
}

/// A complete toolpath: segments in execution order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toolpath {
    pub meta: ToolpathMeta,
    pub segments: Vec<ToolpathSegment>,
}

impl Toolpath {
    /// Creates an empty millimetre toolpath.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty toolpath labelled with the given measurement system.
    pub fn with_units(system: MeasurementSystem) -> Self {
        let mut toolpath = Self::default();
        toolpath.meta.units = unit_label(system).to_string();
        toolpath
    }

    /// Creates an empty toolpath with the given metadata.
    pub fn with_meta(meta: ToolpathMeta) -> Self {
        Self {
            meta,
            segments: Vec::new(),
        }
    }

    /// Number of segments.
    pub fn size(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Adds a segment at the end. Any segment is accepted.
    pub fn append(&mut self, segment: ToolpathSegment) {
        self.segments.push(segment);
    }

    /// Removes all segments, keeping the metadata.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToolpathSegment> {
        self.segments.iter()
    }

    pub fn segments(&self) -> &[ToolpathSegment] {
        &self.segments
    }

    /// Sum of straight-line distances between consecutive segment positions.
    ///
    /// Move type is not consulted: rapids and dwells count like linear moves.
    pub fn length(&self) -> f64 {
        self.segments
            .windows(2)
            .map(|pair| pair[0].pos.distance_to(&pair[1].pos))
            .sum()
    }

    /// Axis-aligned (min, max) over all segment positions.
    pub fn bounds(&self) -> Option<(Vector3d, Vector3d)> {
        let (first, rest) = self.segments.split_first()?;
        Some(rest.iter().fold((first.pos, first.pos), |(min, max), s| {
            (min.min(&s.pos), max.max(&s.pos))
        }))
    }
}

impl<'a> IntoIterator for &'a Toolpath {
    type Item = &'a ToolpathSegment;
    type IntoIter = std::slice::Iter<'a, ToolpathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
