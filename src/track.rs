//! Marker tracks: a fixed-length sequence with exactly one current element.
//!
//! Slides and selectors are both modelled as a [`MarkerTrack`]. The track only
//! knows positions; the browser shell moves the real id/class marker when it
//! applies the resulting [`crate::engine::Action`]s.

#[cfg(test)]
#[path = "track_test.rs"]
mod track_test;

use crate::error::CarouselError;

/// Navigation direction for [`step_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Circular neighbour of `cursor` in a sequence of `len` elements.
///
/// `len` must be non-zero.
#[must_use]
pub fn step_index(cursor: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => (cursor + 1) % len,
        Direction::Prev => (cursor + len - 1) % len,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerTrack {
    len: usize,
    current: Option<usize>,
}

impl MarkerTrack {
    /// A track of `len` elements with the marker on the first one.
    ///
    /// An empty track has no current element.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, current: (len > 0).then_some(0) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the element carrying the marker.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Whether `index` carries the marker.
    #[must_use]
    pub fn is_current(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    /// Fail unless a marker exists and `index` is a valid destination.
    pub fn check_move(&self, index: usize) -> Result<usize, CarouselError> {
        let from = self.current.ok_or(CarouselError::NoCurrentMarker)?;
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange { index, len: self.len });
        }
        Ok(from)
    }

    /// Move the marker to `index`, returning the index that lost it.
    pub fn set_current(&mut self, index: usize) -> Result<usize, CarouselError> {
        let from = self.check_move(index)?;
        self.current = Some(index);
        Ok(from)
    }
}
