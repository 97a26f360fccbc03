//! Edge zone detection
//!
//! Zones are bands along the container sides. The container bounds are an
//! immutable `EdgeGeometry` snapshot taken when the controller is built;
//! nothing re-measures it unless the owner asks.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::surface::ScrollableSurface;

/// Zone depth per side; a missing or zero entry disables that side
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeThresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl EdgeThresholds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter
    pub fn with(mut self, direction: Direction, threshold: f64) -> Self {
        self.set(direction, Some(threshold));
        self
    }

    pub fn get(&self, direction: Direction) -> Option<f64> {
        match direction {
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, threshold: Option<f64>) {
        let slot = match direction {
            Direction::Top => &mut self.top,
            Direction::Bottom => &mut self.bottom,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = threshold;
    }

    /// Threshold that actually triggers detection, if any
    #[inline]
    pub fn active(&self, direction: Direction) -> Option<f64> {
        self.get(direction).filter(|t| *t > 0.0)
    }

    /// Whether no side can ever trigger
    pub fn is_empty(&self) -> bool {
        Direction::DETECTION_ORDER
            .iter()
            .all(|d| self.active(*d).is_none())
    }

    /// Reject negative or non-finite thresholds
    pub fn validate(&self) -> crate::Result<()> {
        for direction in Direction::DETECTION_ORDER {
            if let Some(value) = self.get(direction) {
                if !value.is_finite() || value < 0.0 {
                    return Err(crate::Error::InvalidThreshold { direction, value });
                }
            }
        }
        Ok(())
    }
}

/// Container bounds in local coordinates, captured once
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeGeometry {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeGeometry {
    /// Snapshot a surface: the client area starts after the border and
    /// extends by the viewport size
    pub fn measure<S>(surface: &S) -> Self
    where
        S: ScrollableSurface + ?Sized,
    {
        Self {
            top: surface.client_top(),
            left: surface.client_left(),
            bottom: surface.client_height(),
            right: surface.client_width(),
        }
    }

    /// Whether `(x, y)` lies in the zone of `direction`; all ranges inclusive
    pub fn in_zone(&self, direction: Direction, threshold: f64, x: f64, y: f64) -> bool {
        match direction {
            Direction::Top => y >= self.top && y <= self.top + threshold,
            Direction::Bottom => y <= self.bottom && y >= self.bottom - threshold,
            Direction::Left => x >= self.left && x <= self.left + threshold,
            Direction::Right => x <= self.right && x >= self.right - threshold,
        }
    }

    /// The zone containing `(x, y)`, checked top, bottom, left, right
    pub fn detect(&self, thresholds: &EdgeThresholds, x: f64, y: f64) -> Option<Direction> {
        Direction::DETECTION_ORDER.into_iter().find(|direction| {
            thresholds
                .active(*direction)
                .is_some_and(|t| self.in_zone(*direction, t, x, y))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> EdgeGeometry {
        EdgeGeometry { top: 0.0, left: 0.0, bottom: 100.0, right: 100.0 }
    }

    #[test]
    fn test_zone_bounds_are_inclusive() {
        let edges = EdgeThresholds::new().with(Direction::Top, 20.0);
        assert_eq!(square().detect(&edges, 50.0, 0.0), Some(Direction::Top));
        assert_eq!(square().detect(&edges, 50.0, 20.0), Some(Direction::Top));
        assert_eq!(square().detect(&edges, 50.0, 20.5), None);
        assert_eq!(square().detect(&edges, 50.0, -1.0), None);
    }

    #[test]
    fn test_bottom_and_right() {
        let edges = EdgeThresholds::new()
            .with(Direction::Bottom, 10.0)
            .with(Direction::Right, 10.0);
        assert_eq!(square().detect(&edges, 50.0, 95.0), Some(Direction::Bottom));
        assert_eq!(square().detect(&edges, 95.0, 50.0), Some(Direction::Right));
        assert_eq!(square().detect(&edges, 101.0, 50.0), None);
        assert_eq!(square().detect(&edges, 50.0, 50.0), None);
    }

    #[test]
    fn test_priority_in_corners() {
        let edges = EdgeThresholds::new()
            .with(Direction::Top, 20.0)
            .with(Direction::Left, 20.0)
            .with(Direction::Bottom, 20.0)
            .with(Direction::Right, 20.0);
        assert_eq!(square().detect(&edges, 5.0, 5.0), Some(Direction::Top));
        assert_eq!(square().detect(&edges, 95.0, 95.0), Some(Direction::Bottom));
        assert_eq!(square().detect(&edges, 5.0, 50.0), Some(Direction::Left));
    }

    #[test]
    fn test_zero_or_missing_threshold_never_triggers() {
        let edges = EdgeThresholds::new().with(Direction::Top, 0.0);
        assert!(edges.is_empty());
        assert_eq!(square().detect(&edges, 0.0, 0.0), None);
        assert_eq!(square().detect(&EdgeThresholds::new(), 0.0, 0.0), None);
    }

    #[test]
    fn test_border_offsets_top_and_left_only() {
        let geometry = EdgeGeometry { top: 1.0, left: 1.0, bottom: 10.0, right: 40.0 };
        let edges = EdgeThresholds::new().with(Direction::Top, 2.0);
        assert_eq!(geometry.detect(&edges, 5.0, 0.0), None);
        assert_eq!(geometry.detect(&edges, 5.0, 3.0), Some(Direction::Top));
    }

    #[test]
    fn test_validate() {
        assert!(EdgeThresholds::new().with(Direction::Left, 0.0).validate().is_ok());
        let err = EdgeThresholds::new().with(Direction::Left, -3.0).validate();
        assert!(matches!(
            err,
            Err(crate::Error::InvalidThreshold { direction: Direction::Left, .. })
        ));
        assert!(EdgeThresholds::new().with(Direction::Top, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_toml_table() {
        let edges: EdgeThresholds = toml::from_str("top = 20\nright = 5.5").unwrap();
        assert_eq!(edges.top, Some(20.0));
        assert_eq!(edges.right, Some(5.5));
        assert_eq!(edges.bottom, None);
    }
}
