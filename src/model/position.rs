use serde::Serialize;

use super::BoothCode;

/// A booth cell on the floor plan, in floor-plan pixel coordinates (origin top-left).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoothPosition {
    pub code: BoothCode,
    pub section: String,
    pub number: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Width and height of a coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl BoothPosition {
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Rescales a position from one coordinate space into another, e.g. diagram
/// coordinates into the floor-plan canvas.
#[must_use]
pub fn convert_to_svg_coordinates(
    booth: &BoothPosition,
    source: Bounds,
    target: Bounds,
) -> BoothPosition {
    let scale_x = target.width / source.width;
    let scale_y = target.height / source.height;

    BoothPosition {
        x: booth.x * scale_x,
        y: booth.y * scale_y,
        width: booth.width * scale_x,
        height: booth.height * scale_y,
        ..booth.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> BoothPosition {
        BoothPosition {
            code: "B3".parse().unwrap(),
            section: "B".to_string(),
            number: 3,
            x: 100.0,
            y: 50.0,
            width: 110.0,
            height: 110.0,
            group: None,
        }
    }

    #[test]
    fn center_is_middle_of_cell() {
        assert_eq!(sample().center(), (155.0, 105.0));
        assert!(sample().contains_point(155.0, 105.0));
        assert!(!sample().contains_point(99.0, 105.0));
    }

    #[test]
    fn scales_between_coordinate_spaces() {
        let scaled = convert_to_svg_coordinates(
            &sample(),
            Bounds {
                width: 1000.0,
                height: 500.0,
            },
            Bounds {
                width: 2000.0,
                height: 250.0,
            },
        );
        assert_eq!(scaled.x, 200.0);
        assert_eq!(scaled.y, 25.0);
        assert_eq!(scaled.width, 220.0);
        assert_eq!(scaled.height, 55.0);
        assert_eq!(scaled.code, sample().code);
    }
}
