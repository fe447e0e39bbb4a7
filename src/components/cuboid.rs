//! Six-face cuboid geometry for the interactive title and description
//!
//! Faces are sized to 75% of the measured component box, offset by half
//! their dimension along their axis, and rotated into place. The parent
//! element carries the shared 3D rotation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub width: f64,
    pub height: f64,
    pub transform: String,
}

pub fn cuboid_faces(box_width: f64, box_height: f64) -> [Face; 6] {
    let width = box_width * 0.75;
    let height = box_height * 0.75;
    let depth = box_height * 0.75;

    [
        Face {
            kind: FaceKind::Front,
            width,
            height,
            transform: format!("translateZ({}px)", depth / 2.0),
        },
        Face {
            kind: FaceKind::Back,
            width,
            height,
            transform: format!(
                "rotateY(180deg) rotateZ(180deg) translateZ({}px)",
                depth / 2.0
            ),
        },
        Face {
            kind: FaceKind::Right,
            width: depth,
            height,
            transform: format!("rotateY(90deg) translateZ({}px)", width / 2.0),
        },
        Face {
            kind: FaceKind::Left,
            width: depth,
            height,
            transform: format!("rotateY(-90deg) translateZ({}px)", width / 2.0),
        },
        Face {
            kind: FaceKind::Top,
            width,
            height: depth,
            transform: format!("rotateX(90deg) translateZ({}px)", height / 2.0),
        },
        Face {
            kind: FaceKind::Bottom,
            width,
            height: depth,
            transform: format!("rotateX(-90deg) translateZ({}px)", height / 2.0),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_sized_to_three_quarters() {
        let faces = cuboid_faces(400.0, 200.0);
        let front = &faces[0];
        assert_eq!(front.kind, FaceKind::Front);
        assert_eq!(front.width, 300.0);
        assert_eq!(front.height, 150.0);
        // Side faces take the depth (derived from height) as their width.
        let right = &faces[2];
        assert_eq!(right.width, 150.0);
        assert_eq!(right.height, 150.0);
    }

    #[test]
    fn test_faces_offset_by_half_dimension() {
        let faces = cuboid_faces(400.0, 200.0);
        assert_eq!(faces[0].transform, "translateZ(75px)");
        assert_eq!(
            faces[1].transform,
            "rotateY(180deg) rotateZ(180deg) translateZ(75px)"
        );
        assert_eq!(faces[2].transform, "rotateY(90deg) translateZ(150px)");
        assert_eq!(faces[4].transform, "rotateX(90deg) translateZ(75px)");
    }
}
