//! Display P3 gamut boundary table in LMS space.
//!
//! The outer edge of the P3 gamut is approximated by its primary and
//! secondary corner colors joined by straight segments in LMS. Each
//! corner carries the hue at which it sits on the Jzazbz az-bz plane.
//! The table is hue-ascending and repeats the wraparound color at both
//! ends of the circular range, so every hue in (-PI, PI] falls inside
//! exactly one edge without a wraparound branch.

use std::f32::consts::PI;

use crate::jzazbz::Lms;

/// One corner of the piecewise-linear gamut boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutCorner {
    /// Corner color in LMS space.
    pub lms: Lms,
    /// Hue of the corner on the Jzazbz az-bz plane, radians.
    pub hue: f32,
}

/// A pair of adjacent corners bracketing a hue:
/// `lower.hue <= hue <= upper.hue`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    /// Corner at the low-hue end.
    pub lower: GamutCorner,
    /// Corner at the high-hue end.
    pub upper: GamutCorner,
}

/// Display P3 boundary corners in hue order.
///
/// The six interior entries are the gamut's primaries and secondaries;
/// entries 0 and 7 are the same green-cyan color tagged at -PI and +PI.
/// The hue tags record the forward transform's own output for each
/// corner; re-deriving either would shift every boundary color.
pub const CORNERS: [GamutCorner; 8] = [
    GamutCorner {
        lms: Lms::new(0.5160874353648806, 0.6689515188836437, 0.6434469935994587),
        hue: -PI,
    },
    // cyan
    GamutCorner {
        lms: Lms::new(0.55608700197488292, 0.73025516799564405, 0.89827700087481577),
        hue: -2.7604618631505451,
    },
    // blue
    GamutCorner {
        lms: Lms::new(0.11431238432553269, 0.17519605565166838, 0.72826353378675235),
        hue: -1.7688992503294745,
    },
    // magenta
    GamutCorner {
        lms: Lms::new(0.53001160774764933, 0.41718828256028762, 0.8027984639562511),
        hue: -0.60623058828496412,
    },
    // red
    GamutCorner {
        lms: Lms::new(0.41569922342211668, 0.24199222690861924, 0.074534930169498803),
        hue: 0.74690126898001996,
    },
    // yellow
    GamutCorner {
        lms: Lms::new(0.85747384107146684, 0.79705133925259486, 0.24454839725756228),
        hue: 1.789331917784555,
    },
    // green
    GamutCorner {
        lms: Lms::new(0.44177461764935022, 0.55505911234397565, 0.17001346708806347),
        hue: 2.3782967581439904,
    },
    GamutCorner {
        lms: Lms::new(0.5160874353648806, 0.6689515188836437, 0.6434469935994587),
        hue: PI,
    },
];

/// Find the edge whose hue span contains `hue` (radians in (-PI, PI]).
///
/// A hue exactly equal to a corner tag binds to the edge where that
/// corner is the lower bound. The scan never selects the final table
/// entry as a lower bound, so `hue = PI` still brackets into the last
/// edge.
pub fn bracket_edge(hue: f32) -> Edge {
    let mut j = 0;
    for (i, corner) in CORNERS[..CORNERS.len() - 1].iter().enumerate() {
        if corner.hue <= hue {
            j = i;
        }
    }

    Edge {
        lower: CORNERS[j],
        upper: CORNERS[j + 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_tags_are_ascending() {
        for pair in CORNERS.windows(2) {
            assert!(
                pair[0].hue < pair[1].hue,
                "corner tags out of order: {} >= {}",
                pair[0].hue,
                pair[1].hue
            );
        }
    }

    #[test]
    fn wraparound_corners_share_color() {
        assert_eq!(CORNERS[0].lms, CORNERS[7].lms);
        assert_eq!(CORNERS[0].hue, -PI);
        assert_eq!(CORNERS[7].hue, PI);
    }

    #[test]
    fn tie_binds_to_lower_corner() {
        // A hue exactly on the red tag returns red as the edge's lower end
        let edge = bracket_edge(CORNERS[4].hue);
        assert_eq!(edge.lower.lms, CORNERS[4].lms);
        assert_eq!(edge.upper.lms, CORNERS[5].lms);
    }

    #[test]
    fn extremes_stay_in_table() {
        let low = bracket_edge(-PI);
        assert_eq!(low.lower.hue, -PI);

        let high = bracket_edge(PI);
        assert_eq!(high.upper.hue, PI);
        assert_eq!(high.lower.lms, CORNERS[6].lms);
    }

    #[test]
    fn zero_hue_lands_between_magenta_and_red() {
        let edge = bracket_edge(0.0);
        assert_eq!(edge.lower.lms, CORNERS[3].lms);
        assert_eq!(edge.upper.lms, CORNERS[4].lms);
    }
}
