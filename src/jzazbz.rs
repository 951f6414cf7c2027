//! Jzazbz color space transforms for the Display P3 pipeline.
//!
//! Implements the PQ-based Jzazbz perceptual model (Safdar et al. 2017)
//! specialized to the hue dial's needs: LMS cone responses in, linear
//! Display P3 out. Hue in this model is the angle of (az, bz).
//!
//! All math is branch-free f32 so the same sequence of operations can
//! run on a CPU or inside a shading pipeline; the only substitution
//! point is the power primitive, injected through [`Pow`].

/// PQ transfer exponent applied to normalized cone responses.
const PQ_N: f32 = 2610.0 / 16384.0;

/// PQ transfer exponent applied to the blended fraction.
const PQ_P: f32 = 1.7 * 2523.0 / 32.0;

/// PQ rational blend constants.
const PQ_C1: f32 = 3424.0 / 4096.0;
const PQ_C2: f32 = 2413.0 / 128.0;
const PQ_C3: f32 = 2392.0 / 128.0;

/// Jz lightness remap coefficient.
const D: f32 = -0.56;

/// Jz lightness remap offset.
const D0: f32 = 1.6295499532821566e-11;

/// Lower clamp for PQ-encoded LMS in the decode direction.
///
/// Nominally 3.7035e-11, nudged for f32 precision limits. Below this
/// bound the inverse blend would hand a negative base to a fractional
/// exponent.
const MIN_LMS_P: f32 = 0.0000000000370353;

/// Upper clamp for PQ-encoded LMS in the decode direction.
const MAX_LMS_P: f32 = 3.227;

/// Rows of the PQ-encoded LMS to Izazbz matrix.
const LMSP_TO_IZAZBZ: [[f32; 3]; 3] = [
    [0.5, 0.5, 0.0],
    [3.524, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
];

/// Rows of the Izazbz to PQ-encoded LMS matrix, inverse of [`LMSP_TO_IZAZBZ`].
const IZAZBZ_TO_LMSP: [[f32; 3]; 3] = [
    [1.0, 0.138605043271539, 0.0580473161561189],
    [1.0, -0.138605043271539, -0.0580473161561189],
    [1.0, -0.0960192420263189, -0.811891896056039],
];

/// Rows of the LMS to linear Display P3 matrix.
///
/// Precomposed from XYZ-to-P3, the PQ white adaptation, and LMS-to-XYZ.
const LMS_TO_LINEAR_P3: [[f32; 3]; 3] = [
    [4.4820606379518333, -3.6184317541411817, 0.16694496856407345],
    [-1.9532025238860451, 3.5217700975984596, -0.54063532522070301],
    [-0.0027453573623004834, -0.45182653146288487, 1.4822547119502889],
];

/// Power primitive used by both PQ stages.
///
/// The transforms only ever raise non-negative finite bases, so a GPU
/// `powr`-style primitive is a valid implementation. Any strategy must
/// agree with [`StdPow`] to within floating-point rounding over that
/// domain.
pub trait Pow: Copy {
    /// Raise a non-negative finite `base` to `exp`.
    fn powf(self, base: f32, exp: f32) -> f32;
}

/// Default strategy backed by [`f32::powf`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPow;

impl Pow for StdPow {
    #[inline]
    fn powf(self, base: f32, exp: f32) -> f32 {
        base.powf(exp)
    }
}

/// Jzazbz perceptual color.
///
/// `jz` is lightness; `az` and `bz` span the chroma plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jzazbz {
    /// Lightness
    pub jz: f32,
    /// Red-green chroma axis
    pub az: f32,
    /// Yellow-blue chroma axis
    pub bz: f32,
}

/// LMS cone-response color.
///
/// Intermediate between Jzazbz and display RGB. Components decoded from
/// Jzazbz are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lms {
    /// Long-wavelength cone response
    pub l: f32,
    /// Medium-wavelength cone response
    pub m: f32,
    /// Short-wavelength cone response
    pub s: f32,
}

/// Linear-light Display P3 color, before the transfer encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearP3 {
    /// Red component
    pub red: f32,
    /// Green component
    pub green: f32,
    /// Blue component
    pub blue: f32,
}

impl Jzazbz {
    /// Create a new Jzazbz color.
    #[inline]
    pub const fn new(jz: f32, az: f32, bz: f32) -> Self {
        Self { jz, az, bz }
    }

    /// Convert from LMS (the forward transform).
    ///
    /// Each cone response is PQ-encoded (`max(lms/100, 0)^n`, rational
    /// blend, `^p`), the encoded triple goes through a fixed 3x3 matrix
    /// to (Iz, az, bz), and Iz is remapped to Jz.
    pub fn from_lms(lms: Lms) -> Self {
        Self::from_lms_with(lms, StdPow)
    }

    /// Forward transform with an explicit power strategy.
    pub fn from_lms_with<P: Pow>(lms: Lms, pow: P) -> Self {
        let lp = pq_encode(lms.l, pow);
        let mp = pq_encode(lms.m, pow);
        let sp = pq_encode(lms.s, pow);

        let [iz, az, bz] = mul3(&LMSP_TO_IZAZBZ, [lp, mp, sp]);
        let jz = ((1.0 + D) * iz) / (1.0 + D * iz) - D0;

        Self::new(jz, az, bz)
    }

    /// Convert to LMS (the inverse transform).
    ///
    /// Out-of-domain inputs saturate at the decode clamp rather than
    /// failing, so round trips are only exact inside the clamp range.
    pub fn into_lms(self) -> Lms {
        self.into_lms_with(StdPow)
    }

    /// Inverse transform with an explicit power strategy.
    pub fn into_lms_with<P: Pow>(self, pow: P) -> Lms {
        let jzp = self.jz + D0;
        let iz = jzp / (1.0 + D - D * jzp);

        let [lp, mp, sp] = mul3(&IZAZBZ_TO_LMSP, [iz, self.az, self.bz]);

        Lms::new(pq_decode(lp, pow), pq_decode(mp, pow), pq_decode(sp, pow))
    }

    /// Convert through LMS to linear Display P3.
    pub fn into_linear_p3(self) -> LinearP3 {
        self.into_lms().into_linear_p3()
    }

    /// Hue angle in the az-bz plane, radians in (-PI, PI].
    #[inline]
    pub fn hue(self) -> f32 {
        self.bz.atan2(self.az)
    }

    /// Chroma magnitude in the az-bz plane.
    #[inline]
    pub fn chroma(self) -> f32 {
        self.az.hypot(self.bz)
    }
}

impl Lms {
    /// Create a new LMS color.
    #[inline]
    pub const fn new(l: f32, m: f32, s: f32) -> Self {
        Self { l, m, s }
    }

    /// Linear interpolation toward `other` by parameter `t`.
    #[inline]
    pub fn lerp(self, other: Lms, t: f32) -> Lms {
        Lms::new(
            self.l + (other.l - self.l) * t,
            self.m + (other.m - self.m) * t,
            self.s + (other.s - self.s) * t,
        )
    }

    /// Convert to linear Display P3.
    ///
    /// A single matrix multiply; no clamping and no transfer encoding,
    /// so out-of-gamut inputs produce components outside [0, 1].
    pub fn into_linear_p3(self) -> LinearP3 {
        let [red, green, blue] = mul3(&LMS_TO_LINEAR_P3, [self.l, self.m, self.s]);
        LinearP3::new(red, green, blue)
    }
}

impl LinearP3 {
    /// Create a new linear Display P3 color.
    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

/// Multiply a row-major 3x3 matrix by a column vector.
#[inline]
fn mul3(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// PQ-encode one cone response.
#[inline]
fn pq_encode<P: Pow>(v: f32, pow: P) -> f32 {
    let x = pow.powf((v / 100.0).max(0.0), PQ_N);
    pow.powf((PQ_C1 + PQ_C2 * x) / (1.0 + PQ_C3 * x), PQ_P)
}

/// Invert the PQ encoding, clamping into the decodable domain first.
///
/// The clamp keeps fractional exponents off negative bases; the extra
/// `max(0.0)` saturates the one remaining rounding edge at the lower
/// bound, where the blended fraction can land a few ulps below zero.
#[inline]
fn pq_decode<P: Pow>(v: f32, pow: P) -> f32 {
    let x = pow.powf(v.clamp(MIN_LMS_P, MAX_LMS_P), 1.0 / PQ_P);
    let fraction = ((PQ_C1 - x) / (PQ_C3 * x - PQ_C2)).max(0.0);
    100.0 * pow.powf(fraction, 1.0 / PQ_N)
}
