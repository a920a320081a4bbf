//! Sextic twist isomorphism from the Fq2 curve into Fq12.

use blscurve_params::TwistType;

use super::Point;
use crate::error::{Error, Result};
use crate::field::{FieldConfig, FieldElement, Fq, Fq12, Fq2};

/// Basis slot of w⁶ in Fq12.
const W6: usize = 6;

/// Maps points of the twist curve over Fq2 onto the curve over Fq12.
///
/// Fq2 = Fq[u] and Fq12 = Fq[w] are both built directly over Fq, with
/// w⁶ = ξ = ξ₀ + u. A coordinate a + b·u is therefore the Fq12 element
/// (a − ξ₀·b) + b·w⁶. The embedded point lands on y² = x³ + b2; rescaling by
/// w² and w³ moves it to y² = x³ + b12:
///
/// * M-type, b2 = b12·ξ: x / w², y / w³
/// * D-type, b2 = b12 / ξ: x · w², y · w³
///
/// Both scale factors are computed once in [`Twist::new`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Twist<C: FieldConfig> {
    kind: TwistType,
    xi_c0: Fq<C>,
    x_scale: Fq12<C>,
    y_scale: Fq12<C>,
}

impl<C: FieldConfig> Twist<C> {
    /// Builds the map for twist `kind` with ξ = `xi_c0` + u.
    pub fn new(kind: TwistType, xi_c0: i64) -> Result<Self> {
        let w2 = Self::monomial(2);
        let w3 = Self::monomial(3);
        let (x_scale, y_scale) = match kind {
            TwistType::D => (w2, w3),
            TwistType::M => {
                let x_scale = w2
                    .invert()
                    .ok_or_else(|| Error::param("twist", "w² is not invertible in Fq12"))?;
                let y_scale = w3
                    .invert()
                    .ok_or_else(|| Error::param("twist", "w³ is not invertible in Fq12"))?;
                (x_scale, y_scale)
            }
        };
        Ok(Twist {
            kind,
            xi_c0: Fq::from_i64(xi_c0),
            x_scale,
            y_scale,
        })
    }

    /// Which side of the isomorphism the twist curve sits on.
    pub fn kind(&self) -> TwistType {
        self.kind
    }

    /// Embeds an Fq2 element into Fq12, touching only slots 0 and 6.
    pub fn embed(&self, a: &Fq2<C>) -> Fq12<C> {
        let (c0, c1) = (&a.coeffs()[0], &a.coeffs()[1]);
        let mut coeffs = vec![Fq::zero(); 12];
        coeffs[0] = c0 - &(&self.xi_c0 * c1);
        coeffs[W6] = c1.clone();
        Fq12::from_vec(coeffs)
    }

    /// The isomorphism itself. Infinity maps to infinity.
    pub fn apply(&self, p: &Point<Fq2<C>>) -> Point<Fq12<C>> {
        match p.coords() {
            None => Point::Infinity,
            Some((x, y)) => Point::new(
                self.embed(x) * &self.x_scale,
                self.embed(y) * &self.y_scale,
            ),
        }
    }

    fn monomial(degree: usize) -> Fq12<C> {
        let mut coeffs = vec![Fq::zero(); 12];
        coeffs[degree] = Fq::one();
        Fq12::from_vec(coeffs)
    }
}
