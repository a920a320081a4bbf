//! Optimal ate pairing over BLS12 curves
//!
//! Both arguments are evaluated as points of the curve over Fq12: the G2
//! argument is moved there by the twist isomorphism and the G1 argument by the
//! inclusion Fq ⊂ Fq12. The Miller loop runs over the bits of |x|; the sign of
//! x only conjugates the result and is not needed for bilinearity.
//!
//! This is a straightforward affine implementation and runs in variable time.

use tracing::debug_span;

use crate::curve::{CurveParams, G1, G12, G2};
use crate::ec::Point;
use crate::error::{validate, Result};
use crate::field::{FieldConfig, FieldElement, Fq12};

#[cfg(test)]
mod tests;

/// Includes a G1 point in the curve over Fq12.
pub fn cast_to_fq12<C: FieldConfig>(p: &G1<C>) -> G12<C> {
    match p.coords() {
        None => Point::Infinity,
        Some((x, y)) => Point::new(Fq12::from_base(x.clone()), Fq12::from_base(y.clone())),
    }
}

/// Evaluates at `t` the line through `p1` and `p2`, or the tangent at `p1`
/// when the two coincide.
///
/// Any point at infinity among the inputs gives the trivial factor one.
pub fn line_func<F: FieldElement>(p1: &Point<F>, p2: &Point<F>, t: &Point<F>) -> F {
    let (Some((x1, y1)), Some((x2, y2)), Some((xt, yt))) = (p1.coords(), p2.coords(), t.coords())
    else {
        return F::one();
    };

    if x1 != x2 {
        let m = (y2.clone() - y1) / (x2.clone() - x1);
        m * (xt.clone() - x1) - (yt.clone() - y1)
    } else if y1 == y2 && !y1.is_zero() {
        let m = x1.square() * F::from_u64(3) / y1.double();
        m * (xt.clone() - x1) - (yt.clone() - y1)
    } else {
        // vertical
        xt.clone() - x1
    }
}

/// Miller loop f_{|x|,Q}(P) for `q` and `p` already on the curve over Fq12.
pub fn miller_loop<C: FieldConfig>(q: &G12<C>, p: &G12<C>, ate_loop_count: u64) -> Fq12<C> {
    if q.is_inf() || p.is_inf() || ate_loop_count == 0 {
        return Fq12::one();
    }

    let top = 63 - ate_loop_count.leading_zeros();
    let mut r = q.clone();
    let mut f = Fq12::one();
    for i in (0..top).rev() {
        f = f.square() * line_func(&r, &r, p);
        r = r.double();
        if (ate_loop_count >> i) & 1 == 1 {
            f = f * line_func(&r, q, p);
            r = r.add(q);
        }
    }
    f
}

/// Raises a Miller loop output to (p¹² − 1) / r.
pub fn final_exponentiate<C: FieldConfig>(f: &Fq12<C>, params: &CurveParams<C>) -> Fq12<C> {
    f.pow(params.final_exponent())
}

/// The reduced pairing e(P, Q), with `q` in G2 and `p` in G1.
///
/// Both inputs must lie on their curves; subgroup membership is the caller's
/// responsibility. Pairing with the identity gives one.
pub fn pairing<C: FieldConfig>(
    q: &G2<C>,
    p: &G1<C>,
    params: &CurveParams<C>,
) -> Result<Fq12<C>> {
    let _span = debug_span!("pairing", curve = params.name()).entered();

    validate::parameter(q.is_on_curve(params.b2()), "q", "point is not on the twist curve")?;
    validate::parameter(p.is_on_curve(params.b()), "p", "point is not on the curve")?;

    let f = miller_loop(&params.twist(q), &cast_to_fq12(p), params.ate_loop_count());
    Ok(final_exponentiate(&f, params))
}
