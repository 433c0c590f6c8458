//! Closed-form whole-space fields for idealised magnetic sources.
//!
//! The flux density of a point dipole with moment vector
//! $\mathbf{m} = m\,\hat{\mathbf{o}}$ is
//!
//! $$
//! \mathbf{B}(\mathbf{r}) = \frac{\mu_0 m}{4\pi r^3}
//! \bigl(3(\hat{\mathbf{o}} \cdot \hat{\mathbf{r}})\hat{\mathbf{r}}
//! - \hat{\mathbf{o}}\bigr)
//! $$
//!
//! and of a single pole $\mathbf{B}(\mathbf{r}) = \frac{\mu_0 m}{4\pi r^2}
//! \hat{\mathbf{r}}$, with $\mathbf{r}$ measured from the source location.

use ndarray::Array2;

use crate::types::SourceModel;

/// μ0 / 4π in SI units (T·m/A).
pub const MU0_OVER_4PI: f64 = 1e-7;

/// Convert geomagnetic inclination/declination into a unit direction vector.
///
/// Components are (cos I · sin D, cos I · cos D, −sin I): northing along
/// the second axis, inclination positive downward. Pure function, total
/// over the reals.
pub fn direction_cosines(inclination_deg: f64, declination_deg: f64) -> [f64; 3] {
    let i = inclination_deg.to_radians();
    let d = declination_deg.to_radians();
    [i.cos() * d.sin(), i.cos() * d.cos(), -i.sin()]
}

/// A buried point source with a closed-form whole-space field.
#[derive(Debug, Clone)]
pub struct MagneticSource {
    /// Source location (m).
    pub location: [f64; 3],
    /// Magnetisation direction (unit vector).
    pub orientation: [f64; 3],
    /// Source moment.
    pub moment: f64,
    /// Field solution variant.
    pub model: SourceModel,
}

impl MagneticSource {
    /// Evaluate the flux density at each row of an (N, 3) coordinate array.
    ///
    /// Returns an (N, 3) array of field vectors in tesla. The pole field is
    /// purely radial; its orientation is carried but unused.
    pub fn flux_density(&self, points: &Array2<f64>) -> Array2<f64> {
        let n = points.nrows();
        let mut b = Array2::zeros((n, 3));
        let o = self.orientation;

        for (i, p) in points.outer_iter().enumerate() {
            let r = [
                p[0] - self.location[0],
                p[1] - self.location[1],
                p[2] - self.location[2],
            ];
            let dist = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
            let rhat = [r[0] / dist, r[1] / dist, r[2] / dist];

            match self.model {
                SourceModel::Dipole => {
                    let odotr = o[0] * rhat[0] + o[1] * rhat[1] + o[2] * rhat[2];
                    let scale = MU0_OVER_4PI * self.moment / dist.powi(3);
                    for a in 0..3 {
                        b[[i, a]] = scale * (3.0 * odotr * rhat[a] - o[a]);
                    }
                }
                SourceModel::Monopole => {
                    let scale = MU0_OVER_4PI * self.moment / dist.powi(2);
                    for a in 0..3 {
                        b[[i, a]] = scale * rhat[a];
                    }
                }
            }
        }

        b
    }
}
