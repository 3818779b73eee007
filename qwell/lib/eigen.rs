//! Dense symmetric eigensolver.

use ndarray as nd;
use ndarray_linalg::{ self as la, EigValsh };
use crate::{
    Arr2,
    DEF_SYMM_TOL,
    error::NumericalError,
    lattice::LatticeModel,
};

pub type NResult<T> = Result<T, NumericalError>;

// check that `H` is square, finite, and symmetric to within a tolerance
// relative to its largest entry
fn check_symmetric<S>(H: &Arr2<S>, tol: f64) -> NResult<()>
where S: nd::Data<Elem = f64>
{
    let (n, m) = H.dim();
    if n != m { return Err(NumericalError::NotSquare(n, m)); }
    if let Some(((i, j), _))
        = H.indexed_iter().find(|(_, hij)| !hij.is_finite())
    {
        return Err(NumericalError::NonFinite(i, j));
    }
    let scale = H.iter().fold(0.0_f64, |acc, hij| acc.max(hij.abs())).max(1.0);
    for i in 0..n {
        for j in i + 1..n {
            if (H[[i, j]] - H[[j, i]]).abs() > tol * scale {
                return Err(NumericalError::NotSymmetric(i, j));
            }
        }
    }
    Ok(())
}

/// Compute all eigenvalues of a real symmetric matrix in ascending order.
///
/// Degenerate eigenvalues are kept as repeated entries. Fails if `H` is not
/// square, contains non-finite entries, is not symmetric to within a relative
/// tolerance of 1e-12, or if the underlying LAPACK routine does not converge.
pub fn solve<S>(H: &Arr2<S>) -> NResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    check_symmetric(H, DEF_SYMM_TOL)?;
    if H.is_empty() { return Ok(nd::Array1::zeros(0)); }
    let mut evals: nd::Array1<f64> = H.eigvalsh(la::UPLO::Lower)?;
    // LAPACK already returns ascending order; enforce it independently of the
    // backend
    if let Some(ev) = evals.as_slice_mut() { ev.sort_by(f64::total_cmp); }
    Ok(evals)
}

/// Compute the `count` lowest eigenvalues of a real symmetric matrix in
/// ascending order.
pub fn lowest<S>(H: &Arr2<S>, count: usize) -> NResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    let evals = solve(H)?;
    if evals.len() < count {
        return Err(
            NumericalError::TooFewEigenvalues { wanted: count, got: evals.len() });
    }
    Ok(evals.slice_move(nd::s![..count]))
}

/// Compute the `count` lowest eigenvalues of a lattice model, which must be
/// real.
pub fn lowest_model(model: &LatticeModel, count: usize)
    -> NResult<nd::Array1<f64>>
{
    let H = model.to_real(DEF_SYMM_TOL)?;
    lowest(&H, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64 as C64;

    #[test]
    fn ascending_with_ties() {
        let H = nd::array![
            [3.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, 0.0, 0.0, -2.0],
        ];
        let evals = solve(&H).unwrap();
        assert_eq!(evals.len(), 4);
        assert_abs_diff_eq!(evals[0], -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evals[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evals[2], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evals[3], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn two_by_two() {
        let H = nd::array![[2.0, -1.0], [-1.0, 2.0]];
        let evals = solve(&H).unwrap();
        assert_abs_diff_eq!(evals[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evals[1], 3.0, epsilon = 1e-12);
        assert!(evals.windows(2).into_iter().all(|w| w[0] <= w[1]));
    }

    #[test]
    fn rejects_bad_matrices() {
        let H: nd::Array2<f64> = nd::Array2::zeros((2, 3));
        assert!(matches!(solve(&H), Err(NumericalError::NotSquare(2, 3))));
        let H = nd::array![[1.0, 2.0], [0.0, 1.0]];
        assert!(matches!(solve(&H), Err(NumericalError::NotSymmetric(0, 1))));
        let H = nd::array![[1.0, f64::NAN], [f64::NAN, 1.0]];
        assert!(matches!(solve(&H), Err(NumericalError::NonFinite(0, 1))));
    }

    #[test]
    fn lowest_count() {
        let H = nd::array![[2.0, -1.0], [-1.0, 2.0]];
        assert_eq!(lowest(&H, 1).unwrap().len(), 1);
        assert!(matches!(
            lowest(&H, 3),
            Err(NumericalError::TooFewEigenvalues { wanted: 3, got: 2 }),
        ));
    }

    #[test]
    fn from_model() {
        let mut model = LatticeModel::new(2);
        model
            .add(C64::from(2.0), 0, 0)
            .add(C64::from(2.0), 1, 1)
            .add_hc(C64::from(-1.0), 1, 0);
        let evals = lowest_model(&model, 2).unwrap();
        assert_abs_diff_eq!(evals[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(evals[1], 3.0, epsilon = 1e-12);
    }
}
