use ndarray::Array2;

use crate::{Error, lattice::check_shape};

/// Pairwise coupling between several fields on the same lattice.
///
/// Entry `(i, j)` is the inner product `Σ φᵢ·φⱼ` for `i ≠ j`; the diagonal
/// is zero. An empty slice gives a `0 × 0` matrix.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the fields differ in shape.
pub fn relationship_strengths(fields: &[Array2<f64>]) -> Result<Array2<f64>, Error> {
    if let Some(first) = fields.first() {
        for field in &fields[1..] {
            check_shape(first.dim(), field.dim())?;
        }
    }

    let k = fields.len();
    Ok(Array2::from_shape_fn((k, k), |(i, j)| {
        if i == j {
            0.0
        } else {
            fields[i].iter().zip(fields[j].iter()).map(|(a, b)| a * b).sum()
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn strengths_are_symmetric_inner_products() {
        let fields = vec![
            array![[1.0, 2.0], [0.0, 1.0]],
            array![[2.0, 0.0], [1.0, 1.0]],
            array![[0.0, 0.0], [0.0, 0.0]],
        ];

        let strengths = relationship_strengths(&fields).unwrap();

        assert_eq!(strengths.dim(), (3, 3));
        assert_eq!(strengths[[0, 1]], 3.0);
        assert_eq!(strengths[[1, 0]], 3.0);
        assert_eq!(strengths[[0, 2]], 0.0);
        assert_eq!(strengths[[0, 0]], 0.0);
    }

    #[test]
    fn mismatched_fields_are_rejected() {
        let fields = vec![Array2::<f64>::zeros((2, 2)), Array2::<f64>::zeros((1, 4))];
        assert!(matches!(
            relationship_strengths(&fields),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn no_fields_gives_empty_matrix() {
        assert_eq!(relationship_strengths(&[]).unwrap().dim(), (0, 0));
    }
}
