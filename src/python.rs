//! Python bindings for diffset.
//!
//! This module exposes the core functionality of the library to Python
//! using PyO3. Enable the `python` feature to use this.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::construct::Existence;
use crate::database::ConstructionDb;
use crate::group::Zmod;

/// Python wrapper for a constructed difference family.
#[pyclass(name = "DifferenceFamily")]
pub struct PyDifferenceFamily {
    /// Group order.
    #[pyo3(get)]
    pub v: u32,
    /// Block size.
    #[pyo3(get)]
    pub k: usize,
    /// Difference multiplicity.
    #[pyo3(get)]
    pub lambda_: u32,
    group: String,
    blocks: Vec<Vec<u32>>,
}

#[pymethods]
impl PyDifferenceFamily {
    /// Printable name of the group the family lives in.
    #[getter]
    fn group(&self) -> &str {
        &self.group
    }

    /// The family's blocks, in the group's integer encoding.
    fn blocks(&self) -> Vec<Vec<u32>> {
        self.blocks.clone()
    }

    fn __repr__(&self) -> String {
        format!(
            "DifferenceFamily(v={}, k={}, lambda={}, group={}, blocks={})",
            self.v,
            self.k,
            self.lambda_,
            self.group,
            self.blocks.len()
        )
    }
}

/// Construct a (v, k, lambda)-difference family.
#[pyfunction]
#[pyo3(signature = (v, k, lambda_=1, check=true))]
fn difference_family(v: u32, k: usize, lambda_: u32, check: bool) -> PyResult<PyDifferenceFamily> {
    let (group, blocks) = crate::difference_family(v, k, lambda_, check)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PyDifferenceFamily {
        v,
        k,
        lambda_,
        group: group.to_string(),
        blocks,
    })
}

/// Decide existence of a (v, k, lambda)-difference family.
///
/// Returns True, False, or None for undecided, mirroring the tri-state
/// answer of the Rust API.
#[pyfunction]
#[pyo3(signature = (v, k, lambda_=1))]
fn difference_family_existence(v: u32, k: usize, lambda_: u32) -> Option<bool> {
    match crate::difference_family_existence(v, k, lambda_) {
        Existence::Exists => Some(true),
        Existence::Impossible => Some(false),
        Existence::Unknown => None,
    }
}

/// Check a candidate difference family over Z/nZ.
#[pyfunction]
#[pyo3(signature = (n, family, v=None, k=None, lambda_=None))]
fn is_difference_family(
    n: u32,
    family: Vec<Vec<i64>>,
    v: Option<u32>,
    k: Option<usize>,
    lambda_: Option<u32>,
) -> PyResult<bool> {
    if n == 0 {
        return Err(PyValueError::new_err("modulus must be positive"));
    }
    let group = Zmod::new(n);
    Ok(crate::verify::is_difference_family(&group, &family, v, k, lambda_))
}

/// List the (v, k, lambda) triples covered by the built-in database.
#[pyfunction]
fn database_parameters() -> Vec<(u32, usize, u32)> {
    ConstructionDb::new().parameters()
}

/// The diffset Python module.
#[pymodule]
fn diffset(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyDifferenceFamily>()?;
    m.add_function(wrap_pyfunction!(difference_family, m)?)?;
    m.add_function(wrap_pyfunction!(difference_family_existence, m)?)?;
    m.add_function(wrap_pyfunction!(is_difference_family, m)?)?;
    m.add_function(wrap_pyfunction!(database_parameters, m)?)?;
    Ok(())
}
