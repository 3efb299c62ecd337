use crate::config::AprioriConfig;
use crate::engine::{apriori_from_matrix, MiningResult};
use numpy::ndarray::{Array1, Array2};
use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

type PyRule = (Vec<usize>, Vec<usize>, usize, f64, f64);

#[pymodule]
fn basket(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori_py, m)?)?;
    Ok(())
}

#[pyfunction]
#[pyo3(name = "apriori", signature = (transactions, min_support, min_confidence=0.5, max_len=None))]
fn apriori_py<'py>(
    py: Python<'py>,
    transactions: PyReadonlyArray2<'py, i32>,
    min_support: f64,
    min_confidence: f64,
    max_len: Option<usize>,
) -> PyResult<Bound<'py, PyDict>> {
    let mut config = AprioriConfig::new(min_support, min_confidence);
    config.max_len = max_len;

    let result = apriori_from_matrix(&config, transactions.as_array())
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let (itemsets, supports) = levels_to_arrays(py, &result)?;
    let closed: Vec<Vec<usize>> = result
        .closed
        .keys()
        .map(|itemset| itemset.items().to_vec())
        .collect();
    let maximal: Vec<Vec<usize>> = result
        .maximal
        .iter()
        .map(|itemset| itemset.items().to_vec())
        .collect();
    let rules: Vec<PyRule> = result
        .rules
        .iter()
        .map(|rule| {
            (
                rule.antecedent.items().to_vec(),
                rule.consequent.items().to_vec(),
                rule.support,
                rule.confidence,
                rule.lift,
            )
        })
        .collect();

    let out = PyDict::new(py);
    out.set_item("frequent", itemsets)?;
    out.set_item("supports", supports)?;
    out.set_item("closed", closed)?;
    out.set_item("maximal", maximal)?;
    out.set_item("rules", rules)?;
    Ok(out)
}

/// One `(n_itemsets, size)` array and one support vector per itemset size.
fn levels_to_arrays<'py>(
    py: Python<'py>,
    result: &MiningResult<usize>,
) -> PyResult<(Vec<Bound<'py, PyArray2<usize>>>, Vec<Bound<'py, PyArray1<usize>>>)> {
    let mut itemsets = Vec::new();
    let mut supports = Vec::new();

    for itemset_size in 1..=result.max_itemset_size() {
        let level: Vec<_> = result
            .frequent
            .values()
            .filter(|record| record.itemset.len() == itemset_size)
            .collect();
        if level.is_empty() {
            continue;
        }

        let mut data = Vec::with_capacity(level.len() * itemset_size);
        for record in &level {
            data.extend_from_slice(record.itemset.items());
        }
        let array = Array2::from_shape_vec((level.len(), itemset_size), data)
            .map_err(|_| PyValueError::new_err("Failed to create array"))?;
        let counts: Array1<usize> = level.iter().map(|record| record.support).collect();

        itemsets.push(array.into_pyarray(py));
        supports.push(counts.into_pyarray(py));
    }

    Ok((itemsets, supports))
}
