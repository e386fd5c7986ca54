use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

use crate::mining::{
    self, encode_matrix, Algorithm, FrequentItemsetMiner, MiningConfig, MiningError, PerformanceRecord,
    Recommendation, Rule,
};

fn to_py_err(err: MiningError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn rule_to_dict<'py>(py: Python<'py>, rule: &Rule) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("antecedents", PyTuple::new_bound(py, &rule.antecedent))?;
    dict.set_item("consequents", PyTuple::new_bound(py, &rule.consequent))?;
    dict.set_item("support", rule.support)?;
    dict.set_item("confidence", rule.confidence)?;
    dict.set_item("lift", rule.lift)?;
    Ok(dict)
}

fn record_to_dict<'py>(py: Python<'py>, record: &PerformanceRecord) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("Algorithm", record.algorithm.name())?;
    dict.set_item("Time (ms)", record.elapsed_ms)?;
    dict.set_item("Rules Generated", record.rule_count)?;
    dict.set_item("Memory (MB)", record.memory_delta_mb)?;
    dict.set_item("Support", record.min_support)?;
    dict.set_item("Confidence", record.min_confidence)?;
    Ok(dict)
}

fn recommendation_to_dict<'py>(
    py: Python<'py>,
    recommendation: &Recommendation,
) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("product", &recommendation.product)?;
    dict.set_item("confidence", recommendation.confidence)?;
    dict.set_item("support", recommendation.support)?;
    dict.set_item("strength", recommendation.strength.to_string())?;
    Ok(dict)
}

fn mined_to_py<'py>(
    py: Python<'py>,
    rules: &[Rule],
    record: &PerformanceRecord,
) -> PyResult<(Vec<Bound<'py, PyDict>>, Bound<'py, PyDict>)> {
    let rules = rules
        .iter()
        .map(|rule| rule_to_dict(py, rule))
        .collect::<PyResult<Vec<_>>>()?;
    Ok((rules, record_to_dict(py, record)?))
}

#[pyfunction]
#[pyo3(name = "mine_apriori", signature = (transactions, min_support = 0.2, min_confidence = 0.5))]
fn mine_apriori_py<'py>(
    py: Python<'py>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<(Vec<Bound<'py, PyDict>>, Bound<'py, PyDict>)> {
    let (rules, record) = py
        .allow_threads(|| mining::mine_apriori(&transactions, min_support, min_confidence))
        .map_err(to_py_err)?;
    mined_to_py(py, &rules, &record)
}

#[pyfunction]
#[pyo3(name = "mine_eclat", signature = (transactions, min_support = 0.2, min_confidence = 0.5))]
fn mine_eclat_py<'py>(
    py: Python<'py>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<(Vec<Bound<'py, PyDict>>, Bound<'py, PyDict>)> {
    let (rules, record) = py
        .allow_threads(|| mining::mine_eclat(&transactions, min_support, min_confidence))
        .map_err(to_py_err)?;
    mined_to_py(py, &rules, &record)
}

#[pyfunction]
#[pyo3(name = "compare", signature = (transactions, min_support = 0.2, min_confidence = 0.5))]
fn compare_py<'py>(
    py: Python<'py>,
    transactions: Vec<Vec<String>>,
    min_support: f64,
    min_confidence: f64,
) -> PyResult<(Bound<'py, PyDict>, Bound<'py, PyDict>)> {
    let comparison = py
        .allow_threads(|| mining::compare(&transactions, min_support, min_confidence))
        .map_err(to_py_err)?;
    let (apriori, eclat) = comparison.records();
    Ok((record_to_dict(py, &apriori)?, record_to_dict(py, &eclat)?))
}

#[pyfunction]
#[pyo3(name = "recommend", signature = (transactions, product, min_support = None, min_confidence = None))]
fn recommend_py<'py>(
    py: Python<'py>,
    transactions: Vec<Vec<String>>,
    product: &str,
    min_support: Option<f64>,
    min_confidence: Option<f64>,
) -> PyResult<Vec<Bound<'py, PyDict>>> {
    let preset = MiningConfig::for_recommendations();
    let config = MiningConfig::new(
        min_support.unwrap_or(preset.min_support),
        min_confidence.unwrap_or(preset.min_confidence),
    );
    let product = product.to_owned();
    let recommendations = py
        .allow_threads(|| {
            let mined = mining::run(Algorithm::Apriori, &transactions, &config)?;
            Ok::<_, MiningError>(mining::recommend(&mined.rules, &product))
        })
        .map_err(to_py_err)?;
    recommendations
        .iter()
        .map(|recommendation| recommendation_to_dict(py, recommendation))
        .collect()
}

#[pyfunction]
#[pyo3(name = "frequent_itemsets_from_dense", signature = (transactions, labels, min_support = 0.2, algorithm = "eclat"))]
fn frequent_itemsets_from_dense_py(
    transactions: PyReadonlyArray2<'_, i32>,
    labels: Vec<String>,
    min_support: f64,
    algorithm: &str,
) -> PyResult<Vec<(Vec<String>, usize)>> {
    let algorithm = match algorithm.to_ascii_lowercase().as_str() {
        "apriori" => Algorithm::Apriori,
        "eclat" => Algorithm::Eclat,
        other => {
            return Err(PyValueError::new_err(format!(
                "unknown algorithm '{other}', expected 'apriori' or 'eclat'"
            )))
        }
    };
    MiningConfig::default()
        .with_min_support(min_support)
        .validate()
        .map_err(to_py_err)?;

    let db = encode_matrix(transactions.as_array(), &labels).map_err(to_py_err)?;
    let frequent = algorithm.mine(&db, min_support).map_err(to_py_err)?;
    Ok(frequent.named())
}

#[pymodule]
fn basket(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine_apriori_py, m)?)?;
    m.add_function(wrap_pyfunction!(mine_eclat_py, m)?)?;
    m.add_function(wrap_pyfunction!(compare_py, m)?)?;
    m.add_function(wrap_pyfunction!(recommend_py, m)?)?;
    m.add_function(wrap_pyfunction!(frequent_itemsets_from_dense_py, m)?)?;
    Ok(())
}
