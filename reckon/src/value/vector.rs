//! Vectors: fixed-length ordered sequences of values
//!
//! Elements are full [`Value`]s, so a vector may hold rationals, percentages
//! or nested aggregates next to plain numbers. Pairwise combination
//! reconciles mismatched lengths before combining: a length-1 operand is
//! repeated across the longer shape, any other mismatch zero-pads the shorter
//! side. Reconciliation builds fresh element lists; neither operand is
//! mutated.

use crate::{ReckonResult, Value};
use nalgebra::DVector;
use serde::Serialize;
use std::fmt;

/// A fixed-length ordered sequence of values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vector {
    elements: Vec<Value>,
}

impl Vector {
    /// Create a vector from raw element values
    pub fn new(elements: Vec<Value>) -> Self {
        Self { elements }
    }

    /// Create a vector from a concrete numeric vector, wrapping every entry
    /// as a `Number` leaf
    pub fn from_dvector(vector: &DVector<f64>) -> Self {
        Self {
            elements: vector.iter().map(|n| Value::Number(*n)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn elements(&self) -> &[Value] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<Value> {
        self.elements
    }

    /// Scalar reduction: the sum of every element's numeric view
    pub fn sum(&self) -> ReckonResult<f64> {
        let mut total = 0.0;
        for element in &self.elements {
            total += element.as_number()?;
        }
        Ok(total)
    }

    /// Map a pure scalar function over every numeric leaf, preserving shape
    ///
    /// Composite elements recurse through their own scalar-fn application.
    pub fn apply_scalar_fn(&self, f: &dyn Fn(f64) -> f64) -> ReckonResult<Vector> {
        self.map_elements(&|element| element.apply_scalar_fn(f))
    }

    /// Element-wise fallible map producing a same-length vector
    pub fn map_elements(
        &self,
        f: &dyn Fn(&Value) -> ReckonResult<Value>,
    ) -> ReckonResult<Vector> {
        let elements = self
            .elements
            .iter()
            .map(f)
            .collect::<ReckonResult<Vec<_>>>()?;
        Ok(Vector::new(elements))
    }

    /// Combine with another vector element-wise after shape reconciliation
    pub fn pairwise(
        &self,
        other: &Vector,
        f: &dyn Fn(&Value, &Value) -> ReckonResult<Value>,
    ) -> ReckonResult<Vector> {
        let (lhs, rhs) = reconciled_elements(&self.elements, &other.elements);
        let elements = lhs
            .iter()
            .zip(&rhs)
            .map(|(a, b)| f(a, b))
            .collect::<ReckonResult<Vec<_>>>()?;
        Ok(Vector::new(elements))
    }
}

/// Reconcile two element lists to a common length
///
/// A length-1 list broadcasts by repetition; otherwise the shorter list is
/// padded with the additive identity. Both inputs are left untouched.
fn reconciled_elements(a: &[Value], b: &[Value]) -> (Vec<Value>, Vec<Value>) {
    if a.len() == b.len() {
        return (a.to_vec(), b.to_vec());
    }
    if a.len() == 1 {
        return (vec![a[0].clone(); b.len()], b.to_vec());
    }
    if b.len() == 1 {
        return (a.to_vec(), vec![b[0].clone(); a.len()]);
    }
    let target = a.len().max(b.len());
    (padded(a, target), padded(b, target))
}

fn padded(elements: &[Value], target: usize) -> Vec<Value> {
    let mut padded = elements.to_vec();
    padded.resize(target, Value::Number(0.0));
    padded
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", element)?;
        }
        write!(f, "}}")
    }
}
